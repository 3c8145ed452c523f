mod cli;
mod pretty_log;

use crate::cli::{cli_do_login, cli_show_builds, cli_show_config, BuildsRequest};
use crate::pretty_log::{colored_println, ThemeColor};
use clap::{Parser, Subcommand};
use std::io::stdout;
use std::path::PathBuf;
use teamcity_builds::config::TcConfig;
use teamcity_builds::default_config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tcb",
  author,
  version,
  about(env!("CARGO_PKG_DESCRIPTION")),
  long_about = None,
  arg_required_else_help = true
)]
struct Cli {
    /// Config file, or a directory holding it.
    /// default: ~/.tc-builds.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log requests and results to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check and store TeamCity connection settings.
    Login {
        /// TeamCity root URL.
        #[arg(long)]
        url: String,

        /// Username of TeamCity.
        #[arg(short, long)]
        username: Option<String>,

        /// Password of TeamCity.
        #[arg(short, long)]
        pwd: Option<String>,

        /// Use guest access instead of a username and password.
        #[arg(short, long)]
        guest: bool,

        /// Request timeout in seconds.
        #[arg(short, long)]
        timeout: Option<u64>,
    },
    /// Show one build.
    Build {
        /// build id (not the display number).
        id: i64,
    },
    /// Show the latest builds of any state and branch.
    Builds {
        /// how many builds.
        #[arg(short, long, default_value_t = default_config::BUILD_COUNT, allow_negative_numbers = true)]
        count: i32,
    },
    /// Show the builds running right now.
    Running,
    /// Show the latest builds of one build configuration.
    BuildType {
        /// build configuration id, e.g. "Proj_Build".
        id: String,

        /// how many builds.
        #[arg(short, long, default_value_t = default_config::BUILD_COUNT, allow_negative_numbers = true)]
        count: i32,
    },
    /// Show the stored settings.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let mut stdout = stdout();
    let config_path = cli.config.as_deref();

    let Some(command) = cli.command else {
        return;
    };

    let result = match command {
        Commands::Login {
            url,
            username,
            pwd,
            guest,
            timeout,
        } => {
            cli_do_login(
                &mut stdout,
                config_path,
                TcConfig {
                    url: Some(url),
                    username,
                    password: pwd,
                    guest,
                    timeout_secs: timeout,
                },
            )
            .await
        }
        Commands::Build { id } => {
            cli_show_builds(&mut stdout, config_path, BuildsRequest::ById(id)).await
        }
        Commands::Builds { count } => {
            cli_show_builds(&mut stdout, config_path, BuildsRequest::Latest(count)).await
        }
        Commands::Running => {
            cli_show_builds(&mut stdout, config_path, BuildsRequest::Running).await
        }
        Commands::BuildType { id, count } => {
            cli_show_builds(
                &mut stdout,
                config_path,
                BuildsRequest::ForBuildType {
                    build_type_id: id,
                    count,
                },
            )
            .await
        }
        Commands::Config => cli_show_config(&mut stdout, config_path),
    };

    if let Err(e) = result {
        colored_println(&mut stdout, ThemeColor::Error, &e.to_string());
        std::process::exit(1);
    }
}
