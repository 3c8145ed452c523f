use crate::pretty_log::{colored_println, print_builds, ThemeColor};
use formatx::formatx;
use std::io::Write;
use std::path::Path;
use teamcity_builds::config::{get_config_file_path, TcConfig};
use teamcity_builds::constant::log::*;
use teamcity_builds::constant::util::mask_secret;
use teamcity_builds::default_config;
use teamcity_builds::tc_error::TcError;
use teamcity_builds::teamcity::query::{try_get_teamcity_client, BuildQuery};
use teamcity_builds::teamcity::teamcity_model::build::Build;

/// What to fetch once a client is available.
pub enum BuildsRequest {
    ById(i64),
    Latest(i32),
    Running,
    ForBuildType { build_type_id: String, count: i32 },
}

pub fn load_config(config_path: Option<&Path>) -> Result<TcConfig, TcError> {
    TcConfig::get_from_path(&get_config_file_path(config_path)).ok_or(TcError::ConfigNotFound)
}

/// # cli do login
///
/// Check the given settings against the server by fetching one build, then
/// store them.
pub async fn cli_do_login<W: Write>(
    out: &mut W,
    config_path: Option<&Path>,
    config: TcConfig,
) -> Result<(), TcError> {
    let client = try_get_teamcity_client(&config)?;
    let is_guest = client.is_guest();

    BuildQuery::new(client).get_builds(1).await.map_err(|e| {
        colored_println(out, ThemeColor::Error, ERR_TEAMCITY_CLIENT_INVALID);
        e
    })?;

    config.save(&get_config_file_path(config_path))?;

    colored_println(
        out,
        ThemeColor::Success,
        if is_guest {
            LOGIN_SUCCESS_AS_GUEST
        } else {
            LOGIN_SUCCESS_BY_PWD
        },
    );
    Ok(())
}

pub async fn cli_show_builds<W: Write>(
    out: &mut W,
    config_path: Option<&Path>,
    request: BuildsRequest,
) -> Result<(), TcError> {
    let config = load_config(config_path)?;
    let client = try_get_teamcity_client(&config)?;

    colored_println(
        out,
        ThemeColor::Second,
        &formatx!(QUERYING_BUILDS, client.rest_root()).unwrap_or_default(),
    );

    let service = BuildQuery::new(client);
    let result: Result<Vec<Build>, TcError> = match request {
        BuildsRequest::ById(id) => service.get_build_by_id(id).await.map(|b| vec![b]),
        BuildsRequest::Latest(count) => service.get_builds(count).await,
        BuildsRequest::Running => service.get_running_builds().await,
        BuildsRequest::ForBuildType {
            build_type_id,
            count,
        } => service.get_builds_for_build_type(&build_type_id, count).await,
    };

    print_builds(out, &result?);
    Ok(())
}

pub fn cli_show_config<W: Write>(out: &mut W, config_path: Option<&Path>) -> Result<(), TcError> {
    let path = get_config_file_path(config_path);
    let config = TcConfig::get_from_path(&path).ok_or(TcError::ConfigNotFound)?;

    colored_println(
        out,
        ThemeColor::Main,
        &formatx!(HINT_CONFIG_PATH, path.display()).unwrap_or_default(),
    );

    let or_not_set = |v: &Option<String>| v.clone().unwrap_or_else(|| HINT_NOT_SET.to_string());
    let lines = [
        ("url", or_not_set(&config.url)),
        ("username", or_not_set(&config.username)),
        (
            "password",
            config
                .password
                .as_deref()
                .map(|p| mask_secret(p, default_config::PWD_VISIBLE_CHARS))
                .unwrap_or_else(|| HINT_NOT_SET.to_string()),
        ),
        ("guest", config.guest.to_string()),
        (
            "timeout_secs",
            config
                .timeout_secs
                .map(|t| t.to_string())
                .unwrap_or_else(|| HINT_NOT_SET.to_string()),
        ),
    ];

    for (key, value) in lines {
        colored_println(
            out,
            ThemeColor::Second,
            &formatx!(HINT_CONFIG_LINE, key, value).unwrap_or_default(),
        );
    }

    Ok(())
}
