//! Build metadata from a TeamCity server's REST API.
//!
//! ```no_run
//! use teamcity_builds::teamcity::http_teamcity_async_client::TeamCityHttpClient;
//! use teamcity_builds::teamcity::query::BuildQuery;
//!
//! # async fn run() -> Result<(), teamcity_builds::tc_error::TcError> {
//! let client = TeamCityHttpClient::new("https://tc.example.com", "someone", "secret", None)?;
//! let builds = BuildQuery::new(client).get_builds(10).await?;
//! for build in builds {
//!     println!("#{} {}", build.number, build.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constant;
pub mod default_config;
pub mod tc_error;
pub mod teamcity;
