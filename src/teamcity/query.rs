use crate::config::TcConfig;
use crate::constant::log::*;
use crate::tc_error::TcError;
use crate::teamcity::http_teamcity_async_client::TeamCityHttpClient;
use crate::teamcity::teamcity_async_client::{query, TeamCityAsyncClient};
use crate::teamcity::teamcity_endpoint::build_info::BuildInfo;
use crate::teamcity::teamcity_endpoint::builds_info::{BuildsInfo, BUILD_FIELDS, RUNNING_BUILD_FIELDS};
use crate::teamcity::teamcity_endpoint::locator::Locator;
use crate::teamcity::teamcity_model::build::Build;
use crate::teamcity::teamcity_model::build_list::BuildList;
use crate::teamcity::teamcity_model::build_list_item::BuildListItem;
use tracing::{debug, error};

/// # try get teamcity client
///
/// Build an http client from stored settings. Guest access only needs the
/// url; otherwise username and password are required too.
pub fn try_get_teamcity_client(config: &TcConfig) -> Result<TeamCityHttpClient, TcError> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| TcError::MissingParam(ERR_NEED_A_TEAMCITY_URL.to_string()))?;

    if config.guest {
        return TeamCityHttpClient::new_guest(url, config.timeout());
    }

    let username = config
        .username
        .as_deref()
        .ok_or_else(|| TcError::MissingParam(ERR_NEED_A_TEAMCITY_USERNAME.to_string()))?;
    let pwd = config
        .password
        .as_deref()
        .ok_or_else(|| TcError::MissingParam(ERR_NEED_A_TEAMCITY_PWD.to_string()))?;

    TeamCityHttpClient::new(url, username, pwd, config.timeout())
}

/// # BuildQuery
///
/// Build lookups against one TeamCity server. Holds nothing but the client,
/// so it can be shared (wrap the client in an `Arc` to share that too).
pub struct BuildQuery<C> {
    client: C,
}

impl<C: TeamCityAsyncClient> BuildQuery<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get build by its id.
    pub async fn get_build_by_id(&self, id: i64) -> Result<Build, TcError> {
        debug!(id, "get_build_by_id");

        match query::<BuildListItem, _, _>(&BuildInfo { id }, &self.client).await {
            Ok(item) => {
                debug!(id, "get_build_by_id: ok");
                Ok(Build::from(item))
            }
            Err(e) => {
                error!(id, error = %e, "get_build_by_id failed");
                Err(e)
            }
        }
    }

    /// Get the `count` latest builds of any state and branch, newest first.
    pub async fn get_builds(&self, count: i32) -> Result<Vec<Build>, TcError> {
        self.query_build_list(
            &format!("get_builds({})", count),
            Locator::new().count(count).running_any().any_branch(),
            BUILD_FIELDS,
        )
        .await
    }

    /// Get every build running right now.
    pub async fn get_running_builds(&self) -> Result<Vec<Build>, TcError> {
        self.query_build_list(
            "get_running_builds()",
            Locator::new().running_only().any_branch(),
            RUNNING_BUILD_FIELDS,
        )
        .await
    }

    /// Get the `count` latest builds of one build configuration.
    pub async fn get_builds_for_build_type(
        &self,
        build_type_id: &str,
        count: i32,
    ) -> Result<Vec<Build>, TcError> {
        self.query_build_list(
            &format!("get_builds_for_build_type('{}', {})", build_type_id, count),
            Locator::new()
                .build_type(build_type_id)
                .count(count)
                .running_any()
                .any_branch(),
            BUILD_FIELDS,
        )
        .await
    }

    async fn query_build_list(
        &self,
        operation: &str,
        locator: Locator,
        fields: &'static str,
    ) -> Result<Vec<Build>, TcError> {
        debug!(operation, %locator, "query builds");

        match query::<BuildList, _, _>(&BuildsInfo { locator, fields }, &self.client).await {
            Ok(list) => {
                debug!(
                    operation,
                    count = list.count,
                    received = list.builds.len(),
                    "query builds: ok"
                );
                Ok(Build::from_list(list))
            }
            Err(e) => {
                error!(operation, error = %e, "query builds failed");
                Err(e)
            }
        }
    }
}
