use crate::teamcity::teamcity_endpoint::locator::Locator;
use crate::teamcity::teamcity_endpoint::Endpoint;
use reqwest::Method;

pub const BUILD_FIELDS: &str = "build(id,number,status,state,buildTypeId,statusText,running,percentageComplete,branchName,startDate,finishDate)";

/// running builds have no finish date yet.
pub const RUNNING_BUILD_FIELDS: &str = "build(id,number,status,state,buildTypeId,statusText,running,percentageComplete,branchName,startDate)";

/// Endpoint for retrieving builds matching a locator.
pub struct BuildsInfo {
    pub locator: Locator,

    /// field projection, one of the `*_FIELDS` constants.
    pub fields: &'static str,
}

impl Endpoint for BuildsInfo {
    /// HTTP method used (GET).
    fn method(&self) -> Method {
        Method::GET
    }

    /// API path for retrieving build list.
    fn endpoint(&self) -> String {
        "builds".to_string()
    }

    fn query(&self) -> Option<Vec<(&'static str, String)>> {
        Some(vec![
            ("locator", self.locator.to_string()),
            ("fields", self.fields.to_string()),
        ])
    }
}
