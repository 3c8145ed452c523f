use crate::teamcity::teamcity_endpoint::locator::Locator;
use crate::teamcity::teamcity_endpoint::Endpoint;
use reqwest::Method;

/// Endpoint for retrieving one build by its id, with the server's default fields.
pub struct BuildInfo {
    pub id: i64,
}

impl Endpoint for BuildInfo {
    /// HTTP method used (GET).
    fn method(&self) -> Method {
        Method::GET
    }

    /// API path for retrieving one build.
    fn endpoint(&self) -> String {
        format!("builds/{}", Locator::new().id(self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let endpoint = BuildInfo { id: 42 };

        assert_eq!(endpoint.method(), Method::GET);
        assert_eq!(endpoint.endpoint(), "builds/id:42");
        assert!(endpoint.query().is_none());
    }
}
