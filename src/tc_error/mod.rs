use crate::constant::log::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TcError {
    /// network failure, timeout, or a body that could not be read.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// the server answered with a non-2xx status.
    #[error("{msg} {status} at {url}: {body}", msg = ERR_TEAMCITY_UNEXPECTED_STATUS)]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    /// the body did not match the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("Invalid teamcity url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    MissingParam(String),

    #[error("{msg}", msg = ERR_CONFIG_NOT_FOUND)]
    ConfigNotFound,

    #[error("Config error: {0}")]
    Config(String),
}

impl TcError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TcError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = TcError::Status {
            status: 404,
            url: "https://tc/httpAuth/app/rest/builds/id:1".to_string(),
            body: "Nothing is found".to_string(),
        };

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            format!(
                "{} 404 at https://tc/httpAuth/app/rest/builds/id:1: Nothing is found",
                ERR_TEAMCITY_UNEXPECTED_STATUS
            )
        );
    }

    #[test]
    fn test_decode_error_is_transparent() {
        let json_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let msg = json_err.to_string();
        let err = TcError::from(json_err);

        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), msg);
    }

    #[test]
    fn test_config_not_found_message() {
        assert_eq!(TcError::ConfigNotFound.to_string(), ERR_CONFIG_NOT_FOUND);
    }
}
