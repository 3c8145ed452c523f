use serde::Deserialize;

/// One build as the server sends it.
///
/// Every field may be missing from the payload (the field projection decides
/// what comes back, and finished builds omit `percentageComplete`), so the
/// whole record falls back to defaults.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct BuildListItem {
    pub id: i64,

    pub number: String,

    /// raw status code, e.g. "SUCCESS", "FAILURE", "ERROR", "UNKNOWN".
    pub status: String,

    #[serde(rename = "statusText")]
    pub status_text: String,

    pub running: bool,

    #[serde(rename = "percentageComplete")]
    pub progress: i32,

    #[serde(rename = "buildTypeId")]
    pub build_type_id: String,

    #[serde(rename = "branchName")]
    pub branch_name: String,

    #[serde(rename = "startDate")]
    pub start_date: String,

    #[serde(rename = "finishDate")]
    pub finish_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_item() {
        let content = r#"{
  "id": 1024,
  "buildTypeId": "Proj_Build",
  "number": "1.2.3-rc",
  "status": "FAILURE",
  "state": "finished",
  "branchName": "refs/heads/feature/x",
  "href": "/httpAuth/app/rest/builds/id:1024",
  "statusText": "Tests failed: 3, passed: 120",
  "running": false,
  "startDate": "20230615T143022+0000",
  "finishDate": "20230615T150000+0000"
}"#;

        let item = serde_json::from_str::<BuildListItem>(content).unwrap();

        assert_eq!(item.id, 1024);
        assert_eq!(item.number, "1.2.3-rc");
        assert_eq!(item.status, "FAILURE");
        assert_eq!(item.status_text, "Tests failed: 3, passed: 120");
        assert!(!item.running);
        assert_eq!(item.progress, 0);
        assert_eq!(item.build_type_id, "Proj_Build");
        assert_eq!(item.branch_name, "refs/heads/feature/x");
        assert_eq!(item.start_date, "20230615T143022+0000");
        assert_eq!(item.finish_date, "20230615T150000+0000");
    }

    #[test]
    fn test_deserialize_running_item_without_finish_date() {
        let content = r#"{"id":7,"number":"8","status":"SUCCESS","running":true,"percentageComplete":42,"startDate":"20230615T143022+0000"}"#;

        let item = serde_json::from_str::<BuildListItem>(content).unwrap();

        assert!(item.running);
        assert_eq!(item.progress, 42);
        assert_eq!(item.finish_date, "");
        assert_eq!(item.branch_name, "");
    }

    #[test]
    fn test_deserialize_wrong_type_is_error() {
        assert!(serde_json::from_str::<BuildListItem>(r#"{"id":"not-a-number"}"#).is_err());
    }
}
