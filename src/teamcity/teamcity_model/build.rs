use crate::teamcity::teamcity_model::build_list::BuildList;
use crate::teamcity::teamcity_model::build_list_item::BuildListItem;
use crate::teamcity::teamcity_model::build_status::BuildStatus;
use crate::teamcity::teamcity_model::tc_date::{date_from_tc_string, is_zero_time};
use chrono::{DateTime, Utc};

/// # Build
///
/// A build as handed to callers: normalized status, parsed dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    pub id: i64,

    /// display number, not necessarily numeric.
    pub number: String,

    pub status: BuildStatus,

    pub status_text: String,

    /// completion percentage, only meaningful while running.
    pub progress: i32,

    pub build_type_id: String,

    pub branch_name: String,

    /// zero time when absent or unparseable.
    pub start_date: DateTime<Utc>,

    /// zero time when the build has not finished, or the date is unparseable.
    pub finish_date: DateTime<Utc>,
}

impl Build {
    pub fn is_finished(&self) -> bool {
        self.status != BuildStatus::Running && !is_zero_time(&self.finish_date)
    }

    pub fn from_list(list: BuildList) -> Vec<Build> {
        list.into_iter().map(Build::from).collect()
    }
}

impl From<BuildListItem> for Build {
    fn from(item: BuildListItem) -> Self {
        Build {
            status: BuildStatus::from_wire(item.running, &item.status),
            start_date: date_from_tc_string(&item.start_date),
            finish_date: date_from_tc_string(&item.finish_date),
            id: item.id,
            number: item.number,
            status_text: item.status_text,
            progress: item.progress,
            build_type_id: item.build_type_id,
            branch_name: item.branch_name,
        }
    }
}
