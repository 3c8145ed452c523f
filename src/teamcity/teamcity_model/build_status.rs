use strum_macros::Display;

/// Status of a build, collapsed from the server's wider vocabulary.
#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildStatus {
    Running,
    Success,
    Failure,
}

impl BuildStatus {
    /// The running flag wins over the raw status; after that only an exact
    /// "SUCCESS" counts as success, every other code (including unknown ones)
    /// is a failure.
    pub fn from_wire(running: bool, raw_status: &str) -> Self {
        if running {
            BuildStatus::Running
        } else if raw_status == "SUCCESS" {
            BuildStatus::Success
        } else {
            BuildStatus::Failure
        }
    }
}
