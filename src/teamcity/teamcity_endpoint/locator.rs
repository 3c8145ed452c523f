use std::fmt::{Display, Formatter};

/// # Locator
///
/// TeamCity's filter mini-language: `key:value` clauses joined by `,`, kept in
/// the order they were added.
///
/// ```
/// use teamcity_builds::teamcity::teamcity_endpoint::locator::Locator;
///
/// let locator = Locator::new().count(5).running_any().any_branch();
/// assert_eq!(locator.to_string(), "count:5,running:any,branch:default:any");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Locator {
    clauses: Vec<String>,
}

impl Locator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clause(mut self, key: &str, value: impl Display) -> Self {
        self.clauses.push(format!("{}:{}", key, value));
        self
    }

    pub fn id(self, id: i64) -> Self {
        self.clause("id", id)
    }

    /// passed through as-is, zero and negative included.
    pub fn count(self, count: i32) -> Self {
        self.clause("count", count)
    }

    pub fn running_only(self) -> Self {
        self.clause("running", "true")
    }

    /// running and finished builds alike.
    pub fn running_any(self) -> Self {
        self.clause("running", "any")
    }

    /// builds of every branch, not only the default one.
    pub fn any_branch(self) -> Self {
        self.clause("branch", "default:any")
    }

    /// the id is form-escaped first, so `:` and `,` inside it cannot break the
    /// clause list.
    pub fn build_type(self, build_type_id: &str) -> Self {
        let escaped: String = url::form_urlencoded::byte_serialize(build_type_id.as_bytes()).collect();
        self.clause("buildType", escaped)
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.clauses.join(","))
    }
}
