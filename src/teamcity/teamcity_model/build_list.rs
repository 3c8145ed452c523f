use crate::teamcity::teamcity_model::build_list_item::BuildListItem;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct BuildList {
    #[serde(default)]
    pub count: i32,

    /// the server leaves the array out when nothing matched.
    #[serde(rename = "build", default)]
    pub builds: Vec<BuildListItem>,
}

impl IntoIterator for BuildList {
    type Item = BuildListItem;
    type IntoIter = std::vec::IntoIter<BuildListItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.builds.into_iter()
    }
}
