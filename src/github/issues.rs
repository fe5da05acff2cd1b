use serde::{Deserialize, Serialize};

/// Issue as recorded in a corpus snapshot.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GitHubIssue {
    pub number: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    #[serde(default)]
    pub milestone: Option<GitHubMilestone>,
    /// The issue number is known but its content was never mirrored.
    #[serde(default)]
    pub not_exist: bool,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GitHubLabel {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GitHubMilestone {
    pub title: String,
}

impl GitHubIssue {
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }

    pub fn milestone_title(&self) -> Option<&str> {
        self.milestone.as_ref().map(|m| m.title.as_str())
    }
}

/// The `{number, title}` projection written to the data module.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectedIssue {
    pub number: i32,
    pub title: String,
}
