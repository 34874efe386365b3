use serde::{Deserialize, Serialize};

/// Repository metadata attached to every commit in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub name: String,
    pub full_name: String,
    pub url: String,
    pub language: Option<String>,
    pub description: Option<String>,
    pub is_private: bool,
    pub stars: u64,
    pub forks: u64,
}
