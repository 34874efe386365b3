//! Wire records from the upstream REST API.
//!
//! Only the fields the feed uses are modelled; everything else in the
//! upstream payload is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::RepositoryRef;

#[derive(Debug, Clone, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub language: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

impl From<RepoRecord> for RepositoryRef {
    fn from(r: RepoRecord) -> Self {
        RepositoryRef {
            name: r.name,
            full_name: r.full_name,
            url: r.html_url,
            language: r.language,
            description: r.description,
            is_private: r.private,
            stars: r.stargazers_count,
            forks: r.forks_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawCommit {
    pub sha: String,
    pub commit: CommitBody,
    /// Linked platform account; null when the author email matches no user
    pub author: Option<AccountRef>,
    #[serde(default)]
    pub html_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitBody {
    #[serde(default)]
    pub message: String,
    pub author: Option<Signature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRef {
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_commit_tolerates_missing_linked_account() {
        let raw: RawCommit = serde_json::from_value(json!({
            "sha": "0123456789",
            "commit": {
                "message": "Initial commit",
                "author": { "name": "Ada", "email": "ada@example.com", "date": "2024-01-01T08:00:00Z" }
            },
            "author": null,
            "html_url": "https://github.com/octo/alpha/commit/0123456789",
            "parents": []
        }))
        .expect("valid commit payload");

        assert!(raw.author.is_none());
        assert_eq!(raw.commit.author.map(|a| a.name).as_deref(), Some("Ada"));
    }

    #[test]
    fn repo_record_maps_visibility() {
        let record: RepoRecord = serde_json::from_value(json!({
            "name": "alpha",
            "full_name": "octo/alpha",
            "html_url": "https://github.com/octo/alpha",
            "language": "Rust",
            "description": null,
            "private": true,
            "stargazers_count": 4,
            "forks_count": 1
        }))
        .expect("valid repo payload");

        let repo = RepositoryRef::from(record);
        assert!(repo.is_private);
        assert_eq!(repo.url, "https://github.com/octo/alpha");
        assert_eq!(repo.stars, 4);
    }
}
