use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RepositoryRef;
use crate::github::RawCommit;

/// A commit in the aggregated feed, tagged with the repository it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub author_name: String,
    pub author_date: DateTime<Utc>,
    pub author_avatar_url: Option<String>,
    pub commit_url: String,
    pub repo: RepositoryRef,
}

impl Commit {
    /// Tag a raw upstream record with its owning repository.
    ///
    /// Returns `None` when the record carries no author date, since it
    /// cannot be placed in a time-ordered feed.
    pub fn from_raw(raw: RawCommit, repo: &RepositoryRef) -> Option<Self> {
        let Some(signature) = raw.commit.author else {
            tracing::debug!("Skipping undated commit {} in {}", raw.sha, repo.name);
            return None;
        };

        Some(Self {
            sha: raw.sha,
            message: raw.commit.message,
            author_name: signature.name,
            author_date: signature.date,
            author_avatar_url: raw.author.and_then(|a| a.avatar_url),
            commit_url: raw.html_url,
            repo: repo.clone(),
        })
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }

    pub fn short_sha(&self) -> &str {
        self.sha.get(..7).unwrap_or(&self.sha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{raw_commit, repo_ref};

    #[test]
    fn from_raw_tags_repository() {
        let repo = repo_ref("alpha", false);
        let commit = Commit::from_raw(raw_commit("abc1234def", "2024-01-02T10:00:00Z"), &repo)
            .expect("dated commit");

        assert_eq!(commit.repo, repo);
        assert_eq!(commit.author_name, "Ada");
        assert_eq!(commit.commit_url, "https://github.com/octo/alpha/commit/abc1234def");
        assert_eq!(commit.short_sha(), "abc1234");
    }

    #[test]
    fn from_raw_skips_undated_records() {
        let mut raw = raw_commit("abc", "2024-01-02T10:00:00Z");
        raw.commit.author = None;
        assert!(Commit::from_raw(raw, &repo_ref("alpha", false)).is_none());
    }

    #[test]
    fn summary_is_first_line() {
        let mut raw = raw_commit("abc", "2024-01-02T10:00:00Z");
        raw.commit.message = "Fix parser\n\nLonger body".to_string();
        let commit = Commit::from_raw(raw, &repo_ref("alpha", false)).expect("dated commit");
        assert_eq!(commit.summary(), "Fix parser");
        assert_eq!(commit.short_sha(), "abc");
    }
}
