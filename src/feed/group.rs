use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::models::Commit;

/// Calendar date (UTC, `YYYY-MM-DD`) to commits, in order of first appearance.
pub type GroupedByDate = IndexMap<String, Vec<Commit>>;

pub fn date_key(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn group_by_date(commits: &[Commit]) -> GroupedByDate {
    let mut groups = GroupedByDate::new();
    for commit in commits {
        groups
            .entry(date_key(&commit.author_date))
            .or_default()
            .push(commit.clone());
    }
    groups
}
