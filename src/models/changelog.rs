use serde::{Deserialize, Serialize};

use super::Commit;
use crate::feed::GroupedByDate;

/// One page of the aggregated feed, plus the same items grouped by day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogResponse {
    pub total_count: usize,
    pub page_number: usize,
    pub page_size: usize,
    pub has_more: bool,
    /// Some repository filled its whole fetch window; older history exists upstream
    pub truncated: bool,
    pub grouped_by_date: GroupedByDate,
    pub items: Vec<Commit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatestResponse {
    pub total: usize,
    pub limit: usize,
    pub commits: Vec<Commit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyResponse {
    pub success: bool,
    pub message: String,
}
