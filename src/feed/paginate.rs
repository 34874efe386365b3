//! Deterministic windowing over a sorted feed.

use crate::error::{AppError, Result};

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> Result<Self> {
        if page_number < 1 {
            return Err(AppError::InvalidPageRequest(format!(
                "page must be >= 1, got {}",
                page_number
            )));
        }
        if page_size < 1 {
            return Err(AppError::InvalidPageRequest(format!(
                "limit must be >= 1, got {}",
                page_size
            )));
        }

        let to_usize = |v: i64| {
            usize::try_from(v).map_err(|_| AppError::InvalidPageRequest(format!("{} is out of range", v)))
        };

        Ok(Self {
            page_number: to_usize(page_number)?,
            page_size: to_usize(page_size)?,
        })
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of leading feed items this page reaches into.
    pub fn depth(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }

    fn start(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_number: usize,
    pub page_size: usize,
    pub has_more: bool,
}

/// Slice one page out of `feed`. Pages past the end are empty, not errors.
pub fn paginate<T: Clone>(feed: &[T], request: PageRequest) -> Page<T> {
    let total_count = feed.len();
    let start = request.start();

    let items = if start >= total_count {
        Vec::new()
    } else {
        let end = start.saturating_add(request.page_size).min(total_count);
        feed[start..end].to_vec()
    };

    Page {
        items,
        total_count,
        page_number: request.page_number,
        page_size: request.page_size,
        has_more: request.depth() < total_count,
    }
}
