// src/utils/pagination.rs

use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters for paged listings.
/// Kept as raw text so a malformed value falls back to the first page.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// 1-based page number; missing or non-numeric values yield 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

/// Returns the `page`-th slice of `QUESTIONS_PER_PAGE` items.
/// Page 0 and pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
