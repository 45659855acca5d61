use serde::{Deserialize, Serialize};

pub const FIRST_PAGE: u32 = 1;

/// Pagination metadata for the currently displayed result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// 1-based page currently requested
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
}

impl PageState {
    pub fn new(current_page: u32) -> Self {
        Self {
            current_page,
            total_pages: 0,
            total_results: 0,
        }
    }

    /// Adopt totals from a completed fetch, keeping the requested page
    pub fn with_totals(self, total_pages: u32, total_results: u32) -> Self {
        Self {
            total_pages,
            total_results,
            ..self
        }
    }

    /// Request another page, keeping the last known totals until the
    /// next fetch resolves
    pub fn at_page(self, current_page: u32) -> Self {
        Self {
            current_page,
            ..self
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(FIRST_PAGE)
    }
}
