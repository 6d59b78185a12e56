//! Pagination types shared by list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination parameters shared across all list endpoints.
///
/// - `per_page`: 1–100, default 10
/// - `page`: ≥ 1, default 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_per_page", rename = "per-page")]
    pub per_page: u32,
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_per_page() -> u32 {
    10
}

fn default_page() -> u32 {
    1
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            page: default_page(),
        }
    }
}

impl PageRequest {
    /// Clamp `per_page` to the valid range 1–100 and `page` to ≥ 1.
    ///
    /// Call after deserializing from query params to enforce bounds.
    pub fn clamped(self) -> Self {
        Self {
            per_page: self.per_page.clamp(1, 100),
            page: self.page.max(1),
        }
    }
}

/// One page of a listing plus the totals needed to render pagination links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }

    /// Slice an in-memory list the same way the database paginator would.
    pub fn from_vec(all: Vec<T>, request: PageRequest) -> Self {
        let PageRequest { per_page, page } = request.clamped();
        let total_items = all.len() as u64;
        let total_pages = total_items.div_ceil(per_page as u64);
        let skip = u64::from(page - 1) * u64::from(per_page);
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let items = all
            .into_iter()
            .skip(skip)
            .take(per_page as usize)
            .collect();
        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
        }
    }
}
