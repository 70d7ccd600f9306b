//! Pagination arithmetic shared by the relay and the client screens

use serde::{Deserialize, Serialize};

/// Page size used by the browse screen and the movies relay default
pub const MOVIES_PAGE_SIZE: u32 = 12;

/// Page size used by the rentals tables and the rentals relay default
pub const RENTALS_PAGE_SIZE: u32 = 5;

/// Page size used to pull the whole catalog for the admin chart
pub const CHART_PAGE_SIZE: u32 = 9999;

/// Query parameters understood by paginated upstream endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }
}

/// Number of pages needed to show `count` items, `ceil(count / page_size)`
pub fn total_pages(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = count.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Cursor over the pages of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: u32,
    total: u32,
}

impl Pager {
    /// Build a pager from the upstream item count
    pub fn from_count(current: u32, count: u64, page_size: u32) -> Self {
        Self {
            current: current.max(1),
            total: total_pages(count, page_size),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Page to show after "Previous", staying put on the first page
    pub fn previous(&self) -> u32 {
        if self.has_previous() {
            self.current - 1
        } else {
            self.current
        }
    }

    /// Page to show after "Next", staying put on the last page
    pub fn next(&self) -> u32 {
        if self.has_next() {
            self.current + 1
        } else {
            self.current
        }
    }

    /// Every page number, in order
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total
    }
}
