//! Page slicing over already-ordered sequences

use serde::Deserialize;

/// Default items per page
pub const PAGE_SIZE: usize = 10;

/// A requested page (1-indexed) and its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Page `page` at the default page size. Page is clamped to a minimum of 1.
    pub fn new(page: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: PAGE_SIZE,
        }
    }

    /// Override the page size. Clamped to a minimum of 1.
    pub fn with_page_size(self, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..self
        }
    }

    /// Parse a raw `page` query value.
    ///
    /// Missing, non-integer and non-positive values all fall back to page 1.
    /// An integer too large to represent lands past the end, not on page 1.
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        let digits = raw.trim();
        let digits = digits.strip_prefix('+').unwrap_or(digits);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::default();
        }
        Self::new(digits.parse::<usize>().unwrap_or(usize::MAX))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Query parameters for pagination
///
/// `page` is kept as a string so a malformed value degrades to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
}

impl From<PaginationParams> for PageRequest {
    fn from(params: PaginationParams) -> Self {
        Self::from_query(params.page.as_deref())
    }
}

/// Return the slice of `items` that falls on `page`.
///
/// `items` must already be in a stable order. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: PageRequest) -> &[T] {
    let start = page.offset();
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page.page_size()).min(items.len());
    &items[start..end]
}
