//! Page-number pagination primitives shared by list endpoints.
//!
//! Endpoints accept a `page` query parameter. Parsing is deliberately
//! lenient: a missing, malformed, or out-of-range value falls back to the
//! first page instead of failing the request, so anonymous browsing never
//! breaks on a bad query string.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Default number of items per page when an endpoint does not override it.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A 1-based page number.
///
/// # Examples
/// ```
/// use pagination::PageNumber;
///
/// assert_eq!(PageNumber::lenient(Some("3")).get(), 3);
/// assert_eq!(PageNumber::lenient(Some("zero")).get(), 1);
/// assert_eq!(PageNumber::lenient(None).get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Construct from a 1-based page number, rejecting zero.
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// Parse a raw query value, falling back to page 1 on any failure.
    ///
    /// Absent values, non-numeric strings, and zero all yield the first
    /// page. This mirrors the tolerant behaviour expected of public list
    /// endpoints.
    pub fn lenient(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.trim().parse::<u32>().ok())
            .and_then(Self::new)
            .unwrap_or(Self::FIRST)
    }

    /// The page number as a plain integer (always ≥ 1).
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(self, page_size: u32) -> u64 {
        u64::from(self.get() - 1) * u64::from(page_size)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// A resolved page request: page number plus page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: PageNumber,
    pub page_size: u32,
}

impl PageRequest {
    /// Build a request with the shared default page size.
    pub fn new(page: PageNumber) -> Self {
        Self {
            page,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size (clamped to at least one item).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Zero-based offset of the first item for this request.
    pub fn offset(&self) -> u64 {
        self.page.offset(self.page_size)
    }

    /// Maximum number of items to return.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(PageNumber::FIRST)
    }
}

/// Envelope carrying one page of items plus position metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> Paginated<T> {
    /// Wrap a page of items with its request metadata.
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page.get(),
            page_size: request.page_size,
            total,
        }
    }

    /// Map the item type, keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
        }
    }

    /// Slice an already-loaded collection into the requested page.
    ///
    /// Useful for adapters that hold all rows in memory; database adapters
    /// should push offset/limit into the query instead.
    pub fn slice(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len() as u64;
        let start = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let items: Vec<T> = all
            .into_iter()
            .skip(start)
            .take(request.page_size as usize)
            .collect();
        Self::new(items, request, total)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, 1)]
    #[case(Some(""), 1)]
    #[case(Some("0"), 1)]
    #[case(Some("-3"), 1)]
    #[case(Some("two"), 1)]
    #[case(Some("2"), 2)]
    #[case(Some(" 7 "), 7)]
    fn lenient_parsing_falls_back_to_first_page(#[case] raw: Option<&str>, #[case] expected: u32) {
        assert_eq!(PageNumber::lenient(raw).get(), expected);
    }

    #[rstest]
    fn offset_accounts_for_page_size() {
        let request = PageRequest::new(PageNumber::new(3).expect("non-zero")).with_page_size(5);
        assert_eq!(request.offset(), 10);
        assert_eq!(request.limit(), 5);
    }

    #[rstest]
    fn page_size_is_clamped_to_one() {
        let request = PageRequest::default().with_page_size(0);
        assert_eq!(request.page_size, 1);
    }

    #[rstest]
    fn slice_returns_requested_window() {
        let all: Vec<u32> = (0..7).collect();
        let request = PageRequest::new(PageNumber::new(2).expect("non-zero")).with_page_size(3);

        let page = Paginated::slice(all, request);

        assert_eq!(page.items, vec![3, 4, 5]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 7);
    }

    #[rstest]
    fn slice_past_the_end_is_empty() {
        let all: Vec<u32> = (0..4).collect();
        let request = PageRequest::new(PageNumber::new(9).expect("non-zero")).with_page_size(4);

        let page = Paginated::slice(all, request);

        assert!(page.items.is_empty());
        assert_eq!(page.total, 4);
    }

    #[rstest]
    fn envelope_serialises_camel_case() {
        let page = Paginated::new(vec![1, 2], PageRequest::default(), 2);
        let json = serde_json::to_value(&page).expect("serialises");
        assert!(json.get("pageSize").is_some());
        assert!(json.get("items").is_some());
    }
}
