//! Page-number pagination primitives shared by the trivia backend endpoints.
//!
//! Pagination here is deliberately simple: callers materialise an ordered
//! collection, then [`paginate`] slices out the requested 1-indexed window.
//! Out-of-range pages are empty pages, not errors; callers decide whether an
//! empty page constitutes a not-found condition.

use serde::Serialize;
use thiserror::Error;

/// Number of items served per page when the caller does not specify a size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Validated request for one page of an ordered collection.
///
/// ## Invariants
/// - `number` is at least 1 (pages are 1-indexed).
/// - `size` is at least 1.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(2, 5)?;
/// assert_eq!(request.number(), 2);
/// assert_eq!(request.size(), 5);
/// # Ok::<(), pagination::PageRequestError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: usize,
    size: usize,
}

/// Validation errors returned when constructing a [`PageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers are 1-indexed; zero is never a valid page.
    #[error("page number must be at least 1")]
    ZeroPageNumber,
    /// A page must hold at least one item.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

impl PageRequest {
    /// Construct a request after validating the page number and size.
    pub fn new(number: usize, size: usize) -> Result<Self, PageRequestError> {
        if number == 0 {
            return Err(PageRequestError::ZeroPageNumber);
        }
        if size == 0 {
            return Err(PageRequestError::ZeroPageSize);
        }
        Ok(Self { number, size })
    }

    /// Construct a request for the given page with [`DEFAULT_PAGE_SIZE`].
    pub fn with_default_size(number: usize) -> Result<Self, PageRequestError> {
        Self::new(number, DEFAULT_PAGE_SIZE)
    }

    /// The first page at [`DEFAULT_PAGE_SIZE`].
    #[must_use]
    pub const fn first() -> Self {
        Self {
            number: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    /// 1-indexed page number.
    #[must_use]
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Zero-based offset of the first item on the page.
    const fn offset(&self) -> usize {
        (self.number - 1).saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of an ordered collection plus the collection's total length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, in collection order.
    pub items: Vec<T>,
    /// Total number of items in the unpaginated collection.
    pub total: usize,
    /// 1-indexed page number this slice corresponds to.
    pub number: usize,
    /// Requested page size; the last page may hold fewer items.
    pub size: usize,
}

impl<T> Page<T> {
    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice the 1-indexed window `[(number-1)*size, number*size)` out of
/// `items`, clipped to the collection's bounds.
///
/// Pure and deterministic. A start index at or past the end of `items`
/// yields an empty page rather than an error.
///
/// # Examples
/// ```
/// use pagination::{paginate, PageRequest};
///
/// let items: Vec<u32> = (1..=25).collect();
/// let page = paginate(&items, PageRequest::new(3, 10)?);
/// assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
/// assert_eq!(page.total, 25);
/// # Ok::<(), pagination::PageRequestError>(())
/// ```
#[must_use]
pub fn paginate<T: Clone>(items: &[T], request: PageRequest) -> Page<T> {
    let window = items
        .iter()
        .skip(request.offset())
        .take(request.size())
        .cloned()
        .collect();
    Page {
        items: window,
        total: items.len(),
        number: request.number(),
        size: request.size(),
    }
}
