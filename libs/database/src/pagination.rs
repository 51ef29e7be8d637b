//! Page requests and page results.
//!
//! A [`PageRequest`] is a zero-based page index, a positive page size and a
//! [`Sort`]. A [`Page`] is the slice of rows it selected plus the total row
//! count, from which the remaining page metadata is derived.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_PAGE_SIZE: u64 = 5;
pub const DEFAULT_SORT_FIELD: &str = "id";
/// Largest size PostgreSQL accepts as a `LIMIT` (a signed 64-bit integer).
pub const MAX_PAGE_SIZE: u64 = i64::MAX as u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("size: must be greater than 0")]
    ZeroPageSize,

    #[error("size: must be at most {MAX_PAGE_SIZE}")]
    PageSizeTooLarge,

    #[error("sort: unknown direction '{0}', expected 'asc' or 'desc'")]
    InvalidDirection(String),

    #[error("sort: field must not be empty")]
    EmptySortField,

    #[error("sort: unknown field '{0}'")]
    UnknownSortField(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Direction {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(PaginationError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => f.write_str("asc"),
            Direction::Desc => f.write_str("desc"),
        }
    }
}

impl From<Direction> for sea_orm::Order {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Asc => sea_orm::Order::Asc,
            Direction::Desc => sea_orm::Order::Desc,
        }
    }
}

/// Sort key: a field name as it appears in the API plus a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: Direction,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }

    /// The field converted to a snake_case column name (`quantityAvailable` -> `quantity_available`).
    pub fn column_name(&self) -> String {
        to_snake_case(&self.field)
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::asc(DEFAULT_SORT_FIELD)
    }
}

/// Parses `field` or `field,direction`.
impl FromStr for Sort {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(',') {
            Some((field, direction)) => (field.trim(), direction.parse()?),
            None => (s.trim(), Direction::Asc),
        };

        if field.is_empty() {
            return Err(PaginationError::EmptySortField);
        }

        Ok(Self::new(field, direction))
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Sort,
}

impl PageRequest {
    /// `size` must be in `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u64, size: u64) -> Result<Self, PaginationError> {
        if size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        if size > MAX_PAGE_SIZE {
            return Err(PaginationError::PageSizeTooLarge);
        }

        Ok(Self {
            page,
            size,
            sort: Sort::default(),
        })
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Index of the first row of this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
        }
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u64,
    pub page_size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            items,
            page_number: request.page,
            page_size: request.size,
            total_elements,
        }
    }

    pub fn empty(request: &PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Rows on this page; 0 for a page past the end.
    pub fn number_of_elements(&self) -> u64 {
        self.items.len() as u64
    }

    /// `ceil(total_elements / page_size)`, 0 when there are no rows.
    pub fn total_pages(&self) -> u64 {
        if self.total_elements == 0 || self.page_size == 0 {
            0
        } else {
            self.total_elements.div_ceil(self.page_size)
        }
    }

    /// Swap in new rows, keeping the position and total.
    pub fn replace_items<U>(self, items: Vec<U>) -> Page<U> {
        Page {
            items,
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
        }
    }
}

/// Slice an already ordered, fully materialised row set.
pub fn paginate_vec<T>(rows: Vec<T>, request: &PageRequest) -> Page<T> {
    let total = rows.len() as u64;
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let size = usize::try_from(request.size).unwrap_or(usize::MAX);
    let items = rows.into_iter().skip(offset).take(size).collect();
    Page::new(items, request, total)
}

/// `quantityAvailable` -> `quantity_available`; snake_case input is returned unchanged.
pub fn to_snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, ch) in field.trim().chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
