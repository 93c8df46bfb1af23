use serde::{Deserialize, Serialize};

/// Row identifier. Writes accept any integer; only `1..=N` name real rows.
pub type RowId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub value: String,
}

impl Row {
    pub fn new(id: RowId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// Position of a row in the order overlay.
///
/// Rows the overlay does not mention carry [`Rank::UNPOSITIONED`], which sorts
/// after every explicit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(pub usize);

impl Rank {
    pub const UNPOSITIONED: Rank = Rank(usize::MAX);

    pub fn is_positioned(self) -> bool {
        self != Self::UNPOSITIONED
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub search_term: String,
    pub page: i64,
    pub page_size: i64,
}

impl PageQuery {
    pub const DEFAULT_PAGE_SIZE: i64 = 20;

    pub fn new(search_term: impl Into<String>, page: i64, page_size: i64) -> Self {
        Self {
            search_term: search_term.into(),
            page,
            page_size,
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(String::new(), 0, Self::DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub rows: Vec<Row>,
    pub total_matching: usize,
    pub page: i64,
    pub has_more: bool,
}

impl PageResult {
    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|row| row.id).collect()
    }
}
