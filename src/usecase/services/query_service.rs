use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::domain::entities::dataset::{PageQuery, PageResult, Row};
use crate::domain::entities::view::OrderSnapshot;
use crate::usecase::ports::repo::{DatasetRepository, OrderRepository};

/// Filter, order and window one page of rows.
///
/// Callers validate `page >= 0` and `page_size > 0` first; out of range values
/// are clamped here rather than rejected.
pub struct QueryService {
    dataset: Arc<dyn DatasetRepository>,
    order: Arc<dyn OrderRepository>,
}

impl QueryService {
    pub fn new(dataset: Arc<dyn DatasetRepository>, order: Arc<dyn OrderRepository>) -> Self {
        Self { dataset, order }
    }

    pub fn query_page(&self, query: &PageQuery) -> PageResult {
        let order = self.order.snapshot();
        self.query_page_with_order(query, &order)
    }

    /// Same as [`QueryService::query_page`] against a caller-held snapshot.
    pub fn query_page_with_order(&self, query: &PageQuery, order: &OrderSnapshot) -> PageResult {
        let started = Instant::now();
        let rows = self.dataset.rows();

        let matches = self.filter(&query.search_term);
        let total_matching = matches.len();
        let window = page_window(query.page, query.page_size, total_matching);

        let page_rows: Vec<Row> = ordered_indices(&matches, rows, order)
            .skip(window.start)
            .take(window.len())
            .map(|index| rows[index].clone())
            .collect();

        debug!(
            search_len = query.search_term.len(),
            page = query.page,
            page_size = query.page_size,
            overlay_len = order.ids().len(),
            total_matching,
            returned = page_rows.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "page query"
        );

        PageResult {
            rows: page_rows,
            total_matching,
            page: query.page,
            has_more: has_more(query.page, query.page_size, total_matching),
        }
    }

    /// Number of rows whose value contains `search_term`, ignoring case.
    pub fn count_matching(&self, search_term: &str) -> usize {
        self.filter(search_term).len()
    }

    fn filter(&self, search_term: &str) -> Matches {
        if search_term.is_empty() {
            return Matches::All(0..self.dataset.len());
        }

        let needle = search_term.to_lowercase();
        let indices = (0..self.dataset.len())
            .filter(|&index| self.dataset.search_key(index).contains(needle.as_str()))
            .collect();
        Matches::Filtered(indices)
    }
}

/// Indices of the filtered rows, in natural (ascending id) order.
enum Matches {
    All(Range<usize>),
    Filtered(Vec<usize>),
}

impl Matches {
    fn len(&self) -> usize {
        match self {
            Matches::All(range) => range.len(),
            Matches::Filtered(indices) => indices.len(),
        }
    }

    fn indices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        match self {
            Matches::All(range) => Box::new(range.clone()),
            Matches::Filtered(indices) => Box::new(indices.iter().copied()),
        }
    }
}

/// Filtered indices in listing order.
///
/// Only rows the overlay positions are sorted. The rest are already in id
/// order and are streamed after them, which is exactly the order
/// [`OrderSnapshot::compare_rows`] defines.
fn ordered_indices<'a>(
    matches: &'a Matches,
    rows: &'a [Row],
    order: &'a OrderSnapshot,
) -> Box<dyn Iterator<Item = usize> + 'a> {
    if order.is_empty() {
        return matches.indices();
    }

    let mut positioned: Vec<usize> = matches
        .indices()
        .filter(|&index| order.rank_of(rows[index].id).is_positioned())
        .collect();
    positioned.sort_unstable_by(|&a, &b| order.compare_rows(&rows[a], &rows[b]));

    let unpositioned = matches
        .indices()
        .filter(move |&index| !order.rank_of(rows[index].id).is_positioned());

    Box::new(positioned.into_iter().chain(unpositioned))
}

/// `[page * page_size, page * page_size + page_size)` clamped to `total`.
pub fn page_window(page: i64, page_size: i64, total: usize) -> Range<usize> {
    let page = page.max(0) as u128;
    let page_size = page_size.max(0) as u128;
    let total = total as u128;

    let start = (page * page_size).min(total);
    let end = (page * page_size + page_size).min(total);
    start as usize..end as usize
}

pub fn has_more(page: i64, page_size: i64, total: usize) -> bool {
    let page = page.max(0) as u128;
    let page_size = page_size.max(0) as u128;
    (page + 1) * page_size < total as u128
}
