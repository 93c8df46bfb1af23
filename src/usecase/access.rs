use std::sync::Arc;

use crate::domain::entities::dataset::{PageQuery, PageResult, RowId};
use crate::infra::memory::dataset::MemoryDataset;
use crate::infra::memory::overlay::OrderOverlay;
use crate::infra::memory::selection::SelectionSet;
use crate::usecase::ports::repo::{
    DatasetRepository, OrderRepository, QueryError, SelectionRepository,
};
use crate::usecase::services::query_service::QueryService;
use crate::usecase::services::view_service::ViewService;

/// Entry point for the transport layer.
///
/// Each instance owns its view state; two instances built over separate
/// overlays and selections never see each other's writes.
pub struct DatasetAccess {
    dataset: Arc<dyn DatasetRepository>,
    queries: QueryService,
    view: ViewService,
}

impl DatasetAccess {
    pub fn new(
        dataset: Arc<dyn DatasetRepository>,
        order: Arc<dyn OrderRepository>,
        selection: Arc<dyn SelectionRepository>,
    ) -> Self {
        Self {
            queries: QueryService::new(dataset.clone(), order.clone()),
            view: ViewService::new(order, selection),
            dataset,
        }
    }

    /// Generated dataset with an empty overlay and selection.
    pub fn in_memory(size: usize, value_prefix: &str) -> Self {
        Self::new(
            Arc::new(MemoryDataset::generate(size, value_prefix)),
            Arc::new(OrderOverlay::new()),
            Arc::new(SelectionSet::new()),
        )
    }

    pub fn dataset_size(&self) -> usize {
        self.dataset.len()
    }

    pub fn get_page(&self, query: &PageQuery) -> Result<PageResult, QueryError> {
        validate_query(query)?;
        Ok(self.queries.query_page(query))
    }

    pub fn set_selection(&self, ids: Vec<RowId>) {
        self.view.set_selection(ids);
    }

    pub fn get_selection(&self) -> Vec<RowId> {
        self.view.selection()
    }

    pub fn set_order(&self, ids: Vec<RowId>) {
        self.view.set_order(ids);
    }

    pub fn get_order(&self) -> Vec<RowId> {
        self.view.order()
    }
}

pub fn validate_query(query: &PageQuery) -> Result<(), QueryError> {
    if query.page < 0 {
        return Err(QueryError::NegativePage(query.page));
    }
    if query.page_size <= 0 {
        return Err(QueryError::NonPositivePageSize(query.page_size));
    }
    Ok(())
}
