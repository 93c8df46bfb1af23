use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::dataset::RowId;
use crate::usecase::ports::repo::{OrderRepository, SelectionRepository};

/// Reads and wholesale replacements of the shared view state.
pub struct ViewService {
    order: Arc<dyn OrderRepository>,
    selection: Arc<dyn SelectionRepository>,
}

impl ViewService {
    pub fn new(order: Arc<dyn OrderRepository>, selection: Arc<dyn SelectionRepository>) -> Self {
        Self { order, selection }
    }

    pub fn set_order(&self, ids: Vec<RowId>) {
        debug!(ids = ids.len(), "replacing sort order");
        self.order.replace(ids);
    }

    pub fn order(&self) -> Vec<RowId> {
        self.order.snapshot().ids().to_vec()
    }

    pub fn set_selection(&self, ids: Vec<RowId>) {
        debug!(ids = ids.len(), "replacing selection");
        self.selection.replace(ids);
    }

    pub fn selection(&self) -> Vec<RowId> {
        self.selection.snapshot().to_vec()
    }
}
