use std::sync::Arc;

use crate::domain::entities::dataset::{Row, RowId};
use crate::domain::entities::view::{OrderSnapshot, SelectionSnapshot};

/// Rejected page request. Raised at the façade before any work is done.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("page must not be negative (got {0})")]
    NegativePage(i64),
    #[error("page size must be greater than zero (got {0})")]
    NonPositivePageSize(i64),
}

/// Read-only row source.
///
/// `rows()` is in ascending id order, and `search_key(i)` is the case-folded
/// value of `rows()[i]`.
pub trait DatasetRepository: Send + Sync {
    fn rows(&self) -> &[Row];
    fn search_key(&self, index: usize) -> &str;

    fn len(&self) -> usize {
        self.rows().len()
    }

    fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }
}

/// Holder of the custom row order. `replace` publishes a whole new snapshot.
pub trait OrderRepository: Send + Sync {
    fn replace(&self, ids: Vec<RowId>);
    fn snapshot(&self) -> Arc<OrderSnapshot>;
}

/// Holder of the selected ids. `replace` publishes a whole new snapshot.
pub trait SelectionRepository: Send + Sync {
    fn replace(&self, ids: Vec<RowId>);
    fn snapshot(&self) -> Arc<SelectionSnapshot>;
}
