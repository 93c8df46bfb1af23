use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::domain::entities::dataset::{Rank, RowId};
use crate::domain::entities::view::OrderSnapshot;
use crate::usecase::ports::repo::OrderRepository;

/// Custom row order published as whole snapshots.
pub struct OrderOverlay {
    snap: ArcSwap<OrderSnapshot>,
}

impl OrderOverlay {
    pub fn new() -> Self {
        Self {
            snap: ArcSwap::from_pointee(OrderSnapshot::default()),
        }
    }

    pub fn current(&self) -> Vec<RowId> {
        self.snap.load().ids().to_vec()
    }

    pub fn rank_of(&self, id: RowId) -> Rank {
        self.snap.load().rank_of(id)
    }
}

impl Default for OrderOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for OrderOverlay {
    fn replace(&self, ids: Vec<RowId>) {
        // Build outside the swap so readers only ever see a finished snapshot.
        let next = OrderSnapshot::new(ids);
        self.snap.store(Arc::new(next));
    }

    fn snapshot(&self) -> Arc<OrderSnapshot> {
        self.snap.load_full()
    }
}
