use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::domain::entities::dataset::RowId;
use crate::domain::entities::view::SelectionSnapshot;
use crate::usecase::ports::repo::SelectionRepository;

pub struct SelectionSet {
    snap: ArcSwap<SelectionSnapshot>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self {
            snap: ArcSwap::from_pointee(SelectionSnapshot::default()),
        }
    }

    pub fn current(&self) -> Vec<RowId> {
        self.snap.load().to_vec()
    }
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionRepository for SelectionSet {
    fn replace(&self, ids: Vec<RowId>) {
        self.snap.store(Arc::new(SelectionSnapshot::new(ids)));
    }

    fn snapshot(&self) -> Arc<SelectionSnapshot> {
        self.snap.load_full()
    }
}
