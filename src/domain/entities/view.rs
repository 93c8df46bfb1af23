use std::cmp::Ordering;

use indexmap::IndexSet;
use rustc_hash::FxHashMap;

use crate::domain::entities::dataset::{Rank, Row, RowId};

/// Immutable version of the user's custom row order.
///
/// Keeps the id sequence exactly as written and a rank lookup built from it.
/// A repeated id ranks at its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSnapshot {
    ids: Vec<RowId>,
    ranks: FxHashMap<RowId, Rank>,
}

impl OrderSnapshot {
    pub fn new(ids: Vec<RowId>) -> Self {
        let mut ranks = FxHashMap::default();
        ranks.reserve(ids.len());
        for (position, id) in ids.iter().enumerate() {
            ranks.insert(*id, Rank(position));
        }
        Self { ids, ranks }
    }

    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn rank_of(&self, id: RowId) -> Rank {
        self.ranks.get(&id).copied().unwrap_or(Rank::UNPOSITIONED)
    }

    /// Total order used for listing: explicit rank first, then natural id
    /// order among rows the overlay does not position.
    pub fn compare_rows(&self, a: &Row, b: &Row) -> Ordering {
        let (rank_a, rank_b) = (self.rank_of(a.id), self.rank_of(b.id));
        if !rank_a.is_positioned() && !rank_b.is_positioned() {
            return a.id.cmp(&b.id);
        }
        rank_a.cmp(&rank_b).then_with(|| a.id.cmp(&b.id))
    }
}

/// Immutable version of the selected ids, distinct and in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSnapshot {
    ids: IndexSet<RowId>,
}

impl SelectionSnapshot {
    pub fn new(ids: impl IntoIterator<Item = RowId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn to_vec(&self) -> Vec<RowId> {
        self.ids.iter().copied().collect()
    }
}
