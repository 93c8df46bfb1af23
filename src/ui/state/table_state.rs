use std::collections::BTreeSet;

use crate::domain::entities::dataset::{PageResult, Row, RowId};

/// Client-side view of the listing: what is loaded, selected and how it is
/// ordered. Changes only through [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub items: Vec<Row>,
    pub selected: BTreeSet<RowId>,
    pub loading: bool,
    pub has_more: bool,
    pub total: usize,
    pub page: i64,
    pub sort_order: Vec<RowId>,
    pub search_query: String,
    pub is_searching: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: BTreeSet::new(),
            loading: false,
            has_more: true,
            total: 0,
            page: 0,
            sort_order: Vec::new(),
            search_query: String::new(),
            is_searching: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    LoadData {
        items: Vec<Row>,
        has_more: bool,
        total: usize,
    },
    AppendData {
        items: Vec<Row>,
    },
    SetLoading(bool),
    SetHasMore(bool),
    SetPage(i64),
    SelectItem(RowId),
    DeselectItem(RowId),
    SelectMultiple(Vec<RowId>),
    DeselectAll,
    SetSortOrder(Vec<RowId>),
    /// Also rewinds to the first page.
    SetSearchQuery(String),
    SetIsSearching(bool),
    ResetState,
    /// Drag-and-drop move of the loaded item at `from` to `to`. The loaded
    /// ids become the new sort order.
    Reorder {
        from: usize,
        to: usize,
    },
}

impl TableAction {
    /// First page replaces the loaded items, later pages append.
    pub fn from_page(result: PageResult) -> Vec<TableAction> {
        if result.page == 0 {
            return vec![TableAction::LoadData {
                items: result.rows,
                has_more: result.has_more,
                total: result.total_matching,
            }];
        }
        vec![
            TableAction::AppendData { items: result.rows },
            TableAction::SetHasMore(result.has_more),
            TableAction::SetPage(result.page),
        ]
    }
}

pub fn reduce(state: TableState, action: TableAction) -> TableState {
    match action {
        TableAction::LoadData {
            items,
            has_more,
            total,
        } => TableState {
            items,
            has_more,
            total,
            loading: false,
            ..state
        },
        TableAction::AppendData { items } => {
            let mut next = state;
            next.items.extend(items);
            next.loading = false;
            next
        }
        TableAction::SetLoading(loading) => TableState { loading, ..state },
        TableAction::SetHasMore(has_more) => TableState { has_more, ..state },
        TableAction::SetPage(page) => TableState { page, ..state },
        TableAction::SelectItem(id) => {
            let mut next = state;
            next.selected.insert(id);
            next
        }
        TableAction::DeselectItem(id) => {
            let mut next = state;
            next.selected.remove(&id);
            next
        }
        TableAction::SelectMultiple(ids) => {
            let mut next = state;
            next.selected.extend(ids);
            next
        }
        TableAction::DeselectAll => TableState {
            selected: BTreeSet::new(),
            ..state
        },
        TableAction::SetSortOrder(sort_order) => TableState { sort_order, ..state },
        TableAction::SetSearchQuery(search_query) => TableState {
            search_query,
            page: 0,
            ..state
        },
        TableAction::SetIsSearching(is_searching) => TableState {
            is_searching,
            ..state
        },
        TableAction::ResetState => TableState::default(),
        TableAction::Reorder { from, to } => {
            if from >= state.items.len() {
                return state;
            }
            let mut next = state;
            let moved = next.items.remove(from);
            let to = to.min(next.items.len());
            next.items.insert(to, moved);
            next.sort_order = next.items.iter().map(|row| row.id).collect();
            next.loading = false;
            next
        }
    }
}

impl TableState {
    pub fn is_item_loaded(&self, index: usize) -> bool {
        index < self.items.len()
    }

    pub fn toggle_selection(&self, id: RowId) -> TableAction {
        if self.selected.contains(&id) {
            TableAction::DeselectItem(id)
        } else {
            TableAction::SelectItem(id)
        }
    }

    /// Whether another page may be requested right now.
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.loading
    }

    /// The explicit order when one was set, otherwise the loaded ids.
    pub fn order_to_save(&self) -> Vec<RowId> {
        if self.sort_order.is_empty() {
            self.items.iter().map(|row| row.id).collect()
        } else {
            self.sort_order.clone()
        }
    }

    pub fn selection_to_save(&self) -> Vec<RowId> {
        self.selected.iter().copied().collect()
    }
}
