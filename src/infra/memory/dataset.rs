use std::time::Instant;

use tracing::info;

use crate::domain::entities::dataset::{Row, RowId};
use crate::usecase::ports::repo::DatasetRepository;

pub const DEFAULT_DATASET_SIZE: usize = 1_000_000;
pub const DEFAULT_VALUE_PREFIX: &str = "Value";

/// Write-once row collection held in memory.
pub struct MemoryDataset {
    rows: Vec<Row>,
    search_keys: Vec<Box<str>>,
}

impl MemoryDataset {
    /// Rows `1..=n` with values `"{prefix} {id}"`.
    pub fn generate(n: usize, prefix: &str) -> Self {
        let started = Instant::now();

        let rows: Vec<Row> = (1..=n)
            .map(|id| {
                let id = id as RowId;
                Row::new(id, format!("{prefix} {id}"))
            })
            .collect();
        let search_keys = rows
            .iter()
            .map(|row| row.value.to_lowercase().into_boxed_str())
            .collect();

        info!(
            rows = n,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generated dataset"
        );

        Self { rows, search_keys }
    }

    pub fn all(&self) -> &[Row] {
        &self.rows
    }
}

impl DatasetRepository for MemoryDataset {
    fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn search_key(&self, index: usize) -> &str {
        &self.search_keys[index]
    }
}
