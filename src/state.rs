//! Application state shared by all handlers

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::usecase::access::DatasetAccess;

pub struct AppState {
    pub config: ServerConfig,
    pub access: Arc<DatasetAccess>,
    pub start_time: Instant,
}

impl AppState {
    /// Generates the dataset described by `config`.
    pub fn new(config: ServerConfig) -> Self {
        let access = DatasetAccess::in_memory(config.dataset_size, &config.value_prefix);
        Self::with_access(config, Arc::new(access))
    }

    /// State over an already built façade.
    pub fn with_access(config: ServerConfig, access: Arc<DatasetAccess>) -> Self {
        Self {
            config,
            access,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
