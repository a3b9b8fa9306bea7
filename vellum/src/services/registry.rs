use std::sync::Arc;

use vellum_ai::ConfigStore;

use crate::services::config::JsonFileConfigStore;
use crate::services::host::{HostBridge, NullHostBridge};

/// App-owned registry of long-lived services.
pub(crate) struct ServiceRegistry {
    host: Box<dyn HostBridge>,
    config: Arc<dyn ConfigStore>,
}

impl ServiceRegistry {
    pub(crate) fn new() -> Self {
        Self {
            host: Box::new(NullHostBridge),
            config: Arc::new(JsonFileConfigStore::open_default()),
        }
    }

    pub(crate) fn host(&self) -> &dyn HostBridge {
        self.host.as_ref()
    }

    pub(crate) fn config(&self) -> &Arc<dyn ConfigStore> {
        &self.config
    }
}
