//! Application state for the compliance engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::events::ChangeNotifier;
use crate::store::CarerStore;

/// Shared application state.
///
/// Contains the resources shared across all request handlers: the loaded
/// rules configuration, the carer store, and the change notifier.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rules configuration.
    config: Arc<ConfigLoader>,
    /// The carer repository.
    store: Arc<dyn CarerStore>,
    /// The change-notification hook.
    notifier: Arc<dyn ChangeNotifier>,
}

impl AppState {
    /// Creates a new application state from its collaborators.
    pub fn new(
        config: ConfigLoader,
        store: Arc<dyn CarerStore>,
        notifier: Arc<dyn ChangeNotifier>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            notifier,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the carer store.
    pub fn store(&self) -> &dyn CarerStore {
        self.store.as_ref()
    }

    /// Returns a reference to the change notifier.
    pub fn notifier(&self) -> &dyn ChangeNotifier {
        self.notifier.as_ref()
    }
}
