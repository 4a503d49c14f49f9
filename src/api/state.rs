use std::sync::Arc;

use crate::{config::Settings, storage::StorageProvider, usecase::UseCaseContext};

#[derive(Clone)]
pub struct AppState {
    pub context: Arc<UseCaseContext>,
    pub storage: Arc<dyn StorageProvider>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(
        context: Arc<UseCaseContext>,
        storage: Arc<dyn StorageProvider>,
        settings: Arc<Settings>,
    ) -> Self {
        Self {
            context,
            storage,
            settings,
        }
    }
}
