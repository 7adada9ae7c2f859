use crate::domain::PlantIdentifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> lets tests swap the upstream client for a stub.
    pub identifier: Arc<dyn PlantIdentifier>,
}
