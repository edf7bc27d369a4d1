//! Shared application state for all routes.

use std::sync::Arc;

use crate::domain::repositories::AlbumRepository;

/// State injected into every handler
///
/// Cloned per request; the repository itself is shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<dyn AlbumRepository>,
}

impl AppState {
    pub fn new(albums: Arc<dyn AlbumRepository>) -> Self {
        Self { albums }
    }
}
