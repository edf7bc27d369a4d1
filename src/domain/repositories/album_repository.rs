use async_trait::async_trait;
use thiserror::Error;

use crate::domain::album::Album;

/// Errors raised by album persistence
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for the Album entity
///
/// Every method maps to exactly one statement against the store.
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// List every stored album, ordered by id
    async fn list(&self) -> RepositoryResult<Vec<Album>>;

    /// Find an album by its ID
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Album>>;

    /// Insert a new album and return the identifier the store assigned
    ///
    /// The `id` field of `album` is ignored.
    async fn create(&self, album: &Album) -> RepositoryResult<String>;

    /// Replace title, artist and price of the album with the given ID
    ///
    /// Returns the number of rows that matched.
    async fn update(&self, id: &str, album: &Album) -> RepositoryResult<u64>;

    /// Delete the album with the given ID
    ///
    /// Returns the number of rows removed.
    async fn delete(&self, id: &str) -> RepositoryResult<u64>;
}
