// Repository interfaces (ports)
// Implemented by adapters in the infrastructure layer

pub mod album_repository;

pub use album_repository::{AlbumRepository, RepositoryError, RepositoryResult};
