// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod postgres_album_repository;

pub use postgres_album_repository::PostgresAlbumRepository;
