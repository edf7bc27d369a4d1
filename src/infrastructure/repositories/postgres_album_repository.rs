use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::album::Album;
use crate::domain::repositories::{AlbumRepository, RepositoryResult};

/// PostgreSQL implementation of AlbumRepository
///
/// Queries are checked at runtime (`query_as`), so building the crate does
/// not need a live database.
///
/// `id` is compared and returned as text, so tables keyed by `TEXT` or by an
/// integer serial both work.
#[derive(Clone)]
pub struct PostgresAlbumRepository {
    pool: PgPool,
}

impl PostgresAlbumRepository {
    /// Creates a new PostgresAlbumRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for PostgresAlbumRepository {
    async fn list(&self) -> RepositoryResult<Vec<Album>> {
        let albums = sqlx::query_as::<_, Album>(
            r#"
            SELECT id::text AS id, title, artist, price
            FROM albums
            ORDER BY albums.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(albums)
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Album>> {
        let album = sqlx::query_as::<_, Album>(
            r#"
            SELECT id::text AS id, title, artist, price
            FROM albums
            WHERE id::text = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(album)
    }

    async fn create(&self, album: &Album) -> RepositoryResult<String> {
        let id: String = sqlx::query_scalar(
            r#"
            INSERT INTO albums (title, artist, price)
            VALUES ($1, $2, $3)
            RETURNING id::text
            "#,
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: &str, album: &Album) -> RepositoryResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE albums
            SET title = $1, artist = $2, price = $3
            WHERE id::text = $4
            "#,
        )
        .bind(&album.title)
        .bind(&album.artist)
        .bind(album.price)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &str) -> RepositoryResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM albums WHERE id::text = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
