use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. A missing entity is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Returns [`RepoError::NotFound`] when nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the "BlogPost" collection.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// The oldest post, if any.
    async fn find_one(&self) -> Result<Option<Post>, RepoError>;

    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Insert a batch of posts in one round trip.
    async fn insert_many(&self, posts: Vec<Post>) -> Result<Vec<Post>, RepoError>;

    /// Apply a partial update. `id` and `created` are never touched.
    async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, RepoError>;

    /// Remove every post, returning how many were deleted.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
