use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post store - the persistence abstraction for posts.
///
/// Every operation is immediately durable; no batching and no transactions
/// spanning multiple operations.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first.
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Persist a new post and return it with its store-assigned id.
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError>;

    /// Replace a post's title and content in place. The creation timestamp
    /// is left untouched. Fails with `RepoError::NotFound` if the id is absent.
    async fn update(&self, id: i64, title: String, content: String) -> Result<Post, RepoError>;

    /// Remove a post. Fails with `RepoError::NotFound` if the id is absent.
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}
