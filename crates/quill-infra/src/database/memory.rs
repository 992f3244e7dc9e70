//! In-memory post store - used as fallback when no database is configured.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

/// In-memory post repository using a BTreeMap with async RwLock.
///
/// This is the fallback implementation when `DATABASE_URL` is not set.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        let mut all: Vec<Post> = posts.values().cloned().collect();
        // Newest first; same-instant posts fall back to newest id first.
        all.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));

        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let post = Post {
            id,
            title: new_post.title,
            content: new_post.content,
            timestamp: new_post.timestamp,
        };

        let mut posts = self.posts.write().await;
        posts.insert(id, post.clone());

        Ok(post)
    }

    async fn update(&self, id: i64, title: String, content: String) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(RepoError::NotFound)?;

        post.title = title;
        post.content = content;

        Ok(post.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).ok_or(RepoError::NotFound)?;

        Ok(())
    }
}
