use minet_store::SlotStore;
use minet_types::{CommentId, PostId, Timestamp};
use tracing::warn;

use crate::error::FeedResult;
use crate::model::{Comment, Post, User};
use crate::snapshot;

/// Slot holding the full post array.
pub const POSTS_SLOT: &str = "posts";

/// Slot holding the session identity.
pub const USER_SLOT: &str = "user";

/// The feed store.
///
/// Owns the newest-first post list and the session identity, and keeps both
/// in sync with a [`SlotStore`] by writing a full snapshot after every
/// successful mutation. Insertion order is authoritative: the list is
/// ordered by when posts were created in this store, not by timestamp.
///
/// Operations are fail-soft: invalid input or an unknown post id yields a
/// `None`/`false`/empty sentinel. Storage failures are logged, swallowed,
/// and surfaced through [`Feed::persistence_degraded`]; they never abort or
/// roll back the in-memory mutation that triggered them.
pub struct Feed<S: SlotStore> {
    posts: Vec<Post>,
    current_user: User,
    store: S,
    persistence_degraded: bool,
}

impl<S: SlotStore> Feed<S> {
    /// Load the feed from `store`.
    ///
    /// A present and parseable snapshot fully replaces the defaults. An
    /// absent or corrupt slot falls back -- independently per slot -- to an
    /// empty post list or a freshly generated identity; corruption is logged
    /// and never fatal. A fresh identity is persisted immediately so it
    /// stays stable across sessions.
    pub fn load(store: S) -> Self {
        let user = match store.read_slot(USER_SLOT) {
            Ok(Some(raw)) => match snapshot::decode_user(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "corrupt user slot; generating a fresh identity");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read user slot; generating a fresh identity");
                None
            }
        };

        let posts = match store.read_slot(POSTS_SLOT) {
            Ok(Some(raw)) => match snapshot::decode_posts(&raw) {
                Ok(posts) => Some(posts),
                Err(e) => {
                    warn!(error = %e, "corrupt posts slot; starting with an empty feed");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not read posts slot; starting with an empty feed");
                None
            }
        };

        let fresh_identity = user.is_none();
        let mut feed = Self {
            posts: posts.unwrap_or_default(),
            current_user: user.unwrap_or_else(User::generate),
            store,
            persistence_degraded: false,
        };
        if fresh_identity {
            feed.persist();
        }
        feed
    }

    // ---- Mutations ----

    /// Create a post from `text` and an optional image reference.
    ///
    /// Returns `None` when the trimmed text is empty and no image is given;
    /// this is the only validation a post ever gets. On success the post is
    /// stamped with the current identity and time, prepended to the feed,
    /// persisted, and returned.
    pub fn create_post(&mut self, text: &str, image_url: Option<String>) -> Option<Post> {
        let text = text.trim();
        if text.is_empty() && image_url.is_none() {
            return None;
        }

        let post = Post {
            id: PostId::new(),
            text: text.to_string(),
            image_url,
            username: self.current_user.username.clone(),
            avatar: self.current_user.avatar.clone(),
            timestamp: Timestamp::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        };

        self.posts.insert(0, post.clone());
        self.persist();
        Some(post)
    }

    /// Delete the post with the given id.
    ///
    /// Returns whether a post was removed. Removing a post drops its
    /// comments and likes with it; nothing else references them.
    pub fn delete_post(&mut self, id: PostId) -> bool {
        match self.posts.iter().position(|p| p.id == id) {
            Some(index) => {
                self.posts.remove(index);
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Toggle the current user's like on a post.
    ///
    /// Set semantics: a user likes a post at most once. Returns the
    /// resulting membership (`true` = now liked). Unknown post ids are a
    /// silent no-op returning `false`.
    pub fn toggle_like(&mut self, id: PostId) -> bool {
        let user = self.current_user.id;
        let Some(post) = self.posts.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        let liked = match post.likes.iter().position(|u| *u == user) {
            Some(index) => {
                post.likes.remove(index);
                false
            }
            None => {
                post.likes.push(user);
                true
            }
        };

        self.persist();
        liked
    }

    /// Append a comment to a post.
    ///
    /// Returns `None` when the post is unknown or the trimmed text is empty.
    /// Comments are append-only and chronological.
    pub fn add_comment(&mut self, id: PostId, text: &str) -> Option<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let user = &self.current_user;
        let comment = Comment {
            id: CommentId::new(),
            text: text.to_string(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            timestamp: Timestamp::now(),
        };

        let post = self.posts.iter_mut().find(|p| p.id == id)?;
        post.comments.push(comment.clone());
        self.persist();
        Some(comment)
    }

    // ---- Queries ----

    /// Returns `true` if the current user has liked the post. Pure query;
    /// `false` for unknown ids.
    pub fn is_liked(&self, id: PostId) -> bool {
        self.get(id)
            .map(|p| p.has_liked(self.current_user.id))
            .unwrap_or(false)
    }

    /// The comments of a post, oldest first. Empty for unknown ids.
    pub fn comments(&self, id: PostId) -> &[Comment] {
        self.get(id).map(|p| p.comments.as_slice()).unwrap_or(&[])
    }

    /// Look up a post by id.
    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The session identity.
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    /// The underlying slot store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Number of posts in the feed.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns `true` if the feed has no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Returns `true` if the most recent snapshot write failed.
    ///
    /// While set, the in-memory state is ahead of disk and would be lost on
    /// exit; presenters should tell the user. Cleared by the next
    /// successful write.
    pub fn persistence_degraded(&self) -> bool {
        self.persistence_degraded
    }

    // ---- Persistence ----

    /// Write the full snapshot, swallowing (but remembering) failures.
    fn persist(&mut self) {
        match self.write_snapshot() {
            Ok(()) => self.persistence_degraded = false,
            Err(e) => {
                warn!(error = %e, "snapshot write failed; in-memory state is ahead of storage");
                self.persistence_degraded = true;
            }
        }
    }

    /// Overwrite both slots with the current state.
    fn write_snapshot(&self) -> FeedResult<()> {
        let posts = snapshot::encode_posts(&self.posts)?;
        let user = snapshot::encode_user(&self.current_user)?;
        self.store.write_slot(POSTS_SLOT, &posts)?;
        self.store.write_slot(USER_SLOT, &user)?;
        Ok(())
    }
}

impl<S: SlotStore> std::fmt::Debug for Feed<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Feed")
            .field("posts", &self.posts.len())
            .field("user", &self.current_user.id)
            .field("persistence_degraded", &self.persistence_degraded)
            .finish()
    }
}
