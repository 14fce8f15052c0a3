use minet_types::{CommentId, PostId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// The session identity.
///
/// Exactly one `User` exists per session. It is generated on first run and
/// persisted alongside the posts so the identity is stable across sessions
/// (but not across machines -- there is no account system).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Embeddable image reference (a generated SVG data URI).
    pub avatar: String,
}

/// A feed item authored by the session user.
///
/// Immutable after creation except for `likes` and `comments`, which change
/// only through the feed operations. A post carries a denormalized copy of
/// the author's name and avatar, taken at creation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Trimmed body text; may be empty when an image is attached.
    pub text: String,
    /// Optional image reference (opaque string, typically a data URI).
    pub image_url: Option<String>,
    pub username: String,
    pub avatar: String,
    pub timestamp: Timestamp,
    /// Insertion-ordered like set: each user id appears at most once. Order
    /// carries no meaning beyond the count.
    pub likes: Vec<UserId>,
    /// Chronological, append-only comment list.
    pub comments: Vec<Comment>,
}

impl Post {
    /// Returns `true` if `user` is in the like set.
    pub fn has_liked(&self, user: UserId) -> bool {
        self.likes.contains(&user)
    }

    /// Number of likes.
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    /// Number of comments.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// The most recent comment, if any.
    pub fn latest_comment(&self) -> Option<&Comment> {
        self.comments.last()
    }
}

/// A reply attached to exactly one post.
///
/// Immutable once created; owned by its parent post and destroyed with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub username: String,
    pub avatar: String,
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: PostId::new(),
            text: "hello".into(),
            image_url: None,
            username: "You".into(),
            avatar: "data:image/svg+xml,...".into(),
            timestamp: Timestamp::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn like_helpers() {
        let mut post = sample_post();
        let user = UserId::new();
        assert!(!post.has_liked(user));
        assert_eq!(post.like_count(), 0);

        post.likes.push(user);
        assert!(post.has_liked(user));
        assert_eq!(post.like_count(), 1);
    }

    #[test]
    fn latest_comment_is_last() {
        let mut post = sample_post();
        assert!(post.latest_comment().is_none());

        for text in ["first", "second"] {
            post.comments.push(Comment {
                id: CommentId::new(),
                text: text.into(),
                username: "You".into(),
                avatar: String::new(),
                timestamp: Timestamp::now(),
            });
        }
        assert_eq!(post.latest_comment().unwrap().text, "second");
        assert_eq!(post.comment_count(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let mut post = sample_post();
        post.image_url = Some("data:image/png;base64,AAAA".into());
        post.likes.push(UserId::new());

        let json = serde_json::to_string(&post).unwrap();
        let parsed: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(post, parsed);
    }

    #[test]
    fn snapshot_field_names_are_stable() {
        // The on-disk slot layout names these fields; a rename would break
        // existing snapshots.
        let post = sample_post();
        let value = serde_json::to_value(&post).unwrap();
        for field in [
            "id",
            "text",
            "image_url",
            "username",
            "avatar",
            "timestamp",
            "likes",
            "comments",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
