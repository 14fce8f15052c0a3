//! Typed presenter actions.
//!
//! Presenters route user intent to the feed as [`Action`] values carrying
//! strongly-typed ids, instead of threading raw id strings through the UI
//! layer. [`Feed::apply`] maps each action onto the corresponding feed
//! operation and folds the fail-soft sentinels into one [`ActionOutcome`].

use std::fmt;

use minet_store::SlotStore;
use minet_types::PostId;

use crate::feed::Feed;
use crate::model::{Comment, Post};

/// A user action forwarded by a presenter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    CreatePost {
        text: String,
        image_url: Option<String>,
    },
    DeletePost(PostId),
    ToggleLike(PostId),
    AddComment {
        post: PostId,
        text: String,
    },
}

/// Why an action was rejected. Rejections are expected outcomes, not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// A post needs text or an image.
    EmptyPost,
    /// A comment needs non-empty text.
    EmptyComment,
    /// The referenced post does not exist (anymore).
    UnknownPost(PostId),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPost => write!(f, "a post needs some text or an image"),
            Self::EmptyComment => write!(f, "a comment needs some text"),
            Self::UnknownPost(id) => write!(f, "no such post: {id}"),
        }
    }
}

/// The result of applying an [`Action`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    PostCreated(Post),
    PostDeleted(PostId),
    LikeToggled { post: PostId, liked: bool },
    CommentAdded(Comment),
    Rejected(RejectReason),
}

impl<S: SlotStore> Feed<S> {
    /// Apply a presenter action.
    ///
    /// Never fails: validation problems come back as
    /// [`ActionOutcome::Rejected`]. Unlike the bare operations, an unknown
    /// post id is reported distinctly instead of being folded into `false`.
    pub fn apply(&mut self, action: Action) -> ActionOutcome {
        match action {
            Action::CreatePost { text, image_url } => {
                match self.create_post(&text, image_url) {
                    Some(post) => ActionOutcome::PostCreated(post),
                    None => ActionOutcome::Rejected(RejectReason::EmptyPost),
                }
            }
            Action::DeletePost(id) => {
                if self.delete_post(id) {
                    ActionOutcome::PostDeleted(id)
                } else {
                    ActionOutcome::Rejected(RejectReason::UnknownPost(id))
                }
            }
            Action::ToggleLike(id) => {
                if self.get(id).is_none() {
                    return ActionOutcome::Rejected(RejectReason::UnknownPost(id));
                }
                let liked = self.toggle_like(id);
                ActionOutcome::LikeToggled { post: id, liked }
            }
            Action::AddComment { post, text } => {
                if self.get(post).is_none() {
                    return ActionOutcome::Rejected(RejectReason::UnknownPost(post));
                }
                match self.add_comment(post, &text) {
                    Some(comment) => ActionOutcome::CommentAdded(comment),
                    None => ActionOutcome::Rejected(RejectReason::EmptyComment),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minet_store::InMemorySlotStore;

    fn feed() -> Feed<InMemorySlotStore> {
        Feed::load(InMemorySlotStore::new())
    }

    #[test]
    fn create_post_action() {
        let mut feed = feed();
        let outcome = feed.apply(Action::CreatePost {
            text: "hello".into(),
            image_url: None,
        });
        let ActionOutcome::PostCreated(post) = outcome else {
            panic!("expected PostCreated, got {outcome:?}");
        };
        assert_eq!(post.text, "hello");
        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn empty_post_is_rejected() {
        let mut feed = feed();
        let outcome = feed.apply(Action::CreatePost {
            text: "   ".into(),
            image_url: None,
        });
        assert_eq!(outcome, ActionOutcome::Rejected(RejectReason::EmptyPost));
    }

    #[test]
    fn delete_action_roundtrip() {
        let mut feed = feed();
        let post = feed.create_post("gone soon", None).unwrap();

        let outcome = feed.apply(Action::DeletePost(post.id));
        assert_eq!(outcome, ActionOutcome::PostDeleted(post.id));

        let outcome = feed.apply(Action::DeletePost(post.id));
        assert_eq!(
            outcome,
            ActionOutcome::Rejected(RejectReason::UnknownPost(post.id))
        );
    }

    #[test]
    fn like_action_reports_membership() {
        let mut feed = feed();
        let post = feed.create_post("likeable", None).unwrap();

        let outcome = feed.apply(Action::ToggleLike(post.id));
        assert_eq!(
            outcome,
            ActionOutcome::LikeToggled {
                post: post.id,
                liked: true
            }
        );

        let outcome = feed.apply(Action::ToggleLike(post.id));
        assert_eq!(
            outcome,
            ActionOutcome::LikeToggled {
                post: post.id,
                liked: false
            }
        );
    }

    #[test]
    fn like_on_unknown_post_is_distinct_from_unliked() {
        let mut feed = feed();
        let id = PostId::new();
        let outcome = feed.apply(Action::ToggleLike(id));
        assert_eq!(outcome, ActionOutcome::Rejected(RejectReason::UnknownPost(id)));
    }

    #[test]
    fn comment_actions() {
        let mut feed = feed();
        let post = feed.create_post("talk to me", None).unwrap();

        let outcome = feed.apply(Action::AddComment {
            post: post.id,
            text: "hi".into(),
        });
        let ActionOutcome::CommentAdded(comment) = outcome else {
            panic!("expected CommentAdded, got {outcome:?}");
        };
        assert_eq!(comment.text, "hi");

        let outcome = feed.apply(Action::AddComment {
            post: post.id,
            text: "  ".into(),
        });
        assert_eq!(outcome, ActionOutcome::Rejected(RejectReason::EmptyComment));
    }

    #[test]
    fn reject_reasons_render() {
        assert_eq!(
            RejectReason::EmptyPost.to_string(),
            "a post needs some text or an image"
        );
        let id = PostId::new();
        assert!(RejectReason::UnknownPost(id).to_string().contains("post:"));
    }
}
