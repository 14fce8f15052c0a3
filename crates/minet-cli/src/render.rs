//! Text and JSON rendering of feed state.

use colored::Colorize;
use minet_feed::{Comment, Post, User};
use minet_types::Timestamp;

/// Render one post as a feed card.
pub fn print_post(post: &Post, liked: bool, now: Timestamp) {
    println!(
        "{} {} · {}   {}",
        "●".cyan(),
        post.username.bold(),
        post.timestamp.relative_to(now).dimmed(),
        post.id.short_id().yellow(),
    );

    if !post.text.is_empty() {
        println!("  {}", post.text);
    }
    if post.image_url.is_some() {
        println!("  {}", "[image attached]".dimmed());
    }

    let heart = if liked { "♥".red() } else { "♡".normal() };
    println!(
        "  {} {}   {} {}",
        heart,
        plural(post.like_count(), "like"),
        "💬".normal(),
        plural(post.comment_count(), "comment"),
    );

    if let Some(last) = post.latest_comment() {
        println!(
            "  {} {}: {}",
            "└".dimmed(),
            last.username.bold(),
            last.text
        );
        if post.comment_count() > 1 {
            println!(
                "    {}",
                format!("view all {} comments with `minet comments {}`",
                    post.comment_count(),
                    post.id.short_id())
                .dimmed()
            );
        }
    }
}

/// Render a page of the feed, newest first.
pub fn print_feed(posts: &[Post], liked: &[bool], limit: usize, now: Timestamp) {
    if posts.is_empty() {
        println!("No posts yet. Share one with {}.", "minet post".bold());
        return;
    }

    for (post, liked) in posts.iter().zip(liked).take(limit) {
        print_post(post, *liked, now);
        println!();
    }

    if posts.len() > limit {
        println!("{}", format!("…and {} more", posts.len() - limit).dimmed());
    }
}

/// Render the comment list of a post.
pub fn print_comments(comments: &[Comment], now: Timestamp) {
    if comments.is_empty() {
        println!("No comments yet. Be the first to comment!");
        return;
    }

    for comment in comments {
        println!(
            "{} {} {}",
            comment.username.bold(),
            comment.text,
            format!("({})", comment.timestamp.relative_to(now)).dimmed(),
        );
    }
}

/// Render the session identity.
pub fn print_user(user: &User) {
    println!("{}  {}", user.username.bold(), user.id.to_string().yellow());
    println!("avatar: {}", truncate(&user.avatar, 64).dimmed());
}

/// Posts as pretty JSON, for `--format json`.
pub fn posts_json(posts: &[Post]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(posts)
}

/// Comments as pretty JSON, for `--format json`.
pub fn comments_json(comments: &[Comment]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(comments)
}

/// The user as pretty JSON, for `--format json`.
pub fn user_json(user: &User) -> serde_json::Result<String> {
    serde_json::to_string_pretty(user)
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}…", &s[..max])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "like"), "0 likes");
        assert_eq!(plural(1, "like"), "1 like");
        assert_eq!(plural(2, "comment"), "2 comments");
    }

    #[test]
    fn truncate_short_strings_untouched() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn truncate_long_strings() {
        let out = truncate("data:image/svg+xml,aaaaaaaaaa", 10);
        assert_eq!(out, "data:image…");
    }
}
