use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;
use minet_feed::{Action, ActionOutcome, Feed, ImageAttachment, ImageSlot};
use minet_store::{FileSlotStore, SlotStore};
use minet_types::{PostId, Timestamp};

use crate::cli::*;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir);
    let store = FileSlotStore::open(&data_dir)
        .with_context(|| format!("cannot open data directory {}", data_dir.display()))?;
    let mut feed = Feed::load(store);

    match cli.command {
        Command::Post(args) => cmd_post(&mut feed, args),
        Command::Feed(args) => cmd_feed(&feed, args, &cli.format),
        Command::Delete(args) => cmd_delete(&mut feed, args),
        Command::Like(args) => cmd_like(&mut feed, args),
        Command::Comment(args) => cmd_comment(&mut feed, args),
        Command::Comments(args) => cmd_comments(&feed, args, &cli.format),
        Command::Whoami(_) => cmd_whoami(&feed, &cli.format),
        Command::Status(_) => cmd_status(&feed, &data_dir),
    }
}

/// Explicit flag, else `~/.minet`, else `.minet` in the working directory.
fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".minet"),
        None => PathBuf::from(".minet"),
    }
}

fn cmd_post(feed: &mut Feed<FileSlotStore>, args: PostArgs) -> anyhow::Result<()> {
    let mut pending = ImageSlot::new();
    if let Some(path) = &args.image {
        let token = pending.begin();
        let data = ImageAttachment::load(path)
            .with_context(|| format!("cannot attach {}", path.display()))?;
        pending.complete(token, data);
    }

    let outcome = feed.apply(Action::CreatePost {
        text: args.text.unwrap_or_default(),
        image_url: pending.take(),
    });

    match outcome {
        ActionOutcome::PostCreated(post) => {
            println!(
                "{} Post shared ({})",
                "✓".green().bold(),
                post.id.short_id().yellow()
            );
        }
        ActionOutcome::Rejected(reason) => {
            println!("{} {}", "✗".red(), reason);
        }
        other => unreachable!("unexpected outcome for CreatePost: {other:?}"),
    }

    warn_if_degraded(feed);
    Ok(())
}

fn cmd_feed(
    feed: &Feed<FileSlotStore>,
    args: FeedArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    if *format == OutputFormat::Json {
        println!("{}", render::posts_json(feed.posts())?);
        return Ok(());
    }

    let liked: Vec<bool> = feed.posts().iter().map(|p| feed.is_liked(p.id)).collect();
    render::print_feed(feed.posts(), &liked, args.limit, Timestamp::now());
    Ok(())
}

fn cmd_delete(feed: &mut Feed<FileSlotStore>, args: DeleteArgs) -> anyhow::Result<()> {
    let id = resolve_post_id(feed, &args.post)?;

    if !args.yes && !confirm("Delete this post? [y/N] ")? {
        println!("Cancelled.");
        return Ok(());
    }

    match feed.apply(Action::DeletePost(id)) {
        ActionOutcome::PostDeleted(_) => {
            println!("{} Post deleted", "✓".green().bold());
        }
        ActionOutcome::Rejected(reason) => {
            println!("{} {}", "✗".red(), reason);
        }
        other => unreachable!("unexpected outcome for DeletePost: {other:?}"),
    }

    warn_if_degraded(feed);
    Ok(())
}

fn cmd_like(feed: &mut Feed<FileSlotStore>, args: LikeArgs) -> anyhow::Result<()> {
    let id = resolve_post_id(feed, &args.post)?;

    match feed.apply(Action::ToggleLike(id)) {
        ActionOutcome::LikeToggled { liked: true, .. } => {
            println!("{} Liked", "♥".red());
        }
        ActionOutcome::LikeToggled { liked: false, .. } => {
            println!("{} Unliked", "♡".normal());
        }
        ActionOutcome::Rejected(reason) => {
            println!("{} {}", "✗".red(), reason);
        }
        other => unreachable!("unexpected outcome for ToggleLike: {other:?}"),
    }

    warn_if_degraded(feed);
    Ok(())
}

fn cmd_comment(feed: &mut Feed<FileSlotStore>, args: CommentArgs) -> anyhow::Result<()> {
    let id = resolve_post_id(feed, &args.post)?;

    match feed.apply(Action::AddComment {
        post: id,
        text: args.text,
    }) {
        ActionOutcome::CommentAdded(comment) => {
            println!(
                "{} Comment added ({})",
                "✓".green().bold(),
                comment.id.short_id().yellow()
            );
        }
        ActionOutcome::Rejected(reason) => {
            println!("{} {}", "✗".red(), reason);
        }
        other => unreachable!("unexpected outcome for AddComment: {other:?}"),
    }

    warn_if_degraded(feed);
    Ok(())
}

fn cmd_comments(
    feed: &Feed<FileSlotStore>,
    args: CommentsArgs,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let id = resolve_post_id(feed, &args.post)?;

    if *format == OutputFormat::Json {
        println!("{}", render::comments_json(feed.comments(id))?);
        return Ok(());
    }

    render::print_comments(feed.comments(id), Timestamp::now());
    Ok(())
}

fn cmd_whoami(feed: &Feed<FileSlotStore>, format: &OutputFormat) -> anyhow::Result<()> {
    if *format == OutputFormat::Json {
        println!("{}", render::user_json(feed.current_user())?);
        return Ok(());
    }

    render::print_user(feed.current_user());
    Ok(())
}

fn cmd_status(feed: &Feed<FileSlotStore>, data_dir: &std::path::Path) -> anyhow::Result<()> {
    let comments: usize = feed.posts().iter().map(|p| p.comment_count()).sum();
    let likes: usize = feed.posts().iter().map(|p| p.like_count()).sum();

    println!("Signed in as {}", feed.current_user().username.bold());
    println!(
        "Feed: {} posts, {} comments, {} likes",
        feed.len().to_string().bold(),
        comments,
        likes
    );

    let slots = feed.store().list_slots()?;
    println!(
        "Storage: {} (slots: {})",
        data_dir.display(),
        if slots.is_empty() {
            "none".to_string()
        } else {
            slots.join(", ")
        }
    );
    Ok(())
}

/// Resolve a post id argument: a full id, or a unique prefix of one.
fn resolve_post_id(feed: &Feed<FileSlotStore>, input: &str) -> anyhow::Result<PostId> {
    if let Ok(id) = PostId::parse(input) {
        return Ok(id);
    }

    let needle = input.strip_prefix("post:").unwrap_or(input);
    let matches: Vec<PostId> = feed
        .posts()
        .iter()
        .filter(|p| p.id.as_uuid().to_string().starts_with(needle))
        .map(|p| p.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => anyhow::bail!("no post matches {input:?}"),
        _ => anyhow::bail!("{input:?} is ambiguous; give more characters"),
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn warn_if_degraded(feed: &Feed<FileSlotStore>) {
    if feed.persistence_degraded() {
        eprintln!(
            "{} could not save to storage; changes will be lost when this session ends",
            "warning:".yellow().bold()
        );
    }
}
