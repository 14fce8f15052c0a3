use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "minet",
    about = "MiniNet — a local-first social feed",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the feed snapshot (default: ~/.minet)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Share a new post
    Post(PostArgs),
    /// Show the feed, newest first
    Feed(FeedArgs),
    /// Delete one of your posts
    Delete(DeleteArgs),
    /// Like or unlike a post
    Like(LikeArgs),
    /// Comment on a post
    Comment(CommentArgs),
    /// List the comments on a post
    Comments(CommentsArgs),
    /// Show the session identity
    Whoami(WhoamiArgs),
    /// Show feed and storage status
    Status(StatusArgs),
}

#[derive(Args)]
pub struct PostArgs {
    /// Body text (optional when an image is attached)
    pub text: Option<String>,

    /// Attach an image file
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Args)]
pub struct FeedArgs {
    /// Maximum number of posts to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

#[derive(Args)]
pub struct DeleteArgs {
    /// Post id (a unique prefix is enough)
    pub post: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct LikeArgs {
    /// Post id (a unique prefix is enough)
    pub post: String,
}

#[derive(Args)]
pub struct CommentArgs {
    /// Post id (a unique prefix is enough)
    pub post: String,

    /// Comment text
    pub text: String,
}

#[derive(Args)]
pub struct CommentsArgs {
    /// Post id (a unique prefix is enough)
    pub post: String,
}

#[derive(Args)]
pub struct WhoamiArgs {}

#[derive(Args)]
pub struct StatusArgs {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_post() {
        let cli = Cli::try_parse_from(["minet", "post", "hello world"]).unwrap();
        if let Command::Post(args) = cli.command {
            assert_eq!(args.text, Some("hello world".into()));
            assert!(args.image.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_post_with_image_only() {
        let cli = Cli::try_parse_from(["minet", "post", "--image", "cat.png"]).unwrap();
        if let Command::Post(args) = cli.command {
            assert!(args.text.is_none());
            assert_eq!(args.image, Some("cat.png".into()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_feed_limit() {
        let cli = Cli::try_parse_from(["minet", "feed", "-n", "5"]).unwrap();
        if let Command::Feed(args) = cli.command {
            assert_eq!(args.limit, 5);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn feed_limit_defaults_to_20() {
        let cli = Cli::try_parse_from(["minet", "feed"]).unwrap();
        if let Command::Feed(args) = cli.command {
            assert_eq!(args.limit, 20);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_delete_with_yes() {
        let cli = Cli::try_parse_from(["minet", "delete", "post:abc", "-y"]).unwrap();
        if let Command::Delete(args) = cli.command {
            assert_eq!(args.post, "post:abc");
            assert!(args.yes);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_like() {
        let cli = Cli::try_parse_from(["minet", "like", "0190"]).unwrap();
        assert!(matches!(cli.command, Command::Like(_)));
    }

    #[test]
    fn parse_comment() {
        let cli = Cli::try_parse_from(["minet", "comment", "0190", "nice!"]).unwrap();
        if let Command::Comment(args) = cli.command {
            assert_eq!(args.post, "0190");
            assert_eq!(args.text, "nice!");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_whoami_and_status() {
        let cli = Cli::try_parse_from(["minet", "whoami"]).unwrap();
        assert!(matches!(cli.command, Command::Whoami(_)));

        let cli = Cli::try_parse_from(["minet", "status"]).unwrap();
        assert!(matches!(cli.command, Command::Status(_)));
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::try_parse_from([
            "minet",
            "--data-dir",
            "/tmp/minet",
            "--format",
            "json",
            "--verbose",
            "feed",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some("/tmp/minet".into()));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["minet", "feed", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
