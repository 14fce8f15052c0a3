//! Session identity generation.
//!
//! On first run the feed synthesizes a [`User`]: a fresh id, the fixed
//! display name, and a placeholder avatar -- an inline SVG data URI showing
//! the user's initial on a colored disc. The avatar is generated once and
//! then travels with every post and comment the user writes.

use minet_types::UserId;
use rand::seq::SliceRandom;

use crate::model::User;

/// Display name for the session user.
pub const DEFAULT_USERNAME: &str = "You";

/// Background colors for generated avatars.
const AVATAR_COLORS: &[&str] = &[
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dfe6e9", "#fd79a8", "#6c5ce7",
];

impl User {
    /// Synthesize a fresh session identity.
    pub fn generate() -> Self {
        let initial = DEFAULT_USERNAME.chars().next().unwrap_or('U');
        Self {
            id: UserId::new(),
            username: DEFAULT_USERNAME.to_string(),
            avatar: generate_avatar(initial),
        }
    }
}

/// Build a placeholder avatar: an SVG data URI with `initial` centered on a
/// randomly colored disc.
pub fn generate_avatar(initial: char) -> String {
    let color = AVATAR_COLORS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("#6c5ce7");
    svg_avatar(initial, color)
}

/// The percent-encoded SVG data URI for a given initial and fill color.
fn svg_avatar(initial: char, color: &str) -> String {
    // '#' must be percent-encoded inside a data URI.
    let fill = color.replace('#', "%23");
    let letter = initial.to_ascii_uppercase();
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'%3E\
         %3Ccircle cx='50' cy='50' r='50' fill='{fill}'/%3E\
         %3Ctext x='50' y='55' font-size='35' text-anchor='middle' fill='white' \
         font-family='Arial'%3E{letter}%3C/text%3E%3C/svg%3E"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_fixed_username() {
        let user = User::generate();
        assert_eq!(user.username, "You");
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = User::generate();
        let b = User::generate();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn avatar_is_svg_data_uri() {
        let avatar = generate_avatar('y');
        assert!(avatar.starts_with("data:image/svg+xml,"));
        // Initial is uppercased into the SVG text element.
        assert!(avatar.contains("%3EY%3C"));
    }

    #[test]
    fn avatar_color_comes_from_palette() {
        let avatar = generate_avatar('U');
        let used = AVATAR_COLORS
            .iter()
            .any(|c| avatar.contains(&c.replace('#', "%23")));
        assert!(used, "avatar should embed a palette color: {avatar}");
    }

    #[test]
    fn avatar_encodes_hash_sign() {
        let avatar = svg_avatar('U', "#ff6b6b");
        assert!(!avatar.contains('#'));
        assert!(avatar.contains("%23ff6b6b"));
    }
}
