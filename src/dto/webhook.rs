//! Discord-compatible webhook payload announcing the weekly pick.

use serde::Serialize;

const BOT_USERNAME: &str = "🎮 Game Picker Bot";
const BOT_AVATAR_URL: &str = "https://cdn-icons-png.flaticon.com/512/2331/2331852.png";
const EMBED_TITLE: &str = "🎮 Weekly Game Pick!";
/// Discord blurple.
const EMBED_COLOR: u32 = 0x7289DA;

/// Top-level message posted to the webhook.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebhookMessage {
    /// Display name of the bot.
    pub username: String,
    /// Avatar shown next to the message.
    pub avatar_url: String,
    /// Rich content of the message.
    pub embeds: Vec<Embed>,
}

/// Rich embed carrying the announcement.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Embed {
    /// Bold heading.
    pub title: String,
    /// Body text naming the game.
    pub description: String,
    /// Accent color as `0xRRGGBB`.
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Thumbnail, when one was found.
    pub image: Option<EmbedImage>,
}

/// Image attached to an embed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmbedImage {
    /// Image location.
    pub url: String,
}

impl WebhookMessage {
    /// Build the announcement for `game`, attaching the thumbnail when one was found.
    pub fn announce_pick(game: &str, thumbnail_url: Option<String>) -> Self {
        Self {
            username: BOT_USERNAME.to_owned(),
            avatar_url: BOT_AVATAR_URL.to_owned(),
            embeds: vec![Embed {
                title: EMBED_TITLE.to_owned(),
                description: format!("This week's game is **{game}**!"),
                color: EMBED_COLOR,
                image: thumbnail_url.map(|url| EmbedImage { url }),
            }],
        }
    }
}
