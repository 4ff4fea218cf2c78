//! Wire types for the Blotato `POST /posts` endpoint.

use serde::Serialize;

/// Request body: `{ "post": { "accountId", "content", "target" } }`.
#[derive(Debug, Serialize)]
pub struct PostRequest {
    pub post: Post,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub account_id: String,
    pub content: PostContent,
    pub target: PostTarget,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    pub text: String,
    pub platform: String,
    /// Always present — the API requires the field even when empty.
    pub media_urls: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostTarget {
    pub target_type: String,
}

/// Platform name → Blotato `targetType`. Every supported platform currently
/// maps to its own lower-cased name; the table exists so a provider-side
/// rename only touches this file. Unknown names pass through lower-cased so
/// new Blotato targets work without a client update.
const TARGET_TYPES: &[(&str, &str)] = &[
    ("twitter", "twitter"),
    ("instagram", "instagram"),
    ("linkedin", "linkedin"),
    ("facebook", "facebook"),
    ("tiktok", "tiktok"),
    ("threads", "threads"),
    ("pinterest", "pinterest"),
    ("bluesky", "bluesky"),
];

/// Maps a case-insensitive platform name to its `targetType` string.
#[must_use]
pub fn target_type(platform: &str) -> String {
    let normalized = platform.to_ascii_lowercase();
    TARGET_TYPES
        .iter()
        .find(|(name, _)| *name == normalized)
        .map_or(normalized, |(_, target)| (*target).to_owned())
}
