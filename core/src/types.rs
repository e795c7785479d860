//! Typed models for the photos category.
//!
//! # Design
//! Plain immutable records populated straight from the wire: no mutators,
//! no lazy fields. Every field that the service emits only in some contexts
//! is an `Option`, so callers can distinguish "missing" from "legitimately
//! zero" — absent optional fields always map to `None`, never to sentinel
//! defaults. Nested counters (`likes`, `comments`, `tags`) are themselves
//! optional records: an absent key yields an absent record, not a zeroed
//! one.

use chrono::{DateTime, Local};
use serde::Deserialize;
use url::Url;

use crate::mapper::{unix_seconds, wire_bool, wire_bool_opt};

/// A paged collection: `count` is the service-reported total, which may
/// legitimately exceed `items.len()`. Item order matches the response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paged<T> {
    pub count: u64,
    pub items: Vec<T>,
}

/// A photo album.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PhotoAlbum {
    pub id: i64,
    pub thumb_id: i64,
    pub owner_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "unix_seconds")]
    pub created: DateTime<Local>,
    #[serde(deserialize_with = "unix_seconds")]
    pub updated: DateTime<Local>,
    #[serde(default)]
    pub privacy: Option<i64>,
    #[serde(default)]
    pub comment_privacy: Option<i64>,
    /// Number of photos in the album.
    pub size: u64,
}

/// A single photo with its named size variants.
///
/// Which variants and metadata are present depends on the endpoint: search
/// results carry `width`/`height`, profile listings carry the nested
/// counters, and so on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Photo {
    pub id: i64,
    pub album_id: i64,
    pub owner_id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub photo_75: Option<Url>,
    #[serde(default)]
    pub photo_130: Option<Url>,
    #[serde(default)]
    pub photo_604: Option<Url>,
    #[serde(default)]
    pub photo_807: Option<Url>,
    #[serde(default)]
    pub photo_1280: Option<Url>,
    #[serde(default)]
    pub photo_2560: Option<Url>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    /// Free-text caption.
    #[serde(default)]
    pub text: String,
    /// Upload time, rendered in the caller's local timezone.
    #[serde(rename = "date", deserialize_with = "unix_seconds")]
    pub created: DateTime<Local>,
    #[serde(default)]
    pub post_id: Option<i64>,
    /// Geo coordinates are decoded through `f32` on purpose: the service
    /// itself only resolves single precision, even though the JSON carries
    /// double-precision text.
    #[serde(default, rename = "lat")]
    pub latitude: Option<f32>,
    #[serde(default, rename = "long")]
    pub longitude: Option<f32>,
    #[serde(default)]
    pub likes: Option<Likes>,
    #[serde(default)]
    pub comments: Option<Comments>,
    #[serde(default)]
    pub tags: Option<Tags>,
    #[serde(default, deserialize_with = "wire_bool_opt")]
    pub can_comment: Option<bool>,
}

/// Like counter attached to a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Likes {
    pub count: u64,
    #[serde(deserialize_with = "wire_bool")]
    pub user_likes: bool,
}

/// Comment counter attached to a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Comments {
    pub count: u64,
}

/// Tag counter attached to a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Tags {
    pub count: u64,
}

/// Upload endpoint descriptor. `album_id` and `user_id` are present only
/// for some upload-server variants (e.g. the messages one).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadServerInfo {
    pub upload_url: Url,
    #[serde(default)]
    pub album_id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<i64>,
}
