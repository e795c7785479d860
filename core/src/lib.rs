//! Typed client for the VK.com REST API (photos category).
//!
//! # Overview
//! Two stages per call, both pure: a request builder that assembles the
//! method's canonical query string (fixed parameter order, trailing `v` and
//! `access_token`, legacy non-escaped values), and a response mapper that
//! unwraps the `{"response": ...}` / `{"error": ...}` envelope into typed
//! models, decoding the wire quirks — integer-encoded booleans,
//! epoch-seconds timestamps rendered as local time, geo coordinates
//! narrowed through single precision — in one place.
//!
//! # Design
//! - `VkApi` is stateless; it holds the injected [`Transport`], base URL,
//!   version, and token. Methods are grouped per category ([`Photos`]).
//! - The HTTP round-trip is behind the [`Transport`] trait, so unit tests
//!   run against canned responses and the integration tests against a live
//!   mock server.
//! - Errors stay in three distinct classes (transport / remote API /
//!   mapping); no retry policy lives at this layer.

pub mod client;
pub mod error;
pub mod http;
mod mapper;
pub mod photos;
mod query;
pub mod types;

pub use client::{VkApi, API_VERSION, DEFAULT_BASE_URL};
pub use error::{ApiError, Error, MappingError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use photos::{AlbumDetails, AllParams, Photos, ProfileParams, SearchParams};
pub use types::{Comments, Likes, Paged, Photo, PhotoAlbum, Tags, UploadServerInfo};
