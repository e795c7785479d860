//! The `photos.*` method category.
//!
//! # Design
//! A stateless handle borrowing the client: each operation declares its
//! parameters in the canonical wire order, hands the query to the client,
//! and returns the typed result. Required values are plain arguments —
//! omitting one is a compile error, so no runtime "missing parameter"
//! state exists. Methods with several optional parameters take a
//! `Default`-able params struct in place of long argument lists.

use crate::client::VkApi;
use crate::error::Error;
use crate::http::Transport;
use crate::query::MethodQuery;
use crate::types::{Paged, Photo, PhotoAlbum, UploadServerInfo};

/// Optional album attributes shared by create and edit.
#[derive(Debug, Clone, Default)]
pub struct AlbumDetails {
    pub description: Option<String>,
    pub privacy: Option<i64>,
    pub comment_privacy: Option<i64>,
}

/// Optional parameters for `get_profile`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileParams {
    /// Reverse chronological order.
    pub rev: bool,
    pub extended: bool,
    pub count: Option<u32>,
    pub offset: Option<u32>,
}

/// Optional parameters for `get_all`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllParams {
    pub extended: bool,
    pub count: Option<u32>,
    pub offset: Option<u32>,
}

/// Search filters. All fields are optional; empty strings count as unset.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub sort: Option<u8>,
    pub offset: Option<u32>,
    pub count: Option<u32>,
}

/// Photos category handle, obtained from [`VkApi::photos`].
#[derive(Debug)]
pub struct Photos<'a, T> {
    api: &'a VkApi<T>,
}

impl<'a, T: Transport> Photos<'a, T> {
    pub(crate) fn new(api: &'a VkApi<T>) -> Self {
        Self { api }
    }

    /// Create an album owned by the current user.
    pub fn create_album(&self, title: &str, details: &AlbumDetails) -> Result<PhotoAlbum, Error> {
        let query = MethodQuery::new("photos.createAlbum")
            .param("title", title)
            .opt("description", details.description.as_deref())
            .opt("privacy", details.privacy)
            .opt("comment_privacy", details.comment_privacy);
        self.api.call_object(query)
    }

    /// Edit album attributes. The service answers `1` on success.
    pub fn edit_album(
        &self,
        album_id: i64,
        title: Option<&str>,
        details: &AlbumDetails,
    ) -> Result<bool, Error> {
        let query = MethodQuery::new("photos.editAlbum")
            .param("album_id", album_id)
            .opt("title", title)
            .opt("description", details.description.as_deref())
            .opt("privacy", details.privacy)
            .opt("comment_privacy", details.comment_privacy);
        self.api.call_bool(query)
    }

    pub fn delete_album(&self, album_id: i64) -> Result<bool, Error> {
        let query = MethodQuery::new("photos.deleteAlbum").param("album_id", album_id);
        self.api.call_bool(query)
    }

    /// Albums owned by `owner_id` (negative for a community).
    pub fn get_albums(
        &self,
        owner_id: i64,
        offset: Option<u32>,
        count: Option<u32>,
    ) -> Result<Paged<PhotoAlbum>, Error> {
        let query = MethodQuery::new("photos.getAlbums")
            .param("owner_id", owner_id)
            .opt("offset", offset)
            .opt("count", count);
        self.api.call_object(query)
    }

    pub fn get_albums_count(&self, user_id: i64) -> Result<i64, Error> {
        let query = MethodQuery::new("photos.getAlbumsCount").param("user_id", user_id);
        self.api.call_i64(query)
    }

    /// Profile photos of a user or community.
    pub fn get_profile(
        &self,
        owner_id: i64,
        params: &ProfileParams,
    ) -> Result<Paged<Photo>, Error> {
        let query = MethodQuery::new("photos.getProfile")
            .param("owner_id", owner_id)
            .flag("rev", params.rev)
            .flag("extended", params.extended)
            .opt("count", params.count)
            .opt("offset", params.offset);
        self.api.call_object(query)
    }

    /// All photos of an owner across albums, newest first.
    pub fn get_all(&self, owner_id: i64, params: &AllParams) -> Result<Paged<Photo>, Error> {
        let query = MethodQuery::new("photos.getAll")
            .param("owner_id", owner_id)
            .flag("extended", params.extended)
            .opt("count", params.count)
            .opt("offset", params.offset);
        self.api.call_object(query)
    }

    /// Full-text / geo photo search.
    pub fn search(&self, params: &SearchParams) -> Result<Paged<Photo>, Error> {
        let query = MethodQuery::new("photos.search")
            .opt("q", params.q.as_deref())
            .opt("lat", params.lat)
            .opt("long", params.long)
            .opt("start_time", params.start_time)
            .opt("end_time", params.end_time)
            .opt("sort", params.sort)
            .opt("offset", params.offset)
            .opt("count", params.count);
        self.api.call_object(query)
    }

    /// Save a photo to a wall after uploading it. `photo`, `server`, and
    /// `hash` come from the upload server's reply; the response is a bare
    /// array of saved photos.
    pub fn save_wall_photo(
        &self,
        photo: &str,
        server: i64,
        hash: &str,
        user_id: Option<i64>,
        group_id: Option<i64>,
    ) -> Result<Vec<Photo>, Error> {
        let query = MethodQuery::new("photos.saveWallPhoto")
            .opt("user_id", user_id)
            .opt("group_id", group_id)
            .param("photo", photo)
            .param("server", server)
            .param("hash", hash);
        self.api.call_object(query)
    }

    /// Upload endpoint for photos going into a specific album.
    pub fn get_upload_server(
        &self,
        album_id: Option<i64>,
        group_id: Option<i64>,
    ) -> Result<UploadServerInfo, Error> {
        let query = MethodQuery::new("photos.getUploadServer")
            .opt("album_id", album_id)
            .opt("group_id", group_id);
        self.api.call_object(query)
    }

    /// Upload endpoint for wall photos.
    pub fn get_wall_upload_server(&self, group_id: Option<i64>) -> Result<UploadServerInfo, Error> {
        let query = MethodQuery::new("photos.getWallUploadServer").opt("group_id", group_id);
        self.api.call_object(query)
    }

    /// Upload endpoint for a new profile photo.
    pub fn get_profile_upload_server(&self) -> Result<UploadServerInfo, Error> {
        self.api
            .call_object(MethodQuery::new("photos.getProfileUploadServer"))
    }

    /// Upload endpoint for photos sent in private messages.
    pub fn get_messages_upload_server(&self) -> Result<UploadServerInfo, Error> {
        self.api
            .call_object(MethodQuery::new("photos.getMessagesUploadServer"))
    }
}
