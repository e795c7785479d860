//! Mock of the VK REST endpoint for integration tests.
//!
//! Serves `GET /method/{name}` with canned envelopes. A wrong access token
//! yields the service's error envelope (code 5), an unrecognized method
//! code 3, mirroring the real endpoint closely enough for the client's
//! integration tests.

use axum::{
    extract::{Path, RawQuery},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

const VALID_TOKEN: &str = "token";

pub fn app() -> Router {
    Router::new().route("/method/{method}", get(dispatch))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Extract one parameter from a raw (possibly unescaped) query string.
fn query_param(query: &str, key: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then(|| v.to_string())
    })
}

fn error_envelope(code: i64, message: &str) -> Value {
    json!({
        "error": {
            "error_code": code,
            "error_msg": message,
            "request_params": []
        }
    })
}

async fn dispatch(Path(method): Path<String>, RawQuery(query): RawQuery) -> Json<Value> {
    let query = query.unwrap_or_default();
    if query_param(&query, "access_token").as_deref() != Some(VALID_TOKEN) {
        return Json(error_envelope(
            5,
            "User authorization failed: invalid access_token.",
        ));
    }

    let response = match method.as_str() {
        "photos.createAlbum" => created_album(&query),
        "photos.editAlbum" | "photos.deleteAlbum" => json!(1),
        "photos.getAlbumsCount" => json!(1),
        "photos.getAlbums" => json!({
            "count": 1,
            "items": [{
                "id": 136592355,
                "thumb_id": 321112194,
                "owner_id": query_param(&query, "owner_id")
                    .and_then(|v| v.parse::<i64>().ok())
                    .unwrap_or(1),
                "title": "press photos",
                "description": "",
                "created": 1307628778,
                "updated": 1398625473,
                "size": 8
            }]
        }),
        "photos.getProfileUploadServer" => json!({
            "upload_url": "http://cs618026.vk.com/upload.php?act=owner_photo"
        }),
        "photos.getMessagesUploadServer" => json!({
            "upload_url": "http://cs618026.vk.com/upload.php?act=do_add&mid=234695118",
            "album_id": -3,
            "user_id": 234618
        }),
        _ => return Json(error_envelope(3, "Unknown method passed")),
    };
    Json(json!({ "response": response }))
}

/// Echo the album attributes back the way the real endpoint does.
fn created_album(query: &str) -> Value {
    json!({
        "id": 197266686,
        "thumb_id": -1,
        "owner_id": 234698,
        "title": query_param(query, "title").unwrap_or_default(),
        "description": query_param(query, "description").unwrap_or_default(),
        "created": 1403185184,
        "updated": 1403185184,
        "privacy": 0,
        "comment_privacy": 0,
        "size": 0
    })
}
