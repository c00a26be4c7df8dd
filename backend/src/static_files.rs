//! Serves the frontend bundle embedded at build time.
//!
//! Unknown paths fall back to `index.html` so the page can be reloaded on any
//! URL.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    respond_from(&STATIC_DIR, req.path())
}

fn respond_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => {
                log::warn!("no embedded asset for {}", request_path);
                HttpResponse::NotFound().body("Not Found")
            }
        },
    }
}
