//! Compiled front-end bundle
//!
//! Real files are served as-is; any other path gets `index.html` so the
//! client-side router can resolve `/menu`, `/cart` and friends.

use std::path::Path;

use tower_http::services::{ServeDir, ServeFile};

pub fn serve_dir(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}
