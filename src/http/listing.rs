//! HTML directory listings.
//!
//! Installed as the `ServeDir` fallback, so it only sees requests the file
//! service could not answer itself: missing paths, rejected paths, and
//! directories without an `index.html`. Only the last produce a listing;
//! everything else is a plain 404.
//!
//! Also holds the trailing-slash guard that runs in front of `ServeDir`:
//! `/file.js/` names a directory, so a regular file there is not found.

use std::cmp::Ordering;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is in listing hrefs.
const HREF: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// One entry of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    /// Directory, or symlink to one.
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl Entry {
    fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{}@", self.name)
        } else if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }

    fn link_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// `ServeDir` fallback handler.
pub async fn directory_listing(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    let Ok(request_path) = percent_decode_str(uri.path()).decode_utf8() else {
        return StatusCode::NOT_FOUND.into_response();
    };

    // Directories without a trailing slash were already redirected.
    if !request_path.ends_with('/') {
        return StatusCode::NOT_FOUND.into_response();
    }

    let Some(dir) = resolve(&root, &request_path) else {
        tracing::debug!(path = %request_path, "Rejected path outside root");
        return StatusCode::NOT_FOUND.into_response();
    };

    match read_entries(&dir).await {
        Ok(entries) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render(&request_path, &entries),
        )
            .into_response(),
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            tracing::debug!(dir = %dir.display(), "No permission to list directory");
            (StatusCode::NOT_FOUND, "No permission to list directory").into_response()
        }
        Err(e) if is_missing(&e) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Failed to list directory");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Middleware answering 404 for a slash-terminated path that is not a directory.
pub async fn reject_file_with_trailing_slash(
    State(root): State<Arc<PathBuf>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(target) = slash_target(&root, request.uri().path()) {
        if matches!(tokio::fs::metadata(&target).await, Ok(meta) if !meta.is_dir()) {
            tracing::debug!(path = %request.uri().path(), "Trailing slash on a file");
            return StatusCode::NOT_FOUND.into_response();
        }
    }
    next.run(request).await
}

/// Filesystem target of a slash-terminated request path other than `/`.
fn slash_target(root: &Path, raw_path: &str) -> Option<PathBuf> {
    if raw_path == "/" || !raw_path.ends_with('/') {
        return None;
    }
    let decoded = percent_decode_str(raw_path).decode_utf8().ok()?;
    resolve(root, &decoded)
}

fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Map a decoded request path onto `root`.
///
/// Returns `None` for any path that could climb out of the root.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for segment in request_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.contains('\\') || s.contains(':') => return None,
            s => resolved.push(s),
        }
    }
    Some(resolved)
}

/// Read `dir`, sorted case-insensitively by name.
pub async fn read_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let is_symlink = entry.file_type().await?.is_symlink();
        // Follows symlinks; dangling links list as plain entries.
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
            is_symlink,
        });
    }

    entries.sort_by(|a, b| match a.name.to_lowercase().cmp(&b.name.to_lowercase()) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
    Ok(entries)
}

/// Render the listing page for `request_path`.
pub fn render(request_path: &str, entries: &[Entry]) -> String {
    let title = format!("Directory listing for {}", escape(request_path));

    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for entry in entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            utf8_percent_encode(&entry.link_name(), HREF),
            escape(&entry.display_name()),
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
