//! `/files/<name>` handlers.
//!
//! Names are appended to the serve root as is. There is no traversal
//! guard and no locking: concurrent writes to one name race on the
//! filesystem and the last writer wins.

use std::path::Path;

use anyhow::Context;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::config::ServeRoot;
use crate::http::response::{Response, ResponseBuilder, StatusCode};

const FILES_PREFIX: &str = "/files/";

fn file_name(path: &str) -> &str {
    path.strip_prefix(FILES_PREFIX).unwrap_or("")
}

/// `GET /files/<name>`: the file's bytes, or an empty 404 when it
/// cannot be read.
pub async fn read(path: &str, root: &ServeRoot) -> Response {
    let target = root.resolve(file_name(path));

    match tokio::fs::read(&target).await {
        Ok(contents) => ResponseBuilder::new(StatusCode::Ok)
            .content_type("application/octet-stream")
            .body(contents)
            .build(),
        Err(e) => {
            tracing::warn!(path = %target.display(), error = %e, "file read failed");
            Response::not_found()
        }
    }
}

/// `POST /files/<name>`: stores the request body and answers 201.
///
/// The stored content is the body with surrounding whitespace and
/// trailing NUL bytes removed. A failed write is logged and still
/// answered with 201.
pub async fn write(path: &str, body: &[u8], root: &ServeRoot) -> Response {
    let target = root.resolve(file_name(path));
    let contents = file_contents(body);

    if let Err(e) = store(&target, contents).await {
        tracing::warn!(path = %target.display(), error = %e, "file write failed");
    }

    Response::created()
}

/// Whitespace-trimmed body with trailing NULs stripped.
pub fn file_contents(body: &[u8]) -> &[u8] {
    let trimmed = body.trim_ascii();
    let end = trimmed
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |i| i + 1);
    &trimmed[..end]
}

async fn store(target: &Path, contents: &[u8]) -> anyhow::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o666);

    let mut file = options
        .open(target)
        .await
        .with_context(|| format!("opening {}", target.display()))?;
    file.write_all(contents).await.context("writing file")?;
    file.sync_all().await.context("syncing file")?;

    Ok(())
}
