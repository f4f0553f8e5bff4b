use std::io::Read;

use flate2::read::GzDecoder;
use plainhttp::config::ServeRoot;
use plainhttp::handler::{echo, files, handle_request, user_agent};
use plainhttp::http::negotiate::Encoding;
use plainhttp::http::request::Request;
use plainhttp::http::response::StatusCode;

fn request(lines: &[&str], body: Option<&[u8]>) -> Request {
    Request {
        lines: lines.iter().map(|l| l.to_string()).collect(),
        body: body.map(|b| b.to_vec()),
    }
}

fn serve_root(dir: &tempfile::TempDir) -> ServeRoot {
    ServeRoot::new(format!("{}/", dir.path().display()))
}

fn gunzip(bytes: &[u8]) -> String {
    let mut out = String::new();
    GzDecoder::new(bytes).read_to_string(&mut out).unwrap();
    out
}

#[test]
fn test_echo_plain() {
    let response = echo::handle("/echo/abc", Encoding::Identity);

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_type, Some("text/plain"));
    assert_eq!(response.encoding, Encoding::Identity);
    assert_eq!(response.body, b"abc");
}

#[test]
fn test_echo_gzip_round_trips() {
    let response = echo::handle("/echo/hello-world", Encoding::Gzip);

    assert_eq!(response.encoding, Encoding::Gzip);
    assert_ne!(response.body, b"hello-world");
    assert_eq!(response.content_length(), response.body.len());
    assert_eq!(gunzip(&response.body), "hello-world");
}

#[test]
fn test_echo_without_value_is_empty() {
    let response = echo::handle("/echo", Encoding::Identity);
    assert!(response.body.is_empty());
}

#[test]
fn test_user_agent_reflected() {
    let req = request(&["GET /user-agent HTTP/1.1", "User-Agent: foobar/1.2.3"], None);
    let response = user_agent::handle(&req);

    assert_eq!(response.body, b"foobar/1.2.3");
    assert_eq!(response.content_type, Some("text/plain"));
    assert_eq!(response.encoding, Encoding::Identity);
}

#[test]
fn test_user_agent_missing_is_empty() {
    let req = request(&["GET /user-agent HTTP/1.1", "Host: a"], None);
    assert!(user_agent::handle(&req).body.is_empty());
}

#[test]
fn test_file_contents_trimming() {
    assert_eq!(files::file_contents(b"  data\r\n"), b"data");
    assert_eq!(files::file_contents(b"data\0\0\0"), b"data");
    assert_eq!(files::file_contents(b"\n\0\0"), b"");
    assert_eq!(files::file_contents(b"a\r\nb"), b"a\r\nb");
}

#[tokio::test]
async fn test_file_write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let root = serve_root(&dir);

    let created = files::write("/files/notes.txt", b"hello file\n", &root).await;
    assert_eq!(created.status, StatusCode::Created);
    assert!(created.body.is_empty());

    let on_disk = std::fs::read(dir.path().join("notes.txt")).unwrap();
    assert_eq!(on_disk, b"hello file");

    let read = files::read("/files/notes.txt", &root).await;
    assert_eq!(read.status, StatusCode::Ok);
    assert_eq!(read.content_type, Some("application/octet-stream"));
    assert_eq!(read.body, b"hello file");
}

#[tokio::test]
async fn test_file_write_truncates_existing() {
    let dir = tempfile::tempdir().unwrap();
    let root = serve_root(&dir);
    std::fs::write(dir.path().join("a"), b"a much longer previous content").unwrap();

    files::write("/files/a", b"short", &root).await;

    assert_eq!(std::fs::read(dir.path().join("a")).unwrap(), b"short");
}

#[tokio::test]
async fn test_file_read_missing_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let response = files::read("/files/nope", &serve_root(&dir)).await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
    assert_eq!(response.content_type, None);
}

#[tokio::test]
async fn test_file_write_failure_still_created() {
    let dir = tempfile::tempdir().unwrap();
    let response = files::write("/files/missing-dir/x", b"data", &serve_root(&dir)).await;

    assert_eq!(response.status, StatusCode::Created);
    assert!(!dir.path().join("missing-dir").exists());
}

#[tokio::test]
async fn test_dispatch_root() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(&["GET / HTTP/1.1", "Host: a"], None);

    let response = handle_request(&req, &serve_root(&dir)).await.unwrap();
    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.body.is_empty());
    assert!(!response.must_close());
}

#[tokio::test]
async fn test_dispatch_echo_negotiates_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(
        &["GET /echo/abc HTTP/1.1", "Accept-Encoding: foo, gzip"],
        None,
    );

    let response = handle_request(&req, &serve_root(&dir)).await.unwrap();
    assert_eq!(response.encoding, Encoding::Gzip);
    assert_eq!(gunzip(&response.body), "abc");
}

#[tokio::test]
async fn test_dispatch_user_agent_ignores_accept_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(
        &["GET /user-agent HTTP/1.1", "User-Agent: ua", "Accept-Encoding: gzip"],
        None,
    );

    let response = handle_request(&req, &serve_root(&dir)).await.unwrap();
    assert_eq!(response.encoding, Encoding::Identity);
    assert_eq!(response.body, b"ua");
}

#[tokio::test]
async fn test_dispatch_applies_connection_close() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(&["GET /banana HTTP/1.1", "Connection: close"], None);

    let response = handle_request(&req, &serve_root(&dir)).await.unwrap();
    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.must_close());
}

#[tokio::test]
async fn test_dispatch_post_files_uses_body() {
    let dir = tempfile::tempdir().unwrap();
    let req = request(
        &["POST /files/upload HTTP/1.1", "Content-Length: 7"],
        Some(b"payload"),
    );

    let response = handle_request(&req, &serve_root(&dir)).await.unwrap();
    assert_eq!(response.status, StatusCode::Created);
    assert_eq!(std::fs::read(dir.path().join("upload")).unwrap(), b"payload");
}

#[tokio::test]
async fn test_dispatch_sends_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let root = serve_root(&dir);

    let unknown_post = request(&["POST /other HTTP/1.1"], Some(b"x"));
    assert!(handle_request(&unknown_post, &root).await.is_none());

    let degenerate = request(&[""], None);
    assert!(handle_request(&degenerate, &root).await.is_none());

    let no_target = request(&["GET"], None);
    assert!(handle_request(&no_target, &root).await.is_none());
}
