use std::fs;
use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Response, StatusCode};
use mdserve::{app, Config, MarkdownRouter};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Temp dir with the served root one level down, so traversal targets exist outside it
fn fixture() -> (tempfile::TempDir, MarkdownRouter) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    write(&root, "a.md", "# A\n\nfirst\nsecond");
    write(&root, ".hidden/b.md", "# hidden");
    write(&root, "notes.md", "old notes");
    write(&root, "style.css", "body { color: red; }");
    write(dir.path(), "outside.md", "untouchable");
    let router = MarkdownRouter::new(&root).unwrap();
    (dir, router)
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn content_type(response: &Response<Body>) -> String {
    response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string()
}

#[tokio::test]
async fn index_lists_only_visible_markdown() {
    let (_dir, router) = fixture();
    for path in ["/", ""] {
        let response = router.handle(&Method::GET, path, b"");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/html; charset=utf-8");
        let html = body_text(response).await;
        assert!(html.contains("href=\"/a.md\""));
        assert!(html.contains("href=\"/edit/notes.md\""));
        assert!(!html.contains("b.md"));
        assert!(!html.contains("style.css"));
    }
}

#[tokio::test]
async fn viewer_renders_markdown() {
    let (_dir, router) = fixture();
    let response = router.handle(&Method::GET, "/a.md", b"");
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<title>a.md</title>"));
    assert!(html.contains("<h1>A</h1>"));
    assert!(html.contains("first<br />\nsecond"));
    assert!(html.contains("Last modified:"));
    assert!(html.contains("← Back to file list"));
}

#[tokio::test]
async fn missing_markdown_is_404_with_filename() {
    let (_dir, router) = fixture();
    let response = router.handle(&Method::GET, "/missing.md", b"");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("missing.md"));

    let response = router.handle(&Method::GET, "/edit/missing.md", b"");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("missing.md"));
}

#[tokio::test]
async fn unreadable_markdown_is_500() {
    let (dir, router) = fixture();
    fs::write(dir.path().join("root/binary.md"), [0xff, 0xfe, 0xfd]).unwrap();
    let response = router.handle(&Method::GET, "/binary.md", b"");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_text(response).await.starts_with("Error reading file:"));
}

#[tokio::test]
async fn viewer_refuses_traversal() {
    let (_dir, router) = fixture();
    let response = router.handle(&Method::GET, "/../outside.md", b"");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(!body_text(response).await.contains("untouchable"));
}

#[tokio::test]
async fn save_overwrites_document() {
    let (dir, router) = fixture();
    let response = router.handle(&Method::POST, "/save/notes.md", b"# Hi");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true }));
    assert_eq!(fs::read_to_string(dir.path().join("root/notes.md")).unwrap(), "# Hi");

    // Saving the same content again leaves identical bytes
    router.handle(&Method::POST, "/save/notes.md", b"# Hi");
    assert_eq!(fs::read(dir.path().join("root/notes.md")).unwrap(), b"# Hi");
}

#[tokio::test]
async fn saved_content_is_what_the_viewer_renders() {
    let (_dir, router) = fixture();
    let content = "## Saved\n\n| k | v |\n|---|---|\n| x | 1 |\n";
    router.handle(&Method::POST, "/save/notes.md", content.as_bytes());

    let viewed = body_text(router.handle(&Method::GET, "/notes.md", b"")).await;
    let rendered = mdserve::MarkdownService::new().render(content);
    assert!(viewed.contains(&rendered));
}

#[tokio::test]
async fn save_creates_new_file_in_subdirectory() {
    let (dir, router) = fixture();
    fs::create_dir_all(dir.path().join("root/journal")).unwrap();
    let response = router.handle(&Method::POST, "/save/journal/today.md", b"entry");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(fs::read_to_string(dir.path().join("root/journal/today.md")).unwrap(), "entry");
}

#[tokio::test]
async fn save_traversal_is_forbidden_and_leaves_target_untouched() {
    let (dir, router) = fixture();
    let response = router.handle(&Method::POST, "/save/../outside.md", b"pwned");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(fs::read_to_string(dir.path().join("outside.md")).unwrap(), "untouchable");
}

#[tokio::test]
async fn save_failure_reports_json_error() {
    let (dir, router) = fixture();
    let response = router.handle(&Method::POST, "/save/no-such-dir/x.md", b"text");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["success"], serde_json::json!(false));
    assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));

    let response = router.handle(&Method::POST, "/save/notes.md", &[0xff, 0xfe]);
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(fs::read_to_string(dir.path().join("root/notes.md")).unwrap(), "old notes");
}

/// Read back the editor's template literal the way a JavaScript engine would
fn embedded_editor_content(html: &str) -> String {
    let marker = "const INITIAL_CONTENT = `";
    let start = html.find(marker).unwrap() + marker.len();
    let end = start + html[start..].find("`;</script>").unwrap();

    let mut unescaped = String::new();
    let mut chars = html[start..end].chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next().unwrap() {
            'x' => {
                let hex: String = chars.by_ref().take(2).collect();
                unescaped.push(u8::from_str_radix(&hex, 16).unwrap() as char);
            }
            next => unescaped.push(next),
        }
    }
    unescaped
}

#[tokio::test]
async fn editor_preserves_backticks_and_dollars() {
    let (dir, router) = fixture();
    let original = "Price: `$5` and ${x} with \\ slash";
    fs::write(dir.path().join("root/notes.md"), original).unwrap();

    let response = router.handle(&Method::GET, "/edit/notes.md", b"");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(embedded_editor_content(&body_text(response).await), original);
}

#[tokio::test]
async fn editor_content_with_comment_and_script_openers_stays_in_its_script() {
    let (dir, router) = fixture();
    let original = "See <!--<script> for details </script>";
    fs::write(dir.path().join("root/notes.md"), original).unwrap();

    let html = body_text(router.handle(&Method::GET, "/edit/notes.md", b"")).await;
    assert_eq!(html.matches("<script").count(), 2);
    assert!(!html.contains("<!--"));
    assert_eq!(embedded_editor_content(&html), original);
}

#[tokio::test]
async fn non_markdown_falls_back_to_static_files() {
    let (_dir, router) = fixture();
    let response = router.handle(&Method::GET, "/style.css", b"");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/css; charset=utf-8");
    assert_eq!(body_text(response).await, "body { color: red; }");

    let response = router.handle(&Method::GET, "/edit/style.css", b"");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = router.handle(&Method::GET, "/../outside.txt", b"");
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn directory_without_index_is_listed() {
    let (dir, router) = fixture();
    write(&dir.path().join("root"), "assets/logo.png", "png");
    write(&dir.path().join("root"), "assets/fonts/a.woff", "woff");

    let response = router.handle(&Method::GET, "/assets", b"");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/html; charset=utf-8");
    let html = body_text(response).await;
    assert!(html.contains("<a href=\"/assets/fonts/\">fonts/</a>"));
    assert!(html.contains("<a href=\"/assets/logo.png\">logo.png</a>"));

    write(&dir.path().join("root"), "assets/index.html", "<p>home</p>");
    let response = router.handle(&Method::GET, "/assets/", b"");
    assert_eq!(body_text(response).await, "<p>home</p>");
}

#[tokio::test]
async fn filesystem_errors_other_than_missing_are_500() {
    let (_dir, router) = fixture();
    let too_long = format!("/{}.md", "x".repeat(300));
    let response = router.handle(&Method::GET, &too_long, b"");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = router.handle(&Method::GET, &format!("/{}.css", "x".repeat(300)), b"");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn other_methods_and_routes_are_rejected() {
    let (_dir, router) = fixture();
    assert_eq!(router.handle(&Method::POST, "/save/notes.txt", b"x").status(), StatusCode::NOT_FOUND);
    assert_eq!(router.handle(&Method::POST, "/notes.md", b"x").status(), StatusCode::NOT_FOUND);
    assert_eq!(router.handle(&Method::DELETE, "/notes.md", b"").status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn serves_over_http_with_percent_decoding() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("root");
    write(&root, "my notes/page one.md", "# One");
    write(dir.path(), "outside.md", "untouchable");

    let config = Config::with_custom(root.clone(), Some(0), None);
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app(&config).unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let page = client.get(format!("{base}/my%20notes/page%20one.md")).send().await.unwrap();
    assert_eq!(page.status().as_u16(), 200);
    assert!(page.text().await.unwrap().contains("<h1>One</h1>"));

    let saved = client
        .post(format!("{base}/save/my%20notes/page%20one.md"))
        .body("# Two")
        .send()
        .await
        .unwrap();
    assert_eq!(saved.status().as_u16(), 200);
    assert_eq!(saved.text().await.unwrap(), r#"{"success":true}"#);
    assert_eq!(fs::read_to_string(root.join("my notes/page one.md")).unwrap(), "# Two");

    let denied = client
        .post(format!("{base}/save/..%2Foutside.md"))
        .body("pwned")
        .send()
        .await
        .unwrap();
    assert_eq!(denied.status().as_u16(), 403);
    assert_eq!(fs::read_to_string(dir.path().join("outside.md")).unwrap(), "untouchable");
}
