use axum::http::Request;
use axum::http::header::LOCATION;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

fn config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).unwrap()
}

fn missing_site_root() -> PathBuf {
    std::env::temp_dir().join("desdr-site-root-does-not-exist")
}

fn leptos_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("desdr")
        .site_root(missing_site_root().to_string_lossy().into_owned())
        .build()
}

fn site_router() -> Router {
    app(leptos_options(), &config())
}

async fn get_response(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_status(router: Router, uri: &str) -> StatusCode {
    get_response(router, uri).await.status()
}

async fn get_page(uri: &str) -> (StatusCode, String) {
    let response = get_response(site_router(), uri).await;
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn healthz_returns_ok() {
    let router = base_routes(&config(), &missing_site_root());
    assert_eq!(get_status(router, "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_body_is_empty() {
    let router = base_routes(&config(), &missing_site_root());
    let response = router
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn missing_image_is_not_found() {
    let router = base_routes(&config(), &missing_site_root());
    assert_eq!(get_status(router, "/images/logo-usaid.png").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn images_are_served_from_configured_dir() {
    let dir = std::env::temp_dir().join(format!("desdr-images-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("main.png"), b"png").unwrap();

    let cfg = ServerConfig { images_dir: Some(dir.clone()), ..config() };
    let router = base_routes(&cfg, &missing_site_root());
    assert_eq!(get_status(router, "/images/main.png").await, StatusCode::OK);

    std::fs::remove_dir_all(&dir).unwrap();
}

// =============================================================
// Full site
// =============================================================

#[tokio::test]
async fn home_page_renders_hero() {
    let (status, html) = get_page("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(">Open Insurance Toolkit</h1>"));
    assert!(html.contains("id=\"toolkit-section\""));
    assert!(!html.contains("Page not found"));
}

#[tokio::test]
async fn tool_pages_render_their_title() {
    for page in [Page::SurveyYourWay, Page::Reptile, Page::Sliders] {
        let entry = site::catalog::DESDR.tool(page).unwrap();
        let (status, html) = get_page(page.path()).await;
        assert_eq!(status, StatusCode::OK, "{}", page.path());
        assert!(html.contains(&format!(">{}</h1>", entry.name)), "{}", page.path());
        assert!(!html.contains("Page not found"), "{}", page.path());
    }
}

#[tokio::test]
async fn unknown_path_renders_not_found_with_404() {
    let (status, html) = get_page("/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn trailing_slash_redirects_to_page() {
    let response = get_response(site_router(), "/reptile/").await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/reptile");
}

#[tokio::test]
async fn trailing_slash_redirect_keeps_query() {
    let response = get_response(site_router(), "/sliders/?region=kenya").await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.headers()[LOCATION], "/sliders?region=kenya");
}

#[tokio::test]
async fn nested_unknown_path_is_not_redirected() {
    let (status, html) = get_page("/reptile/extra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}

#[test]
fn canonical_location_only_for_non_canonical_page_paths() {
    let location = |uri: &str| canonical_location(&uri.parse().unwrap());
    assert_eq!(location("/survey-your-way/").as_deref(), Some("/survey-your-way"));
    assert_eq!(location("/reptile"), None);
    assert_eq!(location("/"), None);
    assert_eq!(location("/missing/"), None);
}
