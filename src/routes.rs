use {
    crate::{
        app::Route,
        config::Config,
        session::Session,
        ssr::{html_app, page_title, render_route},
        views::NotFound,
    },
    axum::{
        extract::State,
        http::{Method, StatusCode, Uri},
        response::{Html, IntoResponse, Response},
        routing::get,
        Router,
    },
    dioxus::prelude::*,
    std::{ops::Deref, sync::Arc, time::Duration},
    tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer},
};

#[derive(Clone)]
pub struct AppState(pub Arc<Config>);

impl AppState {
    pub fn new(config: Config) -> Self {
        Self(Arc::new(config))
    }
}

// deref so you can still access the config fields easily
impl Deref for AppState {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest_service(
            "/public",
            ServeDir::new(&state.public_dir).not_found_service(get(not_found_endpoint)),
        )
        .nest_service(
            "/assets",
            ServeDir::new(&state.assets_dir).not_found_service(get(not_found_endpoint)),
        )
        .fallback(page_endpoint)
        .with_state(state)
        .layer((
            TraceLayer::new_for_http(),
            TimeoutLayer::new(Duration::from_secs(10)),
        ))
}

/// Server-rendered snapshot of `path` as a full HTML page.
pub fn render_page(path: &str, session: Session) -> (StatusCode, Html<String>) {
    let route = path.parse::<Route>().ok();
    let status = match route {
        Some(Route::NotFound { .. }) | None => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::OK,
    };
    let title = route.as_ref().map_or("404", page_title);
    tracing::debug!(path, %status, "rendering page");

    (status, Html(html_app(&render_route(path, session), title)))
}

async fn page_endpoint(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    render_page(uri.path(), state.session).into_response()
}

async fn not_found_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(html_app(
            &dioxus_ssr::render_element(rsx! {
                NotFound { segments: Vec::new() }
            }),
            "404",
        )),
    )
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        axum::{body::Body, http::Request},
        http_body_util::BodyExt,
        tokio::net::TcpListener,
        tower::ServiceExt,
    };

    fn test_app(session: Session) -> Router {
        app(AppState::new(Config {
            session,
            ..Config::default()
        }))
    }

    async fn get_page(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn home_renders_with_navbar() {
        let (status, body) = get_page(test_app(Session::simulated()), "/home").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Home</title>"));
        assert!(body.contains("<nav"));
        assert!(body.contains("data-menu=\"notifications\""));
    }

    #[tokio::test]
    async fn anonymous_server_offers_login() {
        let (status, body) = get_page(test_app(Session::anonymous()), "/profile").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Sign Up"));
        assert!(!body.contains("data-menu="));
    }

    #[tokio::test]
    async fn unknown_path_is_404_with_chrome() {
        let (status, body) = get_page(test_app(Session::simulated()), "/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("<title>404</title>"));
        assert!(body.contains("<nav"));
    }

    #[tokio::test]
    async fn serves_public_files() {
        let (status, body) = get_page(test_app(Session::simulated()), "/public/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("User-agent"));
    }

    #[tokio::test]
    async fn serves_stylesheets_linked_by_pages() {
        let (status, body) = get_page(
            test_app(Session::simulated()),
            "/assets/styling/navbar.css",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(".dropdown-item"));
    }

    #[tokio::test]
    async fn missing_public_file_is_404() {
        let (status, body) = get_page(test_app(Session::simulated()), "/public/nope.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("id=\"not-found\""));
    }

    #[tokio::test]
    async fn post_is_not_allowed() {
        let response = test_app(Session::simulated())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/home")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    // You can also spawn a server and talk to it like any other HTTP server:
    #[tokio::test]
    async fn the_real_deal() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, test_app(Session::simulated()))
                .await
                .unwrap();
        });

        let client =
            hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new())
                .build_http();

        let response = client
            .request(
                Request::builder()
                    .uri(format!("http://{addr}/profile"))
                    .header("Host", "localhost")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8_lossy(&body).contains("<title>Profile</title>"));
    }
}
