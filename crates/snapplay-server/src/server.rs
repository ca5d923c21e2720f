//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::sync::broadcast;
use tower_http::services::ServeDir;

use snapplay_static::assets::AssetPipeline;
use snapplay_static::{BuildConfig, Page, SiteBuilder};

use crate::reload::{
    reload_client_script, ReloadHub, ReloadMessage, RELOAD_SCRIPT_PATH, RELOAD_SOCKET_PATH,
};
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Directory served for paths that are not pages or assets
    pub public_dir: PathBuf,

    /// Site config file, watched for changes
    pub config_file: PathBuf,

    /// Absolute origin passed to the renderer
    pub site_url: Option<String>,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("public"),
            config_file: PathBuf::from("site.toml"),
            site_url: None,
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    builder: SiteBuilder,
    reload: ReloadHub,
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
    state: Arc<ServerState>,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        // Unminified output with the reload client appended to every page
        let builder = SiteBuilder::new(BuildConfig {
            minify: false,
            site_url: config.site_url.clone(),
            scripts: vec![RELOAD_SCRIPT_PATH.to_string()],
            ..Default::default()
        });

        let state = Arc::new(ServerState {
            builder,
            reload: ReloadHub::new(),
        });

        Self { config, state }
    }

    /// Hub used to push reloads to connected browsers.
    pub fn reload_hub(&self) -> ReloadHub {
        self.state.reload.clone()
    }

    /// Build the router serving pages, assets and the reload endpoints.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(page_handler))
            .route("/index.html", get(page_handler))
            .route("/privacy", get(page_handler))
            .route("/privacy/", get(page_handler))
            .route("/privacy/index.html", get(page_handler))
            .route("/assets/site.css", get(css_handler))
            .route("/assets/site.js", get(js_handler))
            .route(RELOAD_SOCKET_PATH, get(ws_handler))
            .route(RELOAD_SCRIPT_PATH, get(reload_script_handler))
            .fallback_service(ServeDir::new(&self.config.public_dir))
            .with_state(Arc::clone(&self.state))
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let (watcher, mut rx) = FileWatcher::new(&self.config.public_dir, &self.config.config_file)
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let hub = self.reload_hub();
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&hub, event);
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = self.router();

        tracing::info!("Starting dev server at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::debug!("Could not open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Handle file watch events.
fn handle_watch_event(hub: &ReloadHub, event: WatchEvent) {
    match event {
        WatchEvent::ConfigModified(path) => {
            // The renderer was configured at startup
            tracing::warn!(
                "{} changed; restart the dev server to apply new settings",
                path.display()
            );
        }
        WatchEvent::Created(path) | WatchEvent::Deleted(path) | WatchEvent::Modified(path) => {
            tracing::info!("Public file changed: {}", path.display());
            hub.send(ReloadMessage::Reload);
        }
    }
}

/// Render whichever page the request path names.
async fn page_handler(State(state): State<Arc<ServerState>>, uri: Uri) -> Response {
    let Some(page) = Page::from_request_path(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match state.builder.render_page(page) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {:?}: {}", page, e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn css_handler(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        state.builder.render_css(),
    )
}

async fn js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Forward reload messages to one connected browser.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.reload.subscribe();

    if send_message(&mut socket, &ReloadMessage::Connected)
        .await
        .is_err()
    {
        return;
    }

    forward_reloads(&mut socket, &mut rx).await;
}

/// Relay hub messages until the browser closes the socket or the hub goes away.
async fn forward_reloads(socket: &mut WebSocket, rx: &mut broadcast::Receiver<ReloadMessage>) {
    loop {
        tokio::select! {
            incoming = socket.recv() => {
                if closes_socket(&incoming) {
                    break;
                }
            }
            msg = rx.recv() => match msg {
                Ok(msg) => {
                    if send_message(socket, &msg).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => break,
            },
        }
    }
}

/// Whether a frame read from the browser ends the connection.
fn closes_socket(incoming: &Option<Result<Message, axum::Error>>) -> bool {
    matches!(incoming, Some(Ok(Message::Close(_))) | Some(Err(_)) | None)
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), axum::Error> {
    let json = serde_json::to_string(msg).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

/// Handler for the reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        reload_client_script(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use std::fs;
    use tempfile::tempdir;
    use tower::ServiceExt;

    async fn get_body(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert_eq!(server.config.config_file, PathBuf::from("site.toml"));
    }

    #[tokio::test]
    async fn serves_landing_with_reload_script() {
        let server = DevServer::new(DevServerConfig::default());

        let (status, body) = get_body(server.router(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Zero Internet Needed"));
        assert!(body.contains("<script src=\"/__reload.js\"></script>"));
    }

    #[tokio::test]
    async fn serves_privacy_with_and_without_slash() {
        let server = DevServer::new(DevServerConfig::default());

        for uri in ["/privacy", "/privacy/"] {
            let (status, body) = get_body(server.router(), uri).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("6. Contact Us"));
        }
    }

    #[tokio::test]
    async fn serves_assets() {
        let server = DevServer::new(DevServerConfig::default());

        let (status, css) = get_body(server.router(), "/assets/site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(css.contains(".feature-card"));

        let (_, script) = get_body(server.router(), "/__reload.js").await;
        assert!(script.contains("WebSocket"));
    }

    #[tokio::test]
    async fn falls_back_to_public_dir() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("robots.txt"), "User-agent: *").unwrap();

        let server = DevServer::new(DevServerConfig {
            public_dir: temp.path().to_path_buf(),
            ..Default::default()
        });

        let (status, body) = get_body(server.router(), "/robots.txt").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "User-agent: *");

        let (status, _) = get_body(server.router(), "/missing.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn browser_close_ends_forwarding() {
        assert!(closes_socket(&None));
        assert!(closes_socket(&Some(Ok(Message::Close(None)))));
        assert!(closes_socket(&Some(Err(axum::Error::new(std::io::Error::other(
            "reset"
        ))))));

        assert!(!closes_socket(&Some(Ok(Message::Text("ping".into())))));
        assert!(!closes_socket(&Some(Ok(Message::Ping(Default::default())))));
    }

    #[test]
    fn public_changes_trigger_reload() {
        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        handle_watch_event(&hub, WatchEvent::Modified(PathBuf::from("public/icon.png")));
        assert_eq!(rx.try_recv().unwrap(), ReloadMessage::Reload);

        handle_watch_event(&hub, WatchEvent::ConfigModified(PathBuf::from("site.toml")));
        assert!(rx.try_recv().is_err());
    }
}
