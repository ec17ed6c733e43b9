//! HTTP serving of the redirect page.
//!
//! The response is prepared once from the validated configuration: status,
//! `Location` and body are fixed before the first request, so every request
//! gets the same bytes and the header can never be emitted after the body.

mod shutdown;

pub use shutdown::shutdown_signal;

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ValidatedConfig;
use crate::render::render_page;

const HTML_CONTENT_TYPE: HeaderValue = HeaderValue::from_static("text/html; charset=utf-8");
const NO_STORE: HeaderValue = HeaderValue::from_static("no-store");

/// Pre-built response served for every request.
#[derive(Debug, Clone)]
pub struct RedirectPage {
    status: StatusCode,
    location: Option<HeaderValue>,
    body: Bytes,
}

impl RedirectPage {
    pub fn new(config: &ValidatedConfig) -> Result<Self> {
        let body = Bytes::from(render_page(&config.plan, &config.page));
        let (status, location) = match config.plan.header() {
            Some((status, target)) => {
                let value = HeaderValue::from_str(target).with_context(|| {
                    format!("target {target:?} cannot be sent as a Location header")
                })?;
                (status.status_code(), Some(value))
            }
            None => (StatusCode::OK, None),
        };
        Ok(Self {
            status,
            location,
            body,
        })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn location(&self) -> Option<&HeaderValue> {
        self.location.as_ref()
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    fn response(&self) -> Response {
        let mut response = (self.status, self.body.clone()).into_response();
        let headers = response.headers_mut();
        headers.insert(header::CONTENT_TYPE, HTML_CONTENT_TYPE);
        headers.insert(header::CACHE_CONTROL, NO_STORE);
        if let Some(location) = &self.location {
            headers.insert(header::LOCATION, location.clone());
        }
        response
    }
}

/// Router answering `GET`/`HEAD` on every path with the redirect page.
pub fn router(page: RedirectPage) -> Router {
    let state = Arc::new(page);
    Router::new()
        .route("/", get(serve_page))
        .route("/{*path}", get(serve_page))
        .with_state(state)
}

async fn serve_page(State(page): State<Arc<RedirectPage>>, uri: Uri) -> Response {
    tracing::debug!(
        path = %uri.path(),
        status = page.status.as_u16(),
        "serving redirect page"
    );
    page.response()
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &ValidatedConfig) -> Result<()> {
    let page = RedirectPage::new(config)?;
    let listener = TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    tracing::info!(
        target_url = %config.plan.target(),
        first_trigger = config.plan.expected_trigger().describe(),
        "redirect page ready"
    );
    serve_on(listener, page, shutdown_signal()).await
}

/// Serve `page` on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, page: RedirectPage, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!(%addr, status = page.status.as_u16(), "waypoint listening");
    axum::serve(listener, router(page))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server terminated with an error")?;
    tracing::info!("waypoint stopped");
    Ok(())
}
