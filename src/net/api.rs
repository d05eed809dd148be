//! REST transport for the backend control endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the transport reports a network error, since the endpoints
//! only exist next to the page that served this bundle.
//!
//! ERROR HANDLING
//! ==============
//! Only transport-level failures are errors. A request that reaches the
//! backend and comes back with a non-2xx status is still a completed
//! exchange; callers decide whether to log it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

pub const START_PATH: &str = "/start";
pub const STOP_PATH: &str = "/stop";
pub const MINIMIZE_PATH: &str = "/minimize";
pub const SETTINGS_PATH: &str = "/update-settings";
/// MJPEG stream of the camera, used as an `<img>` source.
pub const VIDEO_FEED_PATH: &str = "/video_feed";

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Failure to complete a control request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("network error: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

/// An outbound POST: same-origin path plus an optional JSON body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRequest {
    pub path: &'static str,
    pub body: Option<String>,
}

/// A request that reached the backend and produced a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Completed {
    pub status: u16,
}

impl Completed {
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between command dispatch and the network.
#[allow(async_fn_in_trait)]
pub trait CommandTransport {
    /// POST `request` and wait for the response headers.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] if the request could not be built or sent.
    async fn post(&self, request: &CommandRequest) -> Result<Completed, CommandError>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl CommandTransport for HttpTransport {
    async fn post(&self, request: &CommandRequest) -> Result<Completed, CommandError> {
        #[cfg(feature = "csr")]
        {
            let builder = gloo_net::http::Request::post(request.path);
            let prepared = match &request.body {
                Some(body) => builder
                    .header("Content-Type", JSON_CONTENT_TYPE)
                    .body(body.clone()),
                None => builder.build(),
            }
            .map_err(|e| CommandError::Encode(e.to_string()))?;
            let resp = prepared
                .send()
                .await
                .map_err(|e| CommandError::Network(e.to_string()))?;
            Ok(Completed { status: resp.status() })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(unavailable_error())
        }
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable_error() -> CommandError {
    CommandError::Network("not available outside the browser".to_owned())
}
