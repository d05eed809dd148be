//! Status feed: the `/ws` socket that pushes mode, gesture, and finger count.
//!
//! The feed owns exactly one live socket through a [`ConnectionManager`].
//! Every close, clean or not, schedules a single reconnect after a fixed
//! delay. The replacement handle is installed in the same slot and the old
//! one is abandoned without being closed. Nothing is ever sent on the socket.
//!
//! The manager is shared between the socket callbacks. The live socket's close
//! handler holds it strongly, so the feed stays alive for as long as a socket
//! is installed, and replacing the socket drops the old handler's reference.
//!
//! All socket glue is gated behind `#[cfg(feature = "csr")]`. The manager, the
//! decoder, and the open/frame/close handlers are plain Rust so they can be
//! tested natively.
//!
//! ERROR HANDLING
//! ==============
//! Malformed status frames are logged and dropped without touching the panel
//! or the connection. A socket that cannot even be constructed is retried on
//! the same fixed delay as a closed one.

#[cfg(test)]
#[path = "status_feed_test.rs"]
mod status_feed_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::types::StatusUpdate;
use crate::state::panel::{ConnectionStatus, PanelState};

/// Identifies one installed handle. Events from older generations are stale.
pub type Generation = u64;

/// A manager as held by the page and by socket callbacks.
pub type SharedManager<H> = Rc<RefCell<ConnectionManager<H>>>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatusError {
    #[error("malformed status message: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    #[error("could not open status socket {url}: {reason}")]
    Socket { url: String, reason: String },
}

/// Socket URL for `path` on `host`. Always the unencrypted `ws` scheme.
pub fn status_url(host: &str, path: &str) -> String {
    format!("ws://{host}{path}")
}

/// Decode one text frame.
///
/// # Errors
///
/// Returns [`StatusError::Decode`] if `text` is not JSON or lacks
/// `mode`, `gesture`, or `fingers`.
pub fn parse_status(text: &str) -> Result<StatusUpdate, StatusError> {
    serde_json::from_str(text).map_err(|e| StatusError::Decode(e.to_string()))
}

/// Single-slot owner of the live status socket.
///
/// Generic over the handle so the replacement and reconnect rules can be
/// exercised without a browser.
#[derive(Debug)]
pub struct ConnectionManager<H> {
    current: Option<H>,
    generation: Generation,
    reconnect_pending: bool,
    reconnect_delay: Duration,
}

impl<H> ConnectionManager<H> {
    pub fn new(reconnect_delay: Duration) -> Self {
        Self {
            current: None,
            generation: 0,
            reconnect_pending: false,
            reconnect_delay,
        }
    }

    #[cfg(test)]
    pub fn current(&self) -> Option<&H> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Generation the next [`install`](Self::install) will assign.
    pub fn next_generation(&self) -> Generation {
        self.generation + 1
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.current.is_some() && generation == self.generation
    }

    #[cfg(test)]
    pub fn reconnect_pending(&self) -> bool {
        self.reconnect_pending
    }

    /// Mark the start of a connection attempt; the pending reconnect, if any,
    /// has fired.
    pub fn begin_attempt(&mut self) {
        self.reconnect_pending = false;
    }

    /// Install `handle` as the live connection.
    ///
    /// Returns its generation and the abandoned previous handle.
    pub fn install(&mut self, handle: H) -> (Generation, Option<H>) {
        self.generation += 1;
        self.reconnect_pending = false;
        let abandoned = self.current.replace(handle);
        (self.generation, abandoned)
    }

    /// Record a close event from the handle of `generation`.
    ///
    /// Returns the delay after which to reconnect, exactly once per live
    /// handle. Closes from abandoned handles and repeated closes return `None`.
    pub fn handle_close(&mut self, generation: Generation) -> Option<Duration> {
        if generation != self.generation || self.reconnect_pending {
            return None;
        }
        self.schedule()
    }

    /// Record a failed attempt that never produced a handle.
    pub fn handle_connect_failure(&mut self) -> Option<Duration> {
        if self.reconnect_pending {
            return None;
        }
        self.schedule()
    }

    fn schedule(&mut self) -> Option<Duration> {
        self.reconnect_pending = true;
        Some(self.reconnect_delay)
    }
}

/// Make one connection attempt and install the resulting handle.
///
/// `open` receives the generation the handle will be installed under and a
/// strong reference to `manager` for the handle to keep. Once installed, that
/// reference is what keeps the feed alive after the caller lets go. The
/// previous handle is dropped, releasing its own reference.
///
/// # Errors
///
/// Returns whatever `open` fails with; nothing is installed in that case.
pub fn connect_with<H, E>(
    manager: &SharedManager<H>,
    open: impl FnOnce(Generation, SharedManager<H>) -> Result<H, E>,
) -> Result<Generation, E> {
    manager.borrow_mut().begin_attempt();
    let generation = manager.borrow().next_generation();
    let handle = open(generation, Rc::clone(manager))?;
    let (installed, abandoned) = manager.borrow_mut().install(handle);
    drop(abandoned);
    Ok(installed)
}

/// What an inbound frame did to the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Applied,
    /// Sent by a handle that has since been replaced.
    Stale,
    NonText,
    Malformed(StatusError),
}

/// Open event from the handle of `generation`. Returns whether the panel changed.
pub fn apply_open<H>(manager: &ConnectionManager<H>, generation: Generation, panel: &mut PanelState) -> bool {
    if !manager.is_current(generation) {
        return false;
    }
    log::info!("status socket connected");
    panel.connection = ConnectionStatus::Connected;
    true
}

/// Route one inbound frame into `panel`. `frame` is `None` for binary frames.
///
/// Only a well-formed text frame from the live handle changes the panel.
pub fn apply_frame<H>(
    manager: &ConnectionManager<H>,
    generation: Generation,
    frame: Option<&str>,
    panel: &mut PanelState,
) -> FrameOutcome {
    if !manager.is_current(generation) {
        log::warn!("ignoring frame from replaced status socket {generation}");
        return FrameOutcome::Stale;
    }
    let Some(text) = frame else {
        log::warn!("ignoring non-text status frame");
        return FrameOutcome::NonText;
    };
    match parse_status(text) {
        Ok(status) => {
            log::debug!("status: {} / {} / {}", status.mode, status.gesture, status.fingers);
            panel.apply_status(&status);
            FrameOutcome::Applied
        }
        Err(e) => {
            log::error!("{e}");
            FrameOutcome::Malformed(e)
        }
    }
}

/// Close event from the handle of `generation`.
///
/// Marks the panel as reconnecting and returns the reconnect delay, once per
/// live handle.
pub fn apply_close<H>(
    manager: &mut ConnectionManager<H>,
    generation: Generation,
    panel: &mut PanelState,
) -> Option<Duration> {
    let delay = manager.handle_close(generation)?;
    panel.connection = ConnectionStatus::Reconnecting;
    Some(delay)
}

#[cfg(feature = "csr")]
pub use browser::spawn_status_feed;

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CloseEvent, MessageEvent, WebSocket};

    use super::{
        ConnectError, ConnectionManager, FrameOutcome, Generation, SharedManager, apply_close, apply_frame,
        apply_open, connect_with, status_url,
    };
    use crate::config::PanelConfig;
    use crate::state::panel::{ConnectionStatus, PanelState};

    type Feed = SharedManager<LiveSocket>;

    /// A socket plus the callbacks registered on it.
    ///
    /// Dropping it detaches the callbacks but leaves the socket itself alone.
    struct LiveSocket {
        socket: WebSocket,
        _on_open: Closure<dyn FnMut()>,
        _on_message: Closure<dyn FnMut(MessageEvent)>,
        _on_close: Closure<dyn FnMut(CloseEvent)>,
    }

    impl Drop for LiveSocket {
        fn drop(&mut self) {
            self.socket.set_onopen(None);
            self.socket.set_onmessage(None);
            self.socket.set_onclose(None);
        }
    }

    /// Open the status socket on the page's host and keep it open for the
    /// life of the page.
    pub fn spawn_status_feed(config: &PanelConfig, panel: RwSignal<PanelState>) {
        let host = web_sys::window()
            .and_then(|w| w.location().host().ok())
            .unwrap_or_else(|| "localhost:5001".to_owned());
        let url = status_url(&host, &config.status_path);
        let feed: Feed = Rc::new(RefCell::new(ConnectionManager::new(config.reconnect_delay())));
        connect(url, &feed, panel);
    }

    fn connect(url: String, feed: &Feed, panel: RwSignal<PanelState>) {
        panel.update(|p| p.connection = ConnectionStatus::Connecting);

        match connect_with(feed, |generation, owner| open_socket(&url, generation, owner, panel)) {
            Ok(generation) => log::info!("status socket {generation} opening: {url}"),
            Err(e) => {
                log::error!("{e}");
                let delay = feed.borrow_mut().handle_connect_failure();
                if let Some(delay) = delay {
                    schedule_reconnect(url, feed, panel, delay);
                }
            }
        }
    }

    fn open_socket(
        url: &str,
        generation: Generation,
        owner: Feed,
        panel: RwSignal<PanelState>,
    ) -> Result<LiveSocket, ConnectError> {
        let socket = WebSocket::new(url).map_err(|e| ConnectError::Socket {
            url: url.to_owned(),
            reason: format!("{e:?}"),
        })?;

        let for_open = Rc::downgrade(&owner);
        let on_open = Closure::wrap(Box::new(move || {
            let Some(feed) = for_open.upgrade() else {
                return;
            };
            panel.maybe_update(|p| apply_open(&feed.borrow(), generation, p));
        }) as Box<dyn FnMut()>);
        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));

        let for_message = Rc::downgrade(&owner);
        let on_message = Closure::wrap(Box::new(move |e: MessageEvent| {
            let Some(feed) = for_message.upgrade() else {
                return;
            };
            let text = e.data().as_string();
            panel.maybe_update(|p| {
                apply_frame(&feed.borrow(), generation, text.as_deref(), p) == FrameOutcome::Applied
            });
        }) as Box<dyn FnMut(MessageEvent)>);
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        // Strong: the installed socket keeps the feed alive.
        let close_url = url.to_owned();
        let on_close = Closure::wrap(Box::new(move |e: CloseEvent| {
            log::info!("status socket closed (code {})", e.code());
            let delay = panel
                .try_maybe_update(|p| {
                    let delay = apply_close(&mut owner.borrow_mut(), generation, p);
                    (delay.is_some(), delay)
                })
                .flatten();
            if let Some(delay) = delay {
                schedule_reconnect(close_url.clone(), &owner, panel, delay);
            }
        }) as Box<dyn FnMut(CloseEvent)>);
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        Ok(LiveSocket {
            socket,
            _on_open: on_open,
            _on_message: on_message,
            _on_close: on_close,
        })
    }

    fn schedule_reconnect(url: String, feed: &Feed, panel: RwSignal<PanelState>, delay: Duration) {
        let feed = Rc::clone(feed);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        log::info!("reconnecting status socket in {millis}ms");
        gloo_timers::callback::Timeout::new(millis, move || connect(url, &feed, panel)).forget();
    }
}
