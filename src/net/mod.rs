//! Networking modules for the control endpoints and the status socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the HTTP transport, `commands` maps panel controls onto it,
//! `status_feed` owns the `/ws` socket, and `types` defines the wire schema.

pub mod api;
pub mod commands;
pub mod status_feed;
pub mod types;
