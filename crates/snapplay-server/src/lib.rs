//! Development server with live reload for the SnapPlay site.
//!
//! Renders pages in memory on every request and tells connected browsers to
//! reload when the public directory or the site config changes.

pub mod reload;
pub mod server;
pub mod watcher;

pub use reload::{ReloadHub, ReloadMessage};
pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
