//! Web server module for the Piste dashboard
//!
//! Exposes the view model over HTTP and serves the embedded front-end.

#[cfg(feature = "ui")]
mod server;

#[cfg(feature = "ui")]
pub use server::*;
