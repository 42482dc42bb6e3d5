//! Client-side model and API access for the rpcd layout/command service.
//!
//! rpcd arranges windows into per-display layouts and launches configured
//! commands into layout frames. This crate holds everything a client needs
//! that does not depend on where it runs:
//!
//! - `models` - layouts, screens, frames, commands and the polled status
//! - `endpoints` / `requests` - the REST surface and request bodies
//! - `client` - a transport-generic API client (`Api<T: Transport>`)
//! - `geometry` / `preview` - canvas scaling, frame hit-testing, paint plans
//! - `arguments` - argument collection and enum validation
//! - `selection` / `status` - radio-list selection and the polling view
//!
//! Both `web_app` (browser `fetch`) and `rpcd_cli` (`reqwest`) plug their own
//! transport into [`Api`].
//!
//! # Usage
//!
//! ```rust
//! use rpcd::{Endpoint, Method};
//!
//! let stop = Endpoint::StopCommand { name: "browser".to_string() };
//! assert_eq!(stop.method(), Method::Get);
//! assert_eq!(stop.url("http://localhost:8080/"), "http://localhost:8080/stop/browser");
//! ```

mod arguments;
mod client;
mod endpoints;
mod errors;
mod geometry;
mod models;
mod preview;
mod requests;
mod selection;
mod status;

pub use arguments::*;
pub use client::*;
pub use endpoints::*;
pub use errors::*;
pub use geometry::*;
pub use models::*;
pub use preview::*;
pub use requests::*;
pub use selection::*;
pub use status::*;
