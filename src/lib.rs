//! Client-side behavior for the CAPPY marketing site, rendered with Leptos.

pub mod app;
pub mod charts;
pub mod components;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod logging;
pub mod reveal;
pub mod summary;
pub mod toggle;

pub use app::App;
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
