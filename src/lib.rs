//! Alexandria Library Catalog System
//!
//! Three independently runnable services sharing one crate: a catalog
//! consultation API, an author/book referencing API, and a
//! server-rendered website consuming the catalog.

pub mod catalog;
pub mod config;
pub mod error;
pub mod referencing;
pub mod support;
pub mod website;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
