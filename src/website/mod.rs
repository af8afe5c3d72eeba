//! Website: server-rendered UI consuming the catalog REST API

pub mod catalog_client;
pub mod navigation;
pub mod pages;
pub mod views;

use std::sync::Arc;

use crate::config::AppConfig;

/// State shared across the website handlers
#[derive(Clone)]
pub struct WebsiteState {
    pub config: Arc<AppConfig>,
    pub catalog: Arc<dyn catalog_client::CatalogClient>,
    pub sessions: Arc<navigation::NavigationSessions>,
}
