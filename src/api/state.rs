//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.
//!
//! Everything here is built once at startup and read-only afterwards:
//! the dataset, the callback registry over it, the page layout, and the
//! rendered HTML page.

use crate::bindings::CallbackRegistry;
use crate::dataset::Dataset;
use crate::layout::Layout;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The launch dataset, loaded once at startup
    pub dataset: Arc<Dataset>,
    /// Callback registry dispatching input changes to chart handlers
    pub registry: Arc<CallbackRegistry>,
    /// Page layout model built from the dataset
    pub layout: Arc<Layout>,
    /// The dashboard page, rendered once from the layout
    pub page_html: Arc<String>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create the application state from a loaded dataset.
    ///
    /// Wires the default chart bindings, builds the layout, and renders
    /// the page. Nothing in here mutates after this returns.
    pub fn new(dataset: Arc<Dataset>, config: ServerConfig) -> Self {
        let registry = Arc::new(CallbackRegistry::with_default_bindings(Arc::clone(&dataset)));
        let layout = Layout::build(&dataset);
        let page_html = layout.to_html();

        Self {
            dataset,
            registry,
            layout: Arc::new(layout),
            page_html: Arc::new(page_html),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8050,
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
