//! Structured logging module
//!
//! This module provides utilities for structured logging of recommendation
//! requests: filter directive construction, request ID generation, and
//! privacy-safe content previews.

pub mod fields;
pub mod middleware;

pub use fields::content_preview;
pub use middleware::{generate_request_id, request_id, RequestId, REQUEST_ID_HEADER};

/// Build filter directives string from LoggingConfig
///
/// Constructs a tracing filter string that includes the base log level
/// and any component-specific log levels configured in the LoggingConfig.
///
/// # Returns
///
/// A filter string in the format: "base_level,draftpick::component1=level1,draftpick::component2=level2"
///
/// # Examples
///
/// ```
/// use draftpick::config::logging::{LogFormat, LoggingConfig};
/// use draftpick::logging::build_filter_directives;
/// use std::collections::HashMap;
///
/// let mut component_levels = HashMap::new();
/// component_levels.insert("recommend".to_string(), "debug".to_string());
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Pretty,
///     component_levels: Some(component_levels),
///     enable_content_logging: false,
/// };
///
/// let filter_str = build_filter_directives(&config);
/// assert_eq!(filter_str, "info,draftpick::recommend=debug");
/// ```
pub fn build_filter_directives(config: &crate::config::LoggingConfig) -> String {
    let mut filter_str = config.level.clone();

    if let Some(component_levels) = &config.component_levels {
        let mut components: Vec<_> = component_levels.iter().collect();
        components.sort();
        for (component, level) in components {
            filter_str.push_str(&format!(",draftpick::{}={}", component, level));
        }
    }

    filter_str
}
