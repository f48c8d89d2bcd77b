//! Engine configuration.

use crate::Registry;

/// Immutable settings for one translation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub registry: Registry,
    /// Full C-level name of the hub class (e.g., "LinphoneCore").
    pub hub_class: Option<String>,
    /// C header included by every implementation unit.
    pub c_header: String,
    /// Filename of the aggregate header.
    pub aggregate_header: String,
}

impl EngineConfig {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn hub_class(mut self, name: impl Into<String>) -> Self {
        self.hub_class = Some(name.into());
        self
    }

    pub fn c_header(mut self, header: impl Into<String>) -> Self {
        self.c_header = header.into();
        self
    }

    pub fn aggregate_header(mut self, filename: impl Into<String>) -> Self {
        self.aggregate_header = filename.into();
        self
    }

    pub fn is_hub(&self, full_name: &str) -> bool {
        self.hub_class.as_deref() == Some(full_name)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            registry: Registry::default(),
            hub_class: None,
            c_header: "coreapi/linphonecore.h".to_string(),
            aggregate_header: "linphone.hh".to_string(),
        }
    }
}
