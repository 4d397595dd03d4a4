use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::allocator::{LobAllocator, LobAllocators};
use crate::error::SqlLobError;
use crate::provider::ConnectionProvider;
use crate::render::{PlaceholderStyle, RenderContext};
use crate::types::DatabaseType;

/// Serializable part of a [`Configuration`].
///
/// ```rust
/// use sql_lob_binding::prelude::*;
///
/// let settings = BindingSettings::from_json(r#"{ "family": "postgres", "placeholders": "postgres" }"#)?;
/// assert_eq!(settings.family, DatabaseType::Postgres);
/// # Ok::<(), SqlLobError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingSettings {
    pub family: DatabaseType,
    pub placeholders: PlaceholderStyle,
}

impl BindingSettings {
    /// # Errors
    /// Returns [`SqlLobError::ConfigError`] if `json` is not a valid settings document.
    pub fn from_json(json: &str) -> Result<Self, SqlLobError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// What a binding needs from its surroundings: the target family, where connections come
/// from, and how blobs are allocated for each family.
#[derive(Clone, Debug)]
pub struct Configuration {
    family: DatabaseType,
    placeholders: PlaceholderStyle,
    provider: Arc<dyn ConnectionProvider>,
    allocators: LobAllocators,
}

impl Configuration {
    /// Configuration with default settings for `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        ConfigurationBuilder::new(provider).finish()
    }

    #[must_use]
    pub fn builder(provider: Arc<dyn ConnectionProvider>) -> ConfigurationBuilder {
        ConfigurationBuilder::new(provider)
    }

    #[must_use]
    pub fn family(&self) -> DatabaseType {
        self.family
    }

    #[must_use]
    pub fn placeholders(&self) -> PlaceholderStyle {
        self.placeholders
    }

    #[must_use]
    pub fn connection_provider(&self) -> &dyn ConnectionProvider {
        self.provider.as_ref()
    }

    #[must_use]
    pub fn allocators(&self) -> &LobAllocators {
        &self.allocators
    }

    /// The allocator for this configuration's family.
    #[must_use]
    pub fn allocator(&self) -> &dyn LobAllocator {
        self.allocators.for_family(self.family)
    }

    /// A fresh render buffer using this configuration's placeholder style.
    #[must_use]
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.placeholders)
    }

    #[must_use]
    pub fn settings(&self) -> BindingSettings {
        BindingSettings {
            family: self.family,
            placeholders: self.placeholders,
        }
    }
}

/// Fluent builder for [`Configuration`].
#[derive(Debug, Clone)]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    #[must_use]
    pub fn new(provider: Arc<dyn ConnectionProvider>) -> Self {
        Self {
            config: Configuration {
                family: DatabaseType::default(),
                placeholders: PlaceholderStyle::default(),
                provider,
                allocators: LobAllocators::new(),
            },
        }
    }

    #[must_use]
    pub fn family(mut self, family: DatabaseType) -> Self {
        self.config.family = family;
        self
    }

    #[must_use]
    pub fn placeholders(mut self, style: PlaceholderStyle) -> Self {
        self.config.placeholders = style;
        self
    }

    #[must_use]
    pub fn settings(self, settings: BindingSettings) -> Self {
        self.family(settings.family).placeholders(settings.placeholders)
    }

    /// Allocate blobs for `family` with `allocator` instead of the connection's factory.
    #[must_use]
    pub fn allocator(mut self, family: DatabaseType, allocator: Arc<dyn LobAllocator>) -> Self {
        self.config.allocators.register(family, allocator);
        self
    }

    #[must_use]
    pub fn finish(self) -> Configuration {
        self.config
    }
}
