//! The generator seam: whatever turns utility tokens into CSS.

use async_trait::async_trait;
use indexmap::IndexSet;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::config::{load_config, ConfigSource, UserConfig, UserConfigDefaults};
use crate::errors::Result;

/// What to emit besides the requested tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Emit preflight (reset) rules
    pub preflights: bool,
    /// Emit the configured safelist
    pub safelist: bool,
    /// Minify the output
    pub minify: bool,
}

/// Output of a generator run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateResult {
    pub css: String,
}

/// Produces CSS for a set of utility tokens
#[async_trait]
pub trait UnoGenerator: Send + Sync {
    /// Generate CSS for `tokens`
    async fn generate(&self, tokens: &IndexSet<String>, options: GenerateOptions) -> Result<GenerateResult>;

    /// The resolved configuration this generator was built from
    fn config(&self) -> &UserConfig;
}

/// Shared, reusable generator handle
pub type SharedGenerator = Arc<dyn UnoGenerator>;

/// Builds a generator from a resolved configuration
pub trait GeneratorFactory: Send + Sync {
    fn create(&self, config: UserConfig) -> Result<SharedGenerator>;
}

/// Load the configuration for `source`, merge the built-in defaults and build a generator
pub async fn create_generator(
    cwd: &Path,
    source: &ConfigSource,
    factory: &dyn GeneratorFactory,
) -> Result<SharedGenerator> {
    let loaded = load_config(cwd, source).await?;
    debug!(sources = ?loaded.sources, "creating generator");
    factory.create(loaded.config.with_defaults(&UserConfigDefaults::default()))
}
