//! Collaborators the preprocessor delegates to once it decides a block needs work.

use async_trait::async_trait;

use crate::errors::Result;
use crate::generator::SharedGenerator;
use crate::options::PreprocessOptions;

/// Replacement for a preprocessed block
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Processed {
    /// New source text
    pub code: String,
    /// Opaque metadata (e.g. a source map) passed back to the host untouched
    pub map: Option<serde_json::Value>,
    /// Files the result depends on
    pub dependencies: Vec<String>,
}

impl Processed {
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }
}

/// Input handed to the markup-class transformer
#[derive(Clone)]
pub struct ClassTransformInput<'a> {
    pub content: &'a str,
    /// Component filename, empty when unknown
    pub filename: &'a str,
    pub uno: SharedGenerator,
    pub options: PreprocessOptions,
}

/// Input handed to the style-block transformer
#[derive(Clone)]
pub struct StyleTransformInput<'a> {
    pub content: &'a str,
    pub uno: SharedGenerator,
    pub filename: Option<&'a str>,
    /// Global-wrapped preflight/safelist CSS to put in front, possibly empty
    pub prepend: String,
    pub apply_variables: Vec<String>,
    pub has_theme_fn: bool,
}

/// Rewrites utility classes in component markup
#[async_trait]
pub trait ClassTransformer: Send + Sync {
    async fn transform(&self, input: ClassTransformInput<'_>) -> Result<Option<Processed>>;
}

/// Expands apply directives and theme functions in a style block
#[async_trait]
pub trait StyleTransformer: Send + Sync {
    async fn transform(&self, input: StyleTransformInput<'_>) -> Result<Option<Processed>>;
}
