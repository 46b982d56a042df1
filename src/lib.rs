//! Build-time preprocessor for single-file components.
//!
//! Utility classes in markup and apply directives in style blocks are expanded
//! into scoped, prefixed classes and generated CSS. The CSS itself comes from a
//! generator ([`UnoGenerator`]); this crate decides when to call it and hands
//! its results to the markup and style transformers.

#[cfg(feature = "cli")]
pub mod args;
pub mod config;
pub mod context;
pub mod errors;
pub mod generator;
pub mod notice;
pub mod options;
pub mod preprocess;
pub mod style_scan;
pub mod tailwind;
pub mod transform;
pub mod wrap_global;

pub use config::{load_config, ConfigSource, LoadedConfig, UserConfig, UserConfigDefaults};
pub use context::SharedContext;
pub use errors::{PreprocessError, Result};
pub use generator::{create_generator, GenerateOptions, GenerateResult, GeneratorFactory, SharedGenerator, UnoGenerator};
pub use notice::WarnOnce;
pub use options::{ApplyVariables, PreprocessOptions, DEFAULT_CLASS_PREFIX};
pub use preprocess::{
    global_preflights, AttributeValue, Attributes, Collaborators, MarkupInput, Preprocessor, StyleInput,
    PREFLIGHTS_ATTRIBUTE, SAFELIST_ATTRIBUTE,
};
pub use style_scan::{check_for_apply, has_theme_fn, ApplyCheck};
pub use tailwind::{TailwindGenerator, TailwindGeneratorFactory};
pub use transform::{ClassTransformInput, ClassTransformer, Processed, StyleTransformInput, StyleTransformer};
pub use wrap_global::wrap_selectors_with_global;
