//! The preprocessor: markup and style hooks for single-file components.
//!
//! Both hooks share one lazily resolved generator. The markup hook always
//! delegates to the class transformer; the style hook only touches the
//! generator when the block asks for preflights, the safelist, apply
//! directives or theme functions.

use indexmap::{IndexMap, IndexSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::context::SharedContext;
use crate::errors::Result;
use crate::generator::{create_generator, GenerateOptions, GeneratorFactory, SharedGenerator, UnoGenerator};
use crate::notice::{WarnOnce, PREFLIGHT_ATTRIBUTES_LATCH, PREFLIGHT_ATTRIBUTES_NOTICE};
use crate::options::PreprocessOptions;
use crate::style_scan::{check_for_apply, has_theme_fn, ApplyCheck};
use crate::tailwind::TailwindGeneratorFactory;
use crate::transform::{
    ClassTransformInput, ClassTransformer, Processed, StyleTransformInput, StyleTransformer,
};
use crate::wrap_global::wrap_selectors_with_global;

/// Style attribute requesting preflight CSS
pub const PREFLIGHTS_ATTRIBUTE: &str = "uno:preflights";
/// Style attribute requesting safelist CSS
pub const SAFELIST_ATTRIBUTE: &str = "uno:safelist";

/// Value of a style-block attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Bare attribute (`<style uno:preflights>`) or explicit boolean
    Bool(bool),
    Text(String),
}

impl AttributeValue {
    fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::Bool(b) => *b,
            AttributeValue::Text(s) => !s.is_empty(),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

pub type Attributes = IndexMap<String, AttributeValue>;

fn flag(attributes: &Attributes, name: &str) -> bool {
    attributes.get(name).is_some_and(AttributeValue::is_truthy)
}

/// A component's markup section
#[derive(Debug, Clone, Copy)]
pub struct MarkupInput<'a> {
    pub content: &'a str,
    pub filename: Option<&'a str>,
}

/// A component's style section
#[derive(Debug, Clone, Copy)]
pub struct StyleInput<'a> {
    pub content: &'a str,
    pub attributes: &'a Attributes,
    pub filename: Option<&'a str>,
}

/// Tells whether the current build is a production-style build
pub type BuildModePredicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// The external pieces the preprocessor hands work to
#[derive(Clone)]
pub struct Collaborators {
    pub classes: Arc<dyn ClassTransformer>,
    pub style: Arc<dyn StyleTransformer>,
    pub generator_factory: Arc<dyn GeneratorFactory>,
}

impl Collaborators {
    /// Transformers backed by the built-in tailwind-rs generator
    pub fn new(classes: Arc<dyn ClassTransformer>, style: Arc<dyn StyleTransformer>) -> Self {
        Self {
            classes,
            style,
            generator_factory: Arc::new(TailwindGeneratorFactory),
        }
    }

    pub fn with_generator_factory(mut self, factory: Arc<dyn GeneratorFactory>) -> Self {
        self.generator_factory = factory;
        self
    }
}

/// Markup and style hooks sharing a single generator
pub struct Preprocessor {
    options: Mutex<PreprocessOptions>,
    collaborators: Collaborators,
    context: Option<Arc<SharedContext>>,
    is_build: Option<BuildModePredicate>,
    cwd: PathBuf,
    notice: &'static WarnOnce,
    uno: OnceCell<SharedGenerator>,
}

impl Preprocessor {
    pub fn new(options: PreprocessOptions, collaborators: Collaborators) -> Self {
        Self {
            options: Mutex::new(options.with_defaults()),
            collaborators,
            context: None,
            is_build: None,
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            notice: &PREFLIGHT_ATTRIBUTES_LATCH,
            uno: OnceCell::new(),
        }
    }

    /// Reuse the generator of a hosting build integration
    pub fn with_context(mut self, context: Arc<SharedContext>) -> Self {
        self.context = Some(context);
        self
    }

    /// Derive `combine` from the build mode until it is set to true
    pub fn with_build_mode<F>(mut self, is_build: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.is_build = Some(Arc::new(is_build));
        self
    }

    /// Directory config discovery and relative config paths start from
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Latch for the ignored-attributes notice (process-wide by default)
    pub fn with_notice(mut self, notice: &'static WarnOnce) -> Self {
        self.notice = notice;
        self
    }

    /// Snapshot of the current options
    pub fn options(&self) -> PreprocessOptions {
        self.lock_options().clone()
    }

    pub fn is_generator_resolved(&self) -> bool {
        self.uno.initialized()
    }

    fn lock_options(&self) -> MutexGuard<'_, PreprocessOptions> {
        self.options.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The shared generator, resolved by the first caller only
    pub async fn generator(&self) -> Result<SharedGenerator> {
        self.uno
            .get_or_try_init(|| self.resolve_generator())
            .await
            .cloned()
    }

    async fn resolve_generator(&self) -> Result<SharedGenerator> {
        if let Some(context) = &self.context {
            debug!("waiting for shared build context");
            return context.ready().await;
        }

        let source = self.lock_options().config_or_path.clone();
        create_generator(&self.cwd, &source, self.collaborators.generator_factory.as_ref()).await
    }

    /// Rewrite utility classes in a component's markup
    pub async fn markup(&self, input: MarkupInput<'_>) -> Result<Option<Processed>> {
        let uno = self.generator().await?;

        let options = {
            let mut options = self.lock_options();
            if let Some(is_build) = &self.is_build {
                if options.combine != Some(true) {
                    options.combine = Some(is_build());
                }
            }
            options.clone()
        };

        debug!(filename = input.filename.unwrap_or(""), combine = options.combine(), "transforming markup");
        self.collaborators
            .classes
            .transform(ClassTransformInput {
                content: input.content,
                filename: input.filename.unwrap_or(""),
                uno,
                options,
            })
            .await
    }

    /// Expand apply directives, theme functions and preflight/safelist requests
    pub async fn style(&self, input: StyleInput<'_>) -> Result<Option<Processed>> {
        let mut add_preflights = flag(input.attributes, PREFLIGHTS_ATTRIBUTE);
        let mut add_safelist = flag(input.attributes, SAFELIST_ATTRIBUTE);

        // A parent app build would process these a second time
        if self.context.is_some() && (add_preflights || add_safelist) {
            add_preflights = false;
            add_safelist = false;
            self.notice.warn(PREFLIGHT_ATTRIBUTES_NOTICE);
        }

        let configured_variables = self.lock_options().apply_variables.clone();
        let ApplyCheck {
            has_apply,
            apply_variables,
        } = check_for_apply(input.content, configured_variables.as_ref());
        let has_theme_fn = has_theme_fn(input.content);

        if !(add_preflights || add_safelist || has_apply || has_theme_fn) {
            return Ok(None);
        }

        let uno = self.generator().await?;

        let prepend = if add_preflights || add_safelist {
            global_preflights(uno.as_ref(), add_preflights, add_safelist).await?
        } else {
            String::new()
        };

        if has_apply || has_theme_fn {
            debug!(filename = input.filename.unwrap_or(""), has_apply, has_theme_fn, "transforming style");
            return self
                .collaborators
                .style
                .transform(StyleTransformInput {
                    content: input.content,
                    uno,
                    filename: input.filename,
                    prepend,
                    apply_variables,
                    has_theme_fn,
                })
                .await;
        }

        if prepend.is_empty() {
            return Ok(None);
        }
        Ok(Some(Processed::code(prepend + input.content)))
    }
}

/// Minified preflight and/or safelist CSS with every selector made global
pub async fn global_preflights(uno: &dyn UnoGenerator, preflights: bool, safelist: bool) -> Result<String> {
    let generated = uno
        .generate(
            &IndexSet::new(),
            GenerateOptions {
                preflights,
                safelist,
                minify: true,
            },
        )
        .await?;
    Ok(wrap_selectors_with_global(&generated.css))
}
