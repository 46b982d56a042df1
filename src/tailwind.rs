//! Built-in generator backed by the tailwind-rs engine.
//!
//! This is the baseline `uno` preset: every configuration that does not bring
//! its own generator factory ends up here.

use async_trait::async_trait;
use indexmap::IndexSet;
use std::sync::Arc;
use tailwind_rs::TailwindBuilder;
use tracing::{debug, warn};

use crate::config::{UserConfig, BASELINE_PRESET};
use crate::errors::{PreprocessError, Result};
use crate::generator::{GenerateOptions, GenerateResult, GeneratorFactory, SharedGenerator, UnoGenerator};

/// Preset names this backend understands
const SUPPORTED_PRESETS: &[&str] = &[BASELINE_PRESET, "tailwind"];

/// Generator that traces tokens through a fresh `TailwindBuilder` per run
#[derive(Debug, Clone)]
pub struct TailwindGenerator {
    config: UserConfig,
}

impl TailwindGenerator {
    /// Create a generator, rejecting presets this backend cannot provide
    pub fn new(config: UserConfig) -> Result<Self> {
        if let Some(preset) = config
            .presets
            .iter()
            .find(|p| !SUPPORTED_PRESETS.contains(&p.as_str()))
        {
            return Err(PreprocessError::UnsupportedPreset(preset.clone()));
        }
        Ok(Self { config })
    }

    fn build_css(&self, tokens: &IndexSet<String>, options: GenerateOptions) -> Result<String> {
        let preflights = options.preflights && self.config.preflights;
        let safelist: &[String] = if options.safelist { &self.config.safelist } else { &[] };

        if !preflights && tokens.is_empty() && safelist.is_empty() {
            return Ok(String::new());
        }

        let mut builder = TailwindBuilder::default();
        builder.preflight.disable = !preflights;

        for token in tokens.iter().chain(safelist) {
            if let Err(e) = builder.trace(token, false) {
                warn!(token = %token, "failed to trace utility: {:?}", e);
            }
        }

        let css = builder
            .bundle()
            .map_err(|e| PreprocessError::Generator(format!("Failed to generate CSS: {:?}", e)))?;

        debug!(tokens = tokens.len(), safelist = safelist.len(), preflights, "generated css");

        if options.minify {
            Ok(minify_css(&css))
        } else {
            Ok(css)
        }
    }
}

#[async_trait]
impl UnoGenerator for TailwindGenerator {
    async fn generate(&self, tokens: &IndexSet<String>, options: GenerateOptions) -> Result<GenerateResult> {
        let css = self.build_css(tokens, options)?;
        Ok(GenerateResult { css })
    }

    fn config(&self) -> &UserConfig {
        &self.config
    }
}

/// Factory for [`TailwindGenerator`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TailwindGeneratorFactory;

impl GeneratorFactory for TailwindGeneratorFactory {
    fn create(&self, config: UserConfig) -> Result<SharedGenerator> {
        Ok(Arc::new(TailwindGenerator::new(config)?))
    }
}

/// Strip comments and collapse whitespace in generated CSS
pub fn minify_css(css: &str) -> String {
    let mut result = String::with_capacity(css.len());
    let chars: Vec<char> = css.chars().collect();
    let mut prev_char = '{';
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == '/' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                i += 1;
            }
            i += 2;
            continue;
        }

        if ch.is_whitespace() {
            // A single space survives only between two tokens that need it
            let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            let keep = !matches!(prev_char, '{' | '}' | ';' | ':' | ',' | '>')
                && next.is_some_and(|&n| match n {
                    '{' | '}' | ';' | ',' | '>' => false,
                    // `.a :hover` differs from `.a:hover`, so selectors keep it
                    ':' => in_selector(&chars[i..]) && is_selector_end(prev_char),
                    _ => true,
                });
            if keep && prev_char != ' ' {
                result.push(' ');
                prev_char = ' ';
            }
        } else {
            if ch == '}' && prev_char == ';' {
                result.pop();
            }
            result.push(ch);
            prev_char = ch;
        }

        i += 1;
    }

    result
}

/// Whether the text ahead belongs to a rule prelude rather than a declaration block
fn in_selector(rest: &[char]) -> bool {
    rest.iter().find(|c| matches!(c, '{' | '}' | ';')) == Some(&'{')
}

fn is_selector_end(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, '-' | '_' | ')' | ']' | '*')
}
