use crate::config::ConfigSource;

/// Class prefix used when the caller does not set one
pub const DEFAULT_CLASS_PREFIX: &str = "spu-";

/// Custom properties treated as apply directives when none are configured
pub const DEFAULT_APPLY_VARIABLES: &[&str] = &["--at-apply"];

/// Which custom-property names act as apply directives
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyVariables {
    /// Only the `@apply` at-rule is recognized
    Disabled,
    /// These property names, in addition to `@apply`
    Names(Vec<String>),
}

impl ApplyVariables {
    /// Names to look for; `None` falls back to [`DEFAULT_APPLY_VARIABLES`]
    pub fn resolve(variables: Option<&ApplyVariables>) -> Vec<String> {
        match variables {
            None => DEFAULT_APPLY_VARIABLES.iter().map(|v| v.to_string()).collect(),
            Some(ApplyVariables::Disabled) => Vec::new(),
            Some(ApplyVariables::Names(names)) => names.clone(),
        }
    }
}

/// Options controlling the preprocessor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreprocessOptions {
    /// Prefix for generated class names
    pub class_prefix: Option<String>,

    /// Combine several utilities of one class attribute into a single generated rule
    pub combine: Option<bool>,

    /// Custom properties acting as apply directives
    pub apply_variables: Option<ApplyVariables>,

    /// Generator configuration, inline or on disk
    pub config_or_path: ConfigSource,
}

impl PreprocessOptions {
    /// Fill in the class prefix when unset; explicit values (even empty) are kept
    pub fn with_defaults(mut self) -> Self {
        if self.class_prefix.is_none() {
            self.class_prefix = Some(DEFAULT_CLASS_PREFIX.to_string());
        }
        self
    }

    /// Effective class prefix
    pub fn class_prefix(&self) -> &str {
        self.class_prefix.as_deref().unwrap_or(DEFAULT_CLASS_PREFIX)
    }

    /// Effective combine setting
    pub fn combine(&self) -> bool {
        self.combine.unwrap_or(false)
    }
}
