use thiserror::Error;

/// Main error type for the svelte-scoped-preprocess crate
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported preset '{0}': the built-in generator only provides 'uno'")]
    UnsupportedPreset(String),

    #[error("Generator error: {0}")]
    Generator(String),

    #[error("Failed to transform {filename}: {message}")]
    Transform { filename: String, message: String },

    #[error("Shared build context closed before becoming ready")]
    ContextClosed,
}

pub type Result<T> = std::result::Result<T, PreprocessError>;
