use tokio::sync::watch;

use crate::errors::{PreprocessError, Result};
use crate::generator::SharedGenerator;

/// Build context shared with a hosting build-tool integration.
///
/// The host creates the generator once and marks the context ready; every
/// preprocessor attached to the context waits for that and reuses it.
pub struct SharedContext {
    uno: watch::Sender<Option<SharedGenerator>>,
}

impl SharedContext {
    pub fn new() -> Self {
        let (uno, _) = watch::channel(None);
        Self { uno }
    }

    /// Publish the shared generator and wake every waiter
    pub fn mark_ready(&self, generator: SharedGenerator) {
        self.uno.send_replace(Some(generator));
    }

    pub fn is_ready(&self) -> bool {
        self.uno.borrow().is_some()
    }

    /// Wait until the context is ready, then return its generator
    pub async fn ready(&self) -> Result<SharedGenerator> {
        let mut rx = self.uno.subscribe();
        let ready = rx
            .wait_for(Option::is_some)
            .await
            .map_err(|_| PreprocessError::ContextClosed)?;
        ready.clone().ok_or(PreprocessError::ContextClosed)
    }
}

impl Default for SharedContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedContext")
            .field("ready", &self.is_ready())
            .finish()
    }
}
