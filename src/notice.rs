use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;

/// Advisory emitted when style-block preflight/safelist attributes are ignored
pub const PREFLIGHT_ATTRIBUTES_NOTICE: &str = "uno:preflights and uno:safelist are only for use in component libraries. \
When building through the shared build context, add preflights and safelist to your document head instead. \
If you are consuming a component library built with this preprocessor, you can ignore this notice.";

/// Process-wide latch for [`PREFLIGHT_ATTRIBUTES_NOTICE`]
pub static PREFLIGHT_ATTRIBUTES_LATCH: WarnOnce = WarnOnce::new();

/// Emits a warning the first time it is triggered and never again
#[derive(Debug, Default)]
pub struct WarnOnce {
    fired: AtomicBool,
}

impl WarnOnce {
    pub const fn new() -> Self {
        Self {
            fired: AtomicBool::new(false),
        }
    }

    /// Log `message` unless this latch already fired; returns whether it logged
    pub fn warn(&self, message: &str) -> bool {
        if self.fired.swap(true, Ordering::AcqRel) {
            return false;
        }
        warn!("{}", message);
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }
}
