//! Tracing support for the loaders and the CLI.
//!
//! With the `tracing` feature enabled (the default) this re-exports the
//! event macros and provides a one-shot subscriber initializer; with the
//! feature disabled the same names resolve to no-ops, so call sites stay
//! unconditional.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a stderr fmt subscriber once per process.  Later calls
    /// (and pre-existing subscribers) are left undisturbed.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .try_init();
        });
    }

    macro_rules! debug_event {
        ($($args:tt)*) => { tracing::debug!($($args)*) };
    }

    pub(crate) use debug_event;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    macro_rules! debug_event {
        ($($args:tt)*) => {};
    }

    pub(crate) use debug_event;
}

#[cfg(feature = "tracing")]
pub use enabled::init_tracing;
#[cfg(feature = "tracing")]
pub(crate) use enabled::debug_event;

#[cfg(not(feature = "tracing"))]
pub use disabled::init_tracing;
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::debug_event;
