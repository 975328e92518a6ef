//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the leveled console.
//!
//! [`ConsoleLayer`] is a tracing-subscriber layer that renders events through
//! a [`Logger`], so code instrumented with the standard `tracing` macros
//! shares the console's threshold, color, and timestamp prefix.
//!
//! # Level mapping
//!
//! | tracing | console |
//! |---------|---------|
//! | `ERROR` | [`Level::Error`] |
//! | `WARN`  | [`Level::Warn`] |
//! | `INFO`  | [`Level::Info`] |
//! | `DEBUG` | [`Level::Debug`] |
//! | `TRACE` | [`Level::Verbose`] |
//!
//! # Usage
//!
//! ```rust,ignore
//! logging::init(logging::LogConfig::default())?;
//! logging::init_tracing()?;
//!
//! tracing::info!(port = 2, "uplink scheduled");
//! ```

use std::fmt::{self, Write as _};
use std::io::Write;
use std::ops::Deref;

use tracing::Subscriber;
use tracing::subscriber::Interest;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::util::TryInitError;

use crate::clock::Clock;
use crate::levels::Level;
use crate::logger::Logger;

/// A tracing layer that writes events through a shared [`Logger`].
///
/// `L` is any handle dereferencing to the logger: an `Arc<Logger<..>>`, or
/// the `&'static` reference returned by [`global`](crate::global).
pub struct ConsoleLayer<L> {
    logger: L,
}

impl<L> ConsoleLayer<L> {
    /// Creates a layer writing through `logger`.
    #[must_use]
    pub const fn new(logger: L) -> Self {
        Self { logger }
    }

    /// Maps a tracing level onto a console level.
    #[must_use]
    pub const fn map_level(level: &tracing::Level) -> Level {
        match *level {
            tracing::Level::ERROR => Level::Error,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::INFO => Level::Info,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::TRACE => Level::Verbose,
        }
    }
}

impl<S, L, W, C> Layer<S> for ConsoleLayer<L>
where
    S: Subscriber,
    L: Deref<Target = Logger<W, C>> + Send + Sync + 'static,
    W: Write + 'static,
    C: Clock + 'static,
{
    // The threshold can change at runtime, so interest is never cached.
    fn register_callsite(&self, _metadata: &'static tracing::Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &tracing::Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logger.enabled(Self::map_level(metadata.level()))
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let level = Self::map_level(event.metadata().level());
        if !self.logger.enabled(level) {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.logger.log(level, format_args!("{visitor}"));
    }
}

impl<L> fmt::Debug for ConsoleLayer<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLayer").finish_non_exhaustive()
    }
}

/// Collects the `message` field and renders the rest as `key=value`.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message.clear();
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

impl fmt::Display for MessageVisitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        f.write_str(&self.fields)
    }
}

/// Installs a global tracing subscriber writing through [`global`](crate::global).
///
/// # Errors
///
/// Returns [`TryInitError`] when a global tracing subscriber is already set.
pub fn init_tracing() -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(ConsoleLayer::new(crate::global::global()))
        .try_init()
}
