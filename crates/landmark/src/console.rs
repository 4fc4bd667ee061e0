//! Console logging for landmark tools.
//!
//! Installs a `tracing` subscriber that prints rule engine events to
//! stderr. `RUST_LOG` overrides the default filter.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVES: [&str; 2] = ["landmark_rules=info", "landmark_io=info"];

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_level(None);
}

/// Initializes console logging, raising every landmark crate to `level`
/// (`"debug"`, `"trace"`, ...) when given.
pub fn init_with_level(level: Option<&str>) {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        for directive in DEFAULT_DIRECTIVES {
            if let Ok(directive) = directive.parse() {
                filter = filter.add_directive(directive);
            }
        }
        if let Some(level) = level {
            for target in ["landmark_rules", "landmark_io", "landmark_cli"] {
                if let Ok(directive) = format!("{target}={level}").parse() {
                    filter = filter.add_directive(directive);
                }
            }
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init();
    });
}
