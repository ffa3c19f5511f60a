//! Resource registry for the Sprig compiler.
//!
//! Tracks which templates, style sheets, and host-binding sources belong to
//! which declared component or directive. The analysis pass registers each
//! class once; editors and build watchers then ask either direction:
//!
//! ```text
//! components_with_template(path) / components_with_style(path)
//!         path ──────────────────────────────▶ {DeclId}
//! template(decl) / styles(decl) / host_bindings(decl)
//!         DeclId ─────────────────────────────▶ Resource(s)
//! ```
//!
//! The registry reads no files and resolves no paths: upstream hands it
//! `AbsPath` handles that are already canonical and has already decided
//! which references are inline.

mod multimap;
mod registry;
mod resource;
mod shared;

pub use multimap::SetView;
pub use registry::ResourceRegistry;
pub use resource::{DirectiveResources, ExternalResource, Resource};
pub use shared::SharedResourceRegistry;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with
/// `RUST_LOG=sprig_resources=debug` or `RUST_LOG=sprig_resources=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
