use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tree-formatted subscriber.
///
/// Only initializes if `RUST_LOG` is set; calling it again is a no-op.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
