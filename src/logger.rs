use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ログ初期化
///
/// `RUST_LOG` があればそれを優先する。なければ `--verbose` でdebug、通常はwarn。
pub fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "florascan=debug,florascan_common=debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
