use tracing_subscriber::EnvFilter;

/// Configure tracing once at application startup for the entire process.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between debug and info
/// for this crate.
///
/// ```bash
/// RUST_LOG=gift_order::clients=debug gift_order
/// ```
pub fn setup_tracing(verbose: bool) {
    let default_filter = if verbose { "gift_order=debug,info" } else { "gift_order=info,warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(false)
        .compact()
        .init();
}
