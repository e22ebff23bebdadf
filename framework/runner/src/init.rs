/// Initialise logging for the batch runner.
///
/// Uses `env_logger`, so diagnostics are controlled with `RUST_LOG` and land
/// on stderr, away from the pass-through engine output on stdout.
pub(crate) fn init() {
    let _ = env_logger::try_init();
}
