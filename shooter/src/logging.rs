//! Logging setup. Library code only talks to the `log` facade.

/// Initialize the logging system from `RUST_LOG`.
pub fn init() {
    env_logger::init();
}

/// Like `init`, but safe to call from every test.
pub fn init_for_tests() {
    let _ = env_logger::builder().is_test(true).try_init();
}
