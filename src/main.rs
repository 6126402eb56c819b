//! Browser entrypoint: panic hook, console logger, mount.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(feedback_collector::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // Native builds exist only to run the test suite.
}
