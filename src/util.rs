// Browser helpers shared by components and the entry point

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        // Already installed (e.g. hot reload).
        log::debug!("console logger already initialised");
    }
}

pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|win| win.local_storage().ok())
        .flatten()
}

/// Fresh RNG seed drawn from the browser's `Math.random`.
pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}
