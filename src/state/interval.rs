//! Recurring browser timer owned by a guard.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// A `setInterval` registration that is cleared when dropped.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Start calling `f` every `period_ms`. Returns `None` when the browser
    /// refuses the registration.
    pub fn start(period_ms: u32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let period = i32::try_from(period_ms).unwrap_or(i32::MAX);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period,
        ) {
            Ok(id) => Some(Self {
                id,
                _callback: callback,
            }),
            Err(e) => {
                log::warn!("setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}
