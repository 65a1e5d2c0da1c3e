use crate::model::Viewport;

/// Current window size, falling back to 800x600 when unavailable.
pub fn current_viewport() -> Viewport {
    let fallback = Viewport::default();
    let Some(window) = web_sys::window() else {
        return fallback;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback.width);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback.height);
    Viewport { width, height }
}
