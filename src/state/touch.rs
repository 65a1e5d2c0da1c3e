// Touch event helpers for the mini-game surface
use web_sys::TouchEvent;

use crate::model::Point;

/// Client coordinates of the first active touch, if any.
pub fn first_touch_point(e: &TouchEvent) -> Option<Point> {
    e.touches()
        .item(0)
        .map(|t| Point::new(t.client_x() as f64, t.client_y() as f64))
}
