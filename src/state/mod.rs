pub mod interval;
pub mod touch;
pub mod viewport;

pub use interval::Interval;
pub use touch::first_touch_point;
pub use viewport::current_viewport;
