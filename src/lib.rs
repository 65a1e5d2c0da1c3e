//! Valentine Proposal - an interactive "Will you be my Valentine?" card
//!
//! Modules:
//! - `model`: greeting flow, mini-game and placement state machines (pure)
//! - `components`: Yew views dispatching into the model
//! - `state`: browser-side helpers (interval guard, viewport, touch)
//! - `config`: tunables with LocalStorage override
//! - `content`: copy and asset paths

pub mod components;
pub mod config;
pub mod content;
pub mod model;
pub mod state;
pub mod util;

pub use components::App;
pub use config::Config;
