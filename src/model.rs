//! Core state machines for the card.
//!
//! Everything here is pure and deterministic for a given RNG seed; the
//! components in `crate::components` only dispatch actions and render.

pub mod decoration;
pub mod dialog;
pub mod game;
pub mod greeting;
pub mod placement;

pub use decoration::{FloatingDecoration, Mood};
pub use dialog::{Dialog, DialogConfig, DialogIcon, DialogImage, DialogPresenter};
pub use game::{Direction, GameAction, GamePhase, GameState, StepOutcome, Target, Viewport};
pub use greeting::{GreetingAction, GreetingPhase, GreetingState, Notice};
pub use placement::{Bounds, Point, Spacing};
