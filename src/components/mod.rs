pub mod app;
pub mod celebration_view;
pub mod dialog_modal;
pub mod floating_decorations;
pub mod footer;
pub mod game_header;
pub mod mini_game;
pub mod prompt_view;
pub mod speech_bubble;

pub use app::App;
pub use dialog_modal::{DialogHost, DialogModal, DialogQueue};
