//! Popup dialogs raised by the greeting flow and the mini-game.

use yew::Callback;

use crate::content;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    /// "Yes" pressed before enough rejections; nudges the user to play hard to get.
    SoftConfirm,
    /// Sticky acceptance.
    Celebration,
    /// Reached the rejection milestone.
    Milestone,
    /// Mini-game completed.
    Win,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DialogImage {
    pub url: &'static str,
    pub width_px: u32,
    pub height_px: u32,
    pub alt: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogIcon {
    Success,
}

/// Presentation record handed to the dialog host.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogConfig {
    pub title: &'static str,
    pub body_text: Option<&'static str>,
    pub image: Option<DialogImage>,
    pub icon: Option<DialogIcon>,
    pub width_px: u32,
    pub padding: &'static str,
    pub color: &'static str,
    /// Card background image, layered over white.
    pub background_image: Option<&'static str>,
    pub backdrop: &'static str,
    /// Image pinned to the right of the backdrop.
    pub backdrop_image: Option<&'static str>,
    pub confirm_button_text: &'static str,
    pub confirm_button_color: &'static str,
}

const THEME_COLOR: &str = "#716add";
const DEFAULT_CONFIRM: &str = "OK";
const DEFAULT_CONFIRM_COLOR: &str = "#7066e0";

impl Dialog {
    pub fn config(self) -> DialogConfig {
        match self {
            Dialog::SoftConfirm => DialogConfig {
                title: "Wow, that was fast! ❤️ You sure you don't want to play hard to get for just a second? 😉",
                body_text: None,
                image: None,
                icon: None,
                width_px: 700,
                padding: "2em",
                color: THEME_COLOR,
                background_image: Some(content::DIALOG_BACKGROUND),
                backdrop: "rgba(0,0,123,0.2)",
                backdrop_image: None,
                confirm_button_text: DEFAULT_CONFIRM,
                confirm_button_color: DEFAULT_CONFIRM_COLOR,
            },
            Dialog::Celebration => DialogConfig {
                title: "Let'ssss go! 🎉",
                body_text: None,
                image: Some(DialogImage {
                    url: content::PARTY_TIME_GIF,
                    width_px: 400,
                    height_px: 200,
                    alt: "Party Time",
                }),
                icon: None,
                width_px: 800,
                padding: "2em",
                color: THEME_COLOR,
                background_image: Some(content::DIALOG_BACKGROUND),
                backdrop: "rgba(0,0,123,0.7)",
                backdrop_image: None,
                confirm_button_text: DEFAULT_CONFIRM,
                confirm_button_color: DEFAULT_CONFIRM_COLOR,
            },
            Dialog::Milestone => DialogConfig {
                title: "Okay, I get it, you're tough! 😅 But I'm not giving up. Just say Yes already!",
                body_text: None,
                image: None,
                icon: None,
                width_px: 850,
                padding: "2em",
                color: THEME_COLOR,
                background_image: Some(content::DIALOG_BACKGROUND),
                backdrop: "rgba(0,104,123,0.7)",
                backdrop_image: Some(content::REJECTION_GIFS[2]),
                confirm_button_text: DEFAULT_CONFIRM,
                confirm_button_color: DEFAULT_CONFIRM_COLOR,
            },
            Dialog::Win => DialogConfig {
                title: "🎉 Congratulations! 🎉",
                body_text: Some("You won a cute gift and you'll get it soon! 😉"),
                image: None,
                icon: Some(DialogIcon::Success),
                width_px: 500,
                padding: "1.25em",
                color: "#545454",
                background_image: None,
                backdrop: "rgba(0,0,0,0.4)",
                backdrop_image: None,
                confirm_button_text: "Yay!",
                confirm_button_color: "#ff69b4",
            },
        }
    }
}

/// Anything able to show a [`Dialog`] until the user dismisses it.
///
/// `on_dismiss` runs after the dialog closes.
pub trait DialogPresenter {
    fn present(&self, dialog: Dialog, on_dismiss: Option<Callback<()>>);
}
