//! Static copy and asset references for the card.
//!
//! Asset paths are relative to the served `index.html` (Trunk copies the
//! `assets/` directory next to it).

/// Reject-button labels, escalating with each "no". Clamped to the last entry.
pub const REJECT_PHRASES: [&str; 8] = [
    "No",
    "Are you sure?",
    "Really sure?",
    "Think again!",
    "Pretty please?",
    "Have a heart! ❤️",
    "I'm not giving up!",
    "Give me a chance!",
];

/// Shown on the prompt until the rejection threshold is reached.
pub const PROMPT_GIF: &str = "assets/gifs/main_temp.gif";
pub const HEART_GIF: &str = "assets/gifs/heart.gif";
pub const SAD_GIF: &str = "assets/gifs/sad.gif";
pub const HOW_YOU_DOING_GIF: &str = "assets/gifs/how_you_doing.gif";
pub const PARTY_TIME_GIF: &str = "assets/gifs/party-time-wassup.gif";
pub const DIALOG_BACKGROUND: &str = "assets/lovingbg2_main.jpg";
pub const CHARACTER_SPRITE: &str = "assets/character-sprite.png";

/// Cycled on the prompt once the rejection threshold is passed.
pub const REJECTION_GIFS: [&str; 10] = [
    "assets/gifs/no/breakRej0.gif",
    "assets/gifs/no/breakRej0_1.gif",
    "assets/gifs/no/breakRej1.gif",
    "assets/gifs/no/breakRej2.gif",
    "assets/gifs/no/breakRej3.gif",
    "assets/gifs/no/breakRej4.gif",
    "assets/gifs/no/breakRej5.gif",
    "assets/gifs/no/breakRej6.gif",
    "assets/gifs/no/RejectNo.gif",
    "assets/gifs/no/breakRej7.gif",
];

/// Cycled on a timer in the celebration view.
pub const CELEBRATION_GIFS: [&str; 7] = [
    "assets/gifs/yes/lovecutie0.gif",
    "assets/gifs/yes/love1.gif",
    "assets/gifs/yes/lovecutie5.gif",
    "assets/gifs/yes/lovecutie8.gif",
    "assets/gifs/yes/lovecutie3.gif",
    "assets/gifs/yes/lovecutie9.gif",
    "assets/gifs/yes/lovecutie4.gif",
];

pub const QUESTION: &str = "Will you be my Valentine?";
pub const CELEBRATION_HEADLINE: &str = "Я тебе хочу!";
pub const CELEBRATION_SUBLINE: &str = "Miss pretty eyes";
pub const GIFT_BUTTON: &str = "🎮 Click me for cute gift!";
pub const FOOTER_CREDIT: &str = "by your Coffee with Milk";
pub const FOOTER_LINK: &str = "https://github.com/NitinRajSingh";

pub const GAME_CHARACTER_NAME: &str = "Yaryna";
pub const GAME_INSTRUCTIONS: &str = "Use arrow keys or touch to move!";
