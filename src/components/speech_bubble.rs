use yew::prelude::*;

use crate::content;
use crate::model::Point;

#[derive(Properties, PartialEq, Clone)]
pub struct SpeechBubbleProps {
    pub show: bool,
    /// Top-left of the character sprite.
    pub anchor: Point,
    pub character_size: f64,
    pub goal: u32,
}

/// Intro line shown next to the character until the first move.
#[function_component(SpeechBubble)]
pub fn speech_bubble(props: &SpeechBubbleProps) -> Html {
    if !props.show {
        return html! {};
    }
    let style = format!(
        "position:absolute; left:{}px; top:{}px; background:#fff; color:#be185d; border:2px solid #f472b6; border-radius:14px; padding:10px 14px; font-size:14px; line-height:1.4; max-width:220px; box-shadow:0 4px 12px rgba(0,0,0,0.15);",
        props.anchor.x + props.character_size + 10.0,
        props.anchor.y
    );
    html! {
        <div class="speech-bubble" style={style}>
            { format!("Hi! I'm {}! 💕", content::GAME_CHARACTER_NAME) }<br />
            { format!("I need to collect {} hearts.", props.goal) }<br />
            {"Can you help me? 🥺"}
        </div>
    }
}
