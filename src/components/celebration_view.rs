use yew::prelude::*;

use crate::content;

#[derive(Properties, PartialEq, Clone)]
pub struct CelebrationViewProps {
    pub gif: &'static str,
    pub open_game: Callback<()>,
}

#[function_component(CelebrationView)]
pub fn celebration_view(props: &CelebrationViewProps) -> Html {
    let gift_cb = {
        let cb = props.open_game.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<>
        <img src={props.gif} style="height:230px; border-radius:8px;" alt="Yes Response" />
        <img src={content::HOW_YOU_DOING_GIF} style="height:230px; border-radius:8px; margin:16px 0;" alt="How you doing" />
        <div style="font-size:clamp(36px, 6vw, 60px); font-weight:700; margin:8px 0; font-family:'Charm', serif;">{ content::CELEBRATION_HEADLINE }</div>
        <div style="font-size:36px; font-weight:500; margin:4px 0; font-family:'Beau Rivage', serif;">{ content::CELEBRATION_SUBLINE }</div>
        <button class="btn btn-gift animate-bounce" onclick={gift_cb} style="font-size:20px; margin-top:24px;">
            { content::GIFT_BUTTON }
        </button>
    </>}
}
