use yew::prelude::*;

use super::floating_decorations::FloatingDecorations;
use crate::content;
use crate::model::{GreetingAction, GreetingState, Mood};

#[derive(Properties, PartialEq, Clone)]
pub struct PromptViewProps {
    pub greeting: UseReducerHandle<GreetingState>,
}

/// The "Will you be my Valentine?" question with its two buttons.
#[function_component(PromptView)]
pub fn prompt_view(props: &PromptViewProps) -> Html {
    let greeting = &props.greeting;
    let dispatch = |action: fn() -> GreetingAction| {
        let handle = greeting.clone();
        Callback::from(move |_: MouseEvent| handle.dispatch(action()))
    };

    let accept_click = dispatch(|| GreetingAction::Accept);
    let reject_click = dispatch(|| GreetingAction::Reject);
    let enter_accept = dispatch(|| GreetingAction::HoverEnter(Mood::Love));
    let leave = dispatch(|| GreetingAction::HoverLeave);
    let evading = greeting.evasion_active();
    let enter_reject = {
        let handle = greeting.clone();
        Callback::from(move |_: MouseEvent| {
            if evading {
                handle.dispatch(GreetingAction::Evade);
            }
            handle.dispatch(GreetingAction::HoverEnter(Mood::Sad));
        })
    };

    let reject_style = match greeting.evader_position {
        Some(p) if evading => format!(
            "position:fixed; top:{:.2}vh; left:{:.2}vw; transition:top 0.2s, left 0.2s; z-index:20;",
            p.y, p.x
        ),
        _ => String::new(),
    };

    html! {<>
        <img
            src={content::HEART_GIF}
            class="animate-pulse"
            style="position:fixed; top:40px; left:24px; width:112px;"
            alt="Heart Animation"
        />
        <img
            src={greeting.prompt_gif()}
            style="height:230px; border-radius:8px;"
            alt="Love Animation"
        />
        <h1 style="font-size:clamp(36px, 6vw, 60px); margin:16px 0; text-align:center;">{ content::QUESTION }</h1>
        <div style="display:flex; flex-wrap:wrap; justify-content:center; align-items:center; gap:8px;">
            <button
                class="btn btn-accept"
                style={format!("font-size:{}px; margin-right:16px;", greeting.accept_font_px())}
                onclick={accept_click}
                onmouseenter={enter_accept}
                onmouseleave={leave.clone()}
            >{"Yes"}</button>
            <button
                class="btn btn-reject"
                style={reject_style}
                onclick={reject_click}
                onmouseenter={enter_reject}
                onmouseleave={leave}
            >{ greeting.reject_label() }</button>
        </div>
        <FloatingDecorations items={greeting.decorations.clone()} />
    </>}
}
