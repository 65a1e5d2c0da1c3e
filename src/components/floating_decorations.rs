use yew::prelude::*;

use crate::model::FloatingDecoration;

#[derive(Properties, PartialEq, Clone)]
pub struct FloatingDecorationsProps {
    pub items: Vec<FloatingDecoration>,
}

#[function_component]
pub fn FloatingDecorations(props: &FloatingDecorationsProps) -> Html {
    html! {<>
        { for props.items.iter().map(|d| html! {
            <img
                key={d.id.clone()}
                src={d.asset}
                alt="Floating Animation"
                class="animate-bounce"
                style={format!("position:absolute; width:48px; height:48px; pointer-events:none; {}", d.style())}
            />
        }) }
    </>}
}
