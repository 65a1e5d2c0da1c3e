use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameHeaderProps {
    pub score: u32,
    pub goal: u32,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn GameHeader(props: &GameHeaderProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:absolute; top:0; left:0; right:0; display:flex; justify-content:space-between; align-items:center; padding:12px 16px; z-index:5;">
            <div style="background:rgba(255,255,255,0.9); border-radius:999px; padding:8px 16px; font-weight:700; color:#db2777; font-variant-numeric:tabular-nums;">
                { format!("Hearts Collected: {}/{}", props.score, props.goal) }
            </div>
            <button onclick={close_cb} aria-label="Close game" style="background:rgba(255,255,255,0.9); border:none; border-radius:50%; width:40px; height:40px; font-size:20px; cursor:pointer;">{"✕"}</button>
        </div>
    }
}
