use yew::prelude::*;

use crate::content;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <a
            href={content::FOOTER_LINK}
            target="_blank"
            rel="noopener noreferrer"
            style="position:fixed; bottom:8px; right:8px; backdrop-filter:blur(12px); opacity:0.8; border:1px solid #fda4af; padding:4px; border-radius:4px; color:inherit; text-decoration:none;"
        >
            {"Made with "}<span role="img" aria-label="heart">{"❤️"}</span>{" "}{ content::FOOTER_CREDIT }
        </a>
    }
}
