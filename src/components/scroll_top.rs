use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SCROLL_TOP_VISIBLE_PX;
use crate::dom::scroll_to_top;

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let (_, scroll_y) = use_window_scroll();

    if scroll_y <= SCROLL_TOP_VISIBLE_PX {
        return html! {};
    }

    html! {
        <button
            class="scroll-top"
            aria-label="Voltar ao topo"
            onclick={Callback::from(|_: MouseEvent| scroll_to_top())}
        >
            <style>
                {r#"
                    .scroll-top {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        z-index: 50;
                        width: 3rem;
                        height: 3rem;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        font-size: 1.25rem;
                        color: #000;
                        background: linear-gradient(to right, #FFAE00, #f97316);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                        transition: transform 0.3s ease;
                    }
                    .scroll-top:hover { transform: scale(1.1); }
                "#}
            </style>
            {"⌃"}
        </button>
    }
}
