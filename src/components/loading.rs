use web_sys::js_sys::Math;
use yew::prelude::*;

const PHRASES: [&str; 5] = [
    "Transformando ideias em experiências digitais",
    "Onde front-end e back-end se encontram em perfeita harmonia",
    "Codificando soluções que conectam mundos",
    "Desenvolvendo o amanhã, uma linha de código por vez",
    "Da concepção à implantação: domínio completo do ciclo de desenvolvimento",
];

fn random_phrase() -> &'static str {
    let index = (Math::random() * PHRASES.len() as f64) as usize;
    PHRASES[index.min(PHRASES.len() - 1)]
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub is_dark: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let phrase = use_memo(|_| random_phrase(), ());

    html! {
        <div class={classes!("loading-screen", if props.is_dark { "dark" } else { "light" })}>
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 1rem;
                    }
                    .loading-screen.dark { background: linear-gradient(135deg, #111827, #000, #111827); }
                    .loading-screen.light { background: linear-gradient(135deg, #eff6ff, #fff, #f3f4f6); }
                    .loading-badge {
                        width: 6rem;
                        height: 6rem;
                        border-radius: 9999px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        font-weight: 700;
                        color: #fff;
                        background: linear-gradient(to right, #FFAE00, #f97316);
                        margin-bottom: 2rem;
                        animation: pulse 1.5s ease-in-out infinite;
                    }
                    .loading-bar {
                        width: 16rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        overflow: hidden;
                        background: rgba(55, 65, 81, 0.3);
                    }
                    .loading-bar > div {
                        height: 100%;
                        background: linear-gradient(to right, #FFAE00, #f97316);
                        animation: progress 2s ease-in-out forwards;
                    }
                    .loading-phrase { margin-top: 1.5rem; font-size: 1.1rem; font-weight: 500; }
                    .loading-screen.dark .loading-phrase { color: #FFAE00; }
                    .loading-screen.light .loading-phrase { color: #ea580c; }
                    .loading-hint { margin-top: 1rem; font-size: 0.875rem; color: #6b7280; }
                    @keyframes progress { from { width: 0%; } to { width: 100%; } }
                    @keyframes pulse { 50% { transform: scale(1.05); } }
                "#}
            </style>
            <div class="loading-badge">{"</>"}</div>
            <div class="loading-bar"><div></div></div>
            <p class="loading-phrase">{ *phrase }</p>
            <p class="loading-hint">{"Carregando experiências incríveis..."}</p>
        </div>
    }
}
