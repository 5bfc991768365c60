use yew::prelude::*;

use crate::components::reveal::AnimatedSection;
use crate::dom::scroll_to_section;
use crate::state::sections::SectionId;

const STATS: [(&str, &str); 3] = [
    ("⚡", "Performance"),
    ("🚀", "Escalabilidade"),
    ("🏅", "Resultados"),
];

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub is_dark: bool,
}

fn jump_to(id: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    let theme = if props.is_dark { "dark" } else { "light" };

    html! {
        <section id={SectionId::Home.dom_id()} class={classes!("banner", theme)}>
            <style>
                {r#"
                    .banner { min-height: 100vh; display: flex; align-items: center; padding: 2rem 1rem; position: relative; overflow: hidden; }
                    .banner.dark { background: linear-gradient(135deg, #111827, #000, #111827); color: #fff; }
                    .banner.light { background: linear-gradient(135deg, #eff6ff, #fff, #dbeafe); color: #111827; }
                    .banner-grid { max-width: 1280px; margin: 0 auto; width: 100%; display: grid; grid-template-columns: 1.2fr 1fr; gap: 3rem; align-items: center; }
                    .banner h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); margin: 0; line-height: 1.1; }
                    .banner h1.gradient { background: linear-gradient(to right, #FFAE00, #f97316); -webkit-background-clip: text; -webkit-text-fill-color: transparent; }
                    .banner-lead { font-size: 1.15rem; line-height: 1.8; opacity: 0.8; max-width: 32rem; }
                    .stats { display: flex; gap: 1rem; margin: 2rem 0; }
                    .stat { padding: 0.75rem 1rem; border-radius: 0.75rem; border: 1px solid rgba(156, 163, 175, 0.3); }
                    .cta { display: flex; gap: 1rem; flex-wrap: wrap; }
                    .cta a { padding: 0.9rem 1.75rem; border-radius: 0.75rem; font-weight: 600; text-decoration: none; }
                    .cta .primary { background: linear-gradient(to right, #FFAE00, #f97316); color: #000; }
                    .cta .secondary { border: 2px solid #FFAE00; color: #FFAE00; }
                    .banner-photo { width: 100%; max-width: 420px; border-radius: 9999px; justify-self: center; box-shadow: 0 30px 60px rgba(255, 174, 0, 0.25); }
                    .scroll-hint { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); color: #FFAE00; text-decoration: none; animation: bounce 2s infinite; }
                    @keyframes bounce { 50% { transform: translate(-50%, 8px); } }
                    @media (max-width: 900px) { .banner-grid { grid-template-columns: 1fr; text-align: center; } .stats, .cta { justify-content: center; } }
                "#}
            </style>
            <div class="banner-grid">
                <div>
                    <AnimatedSection>
                        <h1>{"Transformando"}</h1>
                        <h1 class="gradient">{"Ideias em Código"}</h1>
                    </AnimatedSection>
                    <AnimatedSection delay={0.2}>
                        <h2>{"Desenvolvedor Full Stack"}</h2>
                        <p class="banner-lead">
                            {"Desenvolvedor Fullstack especializado em criar experiências digitais que convertem visitantes em clientes. \
                              Soluções com foco em performance, escalabilidade e resultados mensuráveis."}
                        </p>
                    </AnimatedSection>
                    <AnimatedSection delay={0.4}>
                        <div class="stats">
                            { for STATS.into_iter().map(|(icon, label)| html! {
                                <div class="stat" key={label}>{ icon }{" "}{ label }</div>
                            }) }
                        </div>
                        <div class="cta">
                            <a class="primary" href="#projetos" onclick={jump_to(SectionId::Projetos)}>{"Ver projetos"}</a>
                            <a class="secondary" href="#contato" onclick={jump_to(SectionId::Contato)}>{"Fale comigo"}</a>
                        </div>
                    </AnimatedSection>
                </div>
                <AnimatedSection delay={0.3}>
                    <img class="banner-photo" src="/img/perfil.png" alt="João Breno" />
                </AnimatedSection>
            </div>
            <a class="scroll-hint" href="#servicos" onclick={jump_to(SectionId::Servicos)} aria-label="Rolar para serviços">{"⌄"}</a>
        </section>
    }
}
