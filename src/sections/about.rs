use yew::prelude::*;

use crate::components::reveal::AnimatedSection;
use crate::config::ABOUT_REVEAL_THRESHOLD;
use crate::state::sections::SectionId;

const SOCIALS: [(&str, &str); 3] = [
    ("GitHub", "https://github.com/J-Breno/"),
    ("LinkedIn", "https://www.linkedin.com/in/jo%C3%A3o-breno/"),
    ("Instagram", "https://www.instagram.com/jbrenojj"),
];

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("3+", "Anos de experiência"),
    ("20+", "Projetos entregues"),
    ("100%", "Compromisso com qualidade"),
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub is_dark: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let theme = if props.is_dark { "dark" } else { "light" };

    html! {
        <section id={SectionId::Sobre.dom_id()} class={classes!("about", theme)}>
            <style>
                {r#"
                    .about { padding: 5rem 1rem; overflow: hidden; }
                    .about.dark { background: linear-gradient(135deg, #111827, #000, #111827); color: #fff; }
                    .about.light { background: linear-gradient(135deg, #eff6ff, #fff, #f3f4f6); color: #111827; }
                    .about-grid { max-width: 1152px; margin: 0 auto; display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center; }
                    .about-photo { width: 100%; max-width: 380px; border-radius: 1.5rem; border: 3px solid #FFAE00; justify-self: center; }
                    .about-text p { line-height: 1.8; opacity: 0.85; }
                    .highlights { display: flex; gap: 1.5rem; margin: 2rem 0; }
                    .highlight strong { display: block; font-size: 1.75rem; color: #FFAE00; }
                    .socials { display: flex; gap: 1rem; }
                    .socials a { color: inherit; font-weight: 600; text-decoration: none; border-bottom: 2px solid #FFAE00; }
                    @media (max-width: 768px) { .about-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <AnimatedSection class="section-heading" threshold={ABOUT_REVEAL_THRESHOLD}>
                <h2>{"Sobre "}<span class="accent">{"mim"}</span></h2>
            </AnimatedSection>
            <div class="about-grid">
                <AnimatedSection threshold={ABOUT_REVEAL_THRESHOLD}>
                    <img class="about-photo" src="/img/joao.jpeg" alt="João Breno" />
                </AnimatedSection>
                <AnimatedSection class="about-text" threshold={ABOUT_REVEAL_THRESHOLD} delay={0.2}>
                    <p>
                        {"Sou João Breno, desenvolvedor Full Stack apaixonado por transformar ideias em produtos digitais. \
                          Trabalho de ponta a ponta: do protótipo no Figma à API em produção."}
                    </p>
                    <p>
                        {"Gosto de código limpo, interfaces rápidas e de aprender uma tecnologia nova a cada projeto."}
                    </p>
                    <div class="highlights">
                        { for HIGHLIGHTS.into_iter().map(|(value, label)| html! {
                            <div class="highlight" key={label}>
                                <strong>{ value }</strong>
                                <span>{ label }</span>
                            </div>
                        }) }
                    </div>
                    <div class="socials">
                        { for SOCIALS.into_iter().map(|(name, href)| html! {
                            <a key={name} {href} target="_blank" rel="noopener noreferrer">{ name }</a>
                        }) }
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}
