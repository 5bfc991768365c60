use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::dialog::{use_modal, Dialog};
use crate::components::reveal::AnimatedSection;
use crate::config::CONTACT_SCROLL_DELAY_MS;
use crate::dom::scroll_to_section;
use crate::state::sections::SectionId;

#[derive(Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub descriptions: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "UI/UX Design",
        icon: "✎",
        gradient: "linear-gradient(to right, #ec4899, #9333ea)",
        descriptions: &[
            "Desenvolvo o layout da sua aplicação mobile ou web.",
            "Desenvolvo interfaces UI/UX interativas.",
            "Crio logótipos de marcas.",
            "Crio protótipos navegáveis no Figma para validação antes do desenvolvimento.",
            "Transformo ideias em interfaces modernas, intuitivas e com foco no usuário.",
            "E muito mais...",
        ],
    },
    Service {
        title: "Front-End",
        icon: "</>",
        gradient: "linear-gradient(to right, #3b82f6, #0891b2)",
        descriptions: &[
            "Desenvolvo Landing Pages totalmente únicas, responsivas e adaptadas às suas necessidades.",
            "Crio Sites Institucionais únicos, modernos e alinhados à identidade da sua marca.",
            "Desenvolvo Lojas Virtuais exclusivas, responsivas e otimizadas para vendas.",
            "Integro APIs e desenvolvo aplicações dinâmicas e rápidas com React e Next.js.",
            "Utilizo TailwindCSS e boas práticas para entregar interfaces escaláveis e performáticas.",
            "E muito mais...",
        ],
    },
    Service {
        title: "Back-End",
        icon: "⛁",
        gradient: "linear-gradient(to right, #ef4444, #FFAE00)",
        descriptions: &[
            "Desenvolvo APIs seguras e escaláveis com PHP (Laravel).",
            "Integro sistemas com bancos de dados relacionais (MySQL, PostgreSQL).",
            "Implemento autenticação e autorização (JWT, OAuth2, ACLs) para proteger seus sistemas.",
            "Crio painéis administrativos personalizados para gestão completa do seu negócio.",
            "Garanto performance, segurança e escalabilidade no servidor.",
            "E muito mais...",
        ],
    },
];

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub is_dark: bool,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let modal = use_modal::<&'static Service>();
    let theme = if props.is_dark { "dark" } else { "light" };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_| modal.close())
    };

    let on_hire = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            modal.close();
            spawn_local(async move {
                TimeoutFuture::new(CONTACT_SCROLL_DELAY_MS).await;
                scroll_to_section(SectionId::Contato);
            });
        })
    };

    html! {
        <section id={SectionId::Servicos.dom_id()} class={classes!("services", theme)}>
            <style>
                {r#"
                    .services { padding: 5rem 1rem; position: relative; }
                    .services.dark { background: linear-gradient(135deg, #111827, #000, #111827); color: #fff; }
                    .services.light { background: linear-gradient(135deg, #eff6ff, #f9fafb, #f3f4f6); color: #1f2937; }
                    .services-grid {
                        max-width: 1152px;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .service-card {
                        border-radius: 1rem;
                        padding: 2rem;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .services.dark .service-card { background: rgba(31, 41, 55, 0.5); border: 1px solid rgba(55, 65, 81, 0.5); }
                    .services.light .service-card { background: rgba(255, 255, 255, 0.8); border: 1px solid #e5e7eb; }
                    .service-card:hover { transform: translateY(-6px); box-shadow: 0 20px 40px rgba(255, 174, 0, 0.15); }
                    .service-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .service-list { padding-left: 1.2rem; line-height: 1.7; }
                    .hire-button {
                        margin-top: 1.5rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 0.75rem;
                        font-weight: 600;
                        cursor: pointer;
                        background: linear-gradient(to right, #FFAE00, #f97316);
                        color: #000;
                    }
                "#}
            </style>
            <AnimatedSection class="section-heading">
                <h2>{"Meus "}<span class="accent">{"Serviços"}</span></h2>
            </AnimatedSection>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| {
                    let onclick = {
                        let modal = modal.clone();
                        Callback::from(move |_: MouseEvent| modal.open(service))
                    };
                    html! {
                        <AnimatedSection key={service.title} delay={i as f64 * 0.1}>
                            <div class="service-card" {onclick}>
                                <div class="service-icon" style={format!("background: {};", service.gradient)}>
                                    { service.icon }
                                </div>
                                <h3>{ service.title }</h3>
                                <p>{ service.descriptions[0] }</p>
                                <span class="accent">{"Saiba mais →"}</span>
                            </div>
                        </AnimatedSection>
                    }
                }) }
            </div>
            if let Some(service) = modal.selected() {
                <Dialog open={modal.is_open()} is_dark={props.is_dark} title={service.title} on_close={on_close}>
                    <ul class="service-list">
                        { for service.descriptions.iter().map(|line| html! { <li>{ *line }</li> }) }
                    </ul>
                    <button class="hire-button" onclick={on_hire}>{"Contratar serviço"}</button>
                </Dialog>
            }
        </section>
    }
}
