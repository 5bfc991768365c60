use gloo_timers::callback::{Interval, Timeout};
use web_sys::TouchEvent;
use yew::prelude::*;

use crate::components::reveal::AnimatedSection;
use crate::config::{AUTOPLAY_INTERVAL_MS, SLIDE_TRANSITION_MS};
use crate::state::carousel::{Carousel, Direction};
use crate::state::sections::SectionId;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    text: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Iarlley Gomes",
        role: "Network Analyst | NOC | FCF",
        image: "/img/iarlley.jpeg",
        text: "Tive a oportunidade de acompanhar seu trabalho e posso destacar o profissionalismo e a motivação que demonstra em cada desafio. Possui sólida experiência em soluções lógicas e se destaca pela forma como analisa cenários e propõe soluções práticas e eficazes.",
    },
    Testimonial {
        name: "Lucas Guilherme",
        role: "Analista de Dados | Excel | Power BI | SQL",
        image: "/img/lucas.jpeg",
        text: "João Breno, uma pessoa disciplinada, talentosa e comunicativa. Tem grande conhecimento na área da programação, domina as principais ferramentas e está sempre se dedicando aos estudos para se aprimorar ainda mais.",
    },
    Testimonial {
        name: "Pedro Davi",
        role: "Analista de Monitoramento",
        image: "/img/barreto.png",
        text: "João Breno é um profissional com excelente domínio em programação, sempre disposto a aprender e a encarar novos desafios. Sua dedicação e talento fazem a diferença na equipe.",
    },
    Testimonial {
        name: "Eduardo Ferreira",
        role: "Analista de Monitoramento",
        image: "/img/eduardo.jpeg",
        text: "João Breno é um profissional que se destaca pelo grande conhecimento em programação, pela vontade constante de aprender e pelo raciocínio lógico rápido. Sua capacidade de evolução é admirável e inspiradora.",
    },
    Testimonial {
        name: "Dnivaldo A O Filho",
        role: "Analista de Redes e de comunicação de dados",
        image: "/img/oliveira.jpeg",
        text: "Breno é um colaborador que logo conquista sua confiança por conta da sua capacidade técnica, comprometimento e facilidade de relacionamento. Recomendo o seu trabalho sem dúvidas.",
    },
];

pub enum RecommendationsMsg {
    Next,
    Prev,
    GoTo(usize),
    Settle,
    AutoplayTick,
    PointerEnter,
    PointerLeave,
    TouchStart(i32),
    TouchMove(i32),
    TouchEnd,
    TouchCancel,
}

#[derive(Properties, PartialEq)]
pub struct RecommendationsProps {
    pub is_dark: bool,
}

/// Testimonial slider. Owns its timers: dropping the component cancels both
/// the pending settle and the autoplay interval.
pub struct Recommendations {
    carousel: Carousel,
    settle: Option<Timeout>,
    autoplay: Option<Interval>,
}

impl Recommendations {
    fn schedule_settle(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.settle = Some(Timeout::new(SLIDE_TRANSITION_MS, move || {
            link.send_message(RecommendationsMsg::Settle);
        }));
    }

    fn sync_autoplay(&mut self, ctx: &Context<Self>) {
        if !self.carousel.autoplay_active() {
            self.autoplay = None;
        } else if self.autoplay.is_none() {
            let link = ctx.link().clone();
            self.autoplay = Some(Interval::new(AUTOPLAY_INTERVAL_MS, move || {
                link.send_message(RecommendationsMsg::AutoplayTick);
            }));
        }
    }

    fn started(&mut self, ctx: &Context<Self>, started: bool) -> bool {
        if started {
            self.schedule_settle(ctx);
        }
        started
    }
}

fn first_touch_x(e: &TouchEvent) -> Option<i32> {
    e.target_touches().get(0).map(|touch| touch.client_x())
}

impl Component for Recommendations {
    type Message = RecommendationsMsg;
    type Properties = RecommendationsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = Self {
            carousel: Carousel::new(TESTIMONIALS.len()),
            settle: None,
            autoplay: None,
        };
        component.sync_autoplay(ctx);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RecommendationsMsg::Next => {
                let started = self.carousel.next();
                self.started(ctx, started)
            }
            RecommendationsMsg::Prev => {
                let started = self.carousel.prev();
                self.started(ctx, started)
            }
            RecommendationsMsg::GoTo(index) => {
                let started = self.carousel.go_to(index);
                self.started(ctx, started)
            }
            RecommendationsMsg::AutoplayTick => {
                let started = self.carousel.autoplay_tick();
                self.started(ctx, started)
            }
            RecommendationsMsg::Settle => {
                self.settle = None;
                self.carousel.settle()
            }
            RecommendationsMsg::PointerEnter => {
                self.carousel.pointer_enter();
                self.sync_autoplay(ctx);
                false
            }
            RecommendationsMsg::PointerLeave => {
                self.carousel.pointer_leave();
                self.sync_autoplay(ctx);
                false
            }
            RecommendationsMsg::TouchStart(x) => {
                self.carousel.touch_start(x);
                self.sync_autoplay(ctx);
                false
            }
            RecommendationsMsg::TouchMove(x) => {
                self.carousel.touch_move(x);
                false
            }
            RecommendationsMsg::TouchEnd => {
                let started = self.carousel.touch_end().is_some();
                self.sync_autoplay(ctx);
                self.started(ctx, started)
            }
            RecommendationsMsg::TouchCancel => {
                self.carousel.touch_cancel();
                self.sync_autoplay(ctx);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let theme = if ctx.props().is_dark { "dark" } else { "light" };
        let current = &TESTIMONIALS[self.carousel.index()];
        let slide_class = match self.carousel.direction() {
            Some(Direction::Forward) => "slide-out-left",
            Some(Direction::Backward) => "slide-out-right",
            None => "",
        };

        html! {
            <section id={SectionId::Recomendacoes.dom_id()} class={classes!("recommendations", theme)}>
                <style>
                    {r#"
                        .recommendations { padding: 5rem 1rem; }
                        .recommendations.dark { background: linear-gradient(135deg, #111827, #1f2937, #111827); color: #fff; }
                        .recommendations.light { background: linear-gradient(135deg, #eff6ff, #f9fafb, #f3f4f6); color: #1f2937; }
                        .carousel { position: relative; max-width: 56rem; margin: 0 auto; padding: 0 3.5rem; }
                        .slide {
                            border-radius: 1.5rem;
                            padding: 2.5rem;
                            transition: transform 0.3s ease, opacity 0.3s ease;
                        }
                        .recommendations.dark .slide { background: rgba(31, 41, 55, 0.6); border: 1px solid rgba(55, 65, 81, 0.5); }
                        .recommendations.light .slide { background: #fff; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.06); }
                        .slide.slide-out-left { transform: translateX(-40px); opacity: 0; }
                        .slide.slide-out-right { transform: translateX(40px); opacity: 0; }
                        .slide blockquote { font-size: 1.1rem; line-height: 1.8; font-style: italic; margin: 0 0 2rem; }
                        .author { display: flex; align-items: center; gap: 1rem; }
                        .author img { width: 4rem; height: 4rem; border-radius: 9999px; object-fit: cover; border: 2px solid #FFAE00; }
                        .author-role { font-size: 0.875rem; opacity: 0.7; }
                        .carousel-arrow {
                            position: absolute;
                            top: 50%;
                            transform: translateY(-50%);
                            width: 2.75rem;
                            height: 2.75rem;
                            border-radius: 9999px;
                            border: none;
                            cursor: pointer;
                            background: #FFAE00;
                            color: #111827;
                            font-size: 1.25rem;
                        }
                        .carousel-arrow.prev { left: 0; }
                        .carousel-arrow.next { right: 0; }
                        .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
                        .carousel-dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; border: none; cursor: pointer; background: rgba(156, 163, 175, 0.5); transition: all 0.3s ease; }
                        .carousel-dot.active { width: 2rem; background: #FFAE00; }
                    "#}
                </style>
                <AnimatedSection class="section-heading">
                    <h2>{"O que "}<span class="accent">{"falam"}</span>{" sobre mim"}</h2>
                </AnimatedSection>
                <div
                    class="carousel"
                    onmouseenter={link.callback(|_: MouseEvent| RecommendationsMsg::PointerEnter)}
                    onmouseleave={link.callback(|_: MouseEvent| RecommendationsMsg::PointerLeave)}
                    ontouchstart={link.batch_callback(|e: TouchEvent| first_touch_x(&e).map(RecommendationsMsg::TouchStart))}
                    ontouchmove={link.batch_callback(|e: TouchEvent| first_touch_x(&e).map(RecommendationsMsg::TouchMove))}
                    ontouchend={link.callback(|_: TouchEvent| RecommendationsMsg::TouchEnd)}
                    ontouchcancel={link.callback(|_: TouchEvent| RecommendationsMsg::TouchCancel)}
                >
                    <button class="carousel-arrow prev" aria-label="Anterior" onclick={link.callback(|_| RecommendationsMsg::Prev)}>{"‹"}</button>
                    <div class={classes!("slide", slide_class)}>
                        <blockquote>{ format!("\"{}\"", current.text) }</blockquote>
                        <div class="author">
                            <img src={current.image} alt={current.name} />
                            <div>
                                <strong>{ current.name }</strong>
                                <div class="author-role">{ current.role }</div>
                            </div>
                        </div>
                    </div>
                    <button class="carousel-arrow next" aria-label="Próximo" onclick={link.callback(|_| RecommendationsMsg::Next)}>{"›"}</button>
                </div>
                <div class="carousel-dots">
                    { for (0..self.carousel.len()).map(|index| html! {
                        <button
                            key={index}
                            class={classes!("carousel-dot", (index == self.carousel.pending()).then(|| "active"))}
                            aria-label={format!("Ir para depoimento {}", index + 1)}
                            onclick={link.callback(move |_| RecommendationsMsg::GoTo(index))}
                        />
                    }) }
                </div>
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.settle = None;
        self.autoplay = None;
    }
}
