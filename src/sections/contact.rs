use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{error, info};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::AnimatedSection;
use crate::components::toast::{ToastKind, ToastQueue, Toaster};
use crate::config::{self, TOAST_LIFETIME_MS};
use crate::state::contact::{ContactForm, ContactFormData, Field};
use crate::state::sections::SectionId;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode message: {0}")]
    Encode(gloo_net::Error),
    #[error("request failed: {0}")]
    Network(gloo_net::Error),
    #[error("mail endpoint answered with status {0}")]
    Status(u16),
}

/// POSTs the message as JSON. Anything but a 2xx answer is a failure.
pub async fn send_message(data: &ContactFormData) -> Result<(), SubmitError> {
    let response = Request::post(&config::send_email_url())
        .json(data)
        .map_err(SubmitError::Encode)?
        .send()
        .await
        .map_err(SubmitError::Network)?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(response.status()))
    }
}

pub enum ContactMsg {
    Edit(Field, String),
    Submit,
    Submitted(Result<(), SubmitError>),
    DismissToast(u32),
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub is_dark: bool,
}

pub struct Contact {
    form: ContactForm,
    toasts: ToastQueue<Timeout>,
}

impl Contact {
    fn notify(&mut self, ctx: &Context<Self>, kind: ToastKind, message: &str) {
        let id = self.toasts.push(kind, message);
        let link = ctx.link().clone();
        let timer = Timeout::new(TOAST_LIFETIME_MS, move || {
            link.send_message(ContactMsg::DismissToast(id));
        });
        self.toasts.expire_with(id, timer);
    }

    fn field_view(&self, ctx: &Context<Self>, field: Field, label: &'static str, input_type: &'static str) -> Html {
        let value = self.form.fields().get(field).to_string();
        let error = self.form.errors().get(field);
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Edit(field, input.value())
        });

        html! {
            <label class="form-field">
                <span>{ label }</span>
                <input
                    type={input_type}
                    {value}
                    {oninput}
                    class={classes!(error.is_some().then(|| "invalid"))}
                    disabled={self.form.is_submitting()}
                />
                if let Some(message) = error {
                    <small class="field-error">{ message }</small>
                }
            </label>
        }
    }
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ContactProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::default(),
            toasts: ToastQueue::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.form.set_field(field, value);
                true
            }
            ContactMsg::Submit => {
                let Some(data) = self.form.begin_submit() else {
                    return true;
                };
                ctx.link().send_future(async move {
                    ContactMsg::Submitted(send_message(&data).await)
                });
                true
            }
            ContactMsg::Submitted(result) => {
                match result {
                    Ok(()) => {
                        info!("Contact message delivered");
                        self.form.finish_submit(true);
                        self.notify(ctx, ToastKind::Success, "Mensagem enviada com sucesso!");
                    }
                    Err(e) => {
                        error!("Contact message failed: {}", e);
                        self.form.finish_submit(false);
                        self.notify(ctx, ToastKind::Error, "Erro ao enviar. Tente novamente.");
                    }
                }
                true
            }
            ContactMsg::DismissToast(id) => self.toasts.dismiss(id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = if ctx.props().is_dark { "dark" } else { "light" };
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_message = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Message, input.value())
        });
        let message_error = self.form.errors().get(Field::Message);
        let submitting = self.form.is_submitting();

        html! {
            <section id={SectionId::Contato.dom_id()} class={classes!("contact", theme)}>
                <style>
                    {r#"
                        .contact { padding: 5rem 1rem; }
                        .contact.dark { background: linear-gradient(135deg, #111827, #000, #111827); color: #fff; }
                        .contact.light { background: linear-gradient(135deg, #eff6ff, #f9fafb, #f3f4f6); color: #1f2937; }
                        .contact-grid { max-width: 1152px; margin: 0 auto; display: grid; grid-template-columns: 2fr 3fr; gap: 2rem; align-items: start; }
                        .contact-card, .contact-form { border-radius: 1rem; padding: 2rem; border: 1px solid rgba(107, 114, 128, 0.3); }
                        .contact-card p { margin: 0 0 1.25rem; }
                        .contact-card small { display: block; opacity: 0.6; }
                        .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
                        .form-field { display: flex; flex-direction: column; gap: 0.4rem; font-weight: 500; }
                        .form-field input, .form-field textarea {
                            padding: 0.8rem 1rem;
                            border-radius: 0.75rem;
                            border: 1px solid rgba(107, 114, 128, 0.4);
                            background: transparent;
                            color: inherit;
                            font: inherit;
                        }
                        .form-field textarea { min-height: 8rem; resize: vertical; }
                        .form-field .invalid { border-color: #ef4444; }
                        .field-error { color: #ef4444; }
                        .submit-button {
                            padding: 0.9rem;
                            border-radius: 0.75rem;
                            border: none;
                            cursor: pointer;
                            font-weight: 600;
                            color: #000;
                            background: linear-gradient(to right, #FFAE00, #f97316);
                        }
                        .submit-button:disabled { opacity: 0.6; cursor: wait; }
                        @media (max-width: 900px) { .contact-grid { grid-template-columns: 1fr; } }
                    "#}
                </style>
                <AnimatedSection class="section-heading">
                    <h2>{"Vamos "}<span class="accent">{"Conversar"}</span>{"?"}</h2>
                    <p>{"Estou sempre aberto a discutir novos projetos, oportunidades criativas e parcerias."}</p>
                </AnimatedSection>
                <div class="contact-grid">
                    <AnimatedSection class="contact-card">
                        <h3>{"Informações de Contato"}</h3>
                        <p><small>{"Email"}</small>{"joao.breno85@hotmail.com"}</p>
                        <p><small>{"Telefone"}</small>{"+55 (85) 99436-5305"}</p>
                        <p><small>{"Localização"}</small>{"Fortaleza, CE - Brasil"}</p>
                    </AnimatedSection>
                    <AnimatedSection delay={0.2}>
                        <form class="contact-form" {onsubmit} novalidate={true}>
                            { self.field_view(ctx, Field::Name, "Nome", "text") }
                            { self.field_view(ctx, Field::Phone, "Telefone", "tel") }
                            { self.field_view(ctx, Field::Email, "E-mail", "email") }
                            <label class="form-field">
                                <span>{"Mensagem"}</span>
                                <textarea
                                    value={self.form.fields().message.clone()}
                                    oninput={on_message}
                                    class={classes!(message_error.is_some().then(|| "invalid"))}
                                    disabled={submitting}
                                />
                                if let Some(message) = message_error {
                                    <small class="field-error">{ message }</small>
                                }
                            </label>
                            <button class="submit-button" type="submit" disabled={submitting}>
                                { if submitting { "Enviando..." } else { "Enviar mensagem" } }
                            </button>
                        </form>
                    </AnimatedSection>
                </div>
                <Toaster
                    toasts={self.toasts.toasts().to_vec()}
                    on_dismiss={ctx.link().callback(ContactMsg::DismissToast)}
                />
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.toasts = ToastQueue::default();
    }
}
