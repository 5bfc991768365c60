use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::MODAL_EXIT_MS;
use crate::state::modal::{ModalAction, ModalState};

/// Modal state plus the exit timer that clears the selection.
pub struct ModalHandle<T: Clone + PartialEq + 'static> {
    state: UseReducerHandle<ModalState<T>>,
    exit_timer: Rc<RefCell<Option<Timeout>>>,
}

impl<T: Clone + PartialEq + 'static> Clone for ModalHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            exit_timer: self.exit_timer.clone(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ModalHandle<T> {
    pub fn open(&self, item: T) {
        self.exit_timer.borrow_mut().take();
        self.state.dispatch(ModalAction::Open(item));
    }

    pub fn close(&self) {
        if !self.state.is_open() {
            return;
        }
        self.state.dispatch(ModalAction::Close);
        let dispatcher = self.state.dispatcher();
        *self.exit_timer.borrow_mut() = Some(Timeout::new(MODAL_EXIT_MS, move || {
            dispatcher.dispatch(ModalAction::FinishClose);
        }));
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn selected(&self) -> Option<T> {
        self.state.selected().cloned()
    }
}

/// Per-component dialog controller. The exit timer is dropped, and thereby
/// cancelled, together with the component.
#[hook]
pub fn use_modal<T: Clone + PartialEq + 'static>() -> ModalHandle<T> {
    let state = use_reducer(ModalState::<T>::default);
    let exit_timer = use_mut_ref(|| None::<Timeout>);
    ModalHandle { state, exit_timer }
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub is_dark: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    pub children: Children,
}

/// Overlay rendered while an item is selected. `open == false` with children
/// still present is the exit animation.
#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class={classes!("dialog-backdrop", props.open.then(|| "open"))}
            onclick={on_backdrop}
        >
            <style>
                {r#"
                    .dialog-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(0, 0, 0, 0);
                        backdrop-filter: blur(0);
                        transition: background 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .dialog-backdrop.open {
                        background: rgba(0, 0, 0, 0.6);
                        backdrop-filter: blur(4px);
                    }
                    .dialog {
                        position: relative;
                        width: 100%;
                        max-width: 640px;
                        max-height: 90vh;
                        overflow-y: auto;
                        border-radius: 1rem;
                        padding: 2rem;
                        opacity: 0;
                        transform: scale(0.95) translateY(10px);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .dialog-backdrop.open .dialog {
                        opacity: 1;
                        transform: none;
                    }
                    .dialog.dark {
                        background: #111827;
                        color: #f3f4f6;
                        border: 1px solid rgba(255, 174, 0, 0.2);
                    }
                    .dialog.light {
                        background: #ffffff;
                        color: #1f2937;
                        border: 1px solid #e5e7eb;
                    }
                    .dialog-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        font-size: 1.25rem;
                        color: inherit;
                        cursor: pointer;
                    }
                    .dialog h3 {
                        margin: 0 0 1rem;
                        font-size: 1.5rem;
                        color: #FFAE00;
                    }
                "#}
            </style>
            <div
                class={classes!("dialog", if props.is_dark { "dark" } else { "light" })}
                role="dialog"
                aria-modal="true"
                onclick={stop}
            >
                <button class="dialog-close" onclick={on_close_button} aria-label="Fechar">{"✕"}</button>
                <h3>{ props.title.clone() }</h3>
                { for props.children.iter() }
            </div>
        </div>
    }
}
