use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::state::reveal::Reveal;

/// Observer scoped to a single element. It unobserves itself on the first
/// reveal and disconnects when dropped, so a remount starts from scratch.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn attach(element: &Element, threshold: f64, on_reveal: Callback<()>) -> Result<Self, JsValue> {
        let state = Rc::new(Cell::new(Reveal::default()));
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let mut reveal = state.get();
                if reveal.observe(entry.is_intersecting(), entry.intersection_ratio(), threshold) {
                    state.set(reveal);
                    observer.unobserve(&entry.target());
                    on_reveal.emit(());
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// `true` once the referenced element has been at least `threshold` visible.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    RevealObserver::attach(&element, threshold, Callback::from(move |_| revealed.set(true))).ok()
                });
                move || drop(observer)
            },
            node,
        );
    }
    *revealed
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Transition delay in seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or(REVEAL_THRESHOLD)]
    pub threshold: f64,
}

#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.threshold);

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then(|| "revealed"), props.class.clone())}
            style={format!("transition-delay: {}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
