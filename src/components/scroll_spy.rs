use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom::{measure_section, scroll_y};
use crate::state::sections::{cursor_line_insets, ActiveSectionTracker, SectionId};

/// One intersection observer over every section, with the root collapsed to a
/// one pixel line at the header offset. The insets are absolute pixels, so a
/// spy is only valid for the viewport height it was built for. Disconnects
/// on drop.
struct ScrollSpy {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollSpy {
    fn attach(initial: SectionId, viewport_height: f64, on_change: Callback<SectionId>) -> Option<Self> {
        let document = window()?.document()?;

        let tracker = Rc::new(RefCell::new(ActiveSectionTracker::new(initial)));
        on_change.emit(tracker.borrow_mut().seed(scroll_y(), measure_section));

        let callback = {
            let tracker = tracker.clone();
            Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
                let mut tracker = tracker.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Some(id) = SectionId::from_dom_id(&entry.target().id()) {
                        tracker.mark(id, entry.is_intersecting());
                    }
                }
                on_change.emit(tracker.resolve(scroll_y(), measure_section));
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let (top, bottom) = cursor_line_insets(viewport_height);
        let options = IntersectionObserverInit::new();
        options.set_root_margin(&format!("-{}px 0px -{}px 0px", top, bottom));
        options.set_threshold(&JsValue::from_f64(0.0));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        for id in SectionId::ALL {
            match document.get_element_by_id(id.dom_id()) {
                Some(element) => observer.observe(&element),
                None => debug!("Section #{} not mounted, not tracking it", id.dom_id()),
            }
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Active section for the navigation highlight. The returned handle can also
/// be set directly, as the logo link does for `home`.
///
/// The spy is rebuilt, and re-seeded by a full scan, whenever the window
/// size changes.
#[hook]
pub fn use_active_section() -> UseStateHandle<SectionId> {
    let active = use_state_eq(|| SectionId::Home);
    let (_, viewport_height) = use_window_size();
    {
        let active = active.clone();
        use_effect_with_deps(
            move |&viewport_height: &f64| {
                debug!("Attaching scroll spy for a {}px viewport", viewport_height);
                let initial = *active;
                let spy = ScrollSpy::attach(initial, viewport_height, Callback::from(move |id| active.set(id)));
                move || drop(spy)
            },
            viewport_height,
        );
    }
    active
}
