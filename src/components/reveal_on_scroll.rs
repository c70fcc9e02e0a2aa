use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::SiteConfig;
use crate::logging::{self, LogComponent};
use crate::reveal::{reveal_class, RevealState};

/// Wraps content that zooms in the first time it scrolls into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let threshold = use_context::<SiteConfig>()
        .unwrap_or_default()
        .reveal_threshold;
    let (visible, set_visible) = create_signal(false);
    let node_ref = create_node_ref::<html::Div>();

    let mut state = RevealState::default();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if state.observe(entry.is_intersecting()) {
                    set_visible.set(true);
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Some(observer),
            Err(e) => {
                // Without an observer the content would never appear.
                logging::warn(
                    LogComponent::Reveal,
                    &format!("IntersectionObserver unavailable: {:?}", e),
                );
                set_visible.set(true);
                None
            }
        };

    if let Some(observer) = observer.clone() {
        node_ref.on_load(move |el| observer.observe(&el));
    }

    on_cleanup(move || {
        if let Some(observer) = observer {
            observer.disconnect();
        }
        drop(callback);
    });

    view! {
        <div
            node_ref=node_ref
            data-animation="zoom"
            class=reveal_class(&class)
            class:visible=move || visible.get()
        >
            {children()}
        </div>
    }
}
