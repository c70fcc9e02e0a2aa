use leptos::*;
use wasm_bindgen::JsCast;

use crate::config::SiteConfig;
use crate::logging::{self, LogComponent};
use crate::toggle::{nav, ToggleState};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#platform", "Platform"),
    ("#performance", "Performance"),
    ("#simulator", "Simulator"),
    ("#playbooks", "Playbooks"),
    ("#faq", "FAQ"),
];

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let breakpoint = use_context::<SiteConfig>()
        .unwrap_or_default()
        .nav_breakpoint_px;

    let (menu, set_menu) = create_signal(ToggleState::collapsed());
    let toggle_ref = create_node_ref::<html::Button>();
    let panel_ref = create_node_ref::<html::Div>();

    let apply = move |next: ToggleState| {
        if next != menu.get_untracked() {
            set_menu.set(next);
        }
    };

    let click_handle = window_event_listener(ev::click, move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let in_toggle = toggle_ref
            .get_untracked()
            .map(|el| el.contains(Some(&target)))
            .unwrap_or(false);
        let in_panel = panel_ref
            .get_untracked()
            .map(|el| el.contains(Some(&target)))
            .unwrap_or(false);
        apply(nav::on_document_click(menu.get_untracked(), in_toggle || in_panel));
    });

    let resize_handle = window_event_listener(ev::resize, move |_| {
        apply(nav::on_resize(menu.get_untracked(), viewport_width(), breakpoint));
    });

    on_cleanup(move || {
        click_handle.remove();
        resize_handle.remove();
    });

    logging::debug(LogComponent::Navigation, "navigation listeners attached");

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <li>
                        <a
                            href=*href
                            class="block py-2 hover:text-teal-300"
                            on:click=move |_| {
                                apply(nav::on_link_click(menu.get_untracked(), viewport_width(), breakpoint))
                            }
                        >
                            {*label}
                        </a>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class="site-header sticky top-0 z-20 bg-slate-950/90 backdrop-blur">
            <nav class="max-w-7xl mx-auto flex items-center justify-between p-4" aria-label="Primary">
                <a href="#top" class="text-2xl font-bold tracking-wide">"CAPPY"</a>
                <ul class="hidden lg:flex gap-8 text-sm">{links}</ul>
                <button
                    node_ref=toggle_ref
                    class="nav-toggle lg:hidden px-3 py-2 rounded border border-slate-600"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu.get().aria_expanded()
                    on:click=move |_| set_menu.update(|state| *state = state.toggled())
                >
                    <span class="sr-only">"Toggle navigation"</span>
                    "☰"
                </button>
            </nav>
            <div
                node_ref=panel_ref
                id="mobile-menu"
                class="lg:hidden px-4 pb-4"
                hidden=move || menu.get().panel_hidden()
            >
                <ul>{links}</ul>
            </div>
        </header>
    }
}
