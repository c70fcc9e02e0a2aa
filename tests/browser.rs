#![cfg(target_arch = "wasm32")]

use cappy_site::components::{Faq, NavBar};
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn triggers() -> Vec<web_sys::HtmlElement> {
    let list = document()
        .query_selector_all(".accordion-trigger")
        .expect("selector is valid");
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.unchecked_into::<web_sys::HtmlElement>())
        .collect()
}

#[wasm_bindgen_test]
fn accordion_items_toggle_independently() {
    mount_to_body(|| view! { <Faq/> });

    let items = triggers();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].get_attribute("aria-expanded").as_deref(), Some("false"));

    items[0].click();
    assert_eq!(items[0].get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(items[1].get_attribute("aria-expanded").as_deref(), Some("false"));

    items[1].click();
    assert_eq!(items[0].get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(items[1].get_attribute("aria-expanded").as_deref(), Some("true"));

    items[0].click();
    assert_eq!(items[0].get_attribute("aria-expanded").as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn mobile_menu_opens_on_toggle_and_closes_on_outside_click() {
    mount_to_body(|| view! { <NavBar/> });

    let toggle = document()
        .query_selector(".nav-toggle")
        .expect("selector is valid")
        .expect("toggle is mounted")
        .unchecked_into::<web_sys::HtmlElement>();
    let panel = document()
        .get_element_by_id("mobile-menu")
        .expect("menu panel is mounted");

    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(panel.has_attribute("hidden"));

    toggle.click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert!(!panel.has_attribute("hidden"));

    document().body().expect("document has a body").click();
    assert_eq!(toggle.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert!(panel.has_attribute("hidden"));
}
