use cappy_site::reveal::{reveal_class, RevealState};
use cappy_site::toggle::{nav, ToggleState};
use quickcheck_macros::quickcheck;

const BREAKPOINT: f64 = 992.0;

#[test]
fn double_toggle_restores_state() {
    for start in [ToggleState { expanded: false }, ToggleState { expanded: true }] {
        assert_eq!(start.toggled().toggled(), start);
    }
}

#[test]
fn aria_and_hidden_always_agree() {
    for state in [ToggleState { expanded: false }, ToggleState { expanded: true }] {
        assert_eq!(state.aria_expanded() == "true", !state.panel_hidden());
    }
}

#[test]
fn link_click_closes_only_on_narrow_viewports() {
    let open = ToggleState { expanded: true };
    assert_eq!(nav::on_link_click(open, 640.0, BREAKPOINT), ToggleState::collapsed());
    assert_eq!(nav::on_link_click(open, 1280.0, BREAKPOINT), open);
    assert_eq!(nav::on_link_click(open, 992.0, BREAKPOINT), open);
}

#[test]
fn outside_click_closes_an_open_menu() {
    let open = ToggleState { expanded: true };
    let closed = ToggleState::collapsed();
    assert_eq!(nav::on_document_click(open, false), closed);
    assert_eq!(nav::on_document_click(open, true), open);
    assert_eq!(nav::on_document_click(closed, false), closed);
}

#[quickcheck]
fn widening_past_breakpoint_always_closes(expanded: bool, extra: u16) -> bool {
    let width = BREAKPOINT + extra as f64;
    let once = nav::on_resize(ToggleState { expanded }, width, BREAKPOINT);
    once == ToggleState::collapsed() && nav::on_resize(once, width, BREAKPOINT) == once
}

#[quickcheck]
fn narrow_resize_leaves_menu_alone(expanded: bool, width: u16) -> bool {
    let width = (width % 992) as f64;
    let state = ToggleState { expanded };
    nav::on_resize(state, width, BREAKPOINT) == state
}

#[quickcheck]
fn accordion_items_are_independent(toggles: Vec<u8>) -> bool {
    let mut items = vec![ToggleState::collapsed(); 4];
    let mut counts = [0usize; 4];
    for t in toggles {
        let idx = (t % 4) as usize;
        items[idx] = items[idx].toggled();
        counts[idx] += 1;
    }
    items
        .iter()
        .zip(counts)
        .all(|(item, count)| item.expanded == (count % 2 == 1))
}

#[quickcheck]
fn reveal_fires_at_most_once(notifications: Vec<bool>) -> bool {
    let mut state = RevealState::default();
    let fired = notifications.iter().filter(|&&n| state.observe(n)).count();
    let expected = usize::from(notifications.contains(&true));
    fired == expected && state.is_revealed() == (expected == 1)
}

#[test]
fn reveal_ignores_exits_after_revealing() {
    let mut state = RevealState::default();
    assert!(!state.observe(false));
    assert!(state.observe(true));
    assert!(!state.observe(false));
    assert!(!state.observe(true));
    assert!(state.is_revealed());
}

#[test]
fn reveal_class_has_no_stray_whitespace() {
    assert_eq!(reveal_class(""), "reveal");
    assert_eq!(reveal_class("   "), "reveal");
    assert_eq!(reveal_class("rounded-xl p-6"), "reveal rounded-xl p-6");
}
