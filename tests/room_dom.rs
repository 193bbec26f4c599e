#![cfg(all(target_arch = "wasm32", feature = "csr"))]

use std::time::Duration;

use gloo_timers::future::sleep;
use portal_web::controllers;
use portal_web::state::hotspot::HotspotMode;
use portal_web::state::menu::PanelState;
use portal_web::util::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const ROOM_MARKUP: &str = r#"
<main data-menu-backdrop class="page"></main>
<button id="open-home" data-menu-open="left:0">Home</button>
<button id="open-about" data-menu-open="left:1">About</button>
<button id="open-contact" data-menu-open="right">Contact</button>
<nav id="left-menu" class="-translate-x-full">
  <section data-menu-panel>
    <ul data-menu-group="primary">
      <li data-menu-item>Home</li>
      <li data-menu-item>Work</li>
    </ul>
    <ul data-menu-group="secondary">
      <li data-menu-item>Legal</li>
    </ul>
  </section>
  <section data-menu-panel>
    <li data-menu-item>Team</li>
    <li data-menu-item>History</li>
  </section>
  <button id="close-left" data-menu-close="left">Close</button>
</nav>
<aside id="right-menu" class="translate-x-full">
  <section data-menu-panel><li data-menu-item>Email</li></section>
</aside>
"#;

fn mount(markup: &str) {
    let body = dom::document()
        .and_then(|doc| doc.body())
        .expect("document body");
    body.set_inner_html(markup);
}

fn element(id: &str) -> Element {
    dom::by_id(id).unwrap_or_else(|| panic!("#{id} present"))
}

fn click(id: &str) {
    element(id)
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

fn panels() -> Vec<Element> {
    dom::query_all(&element("left-menu"), "[data-menu-panel]")
}

fn items(panel: &Element) -> Vec<Element> {
    dom::query_all(panel, "[data-menu-item]")
}

fn style_of(id: &str, property: &str) -> String {
    dom::html_by_id(id)
        .unwrap_or_else(|| panic!("#{id} present"))
        .style()
        .get_property_value(property)
        .expect("style read")
}

fn press_key(key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
        .expect("keyboard event");
    dom::document()
        .expect("document")
        .dispatch_event(&event)
        .expect("dispatch");
}

#[wasm_bindgen_test]
fn class_set_application_is_idempotent() {
    mount(r#"<div id="panel" class="card invisible opacity-0"></div>"#);
    let panel = element("panel");
    let classes = PanelState::Visible.classes();
    dom::apply_class_set(&panel, &classes);
    dom::apply_class_set(&panel, &classes);
    assert!(has_class(&panel, "card"));
    assert!(has_class(&panel, "visible"));
    assert!(!has_class(&panel, "invisible"));
    assert_eq!(panel.class_list().length(), 4);
}

#[wasm_bindgen_test]
fn open_button_shows_exactly_one_panel() {
    mount(ROOM_MARKUP);
    controllers::menu::install();

    click("open-about");
    let left = element("left-menu");
    assert!(has_class(&left, "translate-x-0"));
    let visible: Vec<bool> = panels().iter().map(|p| has_class(p, "visible")).collect();
    assert_eq!(visible, vec![false, true]);

    let backdrop = dom::query_document("[data-menu-backdrop]");
    assert!(has_class(&backdrop[0], "blur-sm"));
}

#[wasm_bindgen_test]
fn opening_right_closes_left() {
    mount(ROOM_MARKUP);
    controllers::menu::install();

    click("open-about");
    click("open-contact");
    assert!(has_class(&element("left-menu"), "-translate-x-full"));
    assert!(has_class(&element("right-menu"), "translate-x-0"));
}

#[wasm_bindgen_test]
fn close_button_and_outside_click_close() {
    mount(ROOM_MARKUP);
    controllers::menu::install();

    click("open-about");
    click("close-left");
    assert!(has_class(&element("left-menu"), "-translate-x-full"));

    click("open-contact");
    dom::document()
        .and_then(|doc| doc.body())
        .expect("document body")
        .click();
    assert!(has_class(&element("right-menu"), "translate-x-full"));
    let backdrop = dom::query_document("[data-menu-backdrop]");
    assert!(!has_class(&backdrop[0], "blur-sm"));
}

#[wasm_bindgen_test]
fn suppressed_group_stays_reset_after_open() {
    mount(ROOM_MARKUP.replace("left:1", "left:0").as_str());
    controllers::menu::install();

    click("open-about");
    let items = items(&panels()[0]);
    assert!(has_class(&items[2], "opacity-0"));
    assert!(!has_class(&items[2], "opacity-100"));
}

#[wasm_bindgen_test]
async fn switching_panel_cancels_pending_stagger() {
    mount(ROOM_MARKUP);
    controllers::menu::install();

    click("open-about");
    click("open-home");
    sleep(Duration::from_millis(200)).await;

    let panels = panels();
    assert!(!has_class(&panels[1], "visible"));
    for item in items(&panels[1]) {
        assert!(has_class(&item, "opacity-0"));
        assert!(!has_class(&item, "opacity-100"));
    }
    let home = items(&panels[0]);
    assert!(has_class(&home[0], "opacity-100"));
    assert!(has_class(&home[1], "opacity-100"));
    assert!(has_class(&home[2], "opacity-0"));
}

#[wasm_bindgen_test]
fn escape_closes_open_drawer() {
    mount(ROOM_MARKUP);
    controllers::menu::install();

    click("open-about");
    press_key("Escape");
    assert!(has_class(&element("left-menu"), "-translate-x-full"));
    assert!(has_class(&element("right-menu"), "translate-x-full"));
    assert!(!has_class(&element("left-menu"), "translate-x-0"));
    let backdrop = dom::query_document("[data-menu-backdrop]");
    assert!(!has_class(&backdrop[0], "blur-sm"));

    click("open-contact");
    press_key("Enter");
    assert!(has_class(&element("right-menu"), "translate-x-0"));
}

#[wasm_bindgen_test]
async fn touch_hotspot_ignores_second_tap_and_collapses() {
    mount(
        r#"<div id="spot" data-hotspot style="overflow:hidden">
             <span data-hotspot-label style="white-space:nowrap">Studio tour</span>
           </div>"#,
    );
    controllers::hotspot::install_with_mode(HotspotMode::Touch);
    assert_eq!(style_of("spot", "width"), "40px");

    click("spot");
    let expanded = style_of("spot", "width");
    assert_ne!(expanded, "40px");

    sleep(Duration::from_millis(1500)).await;
    click("spot");
    assert_eq!(style_of("spot", "width"), expanded);

    // The second tap must not push the collapse back.
    sleep(Duration::from_millis(1700)).await;
    assert_eq!(style_of("spot", "width"), "40px");
}

#[wasm_bindgen_test]
fn room_sizes_to_cover_viewport() {
    mount(
        r#"<div id="room-wrapper" style="overflow-x:auto;width:100vw">
             <div id="room"></div>
             <h1 id="room-title" style="position:absolute">Room</h1>
           </div>"#,
    );
    controllers::room::install();

    let window = dom::window().expect("window");
    let vw = window.inner_width().ok().and_then(|v| v.as_f64()).expect("width");
    let room = dom::html_by_id("room").expect("room");
    assert!(f64::from(room.offset_width()) + 1.0 >= vw);
}

#[wasm_bindgen_test]
fn title_is_centered_over_visible_room() {
    mount(
        r#"<div id="room-wrapper" style="position:relative;overflow-x:auto;width:100vw">
             <div id="room"></div>
             <h1 id="room-title" style="position:absolute;top:0;left:0;margin:0">Room</h1>
           </div>"#,
    );
    controllers::room::install();

    let wrapper = dom::html_by_id("room-wrapper").expect("wrapper");
    let title = dom::html_by_id("room-title").expect("title");
    let expected = f64::from(wrapper.scroll_left())
        + f64::from(wrapper.client_width() - title.offset_width()) / 2.0;
    let left: f64 = style_of("room-title", "left")
        .trim_end_matches("px")
        .parse()
        .expect("left in px");
    assert!((left - expected).abs() < 1.0, "left {left} != {expected}");
}
