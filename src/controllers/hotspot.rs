//! DOM controller for `[data-hotspot]` elements.
//!
//! The input mode is detected once at install. Each hotspot keeps its model
//! and, in touch mode, the pending auto-collapse `Timeout`; replacing the
//! timeout cancels the old one.

use std::cell::RefCell;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use crate::config::HOTSPOT_AUTO_COLLAPSE_MS;
use crate::state::hotspot::{Hotspot, HotspotMode, TapOutcome};
use crate::util::dom;

const HOTSPOT_SELECTOR: &str = "[data-hotspot]";
const LABEL_SELECTOR: &str = "[data-hotspot-label]";

struct HotspotEntry {
    element: HtmlElement,
    label: Option<HtmlElement>,
    model: Hotspot,
    collapse_timer: Option<Timeout>,
}

impl HotspotEntry {
    fn render(&self) {
        let style = self.model.style();
        dom::set_style(&self.element, "width", &style.width_css());
        if let Some(label) = &self.label {
            dom::set_style(label, "opacity", &style.opacity_css());
        }
    }
}

#[derive(Default)]
struct HotspotController {
    entries: Vec<HotspotEntry>,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static HOTSPOTS: RefCell<HotspotController> = RefCell::new(HotspotController::default());
}

fn with_entry(index: usize, f: impl FnOnce(&mut HotspotEntry)) {
    HOTSPOTS.with(|slot| {
        let Ok(mut controller) = slot.try_borrow_mut() else {
            return;
        };
        if let Some(entry) = controller.entries.get_mut(index) {
            f(entry);
        }
    });
}

fn detect_mode() -> HotspotMode {
    let Some(window) = dom::window() else {
        return HotspotMode::Hover;
    };
    let touch_points = window.navigator().max_touch_points();
    let has_touch_event =
        js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    HotspotMode::detect(touch_points, has_touch_event)
}

/// Wire every hotspot on the page for the detected input mode. No-op when
/// there are none.
pub fn install() {
    install_with_mode(detect_mode());
}

/// Wire every hotspot on the page for `mode`.
pub fn install_with_mode(mode: HotspotMode) {
    let elements: Vec<HtmlElement> = dom::query_document(HOTSPOT_SELECTOR)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect();
    if elements.is_empty() {
        log::debug!("hotspot: none on this page");
        return;
    }
    log::debug!("hotspot: {} in {mode:?} mode", elements.len());

    let mut entries = Vec::with_capacity(elements.len());
    let mut listeners = Vec::new();
    for (index, element) in elements.into_iter().enumerate() {
        let label = element
            .query_selector(LABEL_SELECTOR)
            .ok()
            .flatten()
            .and_then(|label| label.dyn_into::<HtmlElement>().ok());
        let label_width = label.as_ref().map_or(0.0, |label| f64::from(label.scroll_width()));
        let entry = HotspotEntry {
            model: Hotspot::new(mode, label_width),
            label,
            element,
            collapse_timer: None,
        };
        entry.render();

        match mode {
            HotspotMode::Hover => {
                listeners.push(EventListener::new(&entry.element, "mouseenter", move |_| {
                    with_entry(index, |entry| {
                        if entry.model.pointer_enter() {
                            entry.render();
                        }
                    });
                }));
                listeners.push(EventListener::new(&entry.element, "mouseleave", move |_| {
                    with_entry(index, |entry| {
                        if entry.model.pointer_leave() {
                            entry.render();
                        }
                    });
                }));
            }
            HotspotMode::Touch => {
                listeners.push(EventListener::new(&entry.element, "click", move |_| tap(index)));
            }
        }
        entries.push(entry);
    }

    HOTSPOTS.with(|slot| {
        *slot.borrow_mut() = HotspotController {
            entries,
            _listeners: listeners,
        };
    });
}

fn tap(index: usize) {
    with_entry(index, |entry| {
        if entry.model.tap() == TapOutcome::Ignored {
            return;
        }
        entry.render();
        entry.collapse_timer = Some(Timeout::new(HOTSPOT_AUTO_COLLAPSE_MS, move || {
            with_entry(index, |entry| {
                entry.model.auto_collapse();
                entry.render();
            });
        }));
    });
}
