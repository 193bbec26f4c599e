//! DOM controller for the scrolling room scene.
//!
//! Anchors: `#room-wrapper` (the horizontal scroller), `#room` (the sized
//! scene) and optionally `#room-title`. Resize bursts are debounced with a
//! replaceable `Timeout`; wheel and scroll are handled immediately. The title
//! width is measured at install and again whenever a resize crosses the
//! mobile breakpoint; scrolling reuses the cached width.

use std::cell::RefCell;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, WheelEvent};

use crate::config::RESIZE_DEBOUNCE_MS;
use crate::state::room::{
    TitleMeasure, center_scroll_left, room_size, title_left, wheel_to_horizontal,
};
use crate::util::dom;

const WRAPPER_ID: &str = "room-wrapper";
const ROOM_ID: &str = "room";
const TITLE_ID: &str = "room-title";

struct RoomController {
    wrapper: HtmlElement,
    room: HtmlElement,
    title: Option<HtmlElement>,
    title_measure: TitleMeasure,
    resize_timer: Option<Timeout>,
    _listeners: Vec<EventListener>,
}

thread_local! {
    static ROOM: RefCell<Option<RoomController>> = const { RefCell::new(None) };
}

fn with_room(f: impl FnOnce(&mut RoomController)) {
    ROOM.with(|slot| {
        if let Ok(mut slot) = slot.try_borrow_mut() {
            if let Some(room) = slot.as_mut() {
                f(room);
            }
        }
    });
}

fn viewport() -> Option<(f64, f64)> {
    let window = dom::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[allow(clippy::cast_possible_truncation)]
fn set_scroll_left(element: &HtmlElement, value: f64) {
    element.set_scroll_left(value.round() as i32);
}

/// Size the room and wire resize, wheel and scroll. No-op without the room
/// markup.
pub fn install() {
    let (Some(wrapper), Some(room)) = (dom::html_by_id(WRAPPER_ID), dom::html_by_id(ROOM_ID)) else {
        log::debug!("room: no #room-wrapper/#room on this page");
        return;
    };
    let title = dom::html_by_id(TITLE_ID);
    let width = viewport().map_or(0.0, |(width, _)| width);

    let mut listeners = Vec::new();
    if let Some(window) = dom::window() {
        listeners.push(EventListener::new(&window, "resize", |_| schedule_resize()));
    }
    listeners.push(EventListener::new_with_options(
        &wrapper,
        "wheel",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            if let Some(event) = event.dyn_ref::<WheelEvent>() {
                with_room(|room| room.on_wheel(event));
            }
        },
    ));
    listeners.push(EventListener::new(&wrapper, "scroll", |_| {
        with_room(|room| room.position_title());
    }));

    ROOM.with(|slot| {
        *slot.borrow_mut() = Some(RoomController {
            wrapper,
            room,
            title,
            title_measure: TitleMeasure::new(width),
            resize_timer: None,
            _listeners: listeners,
        });
    });
    with_room(RoomController::layout);
}

fn schedule_resize() {
    with_room(|room| {
        room.resize_timer = Some(Timeout::new(RESIZE_DEBOUNCE_MS, || {
            with_room(RoomController::layout);
        }));
    });
}

impl RoomController {
    /// Resize, re-center and reposition the title for the current viewport.
    fn layout(&mut self) {
        let Some((width, height)) = viewport() else {
            return;
        };
        let remeasure = self.title_measure.resize(width);
        let size = room_size(width, height);
        dom::set_px(&self.room, "width", size.width);
        dom::set_px(&self.room, "height", size.height);
        if let Some(left) = center_scroll_left(size.width, width) {
            set_scroll_left(&self.wrapper, left);
        }
        if remeasure {
            self.measure_title();
        }
        self.position_title();
    }

    /// Measure the title at its natural width, without the inline offset a
    /// previous layout wrote.
    fn measure_title(&mut self) {
        let Some(title) = &self.title else {
            return;
        };
        let _ = title.style().remove_property("left");
        self.title_measure.record(f64::from(title.offset_width()));
    }

    fn on_wheel(&self, event: &WheelEvent) {
        let next = wheel_to_horizontal(
            f64::from(self.wrapper.scroll_left()),
            f64::from(self.wrapper.scroll_width()),
            f64::from(self.wrapper.client_width()),
            event.delta_y(),
        );
        if let Some(left) = next {
            event.prevent_default();
            set_scroll_left(&self.wrapper, left);
        }
    }

    fn position_title(&self) {
        let (Some(title), Some(title_width)) = (&self.title, self.title_measure.width()) else {
            return;
        };
        let left = title_left(
            f64::from(self.wrapper.scroll_left()),
            f64::from(self.wrapper.client_width()),
            title_width,
        );
        dom::set_px(title, "left", left);
    }
}
