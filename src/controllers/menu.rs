//! DOM controller for the left and right drawers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drawer markup is server-rendered. At install the controller builds a
//! registry of drawer, panel and item elements once, derives the
//! [`MenuState`] shape from it, and then only ever writes classes computed by
//! the model.
//!
//! DESIGN
//! ======
//! Every open/close bumps the drawer's generation and aborts its previous
//! stagger task, so a reveal sequence never outlives the state it was
//! scheduled for.

use std::cell::RefCell;
use std::time::Duration;

use futures::future::{AbortHandle, abortable};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use crate::state::menu::{
    DrawerSide, DrawerView, ItemGroup, ItemState, MenuState, MenuTarget, MenuView, PanelKind,
    PanelSpec, closes_on_click,
};
use crate::util::dom;

const PANEL_SELECTOR: &str = "[data-menu-panel]";
const ITEM_SELECTOR: &str = "[data-menu-item]";
const OPEN_SELECTOR: &str = "[data-menu-open]";
const CLOSE_SELECTOR: &str = "[data-menu-close]";
const BACKDROP_SELECTOR: &str = "[data-menu-backdrop]";
const DRAWER_SELECTOR: &str = "#left-menu, #right-menu";

struct PanelHandle {
    /// `None` when the drawer has no explicit panels and acts as one.
    element: Option<Element>,
    items: Vec<Element>,
}

struct DrawerHandle {
    element: Element,
    panels: Vec<PanelHandle>,
}

#[derive(Default)]
struct StaggerSlot {
    generation: u64,
    task: Option<AbortHandle>,
}

struct MenuController {
    state: MenuState,
    left: Option<DrawerHandle>,
    right: Option<DrawerHandle>,
    backdrops: Vec<Element>,
    stagger: [StaggerSlot; 2],
    _listeners: Vec<EventListener>,
}

thread_local! {
    static MENU: RefCell<Option<MenuController>> = const { RefCell::new(None) };
}

fn slot_index(side: DrawerSide) -> usize {
    match side {
        DrawerSide::Left => 0,
        DrawerSide::Right => 1,
    }
}

fn with_menu<R>(f: impl FnOnce(&mut MenuController) -> R) -> Option<R> {
    MENU.with(|slot| {
        let mut slot = slot.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

fn register_drawer(side: DrawerSide) -> Option<DrawerHandle> {
    let element = dom::by_id(side.element_id())?;
    let mut panels: Vec<PanelHandle> = dom::query_all(&element, PANEL_SELECTOR)
        .into_iter()
        .map(|panel| PanelHandle {
            items: dom::query_all(&panel, ITEM_SELECTOR),
            element: Some(panel),
        })
        .collect();
    if panels.is_empty() {
        panels.push(PanelHandle {
            element: None,
            items: dom::query_all(&element, ITEM_SELECTOR),
        });
    }
    Some(DrawerHandle { element, panels })
}

fn item_group(item: &Element) -> Option<ItemGroup> {
    if let Some(raw) = item.get_attribute("data-menu-group") {
        return ItemGroup::parse(&raw);
    }
    item.closest("[data-menu-group]")
        .ok()
        .flatten()
        .and_then(|group| group.get_attribute("data-menu-group"))
        .and_then(|raw| ItemGroup::parse(&raw))
}

fn panel_specs(side: DrawerSide, handle: Option<&DrawerHandle>) -> Vec<PanelSpec> {
    let Some(handle) = handle else {
        return Vec::new();
    };
    handle
        .panels
        .iter()
        .enumerate()
        .map(|(index, panel)| {
            if side == DrawerSide::Left && index == 0 {
                PanelSpec {
                    kind: PanelKind::LEFT_HOME,
                    items: panel.items.iter().map(item_group).collect(),
                }
            } else {
                PanelSpec::plain(panel.items.len())
            }
        })
        .collect()
}

/// Build the registry and wire listeners. No-op without drawer markup.
pub fn install() {
    let left = register_drawer(DrawerSide::Left);
    let right = register_drawer(DrawerSide::Right);
    if left.is_none() && right.is_none() {
        log::debug!("menu: no drawers on this page");
        return;
    }
    let state = MenuState::new(
        panel_specs(DrawerSide::Left, left.as_ref()),
        panel_specs(DrawerSide::Right, right.as_ref()),
    );
    log::debug!(
        "menu: left {} panels, right {} panels",
        state.left.panels.len(),
        state.right.panels.len()
    );

    let controller = MenuController {
        state,
        left,
        right,
        backdrops: dom::query_document(BACKDROP_SELECTOR),
        stagger: [StaggerSlot::default(), StaggerSlot::default()],
        _listeners: listeners(),
    };
    MENU.with(|slot| *slot.borrow_mut() = Some(controller));
    with_menu(|menu| {
        let view = menu.state.close_all();
        menu.apply(&view);
    });
}

fn listeners() -> Vec<EventListener> {
    let mut out = Vec::new();

    for button in dom::query_document(OPEN_SELECTOR) {
        let raw = button.get_attribute("data-menu-open").unwrap_or_default();
        out.push(EventListener::new(&button, "click", move |_| {
            match MenuTarget::parse(&raw) {
                Ok(target) => open(target),
                Err(e) => log::warn!("menu: {e}"),
            }
        }));
    }

    for button in dom::query_document(CLOSE_SELECTOR) {
        let side = match button.get_attribute("data-menu-close").as_deref() {
            Some("left") => Some(DrawerSide::Left),
            Some("right") => Some(DrawerSide::Right),
            _ => None,
        };
        out.push(EventListener::new(&button, "click", move |_| close(side)));
    }

    if let Some(document) = dom::document() {
        out.push(EventListener::new(&document, "click", |event| {
            let Some(target) = dom::event_element(event) else {
                return;
            };
            let inside_drawer = dom::closest_matches(&target, DRAWER_SELECTOR);
            let on_toggle = dom::closest_matches(&target, OPEN_SELECTOR);
            if closes_on_click(inside_drawer, on_toggle) {
                close_if_open();
            }
        }));
        out.push(EventListener::new(&document, "keydown", |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Escape" {
                close_if_open();
            }
        }));
    }

    out
}

fn open(target: MenuTarget) {
    with_menu(|menu| match menu.state.open(target) {
        Ok(view) => menu.apply(&view),
        Err(e) => log::warn!("menu: {e}"),
    });
}

fn close(side: Option<DrawerSide>) {
    with_menu(|menu| {
        let view = match side {
            Some(side) => menu.state.close(side),
            None => menu.state.close_all(),
        };
        menu.apply(&view);
    });
}

fn close_if_open() {
    with_menu(|menu| {
        if menu.state.any_open() {
            let view = menu.state.close_all();
            menu.apply(&view);
        }
    });
}

fn stagger_is_current(side: DrawerSide, generation: u64) -> bool {
    with_menu(|menu| menu.stagger[slot_index(side)].generation == generation).unwrap_or(false)
}

impl MenuController {
    fn handle(&self, side: DrawerSide) -> Option<&DrawerHandle> {
        match side {
            DrawerSide::Left => self.left.as_ref(),
            DrawerSide::Right => self.right.as_ref(),
        }
    }

    /// Write a whole menu view, then restart the affected staggers.
    fn apply(&mut self, view: &MenuView) {
        for drawer in &view.drawers {
            self.apply_drawer(drawer);
        }
        for backdrop in &self.backdrops {
            dom::apply_class_set(backdrop, &view.backdrop);
        }
        for drawer in &view.drawers {
            self.restart_stagger(drawer);
        }
    }

    fn apply_drawer(&self, view: &DrawerView) {
        let Some(handle) = self.handle(view.side) else {
            return;
        };
        dom::apply_class_set(&handle.element, &view.classes);
        for (panel, panel_view) in handle.panels.iter().zip(&view.panels) {
            if let Some(element) = &panel.element {
                dom::apply_class_set(element, &panel_view.classes);
            }
            for (item, plan) in panel.items.iter().zip(&panel_view.items) {
                dom::apply_class_set(item, &plan.immediate.classes());
            }
        }
    }

    fn restart_stagger(&mut self, view: &DrawerView) {
        let steps: Vec<(Element, u32)> = match self.handle(view.side) {
            Some(handle) => view
                .reveals()
                .into_iter()
                .filter_map(|(panel, item, delay)| {
                    let element = handle.panels.get(panel)?.items.get(item)?.clone();
                    Some((element, delay))
                })
                .collect(),
            None => Vec::new(),
        };

        let slot = &mut self.stagger[slot_index(view.side)];
        slot.generation = slot.generation.wrapping_add(1);
        if let Some(task) = slot.task.take() {
            task.abort();
        }
        if steps.is_empty() {
            return;
        }

        let (task, handle) = abortable(run_stagger(view.side, slot.generation, steps));
        slot.task = Some(handle);
        wasm_bindgen_futures::spawn_local(async move {
            let _ = task.await;
        });
    }
}

async fn run_stagger(side: DrawerSide, generation: u64, steps: Vec<(Element, u32)>) {
    let revealed = ItemState::Revealed.classes();
    let mut elapsed = 0;
    for (element, delay) in steps {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(delay.saturating_sub(elapsed))))
            .await;
        elapsed = delay;
        if !stagger_is_current(side, generation) {
            return;
        }
        dom::apply_class_set(&element, &revealed);
    }
}
