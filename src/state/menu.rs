//! Drawer and panel state for the room page menus.
//!
//! DESIGN
//! ======
//! Drawers, panels and items carry explicit enum state. A pure mapping turns
//! that state into [`ClassSet`]s, and the controller applies a whole
//! [`MenuView`] in one pass. CSS classes are output only; nothing reads them
//! back to decide what is open.
//!
//! The left drawer has several panels, exactly one visible while open. Its
//! first panel is mixed: one item group animates in, the other stays reset.
//! The right drawer has a single plain panel.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use thiserror::Error;

use crate::config::STAGGER_STEP_MS;
use crate::util::class_set::ClassSet;

const DRAWER_OPEN: &[&str] = &["translate-x-0"];
const LEFT_CLOSED: &[&str] = &["-translate-x-full"];
const RIGHT_CLOSED: &[&str] = &["translate-x-full"];

const PANEL_VISIBLE: &[&str] = &["visible", "opacity-100", "translate-x-0"];
const PANEL_HIDDEN: &[&str] = &["invisible", "opacity-0", "-translate-x-4"];

const ITEM_REVEALED: &[&str] = &["opacity-100", "translate-y-0"];
const ITEM_RESET: &[&str] = &["opacity-0", "translate-y-2"];

const BACKDROP_BLUR: &[&str] = &["blur-sm"];

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("{side:?} drawer has {count} panels, cannot open panel {index}")]
    PanelOutOfRange { side: DrawerSide, index: usize, count: usize },
    #[error("unrecognized menu target: {0:?}")]
    BadTarget(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawerSide {
    Left,
    Right,
}

impl DrawerSide {
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// DOM id of the drawer element.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Left => "left-menu",
            Self::Right => "right-menu",
        }
    }

    fn closed_classes(self) -> &'static [&'static str] {
        match self {
            Self::Left => LEFT_CLOSED,
            Self::Right => RIGHT_CLOSED,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}

impl PanelState {
    pub fn classes(self) -> ClassSet {
        match self {
            Self::Visible => ClassSet::new(PANEL_VISIBLE, PANEL_HIDDEN),
            Self::Hidden => ClassSet::new(PANEL_HIDDEN, PANEL_VISIBLE),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemState {
    #[default]
    Reset,
    Revealed,
}

impl ItemState {
    pub fn classes(self) -> ClassSet {
        match self {
            Self::Revealed => ClassSet::new(ITEM_REVEALED, ITEM_RESET),
            Self::Reset => ClassSet::new(ITEM_RESET, ITEM_REVEALED),
        }
    }
}

/// Item group inside a mixed panel, from `data-menu-group`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemGroup {
    Primary,
    Secondary,
}

impl ItemGroup {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelKind {
    /// Every item animates.
    #[default]
    Plain,
    /// Only `animated` items reveal; `suppressed` items are held reset.
    Mixed { animated: ItemGroup, suppressed: ItemGroup },
}

impl PanelKind {
    /// The left drawer's first panel.
    pub const LEFT_HOME: Self = Self::Mixed {
        animated: ItemGroup::Primary,
        suppressed: ItemGroup::Secondary,
    };

    fn animates(self, group: Option<ItemGroup>) -> bool {
        match self {
            Self::Plain => true,
            Self::Mixed { animated, suppressed } => match group {
                Some(group) if group == suppressed => false,
                Some(group) => group == animated,
                None => true,
            },
        }
    }
}

/// Static shape of one panel: its kind and the group of each item in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelSpec {
    pub kind: PanelKind,
    pub items: Vec<Option<ItemGroup>>,
}

impl PanelSpec {
    pub fn plain(item_count: usize) -> Self {
        Self {
            kind: PanelKind::Plain,
            items: vec![None; item_count],
        }
    }
}

/// Target state for one item after a view is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemPlan {
    pub group: Option<ItemGroup>,
    /// State set synchronously with the rest of the view.
    pub immediate: ItemState,
    /// When set, the item is revealed after this many milliseconds.
    pub reveal_after_ms: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelView {
    pub state: PanelState,
    pub classes: ClassSet,
    pub items: Vec<ItemPlan>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawerView {
    pub side: DrawerSide,
    pub state: DrawerState,
    pub classes: ClassSet,
    pub panels: Vec<PanelView>,
}

impl DrawerView {
    /// Delayed reveals as `(panel, item, delay_ms)`, in delay order.
    pub fn reveals(&self) -> Vec<(usize, usize, u32)> {
        let mut out = Vec::new();
        for (panel_index, panel) in self.panels.iter().enumerate() {
            for (item_index, item) in panel.items.iter().enumerate() {
                if let Some(delay) = item.reveal_after_ms {
                    out.push((panel_index, item_index, delay));
                }
            }
        }
        out.sort_by_key(|(_, _, delay)| *delay);
        out
    }
}

/// Reveal delay for each of `count` items: `50 ms × i`.
pub fn stagger_schedule(count: usize) -> Vec<u32> {
    (0..count)
        .map(|i| u32::try_from(i).unwrap_or(u32::MAX).saturating_mul(STAGGER_STEP_MS))
        .collect()
}

/// Page-wide blur applied to `[data-menu-backdrop]` elements.
pub fn backdrop_classes(any_open: bool) -> ClassSet {
    if any_open {
        ClassSet::new(BACKDROP_BLUR, &[])
    } else {
        ClassSet::new(&[], BACKDROP_BLUR)
    }
}

/// A document click closes open drawers unless it landed inside a drawer or
/// on a toggle button.
pub fn closes_on_click(inside_drawer: bool, on_toggle: bool) -> bool {
    !inside_drawer && !on_toggle
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawer {
    pub side: DrawerSide,
    pub state: DrawerState,
    pub panels: Vec<PanelSpec>,
    pub active: Option<usize>,
}

impl Drawer {
    pub fn new(side: DrawerSide, panels: Vec<PanelSpec>) -> Self {
        Self {
            side,
            state: DrawerState::Closed,
            panels,
            active: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    /// Open on panel `index`. Every other panel is hidden.
    ///
    /// # Errors
    ///
    /// `PanelOutOfRange` when `index` is not a panel; the drawer is unchanged.
    pub fn open(&mut self, index: usize) -> Result<DrawerView, MenuError> {
        if index >= self.panels.len() {
            return Err(MenuError::PanelOutOfRange {
                side: self.side,
                index,
                count: self.panels.len(),
            });
        }
        self.state = DrawerState::Open;
        self.active = Some(index);
        Ok(self.view())
    }

    /// Close the drawer, hide all panels and reset all items.
    pub fn close(&mut self) -> DrawerView {
        self.state = DrawerState::Closed;
        self.active = None;
        self.view()
    }

    /// Render the current state.
    pub fn view(&self) -> DrawerView {
        let classes = match self.state {
            DrawerState::Open => ClassSet::new(DRAWER_OPEN, self.side.closed_classes()),
            DrawerState::Closed => ClassSet::new(self.side.closed_classes(), DRAWER_OPEN),
        };
        let panels = self
            .panels
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                let visible = self.is_open() && self.active == Some(index);
                panel_view(spec, visible)
            })
            .collect();
        DrawerView {
            side: self.side,
            state: self.state,
            classes,
            panels,
        }
    }
}

fn panel_view(spec: &PanelSpec, visible: bool) -> PanelView {
    let state = if visible { PanelState::Visible } else { PanelState::Hidden };
    let animated = spec
        .items
        .iter()
        .filter(|group| visible && spec.kind.animates(**group))
        .count();
    let mut schedule = stagger_schedule(animated).into_iter();
    let items = spec
        .items
        .iter()
        .map(|group| {
            let reveal_after_ms = if visible && spec.kind.animates(*group) {
                schedule.next()
            } else {
                None
            };
            ItemPlan {
                group: *group,
                immediate: ItemState::Reset,
                reveal_after_ms,
            }
        })
        .collect();
    PanelView {
        state,
        classes: state.classes(),
        items,
    }
}

/// Parsed `data-menu-open` value: `left:<index>`, `left` or `right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuTarget {
    pub side: DrawerSide,
    pub panel: usize,
}

impl MenuTarget {
    /// # Errors
    ///
    /// `BadTarget` for anything other than the three accepted forms.
    pub fn parse(raw: &str) -> Result<Self, MenuError> {
        let raw = raw.trim();
        let (side, panel) = match raw.split_once(':') {
            Some((side, panel)) => {
                let panel = panel
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| MenuError::BadTarget(raw.to_owned()))?;
                (side.trim(), panel)
            }
            None => (raw, 0),
        };
        let side = match side {
            "left" => DrawerSide::Left,
            "right" => DrawerSide::Right,
            _ => return Err(MenuError::BadTarget(raw.to_owned())),
        };
        Ok(Self { side, panel })
    }
}

/// Everything the controller writes after one menu operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub drawers: Vec<DrawerView>,
    pub backdrop: ClassSet,
}

/// Both drawers. Opening one closes the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    pub left: Drawer,
    pub right: Drawer,
}

impl MenuState {
    pub fn new(left_panels: Vec<PanelSpec>, right_panels: Vec<PanelSpec>) -> Self {
        Self {
            left: Drawer::new(DrawerSide::Left, left_panels),
            right: Drawer::new(DrawerSide::Right, right_panels),
        }
    }

    pub fn drawer(&self, side: DrawerSide) -> &Drawer {
        match side {
            DrawerSide::Left => &self.left,
            DrawerSide::Right => &self.right,
        }
    }

    fn drawer_mut(&mut self, side: DrawerSide) -> &mut Drawer {
        match side {
            DrawerSide::Left => &mut self.left,
            DrawerSide::Right => &mut self.right,
        }
    }

    pub fn any_open(&self) -> bool {
        self.left.is_open() || self.right.is_open()
    }

    /// Open `target`, closing the opposite drawer if it was open.
    ///
    /// # Errors
    ///
    /// `PanelOutOfRange` from [`Drawer::open`]; no drawer changes in that case.
    pub fn open(&mut self, target: MenuTarget) -> Result<MenuView, MenuError> {
        let opened = self.drawer_mut(target.side).open(target.panel)?;
        let other = match target.side {
            DrawerSide::Left => DrawerSide::Right,
            DrawerSide::Right => DrawerSide::Left,
        };
        let mut drawers = Vec::with_capacity(2);
        if self.drawer(other).is_open() {
            drawers.push(self.drawer_mut(other).close());
        }
        drawers.push(opened);
        Ok(self.menu_view(drawers))
    }

    pub fn close(&mut self, side: DrawerSide) -> MenuView {
        let view = self.drawer_mut(side).close();
        self.menu_view(vec![view])
    }

    pub fn close_all(&mut self) -> MenuView {
        let drawers = DrawerSide::ALL
            .into_iter()
            .map(|side| self.drawer_mut(side).close())
            .collect();
        self.menu_view(drawers)
    }

    fn menu_view(&self, drawers: Vec<DrawerView>) -> MenuView {
        MenuView {
            drawers,
            backdrop: backdrop_classes(self.any_open()),
        }
    }
}
