use crate::builder::TimelineBuilder;
use crate::closing::ClosingAnimator;
use crate::color::{ColorTransitioner, HexColor};
use crate::icon::IconMorphAnimator;
use crate::item::{ItemAction, MenuItem, SocialItem};
use crate::label::{DEFAULT_CYCLES, LabelCycler, final_shift};
use crate::layout::{MenuLayout, Position, layer_palette};
use crate::scene::Scene;
use crate::timeline::{self, Timeline};
use palette::Srgba;
use std::time::Duration;

/// Lifecycle of the menu.
///
/// Closed → Opening → Open → Closing → Closed. Toggles are only accepted in
/// the two resting phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl Phase {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }

    /// Logical open state: flips as soon as a transition starts.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}

/// Accessibility attributes, updated with the phase rather than the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessibility {
    pub expanded: bool,
    pub panel_hidden: bool,
    pub data_open: bool,
    pub toggle_label: &'static str,
}

/// Everything a host supplies to describe a menu.
#[derive(Debug, Clone)]
pub struct MenuOptions {
    pub position: Position,
    pub items: Vec<MenuItem>,
    pub socials: Vec<SocialItem>,
    pub colors: Vec<HexColor>,
    pub accent_color: HexColor,
    pub menu_button_color: HexColor,
    pub open_menu_button_color: HexColor,
    pub change_menu_color_on_open: bool,
    pub display_layers: bool,
    pub display_item_numbering: bool,
    pub display_socials: bool,
    pub idle_label: String,
    pub active_label: String,
    pub label_cycles: usize,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            position: Position::Right,
            items: Vec::new(),
            socials: Vec::new(),
            colors: vec![HexColor::rgb(0xb1, 0x9e, 0xef), HexColor::rgb(0x52, 0x27, 0xff)],
            accent_color: HexColor::rgb(0x52, 0x27, 0xff),
            menu_button_color: HexColor::rgb(0xff, 0xff, 0xff),
            open_menu_button_color: HexColor::rgb(0xff, 0xff, 0xff),
            change_menu_color_on_open: true,
            display_layers: true,
            display_item_numbering: true,
            display_socials: true,
            idle_label: "Menu".to_string(),
            active_label: "Close".to_string(),
            label_cycles: DEFAULT_CYCLES,
        }
    }
}

impl MenuOptions {
    /// Colours of the layers that will actually be drawn.
    pub fn layer_colors(&self) -> Vec<HexColor> {
        if self.display_layers {
            layer_palette(&self.colors)
        } else {
            Vec::new()
        }
    }

    pub fn layout(&self) -> MenuLayout {
        let socials = if self.display_socials {
            self.socials.len()
        } else {
            0
        };
        MenuLayout {
            items: self.items.len(),
            layers: self.layer_colors().len(),
            numbering: self.display_item_numbering,
            social_title: socials > 0,
            social_links: socials,
        }
    }
}

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct MenuCallbacks {
    on_menu_open: Option<Callback>,
    on_menu_close: Option<Callback>,
    on_logo_click: Option<Callback>,
}

fn fire(callback: &mut Option<Callback>) -> bool {
    match callback {
        Some(f) => {
            f();
            true
        }
        None => false,
    }
}

/// Owns the open/closed state of one menu and every timeline that animates it.
///
/// Nothing here is global, so any number of menus can run side by side.
pub struct MenuController {
    options: MenuOptions,
    layout: MenuLayout,
    layer_colors: Vec<HexColor>,
    phase: Phase,
    scene: Scene,
    open_timeline: Option<Timeline>,
    close_timeline: Option<Timeline>,
    icon: IconMorphAnimator,
    label: LabelCycler,
    color: ColorTransitioner,
    callbacks: MenuCallbacks,
}

impl MenuController {
    pub fn new(options: MenuOptions) -> Self {
        let layout = options.layout();
        Self {
            layer_colors: options.layer_colors(),
            scene: Scene::new(&layout, options.position.offscreen()),
            icon: IconMorphAnimator::default(),
            label: LabelCycler::new(
                options.idle_label.clone(),
                options.active_label.clone(),
                options.label_cycles,
            ),
            color: ColorTransitioner::new(
                options.menu_button_color,
                options.open_menu_button_color,
                options.change_menu_color_on_open,
            ),
            phase: Phase::Closed,
            open_timeline: None,
            close_timeline: None,
            callbacks: MenuCallbacks::default(),
            layout,
            options,
        }
    }

    pub fn on_menu_open(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_menu_open = Some(Box::new(f));
        self
    }

    pub fn on_menu_close(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_menu_close = Some(Box::new(f));
        self
    }

    pub fn on_logo_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_logo_click = Some(Box::new(f));
        self
    }

    /// Swaps in new options. Entries and layers take effect on the next open.
    pub fn reconfigure(&mut self, options: MenuOptions) {
        self.layout = options.layout();
        self.layer_colors = options.layer_colors();
        let offscreen = options.position.offscreen();
        self.scene.register(&self.layout, offscreen);
        if self.phase == Phase::Closed {
            self.scene.park(offscreen);
        }
        self.label = LabelCycler::new(
            options.idle_label.clone(),
            options.active_label.clone(),
            options.label_cycles,
        );
        self.scene.caption_shift = if self.phase.is_open() {
            final_shift(self.label.lines().len())
        } else {
            0.0
        };
        self.color.reconfigure(
            options.menu_button_color,
            options.open_menu_button_color,
            options.change_menu_color_on_open,
            self.phase.is_open(),
            &mut self.scene,
        );
        self.options = options;
        log::debug!("menu reconfigured: {:?}", self.layout);
    }

    /// Opens a closed menu or closes an open one.
    ///
    /// Returns `false` when the request is dropped because a transition is
    /// still in flight.
    pub fn toggle(&mut self) -> bool {
        match self.phase {
            Phase::Closed => self.begin_open(),
            Phase::Open => self.begin_close(),
            Phase::Opening | Phase::Closing => {
                log::debug!("toggle ignored while {:?}", self.phase);
                false
            }
        }
    }

    pub fn open(&mut self) -> bool {
        match self.phase {
            Phase::Closed => self.begin_open(),
            _ => false,
        }
    }

    /// Closes the menu, cutting an opening transition short if needed.
    pub fn close(&mut self) -> bool {
        match self.phase {
            Phase::Open | Phase::Opening => self.begin_close(),
            _ => false,
        }
    }

    /// Picks an entry. Entries with an action close the menu and hand the
    /// action back to the caller.
    pub fn select(&mut self, index: usize) -> Option<ItemAction> {
        let action = self.options.items.get(index)?.action.clone()?;
        self.close();
        Some(action)
    }

    /// Returns `true` when a logo callback handled the click.
    pub fn logo_click(&mut self) -> bool {
        fire(&mut self.callbacks.on_logo_click)
    }

    fn begin_open(&mut self) -> bool {
        self.phase = Phase::Opening;
        fire(&mut self.callbacks.on_menu_open);

        self.close_timeline = None;
        self.open_timeline = Some(TimelineBuilder::new(&self.layout).build(&mut self.scene));
        self.start_toggle_animators(true);
        log::debug!("menu opening");
        true
    }

    fn begin_close(&mut self) -> bool {
        if self.open_timeline.take().is_some() {
            log::debug!("opening cut short");
        }
        self.phase = Phase::Closing;
        fire(&mut self.callbacks.on_menu_close);

        let closing = ClosingAnimator::new(self.options.position);
        self.close_timeline = Some(closing.build(&self.scene));
        self.start_toggle_animators(false);
        log::debug!("menu closing");
        true
    }

    fn start_toggle_animators(&mut self, opening: bool) {
        self.icon.start(opening, &mut self.scene);
        self.label.start(opening, &mut self.scene);
        self.color.start(opening, &mut self.scene);
    }

    /// Advances every running animation by `delta`.
    pub fn tick(&mut self, delta: Duration) {
        if timeline::drive(&mut self.open_timeline, delta, &mut self.scene) {
            self.phase = Phase::Open;
            log::debug!("menu open");
        }
        if timeline::drive(&mut self.close_timeline, delta, &mut self.scene) {
            ClosingAnimator::new(self.options.position).finish(&mut self.scene);
            self.phase = Phase::Closed;
            log::debug!("menu closed");
        }
        self.icon.tick(delta, &mut self.scene);
        self.label.tick(delta, &mut self.scene);
        self.color.tick(delta, &mut self.scene);
    }

    pub fn is_animating(&self) -> bool {
        self.open_timeline.is_some()
            || self.close_timeline.is_some()
            || self.icon.is_animating()
            || self.label.is_animating()
            || self.color.is_animating()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn accessibility(&self) -> Accessibility {
        let open = self.is_open();
        Accessibility {
            expanded: open,
            panel_hidden: !open,
            data_open: open,
            toggle_label: if open { "Close menu" } else { "Open menu" },
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn layout(&self) -> &MenuLayout {
        &self.layout
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.options.items
    }

    pub fn socials(&self) -> &[SocialItem] {
        if self.options.display_socials {
            &self.options.socials
        } else {
            &[]
        }
    }

    pub fn layer_colors(&self) -> &[HexColor] {
        &self.layer_colors
    }

    pub fn caption_lines(&self) -> &[String] {
        self.label.lines()
    }

    pub fn toggle_color(&self) -> Srgba<f64> {
        self.color.current(&self.scene)
    }

    pub fn open_timeline(&self) -> Option<&Timeline> {
        self.open_timeline.as_ref()
    }

    pub fn close_timeline(&self) -> Option<&Timeline> {
        self.close_timeline.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::numbering;
    use crate::scene::{LABEL_LIFT_BASELINE, Property};
    use crate::wm::LinkTarget;
    use std::cell::Cell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    fn options(items: usize) -> MenuOptions {
        MenuOptions {
            items: (0..items)
                .map(|i| {
                    MenuItem::new(format!("Item {i}"))
                        .with_action(ItemAction::Link(LinkTarget::new(format!("#item-{i}"))))
                })
                .collect(),
            socials: vec![SocialItem {
                label: "Instagram".into(),
                link: LinkTarget::new("https://instagram.com"),
            }],
            ..Default::default()
        }
    }

    fn settle(menu: &mut MenuController) {
        for _ in 0..1000 {
            if !menu.is_animating() {
                return;
            }
            menu.tick(FRAME);
        }
        panic!("menu never settled");
    }

    #[test]
    fn test_toggle_runs_full_cycle() {
        let mut menu = MenuController::new(options(3));
        assert_eq!(menu.phase(), Phase::Closed);

        assert!(menu.toggle());
        assert_eq!(menu.phase(), Phase::Opening);
        settle(&mut menu);
        assert_eq!(menu.phase(), Phase::Open);
        assert_eq!(menu.scene().panel, 0.0);

        assert!(menu.toggle());
        assert_eq!(menu.phase(), Phase::Closing);
        settle(&mut menu);
        assert_eq!(menu.phase(), Phase::Closed);
        assert_eq!(menu.scene().panel, 100.0);
    }

    #[test]
    fn test_toggle_dropped_while_busy() {
        let mut menu = MenuController::new(options(3));
        assert!(menu.toggle());
        menu.tick(FRAME);
        let shape = menu.open_timeline().map(Timeline::shape);

        assert!(!menu.toggle());
        assert!(menu.is_busy());
        assert_eq!(menu.phase(), Phase::Opening);
        assert!(menu.close_timeline().is_none());
        assert_eq!(menu.open_timeline().map(Timeline::shape), shape);

        settle(&mut menu);
        assert!(!menu.is_busy());
        assert!(menu.toggle());
        menu.tick(FRAME);
        assert!(!menu.toggle());
        assert!(!menu.open());
        assert_eq!(menu.phase(), Phase::Closing);
    }

    #[test]
    fn test_close_during_opening_resets_entries() {
        let mut menu = MenuController::new(options(4));
        menu.open();
        for _ in 0..30 {
            menu.tick(FRAME);
        }
        assert!(menu.scene().label_lift[0] < LABEL_LIFT_BASELINE);

        assert!(menu.close());
        assert!(menu.open_timeline().is_none());
        assert!(menu.is_busy());

        settle(&mut menu);
        assert!(!menu.is_busy());
        assert_eq!(menu.phase(), Phase::Closed);
        assert!(menu.scene().entries_at_baseline());
        assert!(menu.scene().numbers.iter().all(|&n| n == 0.0));
        assert_eq!(menu.scene().social_title, Some(0.0));
    }

    #[test]
    fn test_reopen_reproduces_timeline_shape() {
        let mut menu = MenuController::new(options(4));
        menu.open();
        let first = menu.open_timeline().map(Timeline::shape);
        settle(&mut menu);

        for _ in 0..3 {
            menu.close();
            settle(&mut menu);
            menu.open();
            assert_eq!(menu.open_timeline().map(Timeline::shape), first);
            settle(&mut menu);
        }
    }

    #[test]
    fn test_no_layers_opens_panel_at_zero() {
        let mut opts = options(4);
        opts.display_layers = false;
        let mut menu = MenuController::new(opts);
        assert_eq!(menu.layout().layers, 0);
        assert!(menu.layer_colors().is_empty());

        menu.open();
        let timeline = menu.open_timeline().expect("opening timeline");
        assert_eq!(timeline.start_of(Property::PanelShift), Some(0.0));
    }

    #[test]
    fn test_three_layers_stagger_panel() {
        let mut opts = options(4);
        opts.colors = ["#111111", "#222222", "#333333", "#444444"]
            .iter()
            .map(|c| c.parse().unwrap())
            .collect();
        let mut menu = MenuController::new(opts);
        assert_eq!(menu.layout().layers, 3);

        menu.open();
        let timeline = menu.open_timeline().expect("opening timeline");
        let starts: Vec<f64> = (0..3)
            .filter_map(|i| timeline.start_of(Property::LayerShift(i)))
            .collect();
        assert_eq!(starts.len(), 3);
        for (start, expected) in starts.iter().zip([0.0, 0.07, 0.14]) {
            assert!((start - expected).abs() < 1e-9);
        }
        let panel = timeline.start_of(Property::PanelShift).unwrap_or_default();
        assert!((panel - 0.22).abs() < 1e-9);
    }

    #[test]
    fn test_numbering_matches_item_order() {
        let menu = MenuController::new(options(11));
        let numbers: Vec<_> = menu
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| (numbering(i), item.label.to_string()))
            .collect();
        assert_eq!(numbers[0], ("01".to_string(), "Item 0".to_string()));
        assert_eq!(numbers[10], ("11".to_string(), "Item 10".to_string()));
    }

    #[test]
    fn test_callbacks_fire_before_animation() {
        let opened = Rc::new(Cell::new(0));
        let closed = Rc::new(Cell::new(0));
        let mut menu = MenuController::new(options(2))
            .on_menu_open({
                let opened = opened.clone();
                move || opened.set(opened.get() + 1)
            })
            .on_menu_close({
                let closed = closed.clone();
                move || closed.set(closed.get() + 1)
            });

        menu.toggle();
        assert_eq!(opened.get(), 1);
        assert_eq!(menu.scene().panel, 100.0);

        menu.toggle();
        assert_eq!(opened.get(), 1);

        menu.close();
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn test_accessibility_tracks_phase_not_animation() {
        let mut menu = MenuController::new(options(2));
        assert_eq!(menu.accessibility().toggle_label, "Open menu");
        assert!(menu.accessibility().panel_hidden);

        menu.open();
        let a11y = menu.accessibility();
        assert!(a11y.expanded && a11y.data_open && !a11y.panel_hidden);
        assert_eq!(a11y.toggle_label, "Close menu");

        menu.close();
        assert!(!menu.accessibility().expanded);
    }

    #[test]
    fn test_select_closes_and_returns_action() {
        let mut menu = MenuController::new(options(2));
        menu.open();
        settle(&mut menu);

        let action = menu.select(1);
        assert_eq!(action, Some(ItemAction::Link(LinkTarget::new("#item-1"))));
        assert_eq!(menu.phase(), Phase::Closing);
        assert_eq!(menu.select(9), None);
    }

    #[test]
    fn test_logo_click_without_callback_is_unhandled() {
        let mut menu = MenuController::new(options(1));
        assert!(!menu.logo_click());

        let mut menu = MenuController::new(options(1)).on_logo_click(|| {});
        assert!(menu.logo_click());
    }

    #[test]
    fn test_caption_and_colour_follow_toggle() {
        let mut opts = options(1);
        opts.open_menu_button_color = HexColor::rgb(0, 0, 0);
        let mut menu = MenuController::new(opts);

        menu.open();
        settle(&mut menu);
        assert_eq!(menu.caption_lines().last().map(String::as_str), Some("Close"));
        assert_eq!(menu.scene().color_mix, 1.0);
        assert_eq!(menu.toggle_color(), HexColor::rgb(0, 0, 0).srgba());
    }

    #[test]
    fn test_reconfigure_moves_parked_panel() {
        let mut menu = MenuController::new(options(1));
        let mut opts = options(5);
        opts.position = Position::Left;
        opts.display_socials = false;
        menu.reconfigure(opts);

        assert_eq!(menu.scene().panel, -100.0);
        assert_eq!(menu.scene().label_lift.len(), 5);
        assert!(menu.socials().is_empty());
        assert_eq!(menu.scene().social_title, None);
    }

    #[test]
    fn test_position_change_while_closing_applies_on_next_open() {
        let mut menu = MenuController::new(options(2));
        menu.toggle();
        settle(&mut menu);
        menu.toggle();
        menu.tick(FRAME);
        assert_eq!(menu.phase(), Phase::Closing);

        let mut opts = options(2);
        opts.position = Position::Left;
        menu.reconfigure(opts);
        settle(&mut menu);

        assert_eq!(menu.phase(), Phase::Closed);
        assert_eq!(menu.scene().panel, -100.0);
        assert!(menu.scene().layers.iter().all(|&l| l == -100.0));

        menu.toggle();
        menu.tick(FRAME);
        assert!(menu.scene().panel < 0.0);
    }
}
