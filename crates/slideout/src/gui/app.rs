use crate::config::{self, Config, SETUP_COMMAND};
use crate::events::AppEvent;
use crate::gui::menu::{self, Hit, MenuGeometry};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use stagger::item::ItemAction;
use stagger::wm::{self, LinkTarget, Point};
use stagger::{MenuController, Phase};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Longest step the frame clock may advance the menu by, in microseconds.
/// Stalls longer than this play out over several frames instead of jumping.
const MAX_FRAME_STEP: i64 = 100_000;

pub struct AppModel {
    pub menu: Rc<RefCell<MenuController>>,
    pub config: Rc<RefCell<Config>>,
    pub last_frame: Rc<Cell<Option<i64>>>,
    pub visible: bool,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Toggle,
    Click(Point),
    Settled,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Toggle => AppMsg::Toggle,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn build_menu(config: &Rc<RefCell<Config>>) -> MenuController {
    let logo_config = config.clone();
    MenuController::new(config.borrow().menu_options())
        .on_menu_open(|| log::info!("Menu opened"))
        .on_menu_close(|| log::info!("Menu closed"))
        .on_logo_click(move || match &logo_config.borrow().logo_exec {
            Some(exec) => {
                if let Err(e) = wm::run_or_raise(None, exec) {
                    log::error!("Failed to run logo command '{}': {}", exec, e);
                }
            }
            None => log::debug!("No logo command configured"),
        })
}

fn activate(action: &ItemAction) {
    if let ItemAction::Exec { command, .. } = action
        && command.as_str() == SETUP_COMMAND
    {
        match config::write_default_config() {
            Ok(path) => {
                let target = LinkTarget::new(path.display().to_string());
                if let Err(e) = wm::open_link(&target) {
                    log::error!("Failed to open {}: {}", target, e);
                }
            }
            Err(e) => log::error!("Failed to write default config: {}", e),
        }
        return;
    }
    if let Err(e) = action.activate() {
        log::error!("Failed to activate {:?}: {}", action, e);
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Stagger"),
            #[watch]
            set_visible: model.visible,
            add_css_class: "stagger-window",
            set_decorated: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Hide);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "stagger-canvas",

                add_controller = gtk::GestureClick {
                    set_button: 1, // primary
                    connect_released[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Click(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();
        window::init_layer_shell(&root);

        let config = Rc::new(RefCell::new(config));
        let model = AppModel {
            menu: Rc::new(RefCell::new(build_menu(&config))),
            config,
            last_frame: Rc::new(Cell::new(None)),
            visible: false,
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let menu_draw = model.menu.clone();
        let config_draw = model.config.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let colors = ThemeColors::from_context(&drawing_area.style_context());
                let menu = menu_draw.borrow();
                let geometry = MenuGeometry::calculate(
                    width as f64,
                    height as f64,
                    menu.options().position,
                    menu.items().len(),
                    menu.socials().len(),
                );
                let brand = config_draw.borrow().brand.clone();
                if let Err(e) = menu::draw(cr, &menu, &brand, &geometry, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let menu_tick = model.menu.clone();
        let last_frame = model.last_frame.clone();
        let tick_sender = sender.clone();
        widgets.drawing_area.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let step = last_frame
                .replace(Some(now))
                .map_or(0, |prev| (now - prev).clamp(0, MAX_FRAME_STEP));
            let settled = {
                let mut menu = menu_tick.borrow_mut();
                let was_animating = menu.is_animating();
                menu.tick(Duration::from_micros(step as u64));
                was_animating && !menu.is_animating() && menu.phase() == Phase::Closed
            };
            area.queue_draw();
            if settled {
                tick_sender.input(AppMsg::Settled);
            }
            glib::ControlFlow::Continue
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        root.set_visible(false);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => self.show(),
            AppMsg::Hide => {
                self.menu.borrow_mut().close();
            }
            AppMsg::Toggle => {
                if self.visible {
                    self.menu.borrow_mut().toggle();
                } else {
                    self.show();
                }
            }
            AppMsg::Click(point) => {
                if self.visible {
                    self.click(point);
                }
            }
            AppMsg::Settled => {
                let menu = self.menu.borrow();
                if menu.phase() == Phase::Closed && !menu.is_animating() {
                    self.visible = false;
                }
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.menu
                        .borrow_mut()
                        .reconfigure(new_config.menu_options());
                    *self.config.borrow_mut() = new_config;
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
        self.sync_accessibility();
    }
}

impl AppModel {
    fn show(&mut self) {
        if !self.visible {
            window::follow_focused_monitor(&self.root);
            // the clock kept no frames while hidden
            self.last_frame.set(None);
            self.visible = true;
        }
        self.menu.borrow_mut().open();
        self.drawing_area.queue_draw();
    }

    fn click(&mut self, point: Point) {
        let geometry = {
            let menu = self.menu.borrow();
            MenuGeometry::calculate(
                self.drawing_area.width() as f64,
                self.drawing_area.height() as f64,
                menu.options().position,
                menu.items().len(),
                menu.socials().len(),
            )
        };

        let mut menu = self.menu.borrow_mut();
        match geometry.hit(point) {
            Hit::Toggle => {
                menu.toggle();
            }
            Hit::Brand => {
                if menu.logo_click() {
                    menu.close();
                }
            }
            Hit::Item(index) => {
                if let Some(action) = menu.select(index) {
                    activate(&action);
                }
            }
            Hit::Social(index) => {
                if let Some(social) = menu.socials().get(index).cloned() {
                    menu.close();
                    activate(&ItemAction::Link(social.link));
                }
            }
            Hit::Backdrop => {
                menu.close();
            }
            Hit::Panel => {}
        }
    }

    fn sync_accessibility(&self) {
        let a11y = self.menu.borrow().accessibility();
        self.drawing_area
            .update_state(&[gtk::accessible::State::Expanded(Some(a11y.expanded))]);
        self.drawing_area
            .update_property(&[gtk::accessible::Property::Label(a11y.toggle_label)]);
        if a11y.data_open {
            self.root.add_css_class("open");
        } else {
            self.root.remove_css_class("open");
        }
    }
}
