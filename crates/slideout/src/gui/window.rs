use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use stagger::wm::{self, MonitorName};

/// Full-screen overlay surface. The panel, layers and dimmed backdrop are all
/// drawn inside it, so it needs every edge and no exclusive zone.
pub fn init_layer_shell(window: &gtk::ApplicationWindow) {
    window.init_layer_shell();
    window.set_layer(Layer::Overlay);
    window.set_namespace(Some("stagger"));
    window.set_exclusive_zone(-1);
    for edge in [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom] {
        window.set_anchor(edge, true);
    }
    window.set_keyboard_mode(KeyboardMode::OnDemand);
}

pub fn get_monitor_by_name(name: &MonitorName) -> Option<gdk::Monitor> {
    let display = gdk::Display::default()?;
    let monitors = display.monitors();
    (0..monitors.n_items()).find_map(|i| {
        monitors
            .item(i)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
            .filter(|m| m.connector().is_some_and(|n| n.as_str() == name.as_str()))
    })
}

/// Moves the overlay to the monitor hyprland reports as focused.
///
/// Returns false when the compositor could not be asked, in which case the
/// surface stays wherever it was last shown.
pub fn follow_focused_monitor(window: &gtk::ApplicationWindow) -> bool {
    let Some(name) = wm::get_active_monitor() else {
        log::debug!("No focused monitor reported");
        return false;
    };
    match get_monitor_by_name(&name) {
        Some(monitor) => {
            window.set_monitor(Some(&monitor));
            true
        }
        None => {
            log::warn!("Monitor {} not known to GDK", name);
            false
        }
    }
}
