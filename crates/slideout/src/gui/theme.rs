use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Colours that come from the GTK theme rather than the menu config.
pub struct ThemeColors {
    pub panel: Srgba<f64>,
    pub text: Srgba<f64>,
    pub muted: Srgba<f64>,
    pub backdrop: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            panel: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(1.0, 1.0, 1.0, 1.0),
                Some(1.0),
            ),
            text: Self::lookup_color(
                context,
                "theme_text_color",
                Srgba::new(0.0, 0.0, 0.0, 1.0),
                None,
            ),
            muted: Self::lookup_color(
                context,
                "theme_unfocused_fg_color",
                Srgba::new(0.4, 0.4, 0.4, 1.0),
                None,
            ),
            backdrop: Srgba::new(0.0, 0.0, 0.0, 0.35),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    alpha_override.unwrap_or(c.alpha() as f64),
                )
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    provider.load_from_data(
        "
.stagger-window, .stagger-canvas {
    background: none;
    background-color: transparent;
}
",
    );

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
