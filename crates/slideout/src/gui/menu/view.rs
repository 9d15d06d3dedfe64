use super::model::{MenuGeometry, Rect};
use super::{
    CAPTION_FONT_SIZE, ICON_SIZE, ICON_STROKE, ITEM_FONT_SIZE, NUMBER_FONT_SIZE, SOCIAL_FONT_SIZE,
};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use palette::{Srgba, WithAlpha};
use stagger::MenuController;
use stagger::item::numbering;
use stagger::scene::Scene;

const SOCIALS_TITLE: &str = "Socials";
const EMPTY_MENU: &str = "No items";

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

fn select_font(cr: &Context, size: f64, weight: cairo::FontWeight) {
    cr.select_font_face("Sans", cairo::FontSlant::Normal, weight);
    cr.set_font_size(size);
}

/// Draws `text` with its baseline vertically centred in `rect`.
fn text_in(cr: &Context, text: &str, rect: Rect) -> Result<(), cairo::Error> {
    let ext = cr.text_extents(text)?;
    cr.move_to(rect.x, rect.y + (rect.height + ext.height()) / 2.0);
    cr.show_text(text)
}

/// How far the menu has come into view, from any moving surface.
fn reveal(scene: &Scene) -> f64 {
    scene
        .layers
        .iter()
        .chain(std::iter::once(&scene.panel))
        .map(|shift| 1.0 - (shift.abs() / 100.0).min(1.0))
        .fold(0.0, f64::max)
}

struct PanelRenderer<'a> {
    menu: &'a MenuController,
    geometry: &'a MenuGeometry,
    colors: &'a ThemeColors,
    offset: f64,
}

impl<'a> PanelRenderer<'a> {
    fn new(menu: &'a MenuController, geometry: &'a MenuGeometry, colors: &'a ThemeColors) -> Self {
        Self {
            menu,
            geometry,
            colors,
            offset: geometry.offset(menu.scene().panel),
        }
    }

    fn draw(&self, cr: &Context) -> Result<(), cairo::Error> {
        let panel = self.geometry.panel.shifted(self.offset);
        set_source(cr, self.colors.panel);
        cr.rectangle(panel.x, panel.y, panel.width, panel.height);
        cr.fill()?;

        if self.menu.items().is_empty() {
            self.draw_placeholder(cr)?;
        }
        for i in 0..self.geometry.items.len() {
            self.draw_item(cr, i)?;
        }
        self.draw_socials(cr)
    }

    fn draw_placeholder(&self, cr: &Context) -> Result<(), cairo::Error> {
        let rect = self.geometry.placeholder.shifted(self.offset);
        select_font(cr, NUMBER_FONT_SIZE * 1.5, cairo::FontWeight::Normal);
        set_source(cr, self.colors.muted);
        text_in(cr, EMPTY_MENU, rect)
    }

    fn draw_item(&self, cr: &Context, index: usize) -> Result<(), cairo::Error> {
        let scene = self.menu.scene();
        let (Some(item), Some(rect)) = (
            self.menu.items().get(index),
            self.geometry.items.get(index),
        ) else {
            return Ok(());
        };
        let rect = rect.shifted(self.offset);
        let lift = scene.label_lift.get(index).copied().unwrap_or(0.0);
        let tilt = scene.label_tilt.get(index).copied().unwrap_or(0.0);

        // labels rise from below the clip, pivoting on their bottom-left corner
        cr.save()?;
        cr.rectangle(rect.x, rect.y, rect.width, rect.height);
        cr.clip();
        select_font(cr, ITEM_FONT_SIZE, cairo::FontWeight::Bold);
        set_source(cr, self.colors.text);
        let baseline = rect.y + rect.height * 0.8;
        cr.translate(rect.x, baseline + lift / 100.0 * rect.height);
        cr.rotate(tilt.to_radians());
        cr.move_to(0.0, 0.0);
        cr.show_text(item.label.as_str())?;
        cr.restore()?;

        if let Some(&opacity) = scene.numbers.get(index) {
            let accent = self.menu.options().accent_color.srgba();
            select_font(cr, NUMBER_FONT_SIZE, cairo::FontWeight::Normal);
            set_source(cr, accent.with_alpha(accent.alpha * opacity));
            let number = numbering(index);
            let ext = cr.text_extents(&number)?;
            cr.move_to(rect.x + rect.width - ext.width(), rect.y + ext.height());
            cr.show_text(&number)?;
        }
        Ok(())
    }

    fn draw_socials(&self, cr: &Context) -> Result<(), cairo::Error> {
        let scene = self.menu.scene();
        if let Some(opacity) = scene.social_title {
            let accent = self.menu.options().accent_color.srgba();
            select_font(cr, NUMBER_FONT_SIZE, cairo::FontWeight::Bold);
            set_source(cr, accent.with_alpha(accent.alpha * opacity));
            text_in(cr, SOCIALS_TITLE, self.geometry.social_title.shifted(self.offset))?;
        }

        select_font(cr, SOCIAL_FONT_SIZE, cairo::FontWeight::Normal);
        for (i, (social, rect)) in self
            .menu
            .socials()
            .iter()
            .zip(&self.geometry.socials)
            .enumerate()
        {
            let (Some(&lift), Some(&opacity)) =
                (scene.social_lift.get(i), scene.social_opacity.get(i))
            else {
                continue;
            };
            let mut rect = rect.shifted(self.offset);
            rect.y += lift;
            set_source(cr, self.colors.text.with_alpha(self.colors.text.alpha * opacity));
            text_in(cr, social.label.as_str(), rect)?;
        }
        Ok(())
    }
}

fn draw_backdrop(
    cr: &Context,
    scene: &Scene,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let backdrop = colors.backdrop;
    set_source(cr, backdrop.with_alpha(backdrop.alpha * reveal(scene)));
    cr.paint()
}

/// Decorative layers, first one lowest.
fn draw_layers(
    cr: &Context,
    menu: &MenuController,
    geometry: &MenuGeometry,
) -> Result<(), cairo::Error> {
    for (&shift, color) in menu.scene().layers.iter().zip(menu.layer_colors()) {
        let rect = geometry.panel.shifted(geometry.offset(shift));
        set_source(cr, color.srgba());
        cr.rectangle(rect.x, rect.y, rect.width, rect.height);
        cr.fill()?;
    }
    Ok(())
}

fn draw_header(
    cr: &Context,
    menu: &MenuController,
    brand: &str,
    geometry: &MenuGeometry,
) -> Result<(), cairo::Error> {
    let color = menu.toggle_color();
    set_source(cr, color);
    select_font(cr, CAPTION_FONT_SIZE, cairo::FontWeight::Bold);
    text_in(cr, brand, geometry.brand)?;

    draw_caption(cr, menu, geometry.caption)?;
    draw_icon(cr, menu.scene(), geometry)
}

/// The caption is a column of lines scrolled through a one-line window.
fn draw_caption(cr: &Context, menu: &MenuController, window: Rect) -> Result<(), cairo::Error> {
    let lines = menu.caption_lines();
    let column_height = window.height * lines.len() as f64;
    let scroll = menu.scene().caption_shift / 100.0 * column_height;

    cr.save()?;
    cr.rectangle(window.x, window.y, window.width, window.height);
    cr.clip();
    select_font(cr, CAPTION_FONT_SIZE, cairo::FontWeight::Normal);
    for (i, line) in lines.iter().enumerate() {
        let slot = Rect::new(
            window.x,
            window.y + i as f64 * window.height + scroll,
            window.width,
            window.height,
        );
        let ext = cr.text_extents(line)?;
        cr.move_to(
            slot.x + slot.width - ext.width(),
            slot.y + (slot.height + ext.height()) / 2.0,
        );
        cr.show_text(line)?;
    }
    cr.restore()
}

/// Two strokes drawn horizontally, then turned to their animated angles.
fn draw_icon(cr: &Context, scene: &Scene, geometry: &MenuGeometry) -> Result<(), cairo::Error> {
    let center = geometry.icon_center;
    cr.save()?;
    cr.translate(center.x, center.y);
    cr.rotate(scene.icon_spin.to_radians());
    cr.set_line_width(ICON_STROKE);
    cr.set_line_cap(cairo::LineCap::Round);
    for angle in [scene.stroke_h, scene.stroke_v] {
        cr.save()?;
        cr.rotate(angle.to_radians());
        cr.move_to(-ICON_SIZE / 2.0, 0.0);
        cr.line_to(ICON_SIZE / 2.0, 0.0);
        cr.stroke()?;
        cr.restore()?;
    }
    cr.restore()
}

pub fn draw(
    cr: &Context,
    menu: &MenuController,
    brand: &str,
    geometry: &MenuGeometry,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    draw_backdrop(cr, menu.scene(), colors)?;
    draw_layers(cr, menu, geometry)?;
    PanelRenderer::new(menu, geometry, colors).draw(cr)?;
    draw_header(cr, menu, brand, geometry)
}
