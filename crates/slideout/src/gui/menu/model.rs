use crate::gui::menu::{
    BRAND_WIDTH, COMPACT_WIDTH, HEADER_HEIGHT, HEADER_PADDING, ICON_SIZE, ITEM_GAP, ITEM_HEIGHT,
    ITEMS_TOP, PANEL_MAX_WIDTH, PANEL_MIN_WIDTH, PANEL_PADDING, PANEL_WIDTH_RATIO, SOCIAL_GAP,
    SOCIAL_LINK_HEIGHT, SOCIAL_LINK_WIDTH, SOCIAL_TITLE_HEIGHT, TOGGLE_WIDTH,
};
use stagger::layout::Position;
use stagger::wm::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn shifted(&self, dx: f64) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Toggle,
    Brand,
    Item(usize),
    Social(usize),
    Panel,
    Backdrop,
}

/// Resting (fully open) placement of everything on the overlay.
///
/// Animated elements are drawn at these rects plus a horizontal offset taken
/// from the scene; hit testing only uses the resting placement.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGeometry {
    pub panel: Rect,
    pub brand: Rect,
    pub toggle: Rect,
    pub caption: Rect,
    pub icon_center: Point,
    pub items: Vec<Rect>,
    /// First entry slot, used for the empty-menu message.
    pub placeholder: Rect,
    pub social_title: Rect,
    pub socials: Vec<Rect>,
}

impl MenuGeometry {
    pub fn panel_width(width: f64) -> f64 {
        if width <= COMPACT_WIDTH {
            width
        } else {
            (width * PANEL_WIDTH_RATIO).clamp(PANEL_MIN_WIDTH, PANEL_MAX_WIDTH)
        }
    }

    pub fn calculate(
        width: f64,
        height: f64,
        position: Position,
        items: usize,
        socials: usize,
    ) -> Self {
        let panel_width = Self::panel_width(width);
        let panel_x = match position {
            Position::Left => 0.0,
            Position::Right => width - panel_width,
        };
        let panel = Rect::new(panel_x, 0.0, panel_width, height);
        let content_x = panel.x + PANEL_PADDING;
        let content_width = (panel.width - 2.0 * PANEL_PADDING).max(0.0);

        let brand = Rect::new(HEADER_PADDING, HEADER_PADDING, BRAND_WIDTH, HEADER_HEIGHT);
        let toggle = Rect::new(
            width - HEADER_PADDING - TOGGLE_WIDTH,
            HEADER_PADDING,
            TOGGLE_WIDTH,
            HEADER_HEIGHT,
        );
        let icon_center = Point::new(
            toggle.x + toggle.width - ICON_SIZE / 2.0,
            toggle.y + toggle.height / 2.0,
        );
        // caption sits left of the icon, one line tall
        let caption = Rect::new(
            toggle.x,
            toggle.y,
            (toggle.width - 2.0 * ICON_SIZE).max(0.0),
            toggle.height,
        );

        let slot = |i: usize| {
            Rect::new(
                content_x,
                ITEMS_TOP + i as f64 * (ITEM_HEIGHT + ITEM_GAP),
                content_width,
                ITEM_HEIGHT,
            )
        };
        let placeholder = slot(0);
        let items = (0..items).map(slot).collect();

        let links_y = height - PANEL_PADDING - SOCIAL_LINK_HEIGHT;
        let social_title = Rect::new(
            content_x,
            links_y - SOCIAL_GAP - SOCIAL_TITLE_HEIGHT,
            content_width,
            SOCIAL_TITLE_HEIGHT,
        );
        let socials = (0..socials)
            .map(|i| {
                Rect::new(
                    content_x + i as f64 * (SOCIAL_LINK_WIDTH + SOCIAL_GAP),
                    links_y,
                    SOCIAL_LINK_WIDTH,
                    SOCIAL_LINK_HEIGHT,
                )
            })
            .collect();

        Self {
            panel,
            brand,
            toggle,
            caption,
            icon_center,
            items,
            placeholder,
            social_title,
            socials,
        }
    }

    /// Pixel offset for a shift given in percent of the panel width.
    pub fn offset(&self, shift: f64) -> f64 {
        shift / 100.0 * self.panel.width
    }

    /// The header floats above the panel, so it is tested first.
    pub fn hit(&self, point: Point) -> Hit {
        if self.toggle.contains(point) {
            return Hit::Toggle;
        }
        if self.brand.contains(point) {
            return Hit::Brand;
        }
        if !self.panel.contains(point) {
            return Hit::Backdrop;
        }
        if let Some(i) = self.items.iter().position(|r| r.contains(point)) {
            return Hit::Item(i);
        }
        if let Some(i) = self.socials.iter().position(|r| r.contains(point)) {
            return Hit::Social(i);
        }
        Hit::Panel
    }
}
