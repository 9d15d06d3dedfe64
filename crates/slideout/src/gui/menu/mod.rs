pub mod model;
pub mod view;

pub use model::{Hit, MenuGeometry, Rect};
pub use view::draw;

// screens at or below this width get a full-width panel
pub const COMPACT_WIDTH: f64 = 1024.0;
pub const PANEL_WIDTH_RATIO: f64 = 0.38;
pub const PANEL_MIN_WIDTH: f64 = 260.0;
pub const PANEL_MAX_WIDTH: f64 = 420.0;
pub const PANEL_PADDING: f64 = 32.0;

pub const HEADER_PADDING: f64 = 32.0;
pub const HEADER_HEIGHT: f64 = 48.0;
pub const BRAND_WIDTH: f64 = 220.0;
pub const TOGGLE_WIDTH: f64 = 120.0;
pub const ICON_SIZE: f64 = 14.0;
pub const ICON_STROKE: f64 = 2.0;
pub const CAPTION_FONT_SIZE: f64 = 16.0;

pub const ITEMS_TOP: f64 = 144.0;
pub const ITEM_HEIGHT: f64 = 64.0;
pub const ITEM_GAP: f64 = 8.0;
pub const ITEM_FONT_SIZE: f64 = 48.0;
pub const NUMBER_FONT_SIZE: f64 = 16.0;

pub const SOCIAL_TITLE_HEIGHT: f64 = 24.0;
pub const SOCIAL_GAP: f64 = 12.0;
pub const SOCIAL_LINK_WIDTH: f64 = 110.0;
pub const SOCIAL_LINK_HEIGHT: f64 = 28.0;
pub const SOCIAL_FONT_SIZE: f64 = 18.0;
