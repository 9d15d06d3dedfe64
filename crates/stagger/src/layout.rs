use crate::color::HexColor;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumString};

/// Most decorative layers a menu will draw.
pub const MAX_LAYER_COLORS: usize = 4;

/// Screen edge the panel slides in from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[strum(to_string = "left", serialize = "l")]
    Left,
    #[default]
    #[strum(to_string = "right", serialize = "r")]
    Right,
}

impl Position {
    /// Shift, in percent of the panel width, that hides the panel past this edge.
    pub fn offscreen(self) -> f64 {
        match self {
            Self::Left => -100.0,
            Self::Right => 100.0,
        }
    }
}

/// Counts of everything the open timeline animates.
///
/// The owning surface registers this instead of the controller discovering
/// elements on its own; a zero count simply skips that stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuLayout {
    pub items: usize,
    pub layers: usize,
    pub numbering: bool,
    pub social_title: bool,
    pub social_links: usize,
}

impl MenuLayout {
    pub fn numbered_items(&self) -> usize {
        if self.numbering { self.items } else { 0 }
    }
}

/// Colours of the decorative layers for a configured palette.
///
/// Only the first four colours are used, an empty palette falls back to two
/// dark greys, and with three or more the middle colour is left out.
pub fn layer_palette(colors: &[HexColor]) -> Vec<HexColor> {
    let mut layers: Vec<HexColor> = if colors.is_empty() {
        vec![HexColor::rgb(0x1e, 0x1e, 0x22), HexColor::rgb(0x35, 0x35, 0x3c)]
    } else {
        colors.iter().take(MAX_LAYER_COLORS).copied().collect()
    };
    if layers.len() >= 3 {
        layers.remove(layers.len() / 2);
    }
    layers
}
