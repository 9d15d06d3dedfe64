use crate::ease::Ease;
use crate::scene::{Property, Scene};
use crate::timeline::{self, Timeline};
use palette::{LinSrgba, Mix, Srgb, Srgba};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const COLOR_DELAY: f64 = 0.18;
pub const COLOR_DURATION: f64 = 0.3;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour '{0}': {1}")]
    Hex(String, palette::rgb::FromHexError),
}

/// An opaque sRGB colour written as `#rrggbb` or `#rgb`.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, DeserializeFromStr)]
pub struct HexColor(Srgba<f64>);

impl HexColor {
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        let color: Srgb<f64> = Srgb::new(red, green, blue).into_format();
        Self(Srgba::new(color.red, color.green, color.blue, 1.0))
    }

    pub fn srgba(&self) -> Srgba<f64> {
        self.0
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rgb: Srgb<u8> = s
            .trim()
            .parse()
            .map_err(|e| ColorError::Hex(s.to_string(), e))?;
        Ok(Self::rgb(rgb.red, rgb.green, rgb.blue))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rgb: Srgb<u8> = self.0.color.into_format();
        write!(f, "#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }
}

/// Fades the toggle's foreground between its closed and open colours.
///
/// The fade trails the icon and caption by [`COLOR_DELAY`]. When disabled the
/// toggle stays on the closed colour.
#[derive(Debug, Clone)]
pub struct ColorTransitioner {
    closed: HexColor,
    open: HexColor,
    enabled: bool,
    timeline: Option<Timeline>,
}

impl ColorTransitioner {
    pub fn new(closed: HexColor, open: HexColor, enabled: bool) -> Self {
        Self {
            closed,
            open,
            enabled,
            timeline: None,
        }
    }

    pub fn start(&mut self, opening: bool, scene: &mut Scene) {
        self.timeline = None;
        if !self.enabled {
            scene.color_mix = 0.0;
            return;
        }
        let mut timeline = Timeline::new();
        timeline.to(
            Property::ColorMix,
            if opening { 1.0 } else { 0.0 },
            COLOR_DURATION,
            Ease::Power2Out,
            COLOR_DELAY,
        );
        self.timeline = Some(timeline);
    }

    /// Applies new colours immediately, snapping to the colour for `open`.
    pub fn reconfigure(
        &mut self,
        closed: HexColor,
        open: HexColor,
        enabled: bool,
        is_open: bool,
        scene: &mut Scene,
    ) {
        self.closed = closed;
        self.open = open;
        self.enabled = enabled;
        self.timeline = None;
        scene.color_mix = if enabled && is_open { 1.0 } else { 0.0 };
    }

    pub fn tick(&mut self, delta: Duration, scene: &mut Scene) {
        timeline::drive(&mut self.timeline, delta, scene);
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_some()
    }

    pub fn current(&self, scene: &Scene) -> Srgba<f64> {
        if !self.enabled {
            return self.closed.srgba();
        }
        let closed: LinSrgba<f64> = self.closed.srgba().into_linear();
        let open: LinSrgba<f64> = self.open.srgba().into_linear();
        Srgba::from_linear(closed.mix(open, scene.color_mix.clamp(0.0, 1.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MenuLayout;

    fn scene() -> Scene {
        Scene::new(&MenuLayout::default(), 100.0)
    }

    #[test]
    fn test_hex_parsing() {
        let color: HexColor = "#5227FF".parse().unwrap();
        assert_eq!(color, HexColor::rgb(0x52, 0x27, 0xff));
        assert_eq!(color.to_string(), "#5227ff");
        assert!("not-a-colour".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_hex_deserialization() {
        let color: HexColor = serde_json::from_str("\"#ffffff\"").unwrap();
        assert_eq!(color, HexColor::rgb(255, 255, 255));
    }

    #[test]
    fn test_colour_change_waits_for_delay() {
        let mut scene = scene();
        let mut color = ColorTransitioner::new(
            HexColor::rgb(255, 255, 255),
            HexColor::rgb(0, 0, 0),
            true,
        );
        color.start(true, &mut scene);

        color.tick(Duration::from_millis(150), &mut scene);
        assert_eq!(scene.color_mix, 0.0);

        color.tick(Duration::from_millis(400), &mut scene);
        assert_eq!(scene.color_mix, 1.0);
        assert!(!color.is_animating());
        assert_eq!(color.current(&scene), HexColor::rgb(0, 0, 0).srgba());
    }

    #[test]
    fn test_disabled_colour_is_pinned() {
        let mut scene = scene();
        let closed = HexColor::rgb(10, 20, 30);
        let mut color = ColorTransitioner::new(closed, HexColor::rgb(200, 0, 0), false);
        scene.color_mix = 0.6;

        color.start(true, &mut scene);
        assert!(!color.is_animating());
        assert_eq!(scene.color_mix, 0.0);
        assert_eq!(color.current(&scene), closed.srgba());
    }

    #[test]
    fn test_reconfigure_snaps_to_state() {
        let mut scene = scene();
        let mut color =
            ColorTransitioner::new(HexColor::rgb(0, 0, 0), HexColor::rgb(9, 9, 9), true);
        color.start(true, &mut scene);
        color.reconfigure(
            HexColor::rgb(1, 1, 1),
            HexColor::rgb(2, 2, 2),
            true,
            true,
            &mut scene,
        );
        assert!(!color.is_animating());
        assert_eq!(scene.color_mix, 1.0);
    }

    #[test]
    fn test_midpoint_is_mixed_in_linear_light() {
        let mut scene = scene();
        let color =
            ColorTransitioner::new(HexColor::rgb(0, 0, 0), HexColor::rgb(255, 255, 255), true);
        scene.color_mix = 0.5;

        // half of linear light encodes to ~0.735, not 0.5
        let mid = color.current(&scene);
        assert!((mid.red - 0.7354).abs() < 1e-3, "got {}", mid.red);
        assert_eq!(mid.red, mid.blue);
        assert_eq!(mid.alpha, 1.0);
    }
}
