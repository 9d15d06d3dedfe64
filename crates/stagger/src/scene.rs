use crate::layout::MenuLayout;
use derive_more::Display;

/// Entry pose of an item label before it rises into place (percent of its height).
pub const LABEL_LIFT_BASELINE: f64 = 140.0;
/// Entry tilt of an item label, in degrees.
pub const LABEL_TILT_BASELINE: f64 = 10.0;
/// Entry offset of a social link, in pixels.
pub const SOCIAL_LINK_LIFT_BASELINE: f64 = 25.0;
/// Resting angle of the vertical icon stroke while closed.
pub const STROKE_V_REST: f64 = 90.0;

/// A single animatable scalar of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Property {
    #[display("layer[{_0}].shift")]
    LayerShift(usize),
    #[display("panel.shift")]
    PanelShift,
    #[display("item[{_0}].lift")]
    LabelLift(usize),
    #[display("item[{_0}].tilt")]
    LabelTilt(usize),
    #[display("item[{_0}].number_opacity")]
    NumberOpacity(usize),
    #[display("socials.title_opacity")]
    SocialTitleOpacity,
    #[display("socials[{_0}].lift")]
    SocialLinkLift(usize),
    #[display("socials[{_0}].opacity")]
    SocialLinkOpacity(usize),
    #[display("icon.stroke_h")]
    StrokeH,
    #[display("icon.stroke_v")]
    StrokeV,
    #[display("icon.spin")]
    IconSpin,
    #[display("caption.shift")]
    CaptionShift,
    #[display("toggle.color_mix")]
    ColorMix,
}

/// Current value of every animatable property.
///
/// Shifts are percentages of the panel width (0 = on screen), lifts and tilts
/// are the label entrance offsets, and opacities run from 0 to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub layers: Vec<f64>,
    pub panel: f64,
    pub label_lift: Vec<f64>,
    pub label_tilt: Vec<f64>,
    pub numbers: Vec<f64>,
    pub social_title: Option<f64>,
    pub social_lift: Vec<f64>,
    pub social_opacity: Vec<f64>,
    pub stroke_h: f64,
    pub stroke_v: f64,
    pub icon_spin: f64,
    pub caption_shift: f64,
    pub color_mix: f64,
}

impl Scene {
    pub fn new(layout: &MenuLayout, offscreen: f64) -> Self {
        let mut scene = Self {
            layers: Vec::new(),
            panel: offscreen,
            label_lift: Vec::new(),
            label_tilt: Vec::new(),
            numbers: Vec::new(),
            social_title: None,
            social_lift: Vec::new(),
            social_opacity: Vec::new(),
            stroke_h: 0.0,
            stroke_v: STROKE_V_REST,
            icon_spin: 0.0,
            caption_shift: 0.0,
            color_mix: 0.0,
        };
        scene.register(layout, offscreen);
        scene
    }

    /// Resizes the per-element collections to a new layout.
    ///
    /// New layers start off screen; existing layers keep their shift.
    pub fn register(&mut self, layout: &MenuLayout, offscreen: f64) {
        self.layers.resize(layout.layers, offscreen);
        self.label_lift.resize(layout.items, LABEL_LIFT_BASELINE);
        self.label_tilt.resize(layout.items, LABEL_TILT_BASELINE);
        self.numbers
            .resize(if layout.numbering { layout.items } else { 0 }, 0.0);
        self.social_title = layout.social_title.then_some(self.social_title.unwrap_or(0.0));
        self.social_lift
            .resize(layout.social_links, SOCIAL_LINK_LIFT_BASELINE);
        self.social_opacity.resize(layout.social_links, 0.0);
    }

    /// Puts labels, numbering and socials back to their pre-entrance pose.
    pub fn reset_entries(&mut self) {
        self.label_lift.fill(LABEL_LIFT_BASELINE);
        self.label_tilt.fill(LABEL_TILT_BASELINE);
        self.numbers.fill(0.0);
        if let Some(title) = self.social_title.as_mut() {
            *title = 0.0;
        }
        self.social_lift.fill(SOCIAL_LINK_LIFT_BASELINE);
        self.social_opacity.fill(0.0);
    }

    /// Moves the panel and every layer to `shift` without animating.
    pub fn park(&mut self, shift: f64) {
        self.layers.fill(shift);
        self.panel = shift;
    }

    pub fn entries_at_baseline(&self) -> bool {
        self.label_lift.iter().all(|&v| v == LABEL_LIFT_BASELINE)
            && self.label_tilt.iter().all(|&v| v == LABEL_TILT_BASELINE)
            && self.numbers.iter().all(|&v| v == 0.0)
            && self.social_title.is_none_or(|v| v == 0.0)
            && self.social_lift.iter().all(|&v| v == SOCIAL_LINK_LIFT_BASELINE)
            && self.social_opacity.iter().all(|&v| v == 0.0)
    }

    pub fn get(&self, property: Property) -> Option<f64> {
        match property {
            Property::LayerShift(i) => self.layers.get(i).copied(),
            Property::PanelShift => Some(self.panel),
            Property::LabelLift(i) => self.label_lift.get(i).copied(),
            Property::LabelTilt(i) => self.label_tilt.get(i).copied(),
            Property::NumberOpacity(i) => self.numbers.get(i).copied(),
            Property::SocialTitleOpacity => self.social_title,
            Property::SocialLinkLift(i) => self.social_lift.get(i).copied(),
            Property::SocialLinkOpacity(i) => self.social_opacity.get(i).copied(),
            Property::StrokeH => Some(self.stroke_h),
            Property::StrokeV => Some(self.stroke_v),
            Property::IconSpin => Some(self.icon_spin),
            Property::CaptionShift => Some(self.caption_shift),
            Property::ColorMix => Some(self.color_mix),
        }
    }

    /// Writes a property; targets that do not exist in the layout are ignored.
    pub fn set(&mut self, property: Property, value: f64) {
        let slot = match property {
            Property::LayerShift(i) => self.layers.get_mut(i),
            Property::PanelShift => Some(&mut self.panel),
            Property::LabelLift(i) => self.label_lift.get_mut(i),
            Property::LabelTilt(i) => self.label_tilt.get_mut(i),
            Property::NumberOpacity(i) => self.numbers.get_mut(i),
            Property::SocialTitleOpacity => self.social_title.as_mut(),
            Property::SocialLinkLift(i) => self.social_lift.get_mut(i),
            Property::SocialLinkOpacity(i) => self.social_opacity.get_mut(i),
            Property::StrokeH => Some(&mut self.stroke_h),
            Property::StrokeV => Some(&mut self.stroke_v),
            Property::IconSpin => Some(&mut self.icon_spin),
            Property::CaptionShift => Some(&mut self.caption_shift),
            Property::ColorMix => Some(&mut self.color_mix),
        };
        if let Some(slot) = slot {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> MenuLayout {
        MenuLayout {
            items: 3,
            layers: 2,
            numbering: true,
            social_title: true,
            social_links: 2,
        }
    }

    #[test]
    fn test_new_scene_is_parked_off_screen() {
        let scene = Scene::new(&layout(), 100.0);
        assert_eq!(scene.layers, vec![100.0, 100.0]);
        assert_eq!(scene.panel, 100.0);
        assert!(scene.entries_at_baseline());
        assert_eq!(scene.stroke_v, STROKE_V_REST);
    }

    #[test]
    fn test_missing_targets_are_ignored() {
        let mut scene = Scene::new(&layout(), 100.0);
        scene.set(Property::LabelLift(7), 3.0);
        assert_eq!(scene.get(Property::LabelLift(7)), None);
        assert_eq!(scene.label_lift.len(), 3);
    }

    #[test]
    fn test_register_without_numbering_drops_numbers() {
        let mut scene = Scene::new(&layout(), -100.0);
        let mut next = layout();
        next.numbering = false;
        next.social_title = false;
        next.layers = 3;
        scene.layers[0] = 0.0;
        scene.register(&next, -100.0);
        assert!(scene.numbers.is_empty());
        assert_eq!(scene.social_title, None);
        assert_eq!(scene.layers, vec![0.0, -100.0, -100.0]);
    }

    #[test]
    fn test_reset_entries() {
        let mut scene = Scene::new(&layout(), 100.0);
        scene.set(Property::LabelLift(1), 0.0);
        scene.set(Property::NumberOpacity(2), 1.0);
        scene.set(Property::SocialTitleOpacity, 1.0);
        scene.set(Property::SocialLinkOpacity(0), 0.4);
        assert!(!scene.entries_at_baseline());
        scene.reset_entries();
        assert!(scene.entries_at_baseline());
    }
}
