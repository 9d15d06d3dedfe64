use crate::ease::Ease;
use crate::layout::MenuLayout;
use crate::scene::{Property, Scene};
use crate::timeline::Timeline;

pub const LAYER_STAGGER: f64 = 0.07;
pub const LAYER_DURATION: f64 = 0.5;
pub const PANEL_GAP: f64 = 0.08;
pub const PANEL_DURATION: f64 = 0.65;
pub const ITEMS_START_RATIO: f64 = 0.15;
pub const ITEM_STAGGER: f64 = 0.1;
pub const ITEM_DURATION: f64 = 1.0;
pub const NUMBER_DELAY: f64 = 0.1;
pub const NUMBER_STAGGER: f64 = 0.08;
pub const NUMBER_DURATION: f64 = 0.6;
pub const SOCIALS_START_RATIO: f64 = 0.4;
pub const SOCIAL_TITLE_DURATION: f64 = 0.5;
pub const SOCIAL_LINK_DELAY: f64 = 0.04;
pub const SOCIAL_LINK_STAGGER: f64 = 0.08;
pub const SOCIAL_LINK_DURATION: f64 = 0.55;

/// Builds the opening timeline: layers sweep in one after another, the panel
/// follows the last layer, then labels, numbering and socials rise into place.
///
/// Everything sits on one clock so the stages cannot drift apart.
pub struct TimelineBuilder<'a> {
    layout: &'a MenuLayout,
}

impl<'a> TimelineBuilder<'a> {
    pub fn new(layout: &'a MenuLayout) -> Self {
        Self { layout }
    }

    pub fn layer_start(index: usize) -> f64 {
        index as f64 * LAYER_STAGGER
    }

    /// When the panel starts moving. Collapses to zero without layers.
    pub fn panel_start(&self) -> f64 {
        match self.layout.layers {
            0 => 0.0,
            n => Self::layer_start(n - 1) + PANEL_GAP,
        }
    }

    pub fn items_start(&self) -> f64 {
        self.panel_start() + PANEL_DURATION * ITEMS_START_RATIO
    }

    pub fn socials_start(&self) -> f64 {
        self.panel_start() + PANEL_DURATION * SOCIALS_START_RATIO
    }

    /// Puts every entry in its pre-entrance pose and returns the timeline.
    ///
    /// Layers and the panel move from wherever they currently are.
    pub fn build(&self, scene: &mut Scene) -> Timeline {
        scene.reset_entries();
        let mut timeline = Timeline::new();

        for (i, &shift) in scene.layers.iter().enumerate() {
            timeline.from_to(
                Property::LayerShift(i),
                shift,
                0.0,
                LAYER_DURATION,
                Ease::Power4Out,
                Self::layer_start(i),
            );
        }

        let panel_start = self.panel_start();
        timeline.from_to(
            Property::PanelShift,
            scene.panel,
            0.0,
            PANEL_DURATION,
            Ease::Power4Out,
            panel_start,
        );

        self.add_items(&mut timeline);
        self.add_socials(&mut timeline, scene);
        timeline
    }

    fn add_items(&self, timeline: &mut Timeline) {
        let items_start = self.items_start();
        for i in 0..self.layout.items {
            let at = items_start + i as f64 * ITEM_STAGGER;
            timeline
                .to(Property::LabelLift(i), 0.0, ITEM_DURATION, Ease::Power4Out, at)
                .to(Property::LabelTilt(i), 0.0, ITEM_DURATION, Ease::Power4Out, at);
        }

        let numbers_start = items_start + NUMBER_DELAY;
        for i in 0..self.layout.numbered_items() {
            timeline.to(
                Property::NumberOpacity(i),
                1.0,
                NUMBER_DURATION,
                Ease::Power2Out,
                numbers_start + i as f64 * NUMBER_STAGGER,
            );
        }
    }

    fn add_socials(&self, timeline: &mut Timeline, scene: &Scene) {
        let socials_start = self.socials_start();
        if scene.social_title.is_some() {
            timeline.to(
                Property::SocialTitleOpacity,
                1.0,
                SOCIAL_TITLE_DURATION,
                Ease::Power2Out,
                socials_start,
            );
        }

        let links_start = socials_start + SOCIAL_LINK_DELAY;
        for i in 0..self.layout.social_links {
            let at = links_start + i as f64 * SOCIAL_LINK_STAGGER;
            timeline
                .to(
                    Property::SocialLinkLift(i),
                    0.0,
                    SOCIAL_LINK_DURATION,
                    Ease::Power3Out,
                    at,
                )
                .to(
                    Property::SocialLinkOpacity(i),
                    1.0,
                    SOCIAL_LINK_DURATION,
                    Ease::Power3Out,
                    at,
                );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::LABEL_LIFT_BASELINE;
    use std::time::Duration;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("missing tween");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    fn layout(items: usize, layers: usize) -> MenuLayout {
        MenuLayout {
            items,
            layers,
            numbering: true,
            social_title: true,
            social_links: 2,
        }
    }

    #[test]
    fn test_three_layers_stagger_before_panel() {
        let layout = layout(4, 3);
        let mut scene = Scene::new(&layout, 100.0);
        let timeline = TimelineBuilder::new(&layout).build(&mut scene);

        assert_close(timeline.start_of(Property::LayerShift(0)), 0.0);
        assert_close(timeline.start_of(Property::LayerShift(1)), 0.07);
        assert_close(timeline.start_of(Property::LayerShift(2)), 0.14);
        assert_close(timeline.start_of(Property::PanelShift), 0.22);
    }

    #[test]
    fn test_no_layers_starts_panel_immediately() {
        let layout = layout(4, 0);
        let mut scene = Scene::new(&layout, 100.0);
        let timeline = TimelineBuilder::new(&layout).build(&mut scene);

        assert_close(timeline.start_of(Property::PanelShift), 0.0);
        assert_eq!(timeline.start_of(Property::LayerShift(0)), None);
    }

    #[test]
    fn test_items_numbers_and_socials_follow_panel() {
        let layout = layout(3, 2);
        let mut scene = Scene::new(&layout, 100.0);
        let timeline = TimelineBuilder::new(&layout).build(&mut scene);

        // panel at 0.15, items from 0.15 + 0.65 * 0.15
        let items_start = 0.15 + 0.0975;
        assert_close(timeline.start_of(Property::LabelLift(0)), items_start);
        assert_close(timeline.start_of(Property::LabelTilt(2)), items_start + 0.2);
        assert_close(
            timeline.start_of(Property::NumberOpacity(1)),
            items_start + 0.1 + 0.08,
        );

        let socials_start = 0.15 + 0.26;
        assert_close(timeline.start_of(Property::SocialTitleOpacity), socials_start);
        assert_close(
            timeline.start_of(Property::SocialLinkOpacity(1)),
            socials_start + 0.04 + 0.08,
        );
    }

    #[test]
    fn test_numbering_disabled_skips_numbers() {
        let mut layout = layout(3, 2);
        layout.numbering = false;
        let mut scene = Scene::new(&layout, 100.0);
        let timeline = TimelineBuilder::new(&layout).build(&mut scene);
        assert_eq!(timeline.start_of(Property::NumberOpacity(0)), None);
    }

    #[test]
    fn test_layers_start_from_current_shift() {
        let layout = layout(1, 2);
        let mut scene = Scene::new(&layout, 100.0);
        scene.layers[1] = 40.0;
        let mut timeline = TimelineBuilder::new(&layout).build(&mut scene);

        // layer 1 has not started yet, layer 0 is already moving
        timeline.advance(Duration::from_millis(50), &mut scene);
        assert!(scene.layers[0] < 100.0);
        assert_eq!(scene.layers[1], 40.0);
    }

    #[test]
    fn test_build_resets_entries_and_finishes_in_place() {
        let layout = layout(2, 2);
        let mut scene = Scene::new(&layout, -100.0);
        scene.label_lift[0] = 3.0;

        let mut timeline = TimelineBuilder::new(&layout).build(&mut scene);
        assert_eq!(scene.label_lift[0], LABEL_LIFT_BASELINE);

        let total = Duration::from_secs_f64(timeline.duration() + 1.0);
        timeline.advance(total, &mut scene);
        assert_eq!(scene.panel, 0.0);
        assert!(scene.layers.iter().all(|&l| l == 0.0));
        assert!(scene.label_lift.iter().all(|&l| l == 0.0));
        assert!(scene.numbers.iter().all(|&n| n == 1.0));
        assert_eq!(scene.social_title, Some(1.0));
        assert!(scene.social_opacity.iter().all(|&o| o == 1.0));
    }
}
