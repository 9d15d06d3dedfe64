use crate::ease::Ease;
use crate::scene::{Property, STROKE_V_REST, Scene};
use crate::timeline::{self, Timeline};
use std::time::Duration;

pub const OPEN_ANGLE: f64 = 45.0;
pub const OPEN_DURATION: f64 = 0.5;
pub const CLOSE_DURATION: f64 = 0.35;
pub const SPIN_RESET_DURATION: f64 = 0.001;

/// Morphs the toggle's plus glyph into a cross and back.
#[derive(Debug, Clone, Default)]
pub struct IconMorphAnimator {
    timeline: Option<Timeline>,
}

impl IconMorphAnimator {
    pub fn start(&mut self, opening: bool, scene: &mut Scene) {
        let mut timeline = Timeline::new();
        if opening {
            scene.icon_spin = 0.0;
            timeline
                .to(Property::StrokeH, OPEN_ANGLE, OPEN_DURATION, Ease::Power4Out, 0.0)
                .to(Property::StrokeV, -OPEN_ANGLE, OPEN_DURATION, Ease::Power4Out, 0.0);
        } else {
            // the wrapper snaps back so spins never pile up across toggles
            timeline
                .to(Property::StrokeH, 0.0, CLOSE_DURATION, Ease::Power3InOut, 0.0)
                .to(Property::StrokeV, STROKE_V_REST, CLOSE_DURATION, Ease::Power3InOut, 0.0)
                .to(Property::IconSpin, 0.0, SPIN_RESET_DURATION, Ease::Power3InOut, 0.0);
        }
        self.timeline = Some(timeline);
    }

    pub fn tick(&mut self, delta: Duration, scene: &mut Scene) {
        timeline::drive(&mut self.timeline, delta, scene);
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_some()
    }
}
