use crate::ease::Ease;
use crate::layout::Position;
use crate::scene::{Property, Scene};
use crate::timeline::Timeline;

pub const CLOSE_DURATION: f64 = 0.32;

/// Slides the panel and its layers back off screen, all at once.
pub struct ClosingAnimator {
    offscreen: f64,
}

impl ClosingAnimator {
    pub fn new(position: Position) -> Self {
        Self {
            offscreen: position.offscreen(),
        }
    }

    pub fn build(&self, scene: &Scene) -> Timeline {
        let mut timeline = Timeline::new();
        for (i, &shift) in scene.layers.iter().enumerate() {
            timeline.from_to(
                Property::LayerShift(i),
                shift,
                self.offscreen,
                CLOSE_DURATION,
                Ease::Power3In,
                0.0,
            );
        }
        timeline.from_to(
            Property::PanelShift,
            scene.panel,
            self.offscreen,
            CLOSE_DURATION,
            Ease::Power3In,
            0.0,
        );
        timeline
    }

    /// Runs once the slide-out completes, however far the opening got.
    ///
    /// Parks everything on this animator's side, which may differ from the
    /// side the slide-out headed for if the position changed meanwhile.
    pub fn finish(&self, scene: &mut Scene) {
        scene.reset_entries();
        scene.park(self.offscreen);
    }
}
