use crate::ease::Ease;
use crate::scene::{Property, Scene};
use std::time::Duration;

#[derive(Debug, Clone)]
struct Tween {
    property: Property,
    from: Option<f64>,
    to: f64,
    start: f64,
    duration: f64,
    ease: Ease,
}

impl Tween {
    fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn render(&mut self, elapsed: f64, scene: &mut Scene) {
        if elapsed < self.start {
            return;
        }
        // `to` tweens pick up wherever the property is when the clock first reaches them
        let (property, to) = (self.property, self.to);
        let from = *self
            .from
            .get_or_insert_with(|| scene.get(property).unwrap_or(to));
        let progress = if self.duration > 0.0 {
            ((elapsed - self.start) / self.duration).min(1.0)
        } else {
            1.0
        };
        scene.set(property, from + (to - from) * self.ease.apply(progress));
    }
}

/// Placement of one tween inside a timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenShape {
    pub property: Property,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Running,
    Finished,
}

/// A set of tweens played from one shared clock.
///
/// Dropping a timeline kills it: values stay wherever the last tick left them.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    elapsed: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_to(
        &mut self,
        property: Property,
        from: f64,
        to: f64,
        duration: f64,
        ease: Ease,
        at: f64,
    ) -> &mut Self {
        self.push(property, Some(from), to, duration, ease, at)
    }

    pub fn to(
        &mut self,
        property: Property,
        to: f64,
        duration: f64,
        ease: Ease,
        at: f64,
    ) -> &mut Self {
        self.push(property, None, to, duration, ease, at)
    }

    fn push(
        &mut self,
        property: Property,
        from: Option<f64>,
        to: f64,
        duration: f64,
        ease: Ease,
        at: f64,
    ) -> &mut Self {
        self.tweens.push(Tween {
            property,
            from,
            to,
            start: at.max(0.0),
            duration: duration.max(0.0),
            ease,
        });
        self
    }

    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn shape(&self) -> Vec<TweenShape> {
        self.tweens
            .iter()
            .map(|t| TweenShape {
                property: t.property,
                start: t.start,
                duration: t.duration,
            })
            .collect()
    }

    /// Start offset of the first tween driving `property`.
    pub fn start_of(&self, property: Property) -> Option<f64> {
        self.tweens
            .iter()
            .find(|t| t.property == property)
            .map(|t| t.start)
    }

    pub fn advance(&mut self, delta: Duration, scene: &mut Scene) -> Playback {
        self.elapsed += delta.as_secs_f64();
        for tween in &mut self.tweens {
            tween.render(self.elapsed, scene);
        }

        if self.elapsed >= self.duration() {
            Playback::Finished
        } else {
            Playback::Running
        }
    }
}

/// Advances the timeline held in `slot`, clearing the slot once it finishes.
///
/// Returns `true` on the tick the timeline completes.
pub fn drive(slot: &mut Option<Timeline>, delta: Duration, scene: &mut Scene) -> bool {
    let Some(timeline) = slot.as_mut() else {
        return false;
    };
    match timeline.advance(delta, scene) {
        Playback::Finished => {
            *slot = None;
            true
        }
        Playback::Running => false,
    }
}
