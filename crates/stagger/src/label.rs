use crate::ease::Ease;
use crate::scene::{Property, Scene};
use crate::timeline::{self, Timeline};
use std::time::Duration;

/// Flips shown before the caption settles. Hand-tuned, hence configurable.
pub const DEFAULT_CYCLES: usize = 3;
/// Upper bound for user-supplied cycle counts.
pub const MAX_CYCLES: usize = 12;
pub const BASE_DURATION: f64 = 0.5;
pub const STEP_DURATION: f64 = 0.07;

/// Words the toggle caption flips through, starting at `current`.
///
/// After `cycles` alternations the target is appended unless it is already
/// last, and then appended once more so the resting line is always the target.
pub fn cycle_sequence(current: &str, target: &str, cycles: usize) -> Vec<String> {
    let mut sequence = vec![current.to_string()];
    let mut last = current;
    for _ in 0..cycles {
        last = if last == current { target } else { current };
        sequence.push(last.to_string());
    }
    if last != target {
        sequence.push(target.to_string());
    }
    sequence.push(target.to_string());
    sequence
}

/// Final caption shift for a sequence of `lines` lines, in percent.
pub fn final_shift(lines: usize) -> f64 {
    if lines == 0 {
        return 0.0;
    }
    -((lines - 1) as f64 / lines as f64) * 100.0
}

/// Longer sequences take longer so each flip keeps the same pace.
pub fn cycle_duration(lines: usize) -> f64 {
    BASE_DURATION + STEP_DURATION * lines as f64
}

/// Spins the toggle caption like a flip placard between two words.
#[derive(Debug, Clone)]
pub struct LabelCycler {
    idle: String,
    active: String,
    cycles: usize,
    lines: Vec<String>,
    timeline: Option<Timeline>,
}

impl LabelCycler {
    pub fn new(idle: impl Into<String>, active: impl Into<String>, cycles: usize) -> Self {
        let (idle, active) = (idle.into(), active.into());
        Self {
            lines: vec![idle.clone(), active.clone()],
            idle,
            active,
            cycles,
            timeline: None,
        }
    }

    pub fn start(&mut self, opening: bool, scene: &mut Scene) {
        let (current, target) = if opening {
            (&self.idle, &self.active)
        } else {
            (&self.active, &self.idle)
        };
        self.lines = cycle_sequence(current, target, self.cycles);
        scene.caption_shift = 0.0;

        let count = self.lines.len();
        let mut timeline = Timeline::new();
        timeline.to(
            Property::CaptionShift,
            final_shift(count),
            cycle_duration(count),
            Ease::Power4Out,
            0.0,
        );
        self.timeline = Some(timeline);
    }

    pub fn tick(&mut self, delta: Duration, scene: &mut Scene) {
        timeline::drive(&mut self.timeline, delta, scene);
    }

    pub fn is_animating(&self) -> bool {
        self.timeline.is_some()
    }

    /// Lines stacked in the caption; the shift selects which one is visible.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Default for LabelCycler {
    fn default() -> Self {
        Self::new("Menu", "Close", DEFAULT_CYCLES)
    }
}
