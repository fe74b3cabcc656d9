//! Frame scheduling
//!
//! Step computation knows nothing about time. [`schedule`] turns a step list
//! into `(frame, hold)` pairs repeated once per cycle, and a
//! [`FramePresenter`] draws each frame and decides how to wait out its hold.

use super::AnimationStep;
use crate::error::Result;
use std::time::Duration;

/// One frame of the looping animation
#[derive(Debug, Clone, Copy)]
pub struct ScheduledFrame<'a> {
    pub step: &'a AnimationStep,
    /// Index of `step` within one cycle
    pub index: usize,
    /// Steps per cycle
    pub total: usize,
    /// Zero-based cycle number
    pub cycle: usize,
    pub cycles: usize,
    /// How long the frame stays on screen
    pub hold: Duration,
}

/// Repeat `steps` `cycles` times, holding each frame for `delay`
pub fn schedule(
    steps: &[AnimationStep],
    delay: Duration,
    cycles: usize,
) -> impl Iterator<Item = ScheduledFrame<'_>> {
    let total = steps.len();
    (0..cycles).flat_map(move |cycle| {
        steps
            .iter()
            .enumerate()
            .map(move |(index, step)| ScheduledFrame {
                step,
                index,
                total,
                cycle,
                cycles,
                hold: delay,
            })
    })
}

/// Draws scheduled frames; owns the real-time delay between them
pub trait FramePresenter {
    /// Draw `frame` over the previous one, then wait out `frame.hold`
    fn present(&mut self, codes: &[String], frame: &ScheduledFrame<'_>) -> Result<()>;

    /// Called once after the last frame of the last cycle
    fn finish(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_every_step_per_cycle() {
        let steps = vec![AnimationStep::initial(2, 1); 3];
        let frames: Vec<_> = schedule(&steps, Duration::from_millis(5), 2).collect();

        assert_eq!(frames.len(), 6);
        assert_eq!(
            frames.iter().map(|f| (f.cycle, f.index)).collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
        assert!(frames.iter().all(|f| f.hold == Duration::from_millis(5)));
        assert!(frames.iter().all(|f| f.total == 3 && f.cycles == 2));
    }

    #[test]
    fn zero_cycles_schedules_nothing() {
        let steps = vec![AnimationStep::initial(2, 1)];
        assert_eq!(schedule(&steps, Duration::ZERO, 0).count(), 0);
    }
}
