//! Bit-change animation
//!
//! Given a finished code sequence, the visualizer works out which bit flips
//! between every adjacent pair and between the last and first codes, and turns
//! each flip into an [`AnimationStep`]: a per-row highlight mask over the whole
//! sequence.
//!
//! # Step order
//!
//! 1. One initial step with nothing highlighted
//! 2. For each forward pair `(i-1, i)`, one step per differing position
//! 3. For the wrap pair `(last, first)`, one step per differing position
//!
//! A valid Gray code yields exactly one position per pair, but every differing
//! position is enumerated and gets its own step.
//!
//! [`compute_steps`] is pure. [`animate`] feeds the steps through
//! [`schedule`] to a [`FramePresenter`], which owns the timing.

pub mod markup;
pub mod schedule;

pub use markup::{differing_positions, plain_codes, strip_markup};
pub use schedule::{schedule, FramePresenter, ScheduledFrame};

use crate::error::{GrayError, Result};
use std::time::Duration;

/// Which adjacency a transition belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Forward,
    Wrap,
}

/// A single highlighted bit flip between rows `from` and `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub kind: TransitionKind,
    pub from: usize,
    pub to: usize,
    pub position: usize,
}

/// One animation frame's worth of highlighting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStep {
    /// `None` for the initial, unhighlighted step
    pub transition: Option<Transition>,
    mask: Vec<Vec<bool>>,
}

impl AnimationStep {
    /// A step with `rows` codes of `width` bits and nothing highlighted
    pub fn initial(rows: usize, width: usize) -> Self {
        AnimationStep {
            transition: None,
            mask: vec![vec![false; width]; rows],
        }
    }

    fn highlighting(transition: Transition, rows: usize, width: usize) -> Self {
        let mut step = AnimationStep::initial(rows, width);
        step.mask[transition.from][transition.position] = true;
        step.mask[transition.to][transition.position] = true;
        step.transition = Some(transition);
        step
    }

    /// Per-row highlight masks, one `bool` per bit
    pub fn mask(&self) -> &[Vec<bool>] {
        &self.mask
    }

    pub fn is_highlighted(&self, row: usize, position: usize) -> bool {
        self.mask
            .get(row)
            .and_then(|bits| bits.get(position))
            .copied()
            .unwrap_or(false)
    }

    /// Highlighted positions within `row`
    pub fn highlighted_positions(&self, row: usize) -> Vec<usize> {
        self.mask
            .get(row)
            .map(|bits| {
                bits.iter()
                    .enumerate()
                    .filter(|(_, lit)| **lit)
                    .map(|(pos, _)| pos)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Rows with at least one highlighted position
    pub fn highlighted_rows(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, bits)| bits.iter().any(|lit| *lit))
            .map(|(row, _)| row)
            .collect()
    }
}

/// Compute the full step list for `codes`.
///
/// Markup is stripped first, so only data bits are compared. Fails on an
/// empty sequence or on codes of unequal length.
pub fn compute_steps<S: AsRef<str>>(codes: &[S]) -> Result<Vec<AnimationStep>> {
    let plain = plain_codes(codes);
    steps_for_plain(&plain)
}

fn steps_for_plain(plain: &[String]) -> Result<Vec<AnimationStep>> {
    let first = plain.first().ok_or(GrayError::EmptySequence)?;
    let rows = plain.len();
    let width = first.chars().count();

    // Validate every length before emitting anything.
    for (index, code) in plain.iter().enumerate().skip(1) {
        let got = code.chars().count();
        if got != width {
            return Err(GrayError::LengthMismatch {
                index,
                expected: width,
                got,
            });
        }
    }

    let mut steps = vec![AnimationStep::initial(rows, width)];

    for to in 1..rows {
        let from = to - 1;
        for position in differing_positions(&plain[from], &plain[to], to)? {
            let transition = Transition {
                kind: TransitionKind::Forward,
                from,
                to,
                position,
            };
            steps.push(AnimationStep::highlighting(transition, rows, width));
        }
    }

    let last = rows - 1;
    for position in differing_positions(first, &plain[last], last)? {
        let transition = Transition {
            kind: TransitionKind::Wrap,
            from: last,
            to: 0,
            position,
        };
        steps.push(AnimationStep::highlighting(transition, rows, width));
    }

    Ok(steps)
}

/// Animate the bit changes of `codes`, `cycles` times over, through `presenter`.
///
/// The presenter receives the plain codes alongside every frame.
pub fn animate<S, P>(codes: &[S], delay: Duration, cycles: usize, presenter: &mut P) -> Result<()>
where
    S: AsRef<str>,
    P: FramePresenter + ?Sized,
{
    let plain = plain_codes(codes);
    let steps = steps_for_plain(&plain)?;
    tracing::debug!(
        codes = plain.len(),
        steps = steps.len(),
        cycles,
        "starting bit-change animation"
    );

    for frame in schedule(&steps, delay, cycles) {
        presenter.present(&plain, &frame)?;
    }
    presenter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_code_has_only_the_initial_step() {
        let steps = compute_steps(&["0"]).unwrap();
        assert_eq!(steps.len(), 1);
        assert!(steps[0].transition.is_none());
        assert!(steps[0].highlighted_rows().is_empty());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let codes: Vec<String> = Vec::new();
        assert!(matches!(
            compute_steps(&codes),
            Err(GrayError::EmptySequence)
        ));
    }

    #[test]
    fn multi_bit_transition_gets_one_step_per_bit() {
        // 00 -> 11 flips both bits; 11 -> 00 on the wrap flips both again
        let steps = compute_steps(&["00", "11"]).unwrap();
        assert_eq!(steps.len(), 1 + 2 + 2);

        let forward: Vec<_> = steps[1..3].iter().map(|s| s.transition.unwrap()).collect();
        assert_eq!(forward[0].position, 0);
        assert_eq!(forward[1].position, 1);
        assert!(forward.iter().all(|t| t.kind == TransitionKind::Forward));

        for step in &steps[1..] {
            assert_eq!(step.highlighted_rows(), vec![0, 1]);
            assert_eq!(step.highlighted_positions(0).len(), 1);
        }
    }

    #[test]
    fn wrap_step_highlights_last_and_first() {
        let steps = compute_steps(&["0", "1"]).unwrap();
        let wrap = steps.last().unwrap();
        assert_eq!(
            wrap.transition,
            Some(Transition {
                kind: TransitionKind::Wrap,
                from: 1,
                to: 0,
                position: 0
            })
        );
        assert!(wrap.is_highlighted(0, 0));
        assert!(wrap.is_highlighted(1, 0));
    }

    #[test]
    fn unequal_lengths_fail_before_any_step() {
        let err = compute_steps(&["00", "01", "1"]).unwrap_err();
        assert!(matches!(
            err,
            GrayError::LengthMismatch {
                index: 2,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn markup_does_not_count_as_bits() {
        let colored = ["\u{1b}[34m0\u{1b}[0m0", "\u{1b}[34m0\u{1b}[0m1"];
        let steps = compute_steps(&colored).unwrap();
        assert_eq!(steps[0].mask()[0].len(), 2);
        assert_eq!(steps[1].transition.unwrap().position, 1);
    }
}
