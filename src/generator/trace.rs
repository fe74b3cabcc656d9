//! Recursion trace events
//!
//! The generator narrates each call as a flat stream of [`TraceEvent`]s. Every
//! event carries the recursion depth so a renderer can rebuild the call tree
//! without sharing any state with the generator. Codes inside events are plain
//! `'0'`/`'1'` strings; emphasis on the prepended bit is the renderer's job.

/// Which base case a check event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCase {
    Zero,
    One,
}

impl BaseCase {
    /// The bit-width this base case matches
    pub fn width(self) -> u32 {
        match self {
            BaseCase::Zero => 0,
            BaseCase::One => 1,
        }
    }
}

/// One step of the recursion narration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A call was entered with bit-width `n`
    CallEntered { depth: usize, n: u32 },

    /// A base-case test was evaluated
    BaseCheck {
        depth: usize,
        case: BaseCase,
        passed: bool,
    },

    /// A base case matched and returned `codes`
    BaseReturned { depth: usize, codes: Vec<String> },

    /// The call is about to recurse on `n - 1`
    Recursing { depth: usize, next: u32 },

    /// The recursive call returned and both halves were built
    HalvesComputed {
        depth: usize,
        original: Vec<String>,
        reflected: Vec<String>,
    },
}

/// Receiver for trace events
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);

    /// Whether events are wanted at all; lets the generator skip cloning halves
    fn enabled(&self) -> bool {
        true
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _event: TraceEvent) {}

    fn enabled(&self) -> bool {
        false
    }
}

impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
