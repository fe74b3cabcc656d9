//! Binary Reflected Gray Code generation
//!
//! Codes are built with the reflect-and-prefix recursion:
//!
//! ```text
//! G(0) = ["0"]
//! G(1) = ["0", "1"]
//! G(n) = ["0" + c for c in G(n-1)] ++ ["1" + c for c in reverse(G(n-1))]
//! ```
//!
//! Reversing the second half makes the junction between the halves (and the
//! wrap from last back to first) differ only in the leading bit.
//!
//! [`generate_traced`] additionally reports each call to a [`TraceSink`] so the
//! recursion can be narrated; the returned codes are identical either way.

pub mod trace;

pub use trace::{BaseCase, NoTrace, TraceEvent, TraceSink};

/// Generate the `n`-bit Gray code sequence.
///
/// Returns `2^n` codes for `n >= 1`, and the single code `"0"` for `n == 0`.
pub fn generate(n: u32) -> Vec<String> {
    generate_traced(n, &mut NoTrace)
}

/// Generate the `n`-bit Gray code sequence, narrating each call to `sink`.
pub fn generate_traced<S: TraceSink + ?Sized>(n: u32, sink: &mut S) -> Vec<String> {
    let codes = build(n, 0, sink);
    tracing::debug!(n, len = codes.len(), "generated gray code sequence");
    codes
}

fn build<S: TraceSink + ?Sized>(n: u32, depth: usize, sink: &mut S) -> Vec<String> {
    sink.record(TraceEvent::CallEntered { depth, n });

    for case in [BaseCase::Zero, BaseCase::One] {
        let passed = n == case.width();
        sink.record(TraceEvent::BaseCheck {
            depth,
            case,
            passed,
        });
        if passed {
            let codes = base_codes(case);
            if sink.enabled() {
                sink.record(TraceEvent::BaseReturned {
                    depth,
                    codes: codes.clone(),
                });
            }
            return codes;
        }
    }

    sink.record(TraceEvent::Recursing { depth, next: n - 1 });
    let smaller = build(n - 1, depth + 1, sink);

    let original: Vec<String> = smaller.iter().map(|code| prefixed('0', code)).collect();
    let reflected: Vec<String> = smaller
        .iter()
        .rev()
        .map(|code| prefixed('1', code))
        .collect();

    if sink.enabled() {
        sink.record(TraceEvent::HalvesComputed {
            depth,
            original: original.clone(),
            reflected: reflected.clone(),
        });
    }

    let mut codes = original;
    codes.extend(reflected);
    codes
}

fn base_codes(case: BaseCase) -> Vec<String> {
    match case {
        BaseCase::Zero => vec!["0".to_string()],
        BaseCase::One => vec!["0".to_string(), "1".to_string()],
    }
}

fn prefixed(bit: char, code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 1);
    out.push(bit);
    out.push_str(code);
    out
}
