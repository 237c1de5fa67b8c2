use shared::{domain::AngleKind, protocol::Verdict};

/// Matches the one-decimal rounding of the reference angles.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

pub fn is_correct(estimate: f64, reference: f64, tolerance: f64) -> bool {
    (estimate - reference).abs() <= tolerance
}

pub fn grade(kind: AngleKind, estimate: f64, reference: f64, tolerance: f64) -> Verdict {
    let correct = is_correct(estimate, reference, tolerance);
    let message = if correct {
        format!("Correct! The {kind} is {reference:.1}°.")
    } else {
        format!("Incorrect. The correct {kind} is {reference:.1}°.")
    };

    Verdict {
        kind,
        estimate,
        reference,
        tolerance,
        correct,
        message,
    }
}

#[cfg(test)]
#[path = "tests/grading_tests.rs"]
mod tests;
