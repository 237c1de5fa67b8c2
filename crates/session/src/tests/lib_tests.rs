use kinematics::{RandomSource, DEFAULT_TOLERANCE};
use shared::domain::{Landmark, ProblemVariant};

use super::*;

/// Always picks the middle of the requested range.
struct MidpointSource;

impl UniformSource for MidpointSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (low + high) / 2.0
    }
}

fn seeded_session(seed: u64) -> Session {
    Session::new(RandomSource::seeded(seed), DEFAULT_TOLERANCE).expect("session")
}

fn verdict(outcome: Outcome) -> Verdict {
    match outcome {
        Outcome::Verdict(verdict) => verdict,
        other => panic!("expected verdict, got {other:?}"),
    }
}

#[test]
fn rejects_negative_or_nan_tolerance() {
    for tolerance in [-0.1, f64::NAN, f64::INFINITY] {
        let err = Session::new(MidpointSource, tolerance)
            .err()
            .expect("should fail");
        assert_eq!(err.code, ErrorCode::Config);
    }
}

#[test]
fn starts_with_fresh_generic_problem() {
    let session = Session::new(MidpointSource, DEFAULT_TOLERANCE).expect("session");
    let landmarks = session.problem().landmarks();

    assert_eq!(session.phase(), SessionPhase::FreshProblem);
    assert_eq!(session.problem().variant(), ProblemVariant::Generic);
    assert_eq!(landmarks.lateral_epicondyle.x, 0.15);
    assert_eq!(landmarks.lateral_malleolus.y, 0.25);
    assert_eq!(session.tolerance(), DEFAULT_TOLERANCE);
}

#[test]
fn correct_answer_moves_to_awaiting_answers() {
    let mut session = seeded_session(1);
    let reference = session.problem().angles().leg;

    let verdict = verdict(
        session
            .apply(Action::Check {
                kind: AngleKind::Leg,
                estimate: reference,
            })
            .expect("check"),
    );

    assert!(verdict.correct);
    assert_eq!(verdict.reference, reference);
    assert_eq!(session.phase(), SessionPhase::AwaitingAnswers);
}

#[test]
fn wrong_answer_reports_reference() {
    let mut session = seeded_session(2);
    let reference = session.problem().angles().ankle;

    let verdict = verdict(
        session
            .apply(Action::Check {
                kind: AngleKind::Ankle,
                estimate: reference + 5.0,
            })
            .expect("check"),
    );

    assert!(!verdict.correct);
    assert!(verdict.message.starts_with("Incorrect."));
    assert!(verdict.message.contains(&format!("{reference:.1}°")));
}

#[test]
fn non_finite_estimate_is_rejected_without_changing_state() {
    let mut session = seeded_session(3);
    let err = session
        .apply(Action::Check {
            kind: AngleKind::Foot,
            estimate: f64::NAN,
        })
        .expect_err("should fail");

    assert_eq!(err.code, ErrorCode::Validation);
    assert_eq!(session.phase(), SessionPhase::FreshProblem);
}

#[test]
fn reveal_returns_worked_explanation() {
    let mut session = seeded_session(4);
    let outcome = session.apply(Action::Reveal).expect("reveal");

    let Outcome::Explanation(explanation) = outcome else {
        panic!("expected explanation");
    };
    assert_eq!(explanation.sections.len(), 3);
    assert_eq!(session.phase(), SessionPhase::Revealed);
}

#[test]
fn new_problem_resets_reveal() {
    let mut session = seeded_session(5);
    session.apply(Action::Reveal).expect("reveal");
    let before = session.problem().clone();

    let outcome = session.apply(Action::NewProblem).expect("new problem");

    assert_eq!(session.phase(), SessionPhase::FreshProblem);
    assert_ne!(session.problem(), &before);
    assert_eq!(outcome, Outcome::Problem(session.problem().clone()));
}

#[test]
fn dorsiflex_keeps_leg_and_lowers_heel() {
    let mut session = seeded_session(6);
    session
        .apply(Action::Check {
            kind: AngleKind::Leg,
            estimate: 0.0,
        })
        .expect("check");
    let before = session.problem().clone();

    session.apply(Action::Dorsiflex).expect("dorsiflex");
    let after = session.problem();

    assert_eq!(session.phase(), SessionPhase::FreshProblem);
    assert_eq!(after.variant(), ProblemVariant::Dorsiflexed);
    for landmark in [Landmark::LateralEpicondyle, Landmark::LateralMalleolus] {
        assert_eq!(
            after.landmarks().get(landmark),
            before.landmarks().get(landmark)
        );
    }
    assert_eq!(after.angles().leg, before.angles().leg);
    let expected_heel = ((before.landmarks().lateral_malleolus.y - 0.05) * 1000.0).round() / 1000.0;
    assert_eq!(after.landmarks().calcaneus.y, expected_heel);
}

#[test]
fn same_seed_gives_same_problem_sequence() {
    let mut first = seeded_session(99);
    let mut second = seeded_session(99);
    assert_eq!(first.problem(), second.problem());

    for action in [Action::NewProblem, Action::Dorsiflex, Action::NewProblem] {
        assert_eq!(
            first.apply(action).expect("first"),
            second.apply(action).expect("second")
        );
    }
    assert_ne!(first.id(), second.id());
}

#[test]
fn report_includes_answers_only_on_request() {
    let session = seeded_session(7);

    let hidden = report(session.problem(), false);
    assert!(hidden.answers.is_none());
    assert_eq!(hidden.coordinates.len(), 4);

    let shown = report(session.problem(), true);
    assert_eq!(shown.answers, Some(session.problem().angles()));

    let json = serde_json::to_value(&shown).expect("json");
    assert_eq!(json["answers"]["leg"], session.problem().angles().leg);
}
