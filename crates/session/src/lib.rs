use chrono::Utc;
use kinematics::{grade, ProblemInstance, UniformSource};
use shared::{
    domain::{AngleKind, SessionId},
    error::{ErrorCode, TrainerError},
    protocol::{CoordinateRow, ProblemReport, Verdict},
};
use tracing::{debug, info, info_span, Span};

pub mod explain;
pub mod plot;
pub mod state;

pub use explain::{explain, Explanation, PROBLEM_STATEMENT};
pub use plot::{render_svg, PlotParams};
pub use state::{SessionPhase, SessionState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    NewProblem,
    Dorsiflex,
    Reveal,
    Check { kind: AngleKind, estimate: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Problem(ProblemInstance),
    Verdict(Verdict),
    Explanation(Explanation),
}

/// Host-owned exercise session: the random source, grading tolerance, and the
/// current [`SessionState`].
pub struct Session {
    id: SessionId,
    source: Box<dyn UniformSource>,
    tolerance: f64,
    state: SessionState,
    span: Span,
}

impl Session {
    pub fn new(source: impl UniformSource + 'static, tolerance: f64) -> Result<Self, TrainerError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(TrainerError::new(
                ErrorCode::Config,
                format!("tolerance must be a non-negative number, got {tolerance}"),
            ));
        }

        let id = SessionId::new();
        let span = info_span!("session", id = %id);
        let mut source: Box<dyn UniformSource> = Box::new(source);
        let problem = {
            let _guard = span.enter();
            let problem = ProblemInstance::generic(source.as_mut());
            log_problem(&problem);
            problem
        };

        Ok(Self {
            id,
            source,
            tolerance,
            state: SessionState::new(problem),
            span,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn problem(&self) -> &ProblemInstance {
        self.state.problem()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    pub fn apply(&mut self, action: Action) -> Result<Outcome, TrainerError> {
        let span = self.span.clone();
        let _guard = span.enter();

        match action {
            Action::NewProblem => {
                let problem = ProblemInstance::generic(self.source.as_mut());
                log_problem(&problem);
                self.state = self.state.replace_problem(problem.clone());
                Ok(Outcome::Problem(problem))
            }
            Action::Dorsiflex => {
                let problem = self.state.problem().dorsiflexed(self.source.as_mut());
                log_problem(&problem);
                self.state = self.state.replace_problem(problem.clone());
                Ok(Outcome::Problem(problem))
            }
            Action::Reveal => {
                info!("explanation revealed");
                self.state = self.state.reveal();
                Ok(Outcome::Explanation(explain(self.state.problem())))
            }
            Action::Check { kind, estimate } => {
                if !estimate.is_finite() {
                    return Err(TrainerError::validation(format!(
                        "{kind} estimate must be a finite number"
                    )));
                }
                let reference = self.state.problem().reference(kind);
                let verdict = grade(kind, estimate, reference, self.tolerance);
                debug!(
                    kind = kind.name(),
                    estimate,
                    correct = verdict.correct,
                    "answer checked"
                );
                self.state = self.state.answered();
                Ok(Outcome::Verdict(verdict))
            }
        }
    }
}

fn log_problem(problem: &ProblemInstance) {
    let angles = problem.angles();
    info!(variant = ?problem.variant(), "problem generated");
    debug!(
        leg = angles.leg,
        foot = angles.foot,
        ankle = angles.ankle,
        "reference angles"
    );
}

/// Snapshot of a problem for display or export, with answers only on request.
pub fn report(problem: &ProblemInstance, include_answers: bool) -> ProblemReport {
    ProblemReport {
        variant: problem.variant(),
        generated_at: Utc::now(),
        coordinates: CoordinateRow::rows(problem.landmarks()),
        answers: include_answers.then(|| problem.angles()),
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
