//! Exercise lifecycle as immutable state values.

use kinematics::ProblemInstance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    FreshProblem,
    AwaitingAnswers,
    Revealed,
}

/// Current problem plus where the learner is with it. Every transition returns
/// a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    problem: ProblemInstance,
    phase: SessionPhase,
}

impl SessionState {
    pub fn new(problem: ProblemInstance) -> Self {
        Self {
            problem,
            phase: SessionPhase::FreshProblem,
        }
    }

    pub fn problem(&self) -> &ProblemInstance {
        &self.problem
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == SessionPhase::Revealed
    }

    pub fn reveal(&self) -> Self {
        Self {
            problem: self.problem.clone(),
            phase: SessionPhase::Revealed,
        }
    }

    /// A checked answer moves a fresh problem into `AwaitingAnswers`; later
    /// phases are kept.
    pub fn answered(&self) -> Self {
        let phase = match self.phase {
            SessionPhase::FreshProblem => SessionPhase::AwaitingAnswers,
            other => other,
        };
        Self {
            problem: self.problem.clone(),
            phase,
        }
    }

    pub fn replace_problem(&self, problem: ProblemInstance) -> Self {
        Self::new(problem)
    }
}
