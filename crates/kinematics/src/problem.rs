use shared::{
    domain::{AngleKind, Landmarks, ProblemVariant, Segment},
    protocol::ReferenceAngles,
};

use crate::{
    angles::{absolute_angle, relative_ankle_angle},
    sampler::{generate_dorsiflexed, generate_generic, UniformSource},
};

/// One exercise: the four landmarks and the reference answers derived from
/// them. Only constructible from landmarks, so the angles never drift from the
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemInstance {
    variant: ProblemVariant,
    landmarks: Landmarks,
    angles: ReferenceAngles,
}

impl ProblemInstance {
    pub fn solve(variant: ProblemVariant, landmarks: Landmarks) -> Self {
        let (le, lm) = landmarks.endpoints(Segment::Leg);
        let (c, mt) = landmarks.endpoints(Segment::Foot);
        let leg = absolute_angle(le, lm);
        let foot = absolute_angle(c, mt);
        let ankle = relative_ankle_angle(foot, leg);

        Self {
            variant,
            landmarks,
            angles: ReferenceAngles { leg, foot, ankle },
        }
    }

    pub fn generic(source: &mut dyn UniformSource) -> Self {
        Self::solve(ProblemVariant::Generic, generate_generic(source))
    }

    /// Keeps this problem's leg and samples a dorsiflexed foot.
    pub fn dorsiflexed(&self, source: &mut dyn UniformSource) -> Self {
        let (le, lm) = self.landmarks.endpoints(Segment::Leg);
        let (calcaneus, fifth_mtp) = generate_dorsiflexed(source, le, lm);
        Self::solve(
            ProblemVariant::Dorsiflexed,
            self.landmarks.with_foot(calcaneus, fifth_mtp),
        )
    }

    pub fn variant(&self) -> ProblemVariant {
        self.variant
    }

    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }

    pub fn angles(&self) -> ReferenceAngles {
        self.angles
    }

    pub fn reference(&self, kind: AngleKind) -> f64 {
        self.angles.get(kind)
    }
}
