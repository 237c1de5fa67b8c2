use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Planar position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    LateralEpicondyle,
    LateralMalleolus,
    Calcaneus,
    FifthMtp,
}

impl Landmark {
    pub const ALL: [Landmark; 4] = [
        Landmark::LateralEpicondyle,
        Landmark::LateralMalleolus,
        Landmark::Calcaneus,
        Landmark::FifthMtp,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Landmark::LateralEpicondyle => "Lateral Epicondyle",
            Landmark::LateralMalleolus => "Lateral Malleolus",
            Landmark::Calcaneus => "Calcaneus",
            Landmark::FifthMtp => "5th MTP (toes)",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Landmark::LateralEpicondyle => "LE",
            Landmark::LateralMalleolus => "LM",
            Landmark::Calcaneus => "C",
            Landmark::FifthMtp => "MT",
        }
    }
}

/// The four digitized points of one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmarks {
    pub lateral_epicondyle: Point,
    pub lateral_malleolus: Point,
    pub calcaneus: Point,
    pub fifth_mtp: Point,
}

impl Landmarks {
    pub fn get(&self, landmark: Landmark) -> Point {
        match landmark {
            Landmark::LateralEpicondyle => self.lateral_epicondyle,
            Landmark::LateralMalleolus => self.lateral_malleolus,
            Landmark::Calcaneus => self.calcaneus,
            Landmark::FifthMtp => self.fifth_mtp,
        }
    }

    pub fn endpoints(&self, segment: Segment) -> (Point, Point) {
        (self.get(segment.proximal()), self.get(segment.distal()))
    }

    /// Same leg, different foot.
    pub fn with_foot(self, calcaneus: Point, fifth_mtp: Point) -> Self {
        Self {
            calcaneus,
            fifth_mtp,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Leg,
    Foot,
}

impl Segment {
    pub fn proximal(self) -> Landmark {
        match self {
            Segment::Leg => Landmark::LateralEpicondyle,
            Segment::Foot => Landmark::Calcaneus,
        }
    }

    pub fn distal(self) -> Landmark {
        match self {
            Segment::Leg => Landmark::LateralMalleolus,
            Segment::Foot => Landmark::FifthMtp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemVariant {
    #[default]
    Generic,
    Dorsiflexed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleKind {
    Leg,
    Foot,
    Ankle,
}

impl AngleKind {
    pub fn name(self) -> &'static str {
        match self {
            AngleKind::Leg => "leg",
            AngleKind::Foot => "foot",
            AngleKind::Ankle => "ankle",
        }
    }

    /// "absolute" for segment angles, "relative" for the joint angle.
    pub fn frame(self) -> &'static str {
        match self {
            AngleKind::Leg | AngleKind::Foot => "absolute",
            AngleKind::Ankle => "relative",
        }
    }
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} angle", self.frame(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_pair_proximal_and_distal_landmarks() {
        assert_eq!(Segment::Leg.proximal(), Landmark::LateralEpicondyle);
        assert_eq!(Segment::Leg.distal(), Landmark::LateralMalleolus);
        assert_eq!(Segment::Foot.proximal(), Landmark::Calcaneus);
        assert_eq!(Segment::Foot.distal(), Landmark::FifthMtp);
    }

    #[test]
    fn with_foot_keeps_leg_points() {
        let landmarks = Landmarks {
            lateral_epicondyle: Point::new(0.15, 0.445),
            lateral_malleolus: Point::new(0.05, 0.25),
            calcaneus: Point::new(-0.1, 0.22),
            fifth_mtp: Point::new(0.02, 0.005),
        };
        let moved = landmarks.with_foot(Point::new(-0.08, 0.2), Point::new(0.07, 0.23));

        assert_eq!(moved.lateral_epicondyle, landmarks.lateral_epicondyle);
        assert_eq!(moved.lateral_malleolus, landmarks.lateral_malleolus);
        assert_eq!(moved.calcaneus, Point::new(-0.08, 0.2));
        assert_eq!(
            moved.endpoints(Segment::Foot),
            (Point::new(-0.08, 0.2), Point::new(0.07, 0.23))
        );
    }

    #[test]
    fn angle_kind_display_names_frame() {
        assert_eq!(AngleKind::Leg.to_string(), "absolute leg angle");
        assert_eq!(AngleKind::Ankle.to_string(), "relative ankle angle");
    }

    #[test]
    fn landmark_serializes_snake_case() {
        let json = serde_json::to_string(&Landmark::FifthMtp).expect("json");
        assert_eq!(json, "\"fifth_mtp\"");
    }
}
