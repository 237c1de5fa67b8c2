use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AngleKind, Landmark, Landmarks, ProblemVariant};

/// Reference answers in degrees, one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAngles {
    pub leg: f64,
    pub foot: f64,
    pub ankle: f64,
}

impl ReferenceAngles {
    pub fn get(&self, kind: AngleKind) -> f64 {
        match kind {
            AngleKind::Leg => self.leg,
            AngleKind::Foot => self.foot,
            AngleKind::Ankle => self.ankle,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub kind: AngleKind,
    pub estimate: f64,
    pub reference: f64,
    pub tolerance: f64,
    pub correct: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRow {
    pub landmark: Landmark,
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl CoordinateRow {
    pub fn rows(landmarks: &Landmarks) -> Vec<CoordinateRow> {
        Landmark::ALL
            .into_iter()
            .map(|landmark| {
                let point = landmarks.get(landmark);
                CoordinateRow {
                    landmark,
                    name: landmark.display_name().to_string(),
                    x: point.x,
                    y: point.y,
                }
            })
            .collect()
    }
}

/// One exercise as handed to a host or printed by `generate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemReport {
    pub variant: ProblemVariant,
    pub generated_at: DateTime<Utc>,
    pub coordinates: Vec<CoordinateRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<ReferenceAngles>,
}
