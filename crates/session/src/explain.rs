//! Worked solution for the current problem.

use std::fmt;

use kinematics::{
    angles::{raw_angle, ANKLE_NEUTRAL_OFFSET},
    quadrant, ProblemInstance, Quadrant,
};
use shared::domain::{Landmark, Segment};

pub const PROBLEM_STATEMENT: &str = "\
The data below are (x,y) position coordinates of a person's lower leg and foot during walking.
Use the data to estimate:
- Absolute angle of the leg segment
- Absolute angle of the foot segment
- Relative ankle angle

Report all answers in degrees to one decimal place.";

#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationSection {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub sections: Vec<ExplanationSection>,
}

pub fn quadrant_rule(quadrant: Option<Quadrant>) -> &'static str {
    match quadrant {
        Some(Quadrant::First) => "Q1 (Δx > 0, Δy ≥ 0): no correction",
        Some(Quadrant::Second) => "Q2 (Δx < 0, Δy > 0): add 0°",
        Some(Quadrant::Third) => "Q3 (Δx < 0, Δy < 0): add 180°",
        Some(Quadrant::Fourth) => "Q4 (Δx > 0, Δy < 0): add 360°",
        None => "Δx = 0 or (Δx < 0, Δy = 0): no quadrant rule applies, atan2 kept as is",
    }
}

fn segment_section(problem: &ProblemInstance, segment: Segment) -> ExplanationSection {
    let (name, reference) = match segment {
        Segment::Leg => ("Leg", problem.angles().leg),
        Segment::Foot => ("Foot", problem.angles().foot),
    };
    let proximal = segment.proximal();
    let distal = segment.distal();
    let (p, d) = problem.landmarks().endpoints(segment);
    let dx = p.x - d.x;
    let dy = p.y - d.y;
    let rule = quadrant(dx, dy);

    ExplanationSection {
        title: format!("Absolute {name} Angle"),
        lines: vec![
            format!(
                "Δx = {px} - {dxl} = {:.3} - {:.3} = {dx:.3}",
                p.x,
                d.x,
                px = axis_label(proximal, 'X'),
                dxl = axis_label(distal, 'X'),
            ),
            format!(
                "Δy = {py} - {dyl} = {:.3} - {:.3} = {dy:.3}",
                p.y,
                d.y,
                py = axis_label(proximal, 'Y'),
                dyl = axis_label(distal, 'Y'),
            ),
            format!(
                "{name} Angle = atan2(Δy, Δx) = atan2({dy:.3}, {dx:.3}) = {:.2}°",
                raw_angle(p, d)
            ),
            format!("Quadrant correction: {}", quadrant_rule(rule)),
            format!("{name} Angle = {reference:.1}°"),
        ],
    }
}

fn axis_label(landmark: Landmark, axis: char) -> String {
    format!("{}{axis}", landmark.label())
}

pub fn explain(problem: &ProblemInstance) -> Explanation {
    let angles = problem.angles();
    let relative = ExplanationSection {
        title: "Relative Ankle Angle".to_string(),
        lines: vec![
            format!("Ankle Angle = Foot Angle - Leg Angle - {ANKLE_NEUTRAL_OFFSET:.0}"),
            format!(
                "Ankle Angle = {:.1} - {:.1} - {ANKLE_NEUTRAL_OFFSET:.0} = {:.1}°",
                angles.foot, angles.leg, angles.ankle
            ),
        ],
    };

    Explanation {
        sections: vec![
            segment_section(problem, Segment::Leg),
            segment_section(problem, Segment::Foot),
            relative,
        ],
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "How to Calculate:")?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}:", section.title)?;
            for line in &section.lines {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}
