use shared::domain::Point;

const ANGLE_DECIMALS: u32 = 1;

/// Offset subtracted when relating the foot to the leg, so a foot square to
/// the leg reads as zero.
pub const ANKLE_NEUTRAL_OFFSET: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// Degrees added to the raw `atan2` result.
    pub fn correction(self) -> f64 {
        match self {
            Quadrant::First => 0.0,
            Quadrant::Second => 0.0,
            Quadrant::Third => 180.0,
            Quadrant::Fourth => 360.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::First => "Q1",
            Quadrant::Second => "Q2",
            Quadrant::Third => "Q3",
            Quadrant::Fourth => "Q4",
        }
    }
}

/// Quadrant of the segment vector. `None` when `dx == 0`, or when `dx < 0`
/// and `dy == 0`; those segments keep the raw `atan2` value.
pub fn quadrant(dx: f64, dy: f64) -> Option<Quadrant> {
    if dx > 0.0 && dy >= 0.0 {
        Some(Quadrant::First)
    } else if dx < 0.0 && dy > 0.0 {
        Some(Quadrant::Second)
    } else if dx < 0.0 && dy < 0.0 {
        Some(Quadrant::Third)
    } else if dx > 0.0 && dy < 0.0 {
        Some(Quadrant::Fourth)
    } else {
        None
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Unrounded `atan2` of the proximal-minus-distal vector, in degrees.
pub fn raw_angle(proximal: Point, distal: Point) -> f64 {
    let dx = proximal.x - distal.x;
    let dy = proximal.y - distal.y;
    dy.atan2(dx).to_degrees()
}

/// Absolute segment angle in degrees, quadrant corrected, one decimal.
pub fn absolute_angle(proximal: Point, distal: Point) -> f64 {
    let dx = proximal.x - distal.x;
    let dy = proximal.y - distal.y;
    let mut angle = raw_angle(proximal, distal);
    if let Some(quadrant) = quadrant(dx, dy) {
        angle += quadrant.correction();
    }
    round_to(angle, ANGLE_DECIMALS)
}

/// Joint angle between foot and leg, one decimal.
pub fn relative_ankle_angle(foot_angle: f64, leg_angle: f64) -> f64 {
    round_to(foot_angle - leg_angle - ANKLE_NEUTRAL_OFFSET, ANGLE_DECIMALS)
}

#[cfg(test)]
#[path = "tests/angles_tests.rs"]
mod tests;
