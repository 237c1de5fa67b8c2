//! Geometry behind the ankle angle exercises: landmark sampling, segment
//! angles, and answer grading.

pub mod angles;
pub mod grading;
pub mod problem;
pub mod sampler;

pub use angles::{absolute_angle, quadrant, relative_ankle_angle, round_to, Quadrant};
pub use grading::{grade, is_correct, DEFAULT_TOLERANCE};
pub use problem::ProblemInstance;
pub use sampler::{generate_dorsiflexed, generate_generic, RandomSource, UniformSource};
