//! Piecewise-linear range mapping (`input_range -> output_range`).

use crate::easing::Easing;
use smallvec::SmallVec;
use std::fmt;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Fewer than two stops were supplied.
    TooFewStops { len: usize },
    /// Input and output stop counts differ.
    LengthMismatch { input: usize, output: usize },
    /// Input stops must be non-decreasing.
    UnsortedInput { index: usize },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::TooFewStops { len } => {
                write!(f, "interpolation needs at least two stops, got {len}")
            }
            InterpolationError::LengthMismatch { input, output } => {
                write!(f, "input has {input} stops but output has {output}")
            }
            InterpolationError::UnsortedInput { index } => {
                write!(f, "input stop {index} is smaller than the one before it")
            }
        }
    }
}

impl std::error::Error for InterpolationError {}

/// Maps a value through sorted input stops onto output stops.
///
/// Values outside the input range are clamped to the end outputs by default;
/// [`unclamped`](Interpolation::unclamped) extrapolates the end segments
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: SmallVec<[f32; 4]>,
    output: SmallVec<[f32; 4]>,
    clamp: bool,
    easing: Easing,
}

impl Interpolation {
    /// Two-stop mapping; never fails.
    pub fn linear(input: [f32; 2], output: [f32; 2]) -> Self {
        let (input, output) = if input[0] <= input[1] {
            (input, output)
        } else {
            ([input[1], input[0]], [output[1], output[0]])
        };
        Self {
            input: SmallVec::from_slice(&input),
            output: SmallVec::from_slice(&output),
            clamp: true,
            easing: Easing::Linear,
        }
    }

    pub fn piecewise(input: &[f32], output: &[f32]) -> Result<Self, InterpolationError> {
        if input.len() != output.len() {
            return Err(InterpolationError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.len() < 2 {
            return Err(InterpolationError::TooFewStops { len: input.len() });
        }
        if let Some(index) = input.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(InterpolationError::UnsortedInput { index: index + 1 });
        }
        Ok(Self {
            input: SmallVec::from_slice(input),
            output: SmallVec::from_slice(output),
            clamp: true,
            easing: Easing::Linear,
        })
    }

    pub fn unclamped(mut self) -> Self {
        self.clamp = false;
        self
    }

    /// Eases the fraction within each segment.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    pub fn map(&self, value: f32) -> f32 {
        let last = self.input.len() - 1;
        let segment = if value <= self.input[0] {
            if self.clamp {
                return self.output[0];
            }
            0
        } else if value >= self.input[last] {
            if self.clamp {
                return self.output[last];
            }
            last - 1
        } else {
            self.input
                .windows(2)
                .position(|pair| value >= pair[0] && value < pair[1])
                .unwrap_or(last - 1)
        };

        let (from, to) = (self.input[segment], self.input[segment + 1]);
        let width = to - from;
        if width.abs() < f32::EPSILON {
            return self.output[segment + 1];
        }
        let mut fraction = (value - from) / width;
        if (0.0..=1.0).contains(&fraction) {
            fraction = self.easing.transform(fraction);
        }
        self.output[segment].lerp(&self.output[segment + 1], fraction)
    }
}

#[cfg(test)]
#[path = "tests/interpolate_tests.rs"]
mod tests;
