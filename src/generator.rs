//! Lissajous curve sampling.
//!
//! A [`LissajousGenerator`] owns a [`SamplingConfig`] (parameter range and
//! number of samples) and turns a pair of frequencies into a
//! [`LissajousFigure`]: `x = sin(freq_x * t)`, `y = sin(freq_y * t)` for `t`
//! evenly spaced over the configured range.

use std::f64::consts::TAU;

use thiserror::Error;

/// Default start of the parameter range.
pub const DEFAULT_START: f64 = 0.0;
/// Default end of the parameter range (one full period).
pub const DEFAULT_END: f64 = TAU;
/// Default number of samples per figure.
pub const DEFAULT_RESOLUTION: usize = 100;

/// Errors raised while sampling a figure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("invalid sampling configuration: {0}")]
    InvalidConfiguration(String),
}

/// Range and density of the curve parameter `t`.
///
/// `start > end` is allowed and simply walks the range backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    pub start: f64,
    pub end: f64,
    /// Number of samples, both endpoints included. Must be at least 1 when generating.
    pub resolution: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl SamplingConfig {
    pub fn new(start: f64, end: f64, resolution: usize) -> Self {
        Self {
            start,
            end,
            resolution,
        }
    }

    /// Check that the configuration can be sampled.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.resolution == 0 {
            return Err(GenerateError::InvalidConfiguration(
                "resolution must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Evenly spaced parameter values from `start` to `end`, both inclusive.
    ///
    /// The last value is pinned to `end` so the endpoint is exact regardless
    /// of accumulated rounding in the step.
    pub fn parameter_values(&self) -> Result<Vec<f64>, GenerateError> {
        self.validate()?;
        if self.resolution == 1 {
            return Ok(vec![self.start]);
        }
        let last = self.resolution - 1;
        let step = (self.end - self.start) / last as f64;
        let mut t: Vec<f64> = (0..self.resolution)
            .map(|i| self.start + i as f64 * step)
            .collect();
        t[last] = self.end;
        Ok(t)
    }
}

/// The sampled coordinates of one Lissajous curve.
///
/// Produced by [`LissajousGenerator::generate`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LissajousFigure {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LissajousFigure {
    /// Wrap two coordinate sequences. Lengths are not checked.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinates as `[x, y]` pairs, the shape `egui_plot` consumes.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    /// Bounding box `([min_x, min_y], [max_x, max_y])` over the finite points.
    ///
    /// Returns `None` if the figure has no finite point.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut min = [f64::INFINITY; 2];
        let mut max = [f64::NEG_INFINITY; 2];
        for (&x, &y) in self.x.iter().zip(self.y.iter()) {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            min[0] = min[0].min(x);
            min[1] = min[1].min(y);
            max[0] = max[0].max(x);
            max[1] = max[1].max(y);
        }
        if min[0].is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

/// Samples Lissajous figures under a mutable [`SamplingConfig`].
#[derive(Debug, Clone, Default)]
pub struct LissajousGenerator {
    config: SamplingConfig,
}

impl LissajousGenerator {
    /// Generator over `[0, 2π]` with 100 samples.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SamplingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SamplingConfig {
        &mut self.config
    }

    pub fn start(&self) -> f64 {
        self.config.start
    }

    pub fn set_start(&mut self, start: f64) {
        self.config.start = start;
    }

    pub fn end(&self) -> f64 {
        self.config.end
    }

    pub fn set_end(&mut self, end: f64) {
        self.config.end = end;
    }

    pub fn resolution(&self) -> usize {
        self.config.resolution
    }

    /// No validation here; a zero resolution is reported by [`generate`](Self::generate).
    pub fn set_resolution(&mut self, resolution: usize) {
        self.config.resolution = resolution;
    }

    /// Sample the curve `(sin(freq_x * t), sin(freq_y * t))`.
    pub fn generate(&self, freq_x: f64, freq_y: f64) -> Result<LissajousFigure, GenerateError> {
        let t = self.config.parameter_values()?;
        let x = t.iter().map(|&t| (freq_x * t).sin()).collect();
        let y = t.iter().map(|&t| (freq_y * t).sin()).collect();
        Ok(LissajousFigure::new(x, y))
    }
}
