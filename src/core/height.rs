//! # Auto-grow Height
//!
//! The composer never measures content on its own. A host supplies a
//! [`HeightProbe`] that reports the natural height of some text laid out
//! under the current [`Constraints`]; the composer clamps that to
//! `max_height` and keeps the result in [`MeasuredHeight`].
//!
//! ```text
//! text ──► probe.measure_content_height(text, constraints) ──► min(·, max) ──► MeasuredHeight
//! ```

/// Layout constraints the host reports to the composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Width available to the input surface, in host units.
    pub width: u16,
}

impl Default for Constraints {
    fn default() -> Self {
        Self { width: 80 }
    }
}

/// Measures the natural (unclamped) height of text on a rendering surface.
pub trait HeightProbe {
    fn measure_content_height(&self, text: &str, constraints: &Constraints) -> u16;
}

impl<F> HeightProbe for F
where
    F: Fn(&str, &Constraints) -> u16,
{
    fn measure_content_height(&self, text: &str, constraints: &Constraints) -> u16 {
        self(text, constraints)
    }
}

/// Current rendered height of the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasuredHeight {
    height: u16,
    max_height: u16,
}

impl MeasuredHeight {
    pub fn new(max_height: u16) -> Self {
        Self {
            height: 0,
            max_height,
        }
    }

    pub fn get(&self) -> u16 {
        self.height
    }

    pub fn max_height(&self) -> u16 {
        self.max_height
    }

    /// True when the natural content height was cut off by `max_height`.
    pub fn is_clamped(&self, natural: u16) -> bool {
        natural > self.max_height
    }

    /// Re-measure `text` and store the clamped result.
    pub fn remeasure(&mut self, probe: &dyn HeightProbe, text: &str, constraints: &Constraints) -> u16 {
        let natural = probe.measure_content_height(text, constraints);
        self.height = natural.min(self.max_height);
        self.height
    }

    /// Reset to whatever the surface measures with no content at all.
    pub fn reset(&mut self, probe: &dyn HeightProbe, constraints: &Constraints) -> u16 {
        self.remeasure(probe, "", constraints)
    }
}
