//! Precomputed sine/cosine per discrete angle step.
//!
//! Index `t` covers `t * 180 / steps` degrees, so the default 180 steps give
//! one entry per integer degree in `[0, 180)`.

/// Default angular resolution: one step per degree.
pub const DEFAULT_ANGLE_STEPS: usize = 180;

#[derive(Clone, Debug)]
pub struct TrigTable {
    sin: Vec<f64>,
    cos: Vec<f64>,
}

impl TrigTable {
    pub fn new(steps: usize) -> Self {
        let (sin, cos): (Vec<f64>, Vec<f64>) = (0..steps)
            .map(|t| {
                let theta = step_to_radians(t, steps);
                (theta.sin(), theta.cos())
            })
            .unzip();
        Self { sin, cos }
    }

    #[inline]
    pub fn steps(&self) -> usize {
        self.sin.len()
    }

    #[inline]
    pub fn sin(&self, t: usize) -> f64 {
        self.sin[t]
    }

    #[inline]
    pub fn cos(&self, t: usize) -> f64 {
        self.cos[t]
    }

    /// Angle of step `t` in radians.
    #[inline]
    pub fn theta(&self, t: usize) -> f64 {
        step_to_radians(t, self.steps())
    }
}

impl Default for TrigTable {
    fn default() -> Self {
        Self::new(DEFAULT_ANGLE_STEPS)
    }
}

#[inline]
fn step_to_radians(t: usize, steps: usize) -> f64 {
    // For 180 steps `t * 180 / 180` is exactly `t`.
    (t as f64 * 180.0 / steps as f64).to_radians()
}
