use crate::trig::TrigTable;
use nalgebra::DMatrix;

/// Vote grid over (angle step, radius bin).
///
/// Rows are angle steps, columns are radius bins. Column `r` stands for the
/// signed radius `r - max_radius`, so bin indices stay non-negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accumulator {
    votes: DMatrix<u32>,
    max_radius: usize,
}

impl Accumulator {
    /// Zeroed accumulator sized for a `width × height` image.
    pub fn new(angle_steps: usize, width: usize, height: usize) -> Self {
        Self::with_max_radius(angle_steps, max_radius_for(width, height))
    }

    /// Zeroed accumulator with `2 * max_radius` radius bins.
    pub fn with_max_radius(angle_steps: usize, max_radius: usize) -> Self {
        Self {
            votes: DMatrix::zeros(angle_steps, 2 * max_radius),
            max_radius,
        }
    }

    #[inline]
    pub fn angle_steps(&self) -> usize {
        self.votes.nrows()
    }

    #[inline]
    pub fn radius_bins(&self) -> usize {
        self.votes.ncols()
    }

    #[inline]
    pub fn max_radius(&self) -> usize {
        self.max_radius
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    #[inline]
    pub fn votes(&self, t: usize, r: usize) -> u32 {
        self.votes[(t, r)]
    }

    /// Votes for angle step `t` and signed radius, `None` outside the grid.
    pub fn votes_at(&self, t: usize, radius: i32) -> Option<u32> {
        let r = i64::from(radius) + self.max_radius as i64;
        (t < self.angle_steps() && r >= 0 && (r as usize) < self.radius_bins())
            .then(|| self.votes[(t, r as usize)])
    }

    /// Read-only access to the underlying grid.
    pub fn as_matrix(&self) -> &DMatrix<u32> {
        &self.votes
    }

    /// Signed radius of bin `r`.
    #[inline]
    pub fn bin_radius(&self, r: usize) -> i32 {
        (r as i64 - self.max_radius as i64) as i32
    }

    /// Radius bin hit by point (x, y) at angle step `t`.
    ///
    /// The projection is truncated toward zero before the offset is applied.
    /// Returns `None` when the bin falls outside `[0, 2 * max_radius)`.
    #[inline]
    pub fn radius_bin(&self, trig: &TrigTable, t: usize, x: i64, y: i64) -> Option<usize> {
        let rho = x as f64 * trig.cos(t) + y as f64 * trig.sin(t);
        let r = rho as i64 + self.max_radius as i64;
        (r >= 0 && (r as usize) < self.radius_bins()).then_some(r as usize)
    }

    /// Cast one vote per angle step for point (x, y).
    ///
    /// Returns the number of votes that landed; the rest were out of range
    /// and dropped.
    pub fn cast_votes(&mut self, trig: &TrigTable, x: i64, y: i64) -> usize {
        debug_assert_eq!(trig.steps(), self.angle_steps());
        let mut cast = 0;
        for t in 0..self.angle_steps() {
            if let Some(r) = self.radius_bin(trig, t, x, y) {
                self.votes[(t, r)] += 1;
                cast += 1;
            }
        }
        cast
    }

    /// Elementwise sum with an accumulator of the same shape.
    pub fn merge(&mut self, other: &Accumulator) {
        assert_eq!(
            self.votes.shape(),
            other.votes.shape(),
            "cannot merge accumulators of different shape"
        );
        self.votes += &other.votes;
    }

    /// Highest vote count and its cell, first in angle-major order on ties.
    pub fn peak(&self) -> Option<AccumulatorPeak> {
        let mut best: Option<AccumulatorPeak> = None;
        for t in 0..self.angle_steps() {
            for r in 0..self.radius_bins() {
                let votes = self.votes[(t, r)];
                if best.map_or(true, |b| votes > b.votes) {
                    best = Some(AccumulatorPeak { t, r, votes });
                }
            }
        }
        best
    }

    /// Total votes held by the grid.
    pub fn total_votes(&self) -> u64 {
        self.votes.iter().map(|&v| u64::from(v)).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccumulatorPeak {
    pub t: usize,
    pub r: usize,
    pub votes: u32,
}

/// `ceil(hypot(width, height))`.
pub fn max_radius_for(width: usize, height: usize) -> usize {
    (width as f64).hypot(height as f64).ceil() as usize
}
