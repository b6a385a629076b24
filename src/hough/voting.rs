//! Accumulator population from an edge mask.
//!
//! Every edge pixel votes once per angle step. The scan covers the whole
//! image with no region of interest. The parallel variant shards by image
//! row into private partial accumulators and sums them, which yields the
//! same counts as the sequential scan.
use super::accumulator::Accumulator;
use crate::edges::EdgeMask;
use crate::trig::TrigTable;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::ops::Add;

/// Counters collected while voting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteStats {
    pub edge_pixels: usize,
    pub votes_cast: u64,
    pub votes_dropped: u64,
}

impl Add for VoteStats {
    type Output = VoteStats;

    fn add(self, rhs: VoteStats) -> VoteStats {
        VoteStats {
            edge_pixels: self.edge_pixels + rhs.edge_pixels,
            votes_cast: self.votes_cast + rhs.votes_cast,
            votes_dropped: self.votes_dropped + rhs.votes_dropped,
        }
    }
}

fn vote_row(acc: &mut Accumulator, trig: &TrigTable, mask: &EdgeMask, y: usize) -> VoteStats {
    let steps = acc.angle_steps() as u64;
    let mut stats = VoteStats::default();
    for (x, _) in mask.row(y).iter().enumerate().filter(|&(_, &e)| e) {
        let cast = acc.cast_votes(trig, x as i64, y as i64) as u64;
        stats.edge_pixels += 1;
        stats.votes_cast += cast;
        stats.votes_dropped += steps - cast;
    }
    stats
}

/// Vote every edge pixel of `mask` into `acc`, row by row.
pub fn populate(acc: &mut Accumulator, trig: &TrigTable, mask: &EdgeMask) -> VoteStats {
    let stats = (0..mask.h)
        .map(|y| vote_row(acc, trig, mask, y))
        .fold(VoteStats::default(), Add::add);
    log_stats("sequential", acc, &stats);
    stats
}

/// Same result as [`populate`], with rows spread over the rayon pool.
pub fn populate_parallel(acc: &mut Accumulator, trig: &TrigTable, mask: &EdgeMask) -> VoteStats {
    let steps = acc.angle_steps();
    let max_radius = acc.max_radius();
    let empty = || {
        (
            Accumulator::with_max_radius(steps, max_radius),
            VoteStats::default(),
        )
    };

    let (partial, stats) = (0..mask.h)
        .into_par_iter()
        .fold(empty, |(mut part, stats), y| {
            let row_stats = vote_row(&mut part, trig, mask, y);
            (part, stats + row_stats)
        })
        .reduce(empty, |(mut a, sa), (b, sb)| {
            a.merge(&b);
            (a, sa + sb)
        });

    acc.merge(&partial);
    log_stats("parallel", acc, &stats);
    stats
}

fn log_stats(mode: &str, acc: &Accumulator, stats: &VoteStats) {
    debug!(
        "Hough voting ({mode}): {} edge pixels, {} votes cast, {} dropped, grid {}x{}",
        stats.edge_pixels,
        stats.votes_cast,
        stats.votes_dropped,
        acc.angle_steps(),
        acc.radius_bins()
    );
}
