// Copyright 2026 the Bandplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scanline merge engine shared by every set operation.
//!
//! All four operations funnel through [`merge_regions`]: a top-to-bottom
//! sweep over the y-breakpoints of both operands that emits one output band
//! per maximal y-interval with a constant pair of active input bands. The
//! per-event Boolean operator is the only thing that varies.

use alloc::vec::Vec;

use crate::band::{Band, WallVec};
use crate::region::Region;
use crate::types::Coord;

/// Boolean operator applied to the two membership bits during a merge.
///
/// Each operator is a pure function of "inside A" and "inside B". The merge
/// engine consumes nothing but [`RegionOp::apply`], so a further truth table
/// is an additive enum variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegionOp {
    /// Cells inside either operand.
    Union,
    /// Cells inside both operands.
    Intersection,
    /// Cells inside A but not B.
    Difference,
    /// Cells inside exactly one operand.
    SymmetricDifference,
}

impl RegionOp {
    /// Evaluate the operator's truth table.
    #[inline]
    pub fn apply(self, in_a: bool, in_b: bool) -> bool {
        match self {
            Self::Union => in_a | in_b,
            Self::Intersection => in_a & in_b,
            Self::Difference => in_a & !in_b,
            Self::SymmetricDifference => in_a ^ in_b,
        }
    }
}

/// Merge two wall vectors with `op`.
///
/// Walks both slices in lockstep. The next event is the smaller of the two
/// cursor heads; ties consume both. A wall is emitted exactly when the
/// operator output changes, so the result is strictly increasing and of even
/// length by construction.
fn merge_walls(a: &[Coord], b: &[Coord], op: RegionOp) -> WallVec {
    let mut walls = WallVec::new();
    let (mut i, mut j) = (0, 0);
    let (mut in_a, mut in_b, mut in_out) = (false, false, false);
    loop {
        let x = match (a.get(i), b.get(j)) {
            (Some(&ax), Some(&bx)) => ax.min(bx),
            (Some(&ax), None) => ax,
            (None, Some(&bx)) => bx,
            (None, None) => break,
        };
        if a.get(i) == Some(&x) {
            in_a = !in_a;
            i += 1;
        }
        if b.get(j) == Some(&x) {
            in_b = !in_b;
            j += 1;
        }
        if op.apply(in_a, in_b) != in_out {
            in_out = !in_out;
            walls.push(x);
        }
    }
    walls
}

/// Append the merged strip `[y1, y2)` to `out`, preserving the canonical
/// form.
///
/// A strip with no walls is dropped. A strip that abuts the previous band
/// and repeats its walls extends that band instead of starting a new one.
/// Fusion happens here, during the sweep, never in a post-pass.
fn push_strip(out: &mut Vec<Band>, y1: Coord, y2: Coord, a: &[Coord], b: &[Coord], op: RegionOp) {
    let walls = merge_walls(a, b, op);
    if walls.is_empty() {
        return;
    }
    if let Some(prev) = out.last_mut()
        && prev.y2 == y1
        && prev.walls == walls
    {
        prev.y2 = y2;
        return;
    }
    out.push(Band::new(y1, y2, walls));
}

/// Sweep both band lists top to bottom, emitting one merged strip per
/// maximal y-interval with a constant pair of active bands.
///
/// `scanline` tracks progress explicitly from the `[y1, y2)` of the last
/// requested strip; it is never re-derived from the output vector, which
/// would be stale after a dropped empty strip. One-sided strips still run
/// the full wall merge against an empty slice, so an operator with
/// `op(false, false) != false` would not be mishandled; only strips where
/// neither operand is active fall outside the sweep.
pub(crate) fn merge_regions(a: &Region, b: &Region, op: RegionOp) -> Region {
    let (ab, bb) = (a.bands.as_slice(), b.bands.as_slice());
    let mut scanline = match (ab.first(), bb.first()) {
        (Some(r), Some(s)) => r.y1.min(s.y1),
        (Some(r), None) => r.y1,
        (None, Some(s)) => s.y1,
        (None, None) => return Region::new(),
    };
    let mut bands = Vec::with_capacity(ab.len() + bb.len());
    let (mut i, mut j) = (0, 0);
    while let (Some(r), Some(s)) = (ab.get(i), bb.get(j)) {
        if r.y1 <= s.y1 {
            scanline = scanline.max(r.y1);
            if r.y2 <= s.y1 {
                // R ends before S begins: an A-only strip.
                push_strip(&mut bands, scanline, r.y2, &r.walls, &[], op);
                scanline = r.y2;
                i += 1;
            } else {
                if scanline < s.y1 {
                    push_strip(&mut bands, scanline, s.y1, &r.walls, &[], op);
                }
                let y2 = r.y2.min(s.y2);
                push_strip(&mut bands, s.y1, y2, &r.walls, &s.walls, op);
                scanline = y2;
                if r.y2 == y2 {
                    i += 1;
                }
                if s.y2 == y2 {
                    j += 1;
                }
            }
        } else {
            scanline = scanline.max(s.y1);
            if s.y2 <= r.y1 {
                push_strip(&mut bands, scanline, s.y2, &[], &s.walls, op);
                scanline = s.y2;
                j += 1;
            } else {
                if scanline < r.y1 {
                    push_strip(&mut bands, scanline, r.y1, &[], &s.walls, op);
                }
                let y2 = r.y2.min(s.y2);
                push_strip(&mut bands, r.y1, y2, &r.walls, &s.walls, op);
                scanline = y2;
                if r.y2 == y2 {
                    i += 1;
                }
                if s.y2 == y2 {
                    j += 1;
                }
            }
        }
    }
    // One side is exhausted; drain the other against the empty sentinel.
    while let Some(r) = ab.get(i) {
        push_strip(&mut bands, scanline.max(r.y1), r.y2, &r.walls, &[], op);
        scanline = r.y2;
        i += 1;
    }
    while let Some(s) = bb.get(j) {
        push_strip(&mut bands, scanline.max(s.y1), s.y2, &[], &s.walls, op);
        scanline = s.y2;
        j += 1;
    }
    Region { bands }
}
