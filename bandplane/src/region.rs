// Copyright 2026 the Bandplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `Region` value type and its public operations.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Sub};

use smallvec::smallvec;

use crate::band::Band;
use crate::merge::{RegionOp, merge_regions};
use crate::types::{Coord, Point, Size};

/// An orthogonally bounded subset of the plane: a finite union of disjoint
/// axis-aligned rectangles, kept in canonical band/wall form.
///
/// A region is a value. Set operations never mutate their operands and
/// always return freshly allocated storage; bands and walls are never shared
/// between regions, so read-only access from several threads is safe.
///
/// The representation is canonical: bands are y-sorted and y-disjoint, no
/// band is empty, and vertically adjacent bands never carry identical wall
/// vectors. Two regions denote the same point set if and only if they
/// compare equal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub(crate) bands: Vec<Band>,
}

impl Region {
    /// The empty region.
    pub fn new() -> Self {
        Self { bands: Vec::new() }
    }

    /// Region covering a single rectangle.
    ///
    /// A non-positive height or width yields the empty region.
    pub fn from_rect(pos: Point, size: Size) -> Self {
        if size.is_empty() {
            return Self::new();
        }
        let band = Band::new(pos.y, pos.y + size.h, smallvec![pos.x, pos.x + size.w]);
        Self { bands: vec![band] }
    }

    /// True if the region covers no cells.
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// The canonical band list, y-sorted and disjoint.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Merge with another region under an explicit operator.
    ///
    /// The four named operations are thin wrappers over this single engine.
    pub fn merge(&self, other: &Self, op: RegionOp) -> Self {
        merge_regions(self, other, op)
    }

    /// Cells in `self`, `other`, or both.
    pub fn union(&self, other: &Self) -> Self {
        self.merge(other, RegionOp::Union)
    }

    /// Cells in both `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        self.merge(other, RegionOp::Intersection)
    }

    /// Cells in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.merge(other, RegionOp::Difference)
    }

    /// Cells in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.merge(other, RegionOp::SymmetricDifference)
    }

    /// Whether the region contains the cell at `p`.
    ///
    /// Two binary searches: one over the bands in y, one over the matched
    /// band's walls in x. `O(log bands + log walls)`.
    pub fn contains(&self, p: Point) -> bool {
        let idx = self.bands.partition_point(|band| band.y1 <= p.y);
        let Some(band) = idx.checked_sub(1).and_then(|i| self.bands.get(i)) else {
            return false;
        };
        p.y < band.y2 && band.covers_x(p.x)
    }

    /// Iterate the disjoint rectangles that exactly cover the region.
    ///
    /// One rectangle per wall pair per band, in band order then left to
    /// right. Equal regions enumerate identically.
    pub fn rects(&self) -> Rects<'_> {
        Rects {
            bands: &self.bands,
            band: 0,
            wall: 0,
        }
    }

    /// Tightest rectangle enclosing the region, or `None` when empty.
    pub fn bounding_rect(&self) -> Option<(Point, Size)> {
        let (first, last) = (self.bands.first()?, self.bands.last()?);
        let mut x1 = Coord::MAX;
        let mut x2 = Coord::MIN;
        for band in &self.bands {
            if let (Some(&lo), Some(&hi)) = (band.walls.first(), band.walls.last()) {
                x1 = x1.min(lo);
                x2 = x2.max(hi);
            }
        }
        Some((
            Point::new(first.y1, x1),
            Size::new(last.y2 - first.y1, x2 - x1),
        ))
    }

    /// Number of cells covered, widened to `i64`.
    pub fn area(&self) -> i64 {
        self.bands
            .iter()
            .map(|band| {
                let h = i64::from(band.y2 - band.y1);
                let w: i64 = band
                    .walls
                    .chunks_exact(2)
                    .map(|pair| i64::from(pair[1] - pair[0]))
                    .sum();
                h * w
            })
            .sum()
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Region")?;
        f.debug_list().entries(self.bands.iter()).finish()
    }
}

/// Lazy iterator over a region's rectangle decomposition.
///
/// Returned by [`Region::rects`]. Restartable: call `rects()` again for a
/// fresh pass.
#[derive(Clone)]
pub struct Rects<'a> {
    bands: &'a [Band],
    band: usize,
    wall: usize,
}

impl Iterator for Rects<'_> {
    type Item = (Point, Size);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let band = self.bands.get(self.band)?;
            if let Some(pair) = band.walls.get(self.wall..self.wall + 2) {
                self.wall += 2;
                return Some((
                    Point::new(band.y1, pair[0]),
                    Size::new(band.y2 - band.y1, pair[1] - pair[0]),
                ));
            }
            self.band += 1;
            self.wall = 0;
        }
    }
}

impl BitOr for &Region {
    type Output = Region;

    fn bitor(self, rhs: Self) -> Region {
        self.union(rhs)
    }
}

impl BitAnd for &Region {
    type Output = Region;

    fn bitand(self, rhs: Self) -> Region {
        self.intersection(rhs)
    }
}

impl Sub for &Region {
    type Output = Region;

    fn sub(self, rhs: Self) -> Region {
        self.difference(rhs)
    }
}

impl BitXor for &Region {
    type Output = Region;

    fn bitxor(self, rhs: Self) -> Region {
        self.symmetric_difference(rhs)
    }
}

impl Extend<(Point, Size)> for Region {
    fn extend<I: IntoIterator<Item = (Point, Size)>>(&mut self, iter: I) {
        for (pos, size) in iter {
            *self = self.union(&Region::from_rect(pos, size));
        }
    }
}

impl FromIterator<(Point, Size)> for Region {
    fn from_iter<I: IntoIterator<Item = (Point, Size)>>(iter: I) -> Self {
        let mut region = Self::new();
        region.extend(iter);
        region
    }
}
