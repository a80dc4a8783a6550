// Copyright 2026 the Bandplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=bandplane --heading-base-level=0

//! Bandplane: a planar region algebra over axis-aligned integer rectangles.
//!
//! A [`Region`] represents an arbitrary orthogonally bounded subset of a 2D
//! cell grid — a finite union of disjoint axis-aligned rectangles — and
//! supports the Boolean set operations union, intersection, difference, and
//! symmetric difference, plus point containment and decomposition back into
//! rectangles.
//!
//! Regions are kept in a canonical band/wall form: y-sorted disjoint
//! horizontal bands, each carrying a strictly increasing, even-length vector
//! of x-coordinates ("walls") that toggle membership along the band. No band
//! is empty, no span is split redundantly, and vertically adjacent bands
//! with identical walls are always fused. Equality of regions is therefore
//! plain equality of representation, and long chains of operations cannot
//! bloat the representation.
//!
//! All four set operations share one scanline merge engine and differ only
//! in the per-event Boolean operator; see [`RegionOp`].
//!
//! Typical use is damage tracking and occlusion culling on cell grids
//! (terminal UIs): accumulate dirty rectangles, subtract what was repainted,
//! and walk the rectangles that remain.
//!
//! # Example
//!
//! ```rust
//! use bandplane::{Point, Region, Size};
//!
//! // A 4×4 square with a 2×2 hole punched out of its middle.
//! let outer = Region::from_rect(Point::new(0, 0), Size::new(4, 4));
//! let hole = Region::from_rect(Point::new(1, 1), Size::new(2, 2));
//! let frame = outer.difference(&hole);
//!
//! assert!(frame.contains(Point::new(0, 0)));
//! assert!(!frame.contains(Point::new(1, 1)));
//! assert_eq!(frame.area(), 12);
//!
//! // Decompose back into disjoint rectangles.
//! let rects: Vec<_> = frame.rects().collect();
//! assert_eq!(rects.len(), 4);
//! ```
//!
//! Operator sugar is available on references:
//!
//! ```rust
//! use bandplane::{Point, Region, Size};
//!
//! let a = Region::from_rect(Point::new(0, 0), Size::new(2, 2));
//! let b = Region::from_rect(Point::new(1, 1), Size::new(2, 2));
//!
//! let union = &a | &b;
//! let overlap = &a & &b;
//! assert_eq!(&union - &overlap, &a ^ &b);
//! ```

#![no_std]

extern crate alloc;

pub mod band;
pub mod merge;
pub mod region;
pub mod types;

pub use band::Band;
pub use merge::RegionOp;
pub use region::{Rects, Region};
pub use types::{Coord, Point, Size};
