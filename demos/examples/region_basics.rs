// Copyright 2026 the Bandplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region algebra basics.
//!
//! Punch a hole in a rectangle, look at the canonical bands, and walk the
//! rectangle decomposition.
//!
//! Run:
//! - `cargo run -p bandplane_demos --example region_basics`

use bandplane::{Point, Region, Size};

fn main() {
    let outer = Region::from_rect(Point::new(0, 0), Size::new(6, 8));
    let hole = Region::from_rect(Point::new(2, 2), Size::new(2, 4));
    let frame = outer.difference(&hole);

    println!("frame: {frame:?}");
    println!("covers {} of {} cells", frame.area(), outer.area());

    for (pos, size) in frame.rects() {
        println!("rect at ({}, {}) size {}x{}", pos.y, pos.x, size.h, size.w);
    }

    assert!(frame.contains(Point::new(1, 1)));
    assert!(!frame.contains(Point::new(2, 2)));
    assert_eq!(
        frame.union(&hole),
        outer,
        "frame plus hole restores the rectangle"
    );
}
