// Copyright 2026 the Bandplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Damage accumulation on a cell grid.
//!
//! Widgets report float damage rects (kurbo); snap them outward to whole
//! cells, accumulate a dirty region, subtract the repainted part, and walk
//! the rectangles that still need a redraw.
//!
//! Run:
//! - `cargo run -p bandplane_demos --example damage_tracking`

use bandplane::{Point, Region, Size};
use kurbo::Rect;

/// Snap a float rect outward to the enclosing whole-cell region.
fn snap_to_cells(rect: Rect) -> Region {
    let y = rect.y0.floor() as i32;
    let x = rect.x0.floor() as i32;
    let h = rect.y1.ceil() as i32 - y;
    let w = rect.x1.ceil() as i32 - x;
    Region::from_rect(Point::new(y, x), Size::new(h, w))
}

fn main() {
    // (x0, y0, x1, y1) in fractional cell coordinates.
    let damage = [
        Rect::new(0.25, 1.5, 3.75, 9.0),
        Rect::new(2.0, 4.0, 6.0, 12.0),
        Rect::new(8.0, 20.0, 11.0, 28.5),
    ];

    let mut dirty = Region::new();
    for rect in damage {
        dirty = dirty.union(&snap_to_cells(rect));
    }
    println!("dirty: {dirty:?}");

    // The top twelve rows were repainted; drop them from the dirty set.
    let repainted = Region::from_rect(Point::new(0, 0), Size::new(12, 80));
    let remaining = dirty.difference(&repainted);

    println!("after repaint: {remaining:?}");
    for (pos, size) in remaining.rects() {
        println!("still dirty: ({}, {}) {}x{}", pos.y, pos.x, size.h, size.w);
    }
    assert!(remaining.intersection(&repainted).is_empty());
}
