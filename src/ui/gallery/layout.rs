// SPDX-License-Identifier: MPL-2.0
//! Responsive grid arithmetic.

use crate::config::{BREAKPOINT_MEDIUM, BREAKPOINT_WIDE, MIN_COLUMNS};

/// Number of grid columns for an available width.
///
/// One column on narrow windows, two from [`BREAKPOINT_MEDIUM`], three from
/// [`BREAKPOINT_WIDE`], never more than `max_columns` and never less than one.
#[must_use]
pub fn columns_for_width(width: f32, max_columns: u8) -> usize {
    let responsive = if width >= BREAKPOINT_WIDE {
        3
    } else if width >= BREAKPOINT_MEDIUM {
        2
    } else {
        1
    };

    responsive.min(usize::from(max_columns.max(MIN_COLUMNS)))
}

/// Splits `count` items into rows of `columns`; the last row may be shorter.
///
/// Returns `(start, end)` index ranges, one per row.
#[must_use]
pub fn rows(count: usize, columns: usize) -> Vec<(usize, usize)> {
    let columns = columns.max(1);
    (0..count)
        .step_by(columns)
        .map(|start| (start, (start + columns).min(count)))
        .collect()
}
