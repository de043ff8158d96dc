//! Spawn-cell selection.
//!
//! Units appear on the ground somewhere around the grid, never inside its
//! footprint.  With `n` the grid size:
//!
//! - `z` is uniform in `[-n, 2n]`.
//! - If `z` falls in the footprint rows `[0, n)`, `x` is drawn uniformly
//!   from the two flanks `[-n, -1] ∪ [n, 2n - 1]`.
//! - Otherwise the row is clear of the grid and `x` is uniform in
//!   `[-n/2, n + n/2]`.

use cf_core::{Cell, GROUND_LEVEL, SimRng};

/// Pick a random off-footprint ground cell for a grid of edge `grid_size`.
pub fn random_spawn(grid_size: u32, rng: &mut SimRng) -> Cell {
    let n = grid_size as i32;
    let z = rng.gen_range(-n..=2 * n);

    let x = if (0..n).contains(&z) {
        // 2n candidate columns: n on the left flank, n on the right.
        let k = rng.gen_range(0..2 * n);
        if k < n { k - n } else { k }
    } else {
        rng.gen_range(-(n / 2)..=n + n / 2)
    };

    Cell::new(x, GROUND_LEVEL, z)
}

/// `true` when `cell` lies inside the `grid_size`² ground footprint.
#[inline]
pub fn in_footprint(cell: Cell, grid_size: u32) -> bool {
    let n = grid_size as i32;
    (0..n).contains(&cell.x) && (0..n).contains(&cell.z)
}
