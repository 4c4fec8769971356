//! Hilbert curve indexing over banded rectangular grids
//!
//! A curve of order `p` covers one `2^p x 2^p` tile. Grids are [`BANDS`] tiles
//! tall: distances past one tile continue in the next band down. Coordinates
//! use image convention, `x` is the column and `y` the row, and bands stack
//! along `y`.

use crate::error::{BinvisError, Result};
use crate::region::Region;

/// Number of square tiles stacked vertically in every grid.
pub const BANDS: u32 = 4;

/// Supported curve sides, smallest first.
pub const SIDES: [u32; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

/// A grid coordinate (`x` column, `y` row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

/// Curve order and the square side it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurveSpec {
    order: u32,
}

impl CurveSpec {
    /// Largest supported curve (side 256).
    pub const MAX: CurveSpec = CurveSpec { order: 8 };

    /// Build a spec from a side length on the supported ladder.
    pub fn from_side(side: u32) -> Result<Self> {
        if SIDES.contains(&side) {
            Ok(Self { order: side.trailing_zeros() })
        } else {
            Err(BinvisError::UnsupportedCurveSize(side))
        }
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn side(&self) -> u32 {
        1 << self.order
    }

    /// Number of cells in one square tile.
    pub fn tile_capacity(&self) -> u64 {
        let side = self.side() as u64;
        side * side
    }

    /// Number of cells in a full grid of [`BANDS`] tiles.
    pub fn grid_capacity(&self) -> u64 {
        self.tile_capacity() * BANDS as u64
    }
}

/// Map a distance along the banded curve to a grid coordinate.
///
/// `distance` must be below `spec.grid_capacity()` for the point to land inside
/// the grid; larger distances keep banding downward.
pub fn point_from_distance(spec: CurveSpec, distance: u64) -> GridPoint {
    let tile = spec.tile_capacity();
    let band = distance / tile;
    let (x, y) = hilbert_d2xy(spec.side(), distance % tile);
    GridPoint { x, y: y + band as u32 * spec.side() }
}

/// Inverse of [`point_from_distance`].
pub fn distance_from_point(spec: CurveSpec, point: GridPoint) -> u64 {
    let side = spec.side();
    let band = (point.y / side) as u64;
    hilbert_xy2d(side, point.x % side, point.y % side) + band * spec.tile_capacity()
}

fn hilbert_d2xy(side: u32, distance: u64) -> (u32, u32) {
    let (mut x, mut y) = (0u32, 0u32);
    let mut t = distance;
    let mut s = 1u32;
    while s < side {
        let rx = (1 & (t / 2)) as u32;
        let ry = (1 & (t ^ rx as u64)) as u32;
        rotate(s, &mut x, &mut y, rx, ry);
        x += s * rx;
        y += s * ry;
        t /= 4;
        s *= 2;
    }
    (x, y)
}

fn hilbert_xy2d(side: u32, mut x: u32, mut y: u32) -> u64 {
    let mut distance = 0u64;
    let mut s = side / 2;
    while s > 0 {
        let rx = u32::from(x & s > 0);
        let ry = u32::from(y & s > 0);
        distance += (s as u64) * (s as u64) * ((3 * rx) ^ ry) as u64;
        rotate(side, &mut x, &mut y, rx, ry);
        s /= 2;
    }
    distance
}

fn rotate(n: u32, x: &mut u32, y: &mut u32, rx: u32, ry: u32) {
    if ry == 0 {
        if rx == 1 {
            *x = n - 1 - *x;
            *y = n - 1 - *y;
        }
        std::mem::swap(x, y);
    }
}

/// How the curve side is chosen for a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Smallest side whose grid holds the whole region, capped at the largest side.
    #[default]
    Fit,
    /// Always use this curve.
    Fixed(CurveSpec),
}

impl SizePolicy {
    /// Pick the curve for a region of `len` bytes.
    pub fn resolve(&self, len: usize) -> CurveSpec {
        match self {
            SizePolicy::Fixed(spec) => *spec,
            SizePolicy::Fit => SIDES
                .iter()
                .filter_map(|&side| CurveSpec::from_side(side).ok())
                .find(|spec| spec.grid_capacity() >= len as u64)
                .unwrap_or(CurveSpec::MAX),
        }
    }
}

/// The mapping from grid pixels to byte offsets for one region.
///
/// Encoder and decoder both go through [`Layout::index_at`], so the
/// coordinate-to-offset function is the same on both paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    spec: CurveSpec,
    region: Region,
}

impl Layout {
    pub fn new(spec: CurveSpec, region: Region) -> Self {
        tracing::debug!(
            side = spec.side(),
            start = region.start(),
            len = region.len(),
            capacity = spec.grid_capacity(),
            "grid layout"
        );
        Self { spec, region }
    }

    /// Build a layout, choosing the curve with `policy`.
    pub fn with_policy(policy: SizePolicy, region: Region) -> Self {
        Self::new(policy.resolve(region.len()), region)
    }

    pub fn spec(&self) -> CurveSpec {
        self.spec
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn width(&self) -> u32 {
        self.spec.side()
    }

    pub fn height(&self) -> u32 {
        self.spec.side() * BANDS
    }

    /// Grid dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Byte offset shown at curve distance `distance`.
    ///
    /// Equivalent to `floor(distance / ratio) + start` with
    /// `ratio = capacity / len`, computed in integers so it is exact.
    pub fn index_for_distance(&self, distance: u64) -> usize {
        let len = self.region.len() as u128;
        let scaled = distance as u128 * len / self.spec.grid_capacity() as u128;
        self.region.start() + scaled as usize
    }

    /// Byte offset shown at grid pixel `(x, y)`.
    pub fn index_at(&self, x: u32, y: u32) -> usize {
        self.index_for_distance(distance_from_point(self.spec, GridPoint { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_from_side_ladder() {
        for (order, side) in SIDES.iter().enumerate() {
            let spec = CurveSpec::from_side(*side).unwrap();
            assert_eq!(spec.order(), order as u32 + 1);
            assert_eq!(spec.side(), *side);
        }
    }

    #[test]
    fn test_from_side_rejects_off_ladder() {
        assert_eq!(CurveSpec::from_side(0), Err(BinvisError::UnsupportedCurveSize(0)));
        assert_eq!(CurveSpec::from_side(1), Err(BinvisError::UnsupportedCurveSize(1)));
        assert_eq!(CurveSpec::from_side(100), Err(BinvisError::UnsupportedCurveSize(100)));
        assert_eq!(CurveSpec::from_side(512), Err(BinvisError::UnsupportedCurveSize(512)));
    }

    #[test]
    fn test_order_one_visits_quadrants_in_hilbert_order() {
        let spec = CurveSpec::from_side(2).unwrap();
        let points: Vec<_> =
            (0..4).map(|d| point_from_distance(spec, d)).map(|p| (p.x, p.y)).collect();
        assert_eq!(points, vec![(0, 0), (0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_consecutive_distances_are_adjacent() {
        let spec = CurveSpec::from_side(16).unwrap();
        for d in 0..spec.tile_capacity() - 1 {
            let a = point_from_distance(spec, d);
            let b = point_from_distance(spec, d + 1);
            let step = a.x.abs_diff(b.x) + a.y.abs_diff(b.y);
            assert_eq!(step, 1, "distance {} -> {} is not a unit step", d, d + 1);
        }
    }

    #[test]
    fn test_banded_grid_is_bijective() {
        for side in [2, 8, 32] {
            let spec = CurveSpec::from_side(side).unwrap();
            let mut seen = HashSet::new();
            for d in 0..spec.grid_capacity() {
                let p = point_from_distance(spec, d);
                assert!(p.x < side && p.y < side * BANDS);
                assert!(seen.insert(p), "collision at distance {}", d);
                assert_eq!(distance_from_point(spec, p), d);
            }
            assert_eq!(seen.len() as u64, spec.grid_capacity());
        }
    }

    #[test]
    fn test_bands_stack_vertically() {
        let spec = CurveSpec::from_side(4).unwrap();
        let first = point_from_distance(spec, 0);
        let second_band = point_from_distance(spec, spec.tile_capacity());
        assert_eq!(second_band.x, first.x);
        assert_eq!(second_band.y, first.y + 4);
    }

    #[test]
    fn test_fit_policy_picks_smallest_sufficient_side() {
        assert_eq!(SizePolicy::Fit.resolve(1).side(), 2);
        assert_eq!(SizePolicy::Fit.resolve(16).side(), 2);
        assert_eq!(SizePolicy::Fit.resolve(17).side(), 4);
        assert_eq!(SizePolicy::Fit.resolve(4096).side(), 32);
        assert_eq!(SizePolicy::Fit.resolve(262_144).side(), 256);
        assert_eq!(SizePolicy::Fit.resolve(10_000_000).side(), 256);
    }

    #[test]
    fn test_fixed_policy_ignores_length() {
        let policy = SizePolicy::Fixed(CurveSpec::MAX);
        assert_eq!(policy.resolve(10).side(), 256);
    }

    #[test]
    fn test_full_capacity_region_maps_one_to_one() {
        let spec = CurveSpec::from_side(8).unwrap();
        let region = Region::new(0, 256, 256).unwrap();
        let layout = Layout::new(spec, region);
        let mut seen = HashSet::new();
        for y in 0..layout.height() {
            for x in 0..layout.width() {
                assert!(seen.insert(layout.index_at(x, y)));
            }
        }
        assert_eq!(seen.len(), 256);
    }

    #[test]
    fn test_short_region_stretches_across_grid() {
        let spec = CurveSpec::from_side(4).unwrap();
        let region = Region::new(10, 14, 20).unwrap();
        let layout = Layout::new(spec, region);
        // 64 cells over 4 bytes: 16 consecutive distances per byte.
        assert_eq!(layout.index_for_distance(0), 10);
        assert_eq!(layout.index_for_distance(15), 10);
        assert_eq!(layout.index_for_distance(16), 11);
        assert_eq!(layout.index_for_distance(63), 13);
    }

    #[test]
    fn test_long_region_samples_within_bounds() {
        let spec = CurveSpec::from_side(2).unwrap();
        let region = Region::new(0, 1000, 1000).unwrap();
        let layout = Layout::new(spec, region);
        for d in 0..spec.grid_capacity() {
            assert!(layout.index_for_distance(d) < 1000);
        }
        assert_eq!(layout.index_for_distance(15), 937);
    }

    #[test]
    fn test_max_layout_dimensions() {
        let region = Region::new(0, 262_144, 262_144).unwrap();
        let layout = Layout::with_policy(SizePolicy::Fixed(CurveSpec::MAX), region);
        assert_eq!(layout.dimensions(), (256, 1024));
    }
}
