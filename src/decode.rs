//! Edited pixel grid back to a binary buffer
//!
//! Reconstruction compares every pixel with the color its byte had in the
//! original buffer. Pixels that still show that color are left alone: the
//! byte-to-color mapping is many-to-one, so re-deriving a byte from an
//! unchanged pixel could swap it for another member of the same class. Only
//! pixels whose color changed produce a write.
//!
//! All writes are staged during the pass and committed together, so a failed
//! reconstruction never leaves the buffer half-updated.

use crate::color::{Ciede2000, ColorDifference};
use crate::curve::Layout;
use crate::error::{BinvisError, Result};
use crate::schemes::{ColorScheme, Lookup};
use image::RgbImage;
use rand::Rng;
use serde::Serialize;

/// Options for [`decode`] and [`decode_into`].
#[derive(Clone, Copy)]
pub struct DecodeOptions<'a> {
    /// How edited colors are matched to scheme classes
    pub lookup: Lookup,
    /// Metric used by [`Lookup::Closest`]
    pub metric: &'a dyn ColorDifference,
}

impl Default for DecodeOptions<'_> {
    fn default() -> Self {
        Self { lookup: Lookup::Exact, metric: &Ciede2000 }
    }
}

impl DecodeOptions<'_> {
    /// Default options with closest-class matching.
    pub fn closest() -> Self {
        Self { lookup: Lookup::Closest, ..Self::default() }
    }
}

/// One byte rewritten by reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteChange {
    pub offset: usize,
    pub old: u8,
    pub new: u8,
}

/// Summary of a reconstruction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    /// Pixels whose color differed from the original byte's color
    pub edited_pixels: usize,
    /// Bytes whose value actually changed, in ascending offset order
    pub changes: Vec<ByteChange>,
}

impl DecodeReport {
    pub fn changed_bytes(&self) -> usize {
        self.changes.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Reconstruct a new buffer from an edited grid, leaving `original` untouched.
pub fn decode<R: Rng + ?Sized>(
    grid: &RgbImage,
    original: &[u8],
    layout: &Layout,
    scheme: &ColorScheme,
    options: DecodeOptions<'_>,
    rng: &mut R,
) -> Result<(Vec<u8>, DecodeReport)> {
    let mut buffer = original.to_vec();
    let report = decode_into(grid, &mut buffer, layout, scheme, options, rng)?;
    Ok((buffer, report))
}

/// Apply the edits in `grid` to `buffer` in place.
///
/// `buffer` must hold the same bytes that were encoded into the pre-edit grid.
/// On error `buffer` is unchanged.
///
/// # Errors
///
/// - [`BinvisError::RegionBounds`] if the layout's region does not fit `buffer`
/// - [`BinvisError::GridShapeMismatch`] if `grid` is not the encoder's size
/// - [`BinvisError::UnknownColor`] in exact mode, for the first pixel (row-major)
///   whose color is not in the scheme
pub fn decode_into<R: Rng + ?Sized>(
    grid: &RgbImage,
    buffer: &mut [u8],
    layout: &Layout,
    scheme: &ColorScheme,
    options: DecodeOptions<'_>,
    rng: &mut R,
) -> Result<DecodeReport> {
    layout.region().check_fits(buffer.len())?;
    if grid.dimensions() != layout.dimensions() {
        return Err(BinvisError::GridShapeMismatch {
            expected: layout.dimensions(),
            actual: grid.dimensions(),
        });
    }

    let region = layout.region();
    // Staged value per region offset; later edits of the same byte win.
    let mut staged: Vec<Option<u8>> = vec![None; region.len()];
    let mut edited_pixels = 0;

    for (x, y, pixel) in grid.enumerate_pixels() {
        let index = layout.index_at(x, y);
        let original = buffer[index];
        if *pixel == scheme.byte_to_color(original) {
            continue;
        }

        edited_pixels += 1;
        let byte = scheme
            .color_to_byte_with(*pixel, options.lookup, Some(original), options.metric, rng)
            .ok_or(BinvisError::UnknownColor { x, y, color: *pixel })?;
        staged[index - region.start()] = Some(byte);
    }

    let mut changes = Vec::new();
    for (i, value) in staged.into_iter().enumerate() {
        let offset = region.start() + i;
        let Some(new) = value else { continue };
        if new == buffer[offset] {
            continue;
        }
        tracing::trace!(offset, old = buffer[offset], new, "byte changed");
        changes.push(ByteChange { offset, old: buffer[offset], new });
        buffer[offset] = new;
    }

    tracing::info!(edited_pixels, changed_bytes = changes.len(), "reconstruction complete");
    Ok(DecodeReport { edited_pixels, changes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{point_from_distance, CurveSpec, SizePolicy};
    use crate::encode::encode;
    use crate::region::Region;
    use crate::schemes::SchemeName;
    use image::Rgb;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn sample(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 + i / 13) as u8).collect()
    }

    #[test]
    fn test_unedited_grid_changes_nothing() {
        let data = sample(300);
        let layout = Layout::with_policy(SizePolicy::Fit, Region::full(data.len()).unwrap());
        let scheme = SchemeName::Categorical.build();
        let grid = encode(&data, &layout, &scheme).unwrap();

        let (out, report) =
            decode(&grid, &data, &layout, &scheme, DecodeOptions::default(), &mut rng()).unwrap();
        assert_eq!(out, data);
        assert!(report.is_unchanged());
        assert_eq!(report.edited_pixels, 0);
    }

    #[test]
    fn test_single_edit_changes_one_byte() {
        let data = sample(256);
        let spec = CurveSpec::from_side(8).unwrap();
        let layout = Layout::new(spec, Region::full(data.len()).unwrap());
        let scheme = SchemeName::Categorical.build();
        let mut grid = encode(&data, &layout, &scheme).unwrap();

        // Distance 40 maps to offset 40; data[40] = 27 is a control byte.
        let p = point_from_distance(spec, 40);
        grid.put_pixel(p.x, p.y, Rgb([255, 255, 255]));

        let (out, report) =
            decode(&grid, &data, &layout, &scheme, DecodeOptions::default(), &mut rng()).unwrap();
        assert_eq!(report.changes, vec![ByteChange { offset: 40, old: data[40], new: 0xff }]);
        for (i, (a, b)) in out.iter().zip(&data).enumerate() {
            if i != 40 {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_stretched_edit_is_not_reverted() {
        // 4 bytes over a 64-cell grid: each byte is shown by 16 pixels.
        let data = vec![b'a', b'b', b'c', b'd'];
        let spec = CurveSpec::from_side(4).unwrap();
        let layout = Layout::new(spec, Region::full(4).unwrap());
        let scheme = SchemeName::Categorical.build();
        let mut grid = encode(&data, &layout, &scheme).unwrap();

        let p = point_from_distance(spec, 16);
        grid.put_pixel(p.x, p.y, Rgb([0, 0, 0]));

        let (out, report) =
            decode(&grid, &data, &layout, &scheme, DecodeOptions::default(), &mut rng()).unwrap();
        assert_eq!(out, vec![b'a', 0, b'c', b'd']);
        assert_eq!(report.edited_pixels, 1);
    }

    #[test]
    fn test_unknown_color_leaves_buffer_untouched() {
        let mut data = sample(64);
        let before = data.clone();
        let spec = CurveSpec::from_side(4).unwrap();
        let layout = Layout::new(spec, Region::full(64).unwrap());
        let scheme = SchemeName::Categorical.build();
        let mut grid = encode(&data, &layout, &scheme).unwrap();

        // A valid edit early in the grid, then an unknown color after it.
        grid.put_pixel(0, 0, Rgb([255, 255, 255]));
        grid.put_pixel(3, 9, Rgb([1, 2, 3]));

        let err = decode_into(&grid, &mut data, &layout, &scheme, DecodeOptions::default(), &mut rng())
            .unwrap_err();
        assert_eq!(err, BinvisError::UnknownColor { x: 3, y: 9, color: Rgb([1, 2, 3]) });
        assert_eq!(data, before);
    }

    #[test]
    fn test_closest_mode_accepts_off_palette_colors() {
        let data = vec![b'k'; 16];
        let spec = CurveSpec::from_side(2).unwrap();
        let layout = Layout::new(spec, Region::full(16).unwrap());
        let scheme = SchemeName::Categorical.build();
        let mut grid = encode(&data, &layout, &scheme).unwrap();

        // Nearly white: closest class is the all-ones byte.
        grid.put_pixel(1, 5, Rgb([250, 250, 250]));
        let (out, report) =
            decode(&grid, &data, &layout, &scheme, DecodeOptions::closest(), &mut rng()).unwrap();
        assert_eq!(report.changed_bytes(), 1);
        let change = report.changes[0];
        assert_eq!(change.new, 0xff);
        assert_eq!(out[change.offset], 0xff);
    }

    #[test]
    fn test_closest_mode_keeps_class_using_hint() {
        // Slightly off-blue over a printable byte stays the same byte.
        let data = vec![b'k'; 16];
        let spec = CurveSpec::from_side(2).unwrap();
        let layout = Layout::new(spec, Region::full(16).unwrap());
        let scheme = SchemeName::Categorical.build();
        let mut grid = encode(&data, &layout, &scheme).unwrap();
        grid.put_pixel(0, 0, Rgb([18, 112, 186]));

        let (out, report) =
            decode(&grid, &data, &layout, &scheme, DecodeOptions::closest(), &mut rng()).unwrap();
        assert_eq!(out, data);
        assert_eq!(report.edited_pixels, 1);
        assert!(report.is_unchanged());
    }

    #[test]
    fn test_shape_mismatch() {
        let data = sample(64);
        let layout = Layout::new(CurveSpec::from_side(4).unwrap(), Region::full(64).unwrap());
        let grid = RgbImage::new(4, 15);
        let err = decode(
            &grid,
            &data,
            &layout,
            &SchemeName::Categorical.build(),
            DecodeOptions::default(),
            &mut rng(),
        )
        .unwrap_err();
        assert_eq!(err, BinvisError::GridShapeMismatch { expected: (4, 16), actual: (4, 15) });
    }

    #[test]
    fn test_bytes_outside_region_never_written() {
        let data = sample(100);
        let region = Region::new(20, 36, data.len()).unwrap();
        let layout = Layout::new(CurveSpec::from_side(2).unwrap(), region);
        let scheme = SchemeName::Detail.build();
        let mut grid = encode(&data, &layout, &scheme).unwrap();
        for pixel in grid.pixels_mut() {
            *pixel = scheme.byte_to_color(0x42);
        }

        let (out, _) =
            decode(&grid, &data, &layout, &scheme, DecodeOptions::default(), &mut rng()).unwrap();
        assert_eq!(&out[..20], &data[..20]);
        assert_eq!(&out[36..], &data[36..]);
        assert!(out[20..36].iter().all(|&b| b == 0x42));
    }
}
