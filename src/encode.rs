//! Binary buffer to pixel grid

use crate::curve::Layout;
use crate::error::Result;
use crate::schemes::ColorScheme;
use image::RgbImage;

/// Render the layout's region of `buffer` as a grid of `layout.dimensions()`.
///
/// Every pixel shows the color of the byte at [`Layout::index_at`]. The output
/// depends only on the region's bytes, the layout and the scheme.
///
/// # Examples
///
/// ```
/// use binvis::curve::{Layout, SizePolicy};
/// use binvis::encode::encode;
/// use binvis::region::Region;
/// use binvis::schemes::SchemeName;
///
/// let data = b"hello, world\0\xff";
/// let layout = Layout::with_policy(SizePolicy::Fit, Region::full(data.len()).unwrap());
/// let grid = encode(data, &layout, &SchemeName::Categorical.build()).unwrap();
/// assert_eq!(grid.dimensions(), (2, 8));
/// ```
pub fn encode(buffer: &[u8], layout: &Layout, scheme: &ColorScheme) -> Result<RgbImage> {
    layout.region().check_fits(buffer.len())?;

    let (width, height) = layout.dimensions();
    Ok(RgbImage::from_fn(width, height, |x, y| scheme.byte_to_color(buffer[layout.index_at(x, y)])))
}
