//! PNG and raw binary file I/O, and output path generation

use image::imageops::FilterType;
use image::{Rgb, RgbImage};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image encoding or decoding error
    Image(image::ImageError),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

fn create_parent_dirs(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Save an RGB grid to a PNG file, creating parent directories.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), OutputError> {
    create_parent_dirs(path)?;
    image.save(path)?;
    Ok(())
}

/// Load an image file as an 8-bit RGB grid. Alpha is dropped.
pub fn load_grid(path: &Path) -> Result<RgbImage, OutputError> {
    Ok(image::open(path)?.to_rgb8())
}

/// Read a whole binary file into memory.
pub fn read_binary(path: &Path) -> Result<Vec<u8>, OutputError> {
    Ok(std::fs::read(path)?)
}

/// Write raw bytes with no header or trailer, creating parent directories.
pub fn write_binary(data: &[u8], path: &Path) -> Result<(), OutputError> {
    create_parent_dirs(path)?;
    std::fs::write(path, data)?;
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// Each grid cell becomes a `factor x factor` block, which is easier to paint
/// over in an image editor. [`downscale_blocks`] reverses it.
pub fn scale_image(image: RgbImage, factor: u8) -> RgbImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image::imageops::resize(&image, w * factor as u32, h * factor as u32, FilterType::Nearest)
}

/// Collapse an image scaled by [`scale_image`] back to `(width, height)`.
///
/// Each block becomes its most frequent color; ties go to the color seen first
/// in row-major order. Returns `None` unless the image is the same integer
/// multiple of `(width, height)` on both axes.
pub fn downscale_blocks(image: &RgbImage, (width, height): (u32, u32)) -> Option<RgbImage> {
    let (w, h) = image.dimensions();
    if width == 0 || height == 0 || w % width != 0 || h % height != 0 {
        return None;
    }
    let factor = w / width;
    if factor == 0 || h / height != factor {
        return None;
    }
    if factor == 1 {
        return Some(image.clone());
    }

    Some(RgbImage::from_fn(width, height, |bx, by| {
        let mut counts: HashMap<Rgb<u8>, u32> = HashMap::new();
        let mut order: Vec<Rgb<u8>> = Vec::new();
        for y in by * factor..(by + 1) * factor {
            for x in bx * factor..(bx + 1) * factor {
                let pixel = *image.get_pixel(x, y);
                let count = counts.entry(pixel).or_insert(0);
                if *count == 0 {
                    order.push(pixel);
                }
                *count += 1;
            }
        }
        let mut best = order[0];
        for color in &order[1..] {
            if counts[color] > counts[&best] {
                best = *color;
            }
        }
        best
    }))
}

/// Generate the output path for a command.
///
/// With an explicit `-o` the path is used as-is (a directory gets the input's
/// file name plus `extension`). Otherwise `extension` is appended to the input
/// path: `firmware.bin` becomes `firmware.bin.png`.
pub fn generate_output_path(input: &Path, output_arg: Option<&Path>, extension: &str) -> PathBuf {
    let with_extension = |path: &Path| {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(extension);
        PathBuf::from(name)
    };

    match output_arg {
        Some(output) => {
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                let file_name = input.file_name().map(PathBuf::from).unwrap_or_else(|| "output".into());
                output.join(with_extension(&file_name))
            } else {
                output.to_path_buf()
            }
        }
        None => with_extension(input),
    }
}
