use crate::density::Density;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgb, RgbImage,
};
use log::debug;
use std::{
    fs::create_dir_all,
    io::Write,
    path::{Path, PathBuf},
};

/// Canvas fill (Material blue 500).
pub const BACKGROUND: Rgb<u8> = Rgb([33, 150, 243]);

/// Circle fill.
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Padding between the canvas edge and the circle, as a percentage of the icon size.
pub const INSET_PERCENT: u32 = 15;

/// Every density writes the same file name into its own mipmap directory.
pub const ICON_FILENAME: &str = "ic_launcher.png";

/// Smallest size whose inset is at least one pixel. Anything smaller draws a
/// circle touching the canvas edges.
pub const MIN_ICON_SIZE: u32 = 7;

/// A launcher icon that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub density: Density,
    pub path: PathBuf,
    pub size: u32,
}

/// Write one icon per density under `root`, stopping at the first failure.
pub fn generate_icons(root: &Path) -> Result<Vec<GeneratedIcon>> {
    println!("Generating Android launcher icons in {}...", root.display());

    let mut generated = Vec::with_capacity(Density::ALL.len());
    for density in Density::ALL {
        generated.push(generate_icon(root, density)?);
    }

    println!("✓ All icons created successfully!");
    Ok(generated)
}

/// Render and write the icon for a single density, creating its directory if needed.
pub fn generate_icon(root: &Path, density: Density) -> Result<GeneratedIcon> {
    let mipmap_dir = root.join(density.dir_name());
    create_dir_all(&mipmap_dir)
        .with_context(|| format!("Can't create directory {}", mipmap_dir.display()))?;
    debug!("ensured {}", mipmap_dir.display());

    let size = density.size();
    let icon = render_icon(size)?;

    let output_path = mipmap_dir.join(ICON_FILENAME);
    save_png(&icon, &output_path)?;
    println!("  ✓ Generated {} ({size}x{size})", output_path.display());

    Ok(GeneratedIcon {
        density,
        path: output_path,
        size,
    })
}

/// Padding in whole pixels for an icon of the given size, rounded down.
pub fn inset_for(size: u32) -> u32 {
    // Never larger than `size`, so the narrowing cast is lossless
    (u64::from(size) * u64::from(INSET_PERCENT) / 100) as u32
}

/// Draw the placeholder: a white circle inset on a solid blue square.
pub fn render_icon(size: u32) -> Result<RgbImage> {
    if size < MIN_ICON_SIZE {
        anyhow::bail!(
            "Icon size {size}px is too small, the {INSET_PERCENT}% inset needs at least {MIN_ICON_SIZE}px"
        );
    }

    let inset = inset_for(size);
    let mut canvas = RgbImage::from_pixel(size, size, BACKGROUND);
    fill_circle(
        &mut canvas,
        (inset, inset),
        (size - inset, size - inset),
        FOREGROUND,
    );

    Ok(canvas)
}

/// Fill the circle inscribed in the box `top_left..=bottom_right`. Both corner
/// pixels belong to the box, so it spans `x1 - x0 + 1` pixels.
/// A pixel is painted when its centre lies inside the circle; no anti-aliasing.
fn fill_circle(
    canvas: &mut RgbImage,
    top_left: (u32, u32),
    bottom_right: (u32, u32),
    color: Rgb<u8>,
) {
    let (x0, y0) = top_left;
    let (x1, y1) = bottom_right;
    let center_x = (x0 as f32 + x1 as f32 + 1.0) / 2.0;
    let center_y = (y0 as f32 + y1 as f32 + 1.0) / 2.0;
    let radius = ((x1 - x0).min(y1 - y0) as f32 + 1.0) / 2.0;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - center_x;
        let dy = y as f32 + 0.5 - center_y;

        if dx * dx + dy * dy <= radius * radius {
            *pixel = color;
        }
    }
}

/// Write the icon as PNG, replacing whatever was at `path`.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    write_png(image.as_raw(), &mut buf, image.width())?;

    std::fs::write(path, &buf)
        .with_context(|| format!("Failed to write PNG file {}", path.display()))?;
    debug!("wrote {} bytes to {}", buf.len(), path.display());
    Ok(())
}

// Fixed encoder settings keep the output byte-identical between runs
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image_data, size, size, ColorType::Rgb8)
        .context("Failed to encode PNG")?;
    Ok(())
}
