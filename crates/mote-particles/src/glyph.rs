//! Target-position sampling for the formation field
//!
//! Two sources: a built-in 5x7 glyph atlas rendered straight into normalized
//! scene coordinates, and a luminance-thresholded image mask for arbitrary
//! shapes. Both return points in the [-aspect, aspect] x [-1, 1] scene space
//! the field and shader work in.

use image::GrayImage;
use mote_core::{MoteError, Result};
use std::path::Path;

const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;
/// Column advance per character (glyph plus one column of spacing)
const GLYPH_ADVANCE: usize = GLYPH_COLS + 1;

/// Luminance threshold above which a mask pixel becomes a target point
const MASK_THRESHOLD: u8 = 128;

/// Row bitmaps (5 bits each, MSB = leftmost column) for one character.
/// Unknown characters render as blank space.
fn glyph_rows(c: char) -> [u8; GLYPH_ROWS] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        _ => [0x00; GLYPH_ROWS],
    }
}

/// Sample a line of text into target points.
///
/// The string is centered and scaled to fill most of the horizontal extent
/// without outgrowing the vertical one. Each lit atlas cell contributes a 2x2
/// grid of points so the formed glyphs read as solid strokes.
pub fn sample_text(text: &str, aspect: f32) -> Vec<[f32; 2]> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }

    let total_cols = chars.len() * GLYPH_ADVANCE - 1;
    let cell = (aspect * 2.0 * 0.8 / total_cols as f32).min(2.0 * 0.4 / GLYPH_ROWS as f32);
    let half_cols = total_cols as f32 / 2.0;
    let half_rows = GLYPH_ROWS as f32 / 2.0;

    let mut points = Vec::new();
    for (ci, c) in chars.iter().enumerate() {
        let rows = glyph_rows(*c);
        let col_base = ci * GLYPH_ADVANCE;
        for (r, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                    continue;
                }
                let gc = (col_base + col) as f32;
                let gr = r as f32;
                for (sub_x, sub_y) in [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)] {
                    let x = (gc + sub_x - half_cols) * cell;
                    let y = (half_rows - gr - sub_y) * cell;
                    points.push([x, y]);
                }
            }
        }
    }
    points
}

/// Sample target points from a grayscale mask: every `step`-th pixel brighter
/// than the threshold becomes a point, mapped into scene coordinates exactly
/// like the text sampler's output space.
pub fn sample_mask(mask: &GrayImage, step: u32, aspect: f32) -> Vec<[f32; 2]> {
    let (width, height) = mask.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let step = step.max(1);
    let mut points = Vec::new();
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            if mask.get_pixel(x, y).0[0] > MASK_THRESHOLD {
                let nx = (x as f32 / width as f32 - 0.5) * 2.0 * aspect;
                let ny = (0.5 - y as f32 / height as f32) * 2.0;
                points.push([nx, ny]);
            }
            x += step;
        }
        y += step;
    }
    points
}

/// Load an image file and sample it as a formation mask
pub fn load_mask(path: &Path, step: u32, aspect: f32) -> Result<Vec<[f32; 2]>> {
    let img = image::open(path)
        .map_err(|e| MoteError::SamplingError(format!("{}: {e}", path.display())))?;
    Ok(sample_mask(&img.to_luma8(), step, aspect))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_produces_points() {
        let points = sample_text("A", 1.0);
        assert!(!points.is_empty());
        // 'A' lights 18 cells, 4 sub-points each
        assert_eq!(points.len(), 18 * 4);
    }

    #[test]
    fn blank_text_produces_no_points() {
        assert!(sample_text("", 1.0).is_empty());
        assert!(sample_text("   ", 1.0).is_empty());
    }

    #[test]
    fn points_stay_inside_scene_bounds() {
        let aspect = 16.0 / 9.0;
        for point in sample_text("HELLO WORLD", aspect) {
            assert!(point[0].abs() <= aspect);
            assert!(point[1].abs() <= 1.0);
        }
    }

    #[test]
    fn text_is_centered() {
        let points = sample_text("MOTE", 1.5);
        let (min_x, max_x) = points.iter().fold((f32::MAX, f32::MIN), |(lo, hi), p| {
            (lo.min(p[0]), hi.max(p[0]))
        });
        assert!((min_x + max_x).abs() < 0.1);
    }

    #[test]
    fn mask_sampling_thresholds_luminance() {
        let mut mask = GrayImage::new(4, 4);
        mask.put_pixel(0, 0, image::Luma([255]));
        mask.put_pixel(2, 2, image::Luma([200]));
        mask.put_pixel(3, 3, image::Luma([10]));

        let points = sample_mask(&mask, 1, 1.0);
        assert_eq!(points.len(), 2);

        // Top-left pixel maps left of center and above center
        assert!(points[0][0] < 0.0);
        assert!(points[0][1] > 0.0);
    }

    #[test]
    fn mask_step_skips_pixels() {
        let mut mask = GrayImage::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                mask.put_pixel(x, y, image::Luma([255]));
            }
        }
        assert_eq!(sample_mask(&mask, 1, 1.0).len(), 16);
        assert_eq!(sample_mask(&mask, 2, 1.0).len(), 4);
    }
}
