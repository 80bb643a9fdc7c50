use base64::{Engine as _, engine::general_purpose::STANDARD};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::Widget,
};
use thiserror::Error;

use crate::model::Artwork;

/// Terminal rows the artwork occupies. Half-block rendering packs two
/// pixel rows into each cell row; columns follow the advertised aspect
/// ratio, so a square image comes out as ART_ROWS x ART_ROWS*2 cells.
pub const ART_ROWS: u16 = 16;

#[derive(Error, Debug)]
pub enum ArtworkError {
    #[error("Invalid base64 artwork: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Undecodable artwork image: {0}")]
    Image(#[from] image::ImageError),
}

/// Artwork decoded and resampled to a terminal cell grid: `rows * 2`
/// pixel rows of `cols` RGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkImage {
    pixels: Vec<Vec<(u8, u8, u8)>>,
    cols: u16,
    rows: u16,
}

impl ArtworkImage {
    pub fn decode(artwork: &Artwork) -> Result<Self, ArtworkError> {
        let bytes = STANDARD.decode(artwork.bytes.as_bytes())?;
        let img = image::load_from_memory(&bytes)?;

        let rows = ART_ROWS;
        let cols = Self::cols_for(artwork.width, artwork.height, rows);
        let px_w = cols as u32;
        let px_h = (rows as u32) * 2;

        let resized = img.resize_exact(px_w, px_h, image::imageops::FilterType::Lanczos3);
        let rgb = resized.to_rgb8();

        let mut pixels = Vec::with_capacity(px_h as usize);
        for y in 0..px_h {
            let mut row = Vec::with_capacity(px_w as usize);
            for x in 0..px_w {
                let p = rgb.get_pixel(x, y);
                row.push((p[0], p[1], p[2]));
            }
            pixels.push(row);
        }

        Ok(Self { pixels, cols, rows })
    }

    // Dimensions come straight off the wire; the ratio is taken in u64 so
    // an absurd width cannot overflow.
    fn cols_for(width: u32, height: u32, rows: u16) -> u16 {
        if width == 0 || height == 0 {
            return rows * 2;
        }
        let cols = (rows as u64 * 2 * width as u64) / height as u64;
        cols.clamp(1, u16::MAX as u64) as u16
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }
}

pub struct ArtworkWidget<'a> {
    image: &'a ArtworkImage,
}

impl<'a> ArtworkWidget<'a> {
    pub fn new(image: &'a ArtworkImage) -> Self {
        Self { image }
    }
}

impl Widget for ArtworkWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = (area.height).min(self.image.rows) as usize;
        let cols = (area.width).min(self.image.cols) as usize;
        for cy in 0..rows {
            let top_y = cy * 2;
            let bot_y = top_y + 1;
            for cx in 0..cols {
                let top = self.image.pixels[top_y][cx];
                let bot = self
                    .image
                    .pixels
                    .get(bot_y)
                    .map(|r| r[cx])
                    .unwrap_or(top);
                let x = area.x + cx as u16;
                let y = area.y + cy as u16;
                buf[(x, y)]
                    .set_char('▀')
                    .set_fg(Color::Rgb(top.0, top.1, top.2))
                    .set_bg(Color::Rgb(bot.0, bot.1, bot.2));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    // 1x1 PNG.
    const ONE_PIXEL_PNG: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

    #[test]
    fn decodes_square_artwork_to_cell_grid() {
        let artwork = Artwork {
            bytes: ONE_PIXEL_PNG.to_string(),
            width: 180,
            height: 180,
        };
        let image = ArtworkImage::decode(&artwork).unwrap();
        assert_eq!(image.rows(), ART_ROWS);
        assert_eq!(image.cols(), ART_ROWS * 2);
        assert_eq!(image.pixels.len(), (ART_ROWS * 2) as usize);
        assert_eq!(image.pixels[0].len(), (ART_ROWS * 2) as usize);
    }

    #[test]
    fn wide_artwork_gets_more_columns() {
        assert_eq!(ArtworkImage::cols_for(360, 180, ART_ROWS), ART_ROWS * 4);
    }

    #[test]
    fn zero_dimensions_fall_back_to_square() {
        assert_eq!(ArtworkImage::cols_for(0, 0, ART_ROWS), ART_ROWS * 2);
    }

    #[test]
    fn absurd_dimensions_clamp_instead_of_overflowing() {
        assert_eq!(ArtworkImage::cols_for(u32::MAX, 1, ART_ROWS), u16::MAX);
        assert_eq!(ArtworkImage::cols_for(1, u32::MAX, ART_ROWS), 1);
    }

    #[test]
    fn invalid_base64_is_an_error() {
        let artwork = Artwork {
            bytes: "not base64!!".to_string(),
            width: 180,
            height: 180,
        };
        assert!(matches!(
            ArtworkImage::decode(&artwork),
            Err(ArtworkError::Base64(_))
        ));
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        let artwork = Artwork {
            bytes: STANDARD.encode(b"AAAA not an image"),
            width: 180,
            height: 180,
        };
        assert!(matches!(
            ArtworkImage::decode(&artwork),
            Err(ArtworkError::Image(_))
        ));
    }
}
