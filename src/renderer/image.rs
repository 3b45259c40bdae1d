//! Decoded images in CPU memory.
//!
//! Asset decoding happens elsewhere; this type only carries the result to
//! the backend. Pixels are stored row-major, top row first.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Image filled with a single color.
    pub fn filled(width: u32, height: u32, color: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    /// Wrap decoded pixel data. Returns `None` if the buffer length does not
    /// match `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Pixel) {
        if x < self.width && y < self.height {
            let index = (y * self.width + x) as usize;
            self.pixels[index] = color;
        }
    }

    /// Tightly packed RGBA8 bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pixels_checks_length() {
        assert!(Image::from_pixels(2, 2, vec![Pixel::TRANSPARENT; 3]).is_none());
        assert!(Image::from_pixels(2, 2, vec![Pixel::TRANSPARENT; 4]).is_some());
    }

    #[test]
    fn test_set_and_get_pixel() {
        let mut image = Image::filled(3, 2, Pixel::TRANSPARENT);
        let red = Pixel::rgba(255, 0, 0, 255);
        image.set_pixel(2, 1, red);
        image.set_pixel(9, 9, red);
        assert_eq!(image.pixel(2, 1), Some(red));
        assert_eq!(image.pixel(3, 0), None);
        assert_eq!(&image.to_rgba8()[20..24], &[255, 0, 0, 255]);
    }
}
