//! In-memory pixel buffers exchanged between the pipeline stages

use crate::overlay::common::error::{OverlayError, Result};

/// Bytes per RGBA8 pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// A single RGBA8 pixel. Alpha is carried through every transform untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub fn from_slice(px: &[u8]) -> Self {
        Self { r: px[0], g: px[1], b: px[2], a: px[3] }
    }

    #[inline]
    pub fn write_to(self, px: &mut [u8]) {
        px[0] = self.r;
        px[1] = self.g;
        px[2] = self.b;
        px[3] = self.a;
    }

    #[inline]
    pub fn same_rgb(self, other: Rgba8) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }
}

/// A pixel position inside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

impl PixelPoint {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl ImageRect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> usize {
        self.x + self.width
    }

    pub fn bottom(&self) -> usize {
        self.y + self.height
    }
}

/// Row-major RGBA8 frame with a fixed stride of `width * 4`.
///
/// A frame is owned by exactly one pipeline stage at a time: capture hands it
/// to the transformer by value, which hands it on to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(OverlayError::InvalidDimensions(width, height));
        }
        let expected = width * height * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(OverlayError::InvalidFrameBuffer {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn filled(width: usize, height: usize, color: Rgba8) -> Result<Self> {
        Self::from_fn(width, height, |_, _| color)
    }

    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> Rgba8,
    {
        let mut data = Vec::with_capacity(width * height * BYTES_PER_PIXEL);
        for y in 0..height {
            for x in 0..width {
                let px = f(x, y);
                data.extend_from_slice(&[px.r, px.g, px.b, px.a]);
            }
        }
        Self::new(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.width * BYTES_PER_PIXEL
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    /// Panics if `(x, y)` is outside the frame.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba8 {
        let offset = self.offset(x, y);
        Rgba8::from_slice(&self.data[offset..offset + BYTES_PER_PIXEL])
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: Rgba8) {
        let offset = self.offset(x, y);
        px.write_to(&mut self.data[offset..offset + BYTES_PER_PIXEL]);
    }

    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// Copies `rect` into a new frame. The rectangle must lie inside this frame.
    pub fn crop(&self, rect: ImageRect) -> Result<Frame> {
        if rect.is_empty() {
            return Err(OverlayError::InvalidDimensions(rect.width, rect.height));
        }
        if rect.right() > self.width || rect.bottom() > self.height {
            return Err(OverlayError::OutOfBounds {
                x: rect.right() as i64,
                y: rect.bottom() as i64,
                width: self.width,
                height: self.height,
            });
        }

        let row_bytes = rect.width * BYTES_PER_PIXEL;
        let mut data = Vec::with_capacity(row_bytes * rect.height);
        for y in rect.y..rect.bottom() {
            let start = self.offset(rect.x, y);
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Frame::new(rect.width, rect.height, data)
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        y * self.stride() + x * BYTES_PER_PIXEL
    }
}
