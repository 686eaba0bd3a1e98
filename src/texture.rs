use crate::error::LumabenchError;

/// (width, height, planes)
pub type Shape = (usize, usize, usize);
pub type Shape2D = (usize, usize);

/// Trait defining ops available on Textures with
/// lendable inner buffer
pub trait TextureRef: AsRef<[Self::Inner]> {
    type Inner;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn planes(&self) -> u32;

    #[inline]
    fn shape(&self) -> Shape {
        (
            self.width() as usize,
            self.height() as usize,
            self.planes() as usize,
        )
    }

    #[inline]
    fn shape_2d(&self) -> Shape2D {
        (self.width() as usize, self.height() as usize)
    }

    #[inline]
    fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}

/// Trait defining ops available on mutable
/// Textures
pub trait TextureMut: TextureRef + AsMut<[Self::Inner]> {}

/// Texture with owned buffer.
#[derive(Debug, Clone)]
pub struct Texture<T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: Vec<T>,
}

impl<T> AsRef<[T]> for Texture<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Texture<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> TextureRef for Texture<T> {
    type Inner = T;

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<T> TextureMut for Texture<T> {}

impl<T> Texture<T> {
    pub fn as_texture_slice<'s>(&'s self) -> TextureSlice<'s, T> {
        TextureSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &self.buffer,
        }
    }

    pub fn as_texture_mut_slice<'s>(&'s mut self) -> TextureMutSlice<'s, T> {
        TextureMutSlice {
            width: self.width,
            height: self.height,
            planes: self.planes,
            buffer: &mut self.buffer,
        }
    }
}

impl<T: std::clone::Clone> Texture<T> {
    pub fn from_slice(width: u32, height: u32, planes: u32, slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            (width * height * planes) as usize,
            "buffers don't match sizes"
        );
        Texture {
            width,
            height,
            planes,
            buffer: slice.to_owned(),
        }
    }
}

impl<T: Default + Copy> Texture<T> {
    pub fn new(width: u32, height: u32, planes: u32) -> Self {
        Self {
            width,
            height,
            planes,
            buffer: vec![T::default(); (width * height * planes) as usize],
        }
    }
}

impl Texture<u8> {
    /// Hand a computed single-plane buffer back as a typed image,
    /// without copying.
    pub fn into_luma_image(self) -> crate::error::Result<image::GrayImage> {
        debug_assert_eq!(self.planes, 1);
        let expected = (self.width * self.height) as usize;
        let actual = self.buffer.len();
        image::GrayImage::from_raw(self.width, self.height, self.buffer)
            .ok_or(LumabenchError::SizeMismatch { expected, actual })
    }
}

/// Texture with borrowed internal buffer
#[derive(Debug, Copy, Clone)]
pub struct TextureSlice<'a, T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: &'a [T],
}

impl<T> AsRef<[T]> for TextureSlice<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<'a, T> TextureSlice<'a, T> {
    pub fn new(width: u32, height: u32, planes: u32, buffer: &'a [T]) -> Self {
        Self {
            width,
            height,
            planes,
            buffer,
        }
    }
}

impl<'a> TextureSlice<'a, u8> {
    /// Borrow the flat samples of a decoded image buffer.
    pub fn from_image_buffer<P>(image: &'a image::ImageBuffer<P, Vec<u8>>) -> Self
    where
        P: image::Pixel<Subpixel = u8>,
    {
        Self {
            width: image.width(),
            height: image.height(),
            planes: P::CHANNEL_COUNT as u32,
            buffer: image.as_raw().as_slice(),
        }
    }
}

#[derive(Debug)]
pub struct TextureMutSlice<'a, T> {
    width: u32,
    height: u32,
    planes: u32,
    buffer: &'a mut [T],
}

impl<'a, T> AsRef<[T]> for TextureMutSlice<'a, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.buffer
    }
}

impl<'a, T> AsMut<[T]> for TextureMutSlice<'a, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.buffer
    }
}

impl<T> TextureRef for TextureMutSlice<'_, T> {
    type Inner = T;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn planes(&self) -> u32 {
        self.planes
    }
}

impl<T> TextureMut for TextureMutSlice<'_, T> {}

impl<'a, T> TextureMutSlice<'a, T> {
    pub fn new(width: u32, height: u32, planes: u32, buffer: &'a mut [T]) -> Self {
        Self {
            width,
            height,
            planes,
            buffer,
        }
    }
}

pub mod prelude {
    pub use super::{Texture, TextureMut, TextureMutSlice, TextureRef, TextureSlice};
}
