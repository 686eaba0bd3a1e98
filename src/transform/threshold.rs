use multiversion::multiversion;

use crate::{
    error::Result,
    texture::{Shape, Shape2D, TextureMutSlice, TextureRef, TextureSlice},
    transform::{
        executor::{self, check_shapes},
        luma::{binarize, luma},
        traits::TextureTransform,
    },
};

/// Binary threshold over luminance: dark pixels go to 0, light to 255.
/// Same three strategies as [crate::transform::grayscale::GrayscaleTransform],
/// with one extra comparison per pixel.
pub enum ThresholdTransform {
    Seq,
    Par,
    RawPar,
}

impl ThresholdTransform {
    pub fn auto(shape_hint: Shape2D) -> Self {
        let (width, height) = shape_hint;
        let count = width * height;

        if width < 450 || count < 202500 {
            return ThresholdTransform::Seq;
        }
        ThresholdTransform::Par
    }

    pub fn build(&self, cutoff: u8) -> impl TextureTransform<Input = u8, Output = u8> {
        match self {
            ThresholdTransform::Seq => ThresholdTransformImpl::Seq(ThresholdSeq { cutoff }),
            ThresholdTransform::Par => ThresholdTransformImpl::Par(ThresholdPar { cutoff }),
            ThresholdTransform::RawPar => {
                ThresholdTransformImpl::RawPar(ThresholdRawPar { cutoff })
            }
        }
    }
}

enum ThresholdTransformImpl {
    Seq(ThresholdSeq),
    Par(ThresholdPar),
    RawPar(ThresholdRawPar),
}

impl TextureTransform for ThresholdTransformImpl {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        output: TextureMutSlice<'o, Self::Output>,
    ) -> Result<(
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    )> {
        match self {
            ThresholdTransformImpl::Seq(t) => t.apply(input, output),
            ThresholdTransformImpl::Par(t) => t.apply(input, output),
            ThresholdTransformImpl::RawPar(t) => t.apply(input, output),
        }
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) {
        match self {
            ThresholdTransformImpl::Seq(t) => t.prepare(in_shape, out_shape),
            ThresholdTransformImpl::Par(t) => t.prepare(in_shape, out_shape),
            ThresholdTransformImpl::RawPar(t) => t.prepare(in_shape, out_shape),
        };
    }
}

struct ThresholdSeq {
    cutoff: u8,
}

impl TextureTransform for ThresholdSeq {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        mut output: TextureMutSlice<'o, Self::Output>,
    ) -> Result<(
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    )> {
        check_shapes(&input, &output)?;
        scalar_impl(
            input.as_ref(),
            output.as_mut(),
            input.planes() as usize,
            self.cutoff,
        );
        Ok((input, output))
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

struct ThresholdPar {
    cutoff: u8,
}

impl TextureTransform for ThresholdPar {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        mut output: TextureMutSlice<'o, Self::Output>,
    ) -> Result<(
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    )> {
        check_shapes(&input, &output)?;
        let cutoff = self.cutoff;
        executor::scan_partitioned(
            input.as_ref(),
            input.planes() as usize,
            output.as_mut(),
            move |r, g, b| binarize(luma(r, g, b), cutoff),
        );
        Ok((input, output))
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

struct ThresholdRawPar {
    cutoff: u8,
}

impl TextureTransform for ThresholdRawPar {
    type Input = u8;
    type Output = u8;

    fn apply<'i, 'o>(
        &mut self,
        input: TextureSlice<'i, Self::Input>,
        mut output: TextureMutSlice<'o, Self::Output>,
    ) -> Result<(
        TextureSlice<'i, Self::Input>,
        TextureMutSlice<'o, Self::Output>,
    )> {
        check_shapes(&input, &output)?;
        let cutoff = self.cutoff;
        executor::scan_partitioned_unchecked(
            input.as_ref(),
            input.planes() as usize,
            output.as_mut(),
            move |r, g, b| binarize(luma(r, g, b), cutoff),
        );
        Ok((input, output))
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

#[multiversion(targets("x86_64+avx512f", "x86_64+avx2", "x86_64+sse2"))]
fn scalar_impl(in_buf: &[u8], out_buf: &mut [u8], planes: usize, cutoff: u8) {
    debug_assert!(planes == 3 || planes == 4);
    in_buf
        .chunks_exact(planes)
        .zip(out_buf.iter_mut())
        .for_each(|(pixel, dst)| {
            *dst = binarize(luma(pixel[0], pixel[1], pixel[2]), cutoff);
        });
}
