use multiversion::multiversion;

use crate::{
    error::Result,
    texture::{Shape, Shape2D, TextureMutSlice, TextureRef, TextureSlice},
    transform::{
        executor::{self, check_shapes},
        luma::luma,
        traits::TextureTransform,
    },
};

pub enum GrayscaleTransform {
    Seq,
    Par,
    RawPar,
}

impl GrayscaleTransform {
    pub fn auto(shape_hint: Shape2D) -> Self {
        let (width, height) = shape_hint;
        let count = width * height;

        if width < 450 || count < 202500 {
            return GrayscaleTransform::Seq;
        }
        GrayscaleTransform::Par
    }

    pub fn build(&self) -> impl TextureTransform<Input = u8, Output = u8> {
        match self {
            GrayscaleTransform::Seq => GrayscaleTransformImpl::Seq(GrayscaleSeq {}),
            GrayscaleTransform::Par => GrayscaleTransformImpl::Par(GrayscalePar {}),
            GrayscaleTransform::RawPar => GrayscaleTransformImpl::RawPar(GrayscaleRawPar {}),
        }
    }
}

enum GrayscaleTransformImpl {
    Seq(GrayscaleSeq),
    Par(GrayscalePar),
    RawPar(GrayscaleRawPar),
}

impl TextureTransform for GrayscaleTransformImpl {
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
            GrayscaleTransformImpl::Seq(t) => t.apply(input, output),
            GrayscaleTransformImpl::Par(t) => t.apply(input, output),
            GrayscaleTransformImpl::RawPar(t) => t.apply(input, output),
        }
    }

    fn prepare(&mut self, in_shape: Shape, out_shape: Shape) {
        match self {
            GrayscaleTransformImpl::Seq(t) => t.prepare(in_shape, out_shape),
            GrayscaleTransformImpl::Par(t) => t.prepare(in_shape, out_shape),
            GrayscaleTransformImpl::RawPar(t) => t.prepare(in_shape, out_shape),
        };
    }
}

struct GrayscaleSeq {}

impl TextureTransform for GrayscaleSeq {
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
        scalar_impl(input.as_ref(), output.as_mut(), input.planes() as usize);
        Ok((input, output))
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

struct GrayscalePar {}

impl TextureTransform for GrayscalePar {
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
        executor::scan_partitioned(
            input.as_ref(),
            input.planes() as usize,
            output.as_mut(),
            luma,
        );
        Ok((input, output))
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

struct GrayscaleRawPar {}

impl TextureTransform for GrayscaleRawPar {
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
        executor::scan_partitioned_unchecked(
            input.as_ref(),
            input.planes() as usize,
            output.as_mut(),
            luma,
        );
        Ok((input, output))
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

#[multiversion(targets("x86_64+avx512f", "x86_64+avx2", "x86_64+sse2"))]
fn scalar_impl(in_buf: &[u8], out_buf: &mut [u8], planes: usize) {
    debug_assert!(planes == 3 || planes == 4);
    in_buf
        .chunks_exact(planes)
        .zip(out_buf.iter_mut())
        .for_each(|(pixel, dst)| {
            *dst = luma(pixel[0], pixel[1], pixel[2]);
        });
}
