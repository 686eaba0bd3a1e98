use std::hint::black_box;

use criterion::{
    BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main, measurement::WallTime,
};

pub(crate) mod utils;

use image::buffer::ConvertBuffer;
use lumabench::{
    error::Result,
    prelude::{DEFAULT_CUTOFF, TextureTransform, ThresholdTransform},
    texture::{Shape, Texture, TextureMutSlice, TextureRef, TextureSlice},
};

// threshold through the image crate's grayscale conversion followed by a
// plain compare pass. allocates a vec for each transform, baseline only
struct ImBufThreshold {
    cutoff: u8,
}

impl TextureTransform for ImBufThreshold {
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
        let im_buf = image::ImageBuffer::<image::Rgb<u8>, &[u8]>::from_raw(
            input.width(),
            input.height(),
            input.as_ref(),
        )
        .unwrap();

        let grayscale: image::ImageBuffer<image::Luma<u8>, Vec<u8>> = im_buf.convert();
        let cutoff = self.cutoff;
        output
            .as_mut()
            .iter_mut()
            .zip(grayscale.as_raw().iter())
            .for_each(|(dst, value)| {
                *dst = if *value < cutoff { 0 } else { 255 };
            });

        Ok((input, output))
    }

    fn prepare(&mut self, _: Shape, _: Shape) {}
}

fn bench_transform(
    group: &mut BenchmarkGroup<'_, WallTime>,
    transform: &mut impl TextureTransform<Input = u8, Output = u8>,
    name: &str,
    size: u32,
) {
    let image = utils::gen_random_rgb(size);
    let mut binary = black_box(Texture::<u8>::new(size, size, 1));

    group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
        let input = image.as_texture_slice();

        b.iter(|| {
            let res = transform.apply(input, binary.as_texture_mut_slice());
            black_box(res).unwrap();
        });
    });
}

fn bench_by_param(
    group: &mut BenchmarkGroup<'_, WallTime>,
    transform: &mut impl TextureTransform<Input = u8, Output = u8>,
    name: &str,
    sizes: &[u32],
) {
    for size in sizes {
        bench_transform(group, transform, name, *size);
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold_transform");

    let sizes = [100u32, 300, 500, 600];
    bench_by_param(
        &mut group,
        &mut ImBufThreshold {
            cutoff: DEFAULT_CUTOFF,
        },
        "imbuf",
        &sizes,
    );
    bench_by_param(
        &mut group,
        &mut ThresholdTransform::Seq.build(DEFAULT_CUTOFF),
        "scalar",
        &sizes,
    );
    bench_by_param(
        &mut group,
        &mut ThresholdTransform::Par.build(DEFAULT_CUTOFF),
        "scalar_par",
        &sizes,
    );
    bench_by_param(
        &mut group,
        &mut ThresholdTransform::RawPar.build(DEFAULT_CUTOFF),
        "scalar_par_raw",
        &sizes,
    );

    group.finish();
}

criterion_group!(threshold_transform, criterion_benchmark);
criterion_main!(threshold_transform);
