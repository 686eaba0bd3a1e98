use image::DynamicImage;

use crate::{
    config::{BenchConfig, StrategyKind, TransformKind},
    error::Result,
    texture::{Texture, TextureRef, TextureSlice},
    transform::{
        grayscale::GrayscaleTransform, threshold::ThresholdTransform, traits::TextureTransform,
    },
};

pub mod config;
pub mod error;
pub mod texture;
pub mod transform;
pub mod utils;


pub mod prelude {
    pub use crate::{texture::prelude::*, transform::prelude::*};
}

pub fn run(config: BenchConfig, original_img: DynamicImage) -> Result<DynamicImage> {
    let image = original_img.to_rgb8();
    let input = TextureSlice::from_image_buffer(&image);
    let mut output = Texture::<u8>::new(image.width(), image.height(), 1);

    match config.transform {
        TransformKind::Grayscale => {
            let strategy = match config.strategy {
                StrategyKind::Auto => GrayscaleTransform::auto(input.shape_2d()),
                StrategyKind::Seq => GrayscaleTransform::Seq,
                StrategyKind::Par => GrayscaleTransform::Par,
                StrategyKind::RawPar => GrayscaleTransform::RawPar,
            };
            strategy.build().once(input, output.as_texture_mut_slice())?;
        }
        TransformKind::Threshold => {
            let strategy = match config.strategy {
                StrategyKind::Auto => ThresholdTransform::auto(input.shape_2d()),
                StrategyKind::Seq => ThresholdTransform::Seq,
                StrategyKind::Par => ThresholdTransform::Par,
                StrategyKind::RawPar => ThresholdTransform::RawPar,
            };
            strategy
                .build(config.cutoff)
                .once(input, output.as_texture_mut_slice())?;
        }
    }

    Ok(DynamicImage::ImageLuma8(output.into_luma_image()?))
}
