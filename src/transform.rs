pub mod executor;
pub mod grayscale;
pub mod luma;
pub mod threshold;
pub mod traits;

pub mod prelude {
    pub use super::{
        grayscale::GrayscaleTransform, luma::DEFAULT_CUTOFF, threshold::ThresholdTransform,
        traits::TextureTransform,
    };
}
