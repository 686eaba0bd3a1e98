use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;

pub fn read_image(path: &String) -> crate::error::Result<DynamicImage> {
    let image = ImageReader::open(path)?.decode()?;
    Ok(image)
}

pub fn write_image(
    image: &DynamicImage,
    path: &String,
    image_format: ImageFormat,
) -> crate::error::Result {
    image.write_to(&mut File::create(path)?, image_format)?;
    Ok(())
}
