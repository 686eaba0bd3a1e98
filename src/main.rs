use std::env;

use lumabench::{config::BenchConfig, run, utils::image as image_utils};

fn main() {
    let args: Vec<String> = env::args().collect();

    let input_image_path = &args[1];
    let output_image_path = &args[2];
    let config_path = &args[3];

    let image = image_utils::read_image(input_image_path).unwrap();
    let config: BenchConfig = BenchConfig::read_config(config_path).unwrap();
    let processed_image = run(config, image).unwrap();

    image_utils::write_image(&processed_image, output_image_path, image::ImageFormat::Png).unwrap();
}
