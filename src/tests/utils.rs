use rand::Rng;

use crate::texture::Texture;

/// Test image size - kept small for fast tests
pub const TEST_SIZE: usize = 100;

pub fn rand_channel(rng: &mut rand::rngs::ThreadRng) -> u8 {
    rng.random::<u8>()
}

/// Random interleaved RGB texture (planes = 3)
pub fn gen_random_rgb(width: usize, height: usize) -> Texture<u8> {
    let mut rng = rand::rng();
    let buffer: Vec<u8> = (0..width * height * 3)
        .map(|_| rand_channel(&mut rng))
        .collect();
    Texture::from_slice(width as u32, height as u32, 3, &buffer)
}
