use lumabench::texture::Texture;
use rand::Rng;

/// Random interleaved RGB texture, stand-in for the decoded benchmark asset
pub fn gen_random_rgb(size: u32) -> Texture<u8> {
    let mut rng = rand::rng();
    let buffer: Vec<u8> = (0..(size * size * 3) as usize)
        .map(|_| rng.random::<u8>())
        .collect();
    Texture::from_slice(size, size, 3, &buffer)
}
