//! Shared noise tile for textured brushes.
//!
//! A single 64x64 grayscale tile generated once from a fixed seed and
//! stroked with repeat spread. Seeding keeps textured output identical
//! across runs, which the pixel-probe tests rely on.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tiny_skia::{Pixmap, PremultipliedColorU8};

use crate::constants::{NOISE_TILE_ALPHA, NOISE_TILE_SEED, NOISE_TILE_SIZE};

static NOISE_TILE: Lazy<Pixmap> = Lazy::new(build_tile);

/// The shared tile. Borrow with [`Pixmap::as_ref`] to build a pattern
/// shader from it.
pub(crate) fn tile() -> &'static Pixmap {
    &NOISE_TILE
}

fn build_tile() -> Pixmap {
    let mut pixmap =
        Pixmap::new(NOISE_TILE_SIZE, NOISE_TILE_SIZE).expect("tile size constant is nonzero");
    let mut rng = StdRng::seed_from_u64(NOISE_TILE_SEED);
    for px in pixmap.pixels_mut() {
        let gray: u8 = rng.gen_range(0..=255);
        // Pixmap stores premultiplied color; scale the gray by the alpha.
        let premul = (gray as u16 * NOISE_TILE_ALPHA as u16 / 255) as u8;
        if let Some(color) =
            PremultipliedColorU8::from_rgba(premul, premul, premul, NOISE_TILE_ALPHA)
        {
            *px = color;
        }
    }
    pixmap
}
