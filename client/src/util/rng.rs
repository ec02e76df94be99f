//! Seeded RNG for the game engines.
//!
//! The `arcade` engines take an injected `Rng`, which keeps them off the
//! `getrandom` wasm backend entirely: in the browser the seed comes from
//! `Math.random` and the wall clock, on the server it is fixed (decks are
//! face-down in SSR output, so determinism there is invisible).

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Build a small, fast RNG for dealing decks and drawing delays.
#[must_use]
pub fn game_rng() -> SmallRng {
    #[cfg(feature = "hydrate")]
    {
        let seed = js_sys::Math::random().to_bits() ^ js_sys::Date::now().to_bits().rotate_left(17);
        SmallRng::seed_from_u64(seed)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SmallRng::seed_from_u64(0x5eed_cafe)
    }
}
