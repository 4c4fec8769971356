//! Random test data drawn through a color scheme

use crate::schemes::ColorScheme;
use rand::Rng;

/// Generate `len` bytes whose colors are uniform over the scheme's classes.
///
/// Each byte picks a random class, then a random member of that class, so
/// small classes (zero, all-ones) show up as often as large ones.
pub fn random_buffer<R: Rng + ?Sized>(len: usize, scheme: &ColorScheme, rng: &mut R) -> Vec<u8> {
    (0..len).map(|_| scheme.random_class(rng).choose(rng)).collect()
}
