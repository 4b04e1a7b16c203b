use rand::{Rng, distr::Alphanumeric};

/// Generates a random alphanumeric string of the specified length.
///
/// Used for the temporary passwords handed to imported accounts; the plain
/// value is never stored, only its bcrypt hash.
pub fn generate_random_string(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect::<String>()
}
