//! Password generation for new site entries.

use rand::Rng;

/// Characters a generated password is drawn from: ASCII letters, digits,
/// and a set of common symbols.
pub const CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Length used when the caller does not pick one.
pub const DEFAULT_LENGTH: usize = 12;

/// Generate a random password of `len` characters from [`CHARSET`].
#[must_use]
pub fn generate_password(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
