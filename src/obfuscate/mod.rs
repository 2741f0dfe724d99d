//! Obfuscate strings to keep spam-bots from sniffing them.
//!
//! Each ASCII character is independently rendered as a decimal character
//! reference, a hexadecimal character reference, or left alone. The result
//! displays the same in a browser but differs on every render.

use rand::Rng;
use std::fmt::Write as _;

/// Obfuscate `value` with the thread-local RNG.
pub fn obfuscate(value: &str) -> String {
    obfuscate_with(value, &mut rand::rng())
}

/// Obfuscate an e-mail address; `@` is always encoded.
pub fn obfuscate_email(email: &str) -> String {
    obfuscate_email_with(email, &mut rand::rng())
}

/// Obfuscate `value` drawing from `rng`.
///
/// The first character above U+0080 ends the walk: that character alone is
/// returned and everything before and after it is discarded.
pub fn obfuscate_with<R: Rng>(value: &str, rng: &mut R) -> String {
    let mut safe = String::with_capacity(value.len() * 4);

    for letter in value.chars() {
        let code = u32::from(letter);
        if code > 128 {
            return letter.to_string();
        }
        match rng.random_range(1..=3) {
            1 => {
                let _ = write!(safe, "&#{code};");
            }
            2 => {
                let _ = write!(safe, "&#x{code:x};");
            }
            _ => safe.push(letter),
        }
    }

    safe
}

/// [`obfuscate_email`] drawing from `rng`.
pub fn obfuscate_email_with<R: Rng>(email: &str, rng: &mut R) -> String {
    obfuscate_with(email, rng).replace('@', "&#64;")
}
