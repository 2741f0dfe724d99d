pub mod constants;
pub mod string_utils;

pub use constants::*;
pub use string_utils::{normalize_newlines, strip_prefix_ignore_ascii_case};
