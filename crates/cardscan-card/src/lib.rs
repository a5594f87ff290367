//! Card-domain validation and formatting.
//!
//! Everything in this crate is pure string/number work on already-assembled
//! digit strings: the Luhn checksum, issuer identification by the 6-digit
//! card prefix, expiry decoding and display formatting. No recognition
//! machinery leaks in here, which keeps the whole crate trivially testable.
//!
//! Recognition misses are `Option`/`bool` returns; nothing in this crate
//! panics on malformed input.

mod card;
mod expiry;
mod format;
mod issuer;
mod luhn;

pub use card::DebitCard;
pub use expiry::Expiry;
pub use format::{format_number, last_four};
pub use issuer::issuer_slug;
pub use luhn::{is_card_number_valid, luhn_check};
