use serde::{Deserialize, Serialize};

use crate::expiry::Expiry;
use crate::format::{format_number, last_four};
use crate::issuer::issuer_slug;

/// A fully assembled scan result: a card number plus the decoded expiry
/// when one was read. Immutable once built.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DebitCard {
    pub number: String,
    pub expiry: Option<Expiry>,
}

impl DebitCard {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            expiry: None,
        }
    }

    pub fn with_expiry(number: impl Into<String>, expiry: Expiry) -> Self {
        Self {
            number: number.into(),
            expiry: Some(expiry),
        }
    }

    pub fn last4(&self) -> &str {
        last_four(&self.number)
    }

    pub fn issuer_slug(&self) -> Option<&'static str> {
        issuer_slug(&self.number)
    }

    pub fn formatted_number(&self) -> String {
        format_number(&self.number)
    }

    /// `MM/YY` display form of the expiry, when one was read and is valid.
    pub fn expiry_for_display(&self) -> Option<String> {
        self.expiry.as_ref().and_then(Expiry::formatted)
    }
}
