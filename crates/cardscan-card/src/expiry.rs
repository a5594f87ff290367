use serde::{Deserialize, Serialize};

/// A decoded card expiry: month, absolute year, and the raw 6-character
/// digit window it was read from.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Expiry {
    pub month: u32,
    pub year: u32,
    /// The raw digit window as recognized, before decoding.
    pub raw: String,
}

impl Expiry {
    /// Decode an expiry from a 6-character recognized digit window.
    ///
    /// The recognition model emits the window as `YYY?MM`: the year is the
    /// first three characters, the month the last two, and the character at
    /// index 3 belongs to neither. That layout is fixed by the model's
    /// training labels and is reproduced here as-is.
    ///
    /// The three-digit year value is the tail of a Solar Hijri calendar
    /// year; values above 90 fall in the 1300 century, the rest in 1400.
    /// Returns `None` for a wrong-length window, non-digit characters, or a
    /// month outside `[1, 12]`.
    pub fn from_raw(raw: &str) -> Option<Self> {
        if raw.len() != 6 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year_digits = &raw[0..3];
        let month_digits = &raw[4..6];
        let month: u32 = month_digits.parse().ok()?;
        let year: u32 = year_digits.parse().ok()?;
        if month == 0 || month > 12 {
            return None;
        }
        let century = if year > 90 { 1300 } else { 1400 };
        Some(Self {
            month,
            year: century + year,
            raw: raw.to_string(),
        })
    }

    /// A decoded expiry is displayable when the month is a real month and
    /// the year is positive.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month) && self.year > 0
    }

    /// `MM/YY` display form, or `None` when the expiry is not valid.
    ///
    /// The year is shortened to its last two digits only when its decimal
    /// representation is exactly 4 digits; any other width passes through
    /// untruncated.
    pub fn formatted(&self) -> Option<String> {
        if !self.is_valid() {
            return None;
        }
        let year = self.year.to_string();
        let year_tail = if year.len() == 4 { &year[2..] } else { &year[..] };
        Some(format!("{:02}/{}", self.month, year_tail))
    }

    /// The raw window with a `/` before index 4, e.g. `1409/12`.
    pub fn raw_grouped(&self) -> String {
        let mut out = String::with_capacity(self.raw.len() + 1);
        for (idx, ch) in self.raw.chars().enumerate() {
            if idx == 4 {
                out.push('/');
            }
            out.push(ch);
        }
        out
    }
}
