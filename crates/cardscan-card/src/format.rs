/// Group a 16-digit number for display as `#### #### #### ####`.
///
/// Anything that is not exactly 16 characters passes through unchanged, so
/// partial reads never get mangled separators.
pub fn format_number(number: &str) -> String {
    if number.len() != 16 {
        return number.to_string();
    }
    let mut out = String::with_capacity(19);
    for (idx, ch) in number.chars().enumerate() {
        if idx == 4 || idx == 8 || idx == 12 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

/// Last 4 characters of a card number.
///
/// Callers guarantee the input holds at least 4 ASCII characters.
pub fn last_four(number: &str) -> &str {
    &number[number.len() - 4..]
}
