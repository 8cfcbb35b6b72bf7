/// Reversible rot13 letter substitution applied to phrases marked with a
/// leading `!` before they reach the rasterizer.
///
/// ASCII letters rotate 13 places within their case; everything else passes
/// through unchanged, so `rot13(rot13(s)) == s`.
pub fn rot13(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            'a'..='z' => char::from((c as u8 - b'a' + 13) % 26 + b'a'),
            'A'..='Z' => char::from((c as u8 - b'A' + 13) % 26 + b'A'),
            _ => c,
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/cipher.rs"]
mod tests;
