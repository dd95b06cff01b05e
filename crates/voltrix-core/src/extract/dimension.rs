/// Extract the first maximal run of ASCII digits anywhere in the string.
///
/// Unit suffixes and fractional remainders are discarded: `90"` and `90.5`
/// both yield `"90"`. Returns `None` when the string carries no digit.
///
/// Caveat: "first run anywhere" means a leading section number wins over a
/// later measurement — `"Section 101, 90 inches"` yields `"101"`. Quote
/// processing depends on this exact order, so it is pinned by test and
/// held for product review rather than changed here.
pub fn leading_digit_run(raw: &str) -> Option<String> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let rest = &raw[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(rest[..end].to_string())
}
