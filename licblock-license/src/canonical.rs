//! Licensee name canonicalization.

/// Reduces a licensee name to the form that is signed.
///
/// All whitespace is removed and every character is uppercased with a
/// locale-independent one-to-one mapping. Characters whose uppercase form
/// expands to several characters (such as `ß`) are kept as they are, unless
/// a one-to-one simple mapping exists (the Greek iota-subscript letters).
/// The result has the same character count as the stripped input and
/// matches the issuer's invariant-culture uppercasing.
#[must_use]
pub fn canonicalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .map(simple_uppercase)
        .collect()
}

fn simple_uppercase(c: char) -> char {
    if let Some(upper) = iota_subscript_uppercase(c) {
        return upper;
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Greek letters with iota subscript whose full uppercase expands (`ᾳ` to
/// `ΑΙ`) but whose simple uppercase is the matching prosgegrammeni letter.
fn iota_subscript_uppercase(c: char) -> Option<char> {
    let code = c as u32;
    let upper = match code {
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => code + 8,
        0x1FB3 | 0x1FC3 | 0x1FF3 => code + 9,
        _ => return None,
    };
    char::from_u32(upper)
}
