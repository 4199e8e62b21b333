/// Applies the casing of `word` to `replacement`.
///
/// An all-lowercase word leaves the replacement alone. An all-uppercase
/// word uppercases it. A word that starts with a capital letter gets the
/// first character of the replacement capitalized and nothing else is
/// touched. Anything else comes back lowercased.
pub(crate) fn restore_case(word: &str, replacement: &str) -> String {
    if is_lowercase(word) {
        return replacement.to_string();
    }

    if word == word.to_uppercase() {
        return replacement.to_uppercase();
    }

    match word.chars().next() {
        Some(c) if starts_upper(c) => capitalize_first(replacement),
        _ => replacement.to_lowercase(),
    }
}

pub(crate) fn is_lowercase(word: &str) -> bool {
    word == word.to_lowercase()
}

// Characters without case count as uppercase here, so "1Ab" is treated like
// a capitalized word.
fn starts_upper(c: char) -> bool {
    c.to_uppercase().eq(std::iter::once(c))
}

pub(crate) fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
