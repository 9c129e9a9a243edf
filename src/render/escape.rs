//! LaTeX escaping for free-text fields.

/// Reserved LaTeX characters and their text-mode substitutions.
const SUBSTITUTIONS: [(char, &str); 10] = [
    ('&', r"\&"),
    ('%', r"\%"),
    ('$', r"\$"),
    ('#', r"\#"),
    ('_', r"\_"),
    ('{', r"\{"),
    ('}', r"\}"),
    ('~', r"\textasciitilde{}"),
    ('^', r"\textasciicircum{}"),
    ('\\', r"\textbackslash{}"),
];

/// Look up the substitution for a reserved character.
pub fn substitution(c: char) -> Option<&'static str> {
    SUBSTITUTIONS
        .iter()
        .find(|(reserved, _)| *reserved == c)
        .map(|(_, replacement)| *replacement)
}

/// Check whether a character is reserved in LaTeX text mode.
pub fn is_reserved(c: char) -> bool {
    substitution(c).is_some()
}

/// Escape reserved LaTeX characters in raw text.
///
/// Input is scanned once, left to right, so the backslashes and braces this
/// function emits are never re-examined. Only pass raw text: escaping
/// already-escaped output escapes it a second time.
pub fn escape_latex(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match substitution(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    result
}
