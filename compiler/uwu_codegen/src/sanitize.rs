//! Identifier sanitization shared by every backend.

/// Characters that are legal in UwU names but not in target identifiers,
/// and the text each one becomes.
pub const SUBSTITUTIONS: &[(char, &str)] = &[
    ('@', "_at_"),
    ('!', "_bang_"),
    ('.', "_dot_"),
    ('/', "_slash_"),
    ('\\', "_bslash_"),
    ('~', "_tilde_"),
    (':', "_colon_"),
];

/// Make a source name safe to emit as a target-language identifier.
///
/// Each character is replaced at most once; replacement text is never
/// re-scanned.
pub fn sanitize(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 8);
    for c in name.chars() {
        match SUBSTITUTIONS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => result.push_str(to),
            None => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn replaces_every_symbol() {
        assert_eq!(sanitize("@_@"), "_at___at_");
        assert_eq!(sanitize("O.O"), "O_dot_O");
        assert_eq!(sanitize(":v"), "_colon_v");
        assert_eq!(sanitize("a!b/c\\d~e"), "a_bang_b_slash_c_bslash_d_tilde_e");
    }

    #[test]
    fn plain_names_are_unchanged() {
        assert_eq!(sanitize("counter_2"), "counter_2");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn output_is_not_rescanned() {
        // `_at_` contains no substitutable characters, so a second pass is a no-op.
        let once = sanitize("@.@");
        assert_eq!(once, "_at__dot__at_");
        assert_eq!(sanitize(&once), once);
    }
}
