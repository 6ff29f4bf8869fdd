//! Display-title derivation for package short names.

/// Acronym fixups applied to the title, in order, as plain substring
/// replacements. Deliberately not word-boundary aware: the passes are meant
/// to reach into longer words ("Mongodb" -> "MongoDB").
const ACRONYM_FIXUPS: &[(&str, &str)] = &[
    ("db", "DB"),
    ("Db", "DB"),
    ("ai", "AI"),
    ("Ai", "AI"),
];

/// Derives a display title from a short name: title case, hyphens turned
/// into spaces, then the acronym fixups.
pub fn derive_title(name_short: &str) -> String {
    let mut title = title_case(name_short).replace('-', " ");
    for (from, to) in ACRONYM_FIXUPS {
        title = title.replace(from, to);
    }
    title
}

/// Title casing where a letter starts a new word iff the preceding character
/// is not a letter. Digits and punctuation both break words, so "ai21"
/// becomes "Ai21" and "astra-db" becomes "Astra-Db".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(derive_title("acme"), "Acme");
    }

    #[test]
    fn test_hyphens_become_spaces() {
        assert_eq!(derive_title("acme-cloud"), "Acme Cloud");
    }

    #[test]
    fn test_db_fixup_inside_word() {
        assert_eq!(derive_title("mongodb"), "MongoDB");
        assert_eq!(derive_title("astradb"), "AstraDB");
    }

    #[test]
    fn test_db_fixup_after_hyphen() {
        // "astra-db" title-cases to "Astra-Db" before the "Db" pass
        assert_eq!(derive_title("astra-db"), "Astra DB");
    }

    #[test]
    fn test_ai_fixup() {
        assert_eq!(derive_title("ai21"), "AI21");
        assert_eq!(derive_title("google-genai"), "Google GenAI");
    }

    #[test]
    fn test_digits_break_words() {
        assert_eq!(title_case("foo2bar"), "Foo2Bar");
    }

    #[test]
    fn test_already_lowercase_runs() {
        assert_eq!(title_case("openGAUSS"), "Opengauss");
    }
}
