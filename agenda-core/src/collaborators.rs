//! Collaborator string handling.
//!
//! The server stores collaborators as one comma-joined string. The form
//! presents a checkbox per known name plus a free-text "other" field for
//! everyone else. Parsing and serializing are inverses at the set level:
//! round-tripping an untouched selection reproduces the original tokens,
//! with known names normalized to their declaration order followed by
//! the unknown tokens in the order they appeared.
//!
//! Matching is exact (after trimming each token): "denis" is not the
//! known name "Denis" and goes to the other field untouched.

/// The form's view of a collaborators string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollaboratorSelection {
    /// Known names whose checkbox is checked, in declaration order.
    pub checked: Vec<String>,
    /// Comma-joined tokens that matched no known name.
    pub other: String,
}

/// Split a comma-joined collaborators string against the known-name list.
pub fn parse_collaborators(raw: &str, known: &[String]) -> CollaboratorSelection {
    let tokens: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    let checked: Vec<String> = known
        .iter()
        .filter(|name| tokens.contains(&name.as_str()))
        .cloned()
        .collect();

    let unknown: Vec<&str> = tokens
        .iter()
        .filter(|t| !known.iter().any(|name| name == *t))
        .copied()
        .collect();

    CollaboratorSelection {
        checked,
        other: unknown.join(", "),
    }
}

/// Rebuild the comma-joined string from the current selection.
pub fn serialize_collaborators(selection: &CollaboratorSelection) -> String {
    let mut parts: Vec<&str> = selection.checked.iter().map(String::as_str).collect();
    let other = selection.other.trim();
    if !other.is_empty() {
        parts.push(other);
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> Vec<String> {
        vec!["Denis".to_string(), "Isis".to_string()]
    }

    #[test]
    fn splits_known_and_unknown_tokens() {
        let sel = parse_collaborators("Denis, Isis, Consultant X", &known());
        assert_eq!(sel.checked, vec!["Denis", "Isis"]);
        assert_eq!(sel.other, "Consultant X");
    }

    #[test]
    fn round_trip_reproduces_original_string() {
        let original = "Denis, Isis, Consultant X";
        let sel = parse_collaborators(original, &known());
        assert_eq!(serialize_collaborators(&sel), original);
    }

    #[test]
    fn round_trip_normalizes_to_declaration_order() {
        let sel = parse_collaborators("Isis, Denis", &known());
        assert_eq!(serialize_collaborators(&sel), "Denis, Isis");
    }

    #[test]
    fn multiple_unknown_tokens_keep_their_order() {
        let sel = parse_collaborators("Zoe, Denis, Alex", &known());
        assert_eq!(sel.checked, vec!["Denis"]);
        assert_eq!(sel.other, "Zoe, Alex");
        assert_eq!(serialize_collaborators(&sel), "Denis, Zoe, Alex");
    }

    #[test]
    fn empty_string_yields_empty_selection() {
        let sel = parse_collaborators("", &known());
        assert_eq!(sel, CollaboratorSelection::default());
        assert_eq!(serialize_collaborators(&sel), "");
    }

    #[test]
    fn whitespace_and_empty_tokens_are_dropped() {
        let sel = parse_collaborators(" Denis ,, ,Isis ", &known());
        assert_eq!(sel.checked, vec!["Denis", "Isis"]);
        assert_eq!(sel.other, "");
    }

    #[test]
    fn case_variants_of_known_names_stay_in_other() {
        let sel = parse_collaborators("denis, Isis", &known());
        assert_eq!(sel.checked, vec!["Isis"]);
        assert_eq!(sel.other, "denis");
    }
}
