use crate::sheet::decode::RawRow;
use std::collections::HashMap;

/// Reduces a raw column label to its canonical key: lowercased, with
/// whitespace, `.`/`_`/`-` and any remaining non-alphanumeric character
/// removed. Labels differing only in case, spacing or punctuation collide
/// to the same key.
pub fn canonical_key(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Rewrites a raw row's labels into canonical keys. On a key collision the
/// last-seen value wins; this is accepted, documented data loss.
pub fn normalize_row(row: &RawRow) -> HashMap<String, String> {
    let mut normalized = HashMap::with_capacity(row.len());
    for (label, value) in row {
        normalized.insert(canonical_key(label), value.clone());
    }
    normalized
}

/// First-match-wins lookup across the synonym candidates for one logical
/// field. A value only counts when its trimmed form is non-empty; candidates
/// are never merged.
pub fn first_non_empty<'a>(row: &'a HashMap<String, String>, candidates: &[&str]) -> &'a str {
    for key in candidates {
        if let Some(value) = row.get(*key) {
            if !value.trim().is_empty() {
                return value;
            }
        }
    }
    ""
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_differing_in_case_spacing_or_punctuation_collide() {
        for label in ["Roll Number", "roll number", "ROLL_NUMBER", "Roll.Number", "roll-number"] {
            assert_eq!(canonical_key(label), "rollnumber", "label {label:?}");
        }
        assert_eq!(canonical_key("Reg. No."), "regno");
        assert_eq!(canonical_key("  D.O.B  "), "dob");
    }

    #[test]
    fn canonical_key_is_a_fixed_point() {
        for label in ["rollnumber", "schoolname", "agegroup", ""] {
            assert_eq!(canonical_key(label), label);
        }
        let once = canonical_key("Student Full-Name");
        assert_eq!(canonical_key(&once), once);
    }

    #[test]
    fn empty_and_symbol_only_labels_collapse_to_the_empty_key() {
        assert_eq!(canonical_key(""), "");
        assert_eq!(canonical_key("  ._- "), "");
    }

    #[test]
    fn collisions_resolve_last_seen_wins() {
        let row = vec![
            ("Roll No".to_string(), "12".to_string()),
            ("roll_no".to_string(), "13".to_string()),
        ];
        let normalized = normalize_row(&row);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized["rollno"], "13");
    }

    #[test]
    fn extractor_returns_the_first_non_empty_candidate() {
        let mut row = HashMap::new();
        row.insert("rollno".to_string(), "  ".to_string());
        row.insert("roll".to_string(), "12".to_string());
        row.insert("rollnumberno".to_string(), "99".to_string());

        let value = first_non_empty(&row, &["rollnumber", "rollno", "roll", "rollnumberno"]);
        assert_eq!(value, "12");
    }

    #[test]
    fn extractor_falls_back_to_empty() {
        let row = HashMap::new();
        assert_eq!(first_non_empty(&row, &["name", "fullname"]), "");

        let mut blank = HashMap::new();
        blank.insert("name".to_string(), "   ".to_string());
        assert_eq!(first_non_empty(&blank, &["name"]), "");
    }
}
