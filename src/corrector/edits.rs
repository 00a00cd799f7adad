use std::collections::HashSet;

/// Letters used for substitutions and insertions.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Generate every string one edit away from `word`.
///
/// The edits are deletions, adjacent transpositions, substitutions and
/// insertions over each split point of the word. Edits that would reproduce
/// `word` itself (substituting a letter with itself, swapping two equal
/// letters) are skipped, so the result never contains the input.
pub fn generate_edits(word: &str) -> HashSet<String> {
    let splits = splits(word);
    let n = splits.len().saturating_sub(1);
    let mut edits = HashSet::with_capacity(54 * n + 25);

    for &(left, right) in &splits {
        let mut rest = right.chars();
        let Some(first) = rest.next() else {
            continue;
        };
        let tail = rest.as_str();

        // Deletion
        edits.insert(format!("{left}{tail}"));

        // Transposition
        let mut after = tail.chars();
        if let Some(second) = after.next() {
            if second != first {
                edits.insert(format!("{left}{second}{first}{}", after.as_str()));
            }
        }

        // Substitution
        for letter in ALPHABET.chars().filter(|&c| c != first) {
            edits.insert(format!("{left}{letter}{tail}"));
        }
    }

    // Insertion
    for &(left, right) in &splits {
        for letter in ALPHABET.chars() {
            edits.insert(format!("{left}{letter}{right}"));
        }
    }

    edits
}

/// All `(left, right)` splits of `word` on character boundaries,
/// from `("", word)` to `(word, "")`.
fn splits(word: &str) -> Vec<(&str, &str)> {
    word.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(word.len()))
        .map(|i| word.split_at(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits() {
        assert_eq!(
            splits("cat"),
            vec![("", "cat"), ("c", "at"), ("ca", "t"), ("cat", "")]
        );
        assert_eq!(splits(""), vec![("", "")]);
    }

    #[test]
    fn test_edit_classes() {
        let edits = generate_edits("cat");
        assert!(edits.contains("at")); // deletion
        assert!(edits.contains("act")); // transposition
        assert!(edits.contains("bat")); // substitution
        assert!(edits.contains("cata")); // insertion
        assert!(!edits.contains("cat"));
    }

    #[test]
    fn test_edit_count() {
        // 3 deletions, 2 transpositions, 75 substitutions and 104 insertions,
        // three of which repeat ("ccat", "caat", "catt").
        assert_eq!(generate_edits("cat").len(), 3 + 2 + 75 + 101);
    }

    #[test]
    fn test_never_contains_input() {
        for word in ["a", "aa", "aab", "book", "mississippi", "zz"] {
            assert!(!generate_edits(word).contains(word), "{word}");
        }
    }

    #[test]
    fn test_empty_word() {
        let edits = generate_edits("");
        assert_eq!(edits.len(), 26);
        assert!(edits.contains("a"));
        assert!(edits.contains("z"));
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        let edits = generate_edits("café");
        assert!(edits.contains("caf"));
        assert!(edits.contains("caéf"));
    }

    #[test]
    fn test_fresh_set_per_call() {
        assert_eq!(generate_edits("word"), generate_edits("word"));
    }
}
