//! Glossary key normalization and near-match selection

/// Maximum number of suggestions offered after a miss
pub const MAX_SUGGESTIONS: usize = 5;

/// Maximum number of terms listed when nothing matches
pub const MAX_AVAILABLE_TERMS: usize = 10;

/// Map a glossary term to its stored file stem.
///
/// Lower-cases the term and replaces every character outside `[a-z0-9]`
/// with `_`, so `"Combat Damage"` becomes `"combat_damage"`.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derive the display form of a stored glossary file name.
///
/// Returns `None` for files that are not `.txt` entries.
pub fn display_form(file_name: &str) -> Option<String> {
    let stem = file_name.strip_suffix(".txt")?;
    Some(stem.replace('_', " "))
}

/// Largest edit distance still treated as a typo of a stored term
pub const MAX_TYPO_DISTANCE: usize = 2;

/// Select stored terms that contain `requested` or are contained by it.
///
/// The comparison is case-insensitive and keeps the order of `available`.
/// There is no minimum term length, so very short stored terms match
/// almost everything. Only when no term passes the substring test are
/// terms within [`MAX_TYPO_DISTANCE`] edits offered instead.
pub fn suggest<S: AsRef<str>>(requested: &str, available: &[S]) -> Vec<String> {
    let needle = requested.to_lowercase();

    let by_substring = select(available, |candidate| {
        candidate.contains(&needle) || needle.contains(candidate)
    });
    if !by_substring.is_empty() {
        return by_substring;
    }

    select(available, |candidate| {
        edit_distance(candidate, &needle) <= MAX_TYPO_DISTANCE
    })
}

fn select<S: AsRef<str>>(available: &[S], accept: impl Fn(&str) -> bool) -> Vec<String> {
    available
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| accept(&candidate.to_lowercase()))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

/// Levenshtein edit distance over chars
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];
    for i in 1..=a.len() {
        current[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            current[j] = (previous[j] + 1)
                .min(current[j - 1] + 1)
                .min(previous[j - 1] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
