//! Commit type inference from a subject's leading verb.
//!
//! The table maps base verbs to types. Inflected forms (`adds`, `added`,
//! `adding`, `fixes`, `dropped`) are reduced to a base form before lookup.
//! Words not in the table map to [`FALLBACK_TYPE`].

/// Type used when the leading word is not in [`VERB_TYPES`]
pub const FALLBACK_TYPE: &str = "chore";

/// Base verb to commit type
pub static VERB_TYPES: &[(&str, &str)] = &[
    // feat
    ("add", "feat"),
    ("implement", "feat"),
    ("introduce", "feat"),
    ("create", "feat"),
    ("support", "feat"),
    ("enable", "feat"),
    ("allow", "feat"),
    // fix
    ("fix", "fix"),
    ("resolve", "fix"),
    ("correct", "fix"),
    ("repair", "fix"),
    ("patch", "fix"),
    ("prevent", "fix"),
    ("handle", "fix"),
    // refactor
    ("refactor", "refactor"),
    ("update", "refactor"),
    ("rename", "refactor"),
    ("restructure", "refactor"),
    ("simplify", "refactor"),
    ("extract", "refactor"),
    ("move", "refactor"),
    ("replace", "refactor"),
    // docs
    ("document", "docs"),
    ("doc", "docs"),
    ("docs", "docs"),
    // test
    ("test", "test"),
    // perf
    ("optimize", "perf"),
    ("optimise", "perf"),
    ("speed", "perf"),
    // style
    ("format", "style"),
    ("reformat", "style"),
    ("lint", "style"),
    // revert
    ("revert", "revert"),
    // chore
    ("remove", "chore"),
    ("delete", "chore"),
    ("drop", "chore"),
    ("bump", "chore"),
    ("clean", "chore"),
    ("cleanup", "chore"),
    ("upgrade", "chore"),
    ("downgrade", "chore"),
];

fn lookup(verb: &str) -> Option<&'static str> {
    VERB_TYPES
        .iter()
        .find(|(base, _)| *base == verb)
        .map(|(_, commit_type)| *commit_type)
}

/// Candidate base forms of an inflected verb, most specific first
fn base_forms(word: &str) -> Vec<String> {
    let mut forms = Vec::new();

    for suffix in ["ing", "ed", "es", "s", "d"] {
        let Some(stem) = word.strip_suffix(suffix) else {
            continue;
        };
        if stem.len() < 2 {
            continue;
        }
        forms.push(stem.to_string());
        // creating -> create, removed -> remove
        if suffix == "ing" || suffix == "ed" {
            forms.push(format!("{}e", stem));
        }
        // dropped -> drop, mapping -> map
        let mut chars = stem.chars().rev();
        if let (Some(last), Some(prev)) = (chars.next(), chars.next()) {
            if last == prev {
                forms.push(stem[..stem.len() - last.len_utf8()].to_string());
            }
        }
    }

    forms
}

/// Infer a commit type from the first word of a subject
pub fn infer_type(word: &str) -> &'static str {
    let word = word
        .trim_matches(|ch: char| !ch.is_alphanumeric())
        .to_lowercase();

    lookup(&word)
        .or_else(|| base_forms(&word).iter().find_map(|form| lookup(form)))
        .unwrap_or(FALLBACK_TYPE)
}
