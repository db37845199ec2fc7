//! Name normalization applied before director rows are written.

/// Title-case a name: the first letter of every run of letters is
/// upper-cased and the rest of the run is lower-cased.
///
/// Runs are broken by any non-alphabetic character, so apostrophes, hyphens
/// and digits all start a new word (`"o'brien"` becomes `"O'Brien"`).
///
/// The output always has exactly as many chars as the input, so a name that
/// fits a column before normalization still fits after it. Letters whose
/// full case mapping expands (`'ß'` upper-cases to `"SS"`) keep only the
/// first char of the mapping.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.push(c.to_lowercase().next().unwrap_or(c));
            } else {
                out.push(to_titlecase(c));
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

/// Titlecase form of a single char.
///
/// The Latin digraphs have a dedicated titlecase letter distinct from their
/// upper-case one (`'ǆ'` titles to `'ǅ'`, not `'Ǆ'`).
fn to_titlecase(c: char) -> char {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}
