use std::cmp::Ordering;

/// Turkish alphabet with q, w and x slotted in at their Latin positions.
const TURKISH_ALPHABET: &str = "abcçdefgğhıijklmnoöpqrsştuüvwxyz";

/// String ordering used when sorting facet values for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Collation {
    /// Turkish alphabetical order, case-insensitive, with dotted and dotless `i` kept apart.
    #[default]
    Turkish,
    /// Plain code point order.
    CodePoint,
}

impl Collation {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Turkish => turkish_key(a).cmp(&turkish_key(b)).then_with(|| a.cmp(b)),
            Collation::CodePoint => a.cmp(b),
        }
    }

    pub fn sort(&self, values: &mut [String]) {
        match self {
            Collation::Turkish => values.sort_by_cached_key(|value| (turkish_key(value), value.clone())),
            Collation::CodePoint => values.sort(),
        }
    }
}

/// Lowercases a single character the Turkish way: `I` becomes `ı`, `İ` becomes `i`.
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        c => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Folds text for case-insensitive substring search.
/// All four `i` variants collapse together so that a query typed on
/// either keyboard layout still finds the name.
pub fn search_fold(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'I' | 'İ' | 'ı' => 'i',
            c => c.to_lowercase().next().unwrap_or(c),
        })
        .collect()
}

// (class, weight): punctuation, digits and spaces first, then the alphabet, then anything else.
fn turkish_key(value: &str) -> Vec<(u8, u32)> {
    value
        .chars()
        .map(turkish_lower)
        .map(|c| {
            if let Some(rank) = TURKISH_ALPHABET.chars().position(|letter| letter == c) {
                (1, rank as u32)
            } else if c.is_alphabetic() {
                (2, c as u32)
            } else {
                (0, c as u32)
            }
        })
        .collect()
}

#[test]
fn turkish_dotted_capital_sorts_with_i() {
    let mut values = vec!["İzmir".to_string(), "Antalya".into(), "Hatay".into(), "Ankara".into()];
    Collation::Turkish.sort(&mut values);
    assert_eq!(values, vec!["Ankara", "Antalya", "Hatay", "İzmir"]);
}

#[test]
fn turkish_special_letters_follow_their_base() {
    let mut values = vec!["Zonguldak".to_string(), "Çanakkale".into(), "Denizli".into(), "Bursa".into()];
    Collation::Turkish.sort(&mut values);
    assert_eq!(values, vec!["Bursa", "Çanakkale", "Denizli", "Zonguldak"]);
}

#[test]
fn turkish_dotless_i_before_dotted_i() {
    assert_eq!(Collation::Turkish.compare("Işık", "İnce"), Ordering::Less);
}

#[test]
fn code_point_puts_special_letters_last() {
    let mut values = vec!["Çanakkale".to_string(), "Zonguldak".into()];
    Collation::CodePoint.sort(&mut values);
    assert_eq!(values, vec!["Zonguldak", "Çanakkale"]);
}

#[test]
fn search_fold_collapses_i_variants() {
    assert_eq!(search_fold("İSTANBUL"), search_fold("istanbul"));
    assert_eq!(search_fold("Işık"), "işik");
}
