//! Static word lists compiled into the watchface.
//!
//! - [`WORDS`]: the vocabulary the Words phase draws from
//! - [`PREFIXES`] / [`POSTFIXES`]: syllables combined into constellation names
//!
//! Every list is ordered and free of duplicates. The selection code relies on
//! distinct entries so that distinct indices always mean distinct words.
//!
//! [`Vocabulary`] bundles the three lists so the scheduler can be driven by a
//! smaller set in tests.

/// Vocabulary of words revealed during the Words phase.
pub const WORDS: &[&str] = &[
    "azure",
    "indigo",
    "crimson",
    "dust",
    "fragment",
    "Luna",
    "rock",
    "void",
    "darkness",
    "nova",
    "vast",
    "incessant",
    "continuous",
    "infinite",
    "night",
    "light",
    "bright",
    "glowing",
    "flowing",
    "point",
    "otherness",
    "sleeping",
    "waking",
    "awe",
    "wave",
    "companion",
    "double",
    "brilliant",
    "nucleus",
    "dense",
    "visible",
    "obscured",
    "patch",
    "disk",
    "invisible",
    "cloud",
    "incandescent",
    "luminous",
    "cluster",
    "resolved",
    "globular",
    "round",
    "ominous",
    "spectrum",
    "gas",
    "space",
    "boundary",
    "distant",
    "nearby",
];

/// First half of a constellation name.
pub const PREFIXES: &[&str] = &["Bor", "Cen", "Ib", "Op", "Xe", "Ab", "Dec", "Hi", "Pur", "Neb", "Reg", "Zur", "Sex"];

/// Second half of a constellation name.
pub const POSTFIXES: &[&str] = &[
    "lux", "stor", "tion", "able", "ser", "furg", "quest", "zeru", "yack", "kulp", "fed", "ula", "der",
];

/// The three word lists used by one scheduler.
#[derive(Clone, Copy, Debug)]
pub struct Vocabulary {
    pub words: &'static [&'static str],
    pub prefixes: &'static [&'static str],
    pub postfixes: &'static [&'static str],
}

impl Vocabulary {
    /// The lists compiled into the watchface.
    pub const DEFAULT: Self = Self {
        words: WORDS,
        prefixes: PREFIXES,
        postfixes: POSTFIXES,
    };
}

impl Default for Vocabulary {
    fn default() -> Self { Self::DEFAULT }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_distinct(list: &[&str]) {
        for (i, a) in list.iter().enumerate() {
            for b in &list[i + 1..] {
                assert_ne!(a, b, "duplicate entry '{a}'");
            }
        }
    }

    #[test]
    fn test_lists_are_distinct() {
        assert_distinct(WORDS);
        assert_distinct(PREFIXES);
        assert_distinct(POSTFIXES);
    }

    #[test]
    fn test_lists_are_not_empty() {
        assert!(!WORDS.is_empty());
        assert!(!PREFIXES.is_empty());
        assert!(!POSTFIXES.is_empty());
    }

    #[test]
    fn test_vocabulary_size() {
        assert_eq!(WORDS.len(), 49);
        assert_eq!(PREFIXES.len(), 13);
        assert_eq!(POSTFIXES.len(), 13);
    }
}
