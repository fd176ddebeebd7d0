//! The Pythagorean letter cipher and name numbers.

use crate::reduce::Reduced;

/// Value of a letter in the Pythagorean cipher (a, j, s = 1 … i, r = 9).
///
/// Only ASCII letters have a value; case is ignored.
pub fn letter_value(c: char) -> Option<u32> {
    let c = c.to_ascii_lowercase();
    if !c.is_ascii_lowercase() {
        return None;
    }
    Some((c as u32 - 'a' as u32) % 9 + 1)
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Which letters of a name contribute to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFilter {
    /// Every letter (Destiny, Heritage, Current Vibe).
    All,
    /// Vowels only (Soul Urge).
    Vowels,
    /// Consonants only (Personality). `y` counts as a consonant.
    Consonants,
}

impl NameFilter {
    fn accepts(self, c: char) -> bool {
        match self {
            Self::All => true,
            Self::Vowels => is_vowel(c),
            Self::Consonants => !is_vowel(c),
        }
    }
}

/// Sum the cipher values of the letters selected by `filter`, then reduce.
///
/// Non-letters are skipped. An empty name yields zero.
pub fn name_number(name: &str, filter: NameFilter) -> Reduced {
    let sum = name
        .chars()
        .filter(|c| filter.accepts(*c))
        .filter_map(letter_value)
        .sum();
    Reduced::from_sum(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cipher_table() {
        let expected = [
            ("ajs", 1),
            ("bkt", 2),
            ("clu", 3),
            ("dmv", 4),
            ("enw", 5),
            ("fox", 6),
            ("gpy", 7),
            ("hqz", 8),
            ("ir", 9),
        ];
        for (letters, value) in expected {
            for c in letters.chars() {
                assert_eq!(letter_value(c), Some(value), "{c}");
                assert_eq!(letter_value(c.to_ascii_uppercase()), Some(value), "{c}");
            }
        }
    }

    #[test]
    fn non_letters_have_no_value() {
        assert_eq!(letter_value(' '), None);
        assert_eq!(letter_value('-'), None);
        assert_eq!(letter_value('7'), None);
        assert_eq!(letter_value('é'), None);
    }

    #[test]
    fn ada() {
        assert_eq!(name_number("ada", NameFilter::All).reduced, 6);
        assert_eq!(name_number("ada", NameFilter::Vowels).reduced, 2);
        assert_eq!(name_number("ada", NameFilter::Consonants).reduced, 4);
    }

    #[test]
    fn punctuation_and_case_ignored() {
        assert_eq!(
            name_number("Mary-Jane O'Neil", NameFilter::All),
            name_number("maryjaneoneil", NameFilter::All)
        );
    }

    #[test]
    fn empty_name_is_zero() {
        assert_eq!(name_number("", NameFilter::All), Reduced::default());
        assert_eq!(name_number("  ", NameFilter::Vowels).reduced, 0);
    }

    #[test]
    fn keeps_unreduced_sum() {
        // j=1 o=6 h=8 n=5 -> 20 -> 2
        let r = name_number("John", NameFilter::All);
        assert_eq!(r.unreduced, 20);
        assert_eq!(r.reduced, 2);
    }

    #[test]
    fn vowels_and_consonants_partition_letters() {
        let name = "Alexandra Smith";
        let all = name_number(name, NameFilter::All).unreduced;
        let vowels = name_number(name, NameFilter::Vowels).unreduced;
        let consonants = name_number(name, NameFilter::Consonants).unreduced;
        assert_eq!(all, vowels + consonants);
    }
}
