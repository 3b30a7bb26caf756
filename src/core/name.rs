use crate::core::digital_root::reduce;
use crate::domain::model::DigitalRoot;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Pythagorean letter value: 1-9 assigned cyclically by alphabet position
/// (A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8).
fn letter_value(letter: char) -> u64 {
    (letter as u64 - 'A' as u64) % 9 + 1
}

/// Uppercases and keeps only A-Z. Digits, spaces, punctuation and
/// non-Latin characters are all discarded, so case changes and decoration
/// never affect the totals.
fn normalized_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase())
}

pub fn expression_total(name: &str) -> u64 {
    normalized_letters(name).map(letter_value).sum()
}

pub fn name_digital_root(name: &str) -> DigitalRoot {
    reduce(expression_total(name))
}

pub fn soul_urge(name: &str) -> DigitalRoot {
    let vowel_total = normalized_letters(name)
        .filter(|c| VOWELS.contains(c))
        .map(letter_value)
        .sum();
    reduce(vowel_total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_values_wrap_at_nine() {
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('I'), 9);
        assert_eq!(letter_value('J'), 1);
        assert_eq!(letter_value('S'), 1);
        assert_eq!(letter_value('Z'), 8);
    }

    #[test]
    fn test_expression_total() {
        // B=2, U=3, D=4, I=9
        assert_eq!(expression_total("BUDI"), 18);
        assert_eq!(expression_total("budi"), 18);
    }

    #[test]
    fn test_name_dr_invariant_under_decoration() {
        let expected = name_digital_root("Budi Santoso");
        assert_eq!(name_digital_root("BUDI SANTOSO"), expected);
        assert_eq!(name_digital_root("Budi-Santoso!!"), expected);
        assert_eq!(name_digital_root("Budi 123 Santoso"), expected);
    }

    #[test]
    fn test_soul_urge_counts_vowels_only() {
        // Vowels of BUDI: U=3, I=9 -> 12 -> 3
        assert_eq!(soul_urge("BUDI").value(), 3);
        // No vowels: reduces from 0
        assert_eq!(soul_urge("XYZ").value(), 0);
    }

    #[test]
    fn test_non_latin_scripts_total_zero() {
        assert_eq!(expression_total("日本語"), 0);
        assert_eq!(expression_total("123 !?"), 0);
    }
}
