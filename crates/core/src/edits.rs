use itertools::Itertools;

const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

/// All strings obtained by swapping two adjacent characters.
pub fn transpositions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return Vec::new();
    }
    (0..chars.len() - 1)
        .map(|i| {
            let mut swapped = chars.clone();
            swapped.swap(i, i + 1);
            swapped.into_iter().collect()
        })
        .collect()
}

/// All strings obtained by inserting one letter, by position, then by
/// letter.
pub fn insertions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..=chars.len())
        .cartesian_product(ALPHABET)
        .map(|(i, letter)| {
            let mut inserted = chars.clone();
            inserted.insert(i, letter);
            inserted.into_iter().collect()
        })
        .collect()
}

/// All strings obtained by removing one character.
pub fn deletions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .map(|i| {
            let mut deleted = chars.clone();
            deleted.remove(i);
            deleted.into_iter().collect()
        })
        .collect()
}

/// All strings obtained by replacing one character, by position, then by
/// letter. Replacing a letter by itself counts.
pub fn substitutions(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    (0..chars.len())
        .cartesian_product(ALPHABET)
        .map(|(i, letter)| {
            let mut replaced = chars.clone();
            replaced[i] = letter;
            replaced.into_iter().collect()
        })
        .collect()
}
