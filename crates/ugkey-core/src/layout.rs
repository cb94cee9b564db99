// Ugkey Layout Table
// ASCII keystroke to Uyghur character mapping and script classification

use indexmap::IndexMap;

/// Hamza carrier (U+0626), the letter the smart-hamza rule prepends to
/// vowels. Also directly reachable on the `/` key.
pub const HAMZA: char = '\u{0626}';

/// The eight Uyghur vowels, as produced by the layout.
pub const UYGHUR_VOWELS: [char; 8] = [
    '\u{0627}', // a  (on 'f')
    '\u{06D5}', // e  (on 'g')
    '\u{06D0}', // e with two dots (on 'e')
    '\u{0649}', // i  (on 'h')
    '\u{0648}', // o  (on 'o')
    '\u{06C7}', // u  (on 'u')
    '\u{06C6}', // o with breve (on 'K')
    '\u{06C8}', // u with breve (on 'v')
];

/// Punctuation marks produced by the layout that sit inside the Arabic
/// code-point range but do not count as letters.
pub const ARABIC_PUNCTUATION_MARKS: [char; 3] = [
    '\u{061B}', // semicolon
    '\u{061F}', // question mark
    '\u{060C}', // comma
];

/// Unicode Arabic block, half-open.
const ARABIC_START: u32 = 0x0600;
const ARABIC_END: u32 = 0x06FF;

/// Keystroke-to-character table for the standard Uyghur layout.
///
/// Maps the character a key event delivers to the character that reaches the
/// field. Constructed once, never mutated afterwards; `lookup` is pure and
/// returns `None` for anything outside the 45 defined keys (digits,
/// whitespace, most uppercase Latin letters).
#[derive(Debug, Clone)]
pub struct KeyCharMap {
    map: IndexMap<char, char>,
}

impl KeyCharMap {
    /// Build the standard layout.
    pub fn new() -> Self {
        let mut map = IndexMap::with_capacity(45);

        // ASCII -> Uyghur letters
        map.insert('a', '\u{06BE}'); // h
        map.insert('b', '\u{0628}'); // b
        map.insert('c', '\u{063A}'); // gh
        map.insert('D', '\u{0698}'); // zh
        map.insert('d', '\u{062F}'); // d
        map.insert('e', '\u{06D0}'); // :e
        map.insert('F', '\u{0641}'); // f
        map.insert('f', '\u{0627}'); // a
        map.insert('G', '\u{06AF}'); // g
        map.insert('g', '\u{06D5}'); // e
        map.insert('H', '\u{062E}'); // x
        map.insert('h', '\u{0649}'); // i
        map.insert('i', '\u{06AD}'); // ng
        map.insert('J', '\u{062C}'); // j
        map.insert('j', '\u{0642}'); // q
        map.insert('K', '\u{06C6}'); // :o
        map.insert('k', '\u{0643}'); // k
        map.insert('l', '\u{0644}'); // l
        map.insert('m', '\u{0645}'); // m
        map.insert('n', '\u{0646}'); // n
        map.insert('o', '\u{0648}'); // o
        map.insert('p', '\u{067E}'); // p
        map.insert('q', '\u{0686}'); // ch
        map.insert('r', '\u{0631}'); // r
        map.insert('s', '\u{0633}'); // s
        map.insert('t', '\u{062A}'); // t
        map.insert('u', '\u{06C7}'); // u
        map.insert('v', '\u{06C8}'); // :u
        map.insert('w', '\u{06CB}'); // w
        map.insert('x', '\u{0634}'); // sh
        map.insert('y', '\u{064A}'); // y
        map.insert('z', '\u{0632}'); // z
        map.insert('/', HAMZA);

        // Arabic punctuation marks
        map.insert(';', '\u{061B}');
        map.insert('?', '\u{061F}');
        map.insert(',', '\u{060C}');
        map.insert('_', '\u{2014}');

        // Invert parentheses, square brackets, and curly braces for RTL
        // presentation. Angle brackets become single guillemets.
        map.insert('(', ')');
        map.insert(')', '(');
        map.insert('[', ']');
        map.insert(']', '[');
        map.insert('{', '\u{00BB}');
        map.insert('}', '\u{00AB}');
        map.insert('<', '\u{203A}');
        map.insert('>', '\u{2039}');

        Self { map }
    }

    /// Look up the output character for a keystroke character.
    pub fn lookup(&self, c: char) -> Option<char> {
        self.map.get(&c).copied()
    }

    /// Check if a keystroke character is mapped.
    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (key, output) pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.map.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for KeyCharMap {
    fn default() -> Self {
        Self::new()
    }
}

/// True for characters in the Arabic block, excluding the punctuation marks
/// that share the range.
pub fn is_arabic_letter(c: char) -> bool {
    let cp = c as u32;
    (ARABIC_START..ARABIC_END).contains(&cp) && !ARABIC_PUNCTUATION_MARKS.contains(&c)
}

/// True for the Uyghur vowels.
pub fn is_uyghur_vowel(c: char) -> bool {
    is_arabic_letter(c) && UYGHUR_VOWELS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_letters_mapped() {
        let map = KeyCharMap::new();
        for c in 'a'..='z' {
            assert!(map.contains(c), "'{}' should be mapped", c);
        }
    }

    #[test]
    fn test_letter_lookups() {
        let map = KeyCharMap::new();
        assert_eq!(map.lookup('f'), Some('\u{0627}')); // a
        assert_eq!(map.lookup('b'), Some('\u{0628}')); // b
        assert_eq!(map.lookup('x'), Some('\u{0634}')); // sh
        assert_eq!(map.lookup('D'), Some('\u{0698}')); // zh
        assert_eq!(map.lookup('/'), Some(HAMZA));
    }

    #[test]
    fn test_lookup_is_stable() {
        let map = KeyCharMap::new();
        assert_eq!(map.lookup('q'), map.lookup('q'));
        assert_eq!(map.lookup('q'), Some('\u{0686}'));
    }

    #[test]
    fn test_unmapped_keys_absent() {
        let map = KeyCharMap::new();
        assert_eq!(map.lookup('0'), None);
        assert_eq!(map.lookup(' '), None);
        assert_eq!(map.lookup('Q'), None); // only D F G H J K are mapped uppercase
        assert_eq!(map.lookup('A'), None);
    }

    #[test]
    fn test_bracket_mirroring_is_symmetric() {
        let map = KeyCharMap::new();
        assert_eq!(map.lookup('('), Some(')'));
        assert_eq!(map.lookup(')'), Some('('));
        assert_eq!(map.lookup('['), Some(']'));
        assert_eq!(map.lookup(']'), Some('['));
    }

    #[test]
    fn test_guillemet_mappings() {
        let map = KeyCharMap::new();
        assert_eq!(map.lookup('{'), Some('\u{00BB}'));
        assert_eq!(map.lookup('}'), Some('\u{00AB}'));
        assert_eq!(map.lookup('<'), Some('\u{203A}'));
        assert_eq!(map.lookup('>'), Some('\u{2039}'));
    }

    #[test]
    fn test_punctuation_mappings() {
        let map = KeyCharMap::new();
        assert_eq!(map.lookup(';'), Some('\u{061B}'));
        assert_eq!(map.lookup('?'), Some('\u{061F}'));
        assert_eq!(map.lookup(','), Some('\u{060C}'));
        assert_eq!(map.lookup('_'), Some('\u{2014}'));
    }

    #[test]
    fn test_table_size() {
        assert_eq!(KeyCharMap::new().len(), 45);
    }

    #[test]
    fn test_arabic_letter_classification() {
        assert!(is_arabic_letter('\u{0628}')); // b, a consonant
        assert!(is_arabic_letter(HAMZA));
        assert!(!is_arabic_letter('a'));
        assert!(!is_arabic_letter(' '));
        // Punctuation shares the range but is not a letter.
        for mark in ARABIC_PUNCTUATION_MARKS {
            assert!(!is_arabic_letter(mark));
        }
        // The range is half-open at the top.
        assert!(!is_arabic_letter('\u{06FF}'));
        assert!(is_arabic_letter('\u{0600}'));
    }

    #[test]
    fn test_vowel_classification() {
        for vowel in UYGHUR_VOWELS {
            assert!(is_uyghur_vowel(vowel));
        }
        assert!(!is_uyghur_vowel('\u{0628}')); // b, a consonant
        assert!(!is_uyghur_vowel(HAMZA));
        assert!(!is_uyghur_vowel('a'));
        assert!(!is_uyghur_vowel(')'));
    }

    #[test]
    fn test_every_vowel_is_produced_by_the_layout() {
        let map = KeyCharMap::new();
        for vowel in UYGHUR_VOWELS {
            assert!(
                map.iter().any(|(_, out)| out == vowel),
                "vowel {:?} is not reachable from any key",
                vowel
            );
        }
    }

    #[test]
    fn test_iteration_order_matches_definition() {
        let map = KeyCharMap::new();
        let first: Vec<char> = map.iter().take(3).map(|(k, _)| k).collect();
        assert_eq!(first, vec!['a', 'b', 'c']);
    }
}
