use std::iter::FusedIterator;
use std::str::CharIndices;

/// Every non-empty prefix of a string, shortest first.
///
/// Prefixes end on `char` boundaries, so for ASCII input there is one per
/// byte and the last one is the whole string. A clone continues from the
/// same position.
#[derive(Debug, Clone)]
pub struct Prefixes<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Iterator for Prefixes<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        let (start, ch) = self.chars.next()?;
        Some(&self.source[..start + ch.len_utf8()])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl FusedIterator for Prefixes<'_> {}

/// Fuzzy keys for a string.
///
/// `fuzzify("border")` yields `b`, `bo`, `bor`, `bord`, `borde`, `border`.
/// An empty string yields nothing.
pub fn fuzzify(s: &str) -> Prefixes<'_> {
    Prefixes {
        source: s,
        chars: s.char_indices(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzzify_border() {
        let keys: Vec<&str> = fuzzify("border").collect();
        assert_eq!(keys, vec!["b", "bo", "bor", "bord", "borde", "border"]);
    }

    #[test]
    fn test_fuzzify_empty() {
        assert_eq!(fuzzify("").count(), 0);
    }

    #[test]
    fn test_fuzzify_prefix_positions() {
        let s = "background-color";
        let keys: Vec<&str> = fuzzify(s).collect();

        assert_eq!(keys.len(), s.len());
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(*key, &s[..=i]);
        }
        assert_eq!(keys.last(), Some(&s));
    }

    #[test]
    fn test_fuzzify_is_restartable() {
        let keys = fuzzify("pad");
        let first: Vec<&str> = keys.clone().collect();
        let second: Vec<&str> = keys.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fuzzify_multibyte() {
        let keys: Vec<&str> = fuzzify("añ").collect();
        assert_eq!(keys, vec!["a", "añ"]);
    }
}
