use std::collections::HashSet;

/// Characters that may trail a keyword and are stripped from it.
pub const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ';', ':', '!'];

/// Turns raw tokens into canonical keywords, rejecting noise words.
#[derive(Debug, Default, Clone)]
pub struct KeywordNormalizer {
    noise_words: HashSet<String>,
}

impl KeywordNormalizer {
    pub fn new<I, S>(noise_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            noise_words: noise_words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    pub fn is_noise_word(&self, word: &str) -> bool {
        self.noise_words.contains(word)
    }

    /// Returns the lower-cased keyword for `token`, or `None` if the token is
    /// not a keyword.
    ///
    /// A keyword is a run of letters optionally followed by a run of
    /// [`TRAILING_PUNCTUATION`], which is dropped. Anything else (digits,
    /// apostrophes, punctuation followed by a letter) rejects the token, as do
    /// empty results and noise words.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let letters_end = token
            .char_indices()
            .find(|(_, c)| !c.is_alphabetic())
            .map_or(token.len(), |(i, _)| i);

        let (letters, trailing) = token.split_at(letters_end);

        if letters.is_empty() || !trailing.chars().all(|c| TRAILING_PUNCTUATION.contains(&c)) {
            return None;
        }

        let keyword = letters.to_lowercase();

        if self.is_noise_word(&keyword) {
            return None;
        }

        Some(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> KeywordNormalizer {
        KeywordNormalizer::new(["the", "A", " and "])
    }

    #[test]
    fn strips_trailing_punctuation() {
        let normalizer = normalizer();

        assert_eq!(normalizer.normalize("Apple."), Some("apple".to_string()));
        assert_eq!(normalizer.normalize("word!!"), Some("word".to_string()));
        assert_eq!(normalizer.normalize("word?!?!"), Some("word".to_string()));
        assert_eq!(normalizer.normalize("Hello,;:"), Some("hello".to_string()));
        assert_eq!(normalizer.normalize("SHOUT"), Some("shout".to_string()));
    }

    #[test]
    fn rejects_inner_non_letters() {
        let normalizer = normalizer();

        assert_eq!(normalizer.normalize("wo!rd"), None);
        assert_eq!(normalizer.normalize("don't"), None);
        assert_eq!(normalizer.normalize("abc1"), None);
        assert_eq!(normalizer.normalize(".word"), None);
        assert_eq!(normalizer.normalize("word.!x"), None);
        assert_eq!(normalizer.normalize("word-"), None);
        assert_eq!(normalizer.normalize("\"quoted\""), None);
    }

    #[test]
    fn rejects_empty_tokens() {
        let normalizer = normalizer();

        assert_eq!(normalizer.normalize(""), None);
        assert_eq!(normalizer.normalize("!!"), None);
        assert_eq!(normalizer.normalize("?"), None);
    }

    #[test]
    fn rejects_noise_words() {
        let normalizer = normalizer();

        assert_eq!(normalizer.normalize("The"), None);
        assert_eq!(normalizer.normalize("the."), None);
        assert_eq!(normalizer.normalize("a"), None);
        assert_eq!(normalizer.normalize("AND!"), None);
        assert_eq!(normalizer.normalize("there"), Some("there".to_string()));
    }

    #[test]
    fn noise_words_are_lowercased() {
        let normalizer = normalizer();

        assert!(normalizer.is_noise_word("a"));
        assert!(normalizer.is_noise_word("and"));
        assert!(!normalizer.is_noise_word("A"));
        assert!(!normalizer.is_noise_word("and "));
    }

    #[test]
    fn accepts_non_ascii_letters() {
        let normalizer = KeywordNormalizer::default();

        assert_eq!(normalizer.normalize("Café!"), Some("café".to_string()));
    }
}
