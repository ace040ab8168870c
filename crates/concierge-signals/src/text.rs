//! Token-aware text normalization and phrase matching.
//!
//! Text is lowercased and split on anything that is not alphanumeric, so
//! whitespace runs, hyphens, slashes and punctuation all collapse into a
//! single token boundary. Needles go through the same normalization, which
//! makes "handed-down" and "handed down" equivalent and keeps "cast" from
//! matching inside "broadcast".

/// Split `text` into lowercase alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// A normalized needle: one or more tokens that must appear contiguously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    tokens: Vec<String>,
}

impl Phrase {
    pub fn new(needle: &str) -> Self {
        Self {
            tokens: tokenize(needle),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens the phrase spans.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Start offsets (in tokens) of every occurrence in `haystack`.
    pub fn positions(&self, haystack: &[String]) -> Vec<usize> {
        let n = self.tokens.len();
        if n == 0 || haystack.len() < n {
            return Vec::new();
        }
        (0..=haystack.len() - n)
            .filter(|&i| haystack[i..i + n] == self.tokens[..])
            .collect()
    }

    /// Whether the phrase occurs anywhere in `haystack`.
    pub fn matches(&self, haystack: &[String]) -> bool {
        let n = self.tokens.len();
        n > 0 && haystack.windows(n).any(|w| w == &self.tokens[..])
    }

    /// Convenience: tokenize `text` and test for a match.
    pub fn matches_text(&self, text: &str) -> bool {
        self.matches(&tokenize(text))
    }
}

/// Blank out every token covered by an occurrence of any `decoy`.
///
/// Masked tokens become empty strings, which no phrase can match because the
/// tokenizer never produces empty tokens.
pub fn mask_decoys(tokens: &[String], decoys: &[Phrase]) -> Vec<String> {
    let mut masked = tokens.to_vec();
    for decoy in decoys {
        for start in decoy.positions(tokens) {
            for token in &mut masked[start..start + decoy.len()] {
                token.clear();
            }
        }
    }
    masked
}

/// First phrase in `phrases` that matches, if any.
pub fn first_match<'a>(phrases: &'a [Phrase], haystack: &[String]) -> Option<&'a Phrase> {
    phrases.iter().find(|p| p.matches(haystack))
}
