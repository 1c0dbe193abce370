use log::warn;
use serde::Serialize;

use crate::{
    normalizer::normalize,
    offsets::{Offsets, Sentence},
    tokenizer::{Tokenization, Tokenize, TokenizerError},
};

/// An aligner of a target word with the tokens of sentences.
///
/// Can be created via the [`Builder`].
///
/// [`Builder`]: crate::Builder
pub struct Aligner<T> {
    pub(crate) tokenizer: T,
    pub(crate) target: String,
    pub(crate) prefix: String,
}

/// The position of the target word in a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Alignment {
    /// The token at which the first occurrence begins and the character span of the occurrence.
    Found { token: usize, span: Offsets },
    /// The sentence doesn't contain the target word.
    NotFound,
}

impl Alignment {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Gets the token index, start and end of the span or `(-1, -1, -1)` if not found.
    pub fn as_triple(&self) -> (i64, i64, i64) {
        match self {
            Self::Found { token, span } => (*token as i64, span.start as i64, span.end as i64),
            Self::NotFound => (-1, -1, -1),
        }
    }

    /// Gets the token index or `-1` if not found.
    pub fn token_index(&self) -> i64 {
        self.as_triple().0
    }

    /// Formats the span as `start:end` or as an empty string if not found.
    pub fn span_string(&self) -> String {
        match self {
            Self::Found { span, .. } => span.to_string(),
            Self::NotFound => String::new(),
        }
    }
}

impl<T> Aligner<T>
where
    T: Tokenize,
{
    /// The normalized target word.
    pub fn target(&self) -> &str {
        self.target.as_str()
    }

    /// Tokenizes the sentence with the underlying tokenizer.
    pub fn tokenize(&self, sentence: &str) -> Result<Tokenization, TokenizerError> {
        self.tokenizer.tokenize(sentence)
    }

    /// Aligns the first occurrence of the target word in the sentence.
    ///
    /// An absent sentence is never aligned. A failure to tokenize the sentence is logged and the
    /// sentence is treated as if it doesn't contain the target word.
    pub fn align<'s>(&self, sentence: impl Into<Option<&'s str>>) -> Alignment {
        self.try_align(sentence).unwrap_or_else(|error| {
            warn!("{}", error);
            Alignment::NotFound
        })
    }

    /// Aligns the first occurrence of the target word in the sentence.
    ///
    /// # Errors
    /// Fails if the sentence can't be tokenized.
    pub fn try_align<'s>(
        &self,
        sentence: impl Into<Option<&'s str>>,
    ) -> Result<Alignment, TokenizerError> {
        let sentence = match sentence.into() {
            Some(sentence) => sentence,
            None => return Ok(Alignment::NotFound),
        };
        let tokenization = self.tokenizer.tokenize(sentence)?;

        Ok(self
            .align_spans(&Sentence::new(sentence), &tokenization)
            .or_else(|| self.align_tokens(&tokenization))
            .unwrap_or(Alignment::NotFound))
    }

    /// Searches the contiguous token spans for the target word.
    ///
    /// The spans are ordered by their first token and then by their last token, hence the first
    /// match is the leftmost occurrence. A span never crosses a special token.
    fn align_spans(&self, sentence: &Sentence, tokenization: &Tokenization) -> Option<Alignment> {
        let tokens = tokenization.tokens();
        for (idx, first) in tokens.iter().enumerate() {
            if first.offsets.is_degenerate() {
                continue;
            }
            for last in tokens[idx..]
                .iter()
                .take_while(|last| !last.offsets.is_degenerate())
            {
                let span = first.offsets.to(last.offsets);
                if sentence.get(span).map_or(false, |text| self.matches(text)) {
                    return Some(Alignment::Found { token: idx, span });
                }
            }
        }

        None
    }

    /// Searches the single tokens for the target word.
    ///
    /// The token values are compared instead of the sentence text, which catches tokens whose
    /// offsets don't point to the target word verbatim, e.g. because of stripped accents.
    fn align_tokens(&self, tokenization: &Tokenization) -> Option<Alignment> {
        tokenization
            .tokens()
            .iter()
            .enumerate()
            .filter(|(_, token)| !token.offsets.is_degenerate())
            .find(|(_, token)| {
                if token.is_continuation(&self.prefix) {
                    self.matches(&token.value[self.prefix.len()..])
                } else {
                    self.matches(&token.value)
                }
            })
            .map(|(idx, token)| Alignment::Found {
                token: idx,
                span: token.offsets,
            })
    }

    fn matches(&self, text: &str) -> bool {
        normalize(text) == self.target
    }
}
