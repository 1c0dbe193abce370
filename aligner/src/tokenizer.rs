use std::{iter::FromIterator, path::Path};

use displaydoc::Display;
use serde::Serialize;
use thiserror::Error;
use tokenizers::{Error as HfError, Tokenizer as HfTokenizer};

use crate::offsets::Offsets;

/// A sub-word token of a sentence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The surface text of the token as defined by the vocabulary.
    pub value: String,
    /// The character offsets of the token in the sentence.
    pub offsets: Offsets,
}

impl Token {
    pub fn new(value: impl Into<String>, offsets: impl Into<Offsets>) -> Self {
        Self {
            value: value.into(),
            offsets: offsets.into(),
        }
    }

    /// Checks whether the token continues the previous token.
    pub fn is_continuation(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.value.starts_with(prefix)
    }
}

/// The tokens of a sentence including special tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tokenization(Vec<Token>);

impl Tokenization {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }
}

impl FromIterator<Token> for Tokenization {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The potential errors of the tokenizer.
#[derive(Debug, Display, Error)]
pub enum TokenizerError {
    /// Failed to load the tokenizer: {0}
    Load(#[source] HfError),
    /// Failed to encode the sentence: {0}
    Encode(#[source] HfError),
}

/// Splits sentences into sub-word tokens with character offsets.
pub trait Tokenize {
    /// Tokenizes the sentence.
    ///
    /// The tokenization must include the special tokens with degenerate `(0, 0)` offsets and the
    /// offsets of all other tokens must be character offsets into the sentence.
    fn tokenize(&self, sentence: &str) -> Result<Tokenization, TokenizerError>;
}

impl<T> Tokenize for &T
where
    T: Tokenize + ?Sized,
{
    fn tokenize(&self, sentence: &str) -> Result<Tokenization, TokenizerError> {
        (**self).tokenize(sentence)
    }
}

/// A pre-trained Bert word piece tokenizer.
///
/// Wraps a huggingface tokenizer which is configured by a `tokenizer.json` file, e.g. the one of
/// `bert-base-uncased`.
pub struct BertTokenizer(HfTokenizer);

impl BertTokenizer {
    /// Loads the tokenizer from a `tokenizer.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TokenizerError> {
        HfTokenizer::from_file(path)
            .map(Self)
            .map_err(TokenizerError::Load)
    }

    /// Loads the tokenizer from the bytes of a `tokenizer.json` file.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self, TokenizerError> {
        HfTokenizer::from_bytes(bytes)
            .map(Self)
            .map_err(TokenizerError::Load)
    }
}

impl Tokenize for BertTokenizer {
    fn tokenize(&self, sentence: &str) -> Result<Tokenization, TokenizerError> {
        let encoding = self
            .0
            .encode_char_offsets(sentence, true)
            .map_err(TokenizerError::Encode)?;

        Ok(encoding
            .get_tokens()
            .iter()
            .zip(encoding.get_offsets())
            .map(|(value, &offsets)| Token::new(value.as_str(), offsets))
            .collect())
    }
}
