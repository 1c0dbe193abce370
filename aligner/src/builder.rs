use std::path::Path;

use displaydoc::Display;
use thiserror::Error;

use crate::{
    aligner::Aligner,
    normalizer::normalize,
    tokenizer::{BertTokenizer, Tokenize, TokenizerError},
    DEFAULT_CONTINUATION_PREFIX,
    DEFAULT_TARGET,
};

/// A builder to create an [`Aligner`].
pub struct Builder<T> {
    tokenizer: T,
    target: String,
    prefix: String,
}

/// Potential errors of the [`Aligner`] [`Builder`].
#[derive(Debug, Display, Error)]
pub enum BuilderError {
    /// The target must be a single word, got {0:?}
    Target(String),
    /// Failed to build the tokenizer: {0}
    Tokenizer(#[from] TokenizerError),
}

impl Builder<BertTokenizer> {
    /// Creates an [`Aligner`] builder from a `tokenizer.json` file.
    ///
    /// The default settings are the same as for [`new()`].
    ///
    /// [`new()`]: Builder::new
    pub fn from_file(tokenizer: impl AsRef<Path>) -> Result<Self, BuilderError> {
        Ok(Self::new(BertTokenizer::from_file(tokenizer)?))
    }
}

impl<T> Builder<T>
where
    T: Tokenize,
{
    /// Creates an [`Aligner`] builder from a tokenizer.
    ///
    /// The default settings are:
    /// - The target word `"bat"`.
    /// - The continuation prefix `"##"` of Bert word pieces.
    pub fn new(tokenizer: T) -> Self {
        Self {
            tokenizer,
            target: DEFAULT_TARGET.into(),
            prefix: DEFAULT_CONTINUATION_PREFIX.into(),
        }
    }

    /// Sets the target word.
    ///
    /// The word is compared in its normalized form, i.e. without surrounding punctuation and
    /// lowercased. Defaults to `"bat"`.
    ///
    /// # Errors
    /// Fails if the normalized word is empty or contains whitespace.
    pub fn with_target(mut self, word: impl AsRef<str>) -> Result<Self, BuilderError> {
        let target = normalize(word.as_ref());
        if target.is_empty() || target.contains(char::is_whitespace) {
            Err(BuilderError::Target(word.as_ref().into()))
        } else {
            self.target = target;
            Ok(self)
        }
    }

    /// Sets the prefix which marks a token as the continuation of the previous token.
    ///
    /// Defaults to `"##"`.
    pub fn with_continuation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Builds an [`Aligner`].
    pub fn build(self) -> Aligner<T> {
        Aligner {
            tokenizer: self.tokenizer,
            target: self.target,
            prefix: self.prefix,
        }
    }
}
