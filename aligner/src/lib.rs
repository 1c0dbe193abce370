#![cfg_attr(doc, forbid(broken_intra_doc_links, private_intra_doc_links))]
//! Aligns a target word with the sub-word tokens of a sentence.
//!
//! The aligner locates the first left-to-right occurrence of a single literal word (`"bat"` by
//! default) in a sentence and reports both the index of the token at which the occurrence begins
//! and the character span of the occurrence. Token indices include the special tokens inserted by
//! the tokenizer, e.g. `[CLS]` is at index `0`. Character spans are 0-based, start inclusive and
//! end exclusive and count unicode scalar values.
//!
//! The occurrence is searched in two passes:
//! - Contiguous token spans are merged via their offsets and compared to the target after
//!   normalization, which handles words split into several pieces as well as pieces with
//!   surrounding punctuation.
//! - Single tokens are compared to the target after removing the continuation prefix.
//!
//! ```no_run
//! use aligner::Builder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let aligner = Builder::from_file("bert-base-uncased/tokenizer.json")?
//!         .with_target("bat")?
//!         .with_continuation_prefix("##")
//!         .build();
//!
//!     let alignment = aligner.align(Some("The bat flew at night."));
//!     assert_eq!(alignment.as_triple(), (2, 4, 7));
//!     assert_eq!(alignment.span_string(), "4:7");
//!
//!     Ok(())
//! }
//! ```

mod aligner;
mod builder;
mod normalizer;
mod offsets;
mod tokenizer;

pub use crate::{
    aligner::{Aligner, Alignment},
    builder::{Builder, BuilderError},
    normalizer::normalize,
    offsets::Offsets,
    tokenizer::{BertTokenizer, Token, Tokenization, Tokenize, TokenizerError},
};

/// The word which is aligned if no other target is configured.
pub const DEFAULT_TARGET: &str = "bat";

/// The prefix which marks a token as the continuation of the previous token.
pub const DEFAULT_CONTINUATION_PREFIX: &str = "##";
