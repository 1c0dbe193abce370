use std::{io::Result, path::PathBuf};

use crate::asset::resolve_asset;

/// Resolves the path to the tiny Bert `tokenizer.json`.
///
/// The tokenizer has the configuration of `bert-base-uncased` with a vocabulary which is just
/// large enough for the test sentences.
pub fn tokenizer() -> Result<PathBuf> {
    resolve_asset("bertTinyTokenizer")
}
