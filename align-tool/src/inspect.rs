use aligner::{Alignment, Tokenization};
use anyhow::{Context, Error};
use log::debug;
use serde::Serialize;
use structopt::StructOpt;

use crate::{
    exit_code::{NON_FATAL_ERROR, NO_ERROR},
    utils::AlignerArgs,
};

/// Inspect the tokens and the alignment of a single sentence.
#[derive(StructOpt, Debug)]
pub struct InspectCmd {
    #[structopt(flatten)]
    pub aligner: AlignerArgs,

    #[structopt(long)]
    pub pretty: bool,

    /// The sentence to inspect.
    pub sentence: String,
}

#[derive(Serialize)]
struct InspectCmdResult<'a> {
    sentence: &'a str,
    target: &'a str,
    tokens: Tokenization,
    alignment: Alignment,
}

impl InspectCmd {
    pub fn run(self) -> Result<i32, Error> {
        let InspectCmd {
            aligner,
            pretty,
            sentence,
        } = self;

        let aligner = aligner.build()?;
        let tokens = aligner
            .tokenize(&sentence)
            .context("Tokenizing the sentence failed.")?;
        debug!("Tokenized the sentence into {} tokens.", tokens.tokens().len());
        let alignment = aligner.try_align(sentence.as_str())?;

        let result = InspectCmdResult {
            sentence: &sentence,
            target: aligner.target(),
            tokens,
            alignment,
        };
        let serialized = if pretty {
            serde_json::to_string_pretty(&result)?
        } else {
            serde_json::to_string(&result)?
        };

        println!("{}", serialized);

        let exit_code = if alignment.is_found() {
            NO_ERROR
        } else {
            NON_FATAL_ERROR
        };

        Ok(exit_code)
    }
}
