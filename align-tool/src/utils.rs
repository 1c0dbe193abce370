use std::{
    env::current_dir,
    path::{Path, PathBuf},
};

use aligner::{Aligner, BertTokenizer, Builder};
use anyhow::{anyhow, Context, Error};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use structopt::StructOpt;

/// Shows a spinner with the message while the function runs.
pub(crate) fn progress_spin_until_done<R>(msg: &'static str, func: impl FnOnce() -> R) -> R {
    let spinner = ProgressBar::new_spinner()
        .with_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} {elapsed}"));
    spinner.set_message(msg);
    spinner.enable_steady_tick(80);
    let result = func();
    spinner.finish_and_clear();

    result
}

/// The configuration of the aligner.
#[derive(StructOpt, Debug)]
pub struct AlignerArgs {
    /// The `tokenizer.json` file of the Bert tokenizer.
    ///
    /// Defaults to `bert-base-uncased/tokenizer.json` in the data dir.
    #[structopt(long)]
    pub tokenizer: Option<PathBuf>,

    /// The directory with the tokenizer data.
    ///
    /// Defaults to the closest `data` dir in the current dir or its parents.
    #[structopt(long)]
    pub data_dir: Option<PathBuf>,

    /// The word to align.
    #[structopt(long, default_value = "bat")]
    pub target: String,

    /// The prefix of word pieces which continue the previous token.
    #[structopt(long, default_value = "##")]
    pub prefix: String,
}

const DATA_DIR: &str = "data";

impl AlignerArgs {
    const TOKENIZER_PATH: &'static str = "bert-base-uncased/tokenizer.json";

    /// Loads the tokenizer and builds the aligner.
    pub fn build(self) -> Result<Aligner<BertTokenizer>, Error> {
        let tokenizer = self.tokenizer_path()?;
        check_tokenizer_path(&tokenizer)?;
        debug!("Loading the tokenizer from {}.", tokenizer.display());

        let aligner = progress_spin_until_done("Loading tokenizer", || {
            Builder::from_file(&tokenizer)
        })
        .with_context(|| format!("Loading the tokenizer {} failed.", tokenizer.display()))?
        .with_target(&self.target)
        .context("Invalid target.")?
        .with_continuation_prefix(self.prefix)
        .build();

        Ok(aligner)
    }

    fn tokenizer_path(&self) -> Result<PathBuf, Error> {
        if let Some(tokenizer) = &self.tokenizer {
            return Ok(tokenizer.clone());
        }
        let data_dir = match &self.data_dir {
            Some(data_dir) => data_dir.clone(),
            None => find_data_dir(&current_dir()?)?,
        };

        Ok(data_dir.join(Self::TOKENIZER_PATH))
    }
}

fn check_tokenizer_path(path: &Path) -> Result<(), Error> {
    if path.is_file() {
        Ok(())
    } else {
        Err(anyhow!("The tokenizer {} is not a file.", path.display()))
    }
}

/// Finds the closest `data` dir in the base dir or its parents.
///
/// The search stops at the root of a git repository.
fn find_data_dir(base_dir: &Path) -> Result<PathBuf, Error> {
    for dir in base_dir.ancestors() {
        let data_dir = dir.join(DATA_DIR);
        if data_dir.is_dir() {
            return Ok(data_dir);
        }
        if dir.join(".git").exists() {
            break;
        }
    }

    Err(anyhow!(
        "No data dir found in {} or its parents.",
        base_dir.display(),
    ))
}
