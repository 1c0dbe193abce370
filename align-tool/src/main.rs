use std::process::exit;

use anyhow::Error;
use structopt::StructOpt;

use crate::exit_code::FATAL_ERROR;

mod annotate;
mod exit_code;
mod inspect;
mod report;
mod table;
mod utils;

/// Aligns a word with the Bert tokens of sentences.
#[derive(StructOpt, Debug)]
enum CommandArgs {
    Annotate(annotate::AnnotateCmd),
    Inspect(inspect::InspectCmd),
}

impl CommandArgs {
    fn run(self) -> Result<i32, Error> {
        match self {
            CommandArgs::Annotate(cmd) => cmd.run(),
            CommandArgs::Inspect(cmd) => cmd.run(),
        }
    }
}

fn main() {
    env_logger::init();

    let exit_code = match CommandArgs::from_args().run() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{:?}", error);
            FATAL_ERROR
        }
    };

    exit(exit_code);
}
