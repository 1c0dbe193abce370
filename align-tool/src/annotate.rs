use std::path::PathBuf;

use aligner::{Aligner, Tokenize};
use anyhow::{Context, Error};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use structopt::StructOpt;

use crate::{
    exit_code::NO_ERROR,
    report::{Report, CONVENTIONS},
    table::{Table, CHAR_SPAN, SENTENCE, TOKEN_INDEX},
    utils::AlignerArgs,
};

/// Annotates each sentence of a csv table with the position of the target word.
///
/// The sentence is read from the first field of each row. The index of the first token of the
/// occurrence is written into the second field and the character span `start:end` into the
/// third field.
#[derive(StructOpt, Debug)]
pub struct AnnotateCmd {
    #[structopt(flatten)]
    pub aligner: AlignerArgs,

    /// The file to write the annotated table to.
    ///
    /// Defaults to overwriting the input table.
    #[structopt(short, long)]
    pub output: Option<PathBuf>,

    /// The headerless csv table with the sentences.
    pub table: PathBuf,
}

impl AnnotateCmd {
    pub fn run(self) -> Result<i32, Error> {
        let AnnotateCmd {
            aligner,
            output,
            table: input,
        } = self;

        let mut table = Table::read(&input)
            .with_context(|| format!("Reading the table {} failed.", input.display()))?;
        debug!("Read {} rows from {}.", table.len(), input.display());

        let aligner = aligner.build()?;

        let progress_bar = ProgressBar::new(table.len() as u64).with_style(
            ProgressStyle::default_bar()
                .template("Aligning: [{bar:40}] {pos}/{len} {elapsed:>10}")
                .progress_chars("=> "),
        );
        let report = annotate_rows(&aligner, &mut table, &progress_bar);
        progress_bar.finish_and_clear();

        let output = output.unwrap_or(input);
        table
            .write(&output)
            .with_context(|| format!("Writing the table {} failed.", output.display()))?;
        info!("Wrote {} rows to {}.", report.total(), output.display());

        println!(
            "Done. Wrote {} rows to '{}'.",
            report.total(),
            output.display(),
        );
        println!("{}", report);
        println!();
        println!("{}", CONVENTIONS);

        Ok(NO_ERROR)
    }
}

/// Aligns the sentence of each row and fills in the token index and character span fields.
pub fn annotate_rows<T>(
    aligner: &Aligner<T>,
    table: &mut Table,
    progress_bar: &ProgressBar,
) -> Report
where
    T: Tokenize,
{
    let mut report = Report::new(aligner.target());
    for row in table.rows_mut() {
        let alignment = aligner.align(row[SENTENCE].as_str());
        row[TOKEN_INDEX] = alignment.token_index().to_string();
        row[CHAR_SPAN] = alignment.span_string();
        report.record(&alignment);
        progress_bar.inc(1);
    }

    report
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::utils::tests::aligner_args;

    const TABLE: &str = "\
The bat flew at night.
He likes combat sports.
\"Hello, a bat!\",old,value,extra
";

    const ANNOTATED: &str = "\
The bat flew at night.,2,4:7,
He likes combat sports.,-1,,
\"Hello, a bat!\",4,9:12,extra
";

    #[test]
    fn test_annotate_rows() {
        let aligner = aligner_args().build().unwrap();
        let mut table = Table::from_reader(TABLE.as_bytes()).unwrap();

        let report = annotate_rows(&aligner, &mut table, &ProgressBar::hidden());

        assert_eq!(report.total(), 3);
        assert_eq!(report.matched(), 2);
        assert_eq!(report.unmatched(), [2]);
        assert_eq!(table.rows()[0], ["The bat flew at night.", "2", "4:7", ""]);
        assert_eq!(table.rows()[1], ["He likes combat sports.", "-1", "", ""]);
        assert_eq!(table.rows()[2], ["Hello, a bat!", "4", "9:12", "extra"]);
    }

    #[test]
    fn test_annotate_empty_sentence() {
        let aligner = aligner_args().build().unwrap();
        let mut table = Table::from_reader(",1,2\n".as_bytes()).unwrap();

        let report = annotate_rows(&aligner, &mut table, &ProgressBar::hidden());

        assert_eq!(report.unmatched(), [1]);
        assert_eq!(table.rows()[0], ["", "-1", ""]);
    }

    #[test]
    fn test_run_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bat.csv");
        fs::write(&path, TABLE).unwrap();

        let cmd = AnnotateCmd {
            aligner: aligner_args(),
            output: None,
            table: path.clone(),
        };
        assert_eq!(cmd.run().unwrap(), NO_ERROR);
        assert_eq!(fs::read_to_string(&path).unwrap(), ANNOTATED);
    }

    #[test]
    fn test_run_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bat.csv");
        let output = dir.path().join("annotated.csv");
        fs::write(&input, TABLE).unwrap();

        let cmd = AnnotateCmd {
            aligner: aligner_args(),
            output: Some(output.clone()),
            table: input.clone(),
        };
        assert_eq!(cmd.run().unwrap(), NO_ERROR);
        assert_eq!(fs::read_to_string(&input).unwrap(), TABLE);
        assert_eq!(fs::read_to_string(&output).unwrap(), ANNOTATED);
    }

    #[test]
    fn test_run_missing_table() {
        let dir = tempdir().unwrap();
        let cmd = AnnotateCmd {
            aligner: aligner_args(),
            output: None,
            table: dir.path().join("missing.csv"),
        };
        assert!(cmd.run().is_err());
    }

    #[test]
    fn test_run_empty_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bat.csv");
        fs::write(&path, "").unwrap();

        let cmd = AnnotateCmd {
            aligner: aligner_args(),
            output: None,
            table: path.clone(),
        };
        assert!(cmd.run().is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
