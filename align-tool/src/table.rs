use std::{
    fs::{self, File},
    io::{Read, Write},
    path::Path,
};

use anyhow::{bail, Error};
use csv::{Reader, ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;

/// The field of the sentence.
pub const SENTENCE: usize = 0;

/// The field of the token index.
pub const TOKEN_INDEX: usize = 1;

/// The field of the character span.
pub const CHAR_SPAN: usize = 2;

/// A headerless csv table of sentences.
///
/// All rows have the same number of fields and at least the sentence, token index and character
/// span fields. Missing fields are filled with empty strings.
#[derive(Debug, PartialEq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    const MIN_FIELDS: usize = CHAR_SPAN + 1;

    /// Reads the table from a csv file.
    pub fn read(path: &Path) -> Result<Self, Error> {
        Self::from_reader(File::open(path)?)
    }

    /// Reads the table from csv data.
    ///
    /// # Errors
    /// Fails on malformed csv data or if the table doesn't have any rows.
    pub fn from_reader(reader: impl Read) -> Result<Self, Error> {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        Self::from_csv(reader)
    }

    fn from_csv<R: Read>(mut reader: Reader<R>) -> Result<Self, Error> {
        let mut rows = reader
            .records()
            .map(|record| record.map(|record| record.iter().map(str::to_owned).collect()))
            .collect::<Result<Vec<Vec<_>>, _>>()?;
        if rows.is_empty() {
            bail!("The table is empty.");
        }

        let num_fields = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or_default()
            .max(Self::MIN_FIELDS);
        for row in rows.iter_mut() {
            row.resize(num_fields, String::new());
        }

        Ok(Self { rows })
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<String>] {
        &mut self.rows
    }

    /// Writes the table to a csv file.
    ///
    /// The table is written to a temporary file next to the destination first, which then replaces
    /// the destination. The destination is left untouched if writing fails. An existing destination
    /// keeps its permissions.
    pub fn write(&self, path: &Path) -> Result<(), Error> {
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut file = NamedTempFile::new_in(dir)?;
        self.write_to(file.as_file_mut())?;
        if let Ok(metadata) = fs::metadata(path) {
            file.as_file().set_permissions(metadata.permissions())?;
        }
        file.persist(path)?;

        Ok(())
    }

    /// Writes the table as csv data.
    pub fn write_to(&self, writer: impl Write) -> Result<(), Error> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn to_csv(table: &Table) -> String {
        let mut data = Vec::new();
        table.write_to(&mut data).unwrap();
        String::from_utf8(data).unwrap()
    }

    #[test]
    fn test_read_pads_fields() {
        let table = Table::from_reader("The bat flew.\nA bat,3\n".as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows(),
            [
                vec!["The bat flew.".to_string(), String::new(), String::new()],
                vec!["A bat".to_string(), "3".to_string(), String::new()],
            ],
        );
    }

    #[test]
    fn test_read_keeps_extra_fields() {
        let table = Table::from_reader("a,b,c,d\ne\n".as_bytes()).unwrap();
        assert_eq!(table.rows()[0], ["a", "b", "c", "d"]);
        assert_eq!(table.rows()[1], ["e", "", "", ""]);
    }

    #[test]
    fn test_read_quoted() {
        let table = Table::from_reader("\"Oh, a \"\"bat\"\"!\"\n".as_bytes()).unwrap();
        assert_eq!(table.rows()[0][SENTENCE], "Oh, a \"bat\"!");
        assert_eq!(to_csv(&table), "\"Oh, a \"\"bat\"\"!\",,\n");
    }

    #[test]
    fn test_read_empty() {
        assert!(Table::from_reader("".as_bytes()).is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        assert!(Table::read(&dir.path().join("missing.csv")).is_err());
    }

    #[test]
    fn test_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bat.csv");
        fs::write(&path, "old content\n").unwrap();

        let mut table = Table::from_reader("The bat flew.\n".as_bytes()).unwrap();
        table.rows_mut()[0][TOKEN_INDEX] = "2".into();
        table.rows_mut()[0][CHAR_SPAN] = "4:7".into();
        table.write(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "The bat flew.,2,4:7\n");
        assert_eq!(Table::read(&path).unwrap(), table);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_permissions() {
        use std::{fs::Permissions, os::unix::fs::PermissionsExt};

        let dir = tempdir().unwrap();
        let path = dir.path().join("bat.csv");
        fs::write(&path, "The bat flew.\n").unwrap();
        fs::set_permissions(&path, Permissions::from_mode(0o644)).unwrap();

        let table = Table::read(&path).unwrap();
        table.write(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_write_missing_dir() {
        let dir = tempdir().unwrap();
        let table = Table::from_reader("The bat flew.\n".as_bytes()).unwrap();
        assert!(table.write(&dir.path().join("missing").join("bat.csv")).is_err());
    }
}
