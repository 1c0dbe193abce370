use std::{
    fs::File,
    io::{BufReader, Error, ErrorKind, Result},
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// The dir of the test data relative to the workspace dir.
pub const DATA_DIR: &str = "data";

/// The manifest of the test data relative to the workspace dir.
pub const MANIFEST: &str = "assets_manifest.json";

/// The workspace dir, which contains this crate.
fn workspace_dir() -> Result<&'static Path> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .ok_or_else(|| Error::new(ErrorKind::NotFound, "missing cargo workspace dir"))
}

/// Resolves the path to the requested data relative to the workspace dir.
pub fn resolve_path(path: &[impl AsRef<Path>]) -> Result<PathBuf> {
    path.iter()
        .fold(workspace_dir()?.to_path_buf(), |path, component| {
            path.join(component)
        })
        .canonicalize()
}

#[derive(Deserialize)]
struct Asset {
    id: String,
    path: PathBuf,
}

#[derive(Deserialize)]
struct Manifest {
    data_assets: Vec<Asset>,
}

impl Manifest {
    fn read() -> Result<Self> {
        let file = File::open(resolve_path(&[MANIFEST])?)?;
        serde_json::from_reader(BufReader::new(file)).map_err(Error::from)
    }

    fn find(self, id: &str) -> Option<Asset> {
        self.data_assets.into_iter().find(|asset| asset.id == id)
    }
}

/// Resolves the path to the asset with the id from the manifest.
pub fn resolve_asset(id: &str) -> Result<PathBuf> {
    let asset = Manifest::read()?
        .find(id)
        .ok_or_else(|| Error::new(ErrorKind::NotFound, format!("unknown asset {:?}", id)))?;

    resolve_path(&[Path::new(DATA_DIR), asset.path.as_path()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest() {
        assert!(resolve_path(&[MANIFEST]).unwrap().is_file());
        assert!(!Manifest::read().unwrap().data_assets.is_empty());
    }

    #[test]
    fn test_resolve_asset() {
        let path = resolve_asset("bertTinyTokenizer").unwrap();
        assert!(path.ends_with("data/bert_tiny/tokenizer.json"));
    }

    #[test]
    fn test_missing_asset() {
        let error = resolve_asset("missingAsset").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_missing_path() {
        assert!(resolve_path(&["data", "missing.json"]).is_err());
    }
}
