use std::{fs::File, path::Path};

use tracing::info;

use crate::{error::Error, model::LabelMap};

/// Loads the cluster-name file. The file is closed before returning.
pub fn read_label_map(path: &Path) -> Result<LabelMap, Error> {
    let file = File::open(path)?;
    let labels = LabelMap::from_reader(file)?;
    info!("Loaded {} labels from {}", labels.len(), path.display());

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_reads_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("clusters.csv");
        fs::write(&path, "Alice,addr1\nBob,addr2\n").unwrap();

        let labels = read_label_map(&path).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.label("addr1"), "Alice");
        assert_eq!(labels.label("addr2"), "Bob");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_label_map(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
