use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::EngineError;

const TMP_SUFFIX: &str = "tmp";

/// Writes `value` as pretty JSON, staging to a temporary file before renaming.
pub fn save_json_to_file<T: Serialize>(value: &T, path: &Path) -> Result<(), EngineError> {
    let json = serde_json::to_string_pretty(value)?;
    replace_file(path, &json)?;
    Ok(())
}

pub fn load_json_from_file<T: DeserializeOwned>(path: &Path) -> Result<T, EngineError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Atomically replaces `path` with `data`.
pub fn replace_file(path: &Path, data: &str) -> io::Result<()> {
    let tmp = tmp_path(path);
    write_atomic(&tmp, data)?;
    fs::rename(&tmp, path)
}

pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/x/config.json")),
            PathBuf::from("/x/config.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/x/db")), PathBuf::from("/x/db.tmp"));
    }

    #[test]
    fn save_then_load_json() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("values.json");
        save_json_to_file(&vec![1, 2, 3], &path).expect("save");
        assert!(!tmp_path(&path).exists());
        let loaded: Vec<i32> = load_json_from_file(&path).expect("load");
        assert_eq!(loaded, vec![1, 2, 3]);
    }

    #[test]
    fn missing_file_maps_to_storage_error() {
        let dir = tempdir().expect("tempdir");
        let err = load_json_from_file::<Vec<i32>>(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, EngineError::Storage(_)));
    }
}
