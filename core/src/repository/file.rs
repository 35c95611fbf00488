use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::repository::traits::KeyValueStore;

const FILE_EXTENSION: &str = "json";

/// Keeps each key in its own `<key>.json` file inside a data directory.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)
            .with_context(|| format!("Could not create data directory {}", base_dir.display()))?;
        Ok(FileKeyValueStore { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(anyhow!("Invalid storage key: '{}'", key));
        }
        Ok(self.base_dir.join(format!("{}.{}", key, FILE_EXTENSION)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("Could not read {}", path.display())),
        };
        // A readable file with bad bytes surfaces as `FromUtf8Error`, not as an I/O failure.
        let content = String::from_utf8(bytes)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension(format!("{}.tmp", FILE_EXTENSION));

        // Write aside, then rename over the target so readers never see half a blob.
        let result = write_file(&tmp_path, value).and_then(|()| {
            fs::rename(&tmp_path, &path)
                .with_context(|| format!("Could not replace {}", path.display()))
        });
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Could not remove {}", path.display())),
        }
    }
}

fn write_file(path: &Path, value: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(value.as_bytes())?;
    writer.flush()?;
    Ok(())
}
