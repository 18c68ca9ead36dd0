use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::model::record::RawActivity;
use crate::repository::traits::ActivitySource;
use crate::store::ActivityStore;

const DEFAULT_FILE_NAME: &str = "activity.json";

/// Loads the activity mapping from a JSON file keyed by `YYYY-MM-DD`,
/// valued by either a presence marker or a map of named metrics.
/// The file is read once at startup; nothing ever writes back to it.
#[derive(Clone)]
pub struct FileActivitySource {
    file_path: PathBuf,
}

impl FileActivitySource {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".fitgrid")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        // Initialize with an empty mapping on first run so the user
        // has a file to fill in.
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &HashMap::<String, RawActivity>::new())?;
            writer.flush()?;
        }

        Ok(FileActivitySource { file_path: path })
    }

    /// Points at an explicit file instead of the default location.
    pub fn at(file_path: PathBuf) -> Self {
        FileActivitySource { file_path }
    }
}

impl ActivitySource for FileActivitySource {
    fn load(&self) -> Result<ActivityStore> {
        let file = File::open(&self.file_path)
            .map_err(|e| anyhow!("Could not open {}: {}", self.file_path.display(), e))?;
        let reader = BufReader::new(file);
        let raw: HashMap<String, RawActivity> = serde_json::from_reader(reader)?;
        Ok(ActivityStore::from_raw(raw)?)
    }
}
