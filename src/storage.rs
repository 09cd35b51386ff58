// Manages local file storage for the special day list.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to the SpecialDay serialization format require incrementing
// SPECIAL_DAYS_VERSION below to prevent data corruption.
use crate::context::AppContext;
use crate::model::SpecialDay;
use anyhow::Result;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

// Version history:
// - v1: initial format, days as [{name, date}] with yyyy-MM-dd dates
const SPECIAL_DAYS_VERSION: u32 = 1;

/// Wrapper struct for versioned local storage
#[derive(Serialize, Deserialize)]
struct SpecialDaysData {
    #[serde(default)]
    version: u32,
    days: Vec<SpecialDay>,
}

/// Tracks whether the last load operation succeeded for each file.
/// This prevents data loss by blocking saves when we couldn't load the
/// existing data.
static LOAD_STATE_MAP: OnceLock<Mutex<HashMap<PathBuf, LoadState>>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    /// Never attempted to load
    Uninitialized,
    /// Last load succeeded
    Success,
    /// Last load failed (deserialization error, corruption, etc.)
    Failed,
}

impl LoadState {
    fn get(path: &Path) -> LoadState {
        let map = LOAD_STATE_MAP.get_or_init(|| Mutex::new(HashMap::new()));
        *map.lock()
            .unwrap()
            .get(path)
            .unwrap_or(&LoadState::Uninitialized)
    }

    fn set(path: &Path, state: LoadState) {
        let map = LOAD_STATE_MAP.get_or_init(|| Mutex::new(HashMap::new()));
        map.lock().unwrap().insert(path.to_path_buf(), state);
    }
}

pub struct LocalStorage;

impl LocalStorage {
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive lock on a sibling `.lock`
    /// file, serializing access across processes.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    fn load_from_path(path: &Path) -> Result<Vec<SpecialDay>> {
        if !path.exists() {
            LoadState::set(path, LoadState::Success);
            return Ok(vec![]);
        }
        let result = Self::with_lock(path, || {
            let json = fs::read_to_string(path)?;
            let data: SpecialDaysData = serde_json::from_str(&json)?;
            if data.version != SPECIAL_DAYS_VERSION {
                return Err(anyhow::anyhow!(
                    "Unknown special days storage version {} in {} (expected {})",
                    data.version,
                    path.display(),
                    SPECIAL_DAYS_VERSION
                ));
            }
            Ok(data.days)
        });

        match &result {
            Ok(_) => LoadState::set(path, LoadState::Success),
            Err(e) => {
                log::warn!("Failed to load {}: {}", path.display(), e);
                LoadState::set(path, LoadState::Failed);
            }
        }
        result
    }

    fn save_to_path(path: &Path, days: &[SpecialDay]) -> Result<()> {
        if LoadState::get(path) == LoadState::Failed {
            return Err(anyhow::anyhow!(
                "Cannot save {}: previous load failed. This prevents overwriting data that couldn't be read.",
                path.display()
            ));
        }
        Self::with_lock(path, || {
            let data = SpecialDaysData {
                version: SPECIAL_DAYS_VERSION,
                days: days.to_vec(),
            };
            let json = serde_json::to_string_pretty(&data)?;
            Self::atomic_write(path, json)?;
            Ok(())
        })
    }

    /// Load the special day list from the context's data dir.
    ///
    /// A missing file is an empty list, not an error.
    pub fn load(ctx: &dyn AppContext) -> Result<Vec<SpecialDay>> {
        if let Some(path) = ctx.get_special_days_path() {
            Self::load_from_path(&path)
        } else {
            Ok(vec![])
        }
    }

    /// Save the special day list to the context's data dir.
    ///
    /// # Data Loss Prevention
    /// This function checks the load state before saving. If the last
    /// `load()` of this file failed, this returns an error instead of
    /// overwriting data that could not be read.
    pub fn save(ctx: &dyn AppContext, days: &[SpecialDay]) -> Result<()> {
        if let Some(path) = ctx.get_special_days_path() {
            Self::save_to_path(&path, days)?;
        }
        Ok(())
    }

    /// Whether a save through this context would currently be accepted.
    pub fn can_save(ctx: &dyn AppContext) -> bool {
        match ctx.get_special_days_path() {
            Some(path) => LoadState::get(&path) != LoadState::Failed,
            None => false,
        }
    }
}
