use crate::error::CoreError;
use crate::models::ColumnChoice;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const SPREADSHEET_PATH: &str = "SPREADSHEET_PATH";
pub const EXPECTED_WORKSHEET_COUNT: &str = "EXPECTED_WORKSHEET_COUNT";

const DATE_COLUMN_SUFFIX: &str = "_DATE_COLUMN";
const DESCRIPTION_COLUMN_SUFFIX: &str = "_DESCRIPTION_COLUMN";
const FILE_HEADER: &str = "# Task Checker Configuration";

/// Derives the settings-key prefix for a worksheet: upper-cased, spaces
/// replaced with underscores. `"My Tasks"` keys as `MY_TASKS_DATE_COLUMN`.
pub fn worksheet_key(name: &str) -> String {
    name.trim().to_uppercase().replace(' ', "_")
}

/// User preferences persisted between runs as a key=value text file.
///
/// One assignment per line; `#` comments and blank lines are ignored on
/// load, and surrounding single or double quotes are stripped from values.
/// Mutations mark the store dirty; callers persist with an explicit
/// [`Settings::save`]. Single-process, no locking.
#[derive(Debug, Default, Clone)]
pub struct Settings {
    values: BTreeMap<String, String>,
    dirty: bool,
}

impl Settings {
    /// Loads settings from `path`. An absent file is an empty store; an
    /// unreadable file is an error.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        let mut values = BTreeMap::new();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                values.insert(key.trim().to_string(), value.to_string());
            }
        }

        Ok(Self {
            values,
            dirty: false,
        })
    }

    /// Writes the whole store back to `path`.
    pub fn save(&mut self, path: &Path) -> Result<(), CoreError> {
        let mut out = String::from(FILE_HEADER);
        out.push('\n');
        for (key, value) in &self.values {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        fs::write(path, out)?;
        self.dirty = false;
        Ok(())
    }

    /// Whether any mutation since load/save is still unpersisted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn spreadsheet_path(&self) -> Option<&str> {
        self.get(SPREADSHEET_PATH)
    }

    pub fn set_spreadsheet_path(&mut self, path: &Path) {
        self.set(SPREADSHEET_PATH, path.to_string_lossy().into_owned());
    }

    pub fn expected_worksheet_count(&self) -> Option<usize> {
        self.get(EXPECTED_WORKSHEET_COUNT)?.parse().ok()
    }

    pub fn set_expected_worksheet_count(&mut self, count: usize) {
        self.set(EXPECTED_WORKSHEET_COUNT, count.to_string());
    }

    /// The saved (date, description) column pair for a worksheet, if both
    /// keys are present.
    pub fn column_pair(&self, worksheet: &str) -> Option<(String, String)> {
        let key = worksheet_key(worksheet);
        let date = self.get(&format!("{}{}", key, DATE_COLUMN_SUFFIX))?;
        let desc = self.get(&format!("{}{}", key, DESCRIPTION_COLUMN_SUFFIX))?;
        Some((date.to_string(), desc.to_string()))
    }

    /// Records a confirmed column choice for a worksheet.
    pub fn record_columns(&mut self, worksheet: &str, choice: &ColumnChoice) {
        let key = worksheet_key(worksheet);
        self.set(
            format!("{}{}", key, DATE_COLUMN_SUFFIX),
            choice.date_column.clone(),
        );
        self.set(
            format!("{}{}", key, DESCRIPTION_COLUMN_SUFFIX),
            choice.description_column.clone(),
        );
    }

    fn set(&mut self, key: impl Into<String>, value: String) {
        let key = key.into();
        if self.values.get(&key) != Some(&value) {
            self.values.insert(key, value);
            self.dirty = true;
        }
    }
}
