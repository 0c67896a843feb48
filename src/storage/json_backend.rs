use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::errors::{InsightsError, Result};

const TMP_SUFFIX: &str = "tmp";

/// Reads a `{ "category": amount }` budget mapping.
///
/// Amounts must be finite; the runway engine only looks at the key set.
pub fn load_budgets(path: &Path) -> Result<BTreeMap<String, f64>> {
    let data = fs::read_to_string(path).map_err(|err| {
        InsightsError::StorageError(format!("cannot read budgets {}: {err}", path.display()))
    })?;
    let budgets: BTreeMap<String, f64> = serde_json::from_str(&data)?;
    if let Some((category, _)) = budgets.iter().find(|(_, amount)| !amount.is_finite()) {
        return Err(InsightsError::InvalidInput(format!(
            "budget for `{category}` is not a finite number"
        )));
    }
    Ok(budgets)
}

pub fn save_budgets(path: &Path, budgets: &BTreeMap<String, f64>) -> Result<()> {
    save_report(path, budgets)
}

/// Writes any serializable value as pretty JSON, staging through a temp file.
pub fn save_report<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, &json)
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(TMP_SUFFIX);
    path.with_file_name(name)
}
