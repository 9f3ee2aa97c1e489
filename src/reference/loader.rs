use std::path::Path;

use crate::models::{CurveFamily, MeasurementType, Sex};

use super::types::{ReferencePoint, ReferenceTable, TableKey};
use super::ReferenceError;

/// Parse one table's JSON array and validate it.
pub(crate) fn parse_table(key: TableKey, json: &str) -> Result<ReferenceTable, ReferenceError> {
    let points: Vec<ReferencePoint> = serde_json::from_str(json)
        .map_err(|e| ReferenceError::Parse(key.file_name(), e.to_string()))?;
    ReferenceTable::new(key, points)
}

/// Split a file stem like `head_circumference_male` into its key parts.
/// Returns `None` for names that do not follow the layout.
fn parse_file_stem(stem: &str) -> Option<(MeasurementType, Sex)> {
    let (measurement, sex) = stem.rsplit_once('_')?;
    Some((measurement.parse().ok()?, sex.parse().ok()?))
}

/// Load every table under `dir`, laid out as `<family>/<measurement>_<sex>.json`.
///
/// Entries that do not match the layout are skipped. Unreadable files and
/// malformed JSON are errors.
pub fn load_directory(dir: &Path) -> Result<Vec<ReferenceTable>, ReferenceError> {
    let load_err = |path: &Path, e: std::io::Error| {
        ReferenceError::Load(path.display().to_string(), e.to_string())
    };

    let mut family_dirs: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| load_err(dir, e))?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    family_dirs.sort();

    let mut tables = Vec::new();

    for family_dir in family_dirs {
        let family_name = family_dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let Ok(family) = family_name.parse::<CurveFamily>() else {
            tracing::debug!(dir = %family_dir.display(), "Skipping unknown curve family directory");
            continue;
        };

        let mut files: Vec<_> = std::fs::read_dir(&family_dir)
            .map_err(|e| load_err(&family_dir, e))?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        for file in files {
            let stem = file
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_lowercase)
                .unwrap_or_default();
            let Some((measurement, sex)) = parse_file_stem(&stem) else {
                tracing::debug!(file = %file.display(), "Skipping file outside reference layout");
                continue;
            };

            let json = std::fs::read_to_string(&file).map_err(|e| load_err(&file, e))?;
            let table = parse_table(TableKey::new(measurement, sex, family), &json)?;
            tracing::debug!(
                table = %table.key(),
                points = table.points().len(),
                "Loaded reference table"
            );
            tables.push(table);
        }
    }

    if tables.is_empty() {
        return Err(ReferenceError::Load(
            dir.display().to_string(),
            "no reference tables found".into(),
        ));
    }

    Ok(tables)
}
