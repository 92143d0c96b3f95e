//! Atomic JSON write of the event calendar.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use racecal_core::Event;

/// Serializes `events` as a pretty-printed JSON array and replaces `path`.
///
/// The document is written to a hidden sibling temp file first and renamed
/// over the target, so readers see either the old file or the complete new
/// one.
///
/// # Errors
///
/// Returns an error if serialization, the temp write, or the rename fails.
/// The temp file is removed on failure.
pub(crate) fn write_events(path: &Path, events: &[Event]) -> anyhow::Result<()> {
    let mut json = serde_json::to_vec_pretty(events).context("failed to serialize events")?;
    json.push(b'\n');

    let tmp = temp_path_for(path)?;
    let result = write_file(&tmp, &json)
        .with_context(|| format!("failed to write {}", tmp.display()))
        .and_then(|()| {
            fs::rename(&tmp, path).with_context(|| {
                format!("failed to move {} to {}", tmp.display(), path.display())
            })
        });

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_path_for(path: &Path) -> anyhow::Result<PathBuf> {
    let file_name = path
        .file_name()
        .with_context(|| format!("output path {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(dir.join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        uuid::Uuid::new_v4()
    )))
}

fn write_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use racecal_core::{EventType, GeoCoordinates, Location};

    use super::*;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("racecal-persist-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn event(name: &str) -> Event {
        Event::new(
            format!("https://24hoursoflemons.com/schedule/race/{name}"),
            name.to_owned(),
            "July 4, 2026 ".to_owned(),
            EventType::Race,
            format!("{name} Raceway"),
        )
        .with_location(Location {
            coordinates: Some(GeoCoordinates::new(38.16, -122.45)),
            address: Some("29355 Arnold Dr".to_owned()),
            name: Some(format!("{name} Raceway")),
        })
    }

    #[test]
    fn writes_json_array_of_events() {
        let dir = scratch_dir();
        let path = dir.join("events.json");

        write_events(&path, &[event("sonoma"), event("thunderhill")]).unwrap();

        let written: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        let array = written.as_array().expect("top level is an array");
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["name"], "sonoma");
        assert_eq!(array[0]["eventType"], "race");
        assert_eq!(array[1]["location"]["coordinates"]["longitude"], -122.45);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn overwrites_existing_file_and_leaves_no_temp_files() {
        let dir = scratch_dir();
        let path = dir.join("events.json");
        fs::write(&path, "stale").unwrap();

        write_events(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
        let entries: Vec<_> = fs::read_dir(&dir).unwrap().collect();
        assert_eq!(entries.len(), 1, "only the output file should remain");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = scratch_dir();
        let path = dir.join("no-such-dir").join("events.json");

        assert!(write_events(&path, &[event("sonoma")]).is_err());
        assert!(!path.exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        let tmp = temp_path_for(Path::new("out/events.json")).unwrap();
        assert_eq!(tmp.parent(), Some(Path::new("out")));
        let name = tmp.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(".events.json."), "{name}");
        assert!(name.ends_with(".tmp"), "{name}");
    }

    #[test]
    fn bare_file_name_uses_current_dir() {
        let tmp = temp_path_for(Path::new("events.json")).unwrap();
        assert_eq!(tmp.parent(), Some(Path::new(".")));
    }
}
