//! Photo discovery in `{section}/W{week}/` folders.

use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

pub const DEFAULT_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// List the photos of one week as forward-slash paths relative to `root`.
///
/// Only files directly inside the week folder count; the result is sorted
/// case-insensitively. A missing folder yields an empty list.
pub fn list_photos_for_week(
    root: &Path,
    section_dir: &str,
    week: i64,
    extensions: &[String],
) -> Vec<String> {
    let week_dir_name = format!("W{week}");
    let week_dir = root.join(section_dir).join(&week_dir_name);
    if !week_dir.is_dir() {
        debug!(dir = %week_dir.display(), "no photo folder for week");
        return Vec::new();
    }

    let mut photos = Vec::new();
    for entry in WalkDir::new(&week_dir).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(dir = %week_dir.display(), error = %err, "cannot read photo folder");
                return Vec::new();
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if has_photo_extension(&name, extensions) {
            photos.push(format!("{section_dir}/{week_dir_name}/{name}").replace('\\', "/"));
        }
    }

    photos.sort_by_key(|path| path.to_lowercase());
    photos
}

fn has_photo_extension(name: &str, extensions: &[String]) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
