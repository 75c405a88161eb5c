//! Firefox default-profile discovery.
//!
//! Firefox records its profiles in `profiles.ini` under a
//! platform-specific application directory. The actively used default
//! profile lives in an `[Install*]` section's `Default=` entry; older
//! installs only mark a `[Profile*]` section with `Default=1`. This
//! module searches the known candidate directories and returns the
//! first profile that actually contains a `places.sqlite`.
//!
//! Discovery is a collaborator of the exporter, not part of it: the
//! coordinator takes whatever path this (or a `--db` override)
//! produces and never depends on the search strategy.

use std::fs;
use std::path::{Path, PathBuf};

/// Candidate Firefox application directories, in search order.
#[must_use]
pub fn candidate_dirs() -> Vec<PathBuf> {
    let Some(home) = dirs::home_dir() else {
        return Vec::new();
    };
    vec![
        // macOS
        home.join("Library/Application Support/Firefox"),
        // Linux
        home.join(".mozilla/firefox"),
        // Ubuntu snap
        home.join("snap/firefox/common/.mozilla/firefox"),
        // Flatpak
        home.join(".var/app/org.mozilla.firefox/.mozilla/firefox"),
    ]
}

/// Locate the default profile's places database.
#[must_use]
pub fn find_places_db() -> Option<PathBuf> {
    find_in_dirs(&candidate_dirs())
}

/// Locate the default profile's places database under the given
/// application directories.
#[must_use]
pub fn find_in_dirs(app_dirs: &[PathBuf]) -> Option<PathBuf> {
    for app_dir in app_dirs {
        let ini_path = app_dir.join("profiles.ini");
        let Ok(text) = fs::read_to_string(&ini_path) else {
            continue;
        };

        let sections = parse_ini(&text);

        // Install* sections have the actively used default profile
        for (name, entries) in &sections {
            if name.starts_with("Install") {
                if let Some(path) = lookup(entries, "Default") {
                    if let Some(db) = places_db_at(app_dir, path) {
                        return Some(db);
                    }
                }
            }
        }

        // Fallback: a Profile section marked Default=1
        for (name, entries) in &sections {
            if name.starts_with("Profile") && lookup(entries, "Default") == Some("1") {
                if let Some(path) = lookup(entries, "Path") {
                    if let Some(db) = places_db_at(app_dir, path) {
                        return Some(db);
                    }
                }
            }
        }
    }

    None
}

/// Resolve a profile path (relative to the application directory or
/// absolute) and check it holds a places database.
fn places_db_at(app_dir: &Path, profile_path: &str) -> Option<PathBuf> {
    let profile = if Path::new(profile_path).is_absolute() {
        PathBuf::from(profile_path)
    } else {
        app_dir.join(profile_path)
    };
    let db = profile.join("places.sqlite");
    db.is_file().then_some(db)
}

/// Minimal INI parser: ordered sections of `key=value` entries.
///
/// Covers the subset `profiles.ini` uses. Key lookup is
/// case-insensitive (see [`lookup`]); blank lines, `;`/`#` comments,
/// and lines outside any section are ignored.
fn parse_ini(text: &str) -> Vec<(String, Vec<(String, String)>)> {
    let mut sections: Vec<(String, Vec<(String, String)>)> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            sections.push((name.trim().to_string(), Vec::new()));
        } else if let Some((key, value)) = line.split_once('=') {
            if let Some((_, entries)) = sections.last_mut() {
                entries.push((key.trim().to_string(), value.trim().to_string()));
            }
        }
    }

    sections
}

fn lookup<'a>(entries: &'a [(String, String)], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_profile(app_dir: &Path, rel: &str, with_db: bool) {
        let profile = app_dir.join(rel);
        fs::create_dir_all(&profile).unwrap();
        if with_db {
            fs::write(profile.join("places.sqlite"), b"").unwrap();
        }
    }

    #[test]
    fn test_install_section_preferred() {
        let temp = TempDir::new().unwrap();
        let app = temp.path();
        write_profile(app, "active.default-release", true);
        write_profile(app, "stale.default", true);
        fs::write(
            app.join("profiles.ini"),
            "[Install4F96D1932A9F858E]\nDefault=active.default-release\nLocked=1\n\n\
             [Profile0]\nName=default\nPath=stale.default\nDefault=1\n",
        )
        .unwrap();

        let db = find_in_dirs(&[app.to_path_buf()]).unwrap();
        assert!(db.ends_with("active.default-release/places.sqlite"));
    }

    #[test]
    fn test_profile_default_fallback() {
        let temp = TempDir::new().unwrap();
        let app = temp.path();
        write_profile(app, "abc.default", true);
        fs::write(
            app.join("profiles.ini"),
            "[General]\nStartWithLastProfile=1\n\n\
             [Profile1]\nName=other\nPath=other.profile\n\n\
             [Profile0]\nName=default\nPath=abc.default\nDefault=1\n",
        )
        .unwrap();

        let db = find_in_dirs(&[app.to_path_buf()]).unwrap();
        assert!(db.ends_with("abc.default/places.sqlite"));
    }

    #[test]
    fn test_absolute_profile_path() {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("firefox");
        fs::create_dir_all(&app).unwrap();
        let elsewhere = temp.path().join("elsewhere/profile");
        fs::create_dir_all(&elsewhere).unwrap();
        fs::write(elsewhere.join("places.sqlite"), b"").unwrap();
        fs::write(
            app.join("profiles.ini"),
            format!("[Install0]\nDefault={}\n", elsewhere.display()),
        )
        .unwrap();

        let db = find_in_dirs(&[app]).unwrap();
        assert_eq!(db, elsewhere.join("places.sqlite"));
    }

    #[test]
    fn test_profile_without_db_is_skipped() {
        let temp = TempDir::new().unwrap();
        let app = temp.path();
        write_profile(app, "empty.default", false);
        write_profile(app, "real.default", true);
        fs::write(
            app.join("profiles.ini"),
            "[Install0]\nDefault=empty.default\n\n\
             [Profile0]\nPath=real.default\nDefault=1\n",
        )
        .unwrap();

        let db = find_in_dirs(&[app.to_path_buf()]).unwrap();
        assert!(db.ends_with("real.default/places.sqlite"));
    }

    #[test]
    fn test_no_profiles_ini_yields_none() {
        let temp = TempDir::new().unwrap();
        assert!(find_in_dirs(&[temp.path().to_path_buf()]).is_none());
    }

    #[test]
    fn test_later_candidate_dir_searched() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first");
        let second = temp.path().join("second");
        fs::create_dir_all(&first).unwrap();
        write_profile(&second, "p.default", true);
        fs::write(
            second.join("profiles.ini"),
            "[Install0]\nDefault=p.default\n",
        )
        .unwrap();

        let db = find_in_dirs(&[first, second]).unwrap();
        assert!(db.ends_with("p.default/places.sqlite"));
    }

    #[test]
    fn test_parse_ini_shape() {
        let sections = parse_ini(
            "; comment\n[A]\nx=1\ny = 2\n\n[B]\nz=3\nnot a pair\n",
        );
        assert_eq!(sections.len(), 2);
        assert_eq!(lookup(&sections[0].1, "X"), Some("1"));
        assert_eq!(lookup(&sections[0].1, "y"), Some("2"));
        assert_eq!(lookup(&sections[1].1, "z"), Some("3"));
        assert_eq!(lookup(&sections[1].1, "missing"), None);
    }
}
