//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, which
//! usually maps to the directory Zellij was started from (typically `~`).

use std::path::{Path, PathBuf};

const STORE_FILE: &str = "bookfinder.json";
const TRACE_FILE: &str = "bookfinder-otlp.json";

/// Returns the data directory, `/host/.local/share/zellij/bookfinder`.
///
/// ```
/// use bookfinder::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/bookfinder"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookfinder")
}

/// Key-value store holding saved books and the theme preference.
#[must_use]
pub fn store_file(data_dir: &Path) -> PathBuf {
    data_dir.join(STORE_FILE)
}

/// OTLP trace output.
#[must_use]
pub fn trace_file(data_dir: &Path) -> PathBuf {
    data_dir.join(TRACE_FILE)
}

/// Maps a `~`-prefixed path to its `/host` sandbox equivalent.
///
/// ```
/// use bookfinder::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/dusk.toml"), "/etc/dusk.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_data_dir() {
        let dir = get_data_dir();
        assert_eq!(store_file(&dir), dir.join("bookfinder.json"));
        assert_eq!(trace_file(&dir), dir.join("bookfinder-otlp.json"));
    }
}
