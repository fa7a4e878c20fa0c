//! Path helpers

use std::path::{Path, PathBuf};

/// Insert `suffix` between a file name's stem and extension:
/// `data.yaml` + `-encrypted` becomes `data-encrypted.yaml`.
pub fn add_suffix_to_file_name(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let name = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}{suffix}.{ext}"),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

/// Expand a leading `~` to the user's home directory. Paths without the
/// prefix come back unchanged, as do paths on systems with no resolvable
/// home.
pub fn expand_path(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(base) = directories::BaseDirs::new() {
            return base.home_dir().join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_goes_before_the_extension() {
        assert_eq!(
            add_suffix_to_file_name(Path::new("dir/data.yaml"), "-encrypted"),
            PathBuf::from("dir/data-encrypted.yaml")
        );
    }

    #[test]
    fn suffix_appends_when_there_is_no_extension() {
        assert_eq!(
            add_suffix_to_file_name(Path::new("secret"), "-decrypted"),
            PathBuf::from("secret-decrypted")
        );
    }

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path(Path::new("/tmp/key.json")), PathBuf::from("/tmp/key.json"));
    }

    #[test]
    fn expand_path_resolves_home_prefix() {
        let expanded = expand_path(Path::new("~/key.json"));
        assert!(!expanded.starts_with("~"));
        assert!(expanded.ends_with("key.json"));
    }
}
