use std::path::{Path, PathBuf};

use wpload_constants::{ARTIFACT_FILE_NAME, INSTALLED_REPOSITORY, ROOT_MANIFEST};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir_exists(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Get the composer.json path for a project
#[must_use]
pub fn get_root_manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(ROOT_MANIFEST)
}

/// Get the installed.json path inside a vendor directory
#[must_use]
pub fn get_installed_repository_path(vendor_dir: &Path) -> PathBuf {
    vendor_dir.join(INSTALLED_REPOSITORY)
}

/// Get the generated autoloader path inside a vendor directory
#[must_use]
pub fn get_artifact_path(vendor_dir: &Path) -> PathBuf {
    vendor_dir.join(ARTIFACT_FILE_NAME)
}

/// Render a filesystem path as a normalized, forward-slash string
#[must_use]
pub fn path_to_string(path: &Path) -> String {
    normalize_path(&path.to_string_lossy())
}

#[must_use]
pub fn is_absolute_path(path: &str) -> bool {
    path.starts_with('/') || path.as_bytes().get(1) == Some(&b':') || path.starts_with("\\\\")
}

/// Normalize a path string: forward slashes only, `.` and empty segments
/// removed, `..` collapsed where a real parent exists. Scheme, drive and
/// UNC prefixes are kept.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut rest = path.as_str();
    let mut absolute = "";

    if rest.len() > 2 {
        if let Some(stripped) = rest.strip_prefix("//") {
            absolute = "//";
            rest = stripped;
        }
    }

    let (prefix, remainder) = rest.split_at(prefix_length(rest));
    rest = remainder;

    if let Some(stripped) = rest.strip_prefix('/') {
        absolute = "/";
        rest = stripped;
    }

    let mut parts: Vec<&str> = Vec::new();
    let mut up = false;
    for chunk in rest.split('/') {
        if chunk == ".." && (!absolute.is_empty() || up) {
            parts.pop();
            up = !(parts.is_empty() || parts.last() == Some(&".."));
        } else if chunk != "." && !chunk.is_empty() {
            parts.push(chunk);
            up = chunk != "..";
        }
    }

    format!("{}{}{}", uppercase_drive(prefix), absolute, parts.join("/"))
}

/// Length of a leading `scheme://`, `scheme://X:`, `scheme:` or `X:` prefix.
fn prefix_length(path: &str) -> usize {
    let bytes = path.as_bytes();
    let alnum = bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();

    if alnum >= 2 && bytes.get(alnum) == Some(&b':') {
        let mut len = alnum + 1;
        if path.get(len..).is_some_and(|r| r.starts_with("//")) {
            len += 2;
            let drive = bytes.get(len).is_some_and(u8::is_ascii_alphabetic)
                && bytes.get(len + 1) == Some(&b':');
            if drive {
                len += 2;
            }
        }
        return len;
    }

    if bytes.first().is_some_and(u8::is_ascii_alphabetic) && bytes.get(1) == Some(&b':') {
        return 2;
    }

    0
}

fn uppercase_drive(prefix: &str) -> String {
    let Some(head) = prefix.strip_suffix(':') else {
        return prefix.to_string();
    };
    let Some(letter) = head.chars().last() else {
        return prefix.to_string();
    };
    let before = head.strip_suffix(letter).unwrap_or(head);
    if letter.is_ascii_alphabetic() && (before.is_empty() || before.ends_with("://")) {
        format!("{before}{}:", letter.to_ascii_uppercase())
    } else {
        prefix.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_segments() {
        assert_eq!(normalize_path("/var/www/./app//src/"), "/var/www/app/src");
        assert_eq!(
            normalize_path("/var/www/vendor/composer/../acme/lib"),
            "/var/www/vendor/acme/lib"
        );
    }

    #[test]
    fn test_normalize_relative_parent_kept() {
        assert_eq!(normalize_path("../lib/src"), "../lib/src");
        assert_eq!(normalize_path("a/../../b"), "../b");
    }

    #[test]
    fn test_normalize_backslashes_and_drive() {
        assert_eq!(
            normalize_path(r"c:\projects\site\vendor"),
            "C:/projects/site/vendor"
        );
    }

    #[test]
    fn test_normalize_scheme_prefix() {
        assert_eq!(normalize_path("phar://c:/x/./y.phar"), "phar://C:/x/y.phar");
        assert_eq!(normalize_path("file:///tmp/a/../b"), "file:///tmp/b");
    }

    #[test]
    fn test_normalize_unc() {
        assert_eq!(normalize_path(r"\\server\share\dir"), "//server/share/dir");
    }

    #[test]
    fn test_normalize_root_and_dot() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("."), "");
    }

    #[test]
    fn test_is_absolute_path() {
        assert!(is_absolute_path("/var/www"));
        assert!(is_absolute_path("C:/site"));
        assert!(is_absolute_path(r"\\server\share"));
        assert!(!is_absolute_path("vendor/acme"));
        assert!(!is_absolute_path(""));
    }

    #[test]
    fn test_artifact_path() {
        assert_eq!(
            get_artifact_path(Path::new("/site/vendor")),
            PathBuf::from("/site/vendor/wordpress-autoload.php")
        );
        assert_eq!(
            get_installed_repository_path(Path::new("/site/vendor")),
            PathBuf::from("/site/vendor/composer/installed.json")
        );
    }
}
