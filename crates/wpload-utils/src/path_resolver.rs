use crate::path_utils::{is_absolute_path, normalize_path};
use crate::php::export_string;

pub const VENDOR_DIR_VAR: &str = "$vendorDir";
pub const BASE_DIR_VAR: &str = "$baseDir";

/// Turns filesystem paths into PHP expressions that stay valid when the
/// project tree is moved, by anchoring them on `$vendorDir` or `$baseDir`.
pub struct PathResolver;

impl PathResolver {
    /// Build the PHP expression for `path`.
    ///
    /// Relative paths are resolved against `base_path` first. Paths under
    /// the vendor directory win over paths under the base directory; a path
    /// under neither is emitted as an absolute string literal.
    #[must_use]
    pub fn to_code_literal(base_path: &str, vendor_path: &str, path: &str) -> String {
        let path = if is_absolute_path(path) {
            normalize_path(path)
        } else {
            normalize_path(&format!("{base_path}/{path}"))
        };

        // Only the part below the anchor decides whether the path is a phar.
        let (code, tail) = if let Some(suffix) = Self::strip_dir(&path, vendor_path) {
            let code = if suffix.is_empty() {
                VENDOR_DIR_VAR.to_string()
            } else {
                Self::anchored(VENDOR_DIR_VAR, suffix)
            };
            (code, suffix)
        } else if let Some(suffix) = Self::strip_dir(&path, base_path) {
            // The base dir itself is written as `$baseDir . '/'`.
            let rest = if suffix.is_empty() { "/" } else { suffix };
            (Self::anchored(BASE_DIR_VAR, rest), suffix)
        } else {
            (export_string(&path), path.as_str())
        };

        if tail.contains(".phar") {
            format!("'phar://' . {code}")
        } else {
            code
        }
    }

    /// Remainder of `path` below `dir`, with its leading slash, if `path`
    /// is `dir` itself or lives inside it.
    fn strip_dir<'a>(path: &'a str, dir: &str) -> Option<&'a str> {
        let dir = normalize_path(dir);
        let dir = dir.trim_end_matches('/');
        if dir.is_empty() {
            return None;
        }

        let rest = path.strip_prefix(dir)?;
        (rest.is_empty() || rest.starts_with('/')).then_some(rest)
    }

    fn anchored(var: &str, suffix: &str) -> String {
        format!("{var} . {}", export_string(suffix))
    }
}
