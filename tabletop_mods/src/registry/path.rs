//! Path normalization and sandboxing
//!
//! Every resource path a mod references goes through these functions before
//! any read. Normalization is purely lexical: no filesystem access, so the
//! result is identical on every participant of a session.

/// Reserved scheme for resources bundled with the application
pub const BUILTIN_SCHEME: &str = "builtin://";

/// True if the path addresses the built-in namespace
pub fn is_builtin(path: &str) -> bool {
    path.replace('\\', "/").starts_with(BUILTIN_SCHEME)
}

/// Canonicalize separators and resolve `.`/`..` segments.
///
/// Idempotent. A rooted path can never climb above its root; a relative path
/// keeps leading `..` segments it cannot resolve. Built-in paths keep their
/// scheme and are treated as rooted at the bundle root.
pub fn normalize_absolute_path(path: &str) -> String {
    let unified = path.replace('\\', "/");

    if let Some(rest) = unified.strip_prefix(BUILTIN_SCHEME) {
        return format!("{}{}", BUILTIN_SCHEME, join_segments(rest, true));
    }

    let (prefix, rest) = split_drive(&unified);
    let rooted = !prefix.is_empty() || rest.starts_with('/');
    let body = join_segments(rest, rooted);

    if rooted {
        format!("{}/{}", prefix, body)
    } else if body.is_empty() {
        ".".to_string()
    } else {
        body
    }
}

/// Resolve a mod-authored path against the mod's base directory.
///
/// Built-in paths and already-absolute paths are only normalized; anything
/// else is joined onto `base_directory` first.
pub fn normalize_relative_path(path: &str, base_directory: &str) -> String {
    let unified = path.replace('\\', "/");
    if unified.starts_with(BUILTIN_SCHEME) || is_absolute(&unified) {
        normalize_absolute_path(&unified)
    } else {
        normalize_absolute_path(&format!("{}/{}", base_directory, unified))
    }
}

/// Normalize a directory into sandbox-root form (always ends with `/`)
pub fn sandbox_root(directory: &str) -> String {
    let normalized = normalize_absolute_path(directory);
    if normalized.ends_with('/') {
        normalized
    } else {
        format!("{}/", normalized)
    }
}

/// The sandbox gate: built-in paths, or paths under `root` (sandbox-root form)
///
/// A relative root is compared in the form `normalize_relative_path`
/// produces: `./` matches any relative path that does not climb out.
pub fn check_path(path: &str, root: Option<&str>) -> bool {
    if path.starts_with(BUILTIN_SCHEME) {
        return true;
    }
    let Some(root) = root.filter(|root| !root.is_empty()) else {
        return false;
    };
    match root.strip_prefix("./") {
        Some("") => !is_absolute(path) && path != ".." && !path.starts_with("../"),
        Some(prefix) => path.starts_with(prefix),
        None => path.starts_with(root),
    }
}

/// True for `/`-rooted and drive-prefixed paths
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/') || !split_drive(path).0.is_empty()
}

/// Split a Windows drive prefix (`C:`) off the path
fn split_drive(path: &str) -> (&str, &str) {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic() {
        path.split_at(2)
    } else {
        ("", path)
    }
}

fn join_segments(path: &str, rooted: bool) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }
    segments.join("/")
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
