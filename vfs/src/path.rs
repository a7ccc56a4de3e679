//! Path handling for the file-system tree
//!
//! Paths are absolute, `/`-delimited strings rooted at a drive token
//! (e.g. `C:/Users/guest/Documents`). Normalization resolves `.` and `..`
//! with a floor at the root drive: popping past the root clamps to the
//! root rather than erroring.

/// Splits a path into its non-empty segments.
pub fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|seg| !seg.is_empty()).collect()
}

/// Joins a child name onto a base path.
pub fn join(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}

/// Returns the last segment of a path, or the path itself if it has none.
pub fn file_name(path: &str) -> &str {
    split(path).last().copied().unwrap_or(path)
}

/// Returns the parent path, clamped at the root token.
///
/// The root's parent is the root itself.
pub fn parent(path: &str, root: &str) -> String {
    let mut segments = split(path);
    if segments.len() > 1 {
        segments.pop();
        segments.join("/")
    } else {
        root.to_string()
    }
}

/// Normalizes a target path against a current directory.
///
/// Targets whose first segment is the root token are taken as absolute;
/// anything else is joined onto `base`. `.` segments are dropped and `..`
/// pops one level, clamped at the root: `normalize("C:", "C:", "../../..")`
/// yields `"C:"`, never an error or a path above the root.
pub fn normalize(root: &str, base: &str, target: &str) -> String {
    let absolute = if split(target).first() == Some(&root) {
        target.to_string()
    } else {
        join(base, target)
    };

    let mut stack: Vec<&str> = Vec::new();
    for segment in split(&absolute) {
        match segment {
            "." => {}
            ".." => {
                stack.pop();
            }
            other => stack.push(other),
        }
    }

    if stack.is_empty() {
        return root.to_string();
    }
    if stack[0] != root {
        stack.insert(0, root);
    }
    stack.join("/")
}
