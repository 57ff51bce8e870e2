// src/core/exclude.rs
use glob::Pattern;
use std::path::{Component, Path, PathBuf};

/// A single exclusion glob, compiled once.
///
/// Patterns without a `/` only ever look at the file name. Patterns with a `/`
/// may match the whole path, the path one directory below its first segment,
/// or any trailing run of path components.
#[derive(Debug)]
struct ExcludePattern {
    full: Option<Pattern>,
    nested: Option<Pattern>,
    filename_only: bool,
}

impl ExcludePattern {
    fn new(pattern: &str) -> Self {
        let filename_only = !pattern.contains('/');
        Self {
            full: compile(pattern),
            nested: if filename_only {
                None
            } else {
                compile(&format!("*/{pattern}"))
            },
            filename_only,
        }
    }

    fn matches(&self, path: &Path) -> bool {
        // Invalid globs never match anything.
        let Some(full) = &self.full else {
            return false;
        };

        let path_str = path.to_string_lossy();
        if full.matches(&path_str) {
            return true;
        }

        if self.filename_only {
            return path
                .file_name()
                .is_some_and(|name| full.matches(&name.to_string_lossy()));
        }

        if self
            .nested
            .as_ref()
            .is_some_and(|nested| nested.matches(&path_str))
        {
            return true;
        }

        let components: Vec<Component<'_>> = path.components().collect();
        (0..components.len()).any(|start| {
            let suffix: PathBuf = components.iter().skip(start).collect();
            full.matches(&suffix.to_string_lossy())
        })
    }
}

fn compile(pattern: &str) -> Option<Pattern> {
    let pattern = collapse_stars(pattern);
    match Pattern::new(&pattern) {
        Ok(compiled) => Some(compiled),
        Err(err) => {
            log::debug!("ignoring invalid exclude pattern {pattern:?}: {err}");
            None
        }
    }
}

/// Reduces every run of `*` to a single `*` unless it is a `**` that fills a
/// whole path segment. `glob` rejects `test**.py`; fnmatch reads it as `test*.py`.
fn collapse_stars(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while let Some(&ch) = chars.get(i) {
        if ch != '*' {
            out.push(ch);
            i += 1;
            continue;
        }

        let mut end = i;
        while chars.get(end) == Some(&'*') {
            end += 1;
        }
        let starts_segment = i == 0 || chars.get(i - 1) == Some(&'/');
        let ends_segment = chars.get(end).is_none_or(|next| *next == '/');
        if end - i == 2 && starts_segment && ends_segment {
            out.push_str("**");
        } else {
            out.push('*');
        }
        i = end;
    }
    out
}

/// Set of user-supplied exclusion globs.
#[derive(Debug, Default)]
pub struct ExcludePatterns {
    patterns: Vec<ExcludePattern>,
}

impl ExcludePatterns {
    #[inline]
    #[must_use]
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut set = Self::default();
        for pattern in patterns {
            set.add_pattern(pattern.as_ref());
        }
        set
    }

    /// Adds a pattern to the set. Malformed globs are kept but match nothing.
    #[inline]
    pub fn add_pattern(&mut self, pattern: &str) {
        self.patterns.push(ExcludePattern::new(pattern));
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns `true` if any pattern in the set matches `path`.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        self.patterns.iter().any(|pattern| pattern.matches(path))
    }
}

/// Checks one path against one glob pattern.
#[inline]
pub fn matches<P: AsRef<Path>>(path: P, pattern: &str) -> bool {
    ExcludePattern::new(pattern).matches(path.as_ref())
}
