use std::collections::BTreeSet;
use std::fmt;

use crate::defaults;

/// One classified exclusion token, wildcards already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// `name*`: target starts with the text.
    Prefix(String),
    /// `*name`: target ends with the text.
    Suffix(String),
    /// `*name*`: text appears anywhere in the target.
    Substring(String),
    /// `name`: target equals the text.
    Exact(String),
}

impl Pattern {
    /// Classifies an already lowercased and trimmed token.
    ///
    /// Returns `None` for empty tokens and for tokens containing a path
    /// separator; exclusions only ever apply to bare names.
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() || token.contains(['/', '\\']) {
            return None;
        }

        let pattern = match (token.starts_with('*'), token.ends_with('*')) {
            (false, true) => Self::Prefix(token.trim_end_matches('*').to_string()),
            (true, false) => Self::Suffix(token.trim_start_matches('*').to_string()),
            (true, true) => Self::Substring(token.trim_matches('*').to_string()),
            (false, false) => Self::Exact(token.to_string()),
        };
        Some(pattern)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(p) => write!(f, "{p}*"),
            Self::Suffix(s) => write!(f, "*{s}"),
            Self::Substring(s) => write!(f, "*{s}*"),
            Self::Exact(e) => f.write_str(e),
        }
    }
}

/// Exclusion patterns grouped into prefix, suffix, substring and exact buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    prefixes: BTreeSet<String>,
    suffixes: BTreeSet<String>,
    substrings: BTreeSet<String>,
    exact: BTreeSet<String>,
}

impl ExclusionSet {
    /// Builds the buckets from a comma-separated exclusion list such as
    /// `"*.min.js,readme,test*,*doc*"`. Matching is case-insensitive.
    pub fn new(spec: &str) -> Self {
        spec.to_lowercase()
            .split(',')
            .filter_map(|token| Pattern::parse(token.trim()))
            .fold(Self::default(), |mut set, pattern| {
                set.insert(pattern);
                set
            })
    }

    /// Same as [`ExclusionSet::new`], with `None` meaning no exclusions.
    pub fn from_optional(spec: Option<&str>) -> Self {
        spec.map(Self::new).unwrap_or_default()
    }

    pub fn insert(&mut self, pattern: Pattern) {
        match pattern {
            Pattern::Prefix(p) => self.prefixes.insert(p),
            Pattern::Suffix(s) => self.suffixes.insert(s),
            Pattern::Substring(s) => self.substrings.insert(s),
            Pattern::Exact(e) => self.exact.insert(e),
        };
    }

    /// True if `target` hits any bucket. The four checks are OR-ed together.
    pub fn is_match(&self, target: &str) -> bool {
        let target = target.to_lowercase();
        self.prefixes.iter().any(|p| target.starts_with(p.as_str()))
            || self.suffixes.iter().any(|s| target.ends_with(s.as_str()))
            || self.substrings.iter().any(|s| target.contains(s.as_str()))
            || self.exact.contains(&target)
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
            && self.suffixes.is_empty()
            && self.substrings.is_empty()
            && self.exact.is_empty()
    }

    pub fn prefixes(&self) -> &BTreeSet<String> {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &BTreeSet<String> {
        &self.suffixes
    }

    pub fn substrings(&self) -> &BTreeSet<String> {
        &self.substrings
    }

    pub fn exact(&self) -> &BTreeSet<String> {
        &self.exact
    }

    /// All patterns in the set, bucket by bucket.
    pub fn patterns(&self) -> impl Iterator<Item = Pattern> + '_ {
        let prefixes = self.prefixes.iter().cloned().map(Pattern::Prefix);
        let suffixes = self.suffixes.iter().cloned().map(Pattern::Suffix);
        let substrings = self.substrings.iter().cloned().map(Pattern::Substring);
        let exact = self.exact.iter().cloned().map(Pattern::Exact);
        prefixes.chain(suffixes).chain(substrings).chain(exact)
    }
}

/// Why a file is slated for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteReason {
    /// No dot in the name and not an allow-listed extensionless name.
    NoExtension,
    /// Has a dot but no supported extension.
    UnsupportedExtension,
    /// Matched the user's file exclusions.
    Excluded,
}

impl DeleteReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoExtension => "no extension",
            Self::UnsupportedExtension => "unsupported extension",
            Self::Excluded => "excluded",
        }
    }
}

impl fmt::Display for DeleteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides which files in a kept directory get deleted.
pub struct FileFilter {
    exclusions: ExclusionSet,
}

impl FileFilter {
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// Evaluates all three deletion rules against `file_name`.
    ///
    /// Each rule is checked on its own, so a name can collect more than one
    /// reason. An empty result means the file is kept.
    pub fn delete_reasons(&self, file_name: &str) -> Vec<DeleteReason> {
        let name = file_name.to_lowercase();
        let has_dot = name.contains('.');

        let mut reasons = Vec::new();
        if !has_dot && !defaults::is_supported_extensionless(&name) {
            reasons.push(DeleteReason::NoExtension);
        }
        if has_dot && !defaults::has_supported_extension(&name) {
            reasons.push(DeleteReason::UnsupportedExtension);
        }
        if self.exclusions.is_match(&name) {
            reasons.push(DeleteReason::Excluded);
        }
        reasons
    }

    pub fn should_keep(&self, file_name: &str) -> bool {
        self.delete_reasons(file_name).is_empty()
    }
}
