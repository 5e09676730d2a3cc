//! Folder exclusion rules
//!
//! Exclusions are given as comma-separated folder names. A trailing `+` on a
//! name excludes only the folder's contents; without it the folder's whole
//! subtree is excluded. Matching is case-insensitive and compares the bare
//! folder name, so a rule applies at every depth where the name occurs.

/// How a matched folder is kept out of the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionMode {
    /// Skip the folder's subtree entirely.
    Full,
    /// List the folder itself but none of its contents.
    ContentsOnly,
}

/// A single parsed rule: a folder-name pattern plus how to apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    // Stored lowercased so classification compares lowercase to lowercase.
    pattern: String,
    mode: ExclusionMode,
}

impl ExclusionRule {
    pub fn new(pattern: &str, mode: ExclusionMode) -> Self {
        Self {
            pattern: pattern.to_lowercase(),
            mode,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn mode(&self) -> ExclusionMode {
        self.mode
    }
}

/// Outcome of matching a folder name against the rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// No rule matched; traverse normally.
    None,
    /// A contents-only rule matched.
    ContentsOnly,
    /// A full rule matched. Wins over `ContentsOnly` when both match.
    Full,
}

/// Parsed exclusion rules for one walk. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    rules: Vec<ExclusionRule>,
}

impl ExclusionSet {
    /// Parse raw exclusion tokens into rules.
    ///
    /// Each token may itself be a comma-separated list. Names are trimmed,
    /// empty names are dropped, and a trailing `+` selects
    /// [`ExclusionMode::ContentsOnly`].
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut rules = Vec::new();
        for token in tokens {
            for raw in token.as_ref().split(',') {
                let raw = raw.trim();
                if raw.is_empty() {
                    continue;
                }
                let (pattern, mode) = match raw.strip_suffix('+') {
                    Some(stripped) => (stripped.trim(), ExclusionMode::ContentsOnly),
                    None => (raw, ExclusionMode::Full),
                };
                if pattern.is_empty() {
                    continue;
                }
                rules.push(ExclusionRule::new(pattern, mode));
            }
        }
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[ExclusionRule] {
        &self.rules
    }

    /// Decide how a folder with the given name is excluded, if at all.
    ///
    /// A full match always wins, even when a contents-only rule for the same
    /// name appears earlier in the set.
    pub fn classify(&self, name: &str) -> Exclusion {
        let name = name.to_lowercase();
        let mut contents_only = false;
        for rule in &self.rules {
            if rule.pattern == name {
                match rule.mode {
                    ExclusionMode::Full => return Exclusion::Full,
                    ExclusionMode::ContentsOnly => contents_only = true,
                }
            }
        }
        if contents_only {
            Exclusion::ContentsOnly
        } else {
            Exclusion::None
        }
    }
}
