use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;

/// An ordered set of shell-glob patterns matched against operation names.
///
/// Supports `*`, `?`, character classes (`[a-z]`, `[!a-z]`) and brace
/// alternation (`{getUser,getPost}`). A name matches the set when it matches
/// any one of its patterns; an empty set matches nothing.
#[derive(Clone, Debug)]
pub struct PatternSet {
    glob_set: GlobSet,
    patterns: Vec<String>,
}
impl PatternSet {
    /// A [`PatternSet`] that matches no names.
    pub fn empty() -> Self {
        Self {
            glob_set: GlobSet::empty(),
            patterns: vec![],
        }
    }

    /// Compile each pattern into a glob. Empty patterns are skipped.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternSetBuildError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut kept = vec![];
        for pattern in patterns {
            let pattern = pattern.into();
            if pattern.is_empty() {
                continue;
            }
            let glob = Glob::new(&pattern).map_err(|err| PatternSetBuildError {
                pattern: pattern.to_owned(),
                err,
            })?;
            builder.add(glob);
            kept.push(pattern);
        }

        let glob_set = builder.build().map_err(|err| PatternSetBuildError {
            pattern: kept.join(", "),
            err,
        })?;

        Ok(Self {
            glob_set,
            patterns: kept,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `name` matches at least one pattern in this set.
    pub fn is_match(&self, name: &str) -> bool {
        !self.patterns.is_empty() && self.glob_set.is_match(name)
    }

    /// The source patterns, in the order they were given.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
impl std::default::Default for PatternSet {
    fn default() -> Self {
        Self::empty()
    }
}
impl std::cmp::PartialEq for PatternSet {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns
    }
}

#[derive(Clone, Debug, thiserror::Error)]
#[error("Invalid glob pattern `{pattern}`: {err}")]
pub struct PatternSetBuildError {
    pub pattern: String,
    pub err: globset::Error,
}
