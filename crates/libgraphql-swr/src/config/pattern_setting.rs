/// The value of a glob-pattern option: either one pattern or a list of them.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(
    expecting = "a glob pattern string or a list of glob pattern strings",
    untagged,
)]
pub enum PatternSetting {
    Single(String),
    Multiple(Vec<String>),
}
impl PatternSetting {
    /// Normalize into a list of non-empty patterns.
    pub fn into_patterns(self) -> Vec<String> {
        let patterns = match self {
            Self::Single(pattern) => vec![pattern],
            Self::Multiple(patterns) => patterns,
        };
        patterns.into_iter()
            .filter(|pattern| !pattern.is_empty())
            .collect()
    }
}
impl std::convert::From<&str> for PatternSetting {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}
impl std::convert::From<String> for PatternSetting {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}
impl<S: Into<String>, const N: usize> std::convert::From<[S; N]> for PatternSetting {
    fn from(value: [S; N]) -> Self {
        Self::Multiple(value.into_iter().map(Into::into).collect())
    }
}
impl std::convert::From<Vec<String>> for PatternSetting {
    fn from(value: Vec<String>) -> Self {
        Self::Multiple(value)
    }
}
