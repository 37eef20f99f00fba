//! Marker-based pre-normalization for natural-language time fragments.
//!
//! Times transcribed from written records sometimes arrive as `1分05秒2`
//! instead of `1:05.2`. Instead of hard-coding those characters inside the
//! numeric parser, replacement happens up front through a table of marker
//! substrings, keeping the core parsing locale-independent.

/// Replacement table mapping marker substrings to time separators.
///
/// The default table carries the CJK minute/second markers. Callers with
/// other entry conventions build their own via [`MarkerTable::from_pairs`]:
///
/// ```rust
/// use lanetime::MarkerTable;
///
/// let table = MarkerTable::from_pairs([("min", ':'), ("sec", '.')]);
/// assert_eq!(table.apply("1min05sec2"), "1:05.2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTable {
    // Sorted longest-first so overlapping markers substitute predictably.
    entries: Vec<(String, char)>,
}

impl MarkerTable {
    /// Table with the CJK markers: `分` becomes `:`, `秒` becomes `.`.
    pub fn cjk() -> Self {
        Self::from_pairs([("分", ':'), ("秒", '.')])
    }

    /// Build a table from marker/separator pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, char)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, char)> = pairs
            .into_iter()
            .map(|(marker, sep)| (marker.into(), sep))
            .filter(|(marker, _)| !marker.is_empty())
            .collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// Replace every marker occurrence in `input` with its separator.
    pub fn apply(&self, input: &str) -> String {
        let mut result = input.to_string();
        for (marker, separator) in &self.entries {
            if result.contains(marker.as_str()) {
                result = result.replace(marker.as_str(), &separator.to_string());
            }
        }
        result
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::cjk()
    }
}

/// Map full-width separators to their ASCII equivalents.
pub(crate) fn normalize_separators(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '：' => ':',
            '．' | '。' => '.',
            other => other,
        })
        .collect()
}
