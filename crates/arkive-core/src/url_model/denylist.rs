//! Tracking query parameters that carry no resource-identifying meaning.

/// How a rule's pattern is compared against a query key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Key starts with the pattern (case-sensitive).
    Prefix,
    /// Key equals the pattern, ignoring ASCII case.
    ExactIgnoreCase,
}

/// One denylist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerRule {
    pub pattern: String,
    pub kind: MatchKind,
}

impl TrackerRule {
    pub fn prefix(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            kind: MatchKind::Prefix,
        }
    }

    pub fn exact(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            kind: MatchKind::ExactIgnoreCase,
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        match self.kind {
            MatchKind::Prefix => key.starts_with(self.pattern.as_str()),
            MatchKind::ExactIgnoreCase => key.eq_ignore_ascii_case(&self.pattern),
        }
    }
}

const DEFAULT_PREFIXES: &[&str] = &["utm_", "at_custom", "at_medium"];
const DEFAULT_EXACT: &[&str] = &["weibo_id", "fbclid", "chksm"];

/// Ordered set of tracker rules. A key is stripped when any rule matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    rules: Vec<TrackerRule>,
}

impl Default for Denylist {
    fn default() -> Self {
        let rules = DEFAULT_PREFIXES
            .iter()
            .map(|p| TrackerRule::prefix(*p))
            .chain(DEFAULT_EXACT.iter().map(|k| TrackerRule::exact(*k)))
            .collect();
        Self { rules }
    }
}

impl Denylist {
    /// A denylist that strips nothing.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, rule: TrackerRule) -> Self {
        self.push(rule);
        self
    }

    /// Adds a rule unless an identical one is already present.
    pub fn push(&mut self, rule: TrackerRule) {
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
    }

    pub fn is_tracker(&self, key: &str) -> bool {
        self.rules.iter().any(|r| r.matches(key))
    }

    pub fn rules(&self) -> &[TrackerRule] {
        &self.rules
    }
}

impl Extend<TrackerRule> for Denylist {
    fn extend<I: IntoIterator<Item = TrackerRule>>(&mut self, iter: I) {
        for rule in iter {
            self.push(rule);
        }
    }
}
