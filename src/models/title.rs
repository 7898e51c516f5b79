use std::collections::HashSet;

/// Unique titles in the order they were first discovered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    titles: Vec<String>,
    seen: HashSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the title unless it is already present.
    ///
    /// Returns `true` if the title was new. Titles are compared exactly, so
    /// "John Wick" and "John wick" are distinct candidates.
    pub fn insert(&mut self, title: String) -> bool {
        if self.seen.contains(&title) {
            return false;
        }
        self.seen.insert(title.clone());
        self.titles.push(title);
        true
    }

    pub fn contains(&self, title: &str) -> bool {
        self.seen.contains(title)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.titles
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for title in iter {
            set.insert(title);
        }
        set
    }
}
