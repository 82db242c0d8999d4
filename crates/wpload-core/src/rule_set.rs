use indexmap::IndexMap;

/// Namespace prefix to search paths, in insertion order.
///
/// The empty namespace is the fallback entry matching every class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: IndexMap<String, Vec<String>>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, namespace: &str, path: String) {
        self.rules.entry(namespace.to_string()).or_default().push(path);
    }

    /// Append `other`'s paths after ours; namespaces new to us keep
    /// `other`'s order after our own.
    pub fn merge(&mut self, other: Self) {
        for (namespace, paths) in other.rules {
            self.rules.entry(namespace).or_default().extend(paths);
        }
    }

    /// Drop repeated paths within each namespace, keeping first occurrences,
    /// and drop namespaces left without paths.
    pub fn dedup_paths(&mut self) {
        for paths in self.rules.values_mut() {
            let mut unique: Vec<String> = Vec::with_capacity(paths.len());
            for path in paths.drain(..) {
                if !unique.contains(&path) {
                    unique.push(path);
                }
            }
            *paths = unique;
        }
        self.rules.retain(|_, paths| !paths.is_empty());
    }

    /// Most specific namespaces first: keys in descending byte order, so
    /// `App\Sub\` is tried before `App\`.
    pub fn sort_namespaces_desc(&mut self) {
        self.rules.sort_by(|a, _, b, _| b.cmp(a));
    }

    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<&[String]> {
        self.rules.get(namespace).map(Vec::as_slice)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.rules.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for RuleSet {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        let mut rule_set = Self::new();
        for (namespace, paths) in iter {
            for path in paths {
                rule_set.push(&namespace, path);
            }
        }
        rule_set
    }
}
