use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use wpload_project::Package;

/// Order packages so that the ones depended upon come before their
/// dependents. Returns indices into `packages`.
///
/// Each package gets an importance weight from the packages using it
/// (through `require` or `require-dev`); heavily used packages get the
/// lowest weight. Equal weights fall back to a natural, case-insensitive
/// name order.
#[must_use]
pub fn priority_order(packages: &[&Package]) -> Vec<usize> {
    let mut usage: HashMap<String, Vec<String>> = HashMap::new();
    for package in packages {
        let user = package.name.to_lowercase();
        for target in package.require.keys().chain(package.require_dev.keys()) {
            usage
                .entry(target.to_lowercase())
                .or_default()
                .push(user.clone());
        }
    }

    let mut weigher = Weigher {
        usage: &usage,
        computed: HashMap::new(),
        computing: HashSet::new(),
    };

    let mut weighted: Vec<(i64, &str, usize)> = packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let weight = weigher.importance(&package.name.to_lowercase());
            (weight, package.name.as_str(), index)
        })
        .collect();

    weighted.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| natural_cmp(a.1, b.1)));
    weighted.into_iter().map(|(_, _, index)| index).collect()
}

struct Weigher<'a> {
    usage: &'a HashMap<String, Vec<String>>,
    computed: HashMap<String, i64>,
    computing: HashSet<String>,
}

impl Weigher<'_> {
    fn importance(&mut self, name: &str) -> i64 {
        if let Some(weight) = self.computed.get(name) {
            return *weight;
        }
        // cycle
        if !self.computing.insert(name.to_string()) {
            return 0;
        }

        let mut weight: i64 = 0;
        if let Some(users) = self.usage.get(name) {
            for user in users {
                let importance = self.importance(user);
                weight = weight.saturating_sub(1_i64.saturating_sub(importance));
            }
        }

        self.computing.remove(name);
        self.computed.insert(name.to_string(), weight);
        weight
    }
}

/// Case-insensitive comparison that orders digit runs by numeric value.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_num: String = std::iter::from_fn(|| left.next_if(char::is_ascii_digit)).collect();
                let r_num: String = std::iter::from_fn(|| right.next_if(char::is_ascii_digit)).collect();
                let l_trim = l_num.trim_start_matches('0');
                let r_trim = r_num.trim_start_matches('0');
                let ordering = l_trim
                    .len()
                    .cmp(&r_trim.len())
                    .then_with(|| l_trim.cmp(r_trim));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                if l != r {
                    return l.cmp(&r);
                }
                left.next();
                right.next();
            }
        }
    }
}
