//! Verse-range grouping and ordering.
//!
//! The chapter path buckets reconciled commentaries into verse-range groups so
//! that sibling commentaries (same upstream `group_id`, same range) render as
//! one unit. Grouping is generic over the member payload: the engine owns the
//! bucketing and ordering rules, the API layer owns what a member looks like.
//!
//! ```text
//! records ──▶ GroupFacts::of ──▶ accumulate by key ──▶ two-key sort
//!                                                          │
//!             union_verse_numbers ◀───────────────────────┘
//!                 (one batched text resolution for ALL groups)
//! ```
//!
//! ## Determinism
//!
//! Two commentaries sharing a grouping key land in one group regardless of
//! input order; within a group, member order is input order. Groups sort by
//! `(group_id ?? "default")` lexicographically, then by representative verse
//! number. Identical input therefore always yields identical output.

use crate::engine::range::parse_verse_range;
use crate::record::CommentaryRecord;
use std::collections::{BTreeSet, HashMap};

/// Grouping inputs derived from one commentary record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupFacts {
    /// Representative verse: the reference's start verse, or 0.
    pub verse_number: u32,
    /// Range token: the explicit token when present and non-empty, else the
    /// string form of `verse_number` (which covers the `"0"` default).
    pub verse_range: String,
    pub group_id: Option<String>,
}

impl GroupFacts {
    pub(crate) fn of(record: &CommentaryRecord) -> Self {
        let verse_number = record.reference.map(|r| r.start).unwrap_or(0);
        let verse_range = match record.explicit_verse_range.as_deref() {
            Some(token) if !token.trim().is_empty() => token.to_string(),
            _ => verse_number.to_string(),
        };
        GroupFacts { verse_number, verse_range, group_id: record.group_id.clone() }
    }

    fn key(&self) -> String {
        format!("{}-{}", self.group_id.as_deref().unwrap_or("default"), self.verse_range)
    }
}

/// One verse-range bucket holding its members in arrival order.
#[derive(Debug, Clone)]
pub(crate) struct Bucket<T> {
    pub verse_number: u32,
    pub verse_range: String,
    pub group_id: Option<String>,
    pub members: Vec<T>,
}

/// Accumulate `(facts, member)` pairs into sorted buckets.
pub(crate) fn group_members<T>(items: impl IntoIterator<Item = (GroupFacts, T)>) -> Vec<Bucket<T>> {
    let mut buckets: Vec<Bucket<T>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (facts, member) in items {
        match index.get(&facts.key()).copied() {
            Some(at) => buckets[at].members.push(member),
            None => {
                index.insert(facts.key(), buckets.len());
                buckets.push(Bucket {
                    verse_number: facts.verse_number,
                    verse_range: facts.verse_range,
                    group_id: facts.group_id,
                    members: vec![member],
                });
            }
        }
    }

    buckets.sort_by(|a, b| {
        let ga = a.group_id.as_deref().unwrap_or("default");
        let gb = b.group_id.as_deref().unwrap_or("default");
        ga.cmp(gb).then(a.verse_number.cmp(&b.verse_number))
    });

    if std::env::var_os("CATENA_DEBUG").is_some() {
        for bucket in &buckets {
            eprintln!(
                "[group] key={:?}-{} verse={} members={}",
                bucket.group_id,
                bucket.verse_range,
                bucket.verse_number,
                bucket.members.len()
            );
        }
    }

    buckets
}

/// The verses one bucket needs text for: its parsed range, seeded with the
/// representative verse when the token yields nothing.
pub(crate) fn bucket_verse_numbers<T>(bucket: &Bucket<T>) -> Vec<u32> {
    parse_verse_range(Some(&bucket.verse_range), bucket.verse_number)
}

/// Union of every bucket's verse numbers, deduplicated ascending.
///
/// This is the set handed to the verse-text collaborator in one batched call;
/// per-bucket lookups would fan out into one round-trip per group.
pub(crate) fn union_verse_numbers<T>(buckets: &[Bucket<T>]) -> Vec<u32> {
    let mut union = BTreeSet::new();
    for bucket in buckets {
        union.extend(bucket_verse_numbers(bucket));
    }
    union.into_iter().collect()
}
