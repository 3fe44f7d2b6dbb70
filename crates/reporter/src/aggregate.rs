//! Fold of the enrichment stream into the grouped report structure.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::model::{AccountRef, Enrichment, EntitySignature, GroupKey};

/// Two-level grouping of enriched records.
///
/// Both levels use IndexMap so that event arrival order and signature
/// creation order survive into rendering; rendering determinism depends
/// on that, not on any lexical ordering of the keys.
#[derive(Debug, Default)]
pub struct AggregatedReport {
    groups: IndexMap<GroupKey, IndexMap<EntitySignature, Vec<AccountRef>>>,
}

impl AggregatedReport {
    /// Fold a whole enrichment stream into a report.
    pub fn from_enrichments(
        enrichments: impl IntoIterator<Item = Enrichment>,
        names: &HashMap<String, String>,
        console_base: &str,
    ) -> Self {
        let mut report = Self::default();
        for enrichment in enrichments {
            report.insert(enrichment, names, console_base);
        }
        report
    }

    /// Fold one enriched record into the grouping.
    pub fn insert(
        &mut self,
        enrichment: Enrichment,
        names: &HashMap<String, String>,
        console_base: &str,
    ) {
        let account = AccountRef::resolve(&enrichment.account_id, names, console_base);

        self.groups
            .entry(enrichment.key)
            .or_default()
            .entry(enrichment.signature)
            .or_default()
            .push(account);
    }

    /// Visit groups in event arrival order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&GroupKey, &IndexMap<EntitySignature, Vec<AccountRef>>)> {
        self.groups.iter()
    }

    /// Number of event sections.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the report has no sections at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
