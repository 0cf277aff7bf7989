//! The ordered collection of every generator a session owns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{round2, GeneratorInstance, InstanceId};
use crate::catalog::GeneratorKindId;
use crate::config::ElapsedRounding;

/// Owned generators in purchase order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorRegistry {
    instances: Vec<GeneratorInstance>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new instance of `kind` created at `now`.
    pub fn create_instance(&mut self, kind: GeneratorKindId, now: DateTime<Utc>) -> InstanceId {
        let instance = GeneratorInstance::new(kind, now);
        let id = instance.id;
        self.instances.push(instance);
        id
    }

    /// All instances, oldest first.
    pub fn instances(&self) -> &[GeneratorInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Get an instance by ID.
    pub fn get(&self, id: InstanceId) -> Option<&GeneratorInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Number of owned instances of `kind`.
    pub fn count_of(&self, kind: GeneratorKindId) -> usize {
        self.instances.iter().filter(|i| i.kind == kind).count()
    }

    /// Owned counts per kind, only for kinds owned at least once.
    pub fn counts(&self) -> BTreeMap<GeneratorKindId, usize> {
        let mut counts = BTreeMap::new();
        for instance in &self.instances {
            *counts.entry(instance.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Combined cookies per second of every owned instance.
    pub fn total_rate(&self) -> f64 {
        self.instances.iter().map(GeneratorInstance::rate).sum()
    }

    /// Cookies per second contributed by `kind` alone.
    pub fn rate_of(&self, kind: GeneratorKindId) -> f64 {
        self.count_of(kind) as f64 * kind.kind().rate_per_second
    }

    /// Lifetime cookies produced by every instance as of `now`, rounded to cents.
    pub fn total_lifetime_output(&self, now: DateTime<Utc>, rounding: ElapsedRounding) -> f64 {
        let total: f64 = self
            .instances
            .iter()
            .map(|i| i.output(now, rounding))
            .sum();
        round2(total)
    }
}
