//! Per-kind entity tables
//!
//! A table tracks every entity of one kind in one of three states:
//! never requested (absent), requested but not yet arrived (pending),
//! or resolved. Pending slots keep a fetch from being scheduled twice.

use std::collections::HashMap;

use crate::client::models::{
    Ability, AbilityGroup, Artist, Champion, Class, Equip, Id, Race, Relic, Spell,
};

/// Types stored in a rune database table
pub trait Record {
    fn id(&self) -> Id;

    /// Fold a newer copy of the same entity into this one.
    ///
    /// Fields the newer copy carries win; anything it leaves out keeps
    /// its current value. Folding the same copy in twice is a no-op,
    /// and copies with disjoint fields fold to the same record in
    /// either order. The default suits wire records that always travel
    /// with every field present.
    fn merge(&mut self, newer: Self)
    where
        Self: Sized,
    {
        *self = newer;
    }
}

impl Record for Champion {
    fn id(&self) -> Id {
        self.core.id
    }
}

impl Record for Spell {
    fn id(&self) -> Id {
        self.core.id
    }
}

impl Record for Equip {
    fn id(&self) -> Id {
        self.core.id
    }
}

impl Record for Relic {
    fn id(&self) -> Id {
        self.core.id
    }
}

impl Record for Ability {
    fn id(&self) -> Id {
        self.id
    }
}

impl Record for AbilityGroup {
    fn id(&self) -> Id {
        self.id
    }
}

impl Record for Race {
    fn id(&self) -> Id {
        self.id
    }
}

impl Record for Class {
    fn id(&self) -> Id {
        self.id
    }
}

impl Record for Artist {
    fn id(&self) -> Id {
        self.id
    }
}

/// A table slot: fetch in flight or entity resolved
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Pending,
    Resolved(T),
}

/// Id-keyed entity storage for a single kind
#[derive(Debug)]
pub struct Table<T> {
    entries: HashMap<Id, Slot<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T: Record> Table<T> {
    /// Get a resolved entity. Pending and unknown ids answer `None`.
    pub fn get(&self, id: Id) -> Option<&T> {
        match self.entries.get(&id) {
            Some(Slot::Resolved(entity)) => Some(entity),
            _ => None,
        }
    }

    /// Whether the id is known at all, pending or resolved.
    pub fn contains(&self, id: Id) -> bool {
        self.entries.contains_key(&id)
    }

    /// Whether the id has a fetch in flight.
    pub fn is_pending(&self, id: Id) -> bool {
        matches!(self.entries.get(&id), Some(Slot::Pending))
    }

    /// Mark an id as pending. Resolved entries are left untouched.
    pub fn mark_pending(&mut self, id: Id) {
        self.entries.entry(id).or_insert(Slot::Pending);
    }

    /// Store a batch of records.
    ///
    /// A record for an already resolved id folds into the existing
    /// entry via [`Record::merge`]; pending and unknown ids resolve
    /// outright.
    pub fn apply(&mut self, records: Vec<T>) {
        for record in records {
            let slot = self.entries.entry(record.id()).or_insert(Slot::Pending);
            match slot {
                Slot::Resolved(existing) => existing.merge(record),
                Slot::Pending => *slot = Slot::Resolved(record),
            }
        }
    }

    /// Number of resolved entities.
    pub fn resolved_count(&self) -> usize {
        self.entries
            .values()
            .filter(|slot| matches!(slot, Slot::Resolved(_)))
            .count()
    }

    /// Number of pending slots.
    pub fn pending_count(&self) -> usize {
        self.entries
            .values()
            .filter(|slot| matches!(slot, Slot::Pending))
            .count()
    }
}
