//! The rune database
//!
//! `RuneDb` answers every read immediately from its tables. A miss
//! marks the id pending, schedules a fetch, and answers `None`; the
//! same id is never scheduled twice. Scheduled fetches are performed
//! by [`RuneDb::sync`], which applies each envelope as it arrives and
//! notifies the bound listener once per arrival.

use std::fmt;
use std::mem;

use crate::client::PoxBaseApi;
use crate::client::models::{
    Ability, AbilityGroup, Artist, Champion, Class, Envelope, Equip, Expansion, Id, Race, Relic,
    Spell,
};
use crate::db::table::Table;
use crate::error::Result;

/// Callback invoked after each applied envelope
pub type ChangeListener = Box<dyn Fn() + Send>;

/// A fetch the database has scheduled but not yet performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    Init,
    Champ(Id),
    Spell(Id),
    Equip(Id),
    Relic(Id),
    Ability(Id),
}

impl FetchRequest {
    /// Perform this fetch against a client.
    pub async fn perform(&self, client: &dyn PoxBaseApi) -> Result<Envelope> {
        match self {
            FetchRequest::Init => client.init().await,
            FetchRequest::Champ(id) => client.champ(*id).await,
            FetchRequest::Spell(id) => client.spell(*id).await,
            FetchRequest::Equip(id) => client.equip(*id).await,
            FetchRequest::Relic(id) => client.relic(*id).await,
            FetchRequest::Ability(id) => client.ability(*id).await,
        }
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchRequest::Init => write!(f, "init"),
            FetchRequest::Champ(id) => write!(f, "champ {id}"),
            FetchRequest::Spell(id) => write!(f, "spell {id}"),
            FetchRequest::Equip(id) => write!(f, "equip {id}"),
            FetchRequest::Relic(id) => write!(f, "relic {id}"),
            FetchRequest::Ability(id) => write!(f, "ability {id}"),
        }
    }
}

/// Outcome of one [`RuneDb::sync`] pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Envelopes fetched and applied
    pub applied: usize,

    /// Fetches that failed; their slots stay pending
    pub failed: usize,
}

/// Occupancy of a single entity table
#[derive(Debug)]
pub struct TableStats {
    pub kind: &'static str,
    pub resolved: usize,
    pub pending: usize,
}

/// Snapshot of database occupancy
#[derive(Debug)]
pub struct DbStats {
    pub ready: bool,
    pub expansions: usize,
    pub tables: Vec<TableStats>,
}

impl DbStats {
    /// Total resolved entities across all tables.
    pub fn resolved_total(&self) -> usize {
        self.tables.iter().map(|t| t.resolved).sum()
    }

    /// Total pending slots across all tables.
    pub fn pending_total(&self) -> usize {
        self.tables.iter().map(|t| t.pending).sum()
    }
}

/// In-memory entity cache over the PoxBase API
pub struct RuneDb {
    listener: Option<ChangeListener>,

    ready: bool,

    expansions: Vec<Expansion>,

    champions: Table<Champion>,

    spells: Table<Spell>,

    equips: Table<Equip>,

    relics: Table<Relic>,

    races: Table<Race>,

    classes: Table<Class>,

    abilities: Table<Ability>,

    ability_groups: Table<AbilityGroup>,

    artists: Table<Artist>,

    scheduled: Vec<FetchRequest>,
}

impl Default for RuneDb {
    fn default() -> Self {
        Self::new()
    }
}

impl RuneDb {
    /// Create an empty database with the init fetch already scheduled.
    ///
    /// The database is not ready until the first sync applies the init
    /// envelope.
    pub fn new() -> Self {
        RuneDb {
            listener: None,
            ready: false,
            expansions: Vec::new(),
            champions: Table::default(),
            spells: Table::default(),
            equips: Table::default(),
            relics: Table::default(),
            races: Table::default(),
            classes: Table::default(),
            abilities: Table::default(),
            ability_groups: Table::default(),
            artists: Table::default(),
            scheduled: vec![FetchRequest::Init],
        }
    }

    /// Get a champion, scheduling a fetch on first miss.
    pub fn champion(&mut self, id: Id) -> Option<&Champion> {
        if !self.champions.contains(id) {
            self.champions.mark_pending(id);
            self.schedule(FetchRequest::Champ(id));
        }
        self.champions.get(id)
    }

    /// Get a spell, scheduling a fetch on first miss.
    pub fn spell(&mut self, id: Id) -> Option<&Spell> {
        if !self.spells.contains(id) {
            self.spells.mark_pending(id);
            self.schedule(FetchRequest::Spell(id));
        }
        self.spells.get(id)
    }

    /// Get an equipment, scheduling a fetch on first miss.
    pub fn equip(&mut self, id: Id) -> Option<&Equip> {
        if !self.equips.contains(id) {
            self.equips.mark_pending(id);
            self.schedule(FetchRequest::Equip(id));
        }
        self.equips.get(id)
    }

    /// Get a relic, scheduling a fetch on first miss.
    pub fn relic(&mut self, id: Id) -> Option<&Relic> {
        if !self.relics.contains(id) {
            self.relics.mark_pending(id);
            self.schedule(FetchRequest::Relic(id));
        }
        self.relics.get(id)
    }

    /// Get an ability group, scheduling a fetch on first miss.
    pub fn ability_group(&mut self, id: Id) -> Option<&AbilityGroup> {
        if !self.ability_groups.contains(id) {
            self.ability_groups.mark_pending(id);
            self.schedule(FetchRequest::Ability(id));
        }
        self.ability_groups.get(id)
    }

    /// Resolve a champion's class names.
    ///
    /// Classes ride along in the champion's envelope, so they are
    /// present whenever the champion is.
    pub fn classes(&self, champion: &Champion) -> Vec<String> {
        champion
            .classes
            .iter()
            .map(|&id| self.class_unchecked(id).name.clone())
            .collect()
    }

    /// Resolve a champion's race names.
    pub fn races(&self, champion: &Champion) -> Vec<String> {
        champion
            .races
            .iter()
            .map(|&id| self.race_unchecked(id).name.clone())
            .collect()
    }

    /// Get an ability that is known to have arrived. Panics otherwise.
    pub fn ability_unchecked(&self, id: Id) -> &Ability {
        self.abilities
            .get(id)
            .unwrap_or_else(|| panic!("Ability {id} is not loaded"))
    }

    /// Get a race that is known to have arrived. Panics otherwise.
    pub fn race_unchecked(&self, id: Id) -> &Race {
        self.races
            .get(id)
            .unwrap_or_else(|| panic!("Race {id} is not loaded"))
    }

    /// Get a class that is known to have arrived. Panics otherwise.
    pub fn class_unchecked(&self, id: Id) -> &Class {
        self.classes
            .get(id)
            .unwrap_or_else(|| panic!("Class {id} is not loaded"))
    }

    /// Get an expansion by id. Panics when init has not seeded it.
    ///
    /// Expansion ids double as positions in the seeded list.
    pub fn expansion_unchecked(&self, id: Id) -> &Expansion {
        self.expansions
            .get(id as usize)
            .unwrap_or_else(|| panic!("Expansion {id} is not loaded"))
    }

    /// Get an artist that is known to have arrived. Panics otherwise.
    pub fn artist_unchecked(&self, id: Id) -> &Artist {
        self.artists
            .get(id)
            .unwrap_or_else(|| panic!("Artist {id} is not loaded"))
    }

    /// The expansion list seeded by init, in wire order.
    pub fn expansions(&self) -> &[Expansion] {
        &self.expansions
    }

    /// Whether the init envelope has arrived.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Bind the single change listener.
    ///
    /// # Panics
    /// Panics if a listener is already bound.
    pub fn bind(&mut self, listener: ChangeListener) {
        if self.listener.is_some() {
            panic!("RuneDb can be only bound to one listener");
        }

        self.listener = Some(listener);
    }

    /// Drop the bound listener. Later changes notify nobody.
    pub fn unbind(&mut self) {
        self.listener = None;
    }

    /// Store every entity list the envelope carries.
    ///
    /// An expansions list, even an empty one, marks the database ready.
    pub fn apply(&mut self, envelope: Envelope) {
        if let Some(expansions) = envelope.expansions {
            self.expansions = expansions;
            self.ready = true;
        }
        if let Some(champs) = envelope.champs {
            self.champions.apply(champs);
        }
        if let Some(spells) = envelope.spells {
            self.spells.apply(spells);
        }
        if let Some(equips) = envelope.equips {
            self.equips.apply(equips);
        }
        if let Some(relics) = envelope.relics {
            self.relics.apply(relics);
        }
        if let Some(abilities) = envelope.abilities {
            self.abilities.apply(abilities);
        }
        if let Some(ability_groups) = envelope.ability_groups {
            self.ability_groups.apply(ability_groups);
        }
        if let Some(races) = envelope.races {
            self.races.apply(races);
        }
        if let Some(classes) = envelope.classes {
            self.classes.apply(classes);
        }
        if let Some(artists) = envelope.artists {
            self.artists.apply(artists);
        }
    }

    /// Apply the outcome of a performed fetch.
    ///
    /// Success applies the envelope and notifies the listener. Failure
    /// only logs; the slot stays pending and nobody is notified.
    pub fn apply_fetched(&mut self, request: &FetchRequest, result: Result<Envelope>) {
        match result {
            Ok(envelope) => {
                self.apply(envelope);
                self.notify();
            }
            Err(e) => {
                log::warn!("Fetch for {request} failed: {e}");
            }
        }
    }

    /// Take the scheduled fetches, leaving the schedule empty.
    pub fn take_scheduled(&mut self) -> Vec<FetchRequest> {
        mem::take(&mut self.scheduled)
    }

    /// Perform every scheduled fetch until the schedule is empty.
    ///
    /// Fetches in a batch run concurrently; their envelopes are applied
    /// in schedule order.
    pub async fn sync(&mut self, client: &dyn PoxBaseApi) -> SyncReport {
        let mut report = SyncReport::default();

        loop {
            let batch = self.take_scheduled();
            if batch.is_empty() {
                break;
            }

            log::debug!("Syncing {} scheduled fetches", batch.len());

            let fetches = batch.iter().map(|request| request.perform(client));
            let results = futures::future::join_all(fetches).await;

            for (request, result) in batch.iter().zip(results) {
                if result.is_ok() {
                    report.applied += 1;
                } else {
                    report.failed += 1;
                }
                self.apply_fetched(request, result);
            }
        }

        report
    }

    /// Snapshot occupancy across all tables.
    pub fn stats(&self) -> DbStats {
        let table = |kind, resolved, pending| TableStats {
            kind,
            resolved,
            pending,
        };

        DbStats {
            ready: self.ready,
            expansions: self.expansions.len(),
            tables: vec![
                table("champions", self.champions.resolved_count(), self.champions.pending_count()),
                table("spells", self.spells.resolved_count(), self.spells.pending_count()),
                table("equipment", self.equips.resolved_count(), self.equips.pending_count()),
                table("relics", self.relics.resolved_count(), self.relics.pending_count()),
                table(
                    "ability groups",
                    self.ability_groups.resolved_count(),
                    self.ability_groups.pending_count(),
                ),
                table("abilities", self.abilities.resolved_count(), self.abilities.pending_count()),
                table("races", self.races.resolved_count(), self.races.pending_count()),
                table("classes", self.classes.resolved_count(), self.classes.pending_count()),
                table("artists", self.artists.resolved_count(), self.artists.pending_count()),
            ],
        }
    }

    fn schedule(&mut self, request: FetchRequest) {
        log::debug!("Scheduling fetch for {request}");
        self.scheduled.push(request);
    }

    fn notify(&self) {
        if let Some(listener) = &self.listener {
            listener();
        }
    }
}
