//! Rune card display model
//!
//! A single `RuneSheet` covers all four rune kinds. Everything that
//! differs between kinds lives in a per-kind policy record (back label,
//! idol marker, nora override, fluff source, stat rows, back-face
//! content) selected from a small dispatch table.

use std::fmt;

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::client::models::{
    Champion, Equip, Faction, Id, Rarity, Relic, RuneCore, Size, Spell,
};
use crate::db::RuneDb;
use crate::output::{label, text};

/// Horizontal rule under a card face header.
const FACE_RULE: &str = "════════════════════════════════════════════════════\n";

/// Which rune kind a sheet shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuneKind {
    Champion,
    Spell,
    Equip,
    Relic,
}

impl fmt::Display for RuneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuneKind::Champion => "Champion",
            RuneKind::Spell => "Spell",
            RuneKind::Equip => "Equipment",
            RuneKind::Relic => "Relic",
        };
        write!(f, "{}", name)
    }
}

/// One ability entry on a champion card back.
#[derive(Debug, Clone, Serialize)]
pub struct AbilityChip {
    /// Ability name
    pub name: String,

    /// Rank level (0 when unranked)
    pub level: u8,

    /// Whether the ability must be activated
    pub active: bool,
}

impl AbilityChip {
    fn from_id(id: Id, db: &RuneDb) -> Self {
        let ability = db.ability_unchecked(id);
        Self {
            name: ability.name.clone(),
            level: ability.level,
            active: ability.activation_type != 0,
        }
    }

    /// Chip text, with the rank level in parentheses when present.
    pub fn label(&self) -> String {
        if self.level > 0 {
            format!("{} ({})", self.name, self.level)
        } else {
            self.name.clone()
        }
    }
}

/// Champion-only card data.
#[derive(Debug, Clone, Serialize)]
pub struct ChampionData {
    pub damage: u16,
    pub speed: u8,
    pub min_rng: u8,
    pub max_rng: u8,
    pub defense: u8,
    pub hit_points: u16,
    pub size: Size,

    /// Resolved race names
    pub races: Vec<String>,

    /// Resolved class names
    pub classes: Vec<String>,

    /// Effective cost after the rank choices are applied
    pub nora: i32,

    /// Level implied by the rank choices (1 when both are defaults)
    pub level: u8,

    /// Selected rank choices followed by the starting abilities
    pub abilities: Vec<AbilityChip>,
}

/// Kind-specific card payload.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum KindData {
    Champion(ChampionData),
    Spell { flavor_text: String, cooldown: u8 },
    Equip { flavor_text: String },
    Relic { flavor_text: String, defense: u16, hit_points: u16, size: Size },
}

/// Per-kind rendering policy. The functions read kind data back out of
/// the sheet they are handed; a sheet always pairs its tag with the
/// matching payload, so the fallback arms never fire in practice.
struct KindPolicy {
    back_label: &'static str,
    has_idol: bool,
    nora: fn(&RuneSheet) -> i32,
    fluff: fn(&RuneSheet) -> &str,
    stats: fn(&RuneSheet) -> Vec<(&'static str, String)>,
    back_center: fn(&RuneSheet) -> String,
    back_props: fn(&RuneSheet) -> Vec<(String, String)>,
}

static CHAMPION_POLICY: KindPolicy = KindPolicy {
    back_label: "Champion",
    has_idol: true,
    nora: champion_nora,
    fluff: rules_fluff,
    stats: champion_stats,
    back_center: champion_center,
    back_props: champion_props,
};

static SPELL_POLICY: KindPolicy = KindPolicy {
    back_label: "Spell",
    has_idol: false,
    nora: base_nora,
    fluff: flavor_fluff,
    stats: no_stats,
    back_center: rules_center,
    back_props: base_props,
};

static EQUIP_POLICY: KindPolicy = KindPolicy {
    back_label: "Equipment",
    has_idol: false,
    nora: base_nora,
    fluff: flavor_fluff,
    stats: no_stats,
    back_center: rules_center,
    back_props: base_props,
};

static RELIC_POLICY: KindPolicy = KindPolicy {
    back_label: "Relic",
    has_idol: true,
    nora: base_nora,
    fluff: flavor_fluff,
    stats: relic_stats,
    back_center: rules_center,
    back_props: relic_props,
};

fn base_nora(sheet: &RuneSheet) -> i32 {
    i32::from(sheet.nora_cost)
}

fn champion_nora(sheet: &RuneSheet) -> i32 {
    match &sheet.data {
        KindData::Champion(champ) => champ.nora,
        _ => base_nora(sheet),
    }
}

fn rules_fluff(sheet: &RuneSheet) -> &str {
    &sheet.description
}

fn flavor_fluff(sheet: &RuneSheet) -> &str {
    match &sheet.data {
        KindData::Spell { flavor_text, .. }
        | KindData::Equip { flavor_text }
        | KindData::Relic { flavor_text, .. } => flavor_text,
        KindData::Champion(_) => "",
    }
}

fn no_stats(_sheet: &RuneSheet) -> Vec<(&'static str, String)> {
    Vec::new()
}

fn champion_stats(sheet: &RuneSheet) -> Vec<(&'static str, String)> {
    let KindData::Champion(champ) = &sheet.data else {
        return Vec::new();
    };
    vec![
        ("DMG", champ.damage.to_string()),
        ("SPD", champ.speed.to_string()),
        ("RNG", format!("{} - {}", champ.min_rng, champ.max_rng)),
        ("DEF", champ.defense.to_string()),
        ("HP", champ.hit_points.to_string()),
    ]
}

fn relic_stats(sheet: &RuneSheet) -> Vec<(&'static str, String)> {
    let KindData::Relic { defense, hit_points, .. } = &sheet.data else {
        return Vec::new();
    };
    vec![("DEF", defense.to_string()), ("HP", hit_points.to_string())]
}

fn rules_center(sheet: &RuneSheet) -> String {
    text::render(&sheet.description)
}

fn champion_center(sheet: &RuneSheet) -> String {
    let KindData::Champion(champ) = &sheet.data else {
        return String::new();
    };
    let mut out = String::new();
    for chip in &champ.abilities {
        if chip.active {
            out.push_str(&format!("  {}\n", chip.label().bold()));
        } else {
            out.push_str(&format!("  {}\n", chip.label()));
        }
    }
    out.push_str(&format!("  Level {}\n", champ.level));
    out
}

fn base_props(sheet: &RuneSheet) -> Vec<(String, String)> {
    vec![("Deck Limit".to_string(), sheet.deck_limit.to_string())]
}

fn champion_props(sheet: &RuneSheet) -> Vec<(String, String)> {
    let mut props = base_props(sheet);
    if let KindData::Champion(champ) = &sheet.data {
        props.push((
            counted_label("Race", "Races", champ.races.len()),
            champ.races.join(", "),
        ));
        props.push((
            counted_label("Class", "Classes", champ.classes.len()),
            champ.classes.join(", "),
        ));
        props.push(("Size".to_string(), champ.size.to_string()));
    }
    props
}

fn relic_props(sheet: &RuneSheet) -> Vec<(String, String)> {
    let mut props = base_props(sheet);
    if let KindData::Relic { size, .. } = &sheet.data {
        props.push(("Size".to_string(), size.to_string()));
    }
    props
}

/// "Race" for a single value, "Races" otherwise.
fn counted_label(one: &str, many: &str, count: usize) -> String {
    if count == 1 {
        one.to_string()
    } else {
        many.to_string()
    }
}

/// Snapshot of one rune with its references resolved, ready to render.
///
/// Built from a resolved cache entry; the unchecked lookups the
/// constructors perform rely on the envelope having bundled every
/// referenced record alongside the rune itself.
#[derive(Debug, Clone, Serialize)]
pub struct RuneSheet {
    pub kind: RuneKind,
    pub id: Id,
    pub name: String,

    /// Rules text, with game-text markup
    pub description: String,

    pub rarity: Rarity,

    /// Printed cost, before any rank adjustment
    pub nora_cost: u16,

    pub deck_limit: u8,
    pub factions: Vec<Faction>,

    /// Resolved artist name
    pub artist: String,

    /// Resolved expansion name
    pub expansion: String,

    #[serde(flatten)]
    pub data: KindData,
}

impl RuneSheet {
    /// Build a champion sheet with the given rank choices applied.
    ///
    /// `first` and `second` are ability ids drawn from the champion's two
    /// ability sets; pass the defaults for the stock card. The effective
    /// nora cost swaps the default choices' adjustments for the selected
    /// ones, and the level indicator follows the deepest changed choice.
    pub fn champion(champ: &Champion, first: Id, second: Id, db: &RuneDb) -> Self {
        let adjustment = |id: Id| i32::from(db.ability_unchecked(id).nora_cost);
        let nora = i32::from(champ.core.nora_cost)
            - adjustment(champ.defaults[0])
            - adjustment(champ.defaults[1])
            + adjustment(first)
            + adjustment(second);
        let level = if second != champ.defaults[1] {
            3
        } else if first != champ.defaults[0] {
            2
        } else {
            1
        };
        let abilities = [first, second]
            .into_iter()
            .chain(champ.starting_abilities.iter().copied())
            .map(|id| AbilityChip::from_id(id, db))
            .collect();

        Self::assemble(
            RuneKind::Champion,
            &champ.core,
            &champ.factions,
            champ.artist,
            champ.expansion,
            db,
            KindData::Champion(ChampionData {
                damage: champ.damage,
                speed: champ.speed,
                min_rng: champ.min_rng,
                max_rng: champ.max_rng,
                defense: champ.defense,
                hit_points: champ.hit_points,
                size: champ.size,
                races: db.races(champ),
                classes: db.classes(champ),
                nora,
                level,
                abilities,
            }),
        )
    }

    pub fn spell(spell: &Spell, db: &RuneDb) -> Self {
        Self::assemble(
            RuneKind::Spell,
            &spell.core,
            &spell.factions,
            spell.artist,
            spell.expansion,
            db,
            KindData::Spell {
                flavor_text: spell.flavor_text.clone(),
                cooldown: spell.cooldown,
            },
        )
    }

    pub fn equip(equip: &Equip, db: &RuneDb) -> Self {
        Self::assemble(
            RuneKind::Equip,
            &equip.core,
            &equip.factions,
            equip.artist,
            equip.expansion,
            db,
            KindData::Equip {
                flavor_text: equip.flavor_text.clone(),
            },
        )
    }

    pub fn relic(relic: &Relic, db: &RuneDb) -> Self {
        Self::assemble(
            RuneKind::Relic,
            &relic.core,
            &relic.factions,
            relic.artist,
            relic.expansion,
            db,
            KindData::Relic {
                flavor_text: relic.flavor_text.clone(),
                defense: relic.defense,
                hit_points: relic.hit_points,
                size: relic.size,
            },
        )
    }

    fn assemble(
        kind: RuneKind,
        core: &RuneCore,
        factions: &[Faction],
        artist: Id,
        expansion: Id,
        db: &RuneDb,
        data: KindData,
    ) -> Self {
        Self {
            kind,
            id: core.id,
            name: core.name.clone(),
            description: core.description.clone(),
            rarity: core.rarity,
            nora_cost: core.nora_cost,
            deck_limit: core.deck_limit,
            factions: factions.to_vec(),
            artist: db.artist_unchecked(artist).name.clone(),
            expansion: db.expansion_unchecked(expansion).name.clone(),
            data,
        }
    }

    fn policy(&self) -> &'static KindPolicy {
        match self.kind {
            RuneKind::Champion => &CHAMPION_POLICY,
            RuneKind::Spell => &SPELL_POLICY,
            RuneKind::Equip => &EQUIP_POLICY,
            RuneKind::Relic => &RELIC_POLICY,
        }
    }

    /// Effective nora cost shown on the card.
    pub fn nora(&self) -> i32 {
        (self.policy().nora)(self)
    }

    /// Render the face picked by `flip`.
    pub fn render(&self, flip: bool) -> String {
        if flip {
            self.render_back()
        } else {
            self.render_front()
        }
    }

    /// Front face: name, cost, rarity and faction chips, stat line.
    pub fn render_front(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} ({})\n",
            self.name.bold(),
            label::nora_label(self.nora())
        ));
        out.push_str(FACE_RULE);
        out.push_str(&format!(
            "{} | {}\n",
            label::rarity_label(self.rarity),
            self.faction_line()
        ));

        let stats = (self.policy().stats)(self);
        if !stats.is_empty() {
            let line = stats
                .iter()
                .map(|(name, value)| format!("{} {}", name, value))
                .collect::<Vec<_>>()
                .join("   ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Back face: kind label, fluff text, kind content, properties.
    pub fn render_back(&self) -> String {
        let policy = self.policy();
        let mut out = String::new();

        if policy.has_idol {
            out.push_str(&format!("{} {}\n", policy.back_label.bold(), "◆".dimmed()));
        } else {
            out.push_str(&format!("{}\n", policy.back_label.bold()));
        }
        out.push_str(FACE_RULE);

        let fluff = (policy.fluff)(self);
        if !fluff.is_empty() {
            out.push_str(&text::render(fluff));
            out.push_str("\n\n");
        }

        let center = (policy.back_center)(self);
        if !center.is_empty() {
            out.push_str(&center);
            if !center.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
        }

        for (name, value) in (policy.back_props)(self) {
            out.push_str(&format!("{}: {}\n", name, value));
        }
        out.push_str(&format!("Artist: {}\n", self.artist));
        out.push_str(&format!("Expansion: {}\n", self.expansion));
        out
    }

    fn faction_line(&self) -> String {
        self.factions
            .iter()
            .map(|faction| label::faction_label(*faction).to_string())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Rune summary row for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RuneRow {
    /// Rune ID
    #[tabled(rename = "ID")]
    pub id: String,

    /// Kind display name
    #[tabled(rename = "KIND")]
    pub kind: String,

    /// Rune name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Rarity label
    #[tabled(rename = "RARITY")]
    pub rarity: String,

    /// Effective nora cost
    #[tabled(rename = "NORA")]
    pub nora: String,

    /// Faction names, slash-separated
    #[tabled(rename = "FACTIONS")]
    pub factions: String,
}

impl From<&RuneSheet> for RuneRow {
    fn from(sheet: &RuneSheet) -> Self {
        Self {
            id: sheet.id.to_string(),
            kind: sheet.kind.to_string(),
            name: sheet.name.clone(),
            rarity: sheet.rarity.label().to_string(),
            nora: sheet.nora().to_string(),
            factions: sheet
                .factions
                .iter()
                .map(|faction| faction.name())
                .collect::<Vec<_>>()
                .join(" / "),
        }
    }
}
