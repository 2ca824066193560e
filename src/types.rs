//! Armour value objects
//!
//! `Resistances` is the shared attribute bundle embedded by value in both
//! `Item` (a single piece) and `Candidate` (a full four-piece set).

use std::fmt;
use std::ops::Add;

/// Five resistance attributes of a piece or a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Resistances {
    pub physical: u32,
    pub fire: u32,
    pub bleed: u32,
    pub poison: u32,
    pub plague: u32,
}

impl Resistances {
    pub const fn new(physical: u32, fire: u32, bleed: u32, poison: u32, plague: u32) -> Self {
        Self { physical, fire, bleed, poison, plague }
    }

    /// Sum of all five attributes
    pub fn total(&self) -> u32 {
        self.physical + self.fire + self.bleed + self.poison + self.plague
    }
}

impl Add for Resistances {
    type Output = Resistances;

    fn add(self, other: Resistances) -> Resistances {
        Resistances {
            physical: self.physical + other.physical,
            fire: self.fire + other.fire,
            bleed: self.bleed + other.bleed,
            poison: self.poison + other.poison,
            plague: self.plague + other.plague,
        }
    }
}

/// Equipment slot, in set iteration order (head outermost)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Head,
    Torso,
    Arms,
    Legs,
}

impl Slot {
    pub const ALL: [Slot; 4] = [Slot::Head, Slot::Torso, Slot::Arms, Slot::Legs];

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Head => "head",
            Slot::Torso => "torso",
            Slot::Arms => "arms",
            Slot::Legs => "legs",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single armour piece
///
/// `total` is fixed at construction; fields are private so it cannot drift
/// from the resistances it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    resistances: Resistances,
    total: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, resistances: Resistances) -> Self {
        let total = resistances.total();
        Self { name: name.into(), resistances, total }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resistances(&self) -> &Resistances {
        &self.resistances
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

/// One full armour set: a piece from each slot plus aggregated resistances
///
/// Built in two phases. Construction sums the parts; `weighted_total` stays
/// `None` until the scorer has seen every candidate (it depends on extrema
/// across the whole set).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    name: String,
    resistances: Resistances,
    total: u32,
    parts: [Item; 4],
    weighted_total: Option<f64>,
}

impl Candidate {
    /// Separator between part names in the composite set name
    pub const NAME_SEPARATOR: &'static str = " + ";

    /// Build a set from its four parts, ordered head, torso, arms, legs
    pub fn from_parts(parts: [Item; 4]) -> Self {
        let name = parts
            .iter()
            .map(Item::name)
            .collect::<Vec<_>>()
            .join(Self::NAME_SEPARATOR);

        let resistances = parts
            .iter()
            .map(|part| *part.resistances())
            .fold(Resistances::default(), |acc, r| acc + r);

        Self {
            name,
            total: resistances.total(),
            resistances,
            parts,
            weighted_total: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resistances(&self) -> &Resistances {
        &self.resistances
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn parts(&self) -> &[Item; 4] {
        &self.parts
    }

    pub fn part(&self, slot: Slot) -> &Item {
        &self.parts[slot as usize]
    }

    /// Composite score, `None` until the scoring pass has run
    pub fn weighted_total(&self) -> Option<f64> {
        self.weighted_total
    }

    pub(crate) fn set_weighted_total(&mut self, score: f64) {
        self.weighted_total = Some(score);
    }
}
