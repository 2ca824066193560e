//! Armour catalogs
//!
//! One ordered list of pieces per slot. The built-in catalog is compiled in;
//! `Catalog::new` exists for callers (tests, benches) that need other data.

use crate::types::{Item, Resistances, Slot};

/// Main data holder for set generation
#[derive(Debug, Clone)]
pub struct Catalog {
    pub head: Vec<Item>,
    pub torso: Vec<Item>,
    pub arms: Vec<Item>,
    pub legs: Vec<Item>,
}

/// (name, physical, fire, bleed, poison, plague)
type Row = (&'static str, u32, u32, u32, u32, u32);

const HEAD: &[Row] = &[
    ("Gold Mask", 2, 8, 16, 16, 16),
    ("Three-Conered Hat", 10, 5, 6, 6, 24),
    ("Imperial Spy Hood", 12, 10, 8, 16, 0),
    ("Assassin's Mask", 10, 7, 6, 24, 0),
];

const TORSO: &[Row] = &[
    ("Old Ragged Robes", 26, 13, 15, 15, 62),
    ("Black Leather Garb", 25, 17, 15, 62, 0),
    ("Imperial Spy Clothes", 26, 18, 24, 46, 0),
];

const ARMS: &[Row] = &[
    ("Old Ragged Gloves", 16, 8, 9, 9, 37),
    ("Black Gloves", 15, 10, 9, 37, 0),
    ("Imperial Spy Gloves", 15, 14, 14, 32, 0),
];

const LEGS: &[Row] = &[
    ("Old Ragged Boots", 16, 8, 9, 9, 37),
    ("Black Boots", 15, 10, 9, 37, 0),
    ("Imperial Spy Leggings", 15, 14, 14, 32, 0),
];

fn items(rows: &[Row]) -> Vec<Item> {
    rows.iter()
        .map(|&(name, physical, fire, bleed, poison, plague)| {
            Item::new(name, Resistances::new(physical, fire, bleed, poison, plague))
        })
        .collect()
}

impl Catalog {
    pub fn new(head: Vec<Item>, torso: Vec<Item>, arms: Vec<Item>, legs: Vec<Item>) -> Self {
        Self { head, torso, arms, legs }
    }

    /// The compiled-in armour catalog
    pub fn builtin() -> Self {
        let catalog = Self::new(items(HEAD), items(TORSO), items(ARMS), items(LEGS));

        tracing::debug!(
            "Built-in catalog: head={} torso={} arms={} legs={}",
            catalog.head.len(),
            catalog.torso.len(),
            catalog.arms.len(),
            catalog.legs.len(),
        );

        catalog
    }

    pub fn items(&self, slot: Slot) -> &[Item] {
        match slot {
            Slot::Head => &self.head,
            Slot::Torso => &self.torso,
            Slot::Arms => &self.arms,
            Slot::Legs => &self.legs,
        }
    }
}
