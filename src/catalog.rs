use crate::Mask;
use ahash::AHashMap as HashMap;
use anyhow::{anyhow, Result};
use std::{fmt, sync::OnceLock};

/// Broad class of a life-form, determines how many masks it declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternKind {
    /// Does not change between generations, declares a single mask.
    StillLife,
    /// Returns to its initial shape in place after `period` generations,
    /// declares one mask per phase.
    Oscillator { period: usize },
    /// Returns to its initial shape displaced, declares one mask per
    /// phase and heading.
    Spaceship,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::StillLife => write!(f, "still life"),
            PatternKind::Oscillator { period } => write!(f, "oscillator (period {period})"),
            PatternKind::Spaceship => write!(f, "spaceship"),
        }
    }
}

/// A named life-form and all the masks it can be recognized by.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: PatternKind,
    pub masks: Vec<Mask>,
}

/// Ordered collection of the life-forms counted at every generation.
///
/// Entries keep their insertion order, which is also the order of the rows
/// in every [`GenerationReport`](crate::GenerationReport).
#[derive(Clone, Debug, Default)]
pub struct PatternCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a life-form to the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken or `masks` is empty.
    pub fn push(&mut self, name: &str, kind: PatternKind, masks: Vec<Mask>) -> Result<()> {
        if masks.is_empty() {
            return Err(anyhow!("Pattern \"{}\" has no masks", name));
        }
        if self.index.contains_key(name) {
            return Err(anyhow!("Pattern \"{}\" is already in the catalog", name));
        }
        self.index.insert(name.to_owned(), self.entries.len());
        self.entries.push(CatalogEntry {
            name: name.to_owned(),
            kind,
            masks,
        });
        Ok(())
    }

    /// Returns the masks of the life-form called `name`, in declared order.
    pub fn masks_for(&self, name: &str) -> Option<&[Mask]> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].masks.as_slice())
    }

    pub fn entry(&self, name: &str) -> Option<&CatalogEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// All entries in declared order.
    pub fn all_entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The catalog of common still lifes, oscillators and spaceships.
    ///
    /// Built on first use and shared for the rest of the process.
    pub fn standard() -> &'static PatternCatalog {
        static STANDARD: OnceLock<PatternCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            let mut catalog = PatternCatalog::new();
            for (name, kind, masks) in STANDARD_PATTERNS {
                let masks = masks
                    .iter()
                    .map(|&rows| Mask::from_rows(rows))
                    .collect::<Result<Vec<_>>>()
                    .expect("A bug in the standard catalog masks");
                catalog
                    .push(name, *kind, masks)
                    .expect("A bug in the standard catalog names");
            }
            catalog
        })
    }
}

type MaskRows = &'static [&'static str];

#[rustfmt::skip]
const STANDARD_PATTERNS: &[(&str, PatternKind, &[MaskRows])] = &[
    ("Block", PatternKind::StillLife, &[
        &["....",
          ".**.",
          ".**.",
          "...."],
    ]),
    ("Beehive", PatternKind::StillLife, &[
        &["......",
          "..**..",
          ".*..*.",
          "..**..",
          "......"],
    ]),
    ("Loaf", PatternKind::StillLife, &[
        &["......",
          "..**..",
          ".*..*.",
          "..*.*.",
          "...*..",
          "......"],
    ]),
    ("Boat", PatternKind::StillLife, &[
        &[".....",
          ".**..",
          ".*.*.",
          "..*..",
          "....."],
    ]),
    ("Tub", PatternKind::StillLife, &[
        &[".....",
          "..*..",
          ".*.*.",
          "..*..",
          "....."],
    ]),
    ("Blinker", PatternKind::Oscillator { period: 2 }, &[
        &[".....",
          "..*..",
          "..*..",
          "..*..",
          "....."],
        &[".....",
          ".....",
          ".***.",
          ".....",
          "....."],
    ]),
    ("Toad", PatternKind::Oscillator { period: 2 }, &[
        &["......",
          "......",
          "..***.",
          ".***..",
          "......",
          "......"],
        &["......",
          "...*..",
          ".*..*.",
          ".*..*.",
          "..*...",
          "......"],
    ]),
    ("Beacon", PatternKind::Oscillator { period: 2 }, &[
        &["......",
          ".**...",
          ".**...",
          "...**.",
          "...**.",
          "......"],
        &["......",
          ".**...",
          ".*....",
          "....*.",
          "...**.",
          "......"],
    ]),
    ("Glider", PatternKind::Spaceship, &[
        &[".....",
          ".*...",
          "..**.",
          ".**..",
          "....."],
        &[".....",
          "..*..",
          "...*.",
          ".***.",
          "....."],
        &[".....",
          "...*.",
          ".*.*.",
          "..**.",
          "....."],
        &[".....",
          ".*.*.",
          "..**.",
          "..*..",
          "....."],
    ]),
    ("Lightweight Spaceship", PatternKind::Spaceship, &[
        &[".......",
          ".*..*..",
          ".....*.",
          ".*...*.",
          "..****.",
          ".......",
          "......."],
        &[".......",
          ".......",
          "...**..",
          ".**.**.",
          ".****..",
          "..**...",
          "......."],
        &[".......",
          ".......",
          "..****.",
          ".*...*.",
          ".....*.",
          ".*..*..",
          "......."],
        &[".......",
          "..**...",
          ".****..",
          ".**.**.",
          "...**..",
          ".......",
          "......."],
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn test_standard_order() {
        let names: Vec<_> = PatternCatalog::standard()
            .all_entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Block",
                "Beehive",
                "Loaf",
                "Boat",
                "Tub",
                "Blinker",
                "Toad",
                "Beacon",
                "Glider",
                "Lightweight Spaceship"
            ]
        );
    }

    #[test]
    fn test_mask_counts_follow_kind() {
        for entry in PatternCatalog::standard().all_entries() {
            match entry.kind {
                PatternKind::StillLife => assert_eq!(entry.masks.len(), 1, "{}", entry.name),
                PatternKind::Oscillator { period } => {
                    assert_eq!(entry.masks.len(), period, "{}", entry.name)
                }
                PatternKind::Spaceship => assert_eq!(entry.masks.len(), 4, "{}", entry.name),
            }
        }
    }

    #[test]
    fn test_masks_have_dead_border() {
        for entry in PatternCatalog::standard().all_entries() {
            for mask in &entry.masks {
                let (w, h) = (mask.width(), mask.height());
                let border_alive = (0..w)
                    .flat_map(|x| [(x, 0), (x, h - 1)])
                    .chain((0..h).flat_map(|y| [(0, y), (w - 1, y)]))
                    .any(|(x, y)| mask.row(y)[x].is_alive());
                assert!(!border_alive, "{} has alive border:\n{}", entry.name, mask);
            }
        }
    }

    #[test]
    fn test_still_lifes_are_still() {
        let catalog = PatternCatalog::standard();
        for entry in catalog.all_entries() {
            if entry.kind != PatternKind::StillLife {
                continue;
            }
            let mask = &entry.masks[0];
            let mut grid = Grid::new(mask.width() + 4, mask.height() + 4);
            grid.stamp(mask, 2, 2).unwrap();
            assert_eq!(grid.step(), grid, "{} is not still", entry.name);
        }
    }

    #[test]
    fn test_oscillator_phases_cycle() {
        let catalog = PatternCatalog::standard();
        for entry in catalog.all_entries() {
            let PatternKind::Oscillator { period } = entry.kind else {
                continue;
            };
            for (i, mask) in entry.masks.iter().enumerate() {
                let mut grid = Grid::new(mask.width() + 4, mask.height() + 4);
                grid.stamp(mask, 2, 2).unwrap();
                let mut expected = Grid::new(mask.width() + 4, mask.height() + 4);
                expected.stamp(&entry.masks[(i + 1) % period], 2, 2).unwrap();
                assert_eq!(grid.step(), expected, "{} phase {}", entry.name, i);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = PatternCatalog::standard();
        assert_eq!(catalog.masks_for("Glider").map(|m| m.len()), Some(4));
        assert_eq!(catalog.masks_for("Block").map(|m| m.len()), Some(1));
        assert!(catalog.masks_for("Gosper glider gun").is_none());
        assert_eq!(
            catalog.entry("Toad").map(|e| e.kind),
            Some(PatternKind::Oscillator { period: 2 })
        );
    }

    #[test]
    fn test_push_rejects_duplicates() {
        let block = Mask::from_rows(&["....", ".**.", ".**.", "...."]).unwrap();
        let mut catalog = PatternCatalog::new();
        catalog
            .push("Block", PatternKind::StillLife, vec![block.clone()])
            .unwrap();
        assert!(catalog
            .push("Block", PatternKind::StillLife, vec![block])
            .is_err());
        assert!(catalog.push("Nothing", PatternKind::StillLife, vec![]).is_err());
        assert_eq!(catalog.len(), 1);
    }
}
