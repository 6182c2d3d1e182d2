//! The radar aggregate: partitions, placed entries and interaction state.
//!
//! Construction runs the whole layout in one pass:
//!
//! 1. rings and sectors are derived from the config,
//! 2. entries are sorted by sector then ring (stable) and numbered,
//! 3. a candidate grid is sampled over the disc,
//! 4. each entry takes a grid candidate from its (sector, ring) bucket, or a
//!    random point inside that region once the bucket runs dry.
//!
//! The result is a pure function of the config and the seed.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{EntryConfig, RadarConfig, StyleConfig};
use crate::error::{RadarError, Result};
use crate::events::{EventKind, Listeners, RadarEvent};
use crate::geometry::{to_cartesian, Point};
use crate::grid::Grid;
use crate::partition::{build_rings, build_sectors, Ring, RingScale, Sector};
use crate::rng::{PseudoRand, RandomSeed, SeedSource};

/// Blip color when the owning ring has none.
pub const DEFAULT_ENTRY_COLOR: &str = "black";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// Position in the sorted entry list.
    pub id: usize,
    pub label: String,
    /// `None` when the configured ring index matched no ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring: Option<usize>,
    /// `None` when the configured sector index matched no sector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<usize>,
    /// Movement marker for renderers; placement ignores it.
    pub moved: i64,
    pub point: Point,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<toml::Value>,
}

impl Entry {
    pub fn is_placed(&self) -> bool {
        self.ring.is_some() && self.sector.is_some()
    }
}

/// Serializable snapshot of a computed layout.
#[derive(Debug, Serialize)]
pub struct Layout<'a> {
    pub width: f64,
    pub seed: f64,
    pub ring_width: f64,
    pub rings: &'a [Ring],
    pub sectors: &'a [Sector],
    pub entries: &'a [Entry],
}

pub struct Radar {
    config: RadarConfig,
    style: StyleConfig,
    scale: RingScale,
    rings: Vec<Ring>,
    sectors: Vec<Sector>,
    entries: Vec<Entry>,

    selected_sector: Option<usize>,
    selected_entry: Option<usize>,
    hovered_entry: Option<usize>,
    listeners: Listeners,
}

impl Radar {
    /// Lay out `config`, drawing a fresh seed unless the style pins one.
    pub fn new(config: RadarConfig) -> Result<Self> {
        Self::with_seed_source(config, &mut RandomSeed)
    }

    /// Lay out `config`; `seeds` is only consulted when the style has no seed.
    pub fn with_seed_source(config: RadarConfig, seeds: &mut impl SeedSource) -> Result<Self> {
        config.validate()?;

        let mut style = config.style.clone();
        let seed = *style.seed.get_or_insert_with(|| seeds.next_seed());
        if !seed.is_finite() {
            return Err(RadarError::InvalidSeed(seed));
        }

        let scale = RingScale::new(config.width, config.rings.len(), style.sectors.show_labels);
        let rings = build_rings(&config.rings, &scale);
        let sectors = build_sectors(&config.sectors);
        let mut entries = create_entries(&config.entries, &rings, sectors.len());

        let grid = Grid::generate(&rings, &sectors, &scale, style.blips.offset);
        let mut rand = PseudoRand::new(seed);
        spread_entries(&mut entries, grid, &rings, &sectors, &scale, &mut rand);

        info!(
            rings = rings.len(),
            sectors = sectors.len(),
            entries = entries.len(),
            seed,
            "Radar layout computed"
        );

        Ok(Self {
            config,
            style,
            scale,
            rings,
            sectors,
            entries,
            selected_sector: None,
            selected_entry: None,
            hovered_entry: None,
            listeners: Listeners::default(),
        })
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: usize) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn ring(&self, id: usize) -> Option<&Ring> {
        self.rings.get(id)
    }

    pub fn sector(&self, id: usize) -> Option<&Sector> {
        self.sectors.get(id)
    }

    /// The config as given, before seed resolution.
    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// The effective style; `seed` is always set.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Seed the placement ran with.
    pub fn seed(&self) -> f64 {
        self.style.seed.unwrap_or_default()
    }

    /// Radius of ring boundary `ring`; fractional values fall between rings.
    pub fn ring_radius(&self, ring: f64) -> f64 {
        self.scale.radius(ring)
    }

    pub fn scale(&self) -> &RingScale {
        &self.scale
    }

    pub fn layout(&self) -> Layout<'_> {
        Layout {
            width: self.config.width,
            seed: self.seed(),
            ring_width: self.scale.ring_width(),
            rings: &self.rings,
            sectors: &self.sectors,
            entries: &self.entries,
        }
    }

    pub fn selected_sector(&self) -> Option<&Sector> {
        self.selected_sector.and_then(|id| self.sectors.get(id))
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected_entry.and_then(|id| self.entries.get(id))
    }

    /// Ring of the selected entry.
    pub fn selected_ring(&self) -> Option<&Ring> {
        self.selected_entry()
            .and_then(|entry| entry.ring)
            .and_then(|id| self.rings.get(id))
    }

    pub fn hovered_entry(&self) -> Option<&Entry> {
        self.hovered_entry.and_then(|id| self.entries.get(id))
    }

    pub fn add_event_listener(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&RadarEvent<'_>) + 'static,
    ) {
        self.listeners.add(kind, listener);
    }

    pub fn select_sector(&mut self, sector: Option<usize>) -> Result<()> {
        if let Some(id) = sector {
            if id >= self.sectors.len() {
                return Err(RadarError::UnknownSector(id));
            }
        }

        self.selected_sector = sector;
        let payload = sector.map(|id| &self.sectors[id]);
        self.listeners.dispatch(&RadarEvent::SectorSelect(payload));
        Ok(())
    }

    /// Select an entry (or clear with `None`). A selected entry also selects
    /// its sector, notified after the entry itself.
    pub fn select_entry(&mut self, entry: Option<usize>) -> Result<()> {
        if let Some(id) = entry {
            if id >= self.entries.len() {
                return Err(RadarError::UnknownEntry(id));
            }
        }

        self.selected_entry = entry;
        let payload = entry.map(|id| &self.entries[id]);
        self.listeners.dispatch(&RadarEvent::EntrySelect(payload));

        if let Some(selected) = payload {
            let sector = selected.sector;
            self.select_sector(sector)?;
        }
        Ok(())
    }

    pub fn hover_entry(&mut self, entry: usize) -> Result<()> {
        let hovered = self
            .entries
            .get(entry)
            .ok_or(RadarError::UnknownEntry(entry))?;

        self.hovered_entry = Some(entry);
        self.listeners.dispatch(&RadarEvent::EntryHover(hovered));
        Ok(())
    }

    pub fn hover_entry_out(&mut self, entry: usize) -> Result<()> {
        let left = self
            .entries
            .get(entry)
            .ok_or(RadarError::UnknownEntry(entry))?;

        self.hovered_entry = None;
        self.listeners.dispatch(&RadarEvent::EntryHoverOut(left));
        Ok(())
    }
}

impl std::fmt::Debug for Radar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Radar")
            .field("seed", &self.seed())
            .field("rings", &self.rings.len())
            .field("sectors", &self.sectors.len())
            .field("entries", &self.entries.len())
            .field("selected_sector", &self.selected_sector)
            .field("selected_entry", &self.selected_entry)
            .field("hovered_entry", &self.hovered_entry)
            .field("listeners", &self.listeners)
            .finish()
    }
}

/// Map a configured index onto a partition, if it names one.
fn resolve_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

fn create_entries(configs: &[EntryConfig], rings: &[Ring], sector_count: usize) -> Vec<Entry> {
    let mut sorted: Vec<&EntryConfig> = configs.iter().collect();
    sorted.sort_by_key(|cfg| (cfg.sector, cfg.ring));

    sorted
        .into_iter()
        .enumerate()
        .map(|(id, cfg)| {
            let ring = resolve_index(cfg.ring, rings.len());
            let color = ring
                .and_then(|r| rings[r].color.clone())
                .unwrap_or_else(|| DEFAULT_ENTRY_COLOR.to_string());

            Entry {
                id,
                label: cfg.label.clone(),
                ring,
                sector: resolve_index(cfg.sector, sector_count),
                moved: cfg.moved,
                point: Point::ORIGIN,
                color,
                data: cfg.data.clone(),
            }
        })
        .collect()
}

/// Give every resolvable entry a position inside its (sector, ring) region.
fn spread_entries(
    entries: &mut [Entry],
    mut grid: Grid,
    rings: &[Ring],
    sectors: &[Sector],
    scale: &RingScale,
    rand: &mut PseudoRand,
) {
    let mut fallbacks = 0usize;

    for entry in entries.iter_mut() {
        let (Some(ring), Some(sector)) = (entry.ring, entry.sector) else {
            warn!(entry = %entry.label, "Entry references a missing ring or sector, left unplaced");
            continue;
        };

        entry.point = match grid.take(sector, ring, rand) {
            Some(point) => point,
            None => {
                fallbacks += 1;
                random_point_in(&sectors[sector], &rings[ring], scale, rand)
            }
        };
    }

    if fallbacks > 0 {
        debug!(fallbacks, "Grid exhausted for some regions, used random placement");
    }
}

fn random_point_in(sector: &Sector, ring: &Ring, scale: &RingScale, rand: &mut PseudoRand) -> Point {
    let theta = rand.between(sector.start_angle, sector.end_angle);
    let r = rand.between(ring.radius, ring.outer_radius(scale));
    to_cartesian(r, theta)
}
