//! Chart registry: a keyed collection of chart entries with synthetic data.
//!
//! The registry owns every [`ChartEntry`], generates datasets consistent with
//! the selected data type and pushes redraws through the [`ChartRenderer`]
//! boundary. Identifiers are assigned monotonically and never reused within
//! a registry's lifetime.

mod datatypes;

pub use datatypes::{descriptor, keys, DataTypeDescriptor, DATA_TYPES};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, RwLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::ChartConfig;
use crate::error::{ChartError, ChartResult};
use crate::render::ChartRenderer;

/// Identifier of the entry created at registry initialization.
pub const DEFAULT_CHART_ID: &str = "chart-0";

/// Number of samples in every generated dataset, parallel to the six
/// category labels of each data type.
pub const SAMPLES_PER_SERIES: usize = 6;

/// Palette cycled through by entry creation order.
pub const CHART_COLORS: [&str; 4] = [
    "rgba(45, 106, 79, 0.7)",
    "rgba(64, 145, 108, 0.7)",
    "rgba(82, 183, 136, 0.7)",
    "rgba(27, 67, 50, 0.7)",
];

/// Visual kind of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Line chart with smoothed segments.
    Line,
    /// Vertical bar chart.
    Bar,
    /// Radar (spider) chart.
    Radar,
    /// Polar area chart.
    PolarArea,
}

impl ChartKind {
    /// All kinds, in the order random selection draws from.
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Radar,
        ChartKind::PolarArea,
    ];
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Radar => write!(f, "radar"),
            ChartKind::PolarArea => write!(f, "polar_area"),
        }
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "radar" => Ok(ChartKind::Radar),
            "polar_area" => Ok(ChartKind::PolarArea),
            _ => Err(format!("Unknown chart kind: {}", s)),
        }
    }
}

/// One managed chart: kind, dataset and labels.
#[derive(Debug, Clone, Serialize)]
pub struct ChartEntry {
    /// Unique identifier, monotonically assigned.
    pub id: String,
    /// Visual kind. Fixed at creation; data-type changes do not alter it.
    pub kind: ChartKind,
    /// Dataset label, taken from the data type active at the last redraw.
    pub label: String,
    /// Category labels, parallel to `data`.
    pub labels: Vec<String>,
    /// Current dataset, always [`SAMPLES_PER_SERIES`] values.
    pub data: Vec<f64>,
    /// Index into [`CHART_COLORS`].
    pub color_index: usize,
}

/// Registry owning all chart entries.
///
/// Entries are kept in insertion order for display; lookup is by identifier.
pub struct ChartRegistry {
    entries: RwLock<Vec<ChartEntry>>,
    counter: AtomicU64,
    data_type: RwLock<&'static DataTypeDescriptor>,
    rng: Mutex<StdRng>,
    renderer: Box<dyn ChartRenderer>,
}

impl ChartRegistry {
    /// Create a registry with exactly one default entry.
    ///
    /// The default entry has the fixed identifier [`DEFAULT_CHART_ID`], kind
    /// [`ChartKind::Line`] and a fresh dataset for the configured data type.
    /// Fails with [`ChartError::UnknownDataType`] when the configured default
    /// data type is not a built-in key.
    pub fn new(config: &ChartConfig, renderer: Box<dyn ChartRenderer>) -> ChartResult<Self> {
        let data_type =
            datatypes::descriptor(&config.default_data_type).ok_or_else(|| {
                ChartError::UnknownDataType {
                    name: config.default_data_type.clone(),
                }
            })?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let registry = Self {
            entries: RwLock::new(Vec::new()),
            counter: AtomicU64::new(0),
            data_type: RwLock::new(data_type),
            rng: Mutex::new(rng),
            renderer,
        };
        registry.create_entry(ChartKind::Line);
        Ok(registry)
    }

    /// Register a new entry with a uniformly random kind and a dataset for
    /// the currently selected data type. Returns its identifier.
    pub fn add_entry(&self) -> String {
        let kind = {
            let mut rng = self.rng.lock().unwrap();
            ChartKind::ALL[rng.gen_range(0..ChartKind::ALL.len())]
        };
        self.create_entry(kind)
    }

    /// Switch the selected data type and bring every entry in line with it:
    /// dataset, category labels and dataset label are regenerated, the kind
    /// is left untouched, and everything is redrawn.
    pub fn set_data_type(&self, key: &str) -> ChartResult<()> {
        let descriptor =
            datatypes::descriptor(key).ok_or_else(|| ChartError::UnknownDataType {
                name: key.to_string(),
            })?;
        *self.data_type.write().unwrap() = descriptor;

        let snapshot = {
            let mut entries = self.entries.write().unwrap();
            for entry in entries.iter_mut() {
                entry.label = descriptor.label.to_string();
                entry.labels = descriptor.labels.iter().map(|l| l.to_string()).collect();
                entry.data = self.generate_series(descriptor);
            }
            entries.clone()
        };
        self.redraw(&snapshot);

        info!(data_type = key, charts = snapshot.len(), "data type changed");
        Ok(())
    }

    /// Regenerate every entry's dataset from the selected data type's range
    /// and redraw. Labels and kinds are untouched.
    pub fn refresh_all(&self) {
        let descriptor = *self.data_type.read().unwrap();
        let snapshot = {
            let mut entries = self.entries.write().unwrap();
            for entry in entries.iter_mut() {
                entry.data = self.generate_series(descriptor);
            }
            entries.clone()
        };
        self.redraw(&snapshot);

        debug!(charts = snapshot.len(), "datasets refreshed");
    }

    /// Snapshot of all entries, in insertion order.
    pub fn entries(&self) -> Vec<ChartEntry> {
        self.entries.read().unwrap().clone()
    }

    /// Snapshot of a single entry by identifier.
    pub fn get(&self, id: &str) -> Option<ChartEntry> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned()
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the registry holds no entries. Never true after construction.
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Key of the currently selected data type.
    pub fn data_type(&self) -> &'static str {
        self.data_type.read().unwrap().key
    }

    fn create_entry(&self, kind: ChartKind) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        let descriptor = *self.data_type.read().unwrap();
        let entry = ChartEntry {
            id: format!("chart-{}", n),
            kind,
            label: descriptor.label.to_string(),
            labels: descriptor.labels.iter().map(|l| l.to_string()).collect(),
            data: self.generate_series(descriptor),
            color_index: n as usize % CHART_COLORS.len(),
        };

        let id = entry.id.clone();
        self.renderer.draw(&entry);
        self.entries.write().unwrap().push(entry);

        debug!(chart = %id, %kind, "chart registered");
        id
    }

    /// Draw [`SAMPLES_PER_SERIES`] values uniformly from `[min, max)`.
    ///
    /// Fractional types keep two digits (truncated, so values stay below
    /// `max`); all others are truncated to integers.
    fn generate_series(&self, descriptor: &DataTypeDescriptor) -> Vec<f64> {
        let mut rng = self.rng.lock().unwrap();
        (0..SAMPLES_PER_SERIES)
            .map(|_| {
                let v = rng.gen_range(descriptor.min..descriptor.max);
                if descriptor.fractional {
                    (v * 100.0).floor() / 100.0
                } else {
                    v.floor()
                }
            })
            .collect()
    }

    fn redraw(&self, entries: &[ChartEntry]) {
        for entry in entries {
            self.renderer.draw(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TracingRenderer;

    fn seeded_registry() -> ChartRegistry {
        let config = ChartConfig {
            default_data_type: "sales".to_string(),
            seed: Some(42),
        };
        ChartRegistry::new(&config, Box::new(TracingRenderer)).unwrap()
    }

    #[test]
    fn test_chart_kind_display_and_parse() {
        for kind in ChartKind::ALL {
            let parsed: ChartKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("pie".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_new_creates_default_entry() {
        let registry = seeded_registry();
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());

        let entry = registry.get(DEFAULT_CHART_ID).unwrap();
        assert_eq!(entry.kind, ChartKind::Line);
        assert_eq!(entry.color_index, 0);
        assert_eq!(entry.data.len(), SAMPLES_PER_SERIES);
    }

    #[test]
    fn test_new_rejects_unknown_default_data_type() {
        let config = ChartConfig {
            default_data_type: "velocity".to_string(),
            seed: None,
        };
        let result = ChartRegistry::new(&config, Box::new(TracingRenderer));
        assert!(matches!(
            result,
            Err(ChartError::UnknownDataType { name }) if name == "velocity"
        ));
    }

    #[test]
    fn test_color_indexes_cycle_through_palette() {
        let registry = seeded_registry();
        for _ in 0..5 {
            registry.add_entry();
        }
        let indexes: Vec<_> = registry.entries().iter().map(|e| e.color_index).collect();
        assert_eq!(indexes, vec![0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_seeded_registries_are_reproducible() {
        let a = seeded_registry();
        let b = seeded_registry();
        assert_eq!(
            a.get(DEFAULT_CHART_ID).unwrap().data,
            b.get(DEFAULT_CHART_ID).unwrap().data
        );
        assert_eq!(a.add_entry(), b.add_entry());
        assert_eq!(a.entries()[1].kind, b.entries()[1].kind);
        assert_eq!(a.entries()[1].data, b.entries()[1].data);
    }
}
