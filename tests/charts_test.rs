//! Integration tests for the chart registry and its generation contract.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use demo_analytics_dashboard::charts::{
    ChartEntry, ChartKind, ChartRegistry, DEFAULT_CHART_ID, SAMPLES_PER_SERIES,
};
use demo_analytics_dashboard::config::ChartConfig;
use demo_analytics_dashboard::error::ChartError;
use demo_analytics_dashboard::render::ChartRenderer;

/// Renderer that records the id of every draw request.
#[derive(Clone, Default)]
struct RecordingRenderer {
    draws: Arc<Mutex<Vec<String>>>,
}

impl RecordingRenderer {
    fn draw_count(&self) -> usize {
        self.draws.lock().unwrap().len()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn draw(&self, entry: &ChartEntry) {
        self.draws.lock().unwrap().push(entry.id.clone());
    }
}

fn seeded_config(data_type: &str) -> ChartConfig {
    ChartConfig {
        default_data_type: data_type.to_string(),
        seed: Some(42),
    }
}

fn create_registry(data_type: &str) -> ChartRegistry {
    ChartRegistry::new(&seeded_config(data_type), Box::<RecordingRenderer>::default()).unwrap()
}

fn month_labels() -> Vec<String> {
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
        .iter()
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn registry_starts_with_one_default_entry() {
    let registry = create_registry("sales");
    assert_eq!(registry.len(), 1);

    let entry = registry.get(DEFAULT_CHART_ID).unwrap();
    assert_eq!(entry.id, "chart-0");
    assert_eq!(entry.kind, ChartKind::Line);
    assert_eq!(entry.label, "Sales");
    assert_eq!(entry.labels, month_labels());
    assert_eq!(entry.data.len(), SAMPLES_PER_SERIES);
}

#[test]
fn add_entry_assigns_distinct_monotonic_ids() {
    let registry = create_registry("sales");

    let n = 5;
    for _ in 0..n {
        registry.add_entry();
    }

    let entries = registry.entries();
    assert_eq!(entries.len(), n + 1);

    let ids: Vec<_> = entries.iter().map(|e| e.id.clone()).collect();
    let distinct: HashSet<_> = ids.iter().collect();
    assert_eq!(distinct.len(), n + 1);
    assert_eq!(
        ids,
        vec!["chart-0", "chart-1", "chart-2", "chart-3", "chart-4", "chart-5"]
    );
}

#[test]
fn sales_values_are_integers_in_range() {
    let registry = create_registry("sales");
    for _ in 0..10 {
        registry.add_entry();
    }
    registry.refresh_all();

    for entry in registry.entries() {
        assert_eq!(entry.data.len(), SAMPLES_PER_SERIES);
        for &v in &entry.data {
            assert_eq!(v.fract(), 0.0, "sales value {} is not an integer", v);
            assert!((1000.0..50000.0).contains(&v), "sales value {} out of range", v);
        }
    }
}

#[test]
fn conversion_values_keep_two_fractional_digits_in_range() {
    let registry = create_registry("sales");
    registry.set_data_type("conversion").unwrap();
    for _ in 0..10 {
        registry.add_entry();
    }
    registry.refresh_all();

    for entry in registry.entries() {
        for &v in &entry.data {
            assert!((1.0..100.0).contains(&v), "conversion value {} out of range", v);
            let hundredths = v * 100.0;
            assert!(
                (hundredths - hundredths.round()).abs() < 1e-6,
                "conversion value {} has more than 2 fractional digits",
                v
            );
        }
    }
}

#[test]
fn set_data_type_rejects_unknown_keys() {
    let registry = create_registry("sales");
    let result = registry.set_data_type("velocity");
    assert!(matches!(
        result,
        Err(ChartError::UnknownDataType { name }) if name == "velocity"
    ));

    // Selection and entries are untouched on failure.
    assert_eq!(registry.data_type(), "sales");
    assert_eq!(registry.get(DEFAULT_CHART_ID).unwrap().label, "Sales");
}

#[test]
fn set_data_type_updates_labels_and_preserves_kinds() {
    let registry = create_registry("sales");
    for _ in 0..3 {
        registry.add_entry();
    }
    let kinds_before: Vec<_> = registry.entries().iter().map(|e| e.kind).collect();

    registry.set_data_type("users").unwrap();
    assert_eq!(registry.data_type(), "users");

    let entries = registry.entries();
    let kinds_after: Vec<_> = entries.iter().map(|e| e.kind).collect();
    assert_eq!(kinds_before, kinds_after);

    for entry in &entries {
        assert_eq!(entry.label, "Users");
        assert_eq!(entry.labels, month_labels());
        assert_eq!(entry.data.len(), SAMPLES_PER_SERIES);
        for &v in &entry.data {
            assert!((100.0..5000.0).contains(&v), "users value {} out of range", v);
        }
    }
}

#[test]
fn refresh_all_preserves_labels_and_kinds() {
    let registry = create_registry("revenue");
    registry.add_entry();

    let before = registry.entries();
    registry.refresh_all();
    let after = registry.entries();

    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.id, a.id);
        assert_eq!(b.kind, a.kind);
        assert_eq!(b.label, a.label);
        assert_eq!(b.labels, a.labels);
        assert_eq!(a.data.len(), SAMPLES_PER_SERIES);
        for &v in &a.data {
            assert!((5000.0..100000.0).contains(&v));
        }
    }
}

#[test]
fn renderer_sees_one_draw_per_entry_per_redraw() {
    let renderer = RecordingRenderer::default();
    let registry =
        ChartRegistry::new(&seeded_config("sales"), Box::new(renderer.clone())).unwrap();
    assert_eq!(renderer.draw_count(), 1); // default entry

    registry.add_entry();
    registry.add_entry();
    assert_eq!(renderer.draw_count(), 3);

    registry.refresh_all();
    assert_eq!(renderer.draw_count(), 6);

    registry.set_data_type("users").unwrap();
    assert_eq!(renderer.draw_count(), 9);
}

#[test]
fn random_kinds_come_from_the_fixed_enumeration() {
    let registry = create_registry("sales");
    for _ in 0..20 {
        registry.add_entry();
    }
    for entry in registry.entries() {
        assert!(ChartKind::ALL.contains(&entry.kind));
    }
}
