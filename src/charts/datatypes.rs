//! Built-in data-type descriptors.
//!
//! Each descriptor is a static metric family: display label, category labels
//! and the numeric range datasets are drawn from. Descriptors are immutable
//! and shared by reference across every chart entry of that type.

/// Static configuration describing a metric family.
#[derive(Debug, PartialEq)]
pub struct DataTypeDescriptor {
    /// Lookup key, as selected by the data-type control.
    pub key: &'static str,
    /// Human-readable dataset label.
    pub label: &'static str,
    /// Category labels, parallel to the generated dataset.
    pub labels: [&'static str; 6],
    /// Inclusive lower bound of generated values.
    pub min: f64,
    /// Exclusive upper bound of generated values.
    pub max: f64,
    /// Whether values keep two fractional digits instead of being truncated
    /// to integers.
    pub fractional: bool,
}

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// All built-in data types.
pub static DATA_TYPES: [DataTypeDescriptor; 4] = [
    DataTypeDescriptor {
        key: "sales",
        label: "Sales",
        labels: MONTHS,
        min: 1000.0,
        max: 50000.0,
        fractional: false,
    },
    DataTypeDescriptor {
        key: "users",
        label: "Users",
        labels: MONTHS,
        min: 100.0,
        max: 5000.0,
        fractional: false,
    },
    DataTypeDescriptor {
        key: "revenue",
        label: "Revenue",
        labels: MONTHS,
        min: 5000.0,
        max: 100000.0,
        fractional: false,
    },
    DataTypeDescriptor {
        key: "conversion",
        label: "Conversion",
        labels: MONTHS,
        min: 1.0,
        max: 100.0,
        fractional: true,
    },
];

/// Look up a descriptor by key.
pub fn descriptor(key: &str) -> Option<&'static DataTypeDescriptor> {
    DATA_TYPES.iter().find(|d| d.key == key)
}

/// Keys of all built-in data types, in declaration order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    DATA_TYPES.iter().map(|d| d.key)
}
