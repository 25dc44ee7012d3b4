//! Read-only property access for page size, margins, and band settings.
//!
//! The embedding application owns the configuration model; this core only
//! reads from it. Values may arrive numeric-as-text and are normalized to
//! numbers before use — malformed or missing values coerce to 0 so the
//! surface always stays renderable.

use std::collections::HashMap;

/// A loosely-typed property value as supplied by the embedding application.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl PropertyValue {
    /// Normalize to a number. Text is parsed; anything malformed is 0.
    pub fn as_number(&self) -> f64 {
        match self {
            PropertyValue::Number(n) => *n,
            PropertyValue::Text(s) => s.trim().parse().unwrap_or(0.0),
            PropertyValue::Bool(b) => f64::from(*b),
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            PropertyValue::Bool(b) => *b,
            PropertyValue::Number(n) => *n != 0.0,
            PropertyValue::Text(s) => matches!(s.trim(), "true" | "1"),
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Bool(b)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

/// Read-only key-value source for document properties.
pub trait PropertySource {
    fn get(&self, key: &str) -> Option<PropertyValue>;
}

/// Numeric property lookup; missing keys coerce to 0.
pub fn number(source: &dyn PropertySource, key: &str) -> f64 {
    source.get(key).map(|v| v.as_number()).unwrap_or(0.0)
}

/// Boolean property lookup; missing keys coerce to false.
pub fn flag(source: &dyn PropertySource, key: &str) -> bool {
    source.get(key).map(|v| v.as_bool()).unwrap_or(false)
}

/// Simple map-backed property source.
#[derive(Debug, Default, Clone)]
pub struct MapProperties {
    values: HashMap<String, PropertyValue>,
}

impl MapProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<PropertyValue>) {
        self.values.insert(key.to_string(), value.into());
    }
}

impl PropertySource for MapProperties {
    fn get(&self, key: &str) -> Option<PropertyValue> {
        self.values.get(key).cloned()
    }
}

/// The declarative page settings the geometry engine consumes, in document
/// units. All numeric fields normalize through [`PropertyValue::as_number`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageProperties {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub header: bool,
    pub header_size: f64,
    pub footer: bool,
    pub footer_size: f64,
}

impl PageProperties {
    /// Snapshot the current page settings from a property source.
    pub fn from_source(source: &dyn PropertySource) -> Self {
        Self {
            width: number(source, "page_width"),
            height: number(source, "page_height"),
            margin_left: number(source, "margin_left"),
            margin_top: number(source, "margin_top"),
            margin_right: number(source, "margin_right"),
            margin_bottom: number(source, "margin_bottom"),
            header: flag(source, "header"),
            header_size: number(source, "header_size"),
            footer: flag(source, "footer"),
            footer_size: number(source, "footer_size"),
        }
    }
}
