//! Classification of points of interest into map markers.
//!
//! Recognized traffic-sign tags and single uppercase letters get an icon,
//! every other tag is drawn as a colored dot.

use log::trace;
use serde::Serialize;

pub mod table;

pub use table::{Icon, LETTERS, PALETTE, SIGNS, TagEntry};

/// How a point of interest is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerDescriptor {
    IconMarker { icon: &'static Icon },
    ColorDot(ColorDot),
}

impl MarkerDescriptor {
    pub fn icon(&self) -> Option<&'static Icon> {
        match self {
            Self::IconMarker { icon } => Some(icon),
            Self::ColorDot(_) => None,
        }
    }
}

/// Generic circle marker for tags without an icon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDot {
    pub radius: f64,
    pub fill_color: &'static str,
    pub stroke_color: &'static str,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl ColorDot {
    pub fn for_name(name: &str) -> Self {
        Self {
            radius: 6.,
            fill_color: PALETTE[palette_index(name)],
            stroke_color: "#000",
            weight: 1.,
            opacity: 0.5,
            fill_opacity: 0.7,
        }
    }
}

/// Pseudo-hash over the palette buckets: the code point of the last character
/// modulo the palette size.
///
/// Collisions are frequent and accepted, the point is that a name always maps
/// to the same color. An empty name lands in bucket 0.
pub fn palette_index(name: &str) -> usize {
    name.chars().last().map_or(0, |c| c as usize % PALETTE.len())
}

/// Finds the table entry for `name`, signs first, then letters.
pub fn lookup(name: &str) -> Option<&'static TagEntry> {
    if let Some(entry) = SIGNS.iter().find(|entry| entry.tag == name) {
        return Some(entry);
    }

    match name.as_bytes() {
        [letter @ b'A'..=b'Z'] => Some(&LETTERS[usize::from(letter - b'A')]),
        _ => None,
    }
}

pub fn classify(name: &str) -> MarkerDescriptor {
    match lookup(name) {
        Some(entry) => MarkerDescriptor::IconMarker { icon: &entry.icon },
        None => {
            trace!("No icon for tag '{}', using color dot", name);
            MarkerDescriptor::ColorDot(ColorDot::for_name(name))
        }
    }
}

/// Whether `name` is a frequently occurring tag that deserves a legend entry.
pub fn is_common_tag(name: &str) -> bool {
    lookup(name).is_some_and(|entry| entry.common)
}

/// Sign entries shown in the legend.
pub fn legend() -> impl Iterator<Item = &'static TagEntry> {
    SIGNS.iter().filter(|entry| entry.common)
}
