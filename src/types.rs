//! Core types for the gesture system.
//!
//! Geometry primitives shared by the drag and resize machines, the resize
//! [`Direction`] enum, and the normalized [`DirectionSet`] that every accepted
//! form of the `directions` option parses into.

use crate::constants::DIRECTION_CHARS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

// ============================================================================
// Geometry
// ============================================================================

/// A 2D vector in CSS pixels. Used for pointer positions, origins and translates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// CSS transform string for this translate, e.g. `translate(10px,20px)`.
    pub fn to_translate_css(self) -> String {
        format!("translate({}px,{}px)", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box as reported by a rendering surface (viewport coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Size::new(width, height),
        }
    }
}

/// Opaque handle to an element owned by a rendering surface.
///
/// The controller never owns the target element; it only remembers its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Resize Directions
// ============================================================================

/// Which edge or corner a resize handle controls.
///
/// Variant order is the canonical handle order and drives iteration of
/// [`DirectionSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    S,
    SE,
    E,
    NE,
    N,
    NW,
    W,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::S,
        Direction::SE,
        Direction::E,
        Direction::NE,
        Direction::N,
        Direction::NW,
        Direction::W,
        Direction::SW,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::S => "s",
            Direction::SE => "se",
            Direction::E => "e",
            Direction::NE => "ne",
            Direction::N => "n",
            Direction::NW => "nw",
            Direction::W => "w",
            Direction::SW => "sw",
        }
    }

    /// Corner handles grow on both axes.
    pub fn is_corner(self) -> bool {
        matches!(self, Direction::SE | Direction::NE | Direction::NW | Direction::SW)
    }

    /// +1 when the handle moves the right edge, -1 for the left edge, 0 otherwise.
    pub fn horizontal_sign(self) -> f64 {
        match self {
            Direction::E | Direction::NE | Direction::SE => 1.0,
            Direction::W | Direction::NW | Direction::SW => -1.0,
            Direction::N | Direction::S => 0.0,
        }
    }

    /// +1 when the handle moves the bottom edge, -1 for the top edge, 0 otherwise.
    pub fn vertical_sign(self) -> f64 {
        match self {
            Direction::S | Direction::SE | Direction::SW => 1.0,
            Direction::N | Direction::NE | Direction::NW => -1.0,
            Direction::E | Direction::W => 0.0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a token that names no direction. Never surfaced by option
/// parsing, which drops unknown tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize direction: {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => Ok(Direction::S),
            "se" => Ok(Direction::SE),
            "e" => Ok(Direction::E),
            "ne" => Ok(Direction::NE),
            "n" => Ok(Direction::N),
            "nw" => Ok(Direction::NW),
            "w" => Ok(Direction::W),
            "sw" => Ok(Direction::SW),
            other => Err(UnknownDirection(other.to_string())),
        }
    }
}

/// The `directions` option as supplied by the caller.
///
/// Absence of the option is expressed as `Option::None` at the use site and
/// means "all eight directions"; it is not a variant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Directions {
    /// `["s", "se"]`
    Sequence(Vec<String>),
    /// `"s,se"`: every run of `s`/`w`/`n`/`e` characters is one token
    Delimited(String),
    /// `{"s": null, "se": 7}`: a value is an externally supplied handle element
    Map(BTreeMap<String, Option<ElementId>>),
}

impl From<&str> for Directions {
    fn from(text: &str) -> Self {
        Directions::Delimited(text.to_string())
    }
}

impl From<Vec<String>> for Directions {
    fn from(tokens: Vec<String>) -> Self {
        Directions::Sequence(tokens)
    }
}

impl From<&[Direction]> for Directions {
    fn from(directions: &[Direction]) -> Self {
        Directions::Sequence(directions.iter().map(|d| d.as_str().to_string()).collect())
    }
}

/// Split a delimited direction string into its tokens.
///
/// Tokens are maximal runs of direction characters; everything else is a
/// separator. `"s, se|nw"` yields `["s", "se", "nw"]`.
pub fn scan_direction_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !DIRECTION_CHARS.contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Normalized set of enabled resize directions, each with its handle element.
///
/// A `None` handle means the controller has not created (or been given) an
/// element for that direction yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionSet {
    handles: BTreeMap<Direction, Option<ElementId>>,
}

impl DirectionSet {
    /// Every direction, no handles yet.
    pub fn all() -> Self {
        Self {
            handles: Direction::ALL.iter().map(|d| (*d, None)).collect(),
        }
    }

    /// Normalize any accepted form of the `directions` option.
    ///
    /// Unknown tokens are dropped silently; `None` enables all eight directions.
    pub fn parse(directions: Option<&Directions>) -> Self {
        let Some(directions) = directions else {
            return Self::all();
        };

        let handles = match directions {
            Directions::Sequence(tokens) => tokens
                .iter()
                .filter_map(|token| token.parse::<Direction>().ok())
                .map(|d| (d, None))
                .collect(),
            Directions::Delimited(text) => scan_direction_tokens(text)
                .into_iter()
                .filter_map(|token| token.parse::<Direction>().ok())
                .map(|d| (d, None))
                .collect(),
            Directions::Map(map) => map
                .iter()
                .filter_map(|(token, handle)| token.parse::<Direction>().ok().map(|d| (d, *handle)))
                .collect(),
        };

        Self { handles }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, direction: Direction) -> bool {
        self.handles.contains_key(&direction)
    }

    /// Enabled directions in canonical order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.handles.keys().copied()
    }

    pub fn handle(&self, direction: Direction) -> Option<ElementId> {
        self.handles.get(&direction).copied().flatten()
    }

    /// Record the handle element for an enabled direction. Ignored for
    /// directions that are not in the set.
    pub fn set_handle(&mut self, direction: Direction, element: ElementId) {
        if let Some(slot) = self.handles.get_mut(&direction) {
            *slot = Some(element);
        }
    }

    /// Reverse lookup: which direction does this handle element belong to.
    pub fn direction_of(&self, element: ElementId) -> Option<Direction> {
        self.handles
            .iter()
            .find(|(_, handle)| **handle == Some(element))
            .map(|(direction, _)| *direction)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, Option<ElementId>)> + '_ {
        self.handles.iter().map(|(d, h)| (*d, *h))
    }
}
