use std::collections::HashMap;
use std::fmt;

use crate::error::DbscanError;

/// Caller-supplied identifier of a point.
pub type PointId = i64;

/// A point in the plane together with its stable identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: PointId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Classification state of a point during and after a run.
///
/// A point starts `Unclassified`. `Noise` is provisional and may be
/// upgraded to a `Cluster` once; a `Cluster` label is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Unclassified,
    Noise,
    Cluster(usize),
}

impl Label {
    /// The cluster id, if this label belongs to a cluster.
    pub fn cluster(&self) -> Option<usize> {
        match *self {
            Label::Cluster(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_noise(&self) -> bool {
        matches!(self, Label::Noise)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Unclassified => write!(f, "unclassified"),
            Label::Noise => write!(f, "noise"),
            Label::Cluster(id) => write!(f, "cluster {}", id),
        }
    }
}

/// The fixed set of input points, in input order.
///
/// Storage slots (indices into the distance table) are kept apart from the
/// caller's identifiers; `index_of` maps one to the other.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
    index: HashMap<PointId, usize>,
}

impl PointStore {
    /// Build a store from points in input order.
    ///
    /// # Errors
    ///
    /// Returns `DbscanError::DuplicatePointId` if two points share an id.
    pub fn new(points: Vec<Point>) -> Result<Self, DbscanError> {
        let mut index = HashMap::with_capacity(points.len());
        for (slot, point) in points.iter().enumerate() {
            if index.insert(point.id, slot).is_some() {
                return Err(DbscanError::DuplicatePointId(point.id));
            }
        }
        Ok(Self { points, index })
    }

    /// Build a store from `(x, y)` pairs, numbering them `0..n`.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        let points: Vec<Point> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(i as PointId, x, y))
            .collect();
        let index = points.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        Self { points, index }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Point stored at slot `index`.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Storage slot of the point with identifier `id`.
    pub fn index_of(&self, id: PointId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Identifiers in storage order.
    pub fn ids(&self) -> Vec<PointId> {
        self.points.iter().map(|p| p.id).collect()
    }
}
