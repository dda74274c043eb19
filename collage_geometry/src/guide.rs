// Copyright 2025 the Collage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alignment guides and snapping.
//!
//! While an object is dragged, the editor looks for canvas or object lines
//! that one of the object's own edges (or its center) is about to cross. If
//! one is within the snap threshold, the object is pulled onto it and a guide
//! line is drawn.
//!
//! The flow per pointer move is:
//!
//! 1. Build [`LineGuideStops`]: canvas start/center/end plus the
//!    start/center/end of every *other* object's client rect.
//! 2. Build [`SnapEdges`] for the moving object from its client rect and its
//!    position.
//! 3. Call [`find_guides`] to pick at most one [`Guide`] per axis.
//! 4. Call [`Guides::apply`] to move the object's position onto the guides.
//!
//! Everything is a short nested loop over a handful of numbers; there is no
//! spatial index.

use kurbo::{Line, Point, Rect};
use smallvec::SmallVec;

/// Default snap distance in stage pixels.
///
/// A candidate is considered only when its distance is strictly below the
/// threshold.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 5.0;

/// Inline capacity for guide stops: the canvas plus a handful of objects.
const INLINE_STOPS: usize = 24;

/// Axis of a guide line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A vertical line at some `x`.
    Vertical,
    /// A horizontal line at some `y`.
    Horizontal,
}

/// Which part of the moving object lines up with a guide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapEdge {
    /// Left or top edge.
    Start,
    /// Horizontal or vertical center.
    Center,
    /// Right or bottom edge.
    End,
}

/// Candidate guide positions along both axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineGuideStops {
    /// Candidate `x` positions for vertical guides.
    pub vertical: SmallVec<[f64; INLINE_STOPS]>,
    /// Candidate `y` positions for horizontal guides.
    pub horizontal: SmallVec<[f64; INLINE_STOPS]>,
}

impl LineGuideStops {
    /// Creates an empty set of stops.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates stops for the canvas start, center and end on both axes.
    #[must_use]
    pub fn from_canvas(canvas: Rect) -> Self {
        let mut stops = Self::new();
        stops.push_rect(canvas);
        stops
    }

    /// Creates stops for the canvas plus every rect in `others`.
    ///
    /// `others` should not include the object being dragged.
    #[must_use]
    pub fn from_canvas_and_rects<I>(canvas: Rect, others: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let mut stops = Self::from_canvas(canvas);
        for rect in others {
            stops.push_rect(rect);
        }
        stops
    }

    /// Adds the start, center, and end of `rect` on both axes.
    pub fn push_rect(&mut self, rect: Rect) {
        let center = rect.center();
        self.vertical.extend([rect.x0, center.x, rect.x1]);
        self.horizontal.extend([rect.y0, center.y, rect.y1]);
    }
}

/// One snappable line of the moving object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPoint {
    /// Stage coordinate of the edge or center.
    pub guide: f64,
    /// Object position minus `guide` along the same axis.
    ///
    /// Adding this to a guide line gives the object position that puts this
    /// edge exactly on the line.
    pub offset: f64,
    /// Which edge this is.
    pub edge: SnapEdge,
}

/// The start/center/end lines of the moving object on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapEdges {
    /// Left, center, right.
    pub vertical: [SnapPoint; 3],
    /// Top, center, bottom.
    pub horizontal: [SnapPoint; 3],
}

impl SnapEdges {
    /// Computes the snap edges from the object's client rect and its position.
    ///
    /// `position` is whatever the caller moves when dragging (usually the
    /// object origin); it need not coincide with a corner of `client_rect`
    /// once the object is rotated.
    #[must_use]
    pub fn new(client_rect: Rect, position: Point) -> Self {
        let center = client_rect.center();
        let point = |guide: f64, pos: f64, edge| SnapPoint {
            guide,
            offset: pos - guide,
            edge,
        };
        Self {
            vertical: [
                point(client_rect.x0, position.x, SnapEdge::Start),
                point(center.x, position.x, SnapEdge::Center),
                point(client_rect.x1, position.x, SnapEdge::End),
            ],
            horizontal: [
                point(client_rect.y0, position.y, SnapEdge::Start),
                point(center.y, position.y, SnapEdge::Center),
                point(client_rect.y1, position.y, SnapEdge::End),
            ],
        }
    }
}

/// A chosen guide line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Guide {
    /// Stage coordinate of the line (`x` for vertical, `y` for horizontal).
    pub line: f64,
    /// Offset to add to `line` to get the snapped object position.
    pub offset: f64,
    /// Distance between the object edge and the line before snapping.
    pub distance: f64,
    /// Axis of the line.
    pub orientation: Orientation,
    /// Edge of the object that lines up.
    pub edge: SnapEdge,
}

impl Guide {
    /// Returns the snapped position coordinate along this guide's axis.
    #[must_use]
    pub fn snapped(&self) -> f64 {
        self.line + self.offset
    }

    /// Returns the guide as a line segment spanning `extent`, for drawing.
    #[must_use]
    pub fn segment(&self, extent: Rect) -> Line {
        match self.orientation {
            Orientation::Vertical => Line::new((self.line, extent.y0), (self.line, extent.y1)),
            Orientation::Horizontal => Line::new((extent.x0, self.line), (extent.x1, self.line)),
        }
    }
}

/// The result of a snap query: at most one guide per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Guides {
    /// Vertical guide, snapping the `x` position.
    pub vertical: Option<Guide>,
    /// Horizontal guide, snapping the `y` position.
    pub horizontal: Option<Guide>,
}

impl Guides {
    /// No guides.
    pub const NONE: Self = Self {
        vertical: None,
        horizontal: None,
    };

    /// Returns `true` if neither axis snapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }

    /// Returns the number of guides (0, 1, or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.vertical.is_some()) + usize::from(self.horizontal.is_some())
    }

    /// Iterates over the present guides, vertical first.
    pub fn iter(&self) -> impl Iterator<Item = &Guide> {
        self.vertical.iter().chain(self.horizontal.iter())
    }

    /// Moves `position` onto the guides. Axes without a guide are unchanged.
    #[must_use]
    pub fn apply(&self, position: Point) -> Point {
        Point::new(
            self.vertical.map_or(position.x, |g| g.snapped()),
            self.horizontal.map_or(position.y, |g| g.snapped()),
        )
    }
}

/// Picks the closest guide per axis within `threshold`.
///
/// Every stop is compared against every snap edge on the same axis. Pairs
/// whose distance is not strictly below `threshold` are ignored; of the rest
/// the one with the smallest distance wins. When several pairs share the
/// smallest distance, the first one found (stop order, then start/center/end)
/// wins.
#[must_use]
pub fn find_guides(stops: &LineGuideStops, edges: &SnapEdges, threshold: f64) -> Guides {
    Guides {
        vertical: closest(
            &stops.vertical,
            &edges.vertical,
            threshold,
            Orientation::Vertical,
        ),
        horizontal: closest(
            &stops.horizontal,
            &edges.horizontal,
            threshold,
            Orientation::Horizontal,
        ),
    }
}

fn closest(
    stops: &[f64],
    points: &[SnapPoint; 3],
    threshold: f64,
    orientation: Orientation,
) -> Option<Guide> {
    let mut best: Option<Guide> = None;
    for &line in stops {
        for point in points {
            let distance = (line - point.guide).abs();
            if distance >= threshold {
                continue;
            }
            if best.is_some_and(|b| b.distance <= distance) {
                continue;
            }
            best = Some(Guide {
                line,
                offset: point.offset,
                distance,
                orientation,
                edge: point.edge,
            });
        }
    }
    best
}
