//! Physical placement of pixels
//!
//! The layout is supplied once at startup and only read afterwards. It maps
//! every frame index to a position on the lamp so animations and the
//! transition wipe can work in space rather than in wiring order.

mod lamp;

pub use lamp::{
    LAMP_EDGES, LAMP_HEIGHT, LAMP_PIXEL_COUNT, LAMP_PIXELS, LAMP_VERTICES, LAMP_WIDTH, lamp,
};

/// Position of a single pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Straight run of pixels, both ends included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    start: u16,
    end: u16,
}

impl Edge {
    /// Create an edge; the ends are ordered so that `start <= end`
    pub const fn new(a: u16, b: u16) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub const fn start(self) -> u16 {
        self.start
    }

    pub const fn end(self) -> u16 {
        self.end
    }

    /// Number of pixels on the edge
    pub const fn pixel_count(self) -> u16 {
        self.end - self.start + 1
    }

    /// Pixel index of one end of the edge
    pub const fn pixel_at(self, side: EdgeSide) -> u16 {
        match side {
            EdgeSide::Start => self.start,
            EdgeSide::End => self.end,
        }
    }
}

/// Which end of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSide {
    Start,
    End,
}

impl EdgeSide {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

/// One end of an edge, identified by the edge's index in the layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEnd {
    pub edge: u8,
    pub side: EdgeSide,
}

impl EdgeEnd {
    pub const fn new(edge: u8, side: EdgeSide) -> Self {
        Self { edge, side }
    }
}

/// Point where several edge ends meet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex<'a> {
    ends: &'a [EdgeEnd],
}

impl<'a> Vertex<'a> {
    pub const fn new(ends: &'a [EdgeEnd]) -> Self {
        Self { ends }
    }

    pub const fn ends(&self) -> &'a [EdgeEnd] {
        self.ends
    }

    pub fn contains(&self, end: EdgeEnd) -> bool {
        self.ends.contains(&end)
    }
}

/// Read-only pixel coordinate map with optional edge graph
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pixels: &'a [Point],
    width: u16,
    height: u16,
    edges: &'a [Edge],
    vertices: &'a [Vertex<'a>],
}

impl<'a> Layout<'a> {
    /// Create a layout whose extent is the bounding box of `pixels`
    pub fn new(pixels: &'a [Point]) -> Self {
        let width = pixels.iter().map(|p| p.x).max().unwrap_or(0);
        let height = pixels.iter().map(|p| p.y).max().unwrap_or(0);
        Self::with_extent(pixels, width, height)
    }

    pub const fn with_extent(pixels: &'a [Point], width: u16, height: u16) -> Self {
        Self {
            pixels,
            width,
            height,
            edges: &[],
            vertices: &[],
        }
    }

    /// Attach the edge graph used by path-following animations
    #[must_use]
    pub const fn with_graph(mut self, edges: &'a [Edge], vertices: &'a [Vertex<'a>]) -> Self {
        self.edges = edges;
        self.vertices = vertices;
        self
    }

    pub const fn len(&self) -> usize {
        self.pixels.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub const fn pixels(&self) -> &'a [Point] {
        self.pixels
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.pixels.get(index).copied()
    }

    /// Largest x coordinate on the lamp
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Largest y coordinate on the lamp
    pub const fn height(&self) -> u16 {
        self.height
    }

    pub const fn edges(&self) -> &'a [Edge] {
        self.edges
    }

    pub const fn vertices(&self) -> &'a [Vertex<'a>] {
        self.vertices
    }

    /// Vertex at which the given edge end sits
    pub fn vertex_of(&self, end: EdgeEnd) -> Option<&Vertex<'a>> {
        self.vertices.iter().find(|vertex| vertex.contains(end))
    }
}
