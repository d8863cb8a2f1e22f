use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Bounded, Rectangle};
use smallvec::SmallVec;
use std::marker::PhantomData;

mod config;

pub use config::Config;

/// One of the four children of a split node, in the order children are
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopRight = 0,
    TopLeft = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopRight,
        Quadrant::TopLeft,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A stored handle together with the box it was inserted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<T> {
    pub bounds: Rectangle,
    pub value: T,
}

/// Region quadtree over axis-aligned boxes.
///
/// The tree never owns the things it indexes, only copies of their handles.
/// It is meant to be cleared and refilled every tick rather than updated in
/// place.
///
/// Queries are a broad phase. `could_collide_with` descends into a single
/// child whenever the query box fits one quadrant and never looks at that
/// child's siblings. Candidates still need an exact overlap test.
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    area: Rectangle,
    config: Config,
    level: usize,
    objects: SmallVec<[Entry<T>; 8]>,
    nodes: Vec<QuadTree<T>>,
}

impl<T> QuadTree<T> {
    pub fn new(area: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(area, Config::default())
    }

    pub fn new_with_config(area: Rectangle, config: Config) -> QuadtreeResult<Self> {
        if !area.is_well_formed() {
            let err = QuadtreeError::InvalidRectangleDims {
                width: area.width,
                height: area.height,
            };
            log::error!("cannot build quadtree: {}", err);
            return Err(err);
        }
        Ok(Self::with_level(area, config, 0))
    }

    pub fn builder() -> QuadTreeBuilder<T> {
        QuadTreeBuilder::default()
    }

    fn with_level(area: Rectangle, config: Config, level: usize) -> Self {
        QuadTree {
            area,
            config,
            level,
            objects: SmallVec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Entries held directly by this node, not by its children.
    pub fn objects(&self) -> &[Entry<T>] {
        &self.objects
    }

    /// Either empty or the four quadrants in `Quadrant` order.
    pub fn nodes(&self) -> &[QuadTree<T>] {
        &self.nodes
    }

    pub fn is_split(&self) -> bool {
        !self.nodes.is_empty()
    }

    // Counts all entries in this node and its descendants
    pub fn len(&self) -> usize {
        self.objects.len() + self.nodes.iter().map(|node| node.len()).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Quarter this node's area into four children.
    ///
    /// Fails without touching the node if it already has children.
    pub fn split(&mut self) -> QuadtreeResult<()> {
        if self.is_split() {
            log::warn!(
                "ignoring split of quadtree node at level {}: already split",
                self.level
            );
            return Err(QuadtreeError::AlreadySplit { level: self.level });
        }
        self.split_unchecked();
        Ok(())
    }

    fn split_unchecked(&mut self) {
        let level = self.level + 1;
        let width = (self.area.width / 2.0).round();
        let height = (self.area.height / 2.0).round();
        let (x, y) = (self.area.x, self.area.y);

        let top_right = Rectangle::new(x + width, y, width, height);
        let top_left = Rectangle::new(x, y, width, height);
        let bottom_left = Rectangle::new(x, y + height, width, height);
        let bottom_right = Rectangle::new(x + width, y + height, width, height);

        self.nodes.reserve_exact(4);
        for area in [top_right, top_left, bottom_left, bottom_right] {
            self.nodes.push(Self::with_level(area, self.config, level));
        }
        log::trace!("split quadtree node {:?} into level {}", self.area, level);
    }

    /// Which single quadrant of this node `rect` fits in, if any.
    ///
    /// Top, left and right require both edges of `rect` to sit strictly on
    /// one side of the midpoint. Bottom only looks at the top edge, so a box
    /// starting below the midpoint counts as bottom even when it hangs past
    /// the node.
    pub fn index_of(&self, rect: &Rectangle) -> Option<Quadrant> {
        let vertical_midpoint = self.area.center_x();
        let horizontal_midpoint = self.area.center_y();

        let fits_top = rect.y < horizontal_midpoint && rect.bottom() < horizontal_midpoint;
        let fits_bottom = rect.y > horizontal_midpoint;
        let fits_left = rect.x < vertical_midpoint && rect.right() < vertical_midpoint;
        let fits_right = rect.x > vertical_midpoint;

        if fits_top && fits_right {
            Some(Quadrant::TopRight)
        } else if fits_top && fits_left {
            Some(Quadrant::TopLeft)
        } else if fits_bottom && fits_left {
            Some(Quadrant::BottomLeft)
        } else if fits_bottom && fits_right {
            Some(Quadrant::BottomRight)
        } else {
            None
        }
    }

    pub fn insert(&mut self, value: T, bounds: Rectangle) {
        self.insert_entry(Entry { bounds, value });
    }

    pub fn insert_bounded<B: Bounded + ?Sized>(&mut self, value: T, shape: &B) {
        self.insert(value, shape.bounding_box());
    }

    fn insert_entry(&mut self, entry: Entry<T>) {
        // If we already split, hand the entry to the child it fits in
        if self.is_split() {
            if let Some(quadrant) = self.index_of(&entry.bounds) {
                self.nodes[quadrant.index()].insert_entry(entry);
                return;
            }
        }

        self.objects.push(entry);

        if self.objects.len() > self.config.max_objects && self.level < self.config.max_levels {
            if !self.is_split() {
                self.split_unchecked();
            }

            // Single pass: whatever straddles a midpoint stays here.
            let mut i = 0;
            while i < self.objects.len() {
                match self.index_of(&self.objects[i].bounds) {
                    Some(quadrant) => {
                        let entry = self.objects.remove(i);
                        self.nodes[quadrant.index()].insert_entry(entry);
                    }
                    None => i += 1,
                }
            }
        }
    }

    // Empty this node and drop every child; the node stays usable
    pub fn clear(&mut self) {
        self.objects.clear();
        for node in &mut self.nodes {
            node.clear();
        }
        self.nodes.clear();
    }

    // Retrieve all node bounding boxes, parents before children
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        bounding_boxes.push(self.area);
        for node in &self.nodes {
            node.all_node_bounding_boxes(bounding_boxes);
        }
    }
}

impl<T: Clone> QuadTree<T> {
    /// Broad-phase candidates for `rect`: everything held at each visited
    /// node, descending into one child when `rect` fits a quadrant and into
    /// all four when it does not.
    pub fn could_collide_with(&self, rect: &Rectangle, candidates: &mut Vec<Entry<T>>) {
        candidates.extend(self.objects.iter().cloned());

        if !self.is_split() {
            return;
        }

        match self.index_of(rect) {
            Some(quadrant) => self.nodes[quadrant.index()].could_collide_with(rect, candidates),
            None => {
                for node in &self.nodes {
                    node.could_collide_with(rect, candidates);
                }
            }
        }
    }

    // Every entry in the tree, depth first: local entries, then children in quadrant order
    pub fn all(&self, entries: &mut Vec<Entry<T>>) {
        entries.extend(self.objects.iter().cloned());
        for node in &self.nodes {
            node.all(entries);
        }
    }
}

/// Builds a root node holding `T`. Building without an area is an error.
#[derive(Debug, Clone)]
pub struct QuadTreeBuilder<T> {
    area: Option<Rectangle>,
    config: Config,
    marker: PhantomData<T>,
}

impl<T> Default for QuadTreeBuilder<T> {
    fn default() -> Self {
        QuadTreeBuilder {
            area: None,
            config: Config::default(),
            marker: PhantomData,
        }
    }
}

impl<T> QuadTreeBuilder<T> {
    pub fn area(mut self, area: Rectangle) -> Self {
        self.area = Some(area);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn max_objects(mut self, max_objects: usize) -> Self {
        self.config.max_objects = max_objects;
        self
    }

    pub fn max_levels(mut self, max_levels: usize) -> Self {
        self.config.max_levels = max_levels;
        self
    }

    pub fn build(self) -> QuadtreeResult<QuadTree<T>> {
        match self.area {
            Some(area) => QuadTree::new_with_config(area, self.config),
            None => {
                log::error!("cannot build quadtree: {}", QuadtreeError::MissingArea);
                Err(QuadtreeError::MissingArea)
            }
        }
    }
}
