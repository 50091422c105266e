use crate::biomes::BiomeLabel;

/// A dense 2D grid stored row-major. Coordinates outside `[0, width) x [0, height)`
/// are a programming error and panic.
#[derive(Clone, Debug, PartialEq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "tile ({}, {}) out of bounds for {}x{} map",
            x, y, self.width, self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut T {
        let idx = self.index(x, y);
        &mut self.data[idx]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Fill the entire map with a value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Signed bounds check, for stamping code that walks off the edge.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Set a tile given signed coordinates, ignoring anything off the map.
    /// Returns whether the tile was written.
    pub fn set_clipped(&mut self, x: i32, y: i32, value: T) -> bool {
        if self.in_bounds(x, y) {
            self.set(x as usize, y as usize, value);
            true
        } else {
            false
        }
    }

    /// Get 8-connected neighbors. Edges do not wrap, so corner cells have 3
    /// neighbors and edge cells have 5.
    pub fn neighbors_8(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut result = Vec::with_capacity(8);

        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if self.in_bounds(nx, ny) {
                    result.push((nx as usize, ny as usize));
                }
            }
        }

        result
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            (idx % width, idx / width, val)
        })
    }

    /// Iterate mutably over all cells with their coordinates.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            (idx % width, idx / width, val)
        })
    }

    /// Raw row-major cell values.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy a row-major vector into a map. Panics if the length does not match.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), width * height, "data length does not match {}x{}", width, height);
        Self { width, height, data }
    }
}

impl Tilemap<f32> {
    /// Smallest and largest value in the field.
    pub fn min_max(&self) -> (f32, f32) {
        let mut min_v = f32::MAX;
        let mut max_v = f32::MIN;
        for &v in &self.data {
            if v < min_v { min_v = v; }
            if v > max_v { max_v = v; }
        }
        (min_v, max_v)
    }
}

/// A mutable view of a biome grid owned by a collaborator (editor canvas, game map).
///
/// Generation overwrites every cell through `set_tile` and then calls `mark_dirty`
/// once so that cached render state can be rebuilt.
pub trait TileGrid {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn get_tile(&self, x: usize, y: usize) -> BiomeLabel;
    fn set_tile(&mut self, x: usize, y: usize, biome: BiomeLabel);

    fn mark_dirty(&mut self) {}
}

impl TileGrid for Tilemap<BiomeLabel> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_tile(&self, x: usize, y: usize) -> BiomeLabel {
        *self.get(x, y)
    }

    fn set_tile(&mut self, x: usize, y: usize, biome: BiomeLabel) {
        self.set(x, y, biome);
    }
}
