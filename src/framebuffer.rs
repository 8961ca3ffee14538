//! Grayscale framebuffer engine
//!
//! A [`Framebuffer`] is a 5x5 grid of brightness cells owned by a single
//! animation. It supports painting radial gradients, additive composition of
//! two buffers, dimming and horizontal scrolling.
//!
//! Two instantiations are provided:
//! - [`QuantizedFramebuffer`] stores device levels and clips on every write
//! - [`FloatFramebuffer`] stores float intensities and clips only in
//!   [`Framebuffer::render`]

use crate::cell::{Cell, DimCurve};
use crate::grid::{SIZE, distance_squared, offset_index};
use crate::image::DeviceImage;

/// Direction of a horizontal scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moves towards column 0, new columns appear on the right
    Left,
    /// Content moves towards the last column, new columns appear on the left
    Right,
}

/// Framebuffer holding device levels (0-9), clamped on every write
pub type QuantizedFramebuffer = Framebuffer<u8>;

/// Framebuffer holding float intensities (1.0 = full), clamped on render
pub type FloatFramebuffer = Framebuffer<f32>;

/// 5x5 grid of brightness cells
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer<T: Cell> {
    grid: [[T; SIZE]; SIZE],
    dim_curve: DimCurve,
}

impl<T: Cell> Default for Framebuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Cell> Framebuffer<T> {
    /// Create an empty framebuffer with all cells off
    pub const fn new() -> Self {
        Self {
            grid: [[T::ZERO; SIZE]; SIZE],
            dim_curve: T::DIM_CURVE,
        }
    }

    /// Use a different curve for [`Framebuffer::dim`]
    #[must_use]
    pub fn with_dim_curve(mut self, curve: DimCurve) -> Self {
        self.dim_curve = curve;
        self
    }

    /// Curve currently used for dimming
    pub const fn dim_curve(&self) -> DimCurve {
        self.dim_curve
    }

    /// Set every cell to zero
    pub fn clear(&mut self) {
        self.grid = [[T::ZERO; SIZE]; SIZE];
    }

    /// Read a single cell
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside the grid.
    pub fn cell(&self, row: usize, column: usize) -> T {
        self.grid[row][column]
    }

    /// Write a single cell, leaving its neighbors untouched
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is outside the grid.
    pub fn set_cell(&mut self, row: usize, column: usize, value: T) {
        self.grid[row][column] = value.normalize();
    }

    /// Write every cell of a row
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the grid.
    pub fn fill_row(&mut self, row: usize, value: T) {
        self.grid[row].fill(value.normalize());
    }

    /// All rows of the grid, top to bottom
    pub const fn rows(&self) -> &[[T; SIZE]; SIZE] {
        &self.grid
    }

    /// Paint a radial gradient centered at a (possibly fractional) point
    ///
    /// Every cell is overwritten with `peak - falloff * d2`, where `d2` is the
    /// squared distance from the cell to the point.
    pub fn splat_point(&mut self, row: f32, column: f32, peak: T, falloff: f32) {
        let peak = peak.normalize().intensity();
        for (cell_row, cells) in self.grid.iter_mut().enumerate() {
            for (cell_column, cell) in cells.iter_mut().enumerate() {
                let d2 = distance_squared(row, column, cell_row, cell_column);
                *cell = T::from_gradient(peak - falloff * d2);
            }
        }
    }

    /// Add another buffer into this one, shifted by the given offsets
    ///
    /// Destination cell `(r, c)` receives source cell
    /// `(r + row_offset, c + column_offset)`. Destination cells whose source
    /// falls outside the grid are left as they are.
    pub fn compose_add(&mut self, other: &Self, row_offset: isize, column_offset: isize) {
        for (row, cells) in self.grid.iter_mut().enumerate() {
            let Some(source_row) = offset_index(row, row_offset) else {
                continue;
            };
            let source = &other.grid[source_row];
            for (column, cell) in cells.iter_mut().enumerate() {
                let Some(source_column) = offset_index(column, column_offset) else {
                    continue;
                };
                *cell = cell.accumulate(source[source_column]);
            }
        }
    }

    /// Scale every cell by `factor` using the buffer's dim curve
    pub fn dim(&mut self, factor: f32) {
        let curve = self.dim_curve;
        for cell in self.grid.iter_mut().flatten() {
            *cell = cell.dim(factor, curve);
        }
    }

    /// Shift every row horizontally by `count` columns
    ///
    /// Columns shifted past the edge are dropped and the exposed columns are
    /// set to `fill`. Counts above the grid width behave like the full width.
    pub fn scroll(&mut self, direction: ScrollDirection, count: usize, fill: T) {
        let count = count.min(SIZE);
        if count == 0 {
            return;
        }
        let fill = fill.normalize();
        for row in &mut self.grid {
            match direction {
                ScrollDirection::Left => {
                    row.copy_within(count.., 0);
                    row[SIZE - count..].fill(fill);
                }
                ScrollDirection::Right => {
                    row.copy_within(..SIZE - count, count);
                    row[..count].fill(fill);
                }
            }
        }
    }

    /// Scroll left, see [`Framebuffer::scroll`]
    pub fn scroll_left(&mut self, count: usize, fill: T) {
        self.scroll(ScrollDirection::Left, count, fill);
    }

    /// Scroll right, see [`Framebuffer::scroll`]
    pub fn scroll_right(&mut self, count: usize, fill: T) {
        self.scroll(ScrollDirection::Right, count, fill);
    }

    /// Quantize the buffer into device levels
    ///
    /// The buffer itself is not modified.
    pub fn render(&self) -> DeviceImage {
        let mut levels = [[0; SIZE]; SIZE];
        for (target, source) in levels.iter_mut().zip(self.grid.iter()) {
            for (level, cell) in target.iter_mut().zip(source.iter()) {
                *level = cell.to_level();
            }
        }
        DeviceImage::from_rows(levels)
    }
}
