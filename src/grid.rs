//! Matrix geometry

/// Number of rows and columns of the LED matrix
pub const SIZE: usize = 5;

/// Number of LEDs in the matrix
pub const LED_COUNT: usize = SIZE * SIZE;

/// Index of the center row and column
pub const CENTER: usize = SIZE / 2;

/// Last valid row or column index
pub const LAST: usize = SIZE - 1;

/// Shift an index by a signed offset
///
/// Returns `None` if the shifted index falls outside the matrix.
#[inline]
pub fn offset_index(index: usize, offset: isize) -> Option<usize> {
    let shifted = index.checked_add_signed(offset)?;
    if shifted < SIZE { Some(shifted) } else { None }
}

/// Squared euclidean distance between a (possibly fractional) point and a cell
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn distance_squared(row: f32, column: f32, cell_row: usize, cell_column: usize) -> f32 {
    let dr = row - cell_row as f32;
    let dc = column - cell_column as f32;
    dr * dr + dc * dc
}

/// Center of the matrix as a point coordinate
#[allow(clippy::cast_precision_loss)]
pub const CENTER_POINT: f32 = CENTER as f32;

/// Last valid index as a point coordinate
#[allow(clippy::cast_precision_loss)]
pub const LAST_POINT: f32 = LAST as f32;
