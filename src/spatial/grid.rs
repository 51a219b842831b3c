//! Tile grid storage and the flat cell-sequence codec
//!
//! Tile-map layers store their cells as one delimiter-joined run of
//! identifiers in row-major order. [`TileGrid::decode`] turns that run into
//! a `height x width` matrix and [`TileGrid::encode`] writes it back out in
//! exactly the same shape.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, format_error};

/// Tile identifier stored in a grid cell (0 = empty)
pub type TileId = u32;

/// Rectangular grid of tile identifiers
///
/// Indexed as `(row, col)` with `rows == height` and `cols == width`.
/// The shape is fixed at construction; only cell values change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<TileId>,
}

impl TileGrid {
    /// Wrap an existing matrix of identifiers
    pub const fn from_array(cells: Array2<TileId>) -> Self {
        Self { cells }
    }

    /// Build a grid from nested rows
    ///
    /// # Errors
    ///
    /// Returns a format error if the rows are ragged or there are none
    pub fn from_rows(rows: &[Vec<TileId>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(format_error(&"grid must have at least one column"));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(format_error(&format!(
                "row {index} has {} cells, expected {width}",
                row.len()
            )));
        }

        let flat: Vec<TileId> = rows.iter().flatten().copied().collect();
        Array2::from_shape_vec((height, width), flat)
            .map(Self::from_array)
            .map_err(|e| format_error(&e))
    }

    /// Parse a delimiter-joined identifier sequence into a grid
    ///
    /// Tokens are trimmed, so line breaks between rows are accepted. The
    /// sequence must contain exactly `width * height` tokens.
    ///
    /// # Errors
    ///
    /// Returns a format error if a dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`, a token is not an identifier, or the token
    /// count does not match the declared dimensions
    pub fn decode(text: &str, delimiter: char, width: usize, height: usize) -> Result<Self> {
        validate_dimension("width", width)?;
        validate_dimension("height", height)?;

        let expected = width * height;
        let mut flat = Vec::with_capacity(expected);
        for (index, token) in text.trim().split(delimiter).enumerate() {
            let token = token.trim();
            let id = token.parse::<TileId>().map_err(|e| {
                format_error(&format!("token {index} ('{token}') is not a tile id: {e}"))
            })?;
            flat.push(id);
        }

        if flat.len() != expected {
            return Err(format_error(&format!(
                "found {} cells, expected {expected} for a {width}x{height} grid",
                flat.len()
            )));
        }

        Array2::from_shape_vec((height, width), flat)
            .map(Self::from_array)
            .map_err(|e| format_error(&e))
    }

    /// Serialize the grid as a delimiter-joined sequence in row-major order
    ///
    /// The separator is written between cells only, so the output never
    /// starts or ends with `delimiter`.
    pub fn encode(&self, delimiter: char) -> String {
        let last = self.cells.len().saturating_sub(1);
        let mut text = String::with_capacity(self.cells.len() * 4);
        for (index, id) in self.cells.iter().enumerate() {
            text.push_str(&id.to_string());
            if index != last {
                text.push(delimiter);
            }
        }
        text
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Identifier at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<TileId> {
        self.cells.get((row, col)).copied()
    }

    /// Overwrite the identifier at `(row, col)`
    ///
    /// Returns `false` and leaves the grid untouched when the position is
    /// outside the grid.
    pub fn set(&mut self, row: usize, col: usize, id: TileId) -> bool {
        self.cells.get_mut((row, col)).map(|cell| *cell = id).is_some()
    }

    /// Whether `(row, col)` lies inside the grid and holds a non-zero id
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|id| id != 0)
    }

    /// Count of non-zero cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&id| id != 0).count()
    }
}

fn validate_dimension(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(format_error(&format!("{name} must be positive")));
    }
    if value > MAX_GRID_DIMENSION {
        return Err(format_error(&format!(
            "{name} {value} exceeds the maximum of {MAX_GRID_DIMENSION}"
        )));
    }
    Ok(())
}
