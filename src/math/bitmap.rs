// Copyright @glimmer authors 2025

use super::constants::Vector3f;

use std::fmt;
use std::ops;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    Empty,
    RaggedRow { row: usize },
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::Empty => write!(f, "bitmap must have at least one row and one column"),
            BitmapError::RaggedRow { row } => {
                write!(f, "bitmap row {} differs in length from row 0", row)
            }
        }
    }
}

impl std::error::Error for BitmapError {}

/// Rectangular grid of RGB pixels. Components are stored as floats in
/// [0, 255] and truncated to integers at serialization time.
#[derive(Debug, Clone)]
pub struct Bitmap {
    data: Vec<Vector3f>,
    height: usize,
    width: usize,
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = Vector3f;

    // index is (x, y) = (column, row)
    fn index(&self, index: (usize, usize)) -> &Vector3f {
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Vector3f {
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn filled(width: usize, height: usize, value: Vector3f) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Vector3f::new(0.0, 0.0, 0.0))
    }

    /// Build a bitmap from rows of pixels, validating that the grid is
    /// non-empty and that every row has the same length.
    pub fn from_rows(rows: Vec<Vec<Vector3f>>) -> Result<Self, BitmapError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(BitmapError::Empty);
        }
        let width = rows[0].len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BitmapError::RaggedRow { row: index });
            }
        }

        let height = rows.len();
        let mut data = Vec::with_capacity(width * height);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/* Tests for Bitmap */
