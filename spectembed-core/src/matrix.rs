//! Dense row-major matrix storage and the flat-buffer primitives shared by
//! every stage.
//!
//! Dimensions are always carried next to the buffer and never inferred from
//! its length. Entry (i, j) lives at `data[i * cols + j]`.

/// Dense row-major `f64` matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    /// Zero-filled matrix. All stages start from this so logically-diagonal
    /// outputs never carry stale off-diagonal values.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// n x n identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert!(
            data.len() == rows * cols,
            "buffer length {} does not match shape ({rows}, {cols})",
            data.len()
        );
        Self { data, rows, cols }
    }

    /// Build from a slice of equally-sized rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let n = rows.len();
        let d = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n * d);
        for row in rows {
            assert!(
                row.len() == d,
                "ragged input: expected row of length {d}, got {}",
                row.len()
            );
            data.extend_from_slice(row);
        }
        Self { data, rows: n, cols: d }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    /// Row i as a contiguous slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Main diagonal (square matrices).
    pub fn diagonal(&self) -> Vec<f64> {
        assert!(self.is_square(), "diagonal of a {}x{} matrix", self.rows, self.cols);
        (0..self.rows).map(|i| self.get(i, i)).collect()
    }

    /// Dense product `self * other`.
    pub fn matmul(&self, other: &DenseMatrix) -> DenseMatrix {
        assert!(
            self.cols == other.rows,
            "matmul shape mismatch: ({}, {}) * ({}, {})",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        let mut out = DenseMatrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * other.cols + j] = acc;
            }
        }
        out
    }

    /// Entrywise `self + other`.
    pub fn add(&self, other: &DenseMatrix) -> DenseMatrix {
        self.zip_with(other, |a, b| a + b)
    }

    /// Entrywise `self - other`.
    pub fn sub(&self, other: &DenseMatrix) -> DenseMatrix {
        self.zip_with(other, |a, b| a - b)
    }

    fn zip_with(&self, other: &DenseMatrix, f: impl Fn(f64, f64) -> f64) -> DenseMatrix {
        assert!(
            self.rows == other.rows && self.cols == other.cols,
            "shape mismatch: ({}, {}) vs ({}, {})",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );
        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// Smallest value in a non-empty slice.
pub fn min_value(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "min of empty slice");
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value in a non-empty slice.
pub fn max_value(values: &[f64]) -> f64 {
    assert!(!values.is_empty(), "max of empty slice");
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Index of the smallest value; the first one wins on ties.
pub fn argmin(values: &[f64]) -> usize {
    assert!(!values.is_empty(), "argmin of empty slice");
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < values[best] {
            best = i;
        }
    }
    best
}

/// Index of the largest value; the first one wins on ties.
pub fn argmax(values: &[f64]) -> usize {
    assert!(!values.is_empty(), "argmax of empty slice");
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}
