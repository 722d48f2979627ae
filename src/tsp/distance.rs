//! Dense distance matrix.

/// A dense n×n distance matrix stored in row-major order.
///
/// The solver only reads it. Symmetry and a zero diagonal are assumed but
/// not enforced; call [`validate`](DistanceMatrix::validate) at the input
/// boundary to check them.
///
/// # Examples
///
/// ```
/// use u_tsp::tsp::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from `(x, y)` coordinates.
    pub fn from_coordinates(coordinates: &[(f64, f64)]) -> Self {
        let n = coordinates.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (xi, yi) = coordinates[i];
                let (xj, yj) = coordinates[j];
                let d = (xi - xj).hypot(yi - yj);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Builds a matrix from explicit rows.
    ///
    /// Returns `Err` if the rows do not form a square matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(format!(
                    "row {i} has {} values, expected {size}",
                    row.len()
                ));
            }
            data.extend(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks the assumptions the solver makes about its input: finite,
    /// non-negative entries, a zero diagonal, and symmetry within `tol`.
    pub fn validate(&self, tol: f64) -> Result<(), String> {
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.get(i, j);
                if !d.is_finite() || d < 0.0 {
                    return Err(format!(
                        "distance[{i}][{j}] = {d} is not a finite non-negative value"
                    ));
                }
            }
            if self.get(i, i).abs() > tol {
                return Err(format!("distance[{i}][{i}] = {} is not zero", self.get(i, i)));
            }
        }
        if !self.is_symmetric(tol) {
            return Err("distance matrix is not symmetric".into());
        }
        Ok(())
    }
}
