//! Tour representation and cyclic cost.

use std::fmt;

use super::distance::DistanceMatrix;
use crate::ga::operators::is_permutation;

/// Total length of the closed tour through `cities`.
///
/// Sums the `n - 1` consecutive edges plus the closing edge from the last
/// city back to the first, so exactly `n` edges are counted. An empty tour
/// costs 0.
///
/// # Panics
/// Panics if a city index is outside the matrix.
pub fn tour_cost(distances: &DistanceMatrix, cities: &[usize]) -> f64 {
    let (Some(&first), Some(&last)) = (cities.first(), cities.last()) else {
        return 0.0;
    };
    let open: f64 = cities
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum();
    open + distances.get(last, first)
}

/// A cyclic visiting order: a permutation of the city indices `0..n`.
///
/// `Display` writes the indices separated by single spaces.
///
/// # Examples
///
/// ```
/// use u_tsp::tsp::{DistanceMatrix, Tour};
///
/// let dm = DistanceMatrix::from_coordinates(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let tour = Tour::new(vec![0, 1, 2, 3]);
/// assert!((tour.cost(&dm) - 4.0).abs() < 1e-10);
/// assert_eq!(tour.to_string(), "0 1 2 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visiting order.
    pub fn new(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// The identity tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Mutable access to the visiting order.
    pub fn cities_mut(&mut self) -> &mut [usize] {
        &mut self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Returns `true` if the tour visits each of `0..n` exactly once.
    pub fn is_valid(&self, n: usize) -> bool {
        is_permutation(&self.cities, n)
    }

    /// Cyclic length of the tour. See [`tour_cost`].
    pub fn cost(&self, distances: &DistanceMatrix) -> f64 {
        tour_cost(distances, &self.cities)
    }

    /// `-cost`: higher is better.
    pub fn fitness(&self, distances: &DistanceMatrix) -> f64 {
        -self.cost(distances)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{city}")?;
        }
        Ok(())
    }
}
