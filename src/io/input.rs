//! Line-oriented instance parser.
//!
//! Layout:
//!
//! ```text
//! <label line, kept but unused>
//! <n>
//! <x> <y>            (n lines)
//! <d_0> ... <d_n-1>  (n lines, one matrix row each)
//! ```
//!
//! Tokens are whitespace separated. Blank lines between records are skipped.

use std::io::BufRead;

use anyhow::{anyhow, bail, Context, Result};

use crate::tsp::DistanceMatrix;

/// A parsed TSP instance.
#[derive(Debug, Clone)]
pub struct TspInstance {
    /// Content of the first line (for example `euclidean`).
    pub label: String,
    /// City coordinates, one per city.
    pub coordinates: Vec<(f64, f64)>,
    /// Pairwise distances.
    pub distances: DistanceMatrix,
}

impl TspInstance {
    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.distances.size()
    }

    /// Checks the distance matrix (zero diagonal, symmetry, non-negative).
    pub fn validate(&self, tol: f64) -> Result<()> {
        self.distances.validate(tol).map_err(|e| anyhow!(e))
    }
}

/// Parses an instance from a reader.
pub fn parse_instance<R: BufRead>(reader: R) -> Result<TspInstance> {
    let mut lines = Lines::new(reader);

    let label = lines
        .next_raw()?
        .ok_or_else(|| anyhow!("empty input: missing label line"))?
        .1
        .trim()
        .to_string();

    let (line_no, count_line) = lines.next_record("city count")?;
    let n: usize = count_line
        .trim()
        .parse()
        .with_context(|| format!("line {line_no}: invalid city count {:?}", count_line.trim()))?;

    let mut coordinates = Vec::new();
    for i in 0..n {
        let (line_no, line) = lines.next_record(&format!("coordinates of city {i}"))?;
        let values = parse_numbers(&line, line_no)?;
        let [x, y] = values[..] else {
            bail!(
                "line {line_no}: expected 2 coordinates for city {i}, found {}",
                values.len()
            );
        };
        coordinates.push((x, y));
    }

    let mut rows = Vec::new();
    for i in 0..n {
        let (line_no, line) = lines.next_record(&format!("distance row {i}"))?;
        let row = parse_numbers(&line, line_no)?;
        if row.len() != n {
            bail!(
                "line {line_no}: expected {n} distances in row {i}, found {}",
                row.len()
            );
        }
        rows.push(row);
    }

    let distances = DistanceMatrix::from_rows(rows).map_err(|e| anyhow!(e))?;
    Ok(TspInstance {
        label,
        coordinates,
        distances,
    })
}

/// Parses an instance from a string.
pub fn parse_instance_str(input: &str) -> Result<TspInstance> {
    parse_instance(input.as_bytes())
}

fn parse_numbers(line: &str, line_no: usize) -> Result<Vec<f64>> {
    line.split_whitespace()
        .map(|tok| {
            tok.parse::<f64>()
                .with_context(|| format!("line {line_no}: invalid number {tok:?}"))
        })
        .collect()
}

/// Line reader that tracks 1-based line numbers.
struct Lines<R> {
    inner: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line_no: 0,
        }
    }

    fn next_raw(&mut self) -> Result<Option<(usize, String)>> {
        match self.inner.next() {
            Some(line) => {
                self.line_no += 1;
                let line = line.with_context(|| format!("line {}: read failed", self.line_no))?;
                Ok(Some((self.line_no, line)))
            }
            None => Ok(None),
        }
    }

    /// Next non-blank line; `what` names the expected record in the error.
    fn next_record(&mut self, what: &str) -> Result<(usize, String)> {
        while let Some((line_no, line)) = self.next_raw()? {
            if !line.trim().is_empty() {
                return Ok((line_no, line));
            }
        }
        Err(anyhow!("unexpected end of input: missing {what}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &str = "euclidean
5
10.391379 8.405525
14.780237 7.036543
1.511838 6.366090
9.276912 5.418818
11.376465 4.216809
0.0 4.597411 9.110738 3.187861 4.302992
4.597411 0.0 13.285327 5.736168 4.420019
9.110738 13.285327 0.0 7.822640 10.096052
3.187861 5.736168 7.822640 0.0 2.419287
4.302992 4.420019 10.096052 2.419287 0.0
";

    #[test]
    fn test_parse_five_cities() {
        let inst = parse_instance_str(FIVE).expect("well formed");
        assert_eq!(inst.label, "euclidean");
        assert_eq!(inst.num_cities(), 5);
        assert_eq!(inst.coordinates[2], (1.511838, 6.366090));
        assert_eq!(inst.distances.get(1, 2), 13.285327);
        assert!(inst.validate(1e-9).is_ok());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "\n\n2\n\n0 0\n3 4\n\n0 5\n5 0\n";
        let inst = parse_instance_str(input).expect("well formed");
        assert_eq!(inst.label, "");
        assert_eq!(inst.num_cities(), 2);
        assert_eq!(inst.distances.get(0, 1), 5.0);
    }

    #[test]
    fn test_missing_row() {
        let input = "x\n2\n0 0\n1 1\n0 1\n";
        let err = parse_instance_str(input).unwrap_err().to_string();
        assert!(err.contains("distance row 1"), "{err}");
    }

    #[test]
    fn test_short_row_names_line() {
        let input = "x\n2\n0 0\n1 1\n0 1\n1\n";
        let err = parse_instance_str(input).unwrap_err().to_string();
        assert!(err.contains("line 6"), "{err}");
    }

    #[test]
    fn test_bad_coordinate_count() {
        let input = "x\n2\n0 0 0\n1 1\n0 1\n1 0\n";
        let err = parse_instance_str(input).unwrap_err().to_string();
        assert!(err.contains("expected 2 coordinates"), "{err}");
    }

    #[test]
    fn test_bad_number() {
        let input = "x\n2\n0 abc\n1 1\n0 1\n1 0\n";
        let err = parse_instance_str(input).unwrap_err().to_string();
        assert!(err.contains("invalid number"), "{err}");
    }

    #[test]
    fn test_bad_count() {
        let err = parse_instance_str("x\nfive\n").unwrap_err().to_string();
        assert!(err.contains("invalid city count"), "{err}");
    }

    #[test]
    fn test_huge_count_with_short_input() {
        let err = parse_instance_str("x\n18446744073709551615\n0 0\n")
            .unwrap_err()
            .to_string();
        assert!(err.contains("missing coordinates of city 1"), "{err}");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_instance_str("").is_err());
    }

    #[test]
    fn test_asymmetric_fails_validation() {
        let input = "x\n2\n0 0\n1 1\n0 1\n2 0\n";
        let inst = parse_instance_str(input).expect("well formed");
        assert!(inst.validate(1e-9).is_err());
    }
}
