//! Cost matrices for assignment problems.

/// A square matrix of assignment costs.
///
/// Row `r` is an agent and column `c` a task; `cost(r, c)` is the cost of
/// giving task `c` to agent `r`. No symmetry is required. The matrix is
/// immutable once constructed and shared by every node of a search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    n: usize,
    rows: Vec<Vec<f64>>,
}

impl CostMatrix {
    /// Builds a cost matrix from its rows.
    ///
    /// Returns an error for empty or non-square input; malformed matrices
    /// are never silently coerced.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        if rows.is_empty() {
            return Err("cost matrix must not be empty".into());
        }
        let n = rows.len();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(format!(
                    "cost matrix must be square: row {r} has {} columns, expected {n}",
                    row.len()
                ));
            }
        }
        Ok(Self { n, rows })
    }

    /// Side length of the matrix.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Cost of assigning column `col` to row `row`.
    pub fn cost(&self, row: usize, col: usize) -> f64 {
        self.rows[row][col]
    }

    /// From-scratch cost of a complete assignment.
    ///
    /// `assignment[row]` is the column given to `row`. This is the reference
    /// value the incremental swap update must agree with.
    pub fn assignment_cost(&self, assignment: &[usize]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .map(|(row, &col)| self.rows[row][col])
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_square() {
        let m = CostMatrix::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.n(), 2);
        assert_eq!(m.cost(1, 0), 3.0);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(CostMatrix::new(vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_ragged() {
        let err = CostMatrix::new(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.contains("square"), "unexpected message: {err}");
    }

    #[test]
    fn test_new_rejects_non_square() {
        assert!(CostMatrix::new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).is_err());
    }

    #[test]
    fn test_assignment_cost() {
        let m = CostMatrix::new(vec![vec![1.0, 5.0], vec![5.0, 1.0]]).unwrap();
        assert_eq!(m.assignment_cost(&[0, 1]), 2.0);
        assert_eq!(m.assignment_cost(&[1, 0]), 10.0);
    }
}
