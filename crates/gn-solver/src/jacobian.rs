//! Finite difference Jacobian.

use crate::error::SolverResult;
use nalgebra::{DMatrix, DVector};

/// Forward differences; column `j` uses the step `epsilon·max(|x_j|, 1)`.
pub fn finite_difference_jacobian<F>(
    x: &DVector<f64>,
    f: F,
    epsilon: f64,
) -> SolverResult<DMatrix<f64>>
where
    F: Fn(&DVector<f64>) -> SolverResult<DVector<f64>>,
{
    let f_x = f(x)?;
    let mut jac = DMatrix::zeros(f_x.len(), x.len());

    let mut x_perturbed = x.clone();
    for j in 0..x.len() {
        let dx = epsilon * x[j].abs().max(1.0);
        x_perturbed[j] = x[j] + dx;
        let f_perturbed = f(&x_perturbed)?;
        jac.set_column(j, &((f_perturbed - &f_x) / dx));
        x_perturbed[j] = x[j];
    }

    Ok(jac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jacobian_of_linear_map_is_the_matrix() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, -3.0, 0.5]);
        let f = |x: &DVector<f64>| -> SolverResult<DVector<f64>> { Ok(&m * x) };
        let x = DVector::from_vec(vec![0.3, -7.0]);
        let jac = finite_difference_jacobian(&x, f, 1e-7).unwrap();
        assert!((jac - m).amax() < 1e-6);
    }

    #[test]
    fn jacobian_quadratic() {
        let f = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(1, x[0] * x[0]))
        };
        let x = DVector::from_element(1, 3.0);
        let jac = finite_difference_jacobian(&x, f, 1e-7).unwrap();
        assert!((jac[(0, 0)] - 6.0).abs() < 1e-5);
    }
}
