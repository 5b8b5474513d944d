//! Property tests for the algebraic identities of the matrix operations.

use densemat::{
    Matrix, MatShape, chain_multiply, copy_into, correlate, relu, scale, sigmoid,
};
use proptest::prelude::*;

fn matrix(max: usize) -> impl Strategy<Value = Matrix> {
    (1..=max, 1..=max).prop_flat_map(|(r, c)| {
        prop::collection::vec(-100.0f32..100.0, r * c)
            .prop_map(move |v| Matrix::from_buffer(r, c, Some(&v)).unwrap())
    })
}

proptest! {
    #[test]
    fn identity_is_neutral_on_both_sides(m in matrix(6)) {
        let left = Matrix::identity(m.rows()).unwrap();
        let right = Matrix::identity(m.cols()).unwrap();
        prop_assert_eq!(&chain_multiply([&left, &m]).unwrap(), &m);
        prop_assert_eq!(&chain_multiply([&m, &right]).unwrap(), &m);
    }

    #[test]
    fn unit_kernel_correlation_is_scaling(m in matrix(6), k in -10.0f32..10.0) {
        let kernel = Matrix::from_buffer(1, 1, Some(&[k])).unwrap();
        let corr = correlate(&m, &kernel).unwrap();

        let mut scaled = Matrix::zeros(m.rows(), m.cols()).unwrap();
        copy_into(&mut scaled, &m).unwrap();
        scale(&mut scaled, k);
        prop_assert_eq!(corr, scaled);
    }

    #[test]
    fn copy_is_deep(m in matrix(5), delta in 1.0f32..5.0) {
        let mut dest = Matrix::zeros(m.rows(), m.cols()).unwrap();
        copy_into(&mut dest, &m).unwrap();
        let before = m.clone();
        dest[(0, 0)] += delta;
        prop_assert_eq!(&m, &before);
        prop_assert_ne!(&dest, &m);
    }

    #[test]
    fn scale_by_one_and_zero(m in matrix(5)) {
        let mut same = m.clone();
        scale(&mut same, 1.0);
        prop_assert_eq!(&same, &m);
        scale(&mut same, 0.0);
        prop_assert!(same.to_vec().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn activation_ranges(
        x in prop::num::f32::POSITIVE
            | prop::num::f32::NEGATIVE
            | prop::num::f32::NORMAL
            | prop::num::f32::ZERO
    ) {
        let s = sigmoid(x);
        prop_assert!(s > 0.0 && s < 1.0);
        let r = relu(x);
        prop_assert!(r >= 0.0);
        if x > 0.0 {
            prop_assert_eq!(r, x);
        }
    }

    #[test]
    fn correlation_output_shape(m in matrix(6), kr in 1usize..4, kc in 1usize..4) {
        let kernel = Matrix::zeros(kr, kc).unwrap();
        match correlate(&m, &kernel) {
            Ok(out) => prop_assert_eq!(out.shape(), (m.rows() - kr + 1, m.cols() - kc + 1)),
            Err(_) => prop_assert!(kr > m.rows() || kc > m.cols()),
        }
    }
}
