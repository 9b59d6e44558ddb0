use linalg::prelude::*;
use rand::{distributions::Uniform, SeedableRng};
use rand_pcg::Pcg32;

const ROUNDS: usize = 200;

fn rng() -> Pcg32 {
    Pcg32::seed_from_u64(0x5eed)
}

fn small_ints() -> Uniform<i64> {
    Uniform::new_inclusive(-1000, 1000)
}

#[test]
fn dot_is_commutative() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let u = FixedVector::<5, i64>::sample(&mut rng, &small_ints());
        let v = FixedVector::<5, i64>::sample(&mut rng, &small_ints());
        assert_eq!(dot(&u, &v), dot(&v, &u));
    }
}

#[test]
fn normalized_has_unit_magnitude() {
    let mut rng = rng();
    let dist = Uniform::new(-100.0_f64, 100.0);
    for _ in 0..ROUNDS {
        let v = FixedVector::<4, f64>::sample(&mut rng, &dist);
        if v.magnitude() == 0.0 {
            continue;
        }
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-12);
    }
    for _ in 0..ROUNDS {
        let v = FixedVector::<3, i64>::sample(&mut rng, &small_ints());
        if v.iter().all(|&c| c == 0) {
            continue;
        }
        assert!((v.normalize().magnitude() - 1.0).abs() < 1e-12);
    }
}

#[test]
fn addition_is_component_wise() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let u = FixedVector::<6, i64>::sample(&mut rng, &small_ints());
        let v = FixedVector::<6, i64>::sample(&mut rng, &small_ints());
        let sum = u + v;
        for i in 0..6 {
            assert_eq!(sum[i], u[i] + v[i]);
        }
    }
}

#[test]
fn cross_3d_is_anti_commutative() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let u = Vector3::<i64>::sample(&mut rng, &small_ints());
        let v = Vector3::<i64>::sample(&mut rng, &small_ints());
        assert_eq!(cross(&u, &v), -cross(&v, &u));
        assert_eq!(cross(&u, &u), Vector3::zero());
    }
}

#[test]
fn cross_2d_is_anti_commutative_scalar() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let u = Vector2::<i64>::sample(&mut rng, &small_ints());
        let v = Vector2::<i64>::sample(&mut rng, &small_ints());
        let uv: i64 = cross(&u, &v);
        assert_eq!(uv, -cross(&v, &u));
    }
}

#[test]
fn transpose_swaps_indices() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let m = FixedMatrix::<3, 5, i64>::sample(&mut rng, &small_ints());
        let t: FixedMatrix<5, 3, i64> = m.transpose();
        for i in 0..3 {
            for j in 0..5 {
                assert_eq!(t[(j, i)], m[(i, j)]);
            }
        }
        assert_eq!(t.transpose(), m);
    }
}

#[test]
fn product_with_transpose_is_symmetric() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let m = FixedMatrix::<4, 2, i64>::sample(&mut rng, &small_ints());
        let p = m * m.transpose();
        assert!(p.is_symmetric());
    }
}

#[test]
fn short_and_long_initializers() {
    let v = FixedVector::<3, i32>::from_values(&[1, 2]).unwrap();
    assert_eq!(v[2], 0);
    assert_eq!(v.z(), 0);
    assert!(matches!(
        FixedVector::<2, i32>::from_values(&[1, 2, 3]),
        Err(LinalgError::TooManyComponents {
            expected: 2,
            actual: 3
        })
    ));
}

#[test]
fn vector_walkthrough() {
    let v1 = FixedVector::<2, f32>::from_values(&[1.0, 2.0]).unwrap();
    let v2 = FixedVector::<2, f32>::from_values(&[2.0, 1.0]).unwrap();

    assert_eq!(v1 + v1, Vector2::new(2.0, 4.0));
    assert_eq!(dot(&v1, &v1), 5.0);
    assert!((v1.magnitude() - 2.236).abs() < 1e-3);
    assert!((dot(&v1.normalize(), &v1.normalize()) - 1.0).abs() < 1e-6);
    assert_eq!(cross(&v1, &v2), -3.0);
}

#[test]
fn matrix_walkthrough() {
    let mat = FixedMatrix::<3, 3, f32>::from_rows(&[
        &[1.0, 2.0, 3.0],
        &[4.0, 5.0, 6.0],
        &[7.0, 8.0, 9.0],
    ])
    .unwrap();
    let mat_t = mat.transpose();
    assert_eq!(
        mat_t,
        FixedMatrix::from([[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]])
    );

    let product = mat * mat_t;
    assert_eq!(product[(0, 0)], 14.0);
    assert!(product.is_symmetric());

    let identity = SquareMatrix::<3, f32>::identity();
    assert_eq!(
        identity,
        FixedMatrix::from([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    );
    assert_eq!(identity.transpose(), identity);
}
