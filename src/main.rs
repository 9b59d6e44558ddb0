use linalg::prelude::*;
use std::process;

macro_rules! print_expression {
    ($e:expr) => {
        println!("{}:\n{}\n", stringify!($e), $e)
    };
}

fn vector_demo() -> Result<(), LinalgError> {
    let v1 = FixedVector::<2, f32>::from_values(&[1.0, 2.0])?;
    let v2 = FixedVector::<2, f32>::from_values(&[2.0, 1.0])?;

    print_expression!(v1);
    print_expression!(v1 + v1);
    print_expression!(dot(&v1, &v1));
    print_expression!(dot(&v1.normalize(), &v1.normalize()));
    print_expression!(v1.magnitude());
    print_expression!(v1.normalize());
    print_expression!(v1.normalize().magnitude());
    print_expression!(cross(&v1, &v2));
    Ok(())
}

fn matrix_demo() -> Result<(), LinalgError> {
    let mat = FixedMatrix::<3, 3, f32>::from_rows(&[
        &[1.0, 2.0, 3.0],
        &[4.0, 5.0, 6.0],
        &[7.0, 8.0, 9.0],
    ])?;
    print_expression!(mat);

    let mat_t = mat.transpose();
    print_expression!(mat_t);
    print_expression!(mat * mat_t);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = vector_demo().and_then(|_| matrix_demo()) {
        log::error!("{}", err);
        process::exit(1);
    }

    log::info!("done");
}
