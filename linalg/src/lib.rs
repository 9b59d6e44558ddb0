mod error;
pub mod glam_ext;
mod matrix;
mod products;
mod random;
mod scalar;
mod serde_impls;
mod vector;

pub use error::LinalgError;
pub use matrix::{FixedMatrix, SquareMatrix};
pub use products::{cross, dot, Cross};
pub use scalar::Arithmetic;
pub use vector::{ComponentX, ComponentY, ComponentZ, FixedVector, Vector2, Vector3};

pub mod prelude {
    pub use crate::{
        cross, dot, Arithmetic, ComponentX, ComponentY, ComponentZ, Cross, FixedMatrix,
        FixedVector, LinalgError, SquareMatrix, Vector2, Vector3,
    };
}
