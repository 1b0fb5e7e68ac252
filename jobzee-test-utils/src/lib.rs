pub mod constant;
pub mod error;
pub mod fixtures;

pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{application, envelope, job, user},
        TestError,
    };
}
