pub mod apply;
pub mod my_applications;

pub use apply::Apply;
pub use my_applications::MyApplications;
