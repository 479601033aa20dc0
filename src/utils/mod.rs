pub mod validate;

pub use validate::CourseLimits;
