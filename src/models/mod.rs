pub mod classes;
pub mod courses;
pub mod dashboard;
pub mod users;
