pub mod assignment_store;
pub mod dashboard;

pub use assignment_store::AssignmentStore;
pub use dashboard::load_dashboard;
