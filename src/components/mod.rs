pub mod compare;
pub mod dashboard;
pub mod home;
pub mod layout;

pub use compare::ComparePage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
