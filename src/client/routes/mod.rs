pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod review;

pub use dashboard::Dashboard;
pub use home::Home;
pub use not_found::NotFound;
pub use review::Review;
