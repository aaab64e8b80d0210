pub mod api;
pub mod approval;
pub mod de;
pub mod request;
pub mod status;
pub mod user;
pub mod vehicle;
