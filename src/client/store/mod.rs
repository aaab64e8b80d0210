pub mod app;
pub mod user;

pub use app::AppContext;
pub use user::UserState;
