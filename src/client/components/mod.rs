pub mod details_modal;
pub mod how_it_works;
pub mod navbar;
pub mod notice;
pub mod page;
pub mod request_form;
pub mod request_table;
pub mod status_badge;

pub use details_modal::DetailsModal;
pub use how_it_works::HowItWorks;
pub use navbar::Navbar;
pub use notice::{schedule_dismiss, NoticeBanner};
pub use page::Page;
pub use request_form::TireRequestForm;
pub use request_table::RequestTable;
pub use status_badge::{StatusBadge, StatusCell};
