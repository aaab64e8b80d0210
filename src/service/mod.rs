pub mod details;
pub mod form;
pub mod notice;
pub mod poll;
pub mod registry;
pub mod review;
pub mod submission;
pub mod table;
