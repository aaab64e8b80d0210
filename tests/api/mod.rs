mod auth;
mod requests;
mod vehicles;
