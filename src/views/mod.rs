pub mod app;
pub mod login;
pub mod navbar;
pub mod pages;

pub use app::render_app;
