pub mod auth;
pub mod doctor;
pub mod nav;
pub mod user;

pub use auth::*;
pub use doctor::*;
pub use nav::*;
pub use user::*;
