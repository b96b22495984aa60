// Utils compartidos

pub mod constants;
pub mod router;

pub use constants::*;
pub use router::{navigate, resolve_route, Route};
