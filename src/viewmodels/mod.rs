pub mod login_viewmodel;
pub mod navbar_viewmodel;

pub use login_viewmodel::{FormError, LoginField, LoginForm, LoginViewModel, SubmitOutcome};
pub use navbar_viewmodel::{run_menu_action, AccountArea, NavLinkView, NavbarViewModel};
