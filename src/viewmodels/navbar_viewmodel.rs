// ============================================================================
// NAVBAR VIEWMODEL - Derivado del store, sin estado propio
// ============================================================================

use crate::models::{NavLink, UserMenuAction, NAV_LINKS};
use crate::state::SessionStore;
use crate::utils::constants::DEFAULT_AVATAR;
use crate::utils::router::Route;

#[derive(Debug, Clone, PartialEq)]
pub enum AccountArea {
    /// Token y perfil presentes: avatar + menú desplegable
    Menu { avatar: String, name: String },
    /// Botón "Create account"
    CreateAccount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkView {
    pub link: NavLink,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarViewModel {
    pub links: Vec<NavLinkView>,
    pub account: AccountArea,
    pub show_mobile_menu: bool,
}

impl NavbarViewModel {
    pub fn new(store: &SessionStore, route: &Route, show_mobile_menu: bool) -> Self {
        let active_path = route.nav_path();
        let links = NAV_LINKS
            .iter()
            .map(|link| NavLinkView {
                link: *link,
                active: active_path == Some(link.path),
            })
            .collect();

        let account = match (store.token(), store.profile()) {
            (Some(_), Some(profile)) => AccountArea::Menu {
                avatar: profile.avatar().unwrap_or(DEFAULT_AVATAR).to_string(),
                name: profile.name.clone(),
            },
            _ => AccountArea::CreateAccount,
        };

        Self {
            links,
            account,
            show_mobile_menu,
        }
    }

    pub fn menu_items(&self) -> &'static [UserMenuAction] {
        match self.account {
            AccountArea::Menu { .. } => &UserMenuAction::ALL,
            AccountArea::CreateAccount => &[],
        }
    }
}

/// Ejecuta una acción del menú de cuenta y devuelve a dónde navegar
pub fn run_menu_action(store: &SessionStore, action: UserMenuAction) -> Route {
    match action {
        UserMenuAction::MyProfile => Route::MyProfile,
        UserMenuAction::MyAppointments => Route::MyAppointments,
        UserMenuAction::Logout => {
            store.logout();
            Route::Home
        }
    }
}
