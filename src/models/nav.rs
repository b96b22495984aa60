/// Enlace de la barra de navegación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { path: "/", label: "HOME" },
    NavLink { path: "/doctors", label: "ALL DOCTORS" },
    NavLink { path: "/about", label: "ABOUT" },
    NavLink { path: "/contact", label: "CONTACT" },
];

/// Entradas del menú de cuenta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuAction {
    MyProfile,
    MyAppointments,
    Logout,
}

impl UserMenuAction {
    pub const ALL: [UserMenuAction; 3] = [
        UserMenuAction::MyProfile,
        UserMenuAction::MyAppointments,
        UserMenuAction::Logout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UserMenuAction::MyProfile => "My Profile",
            UserMenuAction::MyAppointments => "My Appointments",
            UserMenuAction::Logout => "Logout",
        }
    }
}
