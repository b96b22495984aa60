// ============================================================================
// ROUTER - Rutas por hash (#/doctors, #/login, ...)
// ============================================================================

/// Destinos de la aplicación
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    /// Lista de doctores, opcionalmente filtrada por especialidad
    Doctors(Option<String>),
    About,
    Contact,
    Login,
    MyProfile,
    MyAppointments,
    /// Página de un doctor concreto
    Appointment(String),
}

impl Route {
    /// Parsear un path (`/doctors/Dermatologist`); lo desconocido va a Home
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('?')
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["doctors"] => Route::Doctors(None),
            ["doctors", speciality] => Route::Doctors(Some(decode_segment(speciality))),
            ["about"] => Route::About,
            ["contact"] => Route::Contact,
            ["login"] => Route::Login,
            ["my-profile"] => Route::MyProfile,
            ["my-appointments"] => Route::MyAppointments,
            ["appointment", doc_id] => Route::Appointment(decode_segment(doc_id)),
            _ => Route::Home,
        }
    }

    /// Parsear `location.hash` (con o sin `#`)
    pub fn from_hash(hash: &str) -> Self {
        Self::parse(hash.trim_start_matches('#'))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Doctors(None) => "/doctors".to_string(),
            Route::Doctors(Some(speciality)) => format!("/doctors/{}", urlencoding::encode(speciality)),
            Route::About => "/about".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Login => "/login".to_string(),
            Route::MyProfile => "/my-profile".to_string(),
            Route::MyAppointments => "/my-appointments".to_string(),
            Route::Appointment(doc_id) => format!("/appointment/{}", urlencoding::encode(doc_id)),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    /// Path del enlace de navegación que queda activo en esta ruta
    pub fn nav_path(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("/"),
            Route::Doctors(_) | Route::Appointment(_) => Some("/doctors"),
            Route::About => Some("/about"),
            Route::Contact => Some("/contact"),
            _ => None,
        }
    }
}

/// Guard del login: con token ya presente, `/login` redirige a Home
pub fn resolve_route(route: Route, has_token: bool) -> Route {
    match route {
        Route::Login if has_token => Route::Home,
        other => other,
    }
}

/// Ruta actual según `window.location.hash`
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or_default()
}

/// Navegar cambiando el hash; el listener de `hashchange` hace el resto
pub fn navigate(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    log::info!("🧭 [ROUTER] → {}", route.path());
    if let Err(e) = window.location().set_hash(&route.path()) {
        log::error!("❌ [ROUTER] No se pudo navegar a {}: {:?}", route.path(), e);
    }
}

fn decode_segment(value: &str) -> String {
    urlencoding::decode(value)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| value.to_string())
}
