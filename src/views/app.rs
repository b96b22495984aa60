// ============================================================================
// APP VIEW - Navbar + página de la ruta actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;
use crate::utils::router::Route;
use crate::views::{login, navbar, pages};

/// Renderizar la app completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();
    log::debug!("🧭 [ROUTER] Renderizando {}", route.path());

    let content = match &route {
        Route::Home => pages::render_home(state)?,
        Route::Doctors(speciality) => pages::render_doctors(state, speciality.as_deref())?,
        Route::About => pages::render_about()?,
        Route::Contact => pages::render_contact()?,
        Route::Login => login::render_login(state)?,
        Route::MyProfile => pages::render_my_profile(state)?,
        Route::MyAppointments => pages::render_my_appointments()?,
        Route::Appointment(doctor_id) => pages::render_appointment(state, doctor_id)?,
    };

    let main = ElementBuilder::new("main")?.class("page-content").child(content)?.build();

    let container = ElementBuilder::new("div")?
        .class("app-container")
        .child(navbar::render_navbar(state)?)?
        .child(main)?
        .build();
    Ok(container)
}
