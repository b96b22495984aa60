// ============================================================================
// LOGIN VIEW - Formulario login / signup
// ============================================================================
// El estado del formulario vive en AppState (sobrevive a los re-renders);
// los inputs lo actualizan sin notificar, el resto de acciones sí notifica.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, on_input_value, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::utils::constants::MIN_PASSWORD_LEN;
use crate::utils::router::{navigate, Route};
use crate::viewmodels::{LoginField, LoginForm, SubmitOutcome};

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let form_state = state.login_form.borrow().clone();
    let busy = *state.login_submitting.borrow() || state.store.loading().profile;

    let form = ElementBuilder::new("form")?.class("login-form").build();

    {
        let state = state.clone();
        on_submit(&form, move || submit(&state))?;
    }

    let card = ElementBuilder::new("div")?
        .class("login-card")
        .child(ElementBuilder::new("p")?.class("login-title").text(form_state.title()).build())?
        .child(ElementBuilder::new("p")?.class("login-prompt").text(form_state.prompt()).build())?
        .build();

    for &field in form_state.fields() {
        let group = render_field(state, &form_state, field)?;
        append_child(&card, &group)?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .flag("disabled", busy)?
        .text(form_state.submit_label(busy))
        .build();
    card.append_child(&submit_btn)?;

    let (prompt, action) = form_state.switch_prompt();
    let switch = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-switch-mode")
            .text(action)
            .on_click(move |_| state.toggle_login_mode())?
            .build()
    };
    let switch_line = ElementBuilder::new("p")?
        .class("login-switch")
        .child(ElementBuilder::new("span")?.text(prompt).build())?
        .child(switch)?
        .build();
    card.append_child(&switch_line)?;

    form.append_child(&card)?;
    Ok(form)
}

fn render_field(state: &AppState, form: &LoginForm, field: LoginField) -> Result<Element, JsValue> {
    let input_type = match field {
        LoginField::Name => "text",
        LoginField::Email => "email",
        LoginField::Password => form.password_input_type(),
    };

    let input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", input_type)?
        .attr("id", field.id())?
        .attr("name", field.id())?
        .attr("value", form.value(field))?
        .flag("required", form.is_required(field))?
        .build();

    if field == LoginField::Password {
        input.set_attribute("minlength", &MIN_PASSWORD_LEN.to_string())?;
    }

    {
        let login_form = state.login_form.clone();
        on_input_value(&input, move |value| {
            login_form.borrow_mut().set_field(field, value);
        })?;
    }

    let group = ElementBuilder::new("div")?
        .class("form-group")
        .child(
            ElementBuilder::new("label")?
                .attr("for", field.id())?
                .text(field.label())
                .build(),
        )?
        .child(input)?
        .build();

    if field == LoginField::Password {
        let state = state.clone();
        let toggle = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-toggle-password")
            .text(form.password_toggle_label())
            .on_click(move |_| state.toggle_show_password())?
            .build();
        group.append_child(&toggle)?;
    }

    Ok(group)
}

fn submit(state: &AppState) {
    if *state.login_submitting.borrow() {
        return;
    }

    let state = state.clone();
    spawn_local(async move {
        match state.submit_login().await {
            SubmitOutcome::Authenticated => {
                log::info!("✅ [LOGIN] Sesión iniciada, volviendo a Home");
                navigate(&Route::Home);
            }
            SubmitOutcome::Rejected(message) => {
                log::warn!("⚠️ [LOGIN] {}", message);
            }
            SubmitOutcome::Invalid(e) => {
                log::warn!("⚠️ [LOGIN] Formulario inválido: {}", e);
            }
        }
    });
}
