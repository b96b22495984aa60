// ============================================================================
// NOTIFIER - Toasts no bloqueantes
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, document, get_element_by_id, ElementBuilder};

const TOAST_CONTAINER_ID: &str = "toast-container";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Destino de los avisos al usuario
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

/// Toast en el DOM que se elimina solo pasado `duration_ms`
pub struct ToastNotifier {
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            duration_ms: CONFIG.toast_duration_ms,
        }
    }

    fn container() -> Result<Element, JsValue> {
        if let Some(existing) = get_element_by_id(TOAST_CONTAINER_ID) {
            return Ok(existing);
        }
        let body = document()
            .and_then(|doc| doc.body())
            .ok_or_else(|| JsValue::from_str("No body element"))?;
        let container = ElementBuilder::new("div")?
            .id(TOAST_CONTAINER_ID)?
            .class("toast-container")
            .build();
        append_child(&body, &container)?;
        Ok(container)
    }

    fn show(&self, kind: ToastKind, message: &str) -> Result<(), JsValue> {
        let container = Self::container()?;
        let toast = ElementBuilder::new("div")?
            .class(kind.class())
            .attr("role", "status")?
            .text(message)
            .build();
        append_child(&container, &toast)?;

        Timeout::new(self.duration_ms, move || {
            toast.remove();
        })
        .forget();
        Ok(())
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        if let Err(e) = self.show(kind, message) {
            log::warn!("⚠️ [TOAST] No se pudo mostrar '{}': {:?}", message, e);
        }
    }
}
