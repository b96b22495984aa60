// ============================================================================
// SESSION STORE - Token, perfil y lista de doctores
// ============================================================================
// Única fuente de verdad de la sesión. Las vistas guardan clones del handle
// (todo va en Rc) y leen con los getters; solo el store muta su estado.
//
// Cada fetch toma un número de generación: si al volver ya no es el vigente
// (otro fetch más nuevo, o logout) la respuesta se descarta sin tocar nada.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::{server_message, ApiError};
use crate::models::{Doctor, UserProfile};
use crate::services::{Backend, Notifier, TokenStorage};

/// Peticiones en vuelo por recurso
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
    pub doctors: bool,
    pub profile: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Sin token
    Anonymous,
    /// Con token y el perfil cargándose
    Authenticating,
    /// Con token; el perfil puede faltar si su carga falló
    Authenticated,
}

type Subscriber = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn Backend>,
    storage: Rc<dyn TokenStorage>,
    notifier: Rc<dyn Notifier>,

    token: Rc<RefCell<Option<String>>>,
    profile: Rc<RefCell<Option<UserProfile>>>,
    doctors: Rc<RefCell<Vec<Doctor>>>,
    loading: Rc<Cell<LoadingFlags>>,

    profile_generation: Rc<Cell<u64>>,
    doctors_generation: Rc<Cell<u64>>,

    currency_symbol: Rc<str>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

fn next_generation(counter: &Cell<u64>) -> u64 {
    let generation = counter.get().wrapping_add(1);
    counter.set(generation);
    generation
}

impl SessionStore {
    /// Crear el store; si hay token persistido arranca autenticado (sin perfil)
    pub fn new(
        backend: Rc<dyn Backend>,
        storage: Rc<dyn TokenStorage>,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let token = storage.load().filter(|t| !t.is_empty());
        if token.is_some() {
            log::info!("💾 [STORE] Token encontrado en storage, sesión restaurada");
        }

        Self {
            backend,
            storage,
            notifier,
            token: Rc::new(RefCell::new(token)),
            profile: Rc::new(RefCell::new(None)),
            doctors: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(Cell::new(LoadingFlags::default())),
            profile_generation: Rc::new(Cell::new(0)),
            doctors_generation: Rc::new(Cell::new(0)),
            currency_symbol: Rc::from(CONFIG.currency_symbol.as_str()),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Sustituir el símbolo de moneda de la config
    pub fn with_currency_symbol(mut self, symbol: &str) -> Self {
        self.currency_symbol = Rc::from(symbol);
        self
    }

    // ------------------------------------------------------------------
    // Lectura
    // ------------------------------------------------------------------

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.profile.borrow().clone()
    }

    pub fn doctors(&self) -> Vec<Doctor> {
        self.doctors.borrow().clone()
    }

    pub fn doctor(&self, id: &str) -> Option<Doctor> {
        self.doctors.borrow().iter().find(|d| d.id == id).cloned()
    }

    /// Doctores de una especialidad, en el orden del backend
    pub fn doctors_by_speciality(&self, speciality: &str) -> Vec<Doctor> {
        self.doctors
            .borrow()
            .iter()
            .filter(|d| d.has_speciality(speciality))
            .cloned()
            .collect()
    }

    pub fn loading(&self) -> LoadingFlags {
        self.loading.get()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.token.borrow().is_none() {
            SessionPhase::Anonymous
        } else if self.loading.get().profile {
            SessionPhase::Authenticating
        } else {
            SessionPhase::Authenticated
        }
    }

    // ------------------------------------------------------------------
    // Suscripción
    // ------------------------------------------------------------------

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Copia: un callback puede suscribir a otro
        let subscribers: Vec<Subscriber> = self.subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    fn update_loading<F>(&self, update: F)
    where
        F: FnOnce(&mut LoadingFlags),
    {
        let mut flags = self.loading.get();
        update(&mut flags);
        self.loading.set(flags);
        self.notify();
    }

    // ------------------------------------------------------------------
    // Sesión
    // ------------------------------------------------------------------

    /// Establecer o limpiar el token. Con token: persiste y carga el perfil.
    /// Sin token (o vacío): limpia storage y perfil sin ninguna petición.
    pub async fn set_token(&self, value: Option<String>) {
        let Some(token) = value.filter(|t| !t.is_empty()) else {
            self.clear_session();
            return;
        };

        if let Err(e) = self.storage.save(&token) {
            log::error!("❌ [STORE] Error guardando token: {}", e);
        }

        let previous = self.token.replace(Some(token.clone()));
        if previous.as_deref() != Some(token.as_str()) {
            // El perfil anterior pertenece a otro token
            self.profile.replace(None);
        }
        log::info!("🔑 [STORE] Token establecido");
        self.notify();

        self.fetch_profile().await;
    }

    /// Logout: equivalente síncrono de `set_token(None)`
    pub fn logout(&self) {
        log::info!("👋 [STORE] Logout");
        self.clear_session();
    }

    fn clear_session(&self) {
        // Invalida cualquier fetch de perfil en vuelo
        next_generation(&self.profile_generation);

        if let Err(e) = self.storage.remove() {
            log::error!("❌ [STORE] Error eliminando token: {}", e);
        }
        self.token.replace(None);
        self.profile.replace(None);

        let mut flags = self.loading.get();
        flags.profile = false;
        self.loading.set(flags);

        self.notify();
    }

    /// Actualizar el perfil directamente; sin token se ignora
    pub fn set_profile(&self, profile: Option<UserProfile>) {
        if self.token.borrow().is_none() {
            log::warn!("⚠️ [STORE] set_profile sin token, ignorado");
            return;
        }
        self.profile.replace(profile);
        self.notify();
    }

    // ------------------------------------------------------------------
    // Fetches
    // ------------------------------------------------------------------

    /// Efecto de arranque: doctores y perfil a la vez; sin token el perfil
    /// no hace petición
    pub async fn bootstrap(&self) {
        futures::join!(self.fetch_doctors(), self.fetch_profile());
    }

    pub async fn fetch_doctors(&self) {
        let generation = next_generation(&self.doctors_generation);
        self.update_loading(|flags| flags.doctors = true);

        let result = self.backend.list_doctors().await;

        if self.doctors_generation.get() != generation {
            log::debug!("⏭️ [STORE] Respuesta de doctores obsoleta descartada");
            return;
        }

        match result {
            Ok(response) if response.success => {
                log::info!("✅ [STORE] {} doctores recibidos", response.doctors.len());
                self.doctors.replace(response.doctors);
            }
            Ok(response) => self.report_failure(&server_message(response.message.as_deref())),
            Err(e) => self.report_error(&e),
        }

        self.update_loading(|flags| flags.doctors = false);
    }

    /// Carga el perfil con el token actual; sin token no hace nada
    pub async fn fetch_profile(&self) {
        let Some(token) = self.token() else {
            log::debug!("[STORE] fetch_profile sin token, nada que hacer");
            return;
        };

        let generation = next_generation(&self.profile_generation);
        self.update_loading(|flags| flags.profile = true);

        let result = self.backend.get_profile(&token).await;

        if self.profile_generation.get() != generation {
            log::debug!("⏭️ [STORE] Respuesta de perfil obsoleta descartada");
            return;
        }

        match result {
            Ok(response) if response.success => {
                log::info!("✅ [STORE] Perfil cargado");
                self.profile.replace(response.user);
            }
            Ok(response) => self.report_failure(&server_message(response.message.as_deref())),
            Err(e) => self.report_error(&e),
        }

        self.update_loading(|flags| flags.profile = false);
    }

    fn report_error(&self, error: &ApiError) {
        log::error!("❌ [STORE] {:?}", error);
        self.notifier.error(&error.user_message());
    }

    fn report_failure(&self, message: &str) {
        log::error!("❌ [STORE] {}", message);
        self.notifier.error(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DoctorListResponse, ProfileResponse};
    use crate::testing::*;
    use futures::executor::block_on;

    struct Fixture {
        backend: Rc<FakeBackend>,
        storage: Rc<MemoryTokenStorage>,
        notifier: Rc<RecordingNotifier>,
        store: SessionStore,
    }

    fn fixture(storage: MemoryTokenStorage) -> Fixture {
        let backend = Rc::new(FakeBackend::new());
        let storage = Rc::new(storage);
        let notifier = Rc::new(RecordingNotifier::default());
        let store = SessionStore::new(backend.clone(), storage.clone(), notifier.clone());
        Fixture { backend, storage, notifier, store }
    }

    #[test]
    fn starts_anonymous_without_persisted_token() {
        let f = fixture(MemoryTokenStorage::default());
        assert_eq!(f.store.phase(), SessionPhase::Anonymous);
        assert!(f.store.token().is_none());

        let f = fixture(MemoryTokenStorage::with_token(""));
        assert_eq!(f.store.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn persisted_token_starts_authenticated_and_bootstrap_loads_everything() {
        let f = fixture(MemoryTokenStorage::with_token("persisted"));
        assert_eq!(f.store.phase(), SessionPhase::Authenticated);
        assert!(f.store.profile().is_none());

        f.backend.push_doctors(Ok(DoctorListResponse {
            success: true,
            doctors: vec![sample_doctor("d1", "Dermatologist")],
            message: None,
        }));
        f.backend.push_profile(profile_ok("Edward"));

        block_on(f.store.bootstrap());

        assert_eq!(f.backend.doctor_calls.get(), 1);
        assert_eq!(*f.backend.profile_tokens.borrow(), vec!["persisted".to_string()]);
        assert_eq!(f.store.doctors().len(), 1);
        assert_eq!(f.store.profile().map(|p| p.name), Some("Edward".to_string()));
        assert_eq!(f.store.loading(), LoadingFlags::default());
    }

    #[test]
    fn bootstrap_profile_does_not_wait_for_doctors() {
        let f = fixture(MemoryTokenStorage::with_token("persisted"));
        let doctors_gate = f.backend.gate_doctors();
        f.backend.push_profile(profile_ok("Edward"));

        block_on(async {
            let boot = f.store.bootstrap();
            let release = async {
                // Doctores aún en vuelo
                assert!(f.store.loading().doctors);
                assert_eq!(f.backend.profile_calls(), 1);
                assert_eq!(f.store.profile().map(|p| p.name), Some("Edward".to_string()));
                let _ = doctors_gate.send(Ok(DoctorListResponse {
                    success: true,
                    doctors: vec![sample_doctor("d1", "Neurologist")],
                    message: None,
                }));
            };
            futures::join!(boot, release);
        });

        assert_eq!(f.store.doctors().len(), 1);
        assert_eq!(f.store.loading(), LoadingFlags::default());
    }

    #[test]
    fn bootstrap_without_token_skips_profile() {
        let f = fixture(MemoryTokenStorage::default());
        f.backend.push_doctors(Ok(DoctorListResponse { success: true, doctors: vec![], message: None }));

        block_on(f.store.bootstrap());

        assert_eq!(f.backend.doctor_calls.get(), 1);
        assert_eq!(f.backend.profile_calls(), 0);
    }

    #[test]
    fn set_token_persists_and_fetches_profile_once() {
        let f = fixture(MemoryTokenStorage::default());
        f.backend.push_profile(profile_ok("Ana"));

        block_on(f.store.set_token(Some("abc".to_string())));

        assert_eq!(f.store.token().as_deref(), Some("abc"));
        assert_eq!(f.storage.stored().as_deref(), Some("abc"));
        assert_eq!(*f.backend.profile_tokens.borrow(), vec!["abc".to_string()]);
        assert_eq!(f.store.profile().map(|p| p.name), Some("Ana".to_string()));
        assert_eq!(f.store.phase(), SessionPhase::Authenticated);
        assert!(f.notifier.errors().is_empty());
    }

    #[test]
    fn clearing_token_removes_storage_and_profile_without_request() {
        let f = fixture(MemoryTokenStorage::default());
        f.backend.push_profile(profile_ok("Ana"));
        block_on(f.store.set_token(Some("abc".to_string())));
        let calls_before = f.backend.profile_calls();

        block_on(f.store.set_token(None));

        assert!(f.store.token().is_none());
        assert!(f.store.profile().is_none());
        assert!(f.storage.stored().is_none());
        assert_eq!(f.storage.removes.get(), 1);
        assert_eq!(f.backend.profile_calls(), calls_before);
        assert_eq!(f.store.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn empty_token_is_treated_as_logout() {
        let f = fixture(MemoryTokenStorage::with_token("old"));
        block_on(f.store.set_token(Some(String::new())));
        assert!(f.store.token().is_none());
        assert_eq!(f.storage.saves.get(), 0);
        assert_eq!(f.backend.profile_calls(), 0);
    }

    #[test]
    fn fetch_profile_without_token_is_noop() {
        let f = fixture(MemoryTokenStorage::default());

        block_on(f.store.fetch_profile());

        assert_eq!(f.backend.profile_calls(), 0);
        assert!(f.store.profile().is_none());
        assert_eq!(f.store.loading(), LoadingFlags::default());
    }

    #[test]
    fn doctors_flag_reset_after_success_and_failures() {
        let f = fixture(MemoryTokenStorage::default());
        f.backend.push_doctors(Ok(DoctorListResponse {
            success: true,
            doctors: vec![sample_doctor("d1", "Pediatricians"), sample_doctor("d2", "Neurologist")],
            message: None,
        }));
        block_on(f.store.fetch_doctors());
        assert!(!f.store.loading().doctors);
        assert_eq!(f.store.doctors().len(), 2);

        f.backend.push_doctors(Ok(DoctorListResponse {
            success: false,
            doctors: vec![],
            message: Some("Database unavailable".to_string()),
        }));
        block_on(f.store.fetch_doctors());
        assert!(!f.store.loading().doctors);
        // La lista anterior se conserva
        assert_eq!(f.store.doctors().len(), 2);

        f.backend.push_doctors(Err(ApiError::Network("Failed to fetch".to_string())));
        block_on(f.store.fetch_doctors());
        assert!(!f.store.loading().doctors);

        assert_eq!(
            f.notifier.errors(),
            vec!["Database unavailable".to_string(), "Network error: Failed to fetch".to_string()]
        );
    }

    #[test]
    fn profile_failure_keeps_token_and_notifies() {
        let f = fixture(MemoryTokenStorage::with_token("expired"));
        f.backend.push_profile(Ok(ProfileResponse {
            success: false,
            user: None,
            message: Some("jwt expired".to_string()),
        }));

        block_on(f.store.fetch_profile());

        assert_eq!(f.store.token().as_deref(), Some("expired"));
        assert!(f.store.profile().is_none());
        assert_eq!(f.store.phase(), SessionPhase::Authenticated);
        assert!(!f.store.loading().profile);
        assert_eq!(f.notifier.errors(), vec!["jwt expired".to_string()]);
    }

    #[test]
    fn logical_failure_without_message_uses_fallback() {
        let f = fixture(MemoryTokenStorage::with_token("t"));
        f.backend.push_profile(Ok(ProfileResponse { success: false, user: None, message: None }));

        block_on(f.store.fetch_profile());

        assert_eq!(f.notifier.errors(), vec![crate::error::GENERIC_ERROR_MESSAGE.to_string()]);
    }

    #[test]
    fn stale_profile_response_is_discarded() {
        let f = fixture(MemoryTokenStorage::default());
        let gate_a = f.backend.gate_profile("a");
        let gate_b = f.backend.gate_profile("b");

        block_on(async {
            let first = f.store.set_token(Some("a".to_string()));
            let second = f.store.set_token(Some("b".to_string()));
            let release = async {
                // La respuesta nueva llega antes que la vieja
                let _ = gate_b.send(profile_ok("Bea"));
                let _ = gate_a.send(profile_ok("Alan"));
            };
            futures::join!(first, second, release);
        });

        assert_eq!(f.store.token().as_deref(), Some("b"));
        assert_eq!(f.store.profile().map(|p| p.name), Some("Bea".to_string()));
        assert!(!f.store.loading().profile);
    }

    #[test]
    fn logout_during_profile_fetch_wins() {
        let f = fixture(MemoryTokenStorage::default());
        let gate = f.backend.gate_profile("a");

        block_on(async {
            let login = f.store.set_token(Some("a".to_string()));
            let logout = async {
                f.store.logout();
                let _ = gate.send(profile_ok("Alan"));
            };
            futures::join!(login, logout);
        });

        assert!(f.store.token().is_none());
        assert!(f.store.profile().is_none());
        assert!(!f.store.loading().profile);
        assert_eq!(f.store.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn new_token_drops_profile_of_previous_one() {
        let f = fixture(MemoryTokenStorage::default());
        f.backend.push_profile(profile_ok("Ana"));
        block_on(f.store.set_token(Some("a".to_string())));

        f.backend.push_profile(Err(ApiError::Network("offline".to_string())));
        block_on(f.store.set_token(Some("b".to_string())));

        assert!(f.store.profile().is_none());
        assert_eq!(f.storage.stored().as_deref(), Some("b"));
    }

    #[test]
    fn set_profile_requires_token() {
        let f = fixture(MemoryTokenStorage::default());
        f.store.set_profile(Some(sample_profile("Ghost")));
        assert!(f.store.profile().is_none());

        let f = fixture(MemoryTokenStorage::with_token("t"));
        f.store.set_profile(Some(sample_profile("Real")));
        assert_eq!(f.store.profile().map(|p| p.name), Some("Real".to_string()));
    }

    #[test]
    fn subscribers_see_loading_transitions() {
        let f = fixture(MemoryTokenStorage::with_token("t"));
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            let store = f.store.clone();
            f.store.subscribe(move || seen.borrow_mut().push(store.loading().profile));
        }
        f.backend.push_profile(profile_ok("Ana"));

        block_on(f.store.fetch_profile());

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn currency_symbol_comes_from_config_unless_overridden() {
        let f = fixture(MemoryTokenStorage::default());
        assert_eq!(f.store.currency_symbol(), CONFIG.currency_symbol);

        let store = f.store.clone().with_currency_symbol("€");
        assert_eq!(store.currency_symbol(), "€");
        let doctor = sample_doctor("d1", "Dermatologist");
        assert_eq!(doctor.fee_label(store.currency_symbol()), "€50");
    }

    #[test]
    fn doctor_lookups() {
        let f = fixture(MemoryTokenStorage::default());
        f.backend.push_doctors(Ok(DoctorListResponse {
            success: true,
            doctors: vec![
                sample_doctor("d1", "Dermatologist"),
                sample_doctor("d2", "Neurologist"),
                sample_doctor("d3", "Dermatologist"),
            ],
            message: None,
        }));
        block_on(f.store.fetch_doctors());

        assert_eq!(f.store.doctor("d2").map(|d| d.speciality), Some("Neurologist".to_string()));
        assert!(f.store.doctor("missing").is_none());
        let ids: Vec<String> = f.store.doctors_by_speciality("dermatologist").into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["d1".to_string(), "d3".to_string()]);
    }
}
