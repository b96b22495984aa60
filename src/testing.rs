//! Fakes en memoria para los tests del store y de los viewmodels.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::error::{ApiError, StorageError};
use crate::models::{AuthRequest, AuthResponse, Doctor, DoctorListResponse, ProfileResponse, UserProfile};
use crate::services::{Backend, Notifier, ToastKind, TokenStorage};

type ProfileResult = Result<ProfileResponse, ApiError>;
type DoctorsResult = Result<DoctorListResponse, ApiError>;

#[derive(Default)]
pub struct FakeBackend {
    doctor_responses: RefCell<VecDeque<Result<DoctorListResponse, ApiError>>>,
    profile_responses: RefCell<VecDeque<ProfileResult>>,
    auth_responses: RefCell<VecDeque<Result<AuthResponse, ApiError>>>,
    profile_gates: RefCell<HashMap<String, oneshot::Receiver<ProfileResult>>>,
    doctors_gate: RefCell<Option<oneshot::Receiver<DoctorsResult>>>,
    pub doctor_calls: Cell<usize>,
    pub profile_tokens: RefCell<Vec<String>>,
    pub auth_requests: RefCell<Vec<AuthRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_doctors(&self, response: Result<DoctorListResponse, ApiError>) {
        self.doctor_responses.borrow_mut().push_back(response);
    }

    pub fn push_profile(&self, response: ProfileResult) {
        self.profile_responses.borrow_mut().push_back(response);
    }

    pub fn push_auth(&self, response: Result<AuthResponse, ApiError>) {
        self.auth_responses.borrow_mut().push_back(response);
    }

    /// La petición de perfil con este token queda pendiente hasta que se
    /// envíe por el sender devuelto
    pub fn gate_profile(&self, token: &str) -> oneshot::Sender<ProfileResult> {
        let (tx, rx) = oneshot::channel();
        self.profile_gates.borrow_mut().insert(token.to_string(), rx);
        tx
    }

    /// La próxima petición de doctores queda pendiente hasta el envío
    pub fn gate_doctors(&self) -> oneshot::Sender<DoctorsResult> {
        let (tx, rx) = oneshot::channel();
        self.doctors_gate.borrow_mut().replace(rx);
        tx
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_tokens.borrow().len()
    }
}

fn unscripted() -> ApiError {
    ApiError::Network("no scripted response".to_string())
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn list_doctors(&self) -> Result<DoctorListResponse, ApiError> {
        self.doctor_calls.set(self.doctor_calls.get() + 1);
        let gate = self.doctors_gate.borrow_mut().take();
        if let Some(rx) = gate {
            return rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_string())));
        }
        let next = self.doctor_responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(unscripted()))
    }

    async fn get_profile(&self, token: &str) -> Result<ProfileResponse, ApiError> {
        self.profile_tokens.borrow_mut().push(token.to_string());
        let gate = self.profile_gates.borrow_mut().remove(token);
        if let Some(rx) = gate {
            return rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_string())));
        }
        let next = self.profile_responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(unscripted()))
    }

    async fn authenticate(&self, request: &AuthRequest) -> Result<AuthResponse, ApiError> {
        self.auth_requests.borrow_mut().push(request.clone());
        let next = self.auth_responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(unscripted()))
    }
}

#[derive(Default)]
pub struct MemoryTokenStorage {
    pub value: RefCell<Option<String>>,
    pub saves: Cell<usize>,
    pub removes: Cell<usize>,
}

impl MemoryTokenStorage {
    pub fn with_token(token: &str) -> Self {
        let storage = Self::default();
        *storage.value.borrow_mut() = Some(token.to_string());
        storage
    }

    pub fn stored(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone().filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        self.saves.set(self.saves.get() + 1);
        *self.value.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        self.removes.set(self.removes.get() + 1);
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<(ToastKind, String)>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == ToastKind::Error)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == ToastKind::Success)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: ToastKind, message: &str) {
        self.messages.borrow_mut().push((kind, message.to_string()));
    }
}

pub fn sample_profile(name: &str) -> UserProfile {
    UserProfile {
        id: format!("id-{}", name.to_lowercase()),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        image: None,
        phone: None,
        address: None,
        gender: None,
        dob: None,
    }
}

pub fn profile_ok(name: &str) -> ProfileResult {
    Ok(ProfileResponse {
        success: true,
        user: Some(sample_profile(name)),
        message: None,
    })
}

pub fn sample_doctor(id: &str, speciality: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: format!("Dr. {}", id),
        image: String::new(),
        speciality: speciality.to_string(),
        degree: None,
        experience: None,
        about: None,
        fees: 50.0,
        available: true,
        address: None,
    }
}
