pub mod api_client;
pub mod notifier;
pub mod token_storage;

pub use api_client::{ApiClient, Backend};
pub use notifier::{Notifier, ToastKind, ToastNotifier};
pub use token_storage::{LocalTokenStorage, TokenStorage};
