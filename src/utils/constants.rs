/// Clave de `localStorage` donde vive el token de sesión
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Longitud mínima de contraseña (igual que el `minlength` del input)
pub const MIN_PASSWORD_LEN: usize = 6;

/// Avatar por defecto cuando el perfil no tiene imagen
pub const DEFAULT_AVATAR: &str = "assets/profile_pic.png";

pub const LOGO_IMAGE: &str = "assets/logo.svg";
pub const MENU_ICON: &str = "assets/menu_icon.svg";
pub const CROSS_ICON: &str = "assets/cross_icon.png";
pub const DROPDOWN_ICON: &str = "assets/dropdown_icon.svg";
