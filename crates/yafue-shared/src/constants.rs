/// Application name
pub const APP_NAME: &str = "Ya Fue";

/// Secure storage key holding the JSON-serialized logged-in user
pub const USER_STORAGE_KEY: &str = "ya_fue_user_data";

/// Secure storage key holding the JSON-serialized app settings
pub const SETTINGS_STORAGE_KEY: &str = "ya_fue_settings";

/// Backend base URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Currency preselected in the meeting form (pesos)
pub const DEFAULT_CURRENCY_ID: &str = "1";

/// Bounds accepted by the meeting date inputs
pub const MIN_MEETING_YEAR: i32 = 2024;
pub const MAX_MEETING_YEAR: i32 = 2100;

/// XChaCha20-Poly1305 nonce size in bytes
pub const NONCE_SIZE: usize = 24;

/// Symmetric key size in bytes (for XChaCha20-Poly1305)
pub const SYMMETRIC_KEY_SIZE: usize = 32;

/// Key derivation context (BLAKE3) for the storage sealing key
pub const KDF_CONTEXT_STORAGE_KEY: &str = "yafue-secure-store-v1";
