//! Persistent storage slot for the session credential.
//!
//! A thin wrapper over browser `localStorage`: read, overwrite, clear.
//! No validation happens here; whether the stored value still decodes or
//! has expired is the identity layer's problem. Requires a browser
//! environment; outside one (native tests, pre-mount) every operation is
//! an inert no-op.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "quillpad_token";

/// Read the stored credential, if any. Never fails.
pub fn read() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Overwrite the stored credential.
pub fn write(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Remove the stored credential. Removing an absent value is a no-op.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
