use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage not available")?;
    let json = serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error writing to localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = local_storage().ok_or("localStorage not available")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error removing from localStorage".to_string())?;
    Ok(())
}
