use js_sys::wasm_bindgen::JsValue;
use serde::{Serialize, de::DeserializeOwned};

/// Error type for serialization/deserialization of history state
#[derive(Debug)]
pub struct Error(serde_wasm_bindgen::Error);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Serde WASM Bindgen Error: {}", self.0)
    }
}

impl std::error::Error for Error {}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Error(e)
    }
}

/// Serialize a Rust data structure into a JsValue
pub fn to_value<T: Serialize>(value: &T) -> Result<JsValue, Error> {
    // Plain JS numbers keep `history.state` structured-clonable
    let serializer =
        serde_wasm_bindgen::Serializer::new().serialize_large_number_types_as_bigints(false);
    value.serialize(&serializer).map_err(Error::from)
}

/// Deserialize a JsValue into a Rust data structure
pub fn from_value<T: DeserializeOwned>(value: JsValue) -> Result<T, Error> {
    serde_wasm_bindgen::from_value(value).map_err(Error::from)
}
