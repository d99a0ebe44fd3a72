use serde::de::DeserializeOwned;
use serde::Serialize;

pub use serde_json::Error as CodecError;

pub fn encode<T>(value: &T) -> Option<String>
where
    T: Serialize,
{
    serde_json::to_string(value).ok()
}

pub fn decode<T>(raw: &str) -> Result<T, CodecError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(raw)
}
