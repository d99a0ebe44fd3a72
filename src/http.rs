use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Request, RequestInit, Response};

use sudoku_front_core::{decode, encode, CodecError};

#[derive(Debug, thiserror::Error)]
pub(crate) enum TransportError {
    #[error("window unavailable")]
    NoWindow,
    #[error("request body encode failed")]
    Encode,
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("response decode failed: {0}")]
    Decode(#[from] CodecError),
}

impl From<JsValue> for TransportError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        TransportError::Network(message)
    }
}

/// POSTs `body` as JSON and returns the raw response text.
pub(crate) async fn post_json_text<B>(url: &str, body: &B) -> Result<String, TransportError>
where
    B: Serialize,
{
    let window = web_sys::window().ok_or(TransportError::NoWindow)?;
    let payload = encode(body).ok_or(TransportError::Encode)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&payload));
    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", "application/json")?;

    let value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = value.dyn_into()?;
    if !response.ok() {
        return Err(TransportError::Status(response.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(response.text()?).await?;
    Ok(text.as_string().unwrap_or_default())
}

pub(crate) async fn post_json<B, R>(url: &str, body: &B) -> Result<R, TransportError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let text = post_json_text(url, body).await?;
    Ok(decode(&text)?)
}
