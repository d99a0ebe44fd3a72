use js_sys::Reflect;
use wasm_bindgen::JsValue;

use sudoku_front_core::SessionConfig;

use crate::dom::data_attr;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AppConfig {
    pub(crate) session: SessionConfig,
    pub(crate) base: String,
}

impl AppConfig {
    pub(crate) fn new(session: SessionConfig, base: &str) -> Self {
        Self {
            session,
            base: normalize_base(base),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

pub(crate) fn load_app_config() -> AppConfig {
    let (session, issues) = SessionConfig::from_lookup(read_page_number);
    for issue in issues {
        gloo::console::warn!(format!(
            "config: ignoring {} = {}, using default",
            issue.key, issue.value
        ));
    }
    AppConfig::new(session, default_api_base())
}

pub(crate) fn default_api_base() -> &'static str {
    option_env!("SUDOKU_API_BASE")
        .or(option_env!("TRUNK_PUBLIC_SUDOKU_API_BASE"))
        .unwrap_or("")
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Reads a page-injected number from `window.<KEY>`, then from the
/// `data-<key>` attribute on `<body>` (`INITIAL_SCORE` is
/// `data-initial-score`). A template `const INITIAL_SCORE = ...` is not a
/// `window` property and is not seen; pages assign `window.INITIAL_SCORE`,
/// declare it with `var`, or set the body attribute.
fn read_page_number(key: &str) -> Option<f64> {
    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .or_else(|| read_body_data(&window, key).map(JsValue::from))?;
    js_number(&value)
}

fn read_body_data(window: &web_sys::Window, key: &str) -> Option<String> {
    let body = window.document()?.body()?;
    data_attr(&body, &data_attr_name(key))
}

fn data_attr_name(key: &str) -> String {
    key.to_ascii_lowercase().replace('_', "-")
}

fn js_number(value: &JsValue) -> Option<f64> {
    value
        .as_f64()
        .or_else(|| value.as_string().and_then(|raw| raw.trim().parse::<f64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn url_joins_base_without_double_slash() {
        let config = AppConfig::new(SessionConfig::default(), " https://sudoku.test/ ");
        assert_eq!(config.url("/play"), "https://sudoku.test/play");
        let local = AppConfig::new(SessionConfig::default(), "");
        assert_eq!(local.url("/menu"), "/menu");
    }

    #[wasm_bindgen_test]
    fn reads_window_properties_and_numeric_strings() {
        let window = web_sys::window().expect("window available");
        Reflect::set(&window, &JsValue::from_str("TEST_NUMBER_A"), &JsValue::from_f64(17.0))
            .expect("set global");
        Reflect::set(&window, &JsValue::from_str("TEST_NUMBER_B"), &JsValue::from_str(" 4 "))
            .expect("set global");
        assert_eq!(read_page_number("TEST_NUMBER_A"), Some(17.0));
        assert_eq!(read_page_number("TEST_NUMBER_B"), Some(4.0));
        assert_eq!(read_page_number("TEST_NUMBER_MISSING"), None);
    }

    #[wasm_bindgen_test]
    fn falls_back_to_body_data_attribute() {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .expect("body available");
        body.set_attribute("data-test-number-c", "12").expect("set attribute");
        body.set_attribute("data-test-number-a", "99").expect("set attribute");
        Reflect::set(
            &web_sys::window().expect("window available"),
            &JsValue::from_str("TEST_NUMBER_A"),
            &JsValue::from_f64(17.0),
        )
        .expect("set global");

        assert_eq!(data_attr_name("INITIAL_SCORE"), "initial-score");
        assert_eq!(read_page_number("TEST_NUMBER_C"), Some(12.0));
        assert_eq!(read_page_number("TEST_NUMBER_A"), Some(17.0));

        body.remove_attribute("data-test-number-c").expect("remove attribute");
        body.remove_attribute("data-test-number-a").expect("remove attribute");
    }
}
