//! Platform glue for fetching the raw dataset text.
//!
//! The web build fetches the bundled asset over HTTP; native builds read a
//! file from disk (`LOANSCOPE_DATA` overrides the default path).

#[cfg(target_arch = "wasm32")]
pub async fn fetch_dataset_text(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch response".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {} fetching {url}", response.status()));
    }
    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| "response body was not text".to_string())
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_dataset_text(path: &str) -> Result<String, String> {
    let path = std::env::var("LOANSCOPE_DATA").unwrap_or_else(|_| path.to_string());
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| format!("{path}: {err}"))
}
