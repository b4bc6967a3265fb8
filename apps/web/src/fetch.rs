use ieam_core::{PrayerRequest, SiteExport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

const SITE_DATA: &str = "site.json";

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

async fn send(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or("no window")?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|error| describe(&error))?;
    let response = value
        .dyn_into::<Response>()
        .map_err(|_| "Failed to read response".to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(response)
}

/// Loads the public snapshot written by `ieam-admin --export`.
pub async fn fetch_site() -> Result<SiteExport, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(SITE_DATA, &opts).map_err(|e| describe(&e))?;

    let response = send(&request).await?;
    let body = response.text().map_err(|e| describe(&e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| describe(&e))?
        .as_string()
        .ok_or("site.json body is not text")?;

    serde_json::from_str(&text).map_err(|error| {
        web_sys::console::error_1(&format!("Failed to parse {SITE_DATA}: {error}").into());
        error.to_string()
    })
}

pub async fn post_prayer(endpoint: &str, prayer: &PrayerRequest) -> Result<(), String> {
    let body = serde_json::to_string(prayer).map_err(|e| e.to_string())?;

    let headers = Headers::new().map_err(|e| describe(&e))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| describe(&e))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(|e| describe(&e))?;

    send(&request).await.map(|_| ()).map_err(|error| {
        web_sys::console::error_1(&format!("Failed to send prayer request: {error}").into());
        error
    })
}
