//! Browser `fetch` transport for the rpcd API.

use leptos::prelude::set_timeout_with_handle;
use rpcd::{Api, Method, RawReply, Transport, REQUEST_TIMEOUT};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, Response};

pub type BrowserApi = Api<FetchTransport>;

/// Sends requests with `window.fetch`.
///
/// A rejected fetch (network failure, CORS, mixed content) is reported as an
/// unreachable reply, like an XHR with status 0. So is a request aborted
/// after [`REQUEST_TIMEOUT`].
pub struct FetchTransport {
    secure: bool,
}

impl FetchTransport {
    pub fn new() -> Self {
        let secure = web_sys::window()
            .and_then(|window| window.location().protocol().ok())
            .is_some_and(|protocol| protocol == "https:");
        Self { secure }
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for FetchTransport {
    async fn send(&self, method: Method, url: &str, body: Option<String>) -> RawReply {
        match fetch(method, url, body).await {
            Ok(reply) => reply,
            Err(e) => {
                log::debug!("fetch {} failed: {:?}", url, e);
                RawReply::unreachable()
            }
        }
    }

    fn secure_origin(&self) -> bool {
        self.secure
    }
}

async fn fetch(method: Method, url: &str, body: Option<String>) -> Result<RawReply, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let abort = AbortController::new()?;
    let init = RequestInit::new();
    init.set_method(method.as_str());
    init.set_signal(Some(&abort.signal()));
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(&body));
    }
    let request = Request::new_with_str_and_init(url, &init)?;

    // Aborting also rejects a body read still in flight
    let timer = set_timeout_with_handle(move || abort.abort(), REQUEST_TIMEOUT)?;
    let exchange = async {
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        let text = JsFuture::from(response.text()?).await?;
        Ok::<_, JsValue>((response, text))
    };
    let result = exchange.await;
    timer.clear();
    let (response, text) = result?;

    Ok(RawReply::new(
        response.status(),
        response.status_text(),
        text.as_string().unwrap_or_default(),
    ))
}

/// API base from `window.config.api`. Empty (page-relative) when unset.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("config"))
        .ok()
        .filter(|config| config.is_object())
        .and_then(|config| js_sys::Reflect::get(&config, &JsValue::from_str("api")).ok())
        .and_then(|api| api.as_string())
        .unwrap_or_default()
}

/// Client for the configured API base.
pub fn browser_api() -> BrowserApi {
    let base = api_base();
    log::info!("rpcd API base: {}", if base.is_empty() { "(page origin)" } else { &base });
    Api::new(FetchTransport::new(), base)
}
