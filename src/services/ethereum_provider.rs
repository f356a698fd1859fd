// ============================================================================
// ETHEREUM PROVIDER - Puente EIP-1193 (`window.ethereum`)
// ============================================================================
// SOLO comunicación con la wallet inyectada. Firma, red y transporte
// son responsabilidad de la wallet.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use js_sys::{Function, Object, Promise, Reflect, JSON};
use serde_json::Value;
use crate::errors::ProviderError;

/// Provider EIP-1193 inyectado por la wallet del navegador
#[derive(Clone)]
pub struct EthereumProvider {
    inner: JsValue,
}

impl EthereumProvider {
    /// Buscar `window.ethereum`
    pub fn detect() -> Result<Self, ProviderError> {
        let window = web_sys::window().ok_or(ProviderError::NotInstalled)?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map_err(|_| ProviderError::NotInstalled)?;

        if ethereum.is_undefined() || ethereum.is_null() {
            return Err(ProviderError::NotInstalled);
        }

        Ok(Self { inner: ethereum })
    }

    /// `ethereum.request({ method, params })`. `Value::Null` omite params.
    pub async fn request(&self, method: &str, params: Value) -> Result<JsValue, ProviderError> {
        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
            .map_err(|e| ProviderError::Malformed(js_error_text(&e)))?;

        if !params.is_null() {
            let js_params = JSON::parse(&params.to_string())
                .map_err(|e| ProviderError::Malformed(js_error_text(&e)))?;
            Reflect::set(&args, &JsValue::from_str("params"), &js_params)
                .map_err(|e| ProviderError::Malformed(js_error_text(&e)))?;
        }

        let request_fn = Reflect::get(&self.inner, &JsValue::from_str("request"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| ProviderError::Malformed("provider has no request()".to_string()))?;

        let promise = request_fn
            .call1(&self.inner, &args)
            .map_err(rpc_error_from_js)?
            .dyn_into::<Promise>()
            .map_err(|_| ProviderError::Malformed("request() did not return a promise".to_string()))?;

        log::debug!("📡 [PROVIDER] {}", method);
        JsFuture::from(promise).await.map_err(rpc_error_from_js)
    }

    /// Igual que `request` pero devuelve el resultado como JSON
    pub async fn request_json(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let result = self.request(method, params).await?;
        if result.is_undefined() || result.is_null() {
            return Ok(Value::Null);
        }

        let text = JSON::stringify(&result)
            .map_err(|e| ProviderError::Malformed(js_error_text(&e)))?
            .as_string()
            .unwrap_or_default();
        serde_json::from_str(&text).map_err(|e| ProviderError::Malformed(e.to_string()))
    }

    /// Registrar un listener `ethereum.on(event, handler)`.
    /// Los listeners viven toda la app: registrarlos una sola vez.
    pub fn on<F>(&self, event: &str, handler: F) -> Result<(), ProviderError>
    where
        F: FnMut(JsValue) + 'static,
    {
        let on_fn = Reflect::get(&self.inner, &JsValue::from_str("on"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| ProviderError::Malformed("provider has no on()".to_string()))?;

        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
        on_fn
            .call2(&self.inner, &JsValue::from_str(event), closure.as_ref())
            .map_err(rpc_error_from_js)?;
        closure.forget();
        Ok(())
    }
}

/// Convertir un error JS (`{ code, message }` de EIP-1193) a ProviderError
fn rpc_error_from_js(err: JsValue) -> ProviderError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);

    ProviderError::Rpc {
        code,
        message: js_error_text(&err),
    }
}

/// Texto legible de un error JS
fn js_error_text(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "Unknown wallet error".to_string())
}
