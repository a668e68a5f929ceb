// Bridge to the AOS scroll-animation library loaded by the host page.
// Every call is best-effort: a missing library leaves the page un-animated.

use js_sys::{Function, JSON, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config::AnimationConfig;

fn aos() -> Option<JsValue> {
    let lib = Reflect::get(&js_sys::global(), &JsValue::from_str("AOS")).ok()?;
    if lib.is_undefined() || lib.is_null() {
        None
    } else {
        Some(lib)
    }
}

fn call(lib: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let f: Function = Reflect::get(lib, &JsValue::from_str(method))?.dyn_into()?;
    match args {
        [] => f.call0(lib),
        [a] => f.call1(lib, a),
        _ => Err(JsValue::from_str("unsupported arity")),
    }
}

/// One-time `AOS.init(config)` at startup.
pub fn init(config: &AnimationConfig) {
    let Some(lib) = aos() else {
        log::debug!("AOS not present; animations disabled");
        return;
    };
    let opts = match serde_json::to_string(config) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("cannot encode animation config: {}", e);
            return;
        }
    };
    let result = JSON::parse(&opts).and_then(|o| call(&lib, "init", &[o]));
    if let Err(e) = result {
        log::warn!("AOS.init failed: {:?}", e);
    }
}

/// Calls `AOS.refresh()` once after `delay_ms` so freshly inserted cards are picked up.
pub fn schedule_refresh(delay_ms: u32) {
    let Some(win) = web_sys::window() else { return };
    let cb = Closure::once_into_js(move || {
        if let Some(lib) = aos() {
            if let Err(e) = call(&lib, "refresh", &[]) {
                log::debug!("AOS.refresh failed: {:?}", e);
            }
        }
    });
    let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
    if let Err(e) =
        win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), timeout)
    {
        log::debug!("could not schedule animation refresh: {:?}", e);
    }
}
