use super::HostBridge;
use contracts::system::host::HostUser;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// `window.Telegram.WebApp` bridge
pub struct TelegramHost;

impl TelegramHost {
    fn web_app() -> Option<JsValue> {
        let window = web_sys::window()?;
        let telegram = property(&window, "Telegram")?;
        property(&telegram, "WebApp")
    }

    fn call(method: &str) {
        let Some(app) = Self::web_app() else {
            log::debug!("Telegram.WebApp not available, skipping {}()", method);
            return;
        };
        let func = property(&app, method).and_then(|f| f.dyn_into::<Function>().ok());
        match func {
            Some(f) => {
                if let Err(e) = f.call0(&app) {
                    log::warn!("Telegram.WebApp.{}() failed: {:?}", method, e);
                }
            }
            None => log::warn!("Telegram.WebApp.{} is not a function", method),
        }
    }
}

impl HostBridge for TelegramHost {
    fn ready(&self) {
        Self::call("ready");
    }

    fn current_user(&self) -> Option<HostUser> {
        let app = Self::web_app()?;
        let init_data = property(&app, "initDataUnsafe")?;
        let user = property(&init_data, "user")?;
        match serde_wasm_bindgen::from_value::<HostUser>(user) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("cannot decode Telegram user: {}", e);
                None
            }
        }
    }

    fn close(&self) {
        Self::call("close");
    }
}

/// Read `target[key]`, treating `undefined`/`null` as missing
fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}
