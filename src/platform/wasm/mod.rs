//! Browser platform implementation.

pub mod api;
pub mod peer_connection;
pub mod rtc_stats;

use js_sys::Reflect;
use once_cell::sync::OnceCell;
use wasm_bindgen::{JsCast as _, JsValue};

use crate::{conf, platform};

/// Marks that [`init_once()`] has already been run.
static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Installs the panic hook and the logger configured by the provided
/// [`conf::Log`].
///
/// Only the first call takes effect, so the [`conf::Log`] of the later calls
/// is ignored.
pub fn init_once(conf: &conf::Log) {
    INITIALIZED.get_or_init(|| {
        #[cfg(feature = "console_error_panic_hook")]
        set_panic_hook();
        init_logger(conf);
    });
}

/// Sets up [`wasm_logger`] with the level of the provided [`conf::Log`].
///
/// Does nothing if logging is disabled.
pub fn init_logger(conf: &conf::Log) {
    if let Some(level) = conf.level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }
}

/// Forwards Rust panics to the browser console.
///
/// Must be called at least once during initialization.
#[cfg(feature = "console_error_panic_hook")]
#[inline]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns property of JS object by the provided `name` if it's defined.
/// Converts the returned value with the provided function.
pub fn get_property_by_name<T, F, U>(
    value: &T,
    name: &str,
    into: F,
) -> Option<U>
where
    T: AsRef<JsValue>,
    F: Fn(JsValue) -> Option<U>,
{
    Reflect::get(value.as_ref(), &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined())
        .and_then(into)
}

impl From<JsValue> for platform::Error {
    fn from(val: JsValue) -> Self {
        match val.dyn_into::<js_sys::Error>() {
            Ok(err) => Self::new(
                String::from(err.name()),
                String::from(err.message()),
            ),
            Err(val) => match val.as_string() {
                Some(message) => Self::new("Error", message),
                None => Self::new("Error", format!("{:?}", val)),
            },
        }
    }
}
