//! Deserialization of the vendor stats responses from their JS values.

use std::{collections::HashMap, rc::Rc};

use derive_more::Display;
use js_sys::{Array as JsArray, Date, Function as JsFunction, Object};
use tracerr::Traced;
use wasm_bindgen::{JsCast as _, JsValue};

use crate::{
    platform::{self, wasm::get_property_by_name},
    vendor::{LegacyStatsReport, LegacyStatsResponse, MapStatsReport},
};

/// Errors which can occur while reading a vendor stats response.
#[derive(Clone, Debug, Display)]
pub enum RtcStatsError {
    /// `RTCStatsResponse.result()` is not a function.
    #[display(fmt = "RTCStatsResponse.result is undefined")]
    UndefinedResult,

    /// Legacy stats report has no `names()` function.
    #[display(fmt = "RTCStatsReport.names is undefined")]
    UndefinedNames,

    /// Entry of `RTCStatsReport` has no ID.
    #[display(fmt = "RTCStatsReport entry ID is undefined")]
    UndefinedId,

    /// Entry of `RTCStatsReport` has no stats.
    #[display(fmt = "RTCStatsReport entry stats are undefined")]
    UndefinedStats,

    /// JS side error.
    #[display(fmt = "Unexpected JS side error: {}", _0)]
    Platform(platform::Error),

    /// Stats dictionary cannot be represented as JSON.
    #[display(fmt = "Failed to deserialize into RtcStats: {}", _0)]
    ParseError(Rc<serde_json::Error>),
}

impl From<RtcStatsError> for platform::Error {
    fn from(err: RtcStatsError) -> Self {
        match err {
            RtcStatsError::Platform(e) => e,
            _ => Self::new("RtcStatsError", err.to_string()),
        }
    }
}

/// Reads [`LegacyStatsResponse`] from the `RTCStatsResponse` resolved by the
/// callback-based `getStats()`.
///
/// # Errors
///
/// If the response doesn't have the legacy shape.
pub fn parse_legacy_response(
    response: &JsValue,
) -> Result<LegacyStatsResponse, Traced<RtcStatsError>> {
    let result = call_method(response, "result")?
        .ok_or_else(|| tracerr::new!(RtcStatsError::UndefinedResult))?;

    JsArray::from(&result)
        .iter()
        .map(|report| parse_legacy_report(&report))
        .collect::<Result<Vec<_>, _>>()
        .map(LegacyStatsResponse::from)
}

/// Reads a single [`LegacyStatsReport`] with all its `names()` stats.
fn parse_legacy_report(
    report: &JsValue,
) -> Result<LegacyStatsReport, Traced<RtcStatsError>> {
    let names = call_method(report, "names")?
        .ok_or_else(|| tracerr::new!(RtcStatsError::UndefinedNames))?;
    let stat_fn = get_property_by_name(report, "stat", |f| {
        f.dyn_into::<JsFunction>().ok()
    });

    let mut stats = HashMap::new();
    if let Some(stat_fn) = stat_fn {
        for name in JsArray::from(&names).iter() {
            let name = match name.as_string() {
                Some(name) => name,
                None => continue,
            };
            let value = stat_fn
                .call1(report, &JsValue::from_str(&name))
                .map_err(|e| {
                    tracerr::new!(RtcStatsError::Platform(e.into()))
                })?;
            if let Some(value) = js_to_string(&value) {
                stats.insert(name, value);
            }
        }
    }

    Ok(LegacyStatsReport {
        id: get_property_by_name(report, "id", |v| v.as_string())
            .unwrap_or_default(),
        kind: get_property_by_name(report, "type", |v| v.as_string())
            .unwrap_or_default(),
        timestamp: get_property_by_name(report, "timestamp", |v| {
            v.dyn_ref::<Date>().map(Date::get_time).or_else(|| v.as_f64())
        }),
        stats,
    })
}

/// Reads [`MapStatsReport`] from the `RTCStatsReport` resolved by the
/// map-based `getStats()`.
///
/// Iterates its `entries()` if there are any, or its own enumerable
/// properties otherwise.
///
/// # Errors
///
/// If any entry has no ID or stats, or its stats cannot be represented as
/// JSON.
pub fn parse_map_report(
    report: &JsValue,
) -> Result<MapStatsReport, Traced<RtcStatsError>> {
    let entries = match call_method(report, "entries")? {
        Some(iterator) => JsArray::from(&iterator),
        None => Object::entries(report.unchecked_ref::<Object>()),
    };

    let mut stats = Vec::with_capacity(entries.length() as usize);
    for entry in entries.iter() {
        let entry = entry.unchecked_into::<JsArray>();
        let id = entry
            .get(0)
            .as_string()
            .ok_or_else(|| tracerr::new!(RtcStatsError::UndefinedId))?;
        let value = entry.get(1);
        if value.is_undefined() {
            return Err(tracerr::new!(RtcStatsError::UndefinedStats));
        }
        let value: serde_json::Value = value.into_serde().map_err(|e| {
            tracerr::new!(RtcStatsError::ParseError(Rc::new(e)))
        })?;
        stats.push((id, value));
    }

    Ok(MapStatsReport(stats))
}

/// Calls a method of the provided JS `object` without arguments.
///
/// Returns `None` if there is no such method.
fn call_method(
    object: &JsValue,
    name: &str,
) -> Result<Option<JsValue>, Traced<RtcStatsError>> {
    get_property_by_name(object, name, |f| f.dyn_into::<JsFunction>().ok())
        .map(|f| {
            f.call0(object).map_err(|e| {
                tracerr::new!(RtcStatsError::Platform(e.into()))
            })
        })
        .transpose()
}

/// Renders the provided stat value the way JS `String()` does for the
/// primitive values.
fn js_to_string(value: &JsValue) -> Option<String> {
    if let Some(s) = value.as_string() {
        Some(s)
    } else if let Some(n) = value.as_f64() {
        Some(n.to_string())
    } else {
        value.as_bool().map(|b| b.to_string())
    }
}
