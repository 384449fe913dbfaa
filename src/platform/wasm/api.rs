//! JS interface of this library.

use std::convert::TryFrom;

use js_sys::Promise;
use tracerr::Traced;
use wasm_bindgen::{prelude::*, JsValue};
use wasm_bindgen_futures::future_to_promise;

use crate::{
    conf, peer,
    platform::{self, RtcPeerConnection},
    stats::{PeerConnectionId, StatsReportError},
};

impl TryFrom<JsValue> for PeerConnectionId {
    type Error = Traced<StatsReportError>;

    fn try_from(value: JsValue) -> Result<Self, Self::Error> {
        value
            .as_string()
            .map(Self::from)
            .ok_or_else(|| {
                tracerr::new!(StatsReportError::InvalidPeerConnectionId)
            })
    }
}

/// Queries stats of all the tracks of the provided [RTCPeerConnection][1]
/// and resolves with a `StatsReport` having the provided ID.
///
/// The optional `conf` is a plain object shaped as [`conf::Conf`], for
/// example `{ log: { level: "DEBUG" }, stats: { vendor: "firefox" } }`.
/// Omitted options take their default values. The `log` settings and the
/// panic hook are applied by the first call only.
///
/// Rejects with a JS `Error` if the ID is not a string, the `conf` is
/// invalid or stats cannot be queried.
///
/// [1]: https://w3.org/TR/webrtc/#dom-rtcpeerconnection
#[wasm_bindgen(js_name = getStatsReport)]
pub fn get_stats_report(
    peer_connection: web_sys::RtcPeerConnection,
    peer_connection_id: JsValue,
    conf: JsValue,
) -> Promise {
    future_to_promise(async move {
        let conf = parse_conf(&conf).map_err(into_js_error)?;
        platform::init_once(&conf.log);

        let id = PeerConnectionId::try_from(peer_connection_id)
            .map_err(into_js_error)?;
        let peer = RtcPeerConnection::from(peer_connection);

        let report = peer::get_stats_report(id, &peer, &conf.stats)
            .await
            .map_err(into_js_error)?;

        JsValue::from_serde(&report).map_err(|e| {
            JsValue::from(js_sys::Error::new(&format!(
                "Failed to serialize StatsReport: {}",
                e,
            )))
        })
    })
}

/// Reads a [`conf::Conf`] out of the provided JS value.
///
/// `undefined` and `null` yield the default [`conf::Conf`].
fn parse_conf(
    value: &JsValue,
) -> Result<conf::Conf, Traced<serde_json::Error>> {
    let value = if value.is_undefined() || value.is_null() {
        serde_json::Value::Null
    } else {
        value.into_serde().map_err(tracerr::wrap!())?
    };
    conf::Conf::from_json(value).map_err(tracerr::wrap!())
}

/// Logs the provided [`Traced`] error and converts it into a JS `Error`.
fn into_js_error<E>(err: Traced<E>) -> JsValue
where
    E: std::fmt::Display,
{
    let (err, trace) = err.into_parts();
    log::error!("{}\n{}", err, trace);
    js_sys::Error::new(&err.to_string()).into()
}
