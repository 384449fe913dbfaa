#![cfg(target_arch = "wasm32")]

use medea_track_stats::{conf, platform};
use serde_json::{json, Value};
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn peer_connection() -> web_sys::RtcPeerConnection {
    web_sys::RtcPeerConnection::new().unwrap()
}

/// Awaits the provided `getStatsReport()` call and returns the message of the
/// JS `Error` it rejects with.
async fn rejection_message(promise: js_sys::Promise) -> String {
    let err = JsFuture::from(promise).await.unwrap_err();
    String::from(err.dyn_into::<js_sys::Error>().unwrap().message())
}

#[wasm_bindgen_test]
async fn resolves_report_of_peer_without_tracks() {
    let promise = platform::get_stats_report(
        peer_connection(),
        JsValue::from_str("pc-1"),
        JsValue::UNDEFINED,
    );

    let report: Value =
        JsFuture::from(promise).await.unwrap().into_serde().unwrap();

    assert_eq!(
        report,
        json!({
            "peerConnectionId": "pc-1",
            "localAudioTrackStats": [],
            "localVideoTrackStats": [],
            "remoteAudioTrackStats": [],
            "remoteVideoTrackStats": [],
        }),
    );
}

#[wasm_bindgen_test]
async fn accepts_conf_object() {
    let conf = JsValue::from_serde(&json!({
        "log": { "level": "DEBUG" },
        "stats": { "vendor": "firefox" },
    }))
    .unwrap();

    let promise = platform::get_stats_report(
        peer_connection(),
        JsValue::from_str("pc-2"),
        conf,
    );

    let report: Value =
        JsFuture::from(promise).await.unwrap().into_serde().unwrap();
    assert_eq!(report["peerConnectionId"], "pc-2");
}

#[wasm_bindgen_test]
async fn rejects_non_string_peer_connection_id() {
    let promise = platform::get_stats_report(
        peer_connection(),
        JsValue::from_f64(42.0),
        JsValue::NULL,
    );

    assert_eq!(
        rejection_message(promise).await,
        "RTCPeerConnection id must be a string",
    );
}

#[wasm_bindgen_test]
async fn rejects_invalid_conf() {
    let conf =
        JsValue::from_serde(&json!({ "stats": { "vendor": "safari" } }))
            .unwrap();

    let promise = platform::get_stats_report(
        peer_connection(),
        JsValue::from_str("pc-3"),
        conf,
    );

    assert!(rejection_message(promise).await.contains("safari"));
}

#[wasm_bindgen_test]
fn init_is_idempotent() {
    platform::init_once(&conf::Log::default());
    platform::init_once(&conf::Log::default());

    assert_ne!(log::max_level(), log::LevelFilter::Off);
}
