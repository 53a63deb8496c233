#![cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Reflect, JSON};
use serde_wasm_bindgen as swb;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use sortviz_wasm::{abi_version, sort, sort_with_callback, storyboard};

wasm_bindgen_test_configure!(run_in_browser);

fn values(v: &[i64]) -> JsValue {
    swb::to_value(v).unwrap()
}

fn field(obj: &JsValue, name: &str) -> serde_json::Value {
    let v = Reflect::get(obj, &JsValue::from_str(name)).unwrap();
    swb::from_value(v).unwrap()
}

#[wasm_bindgen_test]
fn abi_is_1() {
    assert_eq!(abi_version(), 1);
}

#[wasm_bindgen_test]
fn sort_returns_output_table_and_trace() {
    let out = sort(values(&[4, 2, 2, 8, 3, 3, 1]), JsValue::UNDEFINED).unwrap();
    assert_eq!(field(&out, "sorted"), serde_json::json!([1, 2, 2, 3, 3, 4, 8]));
    assert_eq!(
        field(&out, "frequencies"),
        serde_json::json!([0, 1, 2, 2, 1, 0, 0, 0, 1])
    );
    let trace = field(&out, "trace");
    assert_eq!(trace.as_array().unwrap().len(), 14);
    assert_eq!(trace[0]["kind"], "increment-count");
}

#[wasm_bindgen_test]
fn negative_values_surface_as_errors() {
    assert!(sort(values(&[1, -1]), JsValue::NULL).is_err());
}

#[wasm_bindgen_test]
fn callback_receives_every_event() {
    let sink = Array::new();
    let push = Function::new_with_args("e", "this.push(e)").bind(&sink);
    let out = sort_with_callback(values(&[2, 0, 1]), JsValue::NULL, push).unwrap();
    assert_eq!(field(&out, "sorted"), serde_json::json!([0, 1, 2]));
    assert_eq!(sink.length(), 6);
}

#[wasm_bindgen_test]
fn storyboard_uses_render_defaults() {
    let sb = storyboard(values(&[0]), JsValue::UNDEFINED).unwrap();
    let render = field(&sb, "render");
    assert_eq!(render["frame_rate"], 30.0);
    assert_eq!(render["pixel_height"], 720);
}

fn options(json: &str) -> JsValue {
    JSON::parse(json).unwrap()
}

#[wasm_bindgen_test]
fn engine_options_switch_placement_order() {
    let out = sort(
        values(&[4, 2, 2, 8, 3, 3, 1]),
        options(r#"{ "engine": { "placement": "from_end" } }"#),
    )
    .unwrap();
    assert_eq!(field(&out, "sorted"), serde_json::json!([1, 2, 2, 3, 3, 4, 8]));
    let trace = field(&out, "trace");
    assert_eq!(trace[7]["kind"], "place-output");
    assert_eq!(trace[7]["value"], 8);
    assert_eq!(trace[7]["slot"], 6);
}

#[wasm_bindgen_test]
fn engine_options_can_reject_empty_input() {
    let res = sort(values(&[]), options(r#"{ "engine": { "empty_input": "reject" } }"#));
    assert!(res.is_err());
}

#[wasm_bindgen_test]
fn storyboard_options_override_pacing_and_render() {
    let sb = storyboard(
        values(&[0]),
        options(r#"{ "storyboard": { "step_seconds": 0.25, "render": { "frame_rate": 60 } } }"#),
    )
    .unwrap();
    assert_eq!(field(&sb, "render")["frame_rate"], 60.0);
    let cues = field(&sb, "cues");
    let step = cues
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["action"] == "set_count")
        .unwrap();
    assert_eq!(step["duration"], 0.25);
}

#[wasm_bindgen_test]
fn throwing_callback_does_not_abort_the_run() {
    let throws = Function::new_with_args("e", "throw new Error('boom')");
    let out = sort_with_callback(values(&[1, 0]), JsValue::NULL, throws).unwrap();
    assert_eq!(field(&out, "sorted"), serde_json::json!([0, 1]));
}
