use js_sys::Function;
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use sortviz_core::{Config, CountingSort, FrequencyTable, TraceEvent, TraceObserver};
use sortviz_storyboard::{Storyboard, StoryboardConfig};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn set_panic_hook() {
    #[cfg(feature = "console_error")]
    console_error_panic_hook::set_once();
}

/// Optional JSON options accepted by every entry point.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Options {
    engine: Config,
    storyboard: StoryboardConfig,
}

#[derive(Serialize)]
struct SortResult<'a> {
    sorted: &'a [i64],
    frequencies: &'a FrequencyTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [TraceEvent]>,
}

fn parse_values(values: JsValue) -> Result<Vec<i64>, JsError> {
    swb::from_value(values).map_err(|e| JsError::new(&format!("values error: {e}")))
}

fn parse_options(options: JsValue) -> Result<Options, JsError> {
    if jsvalue_is_undefined_or_null(&options) {
        Ok(Options::default())
    } else {
        swb::from_value(options).map_err(|e| JsError::new(&format!("options error: {e}")))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    // Plain JS objects rather than Maps so hosts can read fields directly.
    let ser = swb::Serializer::json_compatible();
    value
        .serialize(&ser)
        .map_err(|e| JsError::new(&format!("output error: {e}")))
}

/// Forwards each trace event to a JS callback `(event) => void`.
struct JsObserver {
    f: Function,
}

impl TraceObserver for JsObserver {
    fn on_event(&mut self, event: &TraceEvent) {
        let arg = match swb::to_value(event) {
            Ok(v) => v,
            Err(e) => {
                log::debug!("dropping {:?} event: serialize error: {e}", event.kind());
                return;
            }
        };
        // Callback errors are the host's concern; the run continues.
        if let Err(err) = self.f.call1(&JsValue::UNDEFINED, &arg) {
            log::debug!("trace callback threw on {:?} event: {err:?}", event.kind());
        }
    }
}

/// Sort `values` (array of non-negative integers).
/// Returns `{ sorted, frequencies, trace }`.
/// Example:
///   sort([4, 2, 2, 8, 3, 3, 1], { engine: { placement: "from_end" } })
#[wasm_bindgen]
pub fn sort(values: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    set_panic_hook();
    let input = parse_values(values)?;
    let opts = parse_options(options)?;
    let (outcome, events) = CountingSort::new(opts.engine)
        .record_trace(&input)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&SortResult {
        sorted: &outcome.sorted,
        frequencies: &outcome.frequencies,
        trace: Some(&events),
    })
}

/// Sort `values`, calling `on_event(event)` synchronously for every trace step.
/// Returns `{ sorted, frequencies }`.
#[wasm_bindgen(js_name = sort_with_callback)]
pub fn sort_with_callback(
    values: JsValue,
    options: JsValue,
    on_event: Function,
) -> Result<JsValue, JsError> {
    set_panic_hook();
    let input = parse_values(values)?;
    let opts = parse_options(options)?;
    let mut observer = JsObserver { f: on_event };
    let outcome = CountingSort::new(opts.engine)
        .sort_traced(&input, &mut observer)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&SortResult {
        sorted: &outcome.sorted,
        frequencies: &outcome.frequencies,
        trace: None,
    })
}

/// Build the timed cue list for sorting `values`. Returns Storyboard JSON.
#[wasm_bindgen]
pub fn storyboard(values: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    set_panic_hook();
    let input = parse_values(values)?;
    let opts = parse_options(options)?;
    let engine = CountingSort::new(opts.engine);
    let sb = Storyboard::build(&input, &opts.storyboard, &engine)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&sb)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
