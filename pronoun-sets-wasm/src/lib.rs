use pronoun_sets::{PronounInput, Pronouns, Table};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Classify an arbitrary JS value. Values that don't survive the trip
/// through JSON are unrecognized input.
fn input_from_js(value: JsValue) -> PronounInput {
    match serde_wasm_bindgen::from_value::<serde_json::Value>(value) {
        Ok(json) => PronounInput::from_json(&json),
        Err(_) => PronounInput::Unrecognized,
    }
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

// ============================================================================
// PROFILES
// ============================================================================

/// A pronoun profile resolved against the built-in table.
#[wasm_bindgen]
pub struct WasmPronouns {
    inner: Pronouns<'static>,
}

impl WasmPronouns {
    fn build(input: PronounInput, logging: bool) -> Self {
        Self {
            inner: pronoun_sets::pronouns(input, logging),
        }
    }
}

#[wasm_bindgen]
impl WasmPronouns {
    /// Append more sets; anything already selected is skipped.
    pub fn add(&mut self, input: JsValue) {
        self.inner.add(input_from_js(input));
    }

    #[wasm_bindgen(js_name = generateForms)]
    pub fn generate_forms(&mut self, index: usize) {
        self.inner.generate_forms(index);
    }

    #[wasm_bindgen(js_name = generateExamples)]
    pub fn generate_examples(&mut self) {
        self.inner.generate_examples();
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_js_string(&self) -> String {
        self.inner.to_string()
    }

    #[wasm_bindgen(js_name = toUrl)]
    pub fn to_url(&self) -> String {
        self.inner.to_url()
    }

    #[wasm_bindgen(getter)]
    pub fn any(&self) -> bool {
        self.inner.any()
    }

    /// Plain object with the selection, forms and example sentences.
    pub fn view(&self) -> JsValue {
        to_js(&self.inner.view())
    }
}

/// Resolve `input` (string, array of forms, or `{ pronouns: [...] }`).
///
/// `log` is read by JS truthiness and enables console diagnostics for this
/// profile.
#[wasm_bindgen]
pub fn pronouns(input: JsValue, log: JsValue) -> WasmPronouns {
    WasmPronouns::build(input_from_js(input), log.is_truthy())
}

// ============================================================================
// TABLE AND COMPLETION
// ============================================================================

#[wasm_bindgen]
pub fn complete(input: &str) -> JsValue {
    to_js(&pronoun_sets::complete(input))
}

/// The built-in table as an array of slug arrays.
#[wasm_bindgen]
pub fn table() -> JsValue {
    to_js(&table_internal(Table::builtin()))
}

/// Shortest unambiguous path of every built-in row, in table order.
#[wasm_bindgen]
pub fn abbreviated() -> JsValue {
    to_js(&abbreviated_internal(Table::builtin()))
}

fn table_internal(table: &Table) -> Vec<Vec<String>> {
    table.iter().map(|row| row.slugs().to_vec()).collect()
}

fn abbreviated_internal(table: &Table) -> Vec<Vec<String>> {
    table.abbreviations().iter().map(<[String]>::to_vec).collect()
}
