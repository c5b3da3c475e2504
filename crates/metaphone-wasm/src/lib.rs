// WASM bindings for the Double Metaphone encoder.
//
// Provides a `WasmDoubleMetaphone` class exported via wasm-bindgen that wraps
// `DoubleMetaphone` from the metaphone crate. Code pairs are serialized to
// JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const dm = new WasmDoubleMetaphone();        // or new WasmDoubleMetaphone(6)
//   dm.encode("Schmidt");                        // => { primary: "XMT", secondary: "SMT" }
//   dm.encode("Raziq");                          // => { primary: "RSK", secondary: null }
//   dm.primary("Smith");                         // => "SM0"
//   dm.soundsLike("Smith", "Schmidt");           // => true
//   dm.encode(null);                             // throws "input word is absent"

use wasm_bindgen::prelude::*;

use metaphone::{Codes, DoubleMetaphone, EncodeError, EncoderOptions};

fn encode_error_to_js(e: EncodeError) -> JsError {
    JsError::new(&e.to_string())
}

fn encoder_with(max_length: Option<usize>) -> DoubleMetaphone {
    match max_length {
        Some(max_code_length) => DoubleMetaphone::with_options(EncoderOptions { max_code_length }),
        None => DoubleMetaphone::new(),
    }
}

// ============================================================================
// WasmDoubleMetaphone
// ============================================================================

/// Double Metaphone phonetic encoder for WebAssembly.
#[wasm_bindgen]
pub struct WasmDoubleMetaphone {
    encoder: DoubleMetaphone,
}

#[wasm_bindgen]
impl WasmDoubleMetaphone {
    /// Create an encoder. `max_length` defaults to 4 symbols per code.
    #[wasm_bindgen(constructor)]
    pub fn new(max_length: Option<usize>) -> WasmDoubleMetaphone {
        WasmDoubleMetaphone {
            encoder: encoder_with(max_length),
        }
    }

    /// Encode a word.
    ///
    /// Returns `{ primary, secondary }` with `secondary` null when the word has
    /// a single reading. Throws when `word` is null or undefined.
    pub fn encode(&self, word: Option<String>) -> Result<JsValue, JsError> {
        let codes: Codes = self
            .encoder
            .encode_nullable(word.as_deref())
            .map_err(encode_error_to_js)?;
        serde_wasm_bindgen::to_value(&codes).map_err(|e| JsError::new(&e.to_string()))
    }

    /// The primary code of a word.
    pub fn primary(&self, word: &str) -> Result<String, JsError> {
        let codes = self.encoder.encode(word).map_err(encode_error_to_js)?;
        Ok(codes.into_parts().0)
    }

    /// Whether any reading of `a` matches any reading of `b`.
    #[wasm_bindgen(js_name = "soundsLike")]
    pub fn sounds_like(&self, a: &str, b: &str) -> bool {
        self.encoder.sounds_like(a, b)
    }

    /// Maximum number of symbols per code.
    #[wasm_bindgen(getter, js_name = "maxLength")]
    pub fn max_length(&self) -> usize {
        self.encoder.options().max_code_length
    }

    /// Set the maximum number of symbols per code.
    #[wasm_bindgen(setter, js_name = "maxLength")]
    pub fn set_max_length(&mut self, value: usize) {
        self.encoder.set_max_code_length(value);
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
