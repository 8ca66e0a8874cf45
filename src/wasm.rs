//! WASM bindings for route optimization.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { optimizeRoute } from 'u-antcolony';
//!
//! await init();
//! const { route } = optimizeRoute(
//!     { cities: [{ name: 'A', x: 0, y: 0 }, { name: 'B', x: 3, y: 4 }] },
//!     { seed: 42 },
//! );
//! ```

// WASM-bindgen exports don't need #[must_use] - values returned to JS
#![allow(clippy::must_use_candidate)]

use wasm_bindgen::prelude::*;

use crate::aco::AcoConfig;
use crate::error::AcoError;
use crate::route::RouteRequest;

/// Orders `request.cities` into a short tour.
///
/// `config` may be `undefined`/`null` for defaults, or a partial
/// `AcoConfig` object; missing fields take their default values.
/// `time_limit_ms` is rejected: wasm32 has no monotonic clock.
#[wasm_bindgen(js_name = optimizeRoute)]
pub fn optimize_route_js(request: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let request: RouteRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("invalid input: {e}")))?;

    let config: AcoConfig = if config.is_undefined() || config.is_null() {
        AcoConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?
    };

    check_clockless(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let response = request
        .solve(&config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&response).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Rejects settings that need `std::time::Instant`.
fn check_clockless(config: &AcoConfig) -> crate::Result<()> {
    match config.time_limit_ms {
        Some(_) => Err(AcoError::InvalidConfig(
            "time_limit_ms is not supported in wasm".into(),
        )),
        None => Ok(()),
    }
}
