//! WASM bindings for browser front ends

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{call_tool, resolve, run_match, tool_manifest, validate, MatchState, Move};
use crate::{RandomOpponent, SeededRng};

/// Run a tool call
///
/// # Arguments
/// * `call_json` - JSON tool call, e.g. `{"tool": "resolve_round", "user_move": "rock", "opponent_move": "paper"}`
///
/// # Returns
/// JSON result of the tool
#[wasm_bindgen]
pub fn invoke_tool(call_json: &str) -> Result<String, JsError> {
    call_tool(call_json).map_err(|e| JsError::new(&e.to_string()))
}

/// Names of the available tools
#[wasm_bindgen]
pub fn get_tool_names() -> js_sys::Array {
    tool_manifest()
        .iter()
        .map(|t| JsValue::from_str(t.name))
        .collect()
}

/// Get the full tool manifest with descriptions
#[wasm_bindgen]
pub fn get_tool_manifest() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&tool_manifest())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Fresh match state as a JS object
#[wasm_bindgen]
pub fn new_match_state() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&MatchState::new())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Check a raw move against a state object.
///
/// Returns the normalized move, or throws with the rejection reason.
#[wasm_bindgen]
pub fn validate_move(user_move: &str, state: JsValue) -> Result<String, JsError> {
    let state: MatchState = serde_wasm_bindgen::from_value(state)
        .map_err(|e| JsError::new(&format!("Invalid state: {}", e)))?;
    validate(user_move, &state)
        .map(|mv| mv.to_string())
        .map_err(|e| JsError::new(&e.reason.to_string()))
}

/// Winner of a round: "user", "opponent" or "draw"
#[wasm_bindgen]
pub fn resolve_round(user_move: &str, opponent_move: &str) -> Result<String, JsError> {
    let user_move: Move = user_move
        .parse()
        .map_err(|_| JsError::new(&format!("Unknown move: {}", user_move)))?;
    let opponent_move: Move = opponent_move
        .parse()
        .map_err(|_| JsError::new(&format!("Unknown move: {}", opponent_move)))?;
    Ok(resolve(user_move, opponent_move).to_string())
}

/// Replay a whole match from the user's inputs against a seeded opponent
///
/// # Returns
/// Serialized MatchSummary
#[wasm_bindgen]
pub fn replay_match(inputs: Vec<String>, seed: u64) -> Result<JsValue, JsError> {
    let summary = run_match(inputs, RandomOpponent::new(SeededRng::new(seed)));
    serde_wasm_bindgen::to_value(&summary)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
