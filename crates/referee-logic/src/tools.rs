//! JSON tool surface
//!
//! Exposes validate / resolve / update / choose as tool calls taking and
//! returning JSON, for agent frameworks and other out-of-process drivers.
//! There is one code path: every tool delegates to the same functions the
//! native referee uses.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::error::{InvalidReason, RefereeError};
use crate::moves::{Move, Outcome};
use crate::opponent::select_opponent_move;
use crate::random::SeededRng;
use crate::state::MatchState;
use crate::update::update;
use crate::validate::validate;
use crate::resolve;

/// A single tool invocation, tagged by tool name
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolCall {
    ValidateMove {
        user_move: String,
        state: MatchState,
    },
    ResolveRound {
        user_move: String,
        #[serde(alias = "bot_move")]
        opponent_move: String,
    },
    UpdateGameState {
        state: MatchState,
        user_move: String,
        #[serde(alias = "bot_move")]
        opponent_move: String,
        result: RoundResult,
    },
    #[serde(alias = "choose_bot_move")]
    ChooseOpponentMove {
        state: MatchState,
        seed: u64,
    },
}

/// `{"winner": "user" | "opponent" | "draw"}`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner: Outcome,
}

/// `{"valid": true, "move": ..}` or `{"valid": false, "reason": ..}`
#[derive(Clone, Debug, Serialize)]
struct ValidationResult {
    valid: bool,
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    mv: Option<Move>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<InvalidReason>,
}

#[derive(Clone, Debug, Serialize)]
struct ChosenMove {
    #[serde(rename = "move")]
    mv: Move,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Tools available to an agent driving the match
pub fn tool_manifest() -> Vec<ToolInfo> {
    vec![
        ToolInfo {
            name: "validate_move",
            description: "Normalize a raw user move and check it against the rules.",
        },
        ToolInfo {
            name: "resolve_round",
            description: "Decide the winner of a round from two validated moves.",
        },
        ToolInfo {
            name: "update_game_state",
            description: "Apply a resolved round to the match state.",
        },
        ToolInfo {
            name: "choose_opponent_move",
            description: "Pick the opponent's move uniformly at random from a seed.",
        },
    ]
}

fn known_move(raw: &str) -> Result<Move, RefereeError> {
    Move::normalize(raw).ok_or_else(|| RefereeError::Tool(format!("unknown move {:?}", raw)))
}

impl ToolCall {
    pub fn invoke(self) -> Result<Value, RefereeError> {
        log::debug!("tool call: {:?}", self);
        let value = match self {
            ToolCall::ValidateMove { user_move, state } => {
                let result = match validate(&user_move, &state) {
                    Ok(mv) => ValidationResult { valid: true, mv: Some(mv), reason: None },
                    Err(e) => ValidationResult { valid: false, mv: None, reason: Some(e.reason) },
                };
                serde_json::to_value(result)?
            }
            ToolCall::ResolveRound { user_move, opponent_move } => {
                let winner = resolve(known_move(&user_move)?, known_move(&opponent_move)?);
                serde_json::to_value(RoundResult { winner })?
            }
            ToolCall::UpdateGameState { mut state, user_move, opponent_move, result } => {
                let user_move = known_move(&user_move)?;
                let opponent_move = known_move(&opponent_move)?;
                update(&mut state, user_move, opponent_move, result.winner);
                serde_json::to_value(state)?
            }
            ToolCall::ChooseOpponentMove { state, seed } => {
                let mut rng = SeededRng::new(seed);
                let mv = select_opponent_move(&state, &mut rng);
                serde_json::to_value(ChosenMove { mv })?
            }
        };
        Ok(value)
    }
}

/// Parse a JSON tool call, run it and return the JSON result
pub fn call_tool(json: &str) -> Result<String, RefereeError> {
    let call: ToolCall = serde_json::from_str(json)?;
    let value = call.invoke()?;
    Ok(value.to_string())
}
