use serde::{Deserialize, Serialize};

use crate::cell::CellPos;
use crate::digit::Digit;

pub const PLAY_PATH: &str = "/play";
pub const FINISH_GAME_PATH: &str = "/finish-game";
pub const MENU_PATH: &str = "/menu";
pub const NEW_GAME_PATH_PREFIX: &str = "/new-game/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRequest {
    pub row: u8,
    pub col: u8,
    pub value: Digit,
}

impl PlayRequest {
    pub fn new(pos: CellPos, value: Digit) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
            value,
        }
    }
}

/// Server verdict on a move. Anything other than the three named values
/// is a rejected move; the server does not distinguish kinds of rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MoveStatus {
    Ok,
    Win,
    GameOver,
    Rejected(String),
}

impl MoveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            MoveStatus::Ok => "ok",
            MoveStatus::Win => "win",
            MoveStatus::GameOver => "game_over",
            MoveStatus::Rejected(raw) => raw.as_str(),
        }
    }
}

impl From<String> for MoveStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ok" => MoveStatus::Ok,
            "win" => MoveStatus::Win,
            "game_over" => MoveStatus::GameOver,
            _ => MoveStatus::Rejected(value),
        }
    }
}

impl From<MoveStatus> for String {
    fn from(value: MoveStatus) -> Self {
        match value {
            MoveStatus::Rejected(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResponse {
    pub status: MoveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<u32>,
}

impl PlayResponse {
    pub fn status(status: MoveStatus) -> Self {
        Self {
            status,
            score: None,
            errors: None,
        }
    }

    pub fn with_score(mut self, delta: i64) -> Self {
        self.score = Some(delta);
        self
    }

    pub fn with_errors(mut self, errors: u32) -> Self {
        self.errors = Some(errors);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishGameRequest {
    pub elapsed_time: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn play_request_uses_flat_fields() {
        let request = PlayRequest::new(CellPos::new(2, 7).unwrap(), Digit::new(9).unwrap());
        assert_eq!(
            encode(&request).as_deref(),
            Some(r#"{"row":2,"col":7,"value":9}"#)
        );
    }

    #[test]
    fn unknown_status_is_rejected_move() {
        let response: PlayResponse = decode(r#"{"status":"error","errors":2}"#).unwrap();
        assert_eq!(response.status, MoveStatus::Rejected("error".to_string()));
        assert_eq!(response.errors, Some(2));
        assert_eq!(response.score, None);
    }

    #[test]
    fn named_statuses_decode() {
        let ok: PlayResponse = decode(r#"{"status":"ok","score":25}"#).unwrap();
        assert_eq!(ok, PlayResponse::status(MoveStatus::Ok).with_score(25));
        let over: PlayResponse = decode(r#"{"status":"game_over"}"#).unwrap();
        assert_eq!(over.status, MoveStatus::GameOver);
        let win: PlayResponse = decode(r#"{"status":"win","score":175}"#).unwrap();
        assert_eq!(win.status, MoveStatus::Win);
    }

    #[test]
    fn negative_score_delta_decodes() {
        let response: PlayResponse = decode(r#"{"status":"error","score":-5,"errors":1}"#).unwrap();
        assert_eq!(response.score, Some(-5));
    }

    #[test]
    fn missing_status_fails() {
        assert!(decode::<PlayResponse>(r#"{"score":5}"#).is_err());
    }

    #[test]
    fn finish_request_field_name() {
        let request = FinishGameRequest { elapsed_time: 321 };
        assert_eq!(encode(&request).as_deref(), Some(r#"{"elapsed_time":321}"#));
    }
}
