use std::fmt;

use crate::cell::{BoardCells, CellPos, CellState};
use crate::config::SessionConfig;
use crate::digit::Digit;
use crate::protocol::{FinishGameRequest, MoveStatus, PlayRequest, PlayResponse};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Finish {
    Won,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Playing,
    Finished(Finish),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingMove {
    pub pos: CellPos,
    pub digit: Digit,
}

/// Why a cell click did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRefusal {
    NoSelection,
    CellNotEditable,
    MoveInFlight,
    Finished,
}

impl fmt::Display for SubmitRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubmitRefusal::NoSelection => "no digit selected",
            SubmitRefusal::CellNotEditable => "cell is not editable",
            SubmitRefusal::MoveInFlight => "a move is already in flight",
            SubmitRefusal::Finished => "game already finished",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Filled { pos: CellPos, digit: Digit },
    Won { finish: FinishGameRequest },
    GameOver,
    /// `errors` is the new error count to display, when the server sent one.
    Rejected { errors: Option<u32> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResolution {
    /// New score total, set whenever the response carried a delta.
    pub score: Option<i64>,
    pub outcome: MoveOutcome,
}

/// Client-side mirror of one puzzle session. Lives from page load until
/// the controller navigates away.
#[derive(Clone, Debug)]
pub struct GameSession {
    selected: Option<Digit>,
    score: i64,
    elapsed: u32,
    errors: u32,
    board: BoardCells,
    pending: Option<PendingMove>,
    phase: SessionPhase,
}

impl GameSession {
    pub fn new(config: &SessionConfig, board: BoardCells) -> Self {
        Self {
            selected: None,
            score: config.initial_score,
            elapsed: config.initial_time,
            errors: config.initial_errors,
            board,
            pending: None,
            phase: SessionPhase::Playing,
        }
    }

    pub fn selected(&self) -> Option<Digit> {
        self.selected
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn errors(&self) -> u32 {
        self.errors
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, SessionPhase::Finished(_))
    }

    pub fn pending(&self) -> Option<PendingMove> {
        self.pending
    }

    pub fn cell(&self, pos: CellPos) -> Option<CellState> {
        self.board.state(pos)
    }

    pub fn select(&mut self, digit: Digit) {
        self.selected = Some(digit);
    }

    /// Advances the clock by one second. Returns the new value, or `None`
    /// once the session is finished.
    pub fn tick(&mut self) -> Option<u32> {
        if self.is_finished() {
            return None;
        }
        self.elapsed = self.elapsed.saturating_add(1);
        Some(self.elapsed)
    }

    /// Starts a move on `pos` with the selected digit. Only one move may be
    /// in flight at a time.
    pub fn begin_move(&mut self, pos: CellPos) -> Result<PlayRequest, SubmitRefusal> {
        let digit = self.selected.ok_or(SubmitRefusal::NoSelection)?;
        if self.is_finished() {
            return Err(SubmitRefusal::Finished);
        }
        if self.pending.is_some() {
            return Err(SubmitRefusal::MoveInFlight);
        }
        if !self.board.is_editable(pos) {
            return Err(SubmitRefusal::CellNotEditable);
        }
        self.pending = Some(PendingMove { pos, digit });
        Ok(PlayRequest::new(pos, digit))
    }

    /// Applies the server verdict for the pending move. Returns `None` if
    /// no move was pending.
    pub fn resolve_move(&mut self, response: &PlayResponse) -> Option<MoveResolution> {
        let pending = self.pending.take()?;

        let score = response.score.map(|delta| {
            self.score = self.score.saturating_add(delta);
            self.score
        });

        let outcome = match &response.status {
            MoveStatus::Ok => {
                self.board.fill(pending.pos, pending.digit);
                MoveOutcome::Filled {
                    pos: pending.pos,
                    digit: pending.digit,
                }
            }
            MoveStatus::Win => {
                self.phase = SessionPhase::Finished(Finish::Won);
                MoveOutcome::Won {
                    finish: FinishGameRequest {
                        elapsed_time: self.elapsed,
                    },
                }
            }
            MoveStatus::GameOver => {
                self.phase = SessionPhase::Finished(Finish::Lost);
                MoveOutcome::GameOver
            }
            MoveStatus::Rejected(_) => {
                if let Some(errors) = response.errors {
                    self.errors = errors;
                }
                MoveOutcome::Rejected {
                    errors: response.errors,
                }
            }
        };

        Some(MoveResolution { score, outcome })
    }

    /// Drops the pending move after a transport failure so the player can
    /// try again.
    pub fn abandon_move(&mut self) -> Option<PendingMove> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> CellPos {
        CellPos::new(row, col).unwrap()
    }

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    fn session() -> GameSession {
        let config = SessionConfig {
            initial_score: 10,
            initial_time: 30,
            initial_errors: 1,
            ..SessionConfig::default()
        };
        GameSession::new(&config, BoardCells::with_editable([pos(0, 0), pos(0, 1)]))
    }

    #[test]
    fn starts_from_configured_counters() {
        let session = session();
        assert_eq!(session.score(), 10);
        assert_eq!(session.elapsed(), 30);
        assert_eq!(session.errors(), 1);
        assert_eq!(session.selected(), None);
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn begin_move_requires_selection() {
        let mut session = session();
        assert_eq!(session.begin_move(pos(0, 0)), Err(SubmitRefusal::NoSelection));
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn selection_is_replaced_not_cleared() {
        let mut session = session();
        session.select(digit(3));
        session.select(digit(8));
        assert_eq!(session.selected(), Some(digit(8)));
        session.begin_move(pos(0, 0)).unwrap();
        assert_eq!(session.selected(), Some(digit(8)));
    }

    #[test]
    fn resolve_without_pending_is_ignored() {
        let mut session = session();
        let response = PlayResponse::status(MoveStatus::Ok).with_score(5);
        assert_eq!(session.resolve_move(&response), None);
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn win_freezes_elapsed_in_finish_request() {
        let mut session = session();
        session.select(digit(2));
        session.tick();
        session.begin_move(pos(0, 1)).unwrap();
        let resolution = session
            .resolve_move(&PlayResponse::status(MoveStatus::Win).with_score(155))
            .unwrap();
        assert_eq!(resolution.score, Some(165));
        assert_eq!(
            resolution.outcome,
            MoveOutcome::Won {
                finish: FinishGameRequest { elapsed_time: 31 }
            }
        );
        assert_eq!(session.tick(), None);
        assert_eq!(session.elapsed(), 31);
    }

    #[test]
    fn finished_session_refuses_moves() {
        let mut session = session();
        session.select(digit(2));
        session.begin_move(pos(0, 1)).unwrap();
        session.resolve_move(&PlayResponse::status(MoveStatus::GameOver));
        assert_eq!(session.begin_move(pos(0, 0)), Err(SubmitRefusal::Finished));
    }
}
