pub mod cell;
pub mod codec;
pub mod config;
pub mod digit;
pub mod menu;
pub mod protocol;
pub mod session;

pub use cell::{BoardCells, CellPos, CellPosError, CellState, BOARD_SIZE};
pub use codec::{decode, encode, CodecError};
pub use config::{ConfigIssue, SessionConfig, DEFAULT_TICK_MS};
pub use digit::{Digit, DigitError};
pub use menu::{Difficulty, DifficultyError, PanelVisibility, DIFFICULTIES, HIDDEN_CLASS};
pub use protocol::{
    FinishGameRequest, MoveStatus, PlayRequest, PlayResponse, FINISH_GAME_PATH, MENU_PATH,
    PLAY_PATH,
};
pub use session::{
    Finish, GameSession, MoveOutcome, MoveResolution, PendingMove, SessionPhase, SubmitRefusal,
};
