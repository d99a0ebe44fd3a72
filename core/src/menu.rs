use std::fmt;

use crate::protocol::NEW_GAME_PATH_PREFIX;

pub const HIDDEN_CLASS: &str = "hidden";

/// Visibility bit of the difficulty panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVisibility {
    Hidden,
    Shown,
}

impl PanelVisibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            PanelVisibility::Hidden
        } else {
            PanelVisibility::Shown
        }
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, PanelVisibility::Hidden)
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Hidden => PanelVisibility::Shown,
            PanelVisibility::Shown => PanelVisibility::Hidden,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

pub const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

impl Difficulty {
    pub fn parse(raw: &str) -> Result<Self, DifficultyError> {
        let slug = raw.trim();
        DIFFICULTIES
            .iter()
            .copied()
            .find(|difficulty| slug.eq_ignore_ascii_case(difficulty.slug()))
            .ok_or_else(|| DifficultyError(slug.to_string()))
    }

    pub fn slug(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn new_game_path(self) -> String {
        format!("{NEW_GAME_PATH_PREFIX}{}", self.slug())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyError(pub String);

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty '{}'", self.0)
    }
}

impl std::error::Error for DifficultyError {}
