use std::collections::BTreeMap;

use web_sys::Element;

use sudoku_front_core::{CellPos, Digit};

use crate::dom::{data_attr, find_by_id, query_all, set_class, set_text};

pub(crate) const SCORE_ID: &str = "score-count";
pub(crate) const ERROR_ID: &str = "error-count";
pub(crate) const TIME_ID: &str = "time-counter";
pub(crate) const NUMBER_BUTTON_SELECTOR: &str = ".number-btn";
pub(crate) const EDITABLE_CELL_SELECTOR: &str = ".cell.editable";
pub(crate) const SELECTED_CLASS: &str = "selected";
pub(crate) const EDITABLE_CLASS: &str = "editable";

pub(crate) struct DigitButton {
    pub(crate) element: Element,
    pub(crate) digit: Digit,
}

/// DOM handles of the game page.
pub(crate) struct GameView {
    score: Element,
    errors: Element,
    time: Element,
    buttons: Vec<DigitButton>,
    cells: BTreeMap<CellPos, Element>,
}

impl GameView {
    /// Binds the page under `root`. Returns `None` when the counters are not
    /// on the page, i.e. this is not a game page.
    pub(crate) fn bind(root: &Element) -> Option<Self> {
        let score = find_by_id(root, SCORE_ID)?;
        let errors = find_by_id(root, ERROR_ID)?;
        let time = find_by_id(root, TIME_ID)?;

        let mut buttons = Vec::new();
        for element in query_all(root, NUMBER_BUTTON_SELECTOR) {
            let raw = data_attr(&element, "number").unwrap_or_default();
            match Digit::parse(&raw) {
                Ok(digit) => buttons.push(DigitButton { element, digit }),
                Err(err) => gloo::console::warn!(format!("game: skipping number button: {err}")),
            }
        }

        let mut cells = BTreeMap::new();
        for element in query_all(root, EDITABLE_CELL_SELECTOR) {
            let row = data_attr(&element, "row").unwrap_or_default();
            let col = data_attr(&element, "col").unwrap_or_default();
            match CellPos::parse(&row, &col) {
                Ok(pos) => {
                    if cells.insert(pos, element).is_some() {
                        gloo::console::warn!(format!("game: duplicate cell {pos}"));
                    }
                }
                Err(err) => gloo::console::warn!(format!("game: skipping cell: {err}")),
            }
        }

        Some(Self {
            score,
            errors,
            time,
            buttons,
            cells,
        })
    }

    pub(crate) fn buttons(&self) -> &[DigitButton] {
        &self.buttons
    }

    pub(crate) fn cells(&self) -> impl Iterator<Item = (CellPos, &Element)> {
        self.cells.iter().map(|(pos, element)| (*pos, element))
    }

    pub(crate) fn cell_positions(&self) -> Vec<CellPos> {
        self.cells.keys().copied().collect()
    }

    pub(crate) fn render_score(&self, score: i64) {
        set_text(&self.score, &score.to_string());
    }

    pub(crate) fn render_errors(&self, errors: u32) {
        set_text(&self.errors, &errors.to_string());
    }

    pub(crate) fn render_time(&self, seconds: u32) {
        set_text(&self.time, &seconds.to_string());
    }

    /// Marks the button at `index` as the only selected one.
    pub(crate) fn mark_selected(&self, index: usize) {
        for (current, button) in self.buttons.iter().enumerate() {
            set_class(&button.element, SELECTED_CLASS, current == index);
        }
    }

    pub(crate) fn fill_cell(&self, pos: CellPos, digit: Digit) {
        let Some(cell) = self.cells.get(&pos) else {
            return;
        };
        set_text(cell, &digit.to_string());
        set_class(cell, EDITABLE_CLASS, false);
    }
}
