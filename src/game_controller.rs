use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use sudoku_front_core::{
    BoardCells, CellPos, FinishGameRequest, GameSession, MoveOutcome, PlayResponse, SubmitRefusal,
    MENU_PATH,
};

use crate::app_config::AppConfig;
use crate::game_view::GameView;
use crate::host::{GameApi, PageHost};
use crate::http::TransportError;

pub(crate) const WIN_MESSAGE: &str = "Congratulations! You win 🎉";
pub(crate) const GAME_OVER_MESSAGE: &str = "Game Over";

struct ControllerInner {
    session: RefCell<GameSession>,
    view: GameView,
    api: Rc<dyn GameApi>,
    host: Rc<dyn PageHost>,
    menu_url: String,
    tick_ms: u32,
    timer: RefCell<Option<Interval>>,
}

/// Binds one game page to its session. Dropping it removes every listener
/// and cancels the timer.
pub(crate) struct GameController {
    inner: Rc<ControllerInner>,
    _listeners: Vec<EventListener>,
}

impl GameController {
    pub(crate) fn install(
        root: &Element,
        config: &AppConfig,
        api: Rc<dyn GameApi>,
        host: Rc<dyn PageHost>,
    ) -> Option<Self> {
        let view = GameView::bind(root)?;
        let board = BoardCells::with_editable(view.cell_positions());
        let session = GameSession::new(&config.session, board);
        let inner = Rc::new(ControllerInner {
            session: RefCell::new(session),
            view,
            api,
            host,
            menu_url: config.url(MENU_PATH),
            tick_ms: config.session.tick_ms,
            timer: RefCell::new(None),
        });

        let mut listeners = Vec::new();
        for (index, button) in inner.view.buttons().iter().enumerate() {
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListener::new(&button.element, "click", move |_event| {
                if let Some(inner) = weak.upgrade() {
                    inner.select_button(index);
                }
            }));
        }
        for (pos, cell) in inner.view.cells() {
            let weak = Rc::downgrade(&inner);
            listeners.push(EventListener::new(cell, "click", move |_event| {
                if let Some(inner) = weak.upgrade() {
                    ControllerInner::submit_move(&inner, pos);
                }
            }));
        }

        inner.render_all();
        ControllerInner::start_timer(&inner);
        gloo::console::log!(format!(
            "game: ready, {} buttons, {} editable cells",
            inner.view.buttons().len(),
            inner.view.cell_positions().len()
        ));

        Some(Self {
            inner,
            _listeners: listeners,
        })
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> GameSession {
        self.inner.session.borrow().clone()
    }

    #[cfg(test)]
    pub(crate) fn timer_running(&self) -> bool {
        self.inner.timer.borrow().is_some()
    }
}

impl ControllerInner {
    fn render_all(&self) {
        let session = self.session.borrow();
        self.view.render_score(session.score());
        self.view.render_errors(session.errors());
        self.view.render_time(session.elapsed());
    }

    fn start_timer(this: &Rc<Self>) {
        let weak: Weak<Self> = Rc::downgrade(this);
        let interval = Interval::new(this.tick_ms, move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_tick();
            }
        });
        *this.timer.borrow_mut() = Some(interval);
    }

    fn stop_timer(&self) {
        drop(self.timer.borrow_mut().take());
    }

    fn on_tick(&self) {
        let next = self.session.borrow_mut().tick();
        if let Some(seconds) = next {
            self.view.render_time(seconds);
        }
    }

    fn select_button(&self, index: usize) {
        let Some(button) = self.view.buttons().get(index) else {
            return;
        };
        self.session.borrow_mut().select(button.digit);
        self.view.mark_selected(index);
    }

    fn submit_move(this: &Rc<Self>, pos: CellPos) {
        let started = this.session.borrow_mut().begin_move(pos);
        let request = match started {
            Ok(request) => request,
            Err(SubmitRefusal::NoSelection) => return,
            Err(refusal) => {
                gloo::console::log!(format!("game: click on {pos} ignored: {refusal}"));
                return;
            }
        };
        let future = this.api.play(request);
        let weak = Rc::downgrade(this);
        spawn_local(async move {
            let result = future.await;
            if let Some(inner) = weak.upgrade() {
                ControllerInner::on_play_result(&inner, result);
            }
        });
    }

    fn on_play_result(this: &Rc<Self>, result: Result<PlayResponse, TransportError>) {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                let abandoned = this.session.borrow_mut().abandon_move();
                if let Some(pending) = abandoned {
                    gloo::console::warn!(format!("game: move on {} failed: {err}", pending.pos));
                }
                return;
            }
        };

        let resolution = this.session.borrow_mut().resolve_move(&response);
        let Some(resolution) = resolution else {
            return;
        };
        if let Some(score) = resolution.score {
            this.view.render_score(score);
        }
        match resolution.outcome {
            MoveOutcome::Filled { pos, digit } => this.view.fill_cell(pos, digit),
            MoveOutcome::Won { finish } => {
                this.stop_timer();
                this.finish_won(finish);
            }
            MoveOutcome::GameOver => {
                this.stop_timer();
                this.host.alert(GAME_OVER_MESSAGE);
                this.host.navigate(&this.menu_url);
            }
            MoveOutcome::Rejected { errors } => {
                if let Some(errors) = errors {
                    this.view.render_errors(errors);
                }
            }
        }
    }

    fn finish_won(&self, finish: FinishGameRequest) {
        let future = self.api.finish_game(finish);
        let host = self.host.clone();
        let menu_url = self.menu_url.clone();
        spawn_local(async move {
            if let Err(err) = future.await {
                gloo::console::warn!(format!("game: finish-game failed: {err}"));
            }
            host.alert(WIN_MESSAGE);
            host.navigate(&menu_url);
        });
    }
}
