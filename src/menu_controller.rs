use std::cell::Cell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use web_sys::Element;

use sudoku_front_core::{Difficulty, PanelVisibility, HIDDEN_CLASS};

use crate::app_config::AppConfig;
use crate::dom::{data_attr, find_by_id, has_class, query_all, set_class};
use crate::host::PageHost;

pub(crate) const NEW_GAME_BUTTON_ID: &str = "new-game-btn";
pub(crate) const DIFFICULTY_PANEL_ID: &str = "difficulty-selector";
pub(crate) const DIFFICULTY_CONTROL_SELECTOR: &str = "[data-difficulty]";

/// Shows and hides the difficulty panel from the "new game" button.
pub(crate) struct MenuController {
    #[cfg_attr(not(test), allow(dead_code))]
    visibility: Rc<Cell<PanelVisibility>>,
    _listeners: Vec<EventListener>,
}

impl MenuController {
    /// Pages without the new-game button get no behavior at all.
    pub(crate) fn install(
        root: &Element,
        config: &AppConfig,
        host: Rc<dyn PageHost>,
    ) -> Option<Self> {
        let button = find_by_id(root, NEW_GAME_BUTTON_ID)?;
        let Some(panel) = find_by_id(root, DIFFICULTY_PANEL_ID) else {
            gloo::console::warn!("menu: new-game button present but difficulty panel missing");
            return None;
        };

        let visibility = Rc::new(Cell::new(PanelVisibility::from_hidden(has_class(
            &panel,
            HIDDEN_CLASS,
        ))));

        let mut listeners = Vec::new();
        {
            let visibility = visibility.clone();
            let panel = panel.clone();
            listeners.push(EventListener::new(&button, "click", move |_event| {
                let next = visibility.get().toggled();
                visibility.set(next);
                set_class(&panel, HIDDEN_CLASS, next.is_hidden());
            }));
        }

        for control in query_all(&panel, DIFFICULTY_CONTROL_SELECTOR) {
            let raw = data_attr(&control, "difficulty").unwrap_or_default();
            let difficulty = match Difficulty::parse(&raw) {
                Ok(difficulty) => difficulty,
                Err(err) => {
                    gloo::console::warn!(format!("menu: {err}"));
                    continue;
                }
            };
            let url = config.url(&difficulty.new_game_path());
            let host = host.clone();
            listeners.push(EventListener::new_with_options(
                &control,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    host.navigate(&url);
                },
            ));
        }

        Some(Self {
            visibility,
            _listeners: listeners,
        })
    }

    #[cfg(test)]
    pub(crate) fn visibility(&self) -> PanelVisibility {
        self.visibility.get()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use sudoku_front_core::SessionConfig;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[derive(Default)]
    struct RecordingHost {
        navigations: RefCell<Vec<String>>,
    }

    impl PageHost for RecordingHost {
        fn alert(&self, _message: &str) {}

        fn navigate(&self, url: &str) {
            self.navigations.borrow_mut().push(url.to_string());
        }
    }

    fn menu_root(html: &str) -> Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create root");
        root.set_inner_html(html);
        root
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .expect("clickable element")
            .click();
    }

    fn panel_hidden(root: &Element) -> bool {
        root.query_selector("#difficulty-selector")
            .ok()
            .flatten()
            .map(|panel| panel.class_list().contains(HIDDEN_CLASS))
            .expect("panel")
    }

    const MENU_HTML: &str = r#"
        <button id="new-game-btn">New game</button>
        <div id="difficulty-selector" class="hidden">
            <button data-difficulty="easy">Easy</button>
            <button data-difficulty="medium">Medium</button>
            <button data-difficulty="nightmare">Nightmare</button>
        </div>
    "#;

    #[wasm_bindgen_test]
    fn toggling_twice_restores_panel() {
        let root = menu_root(MENU_HTML);
        let config = AppConfig::new(SessionConfig::default(), "");
        let menu = MenuController::install(&root, &config, Rc::new(RecordingHost::default()))
            .expect("menu installs");
        assert_eq!(menu.visibility(), PanelVisibility::Hidden);

        click(&root, "#new-game-btn");
        assert!(!panel_hidden(&root));
        assert_eq!(menu.visibility(), PanelVisibility::Shown);

        click(&root, "#new-game-btn");
        assert!(panel_hidden(&root));
        assert_eq!(menu.visibility(), PanelVisibility::Hidden);
    }

    #[wasm_bindgen_test]
    fn missing_button_installs_nothing() {
        let root = menu_root(r#"<div id="difficulty-selector" class="hidden"></div>"#);
        let config = AppConfig::new(SessionConfig::default(), "");
        assert!(MenuController::install(&root, &config, Rc::new(RecordingHost::default())).is_none());
    }

    #[wasm_bindgen_test]
    fn difficulty_controls_navigate_to_new_game() {
        let root = menu_root(MENU_HTML);
        let config = AppConfig::new(SessionConfig::default(), "");
        let host = Rc::new(RecordingHost::default());
        let _menu = MenuController::install(&root, &config, host.clone()).expect("menu installs");

        click(&root, "[data-difficulty=\"medium\"]");
        click(&root, "[data-difficulty=\"nightmare\"]");
        assert_eq!(
            host.navigations.borrow().as_slice(),
            &["/new-game/medium".to_string()]
        );
    }
}
