use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;

use crate::app_config::{load_app_config, AppConfig};
use crate::dom::{document, page_root};
use crate::game_controller::GameController;
use crate::host::{BrowserHost, GameApi, HttpGameApi, PageHost};
use crate::menu_controller::MenuController;

struct PageControllers {
    _game: Option<GameController>,
    _menu: Option<MenuController>,
}

thread_local! {
    static PAGE: RefCell<Option<PageControllers>> = RefCell::new(None);
}

/// Attaches the controllers once the DOM is parsed and tears them down when
/// the page is hidden for navigation.
pub(crate) fn boot() {
    let (Some(window), Some(document)) = (web_sys::window(), document()) else {
        return;
    };
    EventListener::new(&window, "pagehide", |_event| teardown()).forget();
    EventListener::new(&window, "pageshow", |_event| {
        // back/forward cache restores run without DOMContentLoaded
        if !is_attached() {
            attach();
        }
    })
    .forget();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_event| attach()).forget();
    } else {
        attach();
    }
}

fn attach() {
    let Some(root) = page_root() else {
        gloo::console::warn!("runtime: no document element");
        return;
    };
    let config = load_app_config();
    let host: Rc<dyn PageHost> = Rc::new(BrowserHost);
    let api: Rc<dyn GameApi> = Rc::new(HttpGameApi::new(&config));
    let controllers = install_controllers(&root, &config, api, host);
    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(controllers);
    });
}

fn install_controllers(
    root: &web_sys::Element,
    config: &AppConfig,
    api: Rc<dyn GameApi>,
    host: Rc<dyn PageHost>,
) -> PageControllers {
    let game = GameController::install(root, config, api, host.clone());
    let menu = MenuController::install(root, config, host);
    gloo::console::log!(format!(
        "runtime: attached (game: {}, menu: {})",
        game.is_some(),
        menu.is_some()
    ));
    PageControllers {
        _game: game,
        _menu: menu,
    }
}

fn is_attached() -> bool {
    PAGE.with(|slot| slot.borrow().is_some())
}

fn teardown() {
    let controllers = PAGE.with(|slot| slot.borrow_mut().take());
    drop(controllers);
}
