use futures::future::LocalBoxFuture;
use futures::FutureExt;

use sudoku_front_core::{FinishGameRequest, PlayRequest, PlayResponse, FINISH_GAME_PATH, PLAY_PATH};

use crate::app_config::AppConfig;
use crate::http::{post_json, post_json_text, TransportError};

/// Browser surfaces a controller reaches outside its own DOM subtree.
pub(crate) trait PageHost {
    fn alert(&self, message: &str);
    fn navigate(&self, url: &str);
}

pub(crate) struct BrowserHost;

impl PageHost for BrowserHost {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            gloo::console::warn!("navigate failed", url, err);
        }
    }
}

/// The server endpoints that own all game decisions.
pub(crate) trait GameApi {
    fn play(&self, request: PlayRequest) -> LocalBoxFuture<'static, Result<PlayResponse, TransportError>>;
    fn finish_game(
        &self,
        request: FinishGameRequest,
    ) -> LocalBoxFuture<'static, Result<(), TransportError>>;
}

pub(crate) struct HttpGameApi {
    play_url: String,
    finish_url: String,
}

impl HttpGameApi {
    pub(crate) fn new(config: &AppConfig) -> Self {
        Self {
            play_url: config.url(PLAY_PATH),
            finish_url: config.url(FINISH_GAME_PATH),
        }
    }
}

impl GameApi for HttpGameApi {
    fn play(&self, request: PlayRequest) -> LocalBoxFuture<'static, Result<PlayResponse, TransportError>> {
        let url = self.play_url.clone();
        async move { post_json(&url, &request).await }.boxed_local()
    }

    fn finish_game(
        &self,
        request: FinishGameRequest,
    ) -> LocalBoxFuture<'static, Result<(), TransportError>> {
        let url = self.finish_url.clone();
        async move {
            // body is not used; only completion matters
            post_json_text(&url, &request).await.map(|_| ())
        }
        .boxed_local()
    }
}
