//! Browser bindings.
//!
//! Enabled by the `wasm` feature. Bytes cross the boundary as
//! `Uint8Array`s holding JSON; errors are thrown as JS `Error`s carrying
//! the [`GameError`] message.
//!
//! # Quick Start
//!
//! ```javascript
//! import init, { tictactoeNew, tictactoeRunAction, tictactoeBotRunAction } from "./tictactoe.js";
//!
//! await init();
//! const decode = (bytes) => JSON.parse(new TextDecoder().decode(bytes));
//! const encode = (value) => new TextEncoder().encode(JSON.stringify(value));
//!
//! let view = decode(tictactoeNew());
//! view = decode(tictactoeRunAction(encode({ playerID: 0, position: 0 })));
//! view = decode(tictactoeBotRunAction());
//! ```
//!
//! The three `tictactoe*` functions share one session per thread, created
//! by `tictactoeNew`. Hosts that want their own handle use the
//! `TicTacToe` class instead.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::core::GameError;
use crate::session::{Session, SessionConfig};

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

fn to_js(err: GameError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> Result<T, GameError>) -> Result<T, JsValue> {
    SESSION
        .with(|cell| match cell.borrow_mut().as_mut() {
            Some(session) => f(session),
            None => Err(GameError::NoActiveGame),
        })
        .map_err(to_js)
}

/// Send Rust panics to the browser console. A no-op unless the
/// `console_error_panic_hook` feature is enabled.
#[wasm_bindgen(js_name = initPanicHook)]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Start a fresh game and return its snapshot for player 0.
#[wasm_bindgen(js_name = tictactoeNew)]
pub fn tictactoe_new() -> Result<Vec<u8>, JsValue> {
    let session = Session::new(SessionConfig::default());
    let bytes = session.snapshot_bytes().map_err(to_js)?;
    SESSION.with(|cell| *cell.borrow_mut() = Some(session));
    Ok(bytes)
}

/// Apply a serialized action to the current game.
#[wasm_bindgen(js_name = tictactoeRunAction)]
pub fn tictactoe_run_action(action: &[u8]) -> Result<Vec<u8>, JsValue> {
    with_session(|session| session.run_action(action))
}

/// Let the bot move for player 1.
#[wasm_bindgen(js_name = tictactoeBotRunAction)]
pub fn tictactoe_bot_run_action() -> Result<Vec<u8>, JsValue> {
    with_session(Session::bot_run_action)
}

/// An independently owned session.
#[wasm_bindgen(js_name = TicTacToe)]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen(js_class = TicTacToe)]
impl WasmSession {
    /// Default config: view as player 0, bot as player 1, OS-seeded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmSession {
        Self {
            inner: Session::default(),
        }
    }

    /// Build from a JSON `SessionConfig`, e.g. `{"seed": 7}`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: &[u8]) -> Result<WasmSession, JsValue> {
        let config = SessionConfig::from_json(config).map_err(to_js)?;
        Ok(Self {
            inner: Session::new(config),
        })
    }

    pub fn snapshot(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.snapshot_bytes().map_err(to_js)
    }

    pub fn reset(&mut self) -> Result<Vec<u8>, JsValue> {
        self.inner.reset().map_err(to_js)
    }

    /// Position of the bot's random stream as JSON `{"seed", "word_pos"}`.
    #[wasm_bindgen(js_name = rngState)]
    pub fn rng_state(&self) -> Result<Vec<u8>, JsValue> {
        serde_json::to_vec(&self.inner.rng_state())
            .map_err(GameError::encoding)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = runAction)]
    pub fn run_action(&mut self, action: &[u8]) -> Result<Vec<u8>, JsValue> {
        self.inner.run_action(action).map_err(to_js)
    }

    #[wasm_bindgen(js_name = botRunAction)]
    pub fn bot_run_action(&mut self) -> Result<Vec<u8>, JsValue> {
        self.inner.bot_run_action().map_err(to_js)
    }
}

impl Default for WasmSession {
    fn default() -> Self {
        Self::new()
    }
}
