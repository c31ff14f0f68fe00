//! Binding to the embedded Python runtime (Pyodide).
//!
//! The runtime is an opaque external dependency loaded from a CDN. Each modal
//! session acquires a fresh instance so no interpreter state leaks from one
//! game to the next, and discards it on close. Both entry points are async and
//! both convert every JS-side failure into a plain `String` so nothing can
//! propagate into the UI layer as an uncaught exception.

use js_sys::{Object, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Fixed source location for the runtime distribution.
pub const PYODIDE_INDEX_URL: &str = "https://cdn.jsdelivr.net/pyodide/v0.24.1/full/";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = loadPyodide, catch)]
    async fn load_pyodide(config: &JsValue) -> Result<JsValue, JsValue>;

    type Pyodide;

    #[wasm_bindgen(method, js_name = runPythonAsync, catch)]
    async fn run_python_async(this: &Pyodide, code: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = setStdout)]
    fn set_stdout(this: &Pyodide, options: &JsValue);
}

/// One loaded execution environment, owned by a single modal session.
pub struct ScriptRuntime {
    instance: Pyodide,
    stdout: Rc<RefCell<Vec<String>>>,
    // The stdout hook must stay alive as long as the interpreter may call it.
    _stdout_hook: Closure<dyn FnMut(String)>,
}

impl ScriptRuntime {
    /// Loads a fresh Pyodide instance and routes its stdout into a buffer.
    /// Acquisition can take several seconds; the caller shows a loading state.
    pub async fn acquire() -> Result<ScriptRuntime, String> {
        let config = Object::new();
        Reflect::set(
            &config,
            &JsValue::from_str("indexURL"),
            &JsValue::from_str(PYODIDE_INDEX_URL),
        )
        .map_err(|e| js_error_message(&e))?;

        let raw = load_pyodide(&config).await.map_err(|e| js_error_message(&e))?;
        let instance: Pyodide = raw.unchecked_into();

        let stdout = Rc::new(RefCell::new(Vec::new()));
        let hook = {
            let stdout = stdout.clone();
            Closure::wrap(Box::new(move |line: String| {
                stdout.borrow_mut().push(line);
            }) as Box<dyn FnMut(String)>)
        };
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("batched"), hook.as_ref())
            .map_err(|e| js_error_message(&e))?;
        instance.set_stdout(&options);

        Ok(ScriptRuntime { instance, stdout, _stdout_hook: hook })
    }

    /// Runs a snippet and returns everything it printed, plus the final
    /// expression value when the snippet yields one. Python exceptions come
    /// back as `Err` with the interpreter's message.
    pub async fn execute(&self, code: &str) -> Result<String, String> {
        self.stdout.borrow_mut().clear();
        let value = self
            .instance
            .run_python_async(code)
            .await
            .map_err(|e| js_error_message(&e))?;

        let mut lines = self.stdout.borrow_mut().split_off(0);
        if let Some(repr) = value.as_string() {
            lines.push(repr);
        }
        Ok(lines.join("\n"))
    }
}

/// Best-effort extraction of a human-readable message from a JS error value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string()
        .unwrap_or_else(|| "unknown script runtime error".to_string())
}
