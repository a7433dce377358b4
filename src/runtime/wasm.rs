// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the title-first ranker.
//!
//! This is the browser-facing API. The page loads the module, hands it a
//! loader for the Pagefind client, and calls `installSearch` once. From then
//! on the input's `input` event runs the pipeline and the modal's
//! `shown.bs.modal` event resets the panel and warms the index.
//!
//! ```js
//! import init, { installSearch, openSearch } from "./titlerank.js";
//! await init();
//! installSearch(() => import("/pagefind/pagefind.js"), { ranking: { display_limit: 8 } });
//! window.openSearch = openSearch;
//! ```
//!
//! The controller lives for the whole page and is never torn down, so the
//! event closures are leaked on purpose with `Closure::forget`.

use crate::config::RankingConfig;
use crate::engine::IndexEngine;
use crate::error::EngineError;
use crate::pipeline::{ResultsPanel, SearchPipeline};
use crate::types::{CandidateRecord, QueryOptions};
use async_trait::async_trait;
use js_sys::{Array, Function, Promise, Reflect};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local, JsFuture};

// ═══════════════════════════════════════════════════════════════════════════
// JS INTEROP HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Call `target[name](...args)`.
fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into()
        .map_err(|_| JsValue::from_str(&format!("{} is not a function", name)))?;
    let args: Array = args.iter().collect();
    method.apply(target, &args)
}

/// Await a value that may or may not be a promise.
async fn settle(value: JsValue) -> Result<JsValue, JsValue> {
    JsFuture::from(Promise::resolve(&value)).await
}

/// Best-effort readable message from a thrown JS value.
fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn to_js_error(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn document() -> Result<JsValue, JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("document"))
}

fn element_by_id(id: &str) -> Result<JsValue, JsValue> {
    let el = call_method(&document()?, "getElementById", &[JsValue::from_str(id)])?;
    if el.is_null() || el.is_undefined() {
        return Err(JsValue::from_str(&format!("element #{} not found", id)));
    }
    Ok(el)
}

fn listen(target: &JsValue, event: &str, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut()>::new(handler);
    call_method(
        target,
        "addEventListener",
        &[JsValue::from_str(event), closure.as_ref().clone()],
    )?;
    closure.forget();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// PAGEFIND ENGINE
// ═══════════════════════════════════════════════════════════════════════════

/// Pagefind client adapter.
///
/// The module is imported lazily through the loader on the first `init`, so
/// nothing is fetched until the panel opens or the user types.
pub struct PagefindEngine {
    loader: Function,
    module: RefCell<Option<JsValue>>,
}

impl PagefindEngine {
    pub fn new(loader: Function) -> Self {
        Self {
            loader,
            module: RefCell::new(None),
        }
    }

    fn module(&self) -> Result<JsValue, EngineError> {
        self.module
            .borrow()
            .clone()
            .ok_or_else(|| EngineError::Query("pagefind not loaded".to_string()))
    }
}

#[async_trait(?Send)]
impl IndexEngine for PagefindEngine {
    type Hit = JsValue;

    async fn init(&self) -> Result<(), EngineError> {
        let pending = self
            .loader
            .call0(&JsValue::NULL)
            .map_err(|e| EngineError::Init(js_message(&e)))?;
        let module = settle(pending)
            .await
            .map_err(|e| EngineError::Init(js_message(&e)))?;
        let started =
            call_method(&module, "init", &[]).map_err(|e| EngineError::Init(js_message(&e)))?;
        settle(started)
            .await
            .map_err(|e| EngineError::Init(js_message(&e)))?;
        *self.module.borrow_mut() = Some(module);
        Ok(())
    }

    async fn debounced_search(
        &self,
        query: &str,
        options: &QueryOptions,
        debounce_ms: u32,
    ) -> Result<Option<Vec<JsValue>>, EngineError> {
        let module = self.module()?;
        let options = to_value(options).map_err(|e| EngineError::Decode(e.to_string()))?;
        let pending = call_method(
            &module,
            "debouncedSearch",
            &[JsValue::from_str(query), options, JsValue::from(debounce_ms)],
        )
        .map_err(|e| EngineError::Query(js_message(&e)))?;
        let search = settle(pending)
            .await
            .map_err(|e| EngineError::Query(js_message(&e)))?;
        if search.is_null() || search.is_undefined() {
            return Ok(None);
        }
        let results = Reflect::get(&search, &JsValue::from_str("results"))
            .map_err(|e| EngineError::Decode(js_message(&e)))?;
        let results: Array = results
            .dyn_into()
            .map_err(|_| EngineError::Decode("results is not an array".to_string()))?;
        Ok(Some(results.iter().collect()))
    }

    async fn load_record(&self, hit: &JsValue) -> Result<CandidateRecord, EngineError> {
        let url = Reflect::get(hit, &JsValue::from_str("url"))
            .ok()
            .and_then(|u| u.as_string())
            .unwrap_or_default();
        let record_error = |details: String| EngineError::Record {
            url: url.clone(),
            details,
        };
        let pending = call_method(hit, "data", &[]).map_err(|e| record_error(js_message(&e)))?;
        let data = settle(pending)
            .await
            .map_err(|e| record_error(js_message(&e)))?;
        from_value(data).map_err(|e| record_error(e.to_string()))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// DOM PANEL
// ═══════════════════════════════════════════════════════════════════════════

/// Results container; every render replaces its `innerHTML`.
pub struct DomPanel {
    element: JsValue,
}

impl ResultsPanel for DomPanel {
    fn show(&self, html: &str) {
        if let Err(err) = Reflect::set(
            &self.element,
            &JsValue::from_str("innerHTML"),
            &JsValue::from_str(html),
        ) {
            warn!(error = %js_message(&err), "failed to update results panel");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CONTROLLER + EXPORTS
// ═══════════════════════════════════════════════════════════════════════════

/// Options accepted by `installSearch`.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BrowserOptions {
    input_id: String,
    results_id: String,
    modal_id: String,
    ranking: RankingConfig,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            input_id: "searchInput".to_string(),
            results_id: "searchResults".to_string(),
            modal_id: "searchModal".to_string(),
            ranking: RankingConfig::default(),
        }
    }
}

struct Controller {
    pipeline: SearchPipeline<PagefindEngine, DomPanel>,
    input: JsValue,
    modal: JsValue,
}

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<Controller>>> = const { RefCell::new(None) };
}

fn controller() -> Result<Rc<Controller>, JsValue> {
    CONTROLLER
        .with(|c| c.borrow().clone())
        .ok_or_else(|| JsValue::from_str("search is not installed; call installSearch first"))
}

impl Controller {
    fn query(&self) -> String {
        Reflect::get(&self.input, &JsValue::from_str("value"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    /// Modal finished opening: placeholder, focus, and warm the index quietly.
    fn panel_shown(self: &Rc<Self>) {
        self.pipeline.show_empty_state();
        if let Err(err) = call_method(&self.input, "focus", &[]) {
            warn!(error = %js_message(&err), "could not focus search input");
        }
        let this = Rc::clone(self);
        spawn_local(async move {
            if let Err(err) = this.pipeline.session().ensure_ready().await {
                warn!(error = %err, "search warm-up failed");
            }
        });
    }
}

/// Build the page-wide search controller and bind it to the DOM.
///
/// `loader` must return (a promise of) the Pagefind module. Calling this a
/// second time replaces the controller; listeners from the first call stay
/// bound and forward to the new one.
#[wasm_bindgen(js_name = installSearch)]
pub fn install_search(loader: Function, options: JsValue) -> Result<(), JsValue> {
    let options: BrowserOptions = if options.is_undefined() || options.is_null() {
        BrowserOptions::default()
    } else {
        from_value(options).map_err(|e| JsValue::from_str(&e.to_string()))?
    };
    options
        .ranking
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let input = element_by_id(&options.input_id)?;
    let results = element_by_id(&options.results_id)?;
    let modal = element_by_id(&options.modal_id)?;

    let installed = Rc::new(Controller {
        pipeline: SearchPipeline::new(
            PagefindEngine::new(loader),
            DomPanel { element: results },
            options.ranking,
        ),
        input: input.clone(),
        modal: modal.clone(),
    });
    CONTROLLER.with(|c| *c.borrow_mut() = Some(installed));

    listen(&modal, "shown.bs.modal", || {
        if let Ok(controller) = controller() {
            controller.panel_shown();
        }
    })?;
    listen(&input, "input", || {
        // Rejections surface as unhandled promise rejections, same as a thrown handler.
        let _ = perform_search();
    })?;
    Ok(())
}

/// Open the search modal (`bootstrap.Modal.getOrCreateInstance(el).show()`).
#[wasm_bindgen(js_name = openSearch)]
pub fn open_search() -> Result<(), JsValue> {
    let controller = controller()?;
    let bootstrap = Reflect::get(&js_sys::global(), &JsValue::from_str("bootstrap"))?;
    let modal_class = Reflect::get(&bootstrap, &JsValue::from_str("Modal"))?;
    let instance = call_method(
        &modal_class,
        "getOrCreateInstance",
        &[controller.modal.clone()],
    )?;
    call_method(&instance, "show", &[])?;
    Ok(())
}

/// Rank and render results for the input's current value.
///
/// Resolves to the outcome label (`"empty"`, `"superseded"`, `"no-results"`,
/// `"rendered"`); rejects with the engine's error message.
#[wasm_bindgen(js_name = performSearch)]
pub fn perform_search() -> Promise {
    let controller = match controller() {
        Ok(c) => c,
        Err(err) => return Promise::reject(&err),
    };
    future_to_promise(async move {
        let query = controller.query();
        controller
            .pipeline
            .search(&query)
            .await
            .map(|outcome| JsValue::from_str(outcome.as_str()))
            .map_err(to_js_error)
    })
}
