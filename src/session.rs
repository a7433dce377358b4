// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index session: lazy, one-time engine initialization.
//!
//! The engine is warmed either when the search panel opens or on the first
//! keystroke, whichever comes first. Both paths go through
//! [`IndexSession::ensure_ready`], which runs `init` at most once per
//! successful session. Overlapping callers share the in-flight
//! initialization instead of starting another one. A failed initialization is
//! returned to the caller and leaves the session not ready.

use crate::engine::IndexEngine;
use crate::error::EngineError;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

pub struct IndexSession<E> {
    engine: E,
    ready: OnceCell<()>,
}

impl<E: IndexEngine> IndexSession<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            ready: OnceCell::new(),
        }
    }

    /// Has initialization completed successfully?
    pub fn is_ready(&self) -> bool {
        self.ready.initialized()
    }

    /// Initialize the engine unless that already happened.
    pub async fn ensure_ready(&self) -> Result<(), EngineError> {
        self.ready
            .get_or_try_init(|| async {
                debug!("initializing search engine");
                match self.engine.init().await {
                    Ok(()) => {
                        debug!("search engine ready");
                        Ok(())
                    }
                    Err(err) => {
                        warn!(error = %err, "search engine initialization failed");
                        Err(err)
                    }
                }
            })
            .await
            .map(|_| ())
    }

    /// The engine, once initialized.
    pub fn client(&self) -> Option<&E> {
        self.is_ready().then_some(&self.engine)
    }

    /// The engine regardless of readiness, for inspection. Queries go
    /// through [`Self::client`].
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
