use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ExecutionError, TrireasonResult};
use crate::resolution::{ResolutionEngine, ResolutionReport};
use crate::scoring::NetworkSnapshot;
use crate::value::TrinaryValue;

/// A [`ResolutionEngine`] behind a single mutex.
///
/// `resolve_all` drains the active list that `update_belief` appends to,
/// so every call here takes the one lock for its whole duration.
/// [`update_and_resolve`](Self::update_and_resolve) runs the pair under
/// one acquisition. Clones share the same engine.
#[derive(Debug, Clone, Default)]
pub struct SharedResolutionEngine {
    inner: Arc<Mutex<ResolutionEngine>>,
}

impl SharedResolutionEngine {
    /// Wraps an engine.
    #[must_use]
    pub fn new(engine: ResolutionEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> TrireasonResult<MutexGuard<'_, ResolutionEngine>> {
        self.inner.lock().map_err(|_| {
            ExecutionError::LockPoisoned {
                what: "resolution engine".to_string(),
            }
            .into()
        })
    }

    /// Runs `f` with exclusive access to the engine.
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::LockPoisoned` if a previous holder panicked.
    pub fn with<R>(&self, f: impl FnOnce(&mut ResolutionEngine) -> R) -> TrireasonResult<R> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// See [`ResolutionEngine::update_belief`].
    ///
    /// # Errors
    ///
    /// Validation errors from the engine, or `ExecutionError::LockPoisoned`.
    pub fn update_belief(
        &self,
        name: &str,
        value: TrinaryValue,
        confidence: f64,
    ) -> TrireasonResult<usize> {
        Ok(self.lock()?.update_belief(name, value, confidence)?)
    }

    /// See [`ResolutionEngine::resolve_all`].
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::LockPoisoned` if a previous holder panicked.
    pub fn resolve_all(&self) -> TrireasonResult<ResolutionReport> {
        Ok(self.lock()?.resolve_all())
    }

    /// Updates a belief and resolves everything active, atomically.
    ///
    /// # Errors
    ///
    /// Validation errors from the engine, or `ExecutionError::LockPoisoned`.
    /// Nothing is resolved if the update is rejected.
    pub fn update_and_resolve(
        &self,
        name: &str,
        value: TrinaryValue,
        confidence: f64,
    ) -> TrireasonResult<(usize, ResolutionReport)> {
        let mut engine = self.lock()?;
        let found = engine.update_belief(name, value, confidence)?;
        Ok((found, engine.resolve_all()))
    }

    /// See [`ResolutionEngine::snapshot`].
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::LockPoisoned` if a previous holder panicked.
    pub fn snapshot(&self) -> TrireasonResult<NetworkSnapshot> {
        Ok(self.lock()?.snapshot())
    }

    /// See [`ResolutionEngine::coherence_score`].
    ///
    /// # Errors
    ///
    /// Returns `ExecutionError::LockPoisoned` if a previous holder panicked.
    pub fn coherence_score(&self) -> TrireasonResult<f64> {
        Ok(self.lock()?.coherence_score())
    }
}
