//! Process-wide Classifier Handle
//!
//! Loading a model is the expensive part of a request, so it happens once per
//! process. The first successful `init` stores the classifier; later calls get
//! the same `Arc` back until `teardown` drops it. Requests in flight keep
//! their own `Arc` and finish against the old model.
//!
//! ```rust,no_run
//! use fermentguard_vision::{ClassifierConfig, ClassifierHandle};
//!
//! match ClassifierHandle::init(&ClassifierConfig::default()) {
//!     Ok(classifier) => println!("{} classes", classifier.labels().len()),
//!     Err(e) => eprintln!("analysis disabled: {e}"),
//! }
//! ```

use std::sync::{Arc, PoisonError, RwLock};

use crate::classifier::Classifier;
use crate::config::ClassifierConfig;
use crate::VisionResult;

lazy_static::lazy_static! {
    static ref LOADED: RwLock<Option<Arc<Classifier>>> = RwLock::new(None);
}

/// Explicit init / get / teardown over the shared classifier
pub struct ClassifierHandle;

impl ClassifierHandle {
    /// Load from `config` unless a classifier is already loaded
    pub fn init(config: &ClassifierConfig) -> VisionResult<Arc<Classifier>> {
        Self::get_or_init_with(|| Classifier::from_config(config))
    }

    /// Store the classifier built by `load` unless one is already loaded.
    ///
    /// The write lock is held while `load` runs, so concurrent callers wait
    /// instead of loading twice. A failed load leaves the handle empty.
    pub fn get_or_init_with<F>(load: F) -> VisionResult<Arc<Classifier>>
    where
        F: FnOnce() -> VisionResult<Classifier>,
    {
        if let Some(classifier) = Self::get() {
            return Ok(classifier);
        }

        let mut slot = LOADED.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(classifier) = slot.as_ref() {
            return Ok(Arc::clone(classifier));
        }

        let classifier = Arc::new(load()?);
        log::info!("classifier handle initialized ({} labels)", classifier.labels().len());
        *slot = Some(Arc::clone(&classifier));
        Ok(classifier)
    }

    /// The loaded classifier, if any
    pub fn get() -> Option<Arc<Classifier>> {
        LOADED.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Whether a classifier is loaded
    pub fn is_loaded() -> bool {
        Self::get().is_some()
    }

    /// Drop the shared classifier; returns whether one was loaded
    pub fn teardown() -> bool {
        let dropped = LOADED.write().unwrap_or_else(PoisonError::into_inner).take();
        if dropped.is_some() {
            log::info!("classifier handle torn down");
        }
        dropped.is_some()
    }
}
