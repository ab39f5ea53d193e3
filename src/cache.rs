//! Compiled-type cache.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use crate::{
    ast::Checker,
    error::Error,
    evaluator::{CheckOptions, check},
    parser::{ParseError, compile_type},
    value::Value,
};

/// Compiled checkers keyed by their type text.
///
/// Safe to share between threads; checkers are handed out as `Arc`s and are
/// never mutated after compilation. Only successful compilations are kept.
///
/// A cache from [`TypeCache::new`] grows with every distinct type text it
/// sees. When the text comes from outside the program, build it with
/// [`TypeCache::bounded`] (or call [`TypeCache::clear`] periodically).
///
/// # Examples
///
/// ```
/// use shape_lang::{TypeCache, CheckOptions, Value};
///
/// let cache = TypeCache::new();
/// let options = CheckOptions::default();
///
/// assert!(cache.check("Array<number>", &Value::Array(vec![]), &options).is_ok());
/// assert!(cache.check("Array<number>", &Value::Null, &options).is_err());
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TypeCache {
    entries: RwLock<HashMap<String, Arc<Checker>>>,
    /// Most entries kept at once, `None` for no limit
    max_entries: Option<usize>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `max_entries` types.
    ///
    /// Inserting into a full cache drops every entry first. Checkers already
    /// handed out stay valid.
    ///
    /// # Examples
    ///
    /// ```
    /// use shape_lang::TypeCache;
    ///
    /// let cache = TypeCache::bounded(2);
    /// for text in ["string", "number", "boolean"] {
    ///     cache.get_or_compile(text).unwrap();
    /// }
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn bounded(max_entries: usize) -> Self {
        TypeCache {
            entries: RwLock::default(),
            max_entries: Some(max_entries),
        }
    }

    /// Return the cached checker for `type_text`, compiling it on a miss.
    pub fn get_or_compile(&self, type_text: &str) -> Result<Arc<Checker>, ParseError> {
        if let Some(checker) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_text)
        {
            return Ok(Arc::clone(checker));
        }

        let compiled = Arc::new(compile_type(type_text)?);
        tracing::debug!(type_text, "cached compiled type");

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(max_entries) = self.max_entries
            && entries.len() >= max_entries
            && !entries.contains_key(type_text)
        {
            tracing::debug!(max_entries, "type cache full, clearing");
            entries.clear();
        }
        let checker = entries.entry(type_text.to_string()).or_insert(compiled);
        Ok(Arc::clone(checker))
    }

    /// Check `value` against the (cached) type.
    pub fn check(
        &self,
        type_text: &str,
        value: &Value,
        options: &CheckOptions,
    ) -> Result<(), Error> {
        let checker = self.get_or_compile(type_text)?;
        check(&checker, value, options)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().unwrap_or_else(PoisonError::into_inner).clear();
    }
}
