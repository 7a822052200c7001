//! Skill registration records.
//!
//! A [`Skill`] binds an async handler to an ordered list of
//! [`MatcherSpec`]s. The external dispatcher evaluates the descriptors in
//! registration order and invokes the handler when one fires.
//!
//! # Example
//!
//! ```rust,ignore
//! let skill = Skill::new(deploy_handler)
//!     .name("deploy")
//!     .decorate(match_crontab("0 9 * * *"))
//!     .decorate(match_webhook("deploy"));
//! ```
//!
//! # Load-then-freeze
//!
//! Skills are meant to be built once at load time, before the dispatcher
//! starts consuming them. `Skill` clones cheaply by sharing its inner state;
//! decorating a skill that has already been cloned elsewhere copies on write,
//! so the previously handed-out clone keeps its shorter matcher list. Hand
//! the finished skill to the dispatcher and stop decorating it afterwards.

use std::sync::Arc;

use crate::decorator::Decorator;
use crate::handler::{BoxedHandler, Handler, into_handler};
use crate::matcher::MatcherSpec;

/// Internal data for a Skill.
///
/// Wrapped in an `Arc` to enable cheap cloning. Implements `Clone` to
/// support `Arc::make_mut` for copy-on-write semantics.
#[derive(Clone)]
struct SkillInner {
    /// The handler invoked when one of the matchers fires.
    handler: BoxedHandler,

    /// Matcher descriptors, in the order the decorators were applied.
    matchers: Vec<MatcherSpec>,

    /// Optional name for logs.
    name: Option<String>,
}

/// A handler together with the ordered matcher descriptors that trigger it.
#[derive(Clone)]
pub struct Skill {
    inner: Arc<SkillInner>,
}

impl Skill {
    /// Creates a skill with an empty matcher list.
    ///
    /// A skill with no matchers is never invoked; apply decorators from
    /// [`matcher_builders`](crate::matcher_builders) to give it matching
    /// rules.
    pub fn new<F>(handler: F) -> Self
    where
        F: Handler,
    {
        Self::from_boxed(into_handler(handler))
    }

    /// Creates a skill from an already type-erased handler.
    pub fn from_boxed(handler: BoxedHandler) -> Self {
        Self {
            inner: Arc::new(SkillInner {
                handler,
                matchers: Vec::new(),
                name: None,
            }),
        }
    }

    /// Internal helper to get mutable access to inner.
    /// Creates a new Arc if there are other references.
    fn inner_mut(&mut self) -> &mut SkillInner {
        Arc::make_mut(&mut self.inner)
    }

    /// Sets a name for this skill (used in logs).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner_mut().name = Some(name.into());
        self
    }

    /// Applies a matcher decorator, appending exactly one descriptor.
    ///
    /// Accepts anything the builder functions produce — chainable builders
    /// like [`match_regex`](crate::matcher_builders::match_regex), plain
    /// [`Decorator`]s, and the bare
    /// [`MatchAlways`](crate::matcher_builders::MatchAlways) value. The
    /// handler is untouched; decorators stack in application order.
    pub fn decorate(self, decorator: impl Into<Decorator>) -> Self {
        decorator.into().apply(self)
    }

    pub(crate) fn push_matcher(&mut self, spec: MatcherSpec) {
        self.inner_mut().matchers.push(spec);
    }

    /// Returns the matcher descriptors in application order.
    pub fn matchers(&self) -> &[MatcherSpec] {
        &self.inner.matchers
    }

    /// Returns the number of attached matchers.
    pub fn matcher_count(&self) -> usize {
        self.inner.matchers.len()
    }

    /// Returns a clone of the handler `Arc`.
    pub fn handler(&self) -> BoxedHandler {
        Arc::clone(&self.inner.handler)
    }

    /// Returns the name of this skill, if set.
    pub fn get_name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }
}

impl std::fmt::Debug for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Skill")
            .field("name", &self.inner.name)
            .field("matchers", &self.inner.matchers)
            .finish_non_exhaustive()
    }
}
