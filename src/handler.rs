//! Handler plumbing for skills.
//!
//! A skill's handler is an async function invoked by the external dispatcher
//! once one of the skill's matchers fires. This crate only *stores* handlers
//! alongside their matcher descriptors; it never invokes them itself.
//!
//! Handlers receive an [`Arc<SkillContext>`] carrying the triggering event
//! payload and the kind of matcher that fired:
//!
//! ```rust,ignore
//! async fn greet(ctx: Arc<SkillContext>) {
//!     println!("matched by {}: {}", ctx.matched_by(), ctx.event());
//! }
//!
//! let skill = Skill::new(greet).decorate(match_regex("hi"));
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;

/// The value handed to a skill when the dispatcher invokes it.
#[derive(Debug, Clone)]
pub struct SkillContext {
    event: Value,
    matched_by: String,
}

impl SkillContext {
    /// Creates a context from an event payload and the firing matcher kind.
    pub fn new(event: Value, matched_by: impl Into<String>) -> Self {
        Self {
            event,
            matched_by: matched_by.into(),
        }
    }

    /// Returns the triggering event payload.
    pub fn event(&self) -> &Value {
        &self.event
    }

    /// Returns the kind tag of the matcher that fired, e.g. `"regex"`.
    pub fn matched_by(&self) -> &str {
        &self.matched_by
    }
}

/// The trait skill handlers must satisfy.
///
/// Automatically implemented for async functions taking an
/// `Arc<SkillContext>`. Requiring this bound at [`Skill::new`] is what makes
/// "decorating a non-callable" a compile error rather than a runtime one.
///
/// [`Skill::new`]: crate::skill::Skill::new
#[async_trait]
pub trait Handler: Clone + Send + Sync + 'static {
    /// Calls the handler with the given context.
    async fn call(self, ctx: Arc<SkillContext>);
}

#[async_trait]
impl<F, Fut> Handler for F
where
    F: FnOnce(Arc<SkillContext>) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn call(self, ctx: Arc<SkillContext>) {
        (self)(ctx).await;
    }
}

/// A type-erased handler that can be stored in a [`Skill`](crate::skill::Skill).
///
/// Internally a closure that captures the original handler and calls it
/// with a cloned copy on each invocation.
pub type BoxedHandler = Arc<dyn Fn(Arc<SkillContext>) -> BoxFuture<'static, ()> + Send + Sync>;

/// Converts a handler function into a boxed handler.
pub fn into_handler<F>(f: F) -> BoxedHandler
where
    F: Handler,
{
    Arc::new(move |ctx| f.clone().call(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn boxed_handler_invokes_the_original_function() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        async fn handler(ctx: Arc<SkillContext>) {
            assert_eq!(ctx.matched_by(), "always");
            CALLS.fetch_add(1, Ordering::SeqCst);
        }

        let boxed = into_handler(handler);
        let ctx = Arc::new(SkillContext::new(json!({"text": "hi"}), "always"));

        tokio_test::block_on(boxed(Arc::clone(&ctx)));
        tokio_test::block_on(boxed(ctx));

        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn context_exposes_event_payload() {
        let ctx = SkillContext::new(json!({"text": "hi"}), "regex");
        assert_eq!(ctx.event()["text"], "hi");
        assert_eq!(ctx.matched_by(), "regex");
    }
}
