//! Ordered collection of registered skills.
//!
//! The loader builds one [`SkillRegistry`] at startup, registering each
//! decorated skill as its module is loaded, then hands the finished registry
//! to the dispatcher. Registration order is significant: the dispatcher
//! evaluates skills (and each skill's matchers) in the order they were
//! registered.
//!
//! # Thread safety
//!
//! The registry has no interior locking. Registration is a single-threaded,
//! load-time activity; once the dispatcher holds the registry, it only
//! reads. Mutating the registry after the dispatcher has started consuming
//! it is unsynchronized — load, then freeze.

use tracing::debug;

use crate::skill::Skill;

/// An ordered list of skills, built at load time.
#[derive(Default, Clone)]
pub struct SkillRegistry {
    skills: Vec<Skill>,
}

impl SkillRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self { skills: Vec::new() }
    }

    /// Registers a skill.
    ///
    /// Skills are evaluated in the order they are registered.
    pub fn register(&mut self, skill: Skill) {
        debug!(
            skill = skill.get_name().unwrap_or("unnamed"),
            matchers = skill.matcher_count(),
            "Registered skill"
        );
        self.skills.push(skill);
    }

    /// Registers a skill (builder pattern).
    pub fn with(mut self, skill: Skill) -> Self {
        self.register(skill);
        self
    }

    /// Returns the registered skills in registration order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// Returns the number of registered skills.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Returns `true` if no skills are registered.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Clears all registered skills.
    pub fn clear(&mut self) {
        self.skills.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::SkillContext;
    use crate::matcher_builders::{match_regex, match_webhook};
    use std::sync::Arc;

    async fn noop(_ctx: Arc<SkillContext>) {}

    #[test]
    fn registration_order_is_preserved() {
        let registry = SkillRegistry::new()
            .with(Skill::new(noop).name("first").decorate(match_regex("hi")))
            .with(Skill::new(noop).name("second").decorate(match_webhook("deploy")));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.skills()[0].get_name(), Some("first"));
        assert_eq!(registry.skills()[1].get_name(), Some("second"));
    }

    #[test]
    fn clear_empties_the_registry() {
        let mut registry = SkillRegistry::new();
        registry.register(Skill::new(noop));
        assert!(!registry.is_empty());

        registry.clear();
        assert!(registry.is_empty());
    }
}
