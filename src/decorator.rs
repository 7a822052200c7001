//! The shared attachment step behind every matcher builder.
//!
//! Each builder in [`matcher_builders`](crate::matcher_builders) ultimately
//! produces a [`Decorator`]: one [`MatcherSpec`] plus an optional
//! [`Deprecation`] note. Applying the decorator to a skill appends exactly
//! one descriptor to the skill's matcher list and emits the deprecation
//! diagnostic if one is attached — nothing else.

use tracing::warn;

use crate::matcher::MatcherSpec;
use crate::skill::Skill;

/// A deprecation note carried by a legacy matcher builder.
///
/// Kept as explicit data rather than a log call inside the builder, so the
/// diagnostic is independently inspectable in tests and suppressible by
/// callers that have to keep using the old name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    /// The deprecated builder name.
    pub old: &'static str,
    /// The replacement builder name.
    pub new: &'static str,
}

/// A pending matcher attachment.
///
/// Created by the builder functions in
/// [`matcher_builders`](crate::matcher_builders) and consumed by
/// [`Skill::decorate`](crate::skill::Skill::decorate).
#[derive(Debug, Clone)]
pub struct Decorator {
    spec: MatcherSpec,
    deprecation: Option<Deprecation>,
}

impl Decorator {
    /// Creates a decorator for the given descriptor.
    pub fn new(spec: MatcherSpec) -> Self {
        Self {
            spec,
            deprecation: None,
        }
    }

    /// Creates a decorator that logs a deprecation warning when applied.
    pub(crate) fn deprecated(spec: MatcherSpec, note: Deprecation) -> Self {
        Self {
            spec,
            deprecation: Some(note),
        }
    }

    /// Returns the descriptor this decorator will attach.
    pub fn spec(&self) -> &MatcherSpec {
        &self.spec
    }

    /// Returns the deprecation note, if this decorator carries one.
    pub fn deprecation(&self) -> Option<&Deprecation> {
        self.deprecation.as_ref()
    }

    /// Drops the deprecation note so no warning is logged on apply.
    pub fn suppress_deprecation(mut self) -> Self {
        self.deprecation = None;
        self
    }

    /// Appends this decorator's descriptor to the skill's matcher list.
    ///
    /// Logs one warning per call if a deprecation note is attached.
    pub fn apply(self, mut skill: Skill) -> Skill {
        if let Some(note) = &self.deprecation {
            warn!(
                deprecated = note.old,
                replacement = note.new,
                "{} is deprecated and will stop working in a future release, use {} instead",
                note.old,
                note.new
            );
        }
        skill.push_matcher(self.spec);
        skill
    }
}

impl From<MatcherSpec> for Decorator {
    fn from(spec: MatcherSpec) -> Self {
        Self::new(spec)
    }
}
