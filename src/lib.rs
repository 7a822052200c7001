//! # Skillet
//!
//! Declarative matcher registration for chatbot skills.
//!
//! A *skill* is an async handler plus an ordered list of matcher
//! descriptors telling the surrounding framework when to invoke it: on a
//! regex match, an NLU intent, a cron schedule, a webhook call, or
//! unconditionally. This crate owns only the registration surface — the
//! dispatcher, NLU connectors, scheduler, and webhook server that consume
//! the descriptors live elsewhere.
//!
//! # Example
//!
//! ```rust,ignore
//! use skillet::{Skill, SkillRegistry, match_crontab, match_regex, match_webhook};
//!
//! let registry = SkillRegistry::new()
//!     .with(
//!         Skill::new(greet)
//!             .name("greeter")
//!             .decorate(match_regex("^(hi|hello)").case_sensitive(false)),
//!     )
//!     .with(
//!         Skill::new(deploy)
//!             .name("deploy")
//!             .decorate(match_crontab("0 9 * * 1").timezone("Europe/London"))
//!             .decorate(match_webhook("deploy")),
//!     );
//! ```
//!
//! Decorators stack: a skill may carry any number of matchers, of mixed
//! kinds, evaluated by the dispatcher in application order. Build skills at
//! load time and hand them over frozen; see the [`skill`] module docs for
//! the concurrency contract.

pub mod config;
pub mod decorator;
pub mod error;
pub mod handler;
pub mod matcher;
pub mod matcher_builders;
pub mod registry;
pub mod skill;

pub use config::SkillsConfig;
pub use decorator::{Decorator, Deprecation};
pub use error::{SkillError, SkillResult};
pub use handler::{BoxedHandler, Handler, SkillContext, into_handler};
pub use matcher::{MatcherSpec, MatchingCondition, ParseCondition, REGEX_PARSE_SCORE_FACTOR};
pub use matcher_builders::{
    CrontabMatcher, MatchAlways, ParseMatcher, RegexMatcher, match_always, match_crontab,
    match_dialogflow_action, match_dialogflow_intent, match_event, match_luisai_intent,
    match_parse, match_rasanlu, match_recastai, match_regex, match_sapcai, match_watson,
    match_webhook, match_witai,
};
pub use registry::SkillRegistry;
pub use skill::Skill;
