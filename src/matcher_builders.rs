//! Matcher builder functions, one per matcher kind.
//!
//! Each function here is the registration-time sugar for one matching rule:
//! it packages the caller's parameters into a [`MatcherSpec`] wrapped in a
//! [`Decorator`], ready to hand to [`Skill::decorate`]. Builders that take
//! optional parameters (`match_regex`, `match_parse`, `match_crontab`)
//! return a chainable builder instead of a finished decorator.
//!
//! # Example
//!
//! ```rust,ignore
//! use skillet::{Skill, match_regex, match_webhook};
//!
//! let skill = Skill::new(deploy)
//!     .decorate(match_regex("^deploy").score_factor(0.9))
//!     .decorate(match_webhook("deploy"));
//! ```
//!
//! Parameters are trusted as supplied: a malformed regex or cron expression
//! is attached verbatim and surfaces later in the dispatcher or scheduler
//! that evaluates it.
//!
//! [`Skill::decorate`]: crate::skill::Skill::decorate

use crate::config::SkillsConfig;
use crate::decorator::{Decorator, Deprecation};
use crate::matcher::{
    MatcherSpec, MatchingCondition, ParseCondition, REGEX_PARSE_SCORE_FACTOR,
};

/// Creates a matcher for events of the given type.
///
/// Event type names are adapter-defined strings such as `message`, `typing`,
/// `reaction`, `file`, or `image`.
pub fn match_event(event_type: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::Event {
        event_type: event_type.into(),
    })
}

// ─── Regex and parse-format builders ─────────────────────────────────────────

/// Creates a regex matcher builder.
///
/// Defaults: case sensitive, [`MatchingCondition::Match`], and the shared
/// [`REGEX_PARSE_SCORE_FACTOR`] unless an explicit score factor is set. An
/// explicit score factor always wins, including `0.0` — zero is a
/// legitimate "never ranks first" weight, not an unset marker.
pub fn match_regex(expression: impl Into<String>) -> RegexMatcher {
    RegexMatcher {
        expression: expression.into(),
        case_sensitive: true,
        matching_condition: MatchingCondition::default(),
        score_factor: None,
    }
}

/// Chainable builder returned by [`match_regex`].
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    expression: String,
    case_sensitive: bool,
    matching_condition: MatchingCondition,
    score_factor: Option<f64>,
}

impl RegexMatcher {
    /// Sets whether matching is case sensitive.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets how the expression is anchored against the input.
    pub fn matching_condition(mut self, condition: MatchingCondition) -> Self {
        self.matching_condition = condition;
        self
    }

    /// Sets an explicit score multiplier, overriding the shared default.
    pub fn score_factor(mut self, score_factor: f64) -> Self {
        self.score_factor = Some(score_factor);
        self
    }

    /// Finishes the builder using the configured fallback score factor
    /// instead of the built-in constant.
    pub fn resolve_with(self, config: &SkillsConfig) -> Decorator {
        let fallback = config.regex_parse_score_factor;
        Decorator::new(MatcherSpec::Regex {
            expression: self.expression,
            case_sensitive: self.case_sensitive,
            matching_condition: self.matching_condition,
            score_factor: self.score_factor.unwrap_or(fallback),
        })
    }
}

impl From<RegexMatcher> for Decorator {
    fn from(builder: RegexMatcher) -> Self {
        Decorator::new(MatcherSpec::Regex {
            expression: builder.expression,
            case_sensitive: builder.case_sensitive,
            matching_condition: builder.matching_condition,
            score_factor: builder.score_factor.unwrap_or(REGEX_PARSE_SCORE_FACTOR),
        })
    }
}

/// Creates a parse-format matcher builder.
///
/// The expression is a format-style template such as
/// `remind me in {minutes} minutes`. Defaults mirror [`match_regex`], except
/// the matching condition is limited to [`ParseCondition`] — fullmatch does
/// not exist for parse templates.
pub fn match_parse(expression: impl Into<String>) -> ParseMatcher {
    ParseMatcher {
        expression: expression.into(),
        case_sensitive: true,
        matching_condition: ParseCondition::default(),
        score_factor: None,
    }
}

/// Chainable builder returned by [`match_parse`].
#[derive(Debug, Clone)]
pub struct ParseMatcher {
    expression: String,
    case_sensitive: bool,
    matching_condition: ParseCondition,
    score_factor: Option<f64>,
}

impl ParseMatcher {
    /// Sets whether matching is case sensitive.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets how the template is anchored against the input.
    pub fn matching_condition(mut self, condition: ParseCondition) -> Self {
        self.matching_condition = condition;
        self
    }

    /// Sets an explicit score multiplier, overriding the shared default.
    pub fn score_factor(mut self, score_factor: f64) -> Self {
        self.score_factor = Some(score_factor);
        self
    }

    /// Finishes the builder using the configured fallback score factor
    /// instead of the built-in constant.
    pub fn resolve_with(self, config: &SkillsConfig) -> Decorator {
        let fallback = config.regex_parse_score_factor;
        Decorator::new(MatcherSpec::ParseFormat {
            expression: self.expression,
            case_sensitive: self.case_sensitive,
            matching_condition: self.matching_condition,
            score_factor: self.score_factor.unwrap_or(fallback),
        })
    }
}

impl From<ParseMatcher> for Decorator {
    fn from(builder: ParseMatcher) -> Self {
        Decorator::new(MatcherSpec::ParseFormat {
            expression: builder.expression,
            case_sensitive: builder.case_sensitive,
            matching_condition: builder.matching_condition,
            score_factor: builder.score_factor.unwrap_or(REGEX_PARSE_SCORE_FACTOR),
        })
    }
}

// ─── NLU provider intent builders ────────────────────────────────────────────

/// Creates a matcher for a Dialogflow action.
pub fn match_dialogflow_action(action: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::DialogflowAction(action.into()))
}

/// Creates a matcher for a Dialogflow intent.
pub fn match_dialogflow_intent(intent: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::DialogflowIntent(intent.into()))
}

/// Creates a matcher for a LUIS.ai intent.
pub fn match_luisai_intent(intent: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::LuisaiIntent(intent.into()))
}

/// Creates a matcher for a Rasa NLU intent.
pub fn match_rasanlu(intent: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::RasanluIntent(intent.into()))
}

/// Creates a matcher for a Recast.AI intent.
///
/// Recast.AI was rebranded to SAP Conversational AI; this builder attaches
/// the same [`MatcherSpec::SapcaiIntent`] descriptor as [`match_sapcai`] and
/// logs a deprecation warning each time it is applied. Use
/// [`Decorator::suppress_deprecation`] to silence the warning if you cannot
/// migrate yet.
pub fn match_recastai(intent: impl Into<String>) -> Decorator {
    Decorator::deprecated(
        MatcherSpec::SapcaiIntent(intent.into()),
        Deprecation {
            old: "match_recastai",
            new: "match_sapcai",
        },
    )
}

/// Creates a matcher for a SAP Conversational AI intent.
pub fn match_sapcai(intent: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::SapcaiIntent(intent.into()))
}

/// Creates a matcher for a Watson intent.
pub fn match_watson(intent: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::WatsonIntent(intent.into()))
}

/// Creates a matcher for a wit.ai intent.
pub fn match_witai(intent: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::WitaiIntent(intent.into()))
}

// ─── Schedule, webhook, and catch-all builders ───────────────────────────────

/// Creates a crontab matcher builder.
///
/// The expression is attached unparsed; the external scheduler validates it.
pub fn match_crontab(crontab: impl Into<String>) -> CrontabMatcher {
    CrontabMatcher {
        crontab: crontab.into(),
        timezone: None,
    }
}

/// Chainable builder returned by [`match_crontab`].
#[derive(Debug, Clone)]
pub struct CrontabMatcher {
    crontab: String,
    timezone: Option<String>,
}

impl CrontabMatcher {
    /// Sets the IANA timezone the schedule is evaluated in.
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

impl From<CrontabMatcher> for Decorator {
    fn from(builder: CrontabMatcher) -> Self {
        Decorator::new(MatcherSpec::Crontab {
            crontab: builder.crontab,
            timezone: builder.timezone,
        })
    }
}

/// Creates a matcher for the named webhook endpoint.
pub fn match_webhook(webhook: impl Into<String>) -> Decorator {
    Decorator::new(MatcherSpec::Webhook(webhook.into()))
}

/// Marker for the bare form of [`match_always`].
///
/// `Skill::decorate` accepts this value directly, mirroring the two call
/// shapes of the always matcher: `decorate(match_always())` and
/// `decorate(MatchAlways)` attach identical descriptors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchAlways;

/// Creates a matcher that fires for every event.
pub fn match_always() -> MatchAlways {
    MatchAlways
}

impl From<MatchAlways> for Decorator {
    fn from(_: MatchAlways) -> Self {
        Decorator::new(MatcherSpec::Always(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(decorator: impl Into<Decorator>) -> MatcherSpec {
        decorator.into().spec().clone()
    }

    #[test]
    fn regex_defaults() {
        assert_eq!(
            spec(match_regex("hi")),
            MatcherSpec::Regex {
                expression: "hi".to_string(),
                case_sensitive: true,
                matching_condition: MatchingCondition::Match,
                score_factor: REGEX_PARSE_SCORE_FACTOR,
            }
        );
    }

    #[test]
    fn regex_explicit_score_factor_overrides_default() {
        let spec = spec(match_regex("hi").score_factor(2.5));
        assert!(matches!(spec, MatcherSpec::Regex { score_factor, .. } if score_factor == 2.5));
    }

    #[test]
    fn regex_zero_score_factor_is_not_coerced_to_default() {
        let spec = spec(match_regex("hi").score_factor(0.0));
        assert!(matches!(spec, MatcherSpec::Regex { score_factor, .. } if score_factor == 0.0));
    }

    #[test]
    fn regex_builder_chain() {
        assert_eq!(
            spec(
                match_regex("bye")
                    .case_sensitive(false)
                    .matching_condition(MatchingCondition::Fullmatch)
            ),
            MatcherSpec::Regex {
                expression: "bye".to_string(),
                case_sensitive: false,
                matching_condition: MatchingCondition::Fullmatch,
                score_factor: REGEX_PARSE_SCORE_FACTOR,
            }
        );
    }

    #[test]
    fn regex_resolve_with_config_fallback() {
        let config = SkillsConfig {
            regex_parse_score_factor: 0.9,
        };
        let from_config = match_regex("hi").resolve_with(&config);
        assert!(matches!(
            from_config.spec(),
            MatcherSpec::Regex { score_factor, .. } if *score_factor == 0.9
        ));

        // Explicit values still win over the configured fallback.
        let explicit = match_regex("hi").score_factor(2.5).resolve_with(&config);
        assert!(matches!(
            explicit.spec(),
            MatcherSpec::Regex { score_factor, .. } if *score_factor == 2.5
        ));
    }

    #[test]
    fn parse_defaults_and_chain() {
        assert_eq!(
            spec(match_parse("say {word}").matching_condition(ParseCondition::Search)),
            MatcherSpec::ParseFormat {
                expression: "say {word}".to_string(),
                case_sensitive: true,
                matching_condition: ParseCondition::Search,
                score_factor: REGEX_PARSE_SCORE_FACTOR,
            }
        );
    }

    #[test]
    fn recastai_is_an_alias_of_sapcai() {
        let legacy = match_recastai("book_flight");
        let current = match_sapcai("book_flight");

        assert_eq!(legacy.spec(), current.spec());
        assert_eq!(
            legacy.deprecation(),
            Some(&Deprecation {
                old: "match_recastai",
                new: "match_sapcai",
            })
        );
        assert_eq!(current.deprecation(), None);
    }

    #[test]
    fn deprecation_can_be_suppressed() {
        let legacy = match_recastai("book_flight").suppress_deprecation();
        assert_eq!(legacy.deprecation(), None);
        assert_eq!(legacy.spec(), &MatcherSpec::SapcaiIntent("book_flight".to_string()));
    }

    #[test]
    fn intent_builders_tag_their_provider() {
        assert_eq!(spec(match_dialogflow_action("greet")).kind(), "dialogflow_action");
        assert_eq!(spec(match_dialogflow_intent("greet")).kind(), "dialogflow_intent");
        assert_eq!(spec(match_luisai_intent("greet")).kind(), "luisai_intent");
        assert_eq!(spec(match_rasanlu("greet")).kind(), "rasanlu_intent");
        assert_eq!(spec(match_watson("greet")).kind(), "watson_intent");
        assert_eq!(spec(match_witai("greet")).kind(), "witai_intent");
    }

    #[test]
    fn crontab_timezone_is_optional() {
        assert_eq!(
            spec(match_crontab("0 9 * * *")),
            MatcherSpec::Crontab {
                crontab: "0 9 * * *".to_string(),
                timezone: None,
            }
        );
        assert_eq!(
            spec(match_crontab("0 9 * * *").timezone("Europe/London")),
            MatcherSpec::Crontab {
                crontab: "0 9 * * *".to_string(),
                timezone: Some("Europe/London".to_string()),
            }
        );
    }

    #[test]
    fn webhook_descriptor_carries_only_the_name() {
        assert_eq!(spec(match_webhook("deploy")), MatcherSpec::Webhook("deploy".to_string()));
    }

    #[test]
    fn always_both_call_shapes_are_equivalent() {
        assert_eq!(spec(match_always()), MatcherSpec::Always(true));
        assert_eq!(spec(MatchAlways), MatcherSpec::Always(true));
    }
}
