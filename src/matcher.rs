//! Matcher descriptor model.
//!
//! A [`MatcherSpec`] describes one condition under which the external
//! dispatcher should invoke a skill: a regex over incoming messages, an
//! intent reported by an NLU provider, a cron schedule, a webhook call, or
//! unconditionally. A skill carries an ordered list of these descriptors;
//! the dispatcher evaluates them in registration order.
//!
//! Descriptors are plain data. This crate never compiles the regex, parses
//! the cron expression, or talks to any NLU provider — malformed expressions
//! surface later, in the component that actually evaluates them.
//!
//! # Serialized shape
//!
//! `MatcherSpec` serializes externally tagged, so the JSON handed to the
//! dispatcher keeps the familiar one-key-per-kind mapping shape:
//!
//! ```json
//! {"regex": {"expression": "hi", "case_sensitive": true,
//!            "matching_condition": "match", "score_factor": 0.6}}
//! {"webhook": "deploy"}
//! {"always": true}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkillError;

/// Fallback score multiplier for regex and parse-format matchers.
///
/// Used whenever a builder is not given an explicit score factor. The
/// dispatcher multiplies match scores by this value so that hand-written
/// regex skills do not always outrank NLU-provided intents.
pub const REGEX_PARSE_SCORE_FACTOR: f64 = 0.6;

/// How a regex matcher is anchored against the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingCondition {
    /// Match at the beginning of the input.
    #[default]
    Match,
    /// Match at the first location where the expression is found.
    Search,
    /// Match the entire input.
    Fullmatch,
}

impl MatchingCondition {
    /// Returns the wire-format name of this condition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Search => "search",
            Self::Fullmatch => "fullmatch",
        }
    }
}

impl fmt::Display for MatchingCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchingCondition {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match" => Ok(Self::Match),
            "search" => Ok(Self::Search),
            "fullmatch" => Ok(Self::Fullmatch),
            other => Err(SkillError::InvalidMatchingCondition {
                kind: "regex",
                condition: other.to_string(),
            }),
        }
    }
}

/// How a parse-format matcher is anchored against the input.
///
/// Parse-format templates support only `match` and `search`; `fullmatch` is
/// rejected at the type level rather than failing at evaluation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseCondition {
    /// Match at the beginning of the input.
    #[default]
    Match,
    /// Match at the first location where the template is found.
    Search,
}

impl ParseCondition {
    /// Returns the wire-format name of this condition.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Search => "search",
        }
    }
}

impl fmt::Display for ParseCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseCondition {
    type Err = SkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "match" => Ok(Self::Match),
            "search" => Ok(Self::Search),
            other => Err(SkillError::InvalidMatchingCondition {
                kind: "parse_format",
                condition: other.to_string(),
            }),
        }
    }
}

/// One matching rule attached to a skill.
///
/// Each variant corresponds to one decorator in
/// [`matcher_builders`](crate::matcher_builders). The external dispatcher
/// pattern-matches on the variant to decide which evaluation engine handles
/// the rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherSpec {
    /// Invoke the skill for events of the given type.
    #[serde(rename = "event_type")]
    Event {
        /// Event type name, e.g. `message`, `typing`, `reaction`.
        event_type: String,
    },

    /// Invoke the skill when a regex matches the message text.
    Regex {
        /// Regex expression as a string, uncompiled.
        expression: String,
        /// Whether matching is case sensitive.
        case_sensitive: bool,
        /// How the expression is anchored against the input.
        matching_condition: MatchingCondition,
        /// Score multiplier used by the dispatcher to rank competing matches.
        score_factor: f64,
    },

    /// Invoke the skill when a format-style template matches the message text.
    ParseFormat {
        /// Format template, e.g. `remind me in {minutes} minutes`.
        expression: String,
        /// Whether matching is case sensitive.
        case_sensitive: bool,
        /// How the template is anchored against the input.
        matching_condition: ParseCondition,
        /// Score multiplier used by the dispatcher to rank competing matches.
        score_factor: f64,
    },

    /// Invoke the skill for a Dialogflow action.
    DialogflowAction(String),
    /// Invoke the skill for a Dialogflow intent.
    DialogflowIntent(String),
    /// Invoke the skill for a LUIS.ai intent.
    LuisaiIntent(String),
    /// Invoke the skill for a Rasa NLU intent.
    RasanluIntent(String),
    /// Invoke the skill for a SAP Conversational AI intent.
    SapcaiIntent(String),
    /// Invoke the skill for a Watson intent.
    WatsonIntent(String),
    /// Invoke the skill for a wit.ai intent.
    WitaiIntent(String),

    /// Invoke the skill on a cron schedule.
    Crontab {
        /// Cron expression, unparsed.
        crontab: String,
        /// Optional IANA timezone name; the scheduler's default applies
        /// when absent.
        timezone: Option<String>,
    },

    /// Invoke the skill when the named webhook endpoint is called.
    Webhook(String),

    /// Invoke the skill for every event.
    Always(bool),
}

impl MatcherSpec {
    /// Returns the kind tag of this descriptor, matching its serialized key.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Event { .. } => "event_type",
            Self::Regex { .. } => "regex",
            Self::ParseFormat { .. } => "parse_format",
            Self::DialogflowAction(_) => "dialogflow_action",
            Self::DialogflowIntent(_) => "dialogflow_intent",
            Self::LuisaiIntent(_) => "luisai_intent",
            Self::RasanluIntent(_) => "rasanlu_intent",
            Self::SapcaiIntent(_) => "sapcai_intent",
            Self::WatsonIntent(_) => "watson_intent",
            Self::WitaiIntent(_) => "witai_intent",
            Self::Crontab { .. } => "crontab",
            Self::Webhook(_) => "webhook",
            Self::Always(_) => "always",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn webhook_serializes_to_single_key_mapping() {
        let spec = MatcherSpec::Webhook("deploy".to_string());
        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({"webhook": "deploy"}));
    }

    #[test]
    fn always_serializes_to_boolean_flag() {
        let spec = MatcherSpec::Always(true);
        assert_eq!(serde_json::to_value(&spec).unwrap(), json!({"always": true}));
    }

    #[test]
    fn regex_serializes_with_all_fields() {
        let spec = MatcherSpec::Regex {
            expression: "hi".to_string(),
            case_sensitive: true,
            matching_condition: MatchingCondition::Search,
            score_factor: 0.6,
        };
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({"regex": {
                "expression": "hi",
                "case_sensitive": true,
                "matching_condition": "search",
                "score_factor": 0.6,
            }})
        );
    }

    #[test]
    fn intent_descriptors_round_trip() {
        let spec = MatcherSpec::SapcaiIntent("book_flight".to_string());
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value, json!({"sapcai_intent": "book_flight"}));
        assert_eq!(serde_json::from_value::<MatcherSpec>(value).unwrap(), spec);
    }

    #[test]
    fn kind_matches_serialized_key() {
        let spec = MatcherSpec::Event {
            event_type: "message".to_string(),
        };
        let value = serde_json::to_value(&spec).unwrap();
        assert!(value.get(spec.kind()).is_some());
    }

    #[test]
    fn matching_condition_parses_known_names() {
        assert_eq!("match".parse::<MatchingCondition>().unwrap(), MatchingCondition::Match);
        assert_eq!("fullmatch".parse::<MatchingCondition>().unwrap(), MatchingCondition::Fullmatch);
        assert!("prefix".parse::<MatchingCondition>().is_err());
    }

    #[test]
    fn parse_condition_rejects_fullmatch() {
        let err = "fullmatch".parse::<ParseCondition>().unwrap_err();
        match err {
            SkillError::InvalidMatchingCondition { kind, condition } => {
                assert_eq!(kind, "parse_format");
                assert_eq!(condition, "fullmatch");
            }
        }
    }
}
