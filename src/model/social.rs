use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

use super::null_as_default;

/// The fixed set of reactions a participant can leave on an activity or comment.
///
/// Declaration order is the picker order and the tie-break when counts are equal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReactionKind {
    Like,
    Fire,
    Strong,
    Clap,
    Love,
}

impl ReactionKind {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Like => "\u{2764}\u{fe0f}",
            Self::Fire => "\u{1f525}",
            Self::Strong => "\u{1f4aa}",
            Self::Clap => "\u{1f44f}",
            Self::Love => "\u{1f60d}",
        }
    }
}

/// What a reaction is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionTarget {
    Activity(u64),
    Comment(u64),
}

impl ReactionTarget {
    pub(crate) fn path(self) -> String {
        match self {
            Self::Activity(id) => format!("activities/{id}/reactions"),
            Self::Comment(id) => format!("comments/{id}/reactions"),
        }
    }
}

/// Server view of a target's reactions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reaction_counts: BTreeMap<ReactionKind, u32>,
    pub user_reaction: Option<ReactionKind>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReactionRequest {
    pub reaction_type: ReactionKind,
}

/// A comment under an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub activity_id: u64,
    pub participant_id: u64,
    pub participant_name: String,
    pub text: String,
    pub mentioned_participant_id: Option<u64>,
    pub mentioned_participant_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reaction_counts: BTreeMap<ReactionKind, u32>,
    pub user_reaction: Option<ReactionKind>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_edit: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub can_delete: bool,
}

/// Body for posting or editing a comment.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentioned_participant_id: Option<u64>,
}
