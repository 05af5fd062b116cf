//! Client-side form checks performed before anything is sent.

use crate::model::{ActivityType, Event, NotificationDraft, RecipientType};
use crate::upload::{PhotoBatch, MAX_PHOTOS};

/// A form failed validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field is missing: {0}")]
    MissingField(&'static str),

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    #[error("at most {max} photos are allowed")]
    TooManyPhotos { max: usize },

    #[error("new passwords do not match")]
    PasswordMismatch,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("select at least one recipient")]
    NoRecipients,
}

/// Minimum length for a new password.
pub const MIN_PASSWORD_LEN: usize = 4;

/// The "log an activity" form.
#[derive(Debug, Clone, Default)]
pub struct ActivityForm {
    pub team_id: Option<u64>,
    pub participant_ids: Vec<u64>,
    pub activity_type: Option<ActivityType>,
    pub energy: Option<i32>,
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
    pub photos: PhotoBatch,
    pub team_based: bool,
    pub track_duration: bool,
}

impl ActivityForm {
    /// Start a form configured by the participant's event.
    pub fn for_event(event: &Event) -> Self {
        Self {
            team_based: event.is_team_based(),
            track_duration: event.track_activity_duration,
            ..Self::default()
        }
    }

    /// Choose an activity type; its default energy pre-fills the energy field.
    pub fn select_type(&mut self, activity_type: ActivityType) {
        if let Some(energy) = activity_type.default_energy {
            self.energy = Some(energy);
        }
        self.activity_type = Some(activity_type);
    }

    pub fn toggle_participant(&mut self, id: u64) {
        if let Some(pos) = self.participant_ids.iter().position(|p| *p == id) {
            self.participant_ids.remove(pos);
        } else {
            self.participant_ids.push(id);
        }
    }

    /// Select everyone, or nobody if everyone is already selected.
    pub fn toggle_all(&mut self, roster: &[u64]) {
        if self.participant_ids.len() == roster.len() {
            self.participant_ids.clear();
        } else {
            self.participant_ids = roster.to_vec();
        }
    }

    /// Team-based events need a team, at least one participant, a type and
    /// energy; individual events need only a type and energy.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.team_based {
            if self.team_id.is_none() {
                return Err(ValidationError::MissingField("team"));
            }
            if self.participant_ids.is_empty() {
                return Err(ValidationError::MissingField("participants"));
            }
        }
        if self.activity_type.is_none() {
            return Err(ValidationError::MissingField("activity type"));
        }
        match self.energy {
            None => return Err(ValidationError::MissingField("energy")),
            Some(e) if e <= 0 => return Err(ValidationError::NotPositive { field: "energy" }),
            Some(_) => {}
        }
        if self.photos.len() > MAX_PHOTOS {
            return Err(ValidationError::TooManyPhotos { max: MAX_PHOTOS });
        }
        Ok(())
    }

    /// Duration is only sent for events that track it.
    pub fn duration_to_send(&self) -> Option<u32> {
        self.duration_minutes.filter(|_| self.track_duration)
    }
}

/// Case-insensitive substring filter for the activity-type picker.
pub fn filter_activity_types<'a>(types: &'a [ActivityType], query: &str) -> Vec<&'a ActivityType> {
    let query = query.to_lowercase();
    types
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&query))
        .collect()
}

/// The change-password dialog.
#[derive(Debug, Clone, Default)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.old_password.is_empty() {
            return Err(ValidationError::MissingField("current password"));
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// Non-blank text check shared by names, reasons and comments.
pub fn require_text(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Check an admin notification and drop recipient ids unless the audience
/// is [`RecipientType::Specific`].
pub fn prepare_broadcast(draft: &NotificationDraft) -> Result<NotificationDraft, ValidationError> {
    require_text(&draft.title, "title")?;
    require_text(&draft.message, "message")?;
    let mut draft = draft.clone();
    if draft.recipient_type == RecipientType::Specific {
        if draft.participant_ids.is_empty() {
            return Err(ValidationError::NoRecipients);
        }
    } else {
        draft.participant_ids.clear();
    }
    Ok(draft)
}
