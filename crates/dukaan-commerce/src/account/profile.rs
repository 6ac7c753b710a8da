//! User profile and preferences.

use crate::account::AddressBook;
use crate::ids::UserId;
use chrono::{DateTime, NaiveDate, Utc};
use dukaan_i18n::{Language, LocalizedText};
use serde::{Deserialize, Serialize};

/// Notification channels the user has opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            push: true,
        }
    }
}

/// Account preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub notifications: NotificationPreferences,
    pub newsletter: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::En,
            notifications: NotificationPreferences::default(),
            newsletter: true,
        }
    }
}

/// A partial preferences update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreferencesPatch {
    pub language: Option<Language>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub newsletter: Option<bool>,
}

impl Preferences {
    pub fn apply(&mut self, patch: PreferencesPatch) {
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(email) = patch.email_notifications {
            self.notifications.email = email;
        }
        if let Some(sms) = patch.sms_notifications {
            self.notifications.sms = sms;
        }
        if let Some(push) = patch.push_notifications {
            self.notifications.push = push;
        }
        if let Some(newsletter) = patch.newsletter {
            self.newsletter = newsletter;
        }
    }
}

/// A partial profile update for contact fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfilePatch {
    pub name: Option<LocalizedText>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
}

/// The signed-in user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: LocalizedText,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub addresses: AddressBook,
    #[serde(default)]
    pub preferences: Preferences,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    /// Apply a contact-field update.
    pub fn apply(&mut self, patch: ProfilePatch, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
        self.updated_at = Some(now);
    }
}

/// Outcome of an account action that has no real effect (password change,
/// reset request, account deletion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

impl Acknowledgement {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId::new(1),
            name: LocalizedText::new("Ahmed Ali", "احمد علی"),
            email: "ahmed@example.com".into(),
            phone: "+92 300 1234567".into(),
            date_of_birth: None,
            gender: None,
            addresses: AddressBook::new(),
            preferences: Preferences::default(),
            join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            last_login: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_preferences_patch() {
        let mut prefs = Preferences::default();
        prefs.apply(PreferencesPatch {
            language: Some(Language::Ur),
            sms_notifications: Some(true),
            ..Default::default()
        });
        assert_eq!(prefs.language, Language::Ur);
        assert!(prefs.notifications.sms);
        assert!(prefs.notifications.email);
        assert!(prefs.newsletter);
    }

    #[test]
    fn test_profile_patch() {
        let mut user = profile();
        user.apply(
            ProfilePatch {
                phone: Some("+92 321 0000000".into()),
                ..Default::default()
            },
            Utc::now(),
        );
        assert_eq!(user.phone, "+92 321 0000000");
        assert_eq!(user.email, "ahmed@example.com");
        assert!(user.updated_at.is_some());
    }
}
