//! Profile fields collected from the user.

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Tone};

/// One free-text input on the introduction form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Nickname,
    Country,
    JobRole,
    Hobbies,
    FunFact,
    Catchphrase,
}

impl ProfileField {
    /// All fields in form order.
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Nickname,
        ProfileField::Country,
        ProfileField::JobRole,
        ProfileField::Hobbies,
        ProfileField::FunFact,
        ProfileField::Catchphrase,
    ];

    /// Stable key used in profile files and templates.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Nickname => "nickname",
            ProfileField::Country => "country",
            ProfileField::JobRole => "job_role",
            ProfileField::Hobbies => "hobbies",
            ProfileField::FunFact => "fun_fact",
            ProfileField::Catchphrase => "catchphrase",
        }
    }

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Nickname => "Name (Fun Alias or Nickname)",
            ProfileField::Country => "Country of Origin",
            ProfileField::JobRole => "Job Role (What's your hustle?)",
            ProfileField::Hobbies => "Hobbies/Interests",
            ProfileField::FunFact => "Fun Fact or Unique Detail",
            ProfileField::Catchphrase => "Favorite Emoji or Catchphrase",
        }
    }

    /// Example value shown as a hint.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ProfileField::Nickname => "e.g., Maverick",
            ProfileField::Country => "e.g., USA",
            ProfileField::JobRole => "e.g., Software Engineer",
            ProfileField::Hobbies => "e.g., Gaming, Cooking, Painting",
            ProfileField::FunFact => "e.g., I once backpacked across Europe",
            ProfileField::Catchphrase => "e.g., 🚀 or 'Let's rock!'",
        }
    }
}

/// A fully specified profile ready for prompt rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub nickname: String,
    pub country: String,
    pub job_role: String,
    pub hobbies: String,
    pub fun_fact: String,
    pub catchphrase: String,
    #[serde(default)]
    pub tone: Tone,
}

impl Profile {
    /// Value of a single field.
    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Nickname => &self.nickname,
            ProfileField::Country => &self.country,
            ProfileField::JobRole => &self.job_role,
            ProfileField::Hobbies => &self.hobbies,
            ProfileField::FunFact => &self.fun_fact,
            ProfileField::Catchphrase => &self.catchphrase,
        }
    }

    /// Ensure every field has content. Reports the first blank field in form order.
    pub fn validate(&self) -> Result<(), AppError> {
        match ProfileField::ALL.into_iter().find(|field| self.value(*field).trim().is_empty()) {
            Some(field) => Err(AppError::MissingField { field: field.label().to_string() }),
            None => Ok(()),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn normalized(&self) -> Profile {
        Profile {
            nickname: self.nickname.trim().to_string(),
            country: self.country.trim().to_string(),
            job_role: self.job_role.trim().to_string(),
            hobbies: self.hobbies.trim().to_string(),
            fun_fact: self.fun_fact.trim().to_string(),
            catchphrase: self.catchphrase.trim().to_string(),
            tone: self.tone,
        }
    }
}

/// Partially filled profile assembled from files, flags and prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDraft {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub hobbies: Option<String>,
    #[serde(default)]
    pub fun_fact: Option<String>,
    #[serde(default)]
    pub catchphrase: Option<String>,
    #[serde(default)]
    pub tone: Option<Tone>,
}

impl ProfileDraft {
    /// Parse a draft from YAML profile file content.
    pub fn from_yaml(content: &str, source: &str) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|e| AppError::YamlParseError {
            path: source.to_string(),
            details: e.to_string(),
        })
    }

    pub fn get(&self, field: ProfileField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Overlay values from `other`; present values in `other` win.
    pub fn merge(mut self, other: ProfileDraft) -> ProfileDraft {
        for field in ProfileField::ALL {
            if let Some(value) = other.get(field) {
                self.set(field, value);
            }
        }
        if other.tone.is_some() {
            self.tone = other.tone;
        }
        self
    }

    /// Fields that are absent or blank, in form order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none_or(|value| value.trim().is_empty()))
            .collect()
    }

    /// Build a validated profile, failing on the first missing field.
    pub fn complete(self) -> Result<Profile, AppError> {
        let take = |value: Option<String>| value.unwrap_or_default();
        let profile = Profile {
            nickname: take(self.nickname),
            country: take(self.country),
            job_role: take(self.job_role),
            hobbies: take(self.hobbies),
            fun_fact: take(self.fun_fact),
            catchphrase: take(self.catchphrase),
            tone: self.tone.unwrap_or_default(),
        }
        .normalized();
        profile.validate()?;
        Ok(profile)
    }

    fn slot(&self, field: ProfileField) -> &Option<String> {
        match field {
            ProfileField::Nickname => &self.nickname,
            ProfileField::Country => &self.country,
            ProfileField::JobRole => &self.job_role,
            ProfileField::Hobbies => &self.hobbies,
            ProfileField::FunFact => &self.fun_fact,
            ProfileField::Catchphrase => &self.catchphrase,
        }
    }

    fn slot_mut(&mut self, field: ProfileField) -> &mut Option<String> {
        match field {
            ProfileField::Nickname => &mut self.nickname,
            ProfileField::Country => &mut self.country,
            ProfileField::JobRole => &mut self.job_role,
            ProfileField::Hobbies => &mut self.hobbies,
            ProfileField::FunFact => &mut self.fun_fact,
            ProfileField::Catchphrase => &mut self.catchphrase,
        }
    }
}
