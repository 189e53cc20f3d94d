//! Onboarding application domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Applicant identity section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub last_name: String,
    pub first_name: String,
    /// Katakana reading
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub phone_number: String,
    pub email: String,
}

impl PersonalInfo {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("lastName", &self.last_name),
            ("firstName", &self.first_name),
            ("lastNameKana", &self.last_name_kana),
            ("firstNameKana", &self.first_name_kana),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    field.to_string(),
                )));
            }
        }
        if self.phone_number.is_empty()
            || !self
                .phone_number
                .chars()
                .all(|c| c.is_ascii_digit() || c == '-')
        {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Phone number may only contain digits and hyphens".to_string(),
            )));
        }
        // Minimal shape check; real verification happens out of band.
        if !self.email.contains('@') || !self.email.contains('.') {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Email address '{}' is malformed",
                self.email
            ))));
        }
        Ok(())
    }
}

/// Residential address section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub postal_code: String,
    pub prefecture: String,
    pub city: String,
    pub address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
}

impl AddressInfo {
    pub fn validate(&self) -> Result<()> {
        if self.postal_code.len() != 7 || !self.postal_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Postal code must be exactly 7 digits".to_string(),
            )));
        }
        for (field, value) in [
            ("prefecture", &self.prefecture),
            ("city", &self.city),
            ("address1", &self.address1),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    field.to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// Occupation and suitability section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub occupation: String,
    pub annual_income: String,
    pub investment_experience: String,
    pub risk_tolerance: String,
    pub investment_goal: String,
}

impl FinancialProfile {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("occupation", &self.occupation),
            ("annualIncome", &self.annual_income),
            ("investmentExperience", &self.investment_experience),
            ("riskTolerance", &self.risk_tolerance),
            ("investmentGoal", &self.investment_goal),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation(ValidationError::MissingField(
                    field.to_string(),
                )));
            }
        }
        Ok(())
    }
}

/// The application being assembled by the wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub personal: Option<PersonalInfo>,
    pub address: Option<AddressInfo>,
    pub financial: Option<FinancialProfile>,
}

/// Wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingStep {
    PersonalInfo,
    AddressInfo,
    FinancialProfile,
    Confirmation,
}

impl OnboardingStep {
    /// Every step, in wizard order.
    pub const ALL_STEPS: [OnboardingStep; 4] = [
        OnboardingStep::PersonalInfo,
        OnboardingStep::AddressInfo,
        OnboardingStep::FinancialProfile,
        OnboardingStep::Confirmation,
    ];

    /// Label shown on the stepper.
    pub fn label(&self) -> &'static str {
        match self {
            OnboardingStep::PersonalInfo => "Personal information",
            OnboardingStep::AddressInfo => "Address",
            OnboardingStep::FinancialProfile => "Financial profile",
            OnboardingStep::Confirmation => "Confirmation",
        }
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        let index = Self::ALL_STEPS.iter().position(|s| s == self)?;
        Self::ALL_STEPS.get(index + 1).copied()
    }

    /// The preceding step, if any.
    pub fn previous(&self) -> Option<OnboardingStep> {
        let index = Self::ALL_STEPS.iter().position(|s| s == self)?;
        index.checked_sub(1).and_then(|i| Self::ALL_STEPS.get(i).copied())
    }
}
