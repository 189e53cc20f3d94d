//! Onboarding module - the account-opening application wizard.

mod onboarding_model;
mod onboarding_service;

pub use onboarding_model::{
    AddressInfo, ApplicationForm, FinancialProfile, Gender, OnboardingStep, PersonalInfo,
};
pub use onboarding_service::OnboardingWizard;

#[cfg(test)]
mod onboarding_service_tests;
