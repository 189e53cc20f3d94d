//! Unit tests for the onboarding wizard.

use chrono::NaiveDate;

use super::onboarding_model::{
    AddressInfo, FinancialProfile, Gender, OnboardingStep, PersonalInfo,
};
use super::onboarding_service::OnboardingWizard;
use crate::Error;

fn personal() -> PersonalInfo {
    PersonalInfo {
        last_name: "Yamada".to_string(),
        first_name: "Taro".to_string(),
        last_name_kana: "ヤマダ".to_string(),
        first_name_kana: "タロウ".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
        gender: Gender::Male,
        phone_number: "090-1234-5678".to_string(),
        email: "taro@example.com".to_string(),
    }
}

fn address() -> AddressInfo {
    AddressInfo {
        postal_code: "1500002".to_string(),
        prefecture: "Tokyo".to_string(),
        city: "Shibuya".to_string(),
        address1: "1-2-3 Shibuya".to_string(),
        address2: None,
    }
}

fn financial() -> FinancialProfile {
    FinancialProfile {
        occupation: "Company employee".to_string(),
        annual_income: "10-20M JPY".to_string(),
        investment_experience: "5+ years".to_string(),
        risk_tolerance: "Moderate".to_string(),
        investment_goal: "Long-term growth".to_string(),
    }
}

fn completed_wizard() -> OnboardingWizard {
    let mut wizard = OnboardingWizard::new();
    wizard.set_personal(personal());
    wizard.next().unwrap();
    wizard.set_address(address());
    wizard.next().unwrap();
    wizard.set_financial(financial());
    wizard.next().unwrap();
    wizard
}

#[test]
fn wizard_starts_on_the_first_step() {
    let wizard = OnboardingWizard::new();
    assert_eq!(wizard.current_step(), OnboardingStep::PersonalInfo);
    assert!(!wizard.is_submitted());
}

#[test]
fn next_refuses_to_skip_an_unfilled_step() {
    let mut wizard = OnboardingWizard::new();

    assert!(matches!(wizard.next(), Err(Error::Validation(_))));
    assert_eq!(wizard.current_step(), OnboardingStep::PersonalInfo);
}

#[test]
fn next_refuses_an_invalid_section() {
    let mut wizard = OnboardingWizard::new();
    let mut info = personal();
    info.email = "not-an-email".to_string();
    wizard.set_personal(info);

    assert!(wizard.next().is_err());
    assert_eq!(wizard.current_step(), OnboardingStep::PersonalInfo);
}

#[test]
fn valid_sections_walk_to_confirmation() {
    let wizard = completed_wizard();
    assert_eq!(wizard.current_step(), OnboardingStep::Confirmation);
}

#[test]
fn back_is_a_no_op_on_the_first_step() {
    let mut wizard = OnboardingWizard::new();
    assert_eq!(wizard.back(), OnboardingStep::PersonalInfo);
}

#[test]
fn back_returns_to_the_previous_step() {
    let mut wizard = completed_wizard();
    assert_eq!(wizard.back(), OnboardingStep::FinancialProfile);
    assert_eq!(wizard.back(), OnboardingStep::AddressInfo);
}

#[test]
fn submit_requires_the_confirmation_step() {
    let mut wizard = OnboardingWizard::new();
    wizard.set_personal(personal());

    assert!(wizard.submit().is_err());
    assert!(!wizard.is_submitted());
}

#[test]
fn submit_revalidates_every_section() {
    let mut wizard = completed_wizard();
    // Invalidate an earlier section after advancing past it.
    let mut bad_address = address();
    bad_address.postal_code = "12".to_string();
    wizard.set_address(bad_address);

    assert!(wizard.submit().is_err());
    assert!(!wizard.is_submitted());
}

#[test]
fn submit_returns_the_completed_form() {
    let mut wizard = completed_wizard();

    let form = wizard.submit().unwrap();

    assert!(wizard.is_submitted());
    assert_eq!(form.personal.unwrap().last_name, "Yamada");
    assert_eq!(form.address.unwrap().postal_code, "1500002");
    assert_eq!(form.financial.unwrap().risk_tolerance, "Moderate");
}

#[test]
fn postal_code_must_be_seven_digits() {
    let mut bad = address();
    bad.postal_code = "150-0002".to_string();
    assert!(bad.validate().is_err());
    assert!(address().validate().is_ok());
}
