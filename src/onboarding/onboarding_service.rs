//! The onboarding wizard state machine.

use log::debug;

use super::onboarding_model::{
    AddressInfo, ApplicationForm, FinancialProfile, OnboardingStep, PersonalInfo,
};
use crate::errors::{Result, ValidationError};
use crate::Error;

/// Step-ordered wizard assembling an [`ApplicationForm`].
///
/// The wizard owns its state outright; the host view keeps one per
/// onboarding session and drops it on unmount. `next()` refuses to
/// advance past a step whose section is missing or invalid.
#[derive(Debug)]
pub struct OnboardingWizard {
    form: ApplicationForm,
    step: OnboardingStep,
    submitted: bool,
}

impl Default for OnboardingWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingWizard {
    /// Starts a fresh wizard on the first step.
    pub fn new() -> Self {
        Self {
            form: ApplicationForm::default(),
            step: OnboardingStep::PersonalInfo,
            submitted: false,
        }
    }

    /// The step currently shown.
    pub fn current_step(&self) -> OnboardingStep {
        self.step
    }

    /// The form as filled in so far.
    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    /// Whether `submit` has succeeded.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Fills the personal-information section.
    pub fn set_personal(&mut self, personal: PersonalInfo) {
        self.form.personal = Some(personal);
    }

    /// Fills the address section.
    pub fn set_address(&mut self, address: AddressInfo) {
        self.form.address = Some(address);
    }

    /// Fills the financial-profile section.
    pub fn set_financial(&mut self, financial: FinancialProfile) {
        self.form.financial = Some(financial);
    }

    /// Validates the current step and advances to the next one.
    ///
    /// On the confirmation step this is a no-op; call [`submit`].
    ///
    /// [`submit`]: OnboardingWizard::submit
    pub fn next(&mut self) -> Result<OnboardingStep> {
        let step = self.current_step();
        self.validate_step(step)?;

        if let Some(next) = step.next() {
            debug!("Onboarding advanced from {:?} to {:?}", step, next);
            self.step = next;
        }
        Ok(self.current_step())
    }

    /// Steps back; a no-op on the first step.
    pub fn back(&mut self) -> OnboardingStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Submits the application from the confirmation step.
    ///
    /// Re-validates every section so edits made after advancing cannot
    /// slip through.
    pub fn submit(&mut self) -> Result<ApplicationForm> {
        if self.current_step() != OnboardingStep::Confirmation {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Cannot submit from the {} step",
                self.current_step().label()
            ))));
        }
        for step in OnboardingStep::ALL_STEPS {
            self.validate_step(step)?;
        }

        self.submitted = true;
        debug!("Onboarding application submitted");
        Ok(self.form.clone())
    }

    fn validate_step(&self, step: OnboardingStep) -> Result<()> {
        match step {
            OnboardingStep::PersonalInfo => self
                .form
                .personal
                .as_ref()
                .ok_or_else(|| missing("personal"))?
                .validate(),
            OnboardingStep::AddressInfo => self
                .form
                .address
                .as_ref()
                .ok_or_else(|| missing("address"))?
                .validate(),
            OnboardingStep::FinancialProfile => self
                .form
                .financial
                .as_ref()
                .ok_or_else(|| missing("financial"))?
                .validate(),
            OnboardingStep::Confirmation => Ok(()),
        }
    }
}

fn missing(section: &str) -> Error {
    Error::Validation(ValidationError::MissingField(section.to_string()))
}
