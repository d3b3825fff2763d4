//! Sign-in/registration wizard state machine
//!
//! The auth page walks users through up to four steps. Which steps are
//! visited depends on whether the email belongs to an existing account:
//!
//! known user:   Email -> Verify -> (logged in)
//! unknown user: Email -> Profile -> Verify -> NhsLink -> (logged in)
//!
//! The page component owns the form fields; this machine only decides
//! which step is shown and where "back" leads.

/// A step of the auth wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Collect the email address.
    Email,
    /// Collect profile details for a new account.
    Profile,
    /// Enter the emailed one-time code.
    Verify,
    /// Link an NHS number to the new account.
    NhsLink,
}

/// What verifying the one-time code leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// Existing account: the session can start now.
    LoggedIn,
    /// New account: continue to the NHS link step.
    ContinueToNhsLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    known_email: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Email,
            known_email: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn known_email(&self) -> bool {
        self.known_email
    }

    /// The email was checked: known users go straight to verification,
    /// unknown ones fill in their profile first.
    pub fn email_checked(&mut self, exists: bool) {
        self.known_email = exists;
        self.step = if exists {
            WizardStep::Verify
        } else {
            WizardStep::Profile
        };
    }

    /// Profile details were accepted; send the code next.
    pub fn profile_completed(&mut self) {
        self.step = WizardStep::Verify;
    }

    /// The one-time code verified.
    pub fn otp_verified(&mut self) -> VerifyOutcome {
        if self.known_email {
            VerifyOutcome::LoggedIn
        } else {
            self.step = WizardStep::NhsLink;
            VerifyOutcome::ContinueToNhsLink
        }
    }

    /// Step back, retracing the path that led here.
    pub fn back(&mut self) {
        self.step = match self.step {
            WizardStep::Email => WizardStep::Email,
            WizardStep::Profile => WizardStep::Email,
            WizardStep::Verify if self.known_email => WizardStep::Email,
            WizardStep::Verify => WizardStep::Profile,
            WizardStep::NhsLink => WizardStep::Verify,
        };
    }

    /// Start over from the email step.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_email_skips_profile() {
        let mut w = Wizard::new();
        w.email_checked(true);
        assert_eq!(w.step(), WizardStep::Verify);
        assert_eq!(w.otp_verified(), VerifyOutcome::LoggedIn);
    }

    #[test]
    fn unknown_email_walks_all_steps() {
        let mut w = Wizard::new();
        w.email_checked(false);
        assert_eq!(w.step(), WizardStep::Profile);
        w.profile_completed();
        assert_eq!(w.step(), WizardStep::Verify);
        assert_eq!(w.otp_verified(), VerifyOutcome::ContinueToNhsLink);
        assert_eq!(w.step(), WizardStep::NhsLink);
    }

    #[test]
    fn back_retraces_the_known_path() {
        let mut w = Wizard::new();
        w.email_checked(true);
        w.back();
        assert_eq!(w.step(), WizardStep::Email);
    }

    #[test]
    fn back_retraces_the_unknown_path() {
        let mut w = Wizard::new();
        w.email_checked(false);
        w.profile_completed();
        w.otp_verified();
        assert_eq!(w.step(), WizardStep::NhsLink);

        w.back();
        assert_eq!(w.step(), WizardStep::Verify);
        w.back();
        assert_eq!(w.step(), WizardStep::Profile);
        w.back();
        assert_eq!(w.step(), WizardStep::Email);
        w.back();
        assert_eq!(w.step(), WizardStep::Email);
    }

    #[test]
    fn reset_returns_to_email() {
        let mut w = Wizard::new();
        w.email_checked(true);
        w.reset();
        assert_eq!(w.step(), WizardStep::Email);
        assert!(!w.known_email());
    }
}
