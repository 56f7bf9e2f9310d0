//! Email verification sub-flow: six-slot code entry, submit, resend cooldown.
//!
//! `VerificationFlow` is plain state with no timers or I/O. The verification
//! screen feeds it input events and request results, drives `tick` from a
//! one-second interval, and moves focus to whatever slot the flow reports.
//!
//! Flow Overview: `EnteringCode → Submitting → {Verified, Rejected}`. A
//! rejected code clears the slots and editing returns the flow to
//! `EnteringCode`. `Verified` is terminal.

use crate::{
    app_lib::AppError,
    features::auth::{
        guard::Navigator,
        pending::{PendingSlot, PendingStorage, PendingVerification},
    },
};
use tracing::debug;

/// Number of digits in a verification code.
pub const CODE_LENGTH: usize = 6;

/// Checks that `code` is exactly six ASCII digits.
pub fn validate_code(code: &str) -> Result<(), AppError> {
    if code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(AppError::validation("Enter the 6-digit code from your email."))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Six independent single-digit slots.
pub struct CodeEntry {
    slots: [Option<char>; CODE_LENGTH],
}

impl CodeEntry {
    #[must_use]
    pub fn digit(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The code as a string once every slot is filled.
    #[must_use]
    pub fn code(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    /// First slot without a digit.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn clear(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }

    /// Applies the raw value of one slot's input. The last typed character
    /// wins; a blank value clears the slot. Returns `false` when the input was
    /// rejected and the slot kept its previous digit.
    fn set(&mut self, index: usize, value: &str) -> bool {
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        match value.chars().last() {
            None => {
                *slot = None;
                true
            }
            Some(c) if c.is_ascii_digit() => {
                *slot = Some(c);
                true
            }
            Some(_) => false,
        }
    }

    /// Fills slots from 0 with the digits found in `text`, dropping everything
    /// else. Slots past the pasted digits keep their content.
    fn paste(&mut self, text: &str) {
        let digits = text.chars().filter(char::is_ascii_digit).take(CODE_LENGTH);
        for (slot, digit) in self.slots.iter_mut().zip(digits) {
            *slot = Some(digit);
        }
    }
}

/// What the verification screen shows when it mounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyEntry {
    Enter(PendingVerification),
    /// Nothing to verify in this tab; the visitor goes back to sign-up.
    NoPendingRecord,
}

impl VerifyEntry {
    pub fn open<S: PendingStorage>(slot: &mut PendingSlot<S>) -> Self {
        slot.current().map_or(Self::NoPendingRecord, Self::Enter)
    }

    /// Navigates to `sign_up_path` when there is no record. Returns `true`
    /// when it navigated.
    pub fn redirect_if_missing<N: Navigator>(&self, navigator: &N, sign_up_path: &str) -> bool {
        match self {
            Self::Enter(_) => false,
            Self::NoPendingRecord => {
                navigator.navigate(sign_up_path);
                true
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyPhase {
    EnteringCode,
    Submitting,
    Verified,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// State of one mounted verification screen.
pub struct VerificationFlow {
    email: String,
    entry: CodeEntry,
    phase: VerifyPhase,
    focus: usize,
    cooldown_secs: u32,
    resend_cooldown: u32,
    resending: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl VerificationFlow {
    /// Starts a flow for `pending` with the resend cooldown already running,
    /// since sign-up just sent a code.
    #[must_use]
    pub fn new(pending: &PendingVerification, cooldown_secs: u32) -> Self {
        Self {
            email: pending.email().to_string(),
            entry: CodeEntry::default(),
            phase: VerifyPhase::EnteringCode,
            focus: 0,
            cooldown_secs,
            resend_cooldown: cooldown_secs,
            resending: false,
            error: None,
            notice: None,
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn entry(&self) -> &CodeEntry {
        &self.entry
    }

    #[must_use]
    pub fn phase(&self) -> VerifyPhase {
        self.phase
    }

    #[must_use]
    pub fn focus(&self) -> usize {
        self.focus
    }

    #[must_use]
    pub fn resend_cooldown(&self) -> u32 {
        self.resend_cooldown
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Slot inputs are disabled while a code is checked and after success.
    #[must_use]
    pub fn inputs_locked(&self) -> bool {
        matches!(self.phase, VerifyPhase::Submitting | VerifyPhase::Verified)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.inputs_locked() && self.entry.is_complete()
    }

    #[must_use]
    pub fn can_resend(&self) -> bool {
        self.resend_cooldown == 0 && !self.resending && !self.inputs_locked()
    }

    /// Applies typed input to slot `index`. Returns the slot to focus next.
    ///
    /// A keystroke leaves at most two characters in a slot. Longer values come
    /// from one-time-code autofill and are handled like a paste.
    pub fn enter_digit(&mut self, index: usize, value: &str) -> Option<usize> {
        if self.inputs_locked() || index >= CODE_LENGTH {
            return None;
        }
        if value.chars().count() > 2 {
            return self.paste(value);
        }
        if !self.entry.set(index, value) {
            return None;
        }
        self.resume_editing();
        self.focus = if self.entry.digit(index).is_some() {
            (index + 1).min(CODE_LENGTH - 1)
        } else {
            index
        };
        Some(self.focus)
    }

    /// Backspace on an empty slot moves focus to the previous slot.
    pub fn backspace(&mut self, index: usize) -> Option<usize> {
        if self.inputs_locked() || index == 0 || index >= CODE_LENGTH {
            return None;
        }
        if self.entry.digit(index).is_some() {
            return None;
        }
        self.focus = index - 1;
        Some(self.focus)
    }

    /// Pastes clipboard text starting at slot 0. Returns the slot to focus:
    /// the first empty one, or the last slot when the code is complete.
    pub fn paste(&mut self, text: &str) -> Option<usize> {
        if self.inputs_locked() {
            return None;
        }
        self.entry.paste(text);
        self.resume_editing();
        self.focus = self.entry.first_empty().unwrap_or(CODE_LENGTH - 1);
        Some(self.focus)
    }

    /// Moves to `Submitting` and returns the code to send, or records an
    /// inline error when the code is incomplete.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.inputs_locked() {
            return None;
        }
        match self.entry.code() {
            Some(code) => {
                self.phase = VerifyPhase::Submitting;
                self.error = None;
                self.notice = None;
                Some(code)
            }
            None => {
                self.error = Some("Enter the 6-digit code from your email.".to_string());
                None
            }
        }
    }

    /// Applies the verification result. Returns `true` when the code was accepted.
    ///
    /// A rejected code clears every slot and puts focus back on slot 0.
    pub fn finish_submit(&mut self, result: Result<(), AppError>) -> bool {
        if self.phase != VerifyPhase::Submitting {
            return false;
        }
        match result {
            Ok(()) => {
                debug!("verification code accepted");
                self.phase = VerifyPhase::Verified;
                self.notice = Some("Email verified. Redirecting to sign in...".to_string());
                true
            }
            Err(err) => {
                debug!("verification code rejected");
                self.phase = VerifyPhase::Rejected;
                self.entry.clear();
                self.focus = 0;
                self.error = Some(err.user_message());
                false
            }
        }
    }

    /// Applies the verification result and, once the code is accepted, removes
    /// the pending record so the screen cannot be reused.
    pub fn settle_submit<S: PendingStorage>(
        &mut self,
        result: Result<(), AppError>,
        pending: &mut PendingSlot<S>,
    ) -> bool {
        let accepted = self.finish_submit(result);
        if accepted {
            pending.clear();
        }
        accepted
    }

    /// Sends a verified visitor to `sign_in_path`. Does nothing in any other
    /// phase. Returns `true` when it navigated.
    pub fn redirect_if_verified<N: Navigator>(&self, navigator: &N, sign_in_path: &str) -> bool {
        if self.phase != VerifyPhase::Verified {
            return false;
        }
        navigator.navigate(sign_in_path);
        true
    }

    /// Marks a resend as in flight and returns the address to send to.
    /// Returns `None`, changing nothing, while the cooldown is running.
    pub fn begin_resend(&mut self) -> Option<String> {
        if !self.can_resend() {
            return None;
        }
        self.resending = true;
        self.error = None;
        self.notice = None;
        Some(self.email.clone())
    }

    /// Applies the resend result. On success the cooldown restarts and the
    /// entered digits are cleared. Returns `true` on success.
    pub fn finish_resend(&mut self, result: Result<(), AppError>) -> bool {
        if !self.resending {
            return false;
        }
        self.resending = false;
        match result {
            Ok(()) => {
                self.resend_cooldown = self.cooldown_secs;
                self.entry.clear();
                self.focus = 0;
                self.resume_editing();
                self.notice = Some("A new code is on its way.".to_string());
                true
            }
            Err(err) => {
                self.error = Some(err.user_message());
                false
            }
        }
    }

    /// One second elapsed. Returns `true` when the cooldown changed.
    pub fn tick(&mut self) -> bool {
        if self.resend_cooldown == 0 {
            return false;
        }
        self.resend_cooldown -= 1;
        true
    }

    fn resume_editing(&mut self) {
        if self.phase == VerifyPhase::Rejected {
            self.phase = VerifyPhase::EnteringCode;
            self.error = None;
        }
    }
}
