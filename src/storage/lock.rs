//! Lock session state machine
//!
//! Two states: Locked and Unlocked. A session starts Locked iff a PIN is
//! set; with no PIN it is effectively always Unlocked. There is no lockout
//! or rate limiting on unlock attempts.

use crate::crypto::SecureString;

/// Required PIN length in characters
pub const PIN_LENGTH: usize = 4;

/// In-memory lock state for one session
pub struct LockSession {
    stored_pin: Option<SecureString>,
    locked: bool,
}

impl LockSession {
    /// Start a session; locked iff a PIN is set
    pub fn new(stored_pin: Option<SecureString>) -> Self {
        let locked = stored_pin.is_some();
        Self { stored_pin, locked }
    }

    /// Whether the session is currently locked
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether a PIN has been set
    pub fn has_pin(&self) -> bool {
        self.stored_pin.is_some()
    }

    /// The stored PIN, if set
    pub fn pin(&self) -> Option<&str> {
        self.stored_pin.as_deref()
    }

    /// Attempt to unlock; `true` iff the attempt matches the stored PIN
    ///
    /// With no PIN set the session is already unlocked and any attempt
    /// succeeds.
    pub fn unlock(&mut self, attempt: &str) -> bool {
        match &self.stored_pin {
            Some(pin) if pin.as_str() == attempt => {
                self.locked = false;
                true
            }
            Some(_) => false,
            None => {
                self.locked = false;
                true
            }
        }
    }

    /// Lock the session; always transitions to Locked
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Set a new PIN; rejected (no state change) unless exactly
    /// [`PIN_LENGTH`] characters
    pub fn set_pin(&mut self, pin: &str) -> bool {
        if pin.chars().count() != PIN_LENGTH {
            return false;
        }
        self.stored_pin = Some(SecureString::from(pin));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pin_starts_unlocked() {
        let session = LockSession::new(None);
        assert!(!session.is_locked());
        assert!(!session.has_pin());
    }

    #[test]
    fn test_with_pin_starts_locked() {
        let session = LockSession::new(Some("1234".into()));
        assert!(session.is_locked());
        assert!(session.has_pin());
    }

    #[test]
    fn test_unlock_with_correct_pin() {
        let mut session = LockSession::new(Some("1234".into()));
        assert!(session.unlock("1234"));
        assert!(!session.is_locked());
    }

    #[test]
    fn test_unlock_with_wrong_pin_stays_locked() {
        let mut session = LockSession::new(Some("1234".into()));
        assert!(!session.unlock("4321"));
        assert!(session.is_locked());
    }

    #[test]
    fn test_lock_always_locks() {
        let mut session = LockSession::new(Some("1234".into()));
        session.unlock("1234");
        session.lock();
        assert!(session.is_locked());

        // Lock is idempotent
        session.lock();
        assert!(session.is_locked());
    }

    #[test]
    fn test_unlock_without_pin_always_succeeds() {
        let mut session = LockSession::new(None);
        assert!(session.unlock("anything"));
        assert!(!session.is_locked());
    }

    #[test]
    fn test_set_pin_requires_exactly_four_chars() {
        let mut session = LockSession::new(None);

        assert!(!session.set_pin("123"));
        assert!(!session.set_pin("12345"));
        assert!(!session.set_pin(""));
        assert!(!session.has_pin());

        assert!(session.set_pin("1234"));
        assert_eq!(session.pin(), Some("1234"));
    }

    #[test]
    fn test_set_pin_does_not_relock() {
        let mut session = LockSession::new(None);
        session.set_pin("1234");
        // Setting a PIN mid-session leaves the session unlocked
        assert!(!session.is_locked());
    }

    #[test]
    fn test_set_pin_replaces_existing() {
        let mut session = LockSession::new(Some("1234".into()));
        session.unlock("1234");
        assert!(session.set_pin("9876"));
        assert_eq!(session.pin(), Some("9876"));
    }
}
