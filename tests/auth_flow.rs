use mirrorx_web::{
    app_lib::AppError,
    features::auth::{
        backend::AuthBackend,
        guard::{GuardState, Navigator, RouteGuard},
        password::SignUpForm,
        pending::{PendingSlot, PendingStorage, PendingVerification},
        session::{Session, SessionStore},
        types::{
            SendCodeRequest, SignInRequest, SignUpOutcome, SignUpRequest, User, VerifyCodeRequest,
        },
        verification::{VerificationFlow, VerifyEntry, VerifyPhase},
    },
};
use secrecy::SecretString;
use std::{cell::RefCell, rc::Rc};

/// Accepts one code and signs everyone in.
struct ScriptedBackend {
    valid_code: &'static str,
    session: Option<User>,
}

impl ScriptedBackend {
    fn new(session: Option<User>) -> Self {
        Self {
            valid_code: "482913",
            session,
        }
    }
}

impl AuthBackend for ScriptedBackend {
    async fn fetch_session(&self) -> Result<Option<User>, AppError> {
        Ok(self.session.clone())
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<User, AppError> {
        Ok(user(&request.email))
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpOutcome, AppError> {
        PendingVerification::new(&request.email)
            .map(SignUpOutcome::NeedsVerification)
            .ok_or_else(|| AppError::validation("Email is required."))
    }

    async fn sign_out(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn verify_code(&self, request: &VerifyCodeRequest) -> Result<(), AppError> {
        if request.code == self.valid_code {
            Ok(())
        } else {
            Err(AppError::Http {
                status: 400,
                message: "That code is not valid.".to_string(),
            })
        }
    }

    async fn send_verification_code(&self, _request: &SendCodeRequest) -> Result<(), AppError> {
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

/// In-memory `sessionStorage`; clones share one value so a second slot
/// models a reload of the tab.
#[derive(Clone, Default)]
struct TabStorage {
    value: Rc<RefCell<Option<String>>>,
}

impl PendingStorage for TabStorage {
    fn load(&self) -> Option<PendingVerification> {
        PendingVerification::from_storage_value(self.value.borrow().as_deref()?)
    }

    fn save(&self, record: &PendingVerification) {
        *self.value.borrow_mut() = Some(record.to_storage_value());
    }

    fn clear(&self) {
        *self.value.borrow_mut() = None;
    }
}

fn user(email: &str) -> User {
    User {
        id: "u_42".to_string(),
        full_name: "Grace Hopper".to_string(),
        email: email.to_string(),
    }
}

fn form() -> SignUpForm {
    SignUpForm {
        full_name: "Grace Hopper".to_string(),
        email: "Grace@Example.com".to_string(),
        password: SecretString::from("Cobol59!".to_string()),
        confirm_password: SecretString::from("Cobol59!".to_string()),
    }
}

#[tokio::test]
async fn sign_up_then_verify_with_a_retry() {
    let store = SessionStore::with_session(ScriptedBackend::new(None), Session::anonymous());

    let tab = TabStorage::default();
    let mut slot = PendingSlot::new(tab.clone());
    let navigator = RecordingNavigator::default();
    let visited = Rc::clone(&navigator.visited);

    match store.sign_up(&form()).await.expect("sign up") {
        SignUpOutcome::NeedsVerification(pending) => slot.set(pending),
        other => panic!("expected a pending verification, got {other:?}"),
    }

    let pending = match VerifyEntry::open(&mut slot) {
        VerifyEntry::Enter(pending) => pending,
        VerifyEntry::NoPendingRecord => panic!("record was handed off"),
    };
    assert_eq!(pending.email(), "grace@example.com");

    let mut flow = VerificationFlow::new(&pending, 60);

    flow.paste("111-111");
    let code = flow.begin_submit().expect("complete code");
    let result = store.verify_code(flow.email(), &code).await;
    assert!(!flow.settle_submit(result, &mut slot));
    assert_eq!(flow.phase(), VerifyPhase::Rejected);
    assert!(flow.entry().is_empty());
    assert_eq!(flow.error(), Some("That code is not valid."));
    assert_eq!(slot.current(), Some(pending.clone()));
    assert!(!flow.redirect_if_verified(&navigator, "/sign-in"));

    flow.paste("482913");
    assert_eq!(flow.phase(), VerifyPhase::EnteringCode);
    let code = flow.begin_submit().expect("complete code");
    let result = store.verify_code(flow.email(), &code).await;
    assert!(flow.settle_submit(result, &mut slot));
    assert_eq!(flow.phase(), VerifyPhase::Verified);

    assert_eq!(slot.current(), None);
    assert!(tab.value.borrow().is_none());
    assert!(flow.redirect_if_verified(&navigator, "/sign-in"));
    assert_eq!(*visited.borrow(), vec!["/sign-in".to_string()]);

    assert_eq!(store.snapshot(), Session::anonymous());
}

#[test]
fn verify_screen_without_record_returns_to_sign_up() {
    let navigator = RecordingNavigator::default();
    let visited = Rc::clone(&navigator.visited);
    let mut slot = PendingSlot::new(TabStorage::default());

    let entry = VerifyEntry::open(&mut slot);

    assert_eq!(entry, VerifyEntry::NoPendingRecord);
    assert!(entry.redirect_if_missing(&navigator, "/sign-up"));
    assert_eq!(*visited.borrow(), vec!["/sign-up".to_string()]);
}

#[test]
fn verify_screen_restores_record_after_reload() {
    let navigator = RecordingNavigator::default();
    let tab = TabStorage::default();
    let record = PendingVerification::new("grace@example.com").expect("record");
    PendingSlot::new(tab.clone()).set(record.clone());

    let entry = VerifyEntry::open(&mut PendingSlot::new(tab));

    assert_eq!(entry, VerifyEntry::Enter(record));
    assert!(!entry.redirect_if_missing(&navigator, "/sign-up"));
    assert!(navigator.visited.borrow().is_empty());
}

#[tokio::test]
async fn resend_waits_for_cooldown() {
    let store = SessionStore::with_session(ScriptedBackend::new(None), Session::anonymous());
    let pending = PendingVerification::new("grace@example.com").expect("record");
    let mut flow = VerificationFlow::new(&pending, 3);

    assert_eq!(flow.begin_resend(), None);
    for _ in 0..3 {
        flow.tick();
    }

    let email = flow.begin_resend().expect("cooldown elapsed");
    let result = store.send_verification_code(&email).await;
    assert!(flow.finish_resend(result));
    assert_eq!(flow.resend_cooldown(), 3);
}

#[tokio::test]
async fn guard_follows_the_session_lifecycle() {
    let store = SessionStore::new(ScriptedBackend::new(Some(user("grace@example.com"))));
    let navigator = RecordingNavigator::default();
    let visited = Rc::clone(&navigator.visited);
    let mut guard = RouteGuard::new(navigator, "/sign-in");
    let mut updates = store.subscribe();

    assert_eq!(guard.observe(&store.snapshot()), GuardState::Resolving);

    store.resolve().await;
    assert!(updates.has_changed().expect("store alive"));
    assert_eq!(
        guard.observe(&updates.borrow_and_update()),
        GuardState::Authorized
    );

    store.sign_out().await.expect("sign out");
    assert_eq!(
        guard.observe(&updates.borrow_and_update()),
        GuardState::Redirecting
    );
    assert_eq!(*visited.borrow(), vec!["/sign-in".to_string()]);
}

#[tokio::test]
async fn timed_out_resolution_redirects_and_ignores_late_answer() {
    let store = SessionStore::new(ScriptedBackend::new(Some(user("grace@example.com"))));
    let navigator = RecordingNavigator::default();
    let visited = Rc::clone(&navigator.visited);
    let mut guard = RouteGuard::new(navigator, "/sign-in");

    assert!(store.expire_resolution());
    assert_eq!(guard.observe(&store.snapshot()), GuardState::Redirecting);

    store.resolve().await;
    assert_eq!(store.snapshot(), Session::anonymous());
    assert_eq!(visited.borrow().len(), 1);
}
