use super::*;
use jerseyswap_core::storage::{PROFILES_KEY, SESSION_KEY};
use jerseyswap_core::user::{AuthProvider, FIRST_DRAFT_ID, NEURAL_LINK_ID, Role, VAULT_CAPACITY};
use jerseyswap_infrastructure::MemoryStore;

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
}

fn service(store: &MemoryStore) -> SessionService {
    SessionService::new(Arc::new(store.clone()), SessionSettings::default()).with_clock(fixed_day)
}

fn alex() -> SignUpRequest {
    SignUpRequest::new("Alex Kim", "alex@example.com", "alexk", "secret1")
}

async fn signed_up(store: &MemoryStore) -> SessionService {
    let mut session = service(store);
    session.bootstrap().await;
    session.sign_up(alex()).unwrap();
    session
        .complete_onboarding(OnboardingDetails::default())
        .await
        .unwrap();
    session
}

fn swap(team: &str) -> SavedSwap {
    SavedSwap::new(team, Some("NFL PRO-SYNC"), "data:image/png;base64,AA==", fixed_day())
}

#[tokio::test]
async fn test_bootstrap_empty_store_starts_at_auth() {
    let store = MemoryStore::new();
    let mut session = service(&store);
    assert_eq!(session.bootstrap().await, Step::Auth);
    assert!(session.profiles().is_empty());
    assert!(session.active_profile().is_none());
}

#[tokio::test]
async fn test_bootstrap_corrupted_store_starts_at_auth() {
    let store = MemoryStore::with_entries([(PROFILES_KEY, "[{\"id\":"), (SESSION_KEY, "1")]);
    let mut session = service(&store);
    assert_eq!(session.bootstrap().await, Step::Auth);
    assert!(session.profiles().is_empty());
}

#[tokio::test]
async fn test_bootstrap_restores_session() {
    let store = MemoryStore::new();
    let id = signed_up(&store).await.active_profile().unwrap().id.clone();

    let mut restored = service(&store);
    assert_eq!(restored.bootstrap().await, Step::Landing);
    assert_eq!(restored.active_profile().unwrap().id, id);
}

#[tokio::test]
async fn test_bootstrap_ignores_dangling_session_pointer() {
    let store = MemoryStore::new();
    signed_up(&store).await;
    store.set(SESSION_KEY, "someone-else").await.unwrap();

    let mut restored = service(&store);
    assert_eq!(restored.bootstrap().await, Step::Auth);
    assert_eq!(restored.profiles().len(), 1);
}

#[tokio::test]
async fn test_sign_up_then_onboarding_creates_active_profile() {
    let store = MemoryStore::new();
    let mut session = service(&store);
    session.bootstrap().await;

    session.sign_up(alex()).unwrap();
    assert!(session.profiles().is_empty());
    assert!(store.snapshot(PROFILES_KEY).await.is_none());

    let profile = session
        .complete_onboarding(OnboardingDetails {
            role: Some(Role::Athlete),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(profile.handle, "@alexk");
    assert_eq!(profile.role, Role::Athlete);
    assert!(profile.vault.is_empty());
    assert!(profile.has_achievement(NEURAL_LINK_ID));

    let id = profile.id.clone();
    assert_eq!(store.snapshot(SESSION_KEY).await, Some(id));
    assert!(session.pending_sign_up().is_none());
}

#[tokio::test]
async fn test_sign_up_rejects_duplicate_email_without_mutation() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;
    let before = store.snapshot(PROFILES_KEY).await;

    let err = session
        .sign_up(SignUpRequest::new("Other", "ALEX@example.com", "other", "secret2"))
        .unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::EmailTaken));
    assert_eq!(session.profiles().len(), 1);
    assert_eq!(store.snapshot(PROFILES_KEY).await, before);
}

#[tokio::test]
async fn test_sign_up_rejects_duplicate_handle() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;

    for handle in ["alexk", "@AlexK"] {
        let err = session
            .sign_up(SignUpRequest::new("Other", "other@example.com", handle, "secret2"))
            .unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::HandleTaken));
    }
}

#[tokio::test]
async fn test_complete_onboarding_without_sign_up_fails() {
    let store = MemoryStore::new();
    let mut session = service(&store);
    session.bootstrap().await;
    assert!(
        session
            .complete_onboarding(OnboardingDetails::default())
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_sign_in_identifier_forms_resolve_to_same_profile() {
    let store = MemoryStore::new();
    let id = signed_up(&store).await.active_profile().unwrap().id.clone();

    for identifier in ["alexk", "@alexk", "ALEXK", "Alex@Example.com"] {
        let mut session = service(&store);
        session.bootstrap().await;
        session.sign_out().await.unwrap();

        let profile = session.sign_in(identifier, "secret1").await.unwrap();
        assert_eq!(profile.id, id, "identifier {identifier}");
        assert_eq!(store.snapshot(SESSION_KEY).await.as_deref(), Some(id.as_str()));
    }
}

#[tokio::test]
async fn test_sign_in_failures() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;
    session.sign_out().await.unwrap();

    let err = session.sign_in("  ", "secret1").await.unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::IdentifierRequired));

    let err = session.sign_in("alexk", "").await.unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::PasswordRequired));

    let err = session.sign_in("alexk", "SECRET1").await.unwrap_err();
    assert!(err.is_authentication());
    assert_eq!(err.to_string(), INVALID_CREDENTIALS);
    assert!(session.active_profile().is_none());
}

#[tokio::test]
async fn test_sign_out_clears_session_pointer() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;
    session.sign_out().await.unwrap();

    assert!(session.active_profile().is_none());
    assert!(store.snapshot(SESSION_KEY).await.is_none());
    assert_eq!(session.profiles().len(), 1);
}

#[tokio::test]
async fn test_profile_picker_requires_password_by_default() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;
    let id = session.active_profile().unwrap().id.clone();
    session.sign_out().await.unwrap();

    let err = session.select_existing_profile(&id, None).await.unwrap_err();
    assert!(err.is_validation());
    let err = session
        .select_existing_profile(&id, Some("wrong1"))
        .await
        .unwrap_err();
    assert!(err.is_authentication());
    assert!(
        session
            .select_existing_profile("missing", Some("secret1"))
            .await
            .unwrap_err()
            .is_not_found()
    );

    let profile = session
        .select_existing_profile(&id, Some("secret1"))
        .await
        .unwrap();
    assert_eq!(profile.id, id);
}

#[tokio::test]
async fn test_passwordless_picker_when_enabled() {
    let store = MemoryStore::new();
    let id = signed_up(&store).await.active_profile().unwrap().id.clone();

    let mut session = SessionService::new(
        Arc::new(store.clone()),
        SessionSettings {
            allow_passwordless_picker: true,
        },
    );
    session.bootstrap().await;
    session.sign_out().await.unwrap();
    let profile = session.select_existing_profile(&id, None).await.unwrap();
    assert_eq!(profile.id, id);
}

#[tokio::test]
async fn test_record_swap_bounds_vault_and_unlocks_first_draft() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;

    assert!(session.record_swap(swap("Team 0")).await.unwrap());
    for n in 1..=VAULT_CAPACITY {
        assert!(!session.record_swap(swap(&format!("Team {n}"))).await.unwrap());
    }

    let profile = session.active_profile().unwrap();
    assert_eq!(profile.vault.len(), VAULT_CAPACITY);
    assert_eq!(profile.vault[0].team, format!("Team {VAULT_CAPACITY}"));
    assert!(profile.vault.iter().all(|s| s.team != "Team 0"));
    assert!(profile.has_achievement(FIRST_DRAFT_ID));
    assert_eq!(profile.achievements.len(), 2);

    let mut reloaded = service(&store);
    reloaded.bootstrap().await;
    assert_eq!(reloaded.active_profile().unwrap().vault, profile.vault);
}

#[tokio::test]
async fn test_record_swap_requires_active_profile() {
    let store = MemoryStore::new();
    let mut session = service(&store);
    session.bootstrap().await;
    assert!(session.record_swap(swap("x")).await.unwrap_err().is_authentication());
}

#[tokio::test]
async fn test_remove_swap() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;
    session.record_swap(swap("Keep")).await.unwrap();
    session.record_swap(swap("Drop")).await.unwrap();
    let drop_id = session.active_profile().unwrap().vault[0].id.clone();

    let removed = session.remove_swap(&drop_id).await.unwrap();
    assert_eq!(removed.team, "Drop");
    assert_eq!(session.active_profile().unwrap().vault.len(), 1);
    assert!(session.remove_swap(&drop_id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_profile_normalizes_and_keeps_history() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;
    session.record_swap(swap("Kansas City Chiefs")).await.unwrap();

    let mut edited = session.active_profile().unwrap().clone();
    edited.name = "Alex K.".to_string();
    edited.handle = "akim".to_string();
    edited.bio = "Wide receiver".to_string();
    edited.vault.clear();
    edited.password = None;

    let profile = session.update_profile(edited).await.unwrap();
    assert_eq!(profile.handle, "@akim");
    assert_eq!(profile.bio, "Wide receiver");
    assert_eq!(profile.vault.len(), 1);
    assert!(profile.password_matches("secret1"));
}

#[tokio::test]
async fn test_update_profile_enforces_unique_handle() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;
    session.sign_out().await.unwrap();
    session
        .sign_up(SignUpRequest::new("Sam Lee", "sam@example.com", "saml", "secret2"))
        .unwrap();
    session
        .complete_onboarding(OnboardingDetails::default())
        .await
        .unwrap();

    let mut edited = session.active_profile().unwrap().clone();
    edited.handle = "@ALEXK".to_string();
    let err = session.update_profile(edited).await.unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::HandleTaken));
    assert_eq!(session.active_profile().unwrap().handle, "@saml");
}

#[tokio::test]
async fn test_update_profile_rejects_bare_at_handle() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;

    let mut edited = session.active_profile().unwrap().clone();
    edited.handle = " @ ".to_string();
    let err = session.update_profile(edited).await.unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::HandleRequired));

    let err = session
        .sign_up(SignUpRequest::new("Other", "other@example.com", "@", "secret2"))
        .unwrap_err();
    assert_eq!(err.as_validation(), Some(&ValidationError::HandleRequired));
}

#[tokio::test]
async fn test_rejected_pick_keeps_current_session() {
    let store = MemoryStore::new();
    let mut session = signed_up(&store).await;
    let alex_id = session.active_profile().unwrap().id.clone();
    session.sign_out().await.unwrap();
    session
        .sign_up(SignUpRequest::new("Sam Lee", "sam@example.com", "saml", "secret2"))
        .unwrap();
    let sam_id = session
        .complete_onboarding(OnboardingDetails::default())
        .await
        .unwrap()
        .id
        .clone();

    let err = session
        .select_existing_profile(&alex_id, Some("wrong1"))
        .await
        .unwrap_err();
    assert!(err.is_authentication());
    assert_eq!(session.active_profile().unwrap().id, sam_id);
    assert_eq!(store.snapshot(SESSION_KEY).await, Some(sam_id));

    let profile = session
        .select_existing_profile(&alex_id, Some("secret1"))
        .await
        .unwrap();
    assert_eq!(profile.id, alex_id);
    assert_eq!(store.snapshot(SESSION_KEY).await, Some(alex_id));
}

#[tokio::test]
async fn test_sign_in_with_provider_creates_then_reuses_guest() {
    let store = MemoryStore::new();
    let mut session = service(&store);
    session.bootstrap().await;

    let guest = session
        .sign_in_with_provider(AuthProvider::Google)
        .await
        .unwrap();
    assert_eq!(guest.handle, "@google_pioneer_1");
    assert_eq!(guest.name, "Google Explorer");
    assert_eq!(guest.email, "google@sso.io");
    assert_eq!(guest.ovr, 80);
    assert!(guest.vault.is_empty());
    let guest_id = guest.id.clone();
    assert!(guest_id.starts_with("sso_"));
    assert_eq!(store.snapshot(SESSION_KEY).await.as_deref(), Some(guest_id.as_str()));

    session.sign_out().await.unwrap();
    let again = session
        .sign_in_with_provider(AuthProvider::Google)
        .await
        .unwrap();
    assert_eq!(again.id, guest_id);
    assert_eq!(session.profiles().len(), 1);

    let mut restored = service(&store);
    assert_eq!(restored.bootstrap().await, Step::Landing);
    assert_eq!(restored.active_profile().unwrap().id, guest_id);
}

#[tokio::test]
async fn test_guest_handle_skips_taken_handles() {
    let store = MemoryStore::new();
    let mut session = service(&store);
    session.bootstrap().await;
    session
        .sign_up(SignUpRequest::new(
            "Copycat",
            "copy@example.com",
            "discord_pioneer_1",
            "secret1",
        ))
        .unwrap();
    session
        .complete_onboarding(OnboardingDetails::default())
        .await
        .unwrap();
    session.sign_out().await.unwrap();

    let guest = session
        .sign_in_with_provider(AuthProvider::Discord)
        .await
        .unwrap();
    assert_eq!(guest.handle, "@discord_pioneer_2");
    assert_eq!(session.profiles().len(), 2);
}
