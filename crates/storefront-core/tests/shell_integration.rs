//! End-to-end shell scenarios against the in-memory collaborators.

use storefront_core::mock::{FakeIdentity, MemoryStore, NavigationRecord, RecordingNavigator};
use storefront_core::{
    Breadcrumb, GateState, KeyValueStore, LocationState, NavigateOptions, Navigator,
    PointerTarget, PresentationMode, Role, ShellConfig, ShellController,
};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: String,
    role: Role,
}

fn ana() -> User {
    User {
        name: "Ana".to_string(),
        role: Role::Admin,
    }
}

#[test]
fn visitor_is_bounced_to_login_and_returns_after_sign_in() {
    let identity = FakeIdentity::<User>::loading();
    let navigator = RecordingNavigator::at("/superadmin/roles/edit");
    let mut shell = ShellController::new(
        ShellConfig::default(),
        identity.clone(),
        navigator.clone(),
        MemoryStore::new(),
    );

    // Pending check renders nothing and does not redirect
    assert_eq!(shell.evaluate(), GateState::Loading);
    assert!(!shell.gate_state().renders_content());
    assert!(navigator.records().is_empty());

    identity.resolve(None);
    assert_eq!(shell.evaluate(), GateState::Unauthenticated);
    assert!(!shell.gate_state().renders_content());

    let records = navigator.records();
    assert_eq!(records.len(), 1);
    let NavigationRecord::Soft { path, options } = &records[0] else {
        panic!("expected client-side redirect, got {:?}", records[0]);
    };
    assert_eq!(path, "/login");
    assert!(options.replace);
    let from = options.state.clone().and_then(|s| s.from);
    assert_eq!(from.as_deref(), Some("/superadmin/roles/edit"));

    // Login page signs in and sends the user back
    identity.resolve(Some(ana()));
    navigator.navigate(
        from.as_deref().unwrap_or("/superadmin"),
        NavigateOptions::replace_with(LocationState::default()),
    );
    assert_eq!(shell.evaluate(), GateState::Authenticated);
    assert_eq!(
        shell.breadcrumbs(),
        vec![
            Breadcrumb::new("Home", "/superadmin"),
            Breadcrumb::new("Roles", "/superadmin/roles"),
            Breadcrumb::new("Edit", "/superadmin/roles/edit"),
        ]
    );
    assert_eq!(navigator.records().len(), 2);
}

#[test]
fn sign_out_discards_session_with_full_reload() {
    let identity = FakeIdentity::resolved(Some(ana()));
    let navigator = RecordingNavigator::at("/superadmin/orders");
    let mut shell = ShellController::new(
        ShellConfig::default(),
        identity.clone(),
        navigator.clone(),
        MemoryStore::new(),
    );
    assert_eq!(shell.evaluate(), GateState::Authenticated);

    shell.sign_out();
    // Clearing the user re-runs the gate before the reload lands
    assert_eq!(shell.evaluate(), GateState::Unauthenticated);

    assert_eq!(identity.logout_calls(), 1);
    assert_eq!(
        navigator.records(),
        vec![NavigationRecord::Hard {
            path: "/login".to_string()
        }]
    );
}

#[test]
fn theme_round_trips_through_storage() {
    let store = MemoryStore::new();
    let mount = |store: &MemoryStore| {
        ShellController::new(
            ShellConfig::default(),
            FakeIdentity::resolved(Some(ana())),
            RecordingNavigator::at("/superadmin"),
            store.clone(),
        )
    };

    let mut shell = mount(&store);
    assert_eq!(shell.presentation_mode(), PresentationMode::Light);
    shell.toggle_theme();
    drop(shell);

    assert_eq!(mount(&store).presentation_mode(), PresentationMode::Dark);

    store.remove("darkMode").unwrap();
    assert_eq!(mount(&store).presentation_mode(), PresentationMode::Light);

    store.set("darkMode", "garbage").unwrap();
    assert_eq!(mount(&store).presentation_mode(), PresentationMode::Light);
}

#[test]
fn menus_and_sidebar_are_independent_of_gate() {
    let mut shell = ShellController::new(
        ShellConfig::default(),
        FakeIdentity::resolved(Some(ana())),
        RecordingNavigator::at("/superadmin"),
        MemoryStore::new(),
    );
    shell.evaluate();

    assert!(shell.toggle_sidebar());
    shell.close_sidebar();
    assert!(!shell.sidebar_open());

    shell.toggle_profile_menu();
    assert!(!shell.pointer_down(PointerTarget::Detached));
    assert!(shell.profile_menu_open());
    assert!(shell.pointer_down(PointerTarget::Outside));
    assert!(!shell.profile_menu_open());
}

#[test]
fn custom_base_path_moves_home_and_login() {
    let config = ShellConfig {
        root: "/backoffice".to_string(),
        login_path: "/backoffice/login".to_string(),
        ..ShellConfig::default()
    };
    let navigator = RecordingNavigator::at("/backoffice/order-items");
    let mut shell = ShellController::new(
        config,
        FakeIdentity::<User>::resolved(None),
        navigator.clone(),
        MemoryStore::new(),
    );

    assert_eq!(
        shell.breadcrumbs(),
        vec![
            Breadcrumb::new("Home", "/backoffice"),
            Breadcrumb::new("Order items", "/backoffice/order-items"),
        ]
    );

    shell.evaluate();
    assert_eq!(navigator.current_path(), "/backoffice/login");
}

#[test]
fn breadcrumbs_follow_back_button_navigation() {
    let navigator = RecordingNavigator::at("/superadmin/orders");
    let mut shell = ShellController::new(
        ShellConfig::default(),
        FakeIdentity::resolved(Some(ana())),
        navigator.clone(),
        MemoryStore::new(),
    );
    shell.evaluate();

    shell.navigate("/superadmin/orders/recent-returns");
    assert_eq!(shell.breadcrumbs().len(), 3);

    // History pop the shell did not initiate
    navigator.set_path("/superadmin/orders");
    assert_eq!(
        shell.breadcrumbs(),
        vec![
            Breadcrumb::new("Home", "/superadmin"),
            Breadcrumb::new("Orders", "/superadmin/orders"),
        ]
    );
    assert_eq!(shell.evaluate(), GateState::Authenticated);
    assert_eq!(navigator.records().len(), 1);
}
