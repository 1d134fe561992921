//! End-to-end scenarios driven exclusively through the host-event surface,
//! the way a platform shim would deliver them.

use flowkit::app::{handle_event, HostEvent, StackId};
use flowkit::capabilities::Favorites as _;
use flowkit::domain::{DeepLink, TabId};
use flowkit::nav::ScreenKind;
use flowkit::registry::CapabilityKey;
use flowkit::{initialize, Config, Flow, Item, Screen};

fn boot() -> flowkit::FlowCoordinator {
    initialize(&Config::default())
}

fn drive(coordinator: &mut flowkit::FlowCoordinator, events: &[HostEvent]) {
    for event in events {
        handle_event(coordinator, event).expect("host event");
    }
}

#[test]
fn cold_start_to_main_and_back() {
    let mut coordinator = boot();
    assert_eq!(coordinator.flow(), Flow::Login);

    drive(&mut coordinator, &[HostEvent::LoginSucceeded]);
    assert_eq!(coordinator.flow(), Flow::Main);
    assert!(coordinator.registry().is_registered(CapabilityKey::Favorites));

    drive(&mut coordinator, &[HostEvent::LoggedOut]);
    assert_eq!(coordinator.flow(), Flow::Login);
    assert!(!coordinator.registry().is_registered(CapabilityKey::Favorites));
    assert!(coordinator.registry().is_registered(CapabilityKey::Logger));
}

#[test]
fn deep_link_during_login_delivers_after_readiness() {
    let mut coordinator = boot();

    drive(
        &mut coordinator,
        &[
            HostEvent::DeepLink("flowdemo://item/swiftui".to_string()),
            HostEvent::LoginSucceeded,
        ],
    );

    // Installed but not yet settled: nothing delivered.
    let main = coordinator.main_coordinator().expect("main subtree");
    assert_eq!(main.home().nav().depth(), 1);

    drive(&mut coordinator, &[HostEvent::SubtreeReady]);

    let main = coordinator.main_coordinator().expect("main subtree");
    assert_eq!(main.tabs().selected_tab(), TabId::Home);
    assert_eq!(main.home().nav().top().kind(), ScreenKind::Detail);
    assert_eq!(
        main.home().detail().map(|d| d.item().id.as_str()),
        Some("swiftui")
    );

    // Readiness is one-shot: a duplicate signal changes nothing.
    drive(&mut coordinator, &[HostEvent::SubtreeReady]);
    let main = coordinator.main_coordinator().expect("main subtree");
    assert_eq!(main.home().nav().depth(), 2);
}

#[test]
fn later_deep_link_during_login_replaces_the_earlier_one() {
    let mut coordinator = boot();

    drive(
        &mut coordinator,
        &[
            HostEvent::DeepLink("flowdemo://item/swiftui".to_string()),
            HostEvent::DeepLink("flowdemo://tab/settings".to_string()),
            HostEvent::LoginSucceeded,
            HostEvent::SubtreeReady,
        ],
    );

    let main = coordinator.main_coordinator().expect("main subtree");
    assert_eq!(main.tabs().selected_tab(), TabId::Settings);
    assert_eq!(main.home().nav().depth(), 1);
}

#[test]
fn tab_deep_link_in_main_selects_without_readiness() {
    let mut coordinator = boot();
    drive(&mut coordinator, &[HostEvent::LoginSucceeded]);

    drive(
        &mut coordinator,
        &[HostEvent::DeepLink("flowdemo://tab/search".to_string())],
    );

    // `search` aliases the items tab; selection is immediate.
    let main = coordinator.main_coordinator().expect("main subtree");
    assert_eq!(main.tabs().selected_tab(), TabId::Items);
}

#[test]
fn profile_deep_link_presents_exactly_one_modal() {
    let mut coordinator = boot();
    drive(&mut coordinator, &[HostEvent::LoginSucceeded]);

    drive(
        &mut coordinator,
        &[
            HostEvent::DeepLink("flowdemo://profile".to_string()),
            HostEvent::TransitionCompleted(StackId::Home),
            // Second profile link while the modal is up: must be a no-op.
            HostEvent::DeepLink("flowdemo://profile".to_string()),
        ],
    );

    let main = coordinator.main_coordinator().expect("main subtree");
    assert_eq!(main.home().nav().presented(), Some(&Screen::Profile));
}

#[test]
fn queued_navigation_drains_in_submission_order() {
    let mut coordinator = boot();
    drive(&mut coordinator, &[HostEvent::LoginSucceeded]);

    {
        let main = coordinator.main_coordinator_mut().expect("main subtree");
        let home = main.home_mut();
        home.show_detail(Item::new("swiftui", "Declarative UI"));
        // Queued behind the running push animation.
        home.nav_mut().safe_pop();
        home.nav_mut().safe_push(Screen::Profile);
    }

    drive(
        &mut coordinator,
        &[
            HostEvent::TransitionCompleted(StackId::Home),
            HostEvent::TransitionCompleted(StackId::Home),
            HostEvent::TransitionCompleted(StackId::Home),
        ],
    );

    // Push, then pop, then push: home → (detail pushed, popped) → profile.
    let main = coordinator.main_coordinator().expect("main subtree");
    let screens = main.home().nav().screens();
    assert_eq!(screens.len(), 2);
    assert_eq!(screens[0], Screen::Home);
    assert_eq!(screens[1], Screen::Profile);
}

#[test]
fn malformed_uris_never_disturb_state() {
    let mut coordinator = boot();

    drive(
        &mut coordinator,
        &[
            HostEvent::DeepLink("mailto://someone".to_string()),
            HostEvent::DeepLink("flowdemo://tab/garage".to_string()),
            HostEvent::DeepLink("flowdemo://".to_string()),
        ],
    );

    assert!(coordinator.pending_deep_link().is_none());
    assert_eq!(coordinator.flow(), Flow::Login);
}

#[test]
fn favorites_do_not_leak_across_logout() {
    let mut coordinator = boot();
    drive(&mut coordinator, &[HostEvent::LoginSucceeded]);

    let favorites = coordinator.registry().favorites();
    favorites.toggle("swiftui");
    assert!(favorites.is_favorited("swiftui"));

    drive(
        &mut coordinator,
        &[HostEvent::LoggedOut, HostEvent::LoginSucceeded],
    );

    // The old instance was reset on teardown, and the new session registered
    // a fresh store.
    assert!(!favorites.is_favorited("swiftui"));
    assert!(!coordinator.registry().favorites().is_favorited("swiftui"));
}

#[test]
fn snapshot_serializes_for_host_inspection() {
    let mut coordinator = boot();
    drive(
        &mut coordinator,
        &[
            HostEvent::DeepLink("flowdemo://item/combine".to_string()),
            HostEvent::LoginSucceeded,
            HostEvent::SubtreeReady,
        ],
    );

    let snapshot = coordinator.snapshot();
    let json = serde_json::to_string(&snapshot).expect("serializable snapshot");
    assert!(json.contains("\"combine\""));

    let parsed: flowkit::app::FlowSnapshot = serde_json::from_str(&json).expect("round trip");
    assert_eq!(parsed.flow, Flow::Main);
    assert_eq!(parsed.selected_tab, Some(TabId::Home));
}

#[test]
fn custom_catalog_from_config_backs_item_links() {
    let config = Config {
        catalog: vec![Item::new("rustlang", "Systems Programming")],
        ..Default::default()
    };
    let mut coordinator = initialize(&config);

    drive(
        &mut coordinator,
        &[
            HostEvent::LoginSucceeded,
            // Known id navigates; the default-catalog id no longer exists.
            HostEvent::DeepLink("flowdemo://item/swiftui".to_string()),
        ],
    );

    let main = coordinator.main_coordinator().expect("main subtree");
    assert_eq!(main.home().nav().depth(), 1);

    drive(
        &mut coordinator,
        &[
            HostEvent::TransitionCompleted(StackId::Home),
            HostEvent::DeepLink("flowdemo://item/rustlang".to_string()),
        ],
    );

    let main = coordinator.main_coordinator().expect("main subtree");
    assert_eq!(
        main.home().detail().map(|d| d.item().id.as_str()),
        Some("rustlang")
    );
}

#[test]
fn deep_link_parse_matches_the_pending_slot() {
    let mut coordinator = boot();
    drive(
        &mut coordinator,
        &[HostEvent::DeepLink("FLOWDEMO://Tab/Search".to_string())],
    );
    assert_eq!(
        coordinator.pending_deep_link(),
        Some(&DeepLink::Tab(TabId::Items))
    );
}
