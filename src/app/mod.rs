//! Application layer: the coordinator tree and its host-event surface.
//!
//! This is where the application's control flow lives: the root [`FlowCoordinator`]
//! two-state machine, the MAIN flow's tab host, the screen coordinators, and
//! the event handler hosts drive it all through.
//!
//! # Organization
//!
//! - [`events`]: [`HostEvent`] — everything the outside world tells the core
//! - [`handler`]: [`handle_event`] — sequential event dispatch
//! - [`flow`]: [`FlowCoordinator`], the subtree slot, snapshots
//! - [`tabs`]: [`TabHost`], the MAIN flow's tab container
//! - [`screens`]: per-screen coordinator nodes

pub mod events;
pub mod flow;
pub mod handler;
pub mod screens;
pub mod tabs;

pub use events::HostEvent;
pub use flow::{FlowCoordinator, FlowSnapshot, MainCoordinator, StackId, StackSnapshot};
pub use handler::handle_event;
pub use screens::{
    DetailCoordinator, HomeCoordinator, ItemsCoordinator, LoginCoordinator, ProfileCoordinator,
    SettingsCoordinator,
};
pub use tabs::TabHost;
