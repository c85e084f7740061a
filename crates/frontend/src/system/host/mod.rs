//! Host container integration
//!
//! The mini-app runs inside a messenger container that supplies the current
//! user and can be asked to close. Everything container-specific sits behind
//! [`HostBridge`]; the rest of the app only sees [`HostContext`].

mod telegram;

pub use telegram::TelegramHost;

use contracts::system::host::HostUser;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;

/// Delay before the container is closed, lets the panel hide visibly first
pub const CLOSE_DELAY_MS: u32 = 100;

/// Access to the embedding container
pub trait HostBridge {
    /// Tell the container the app has finished loading
    fn ready(&self);

    /// User that opened the app, if the container provides one
    fn current_user(&self) -> Option<HostUser>;

    /// Close the container immediately
    fn close(&self);
}

/// Host context provided to the whole app via Leptos context
#[derive(Clone, Copy)]
pub struct HostContext {
    bridge: StoredValue<Rc<dyn HostBridge>, LocalStorage>,
    user: StoredValue<Option<HostUser>>,
    close_delay_ms: u32,
}

impl HostContext {
    /// Signal readiness and read the user once
    pub fn init(bridge: Rc<dyn HostBridge>) -> Self {
        Self::init_with_close_delay(bridge, CLOSE_DELAY_MS)
    }

    /// Same as [`HostContext::init`]; `0` closes without waiting for a timer
    pub fn init_with_close_delay(bridge: Rc<dyn HostBridge>, close_delay_ms: u32) -> Self {
        bridge.ready();
        let user = bridge.current_user();
        match &user {
            Some(u) => log::debug!("host user: {} ({})", u.first_name, u.id),
            None => log::debug!("host container provided no user"),
        }

        Self {
            bridge: StoredValue::new_local(bridge),
            user: StoredValue::new(user),
            close_delay_ms,
        }
    }

    pub fn user(&self) -> Option<HostUser> {
        self.user.get_value()
    }

    /// Close the container after the configured delay
    pub fn request_close(&self) {
        let bridge = self.bridge.get_value();
        let delay_ms = self.close_delay_ms;
        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            bridge.close();
        });
    }
}
