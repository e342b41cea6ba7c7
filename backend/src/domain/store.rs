//! The business data store.
//!
//! One process-wide service owning the persisted collections: clients, the
//! financial ledger, appointments, the notification feed, the selected
//! display currency, and per-role profile overrides. Handlers receive it as
//! an explicit shared context — there is no ambient global.
//!
//! Every mutator updates memory and immediately persists the full
//! collection through the [`CollectionStore`] port; callers observe the new
//! state as soon as the call returns. Each successful mutation publishes a
//! [`StoreEvent`] on a broadcast channel so interested parties (other
//! sessions, future push transports) learn about changes without polling.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::broadcast;
use tracing::warn;
use uuid::Uuid;

use crate::domain::finance::{Currency, converted_records};
use crate::domain::ports::{CollectionStore, StorageError};
use crate::domain::records::{Appointment, Client, FinancialRecord, Notification, Profile};
use crate::domain::seed;
use crate::domain::session::Role;

/// Maximum notification feed length; older entries are discarded.
pub const NOTIFICATION_CAP: usize = 10;

const CLIENTS_KEY: &str = "clients";
const FINANCIALS_KEY: &str = "financials";
const APPOINTMENTS_KEY: &str = "appointments";
const NOTIFICATIONS_KEY: &str = "notifications";
const CURRENCY_KEY: &str = "currency";
const PROFILES_KEY: &str = "profiles";

/// Change notification naming the mutated collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// `set_clients` ran.
    Clients,
    /// `set_financial_records` ran.
    FinancialRecords,
    /// `set_appointments` ran.
    Appointments,
    /// `add_notification` ran.
    Notifications,
    /// `set_currency` ran.
    Currency,
    /// `set_profile` ran.
    Profiles,
}

struct StoreState {
    clients: Vec<Client>,
    financial_records: Vec<FinancialRecord>,
    appointments: Vec<Appointment>,
    notifications: Vec<Notification>,
    currency: Currency,
    profiles: HashMap<Role, Profile>,
}

/// In-memory collections backed by a [`CollectionStore`].
pub struct DataStore {
    state: RwLock<StoreState>,
    backing: Arc<dyn CollectionStore>,
    events: broadcast::Sender<StoreEvent>,
}

fn load_or_seed<T: DeserializeOwned>(
    backing: &dyn CollectionStore,
    key: &str,
    seed: impl FnOnce() -> T,
) -> T {
    match backing.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(error) => {
                warn!(key, %error, "corrupt collection blob; using seed data");
                seed()
            }
        },
        Ok(None) => seed(),
        Err(error) => {
            warn!(key, %error, "collection read failed; using seed data");
            seed()
        }
    }
}

impl DataStore {
    /// Hydrate the store from the backing medium. Each collection loads
    /// independently: a missing or corrupt blob falls back to that
    /// collection's seed data without affecting the others.
    pub fn open(backing: Arc<dyn CollectionStore>) -> Self {
        let state = StoreState {
            clients: load_or_seed(backing.as_ref(), CLIENTS_KEY, seed::clients),
            financial_records: load_or_seed(
                backing.as_ref(),
                FINANCIALS_KEY,
                seed::financial_records,
            ),
            appointments: load_or_seed(backing.as_ref(), APPOINTMENTS_KEY, seed::appointments),
            notifications: load_or_seed(backing.as_ref(), NOTIFICATIONS_KEY, seed::notifications),
            currency: load_or_seed(backing.as_ref(), CURRENCY_KEY, Currency::default),
            profiles: load_or_seed(backing.as_ref(), PROFILES_KEY, HashMap::new),
        };
        let (events, _) = broadcast::channel(16);
        Self {
            state: RwLock::new(state),
            backing,
            events,
        }
    }

    /// Subscribe to collection change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|error| StorageError::io(format!("serialising {key}: {error}")))?;
        self.backing.write(key, &raw)
    }

    fn publish(&self, event: StoreEvent) {
        // Nobody listening is fine; the send result only reports that.
        let _ = self.events.send(event);
    }

    /// Current client roster.
    pub fn clients(&self) -> Vec<Client> {
        self.read().clients.clone()
    }

    /// Replace the client roster.
    pub fn set_clients(&self, clients: Vec<Client>) -> Result<(), StorageError> {
        self.persist(CLIENTS_KEY, &clients)?;
        self.write().clients = clients;
        self.publish(StoreEvent::Clients);
        Ok(())
    }

    /// Ledger entries in the base currency as persisted.
    pub fn financial_records(&self) -> Vec<FinancialRecord> {
        self.read().financial_records.clone()
    }

    /// Ledger entries converted to the selected display currency. The
    /// conversion is computed fresh from the base amounts on every call, so
    /// it never compounds.
    pub fn converted_financial_records(&self) -> Vec<FinancialRecord> {
        let state = self.read();
        converted_records(&state.financial_records, state.currency)
    }

    /// Replace the ledger. Amounts must be in the base currency.
    pub fn set_financial_records(&self, records: Vec<FinancialRecord>) -> Result<(), StorageError> {
        self.persist(FINANCIALS_KEY, &records)?;
        self.write().financial_records = records;
        self.publish(StoreEvent::FinancialRecords);
        Ok(())
    }

    /// Current appointments.
    pub fn appointments(&self) -> Vec<Appointment> {
        self.read().appointments.clone()
    }

    /// Replace the appointment list.
    pub fn set_appointments(&self, appointments: Vec<Appointment>) -> Result<(), StorageError> {
        self.persist(APPOINTMENTS_KEY, &appointments)?;
        self.write().appointments = appointments;
        self.publish(StoreEvent::Appointments);
        Ok(())
    }

    /// Notification feed, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.read().notifications.clone()
    }

    /// Prepend a notification, silently discarding entries beyond the cap.
    pub fn add_notification(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Notification, StorageError> {
        let notification = Notification {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            created_at: Utc::now(),
        };
        let updated = {
            let state = self.read();
            let mut feed = Vec::with_capacity(NOTIFICATION_CAP);
            feed.push(notification.clone());
            feed.extend(
                state
                    .notifications
                    .iter()
                    .take(NOTIFICATION_CAP - 1)
                    .cloned(),
            );
            feed
        };
        self.persist(NOTIFICATIONS_KEY, &updated)?;
        self.write().notifications = updated;
        self.publish(StoreEvent::Notifications);
        Ok(notification)
    }

    /// Selected display currency.
    pub fn currency(&self) -> Currency {
        self.read().currency
    }

    /// Select the display currency. Persisted amounts stay in the base
    /// currency.
    pub fn set_currency(&self, currency: Currency) -> Result<(), StorageError> {
        self.persist(CURRENCY_KEY, &currency)?;
        self.write().currency = currency;
        self.publish(StoreEvent::Currency);
        Ok(())
    }

    /// Profile overrides for one role; defaults when never set.
    pub fn profile(&self, role: Role) -> Profile {
        self.read().profiles.get(&role).cloned().unwrap_or_default()
    }

    /// All stored profile overrides.
    pub fn profiles(&self) -> HashMap<Role, Profile> {
        self.read().profiles.clone()
    }

    /// Store profile overrides for a role.
    pub fn set_profile(&self, role: Role, profile: Profile) -> Result<(), StorageError> {
        let updated = {
            let state = self.read();
            let mut profiles = state.profiles.clone();
            profiles.insert(role, profile);
            profiles
        };
        self.persist(PROFILES_KEY, &updated)?;
        self.write().profiles = updated;
        self.publish(StoreEvent::Profiles);
        Ok(())
    }
}
