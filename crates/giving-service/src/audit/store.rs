//! Bounded in-memory audit event store.

use std::collections::{HashMap, VecDeque};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{Level, info, warn};

use giving_core::config::AuditConfig;
use giving_entity::audit::action::AuditCategory;
use giving_entity::{AuditEvent, NewAuditEvent};

/// Append-only buffer of audit events, holding at most `capacity` entries.
///
/// Once full, every new event evicts the oldest one. Contents live for the
/// lifetime of the process only.
#[derive(Debug)]
pub struct AuditStore {
    /// Events in insertion order, oldest at the front.
    events: RwLock<VecDeque<AuditEvent>>,
    /// Maximum retained events.
    capacity: usize,
}

/// Aggregate counters over the events currently retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    /// Retained events.
    pub total: usize,
    /// Retained events whose outcome was a failure.
    pub failures: usize,
    /// Retained events that belong in the security log.
    pub security_events: usize,
    /// Store capacity.
    pub capacity: usize,
    /// Retained events per action category.
    pub by_category: HashMap<AuditCategory, usize>,
}

impl AuditStore {
    /// Creates an empty store. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: RwLock::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Creates a store sized from configuration.
    pub fn from_config(config: &AuditConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Maximum number of retained events.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained events.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    /// Whether no event has been retained.
    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    /// Stamps, stores and logs an event, evicting the oldest entries if full.
    ///
    /// Never fails: missing origin metadata is replaced by placeholders.
    pub async fn record(&self, new: NewAuditEvent) -> AuditEvent {
        let event = {
            let mut events = self.events.write().await;
            // Stamped under the lock so insertion order follows the clock.
            let event = AuditEvent::from_new(new, Utc::now());
            events.push_back(event.clone());
            while events.len() > self.capacity {
                events.pop_front();
            }
            event
        };

        emit(&event);
        event
    }

    /// Up to `limit` events, most recent first.
    pub async fn list_recent(&self, limit: usize) -> Vec<AuditEvent> {
        self.select(limit, |_| true).await
    }

    /// Up to `limit` events performed by `actor_id`, most recent first.
    pub async fn list_by_actor(&self, actor_id: i64, limit: usize) -> Vec<AuditEvent> {
        self.select(limit, |e| e.actor_id == Some(actor_id)).await
    }

    /// Up to `limit` failed or security-sensitive events, most recent first.
    pub async fn list_security_events(&self, limit: usize) -> Vec<AuditEvent> {
        self.select(limit, AuditEvent::is_security_event).await
    }

    /// Counters over the retained events.
    pub async fn summary(&self) -> AuditSummary {
        let events = self.events.read().await;
        let mut by_category = HashMap::new();
        let mut failures = 0;
        let mut security_events = 0;

        for event in events.iter() {
            *by_category.entry(event.action.category()).or_insert(0) += 1;
            if !event.success {
                failures += 1;
            }
            if event.is_security_event() {
                security_events += 1;
            }
        }

        AuditSummary {
            total: events.len(),
            failures,
            security_events,
            capacity: self.capacity,
            by_category,
        }
    }

    async fn select<F>(&self, limit: usize, predicate: F) -> Vec<AuditEvent>
    where
        F: Fn(&AuditEvent) -> bool,
    {
        if limit == 0 {
            return Vec::new();
        }

        let events = self.events.read().await;
        let mut selected: Vec<AuditEvent> = events
            .iter()
            .rev()
            .filter(|e| predicate(*e))
            .cloned()
            .collect();
        drop(events);

        // Wall-clock time can step backwards; order by timestamp, not position.
        selected.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        selected.truncate(limit);
        selected
    }
}

/// Log level for an event's audit line: failures stand out at WARN.
fn audit_level(event: &AuditEvent) -> Level {
    if event.success {
        Level::INFO
    } else {
        Level::WARN
    }
}

fn emit(event: &AuditEvent) {
    if audit_level(event) == Level::INFO {
        info!(
            target: "admin_audit",
            event_id = %event.id,
            action = %event.action,
            actor_id = ?event.actor_id,
            ip_address = %event.ip_address,
            "{event}"
        );
    } else {
        warn!(
            target: "admin_audit",
            event_id = %event.id,
            action = %event.action,
            actor_id = ?event.actor_id,
            ip_address = %event.ip_address,
            "{event}"
        );
    }
}
