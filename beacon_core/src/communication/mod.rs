//! In-process publisher-subscriber topics.
//!
//! `Hub` is the messaging seam between the host environment and the nodes.
//! Topics are identified by name; each topic carries exactly one payload
//! type, enforced at registration. Queues are bounded and drop the oldest
//! message on overflow, so a slow consumer always sees the freshest data.
//!
//! The bus is in-process and cooperative: the host publishes a fresh sensor
//! snapshot, then ticks the consuming node, all on one thread. One consumer
//! per topic is the supported discipline.

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::core::{LogSummary, NodeInfo};
use crate::error::{BeaconError, BeaconResult};

/// Maximum queued messages per topic before the oldest is dropped.
const TOPIC_CAPACITY: usize = 64;

struct TopicEntry {
    type_id: TypeId,
    queue: Arc<dyn Any + Send + Sync>,
}

static REGISTRY: Lazy<Mutex<HashMap<String, TopicEntry>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Publish/subscribe handle for a single topic.
///
/// Every handle created with the same topic name shares one queue, so a
/// publisher-side `Hub` and a subscriber-side `Hub` connect automatically.
pub struct Hub<T> {
    topic: String,
    queue: Arc<Mutex<VecDeque<T>>>,
}

impl<T: Send + 'static> Hub<T> {
    /// Create a handle for `topic`, registering the topic on first use.
    ///
    /// Fails if the topic name is empty or the topic is already registered
    /// with a different payload type.
    pub fn new(topic: &str) -> BeaconResult<Self> {
        if topic.is_empty() {
            return Err(BeaconError::Communication("topic name is empty".into()));
        }

        let mut registry = REGISTRY.lock();
        let entry = registry
            .entry(topic.to_string())
            .or_insert_with(|| TopicEntry {
                type_id: TypeId::of::<T>(),
                queue: Arc::new(Mutex::new(VecDeque::<T>::new())),
            });

        if entry.type_id != TypeId::of::<T>() {
            return Err(BeaconError::Communication(format!(
                "topic '{}' is already registered with a different payload type",
                topic
            )));
        }

        let queue = entry
            .queue
            .clone()
            .downcast::<Mutex<VecDeque<T>>>()
            .map_err(|_| {
                BeaconError::Communication(format!("topic '{}' payload type mismatch", topic))
            })?;

        Ok(Self {
            topic: topic.to_string(),
            queue,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Publish a message on this topic.
    pub fn send(&self, msg: T, ctx: Option<&mut NodeInfo>) -> BeaconResult<()>
    where
        T: LogSummary,
    {
        let summary = msg.log_summary();

        let mut queue = self.queue.lock();
        if queue.len() >= TOPIC_CAPACITY {
            queue.pop_front();
        }
        queue.push_back(msg);
        drop(queue);

        if let Some(ctx) = ctx {
            ctx.log_pub_summary(&self.topic, &summary);
        }
        Ok(())
    }

    /// Receive the next queued message, oldest first.
    pub fn recv(&mut self, ctx: Option<&mut NodeInfo>) -> Option<T>
    where
        T: LogSummary,
    {
        let msg = self.queue.lock().pop_front()?;
        if let Some(ctx) = ctx {
            ctx.log_sub_summary(&self.topic, &msg.log_summary());
        }
        Some(msg)
    }
}
