// Copyright (C) 2015-2025 The Neo Project.
//
// tracker.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Confirmation tracking.
//!
//! A tracker polls the node until the application log of a submitted
//! transaction shows up. Each stream owns its poll loop: nothing runs until
//! it is first polled, and dropping it stops the loop and its timer.

use crate::models::RpcApplicationLog;
use crate::rpc_client::NeoRpc;
use crate::rpc_exception::RpcException;
use futures::stream::{self, BoxStream, StreamExt};
use neo_config::{ClientConfig, DEFAULT_POLL_INTERVAL_MS};
use neo_core::UInt256;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, trace, warn};

/// The terminal event of a confirmation stream.
pub type ApplicationLogEvent = Result<RpcApplicationLog, RpcException>;

/// Floor applied to the poll interval of a running tracker.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// A stream yielding exactly one [`ApplicationLogEvent`], then ending.
pub type ApplicationLogStream = BoxStream<'static, ApplicationLogEvent>;

/// How a tracker polls the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay between polls. A running tracker never polls faster than
    /// [`MIN_POLL_INTERVAL`].
    pub interval: Duration,
    /// Consecutive failed polls after which the stream ends with the last
    /// error. `None` tolerates any number.
    pub max_failures: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_failures: None,
        }
    }
}

impl From<&ClientConfig> for PollPolicy {
    fn from(config: &ClientConfig) -> Self {
        Self {
            interval: config.poll_interval(),
            max_failures: config.max_poll_failures,
        }
    }
}

/// A cold stream that resolves once the node reports an application log
/// for `tx_id`.
///
/// The log is queried whenever the block count grows, starting with the
/// first poll.
pub fn application_log_stream(
    rpc: Arc<dyn NeoRpc>,
    tx_id: UInt256,
    policy: PollPolicy,
) -> ApplicationLogStream {
    stream::once(async move {
        let mut tracker = Tracker {
            rpc,
            tx_id,
            policy,
            last_height: None,
            failures: 0,
        };
        tracker.wait_for_log().await
    })
    .boxed()
}

struct Tracker {
    rpc: Arc<dyn NeoRpc>,
    tx_id: UInt256,
    policy: PollPolicy,
    last_height: Option<u32>,
    failures: u32,
}

impl Tracker {
    async fn wait_for_log(&mut self) -> ApplicationLogEvent {
        let mut interval = time::interval(self.policy.interval.max(MIN_POLL_INTERVAL));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match self.poll_once().await {
                Ok(Some(log)) => {
                    info!(tx = %self.tx_id, executions = log.executions.len(), "application log found");
                    return Ok(log);
                }
                Ok(None) => self.failures = 0,
                Err(err) => {
                    self.failures += 1;
                    warn!(tx = %self.tx_id, failures = self.failures, error = %err, "poll failed");
                    if self
                        .policy
                        .max_failures
                        .is_some_and(|max| self.failures >= max)
                    {
                        return Err(err);
                    }
                }
            }
        }
    }

    async fn poll_once(&mut self) -> Result<Option<RpcApplicationLog>, RpcException> {
        let height = self.rpc.get_block_count().await?;
        trace!(tx = %self.tx_id, height, "polling for application log");
        if self.last_height.is_some_and(|last| height <= last) {
            return Ok(None);
        }

        let log = self.rpc.get_application_log(&self.tx_id).await?;
        if log.is_none() {
            self.last_height = Some(height);
        }
        Ok(log)
    }
}

/// A running confirmation subscription.
///
/// The poll task stops on [`Subscription::cancel`] or when the value is
/// dropped. Stopping only ends the observation; the transaction stays
/// submitted.
#[derive(Debug)]
pub struct Subscription {
    cancel: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl Subscription {
    /// Spawns a task driving `stream` and hands its event to `on_event`.
    ///
    /// Must be called within a tokio runtime.
    pub fn spawn<F>(mut stream: ApplicationLogStream, on_event: F) -> Self
    where
        F: FnOnce(ApplicationLogEvent) + Send + 'static,
    {
        let (cancel, mut cancelled) = oneshot::channel();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = &mut cancelled => debug!("confirmation subscription cancelled"),
                event = stream.next() => {
                    if let Some(event) = event {
                        on_event(event);
                    }
                }
            }
        });
        Self {
            cancel: Some(cancel),
            handle,
        }
    }

    /// Whether the event was delivered or the task otherwise ended.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops the poll loop.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
            self.handle.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.stop();
    }
}
