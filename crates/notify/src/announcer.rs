//! Announcer trait and transports.
//!
//! Announcements are a best-effort side channel: the pipeline catches and
//! logs every failure from here, and a disabled transport is a legal
//! silent no-op rather than an error.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};
use zeromq::prelude::*;
use zeromq::{PubSocket, ZmqMessage};

use crate::envelope::Envelope;
use crate::error::NotifyError;
use crate::event::ArtifactEvent;
use crate::topics;

#[async_trait]
pub trait Announcer: Send + Sync {
    /// Publish a stored-artifact event.
    async fn announce(&self, event: &ArtifactEvent) -> Result<(), NotifyError>;

    /// Flush anything buffered but unsent. Bounded and synchronous; the
    /// pipeline awaits this on every exit path of a run.
    async fn close(&self) -> Result<(), NotifyError> {
        Ok(())
    }

    /// Human-readable name for this transport (e.g. "zmq", "disabled").
    fn channel_name(&self) -> &str;
}

/// Blanket implementation so `Arc<dyn Announcer>` can be used directly.
#[async_trait]
impl<T: Announcer + ?Sized> Announcer for Arc<T> {
    async fn announce(&self, event: &ArtifactEvent) -> Result<(), NotifyError> {
        (**self).announce(event).await
    }

    async fn close(&self) -> Result<(), NotifyError> {
        (**self).close().await
    }

    fn channel_name(&self) -> &str {
        (**self).channel_name()
    }
}

/// ZeroMQ PUB announcer.
///
/// Events are sent as two-frame ZMQ messages:
/// 1. Topic string (used by SUB sockets for prefix filtering)
/// 2. MessagePack-encoded [`Envelope`]
pub struct ZmqAnnouncer {
    socket: Mutex<PubSocket>,
}

impl ZmqAnnouncer {
    /// Connect to a broker frontend or an existing SUB endpoint.
    pub async fn connect(endpoint: &str) -> Result<Self, NotifyError> {
        let mut socket = PubSocket::new();
        info!(endpoint = %endpoint, "connecting announce PUB socket");
        socket.connect(endpoint).await?;
        Ok(Self {
            socket: Mutex::new(socket),
        })
    }

    /// Bind the given endpoint for direct PUB/SUB without a broker.
    pub async fn bind(endpoint: &str) -> Result<Self, NotifyError> {
        let mut socket = PubSocket::new();
        info!(endpoint = %endpoint, "binding announce PUB socket");
        socket.bind(endpoint).await?;
        Ok(Self {
            socket: Mutex::new(socket),
        })
    }
}

#[async_trait]
impl Announcer for ZmqAnnouncer {
    async fn announce(&self, event: &ArtifactEvent) -> Result<(), NotifyError> {
        let topic = topics::for_group(&event.source_group);
        let envelope = Envelope::new(&topic, event.message_key(), event)?;
        let envelope_bytes = envelope.to_bytes()?;

        // Two-frame ZMQ message: [topic, envelope]
        let mut zmq_msg = ZmqMessage::from(topic.as_str());
        zmq_msg.push_back(envelope_bytes.into());

        let mut socket = self.socket.lock().await;
        socket.send(zmq_msg).await?;

        debug!(topic = %topic, key = %envelope.key, "announced artifact");
        Ok(())
    }

    // Sends are awaited inline above; nothing is queued on our side, so
    // close only has to release the socket lock.
    async fn close(&self) -> Result<(), NotifyError> {
        let _socket = self.socket.lock().await;
        debug!("announce PUB socket closed");
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "zmq"
    }
}

/// No-transport announcer: every announcement is a silent no-op.
pub struct DisabledAnnouncer;

#[async_trait]
impl Announcer for DisabledAnnouncer {
    async fn announce(&self, _event: &ArtifactEvent) -> Result<(), NotifyError> {
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "disabled"
    }
}
