use crate::error::IpcError;
use nng::options::{Options, SendTimeout};
use nng::{Protocol, Socket};
use serde::Serialize;
use std::time::Duration;
use std::{marker::PhantomData, sync::Arc};

/// How long a publish waits for a subscriber before failing.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Pushing end of the pipeline. Dials the subscriber asynchronously, so the
/// publisher can be created before the subscriber listens.
#[derive(Debug)]
pub struct IpcPublisher<T: Serialize> {
    socket: Arc<Socket>,
    _data_type: PhantomData<T>,
}

impl<T: Serialize + Send + Sync> IpcPublisher<T> {
    pub fn new(url: &str) -> Result<Self, IpcError> {
        Self::with_send_timeout(url, DEFAULT_SEND_TIMEOUT)
    }

    pub fn with_send_timeout(url: &str, timeout: Duration) -> Result<Self, IpcError> {
        let socket = Arc::new(Socket::new(Protocol::Push0)?);
        socket.set_opt::<SendTimeout>(Some(timeout))?;
        socket.dial_async(url)?;
        Ok(Self {
            socket,
            _data_type: PhantomData,
        })
    }

    /// Fails with a timeout when no subscriber takes the message in time.
    pub async fn publish(&self, data: &T) -> Result<(), IpcError> {
        let bytes = bincode::serialize(data)?;
        let socket = self.socket.clone();
        tokio::task::spawn_blocking(move || socket.send(&bytes).map_err(|(_, err)| err)).await??;
        Ok(())
    }
}
