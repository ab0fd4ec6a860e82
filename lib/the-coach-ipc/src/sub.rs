use crate::error::IpcError;
use nng::{Protocol, Socket};
use serde::de::DeserializeOwned;
use std::{marker::PhantomData, sync::Arc};

#[derive(Debug)]
pub struct IpcSubscriber<T: DeserializeOwned> {
    socket: Arc<Socket>,
    _data_type: PhantomData<T>,
}

impl<T: DeserializeOwned + Send + Sync> IpcSubscriber<T> {
    pub fn new(url: &str) -> Result<Self, IpcError> {
        let socket = Arc::new(Socket::new(Protocol::Pull0)?);
        socket.listen(url)?;
        Ok(Self {
            socket,
            _data_type: PhantomData,
        })
    }

    /// Wait for the next message.
    pub async fn recv(&self) -> Result<T, IpcError> {
        let socket = self.socket.clone();
        let message = tokio::task::spawn_blocking(move || socket.recv()).await??;
        let data = bincode::deserialize(&message)?;
        Ok(data)
    }
}
