//! # PDU Codec Service
//!
//! Application service layer that implements the `PduCodecApi` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`PduCodecApi`) with the configured identity,
//!   secret and cluster version
//! - Uses the outbound port (`TaskExecutor`) to run encode / decode off the
//!   caller's thread
//! - Delegates wire logic to the domain layer

use crate::config::CodecConfig;
use crate::domain::builder::{OperationKind, RequestBuilder};
use crate::domain::codec;
use crate::ports::inbound::PduCodecApi;
use crate::ports::outbound::TaskExecutor;
use kinetic_types::{BuildError, Command, DecodeError, HmacKey, PduError};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;

/// PDU Codec Service.
///
/// The secret is shared read-only with every worker through an `Arc`; no
/// call mutates it.
pub struct PduCodecService<E: TaskExecutor> {
    key: Arc<HmacKey>,
    identity: i64,
    builder: RequestBuilder,
    executor: E,
}

impl<E: TaskExecutor> PduCodecService<E> {
    /// Create a new codec service.
    ///
    /// # Arguments
    /// * `config` - Identity, secret and cluster version
    /// * `executor` - Where encode / decode work runs
    pub fn new(config: &CodecConfig, executor: E) -> Self {
        Self {
            key: Arc::new(config.hmac_secret.clone()),
            identity: config.identity,
            builder: RequestBuilder::new().with_cluster_version(config.cluster_version),
            executor,
        }
    }

    pub fn identity(&self) -> i64 {
        self.identity
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    // =========================================================================
    // Callback Operations
    // =========================================================================

    /// Encode `command` on the executor.
    pub fn submit_encode<C>(&self, command: Command, on_complete: C)
    where
        C: FnOnce(Result<Vec<u8>, PduError>) + Send + 'static,
    {
        let key = Arc::clone(&self.key);
        let identity = self.identity;
        self.executor.submit(
            move || Ok(codec::encode(&command, identity, &key)),
            on_complete,
        );
    }

    /// Decode and authenticate `bytes` on the executor.
    pub fn submit_decode<C>(&self, bytes: Vec<u8>, on_complete: C)
    where
        C: FnOnce(Result<Command, PduError>) + Send + 'static,
    {
        let key = Arc::clone(&self.key);
        self.executor.submit(
            move || codec::decode(&bytes, &key).map_err(PduError::from),
            on_complete,
        );
    }

    /// Build and encode a request on the executor.
    pub fn submit_request<C>(
        &self,
        kind: OperationKind,
        connection_id: i64,
        sequence: u64,
        key: Option<Vec<u8>>,
        on_complete: C,
    ) where
        C: FnOnce(Result<Vec<u8>, PduError>) + Send + 'static,
    {
        let secret = Arc::clone(&self.key);
        let identity = self.identity;
        let builder = self.builder;
        self.executor.submit(
            move || {
                let command = builder.build(kind, connection_id, sequence, key.as_deref())?;
                Ok(codec::encode(&command, identity, &secret))
            },
            on_complete,
        );
    }

    // =========================================================================
    // Async Operations
    // =========================================================================

    /// Build and encode a request, awaiting the executor.
    ///
    /// Dropping the returned future abandons the result; the work still runs
    /// and its outcome is discarded.
    pub async fn encode_request(
        &self,
        kind: OperationKind,
        connection_id: i64,
        sequence: u64,
        key: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, PduError> {
        let (tx, rx) = oneshot::channel();
        self.submit_request(kind, connection_id, sequence, key, move |result| {
            deliver(tx, result);
        });
        receive(rx).await
    }

    /// Decode and authenticate `bytes`, awaiting the executor.
    pub async fn decode_message(&self, bytes: Vec<u8>) -> Result<Command, PduError> {
        let (tx, rx) = oneshot::channel();
        self.submit_decode(bytes, move |result| {
            deliver(tx, result);
        });
        receive(rx).await
    }
}

fn deliver<T>(tx: oneshot::Sender<Result<T, PduError>>, result: Result<T, PduError>) {
    if tx.send(result).is_err() {
        debug!("Caller abandoned codec result, discarding");
    }
}

async fn receive<T>(rx: oneshot::Receiver<Result<T, PduError>>) -> Result<T, PduError> {
    rx.await
        .map_err(|_| PduError::TaskAborted("completion dropped without a result".to_string()))?
}

impl<E: TaskExecutor> PduCodecApi for PduCodecService<E> {
    fn build_request(
        &self,
        kind: OperationKind,
        connection_id: i64,
        sequence: u64,
        key: Option<&[u8]>,
    ) -> Result<Command, BuildError> {
        self.builder.build(kind, connection_id, sequence, key)
    }

    fn encode(&self, command: &Command) -> Vec<u8> {
        codec::encode(command, self.identity, &self.key)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Command, DecodeError> {
        codec::decode(bytes, &self.key)
    }
}
