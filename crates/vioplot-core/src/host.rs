//! Background compute host
//!
//! One dedicated worker thread per chart instance. The interactive side
//! submits `(dataset, field key)` requests and polls for results; the two
//! sides share nothing but the request and update channels. Rapid
//! re-selection coalesces: the worker drains pending requests and computes
//! only the newest, so a burst of field switches costs one computation.
//!
//! Every request gets a monotonically increasing sequence number and every
//! update carries the number of the request it answers. [`LatestGate`]
//! discards deliveries older than the last accepted one, so a slow stale
//! computation can never overwrite a fresher result on the consumer side.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use vioplot_stats::{compute, FieldDistribution};

use crate::dataset::Dataset;
use crate::error::{ComputeError, ComputeResult};

/// Internal worker message: a dataset snapshot plus the selected field key.
#[derive(Debug, Clone)]
struct ComputeRequest {
    dataset: Arc<Dataset>,
    field_key: String,
    seq: u64,
}

/// One delivered result, tagged with the sequence number of the request it
/// answers.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeUpdate {
    /// Sequence number returned by [`ComputeHost::request`]
    pub seq: u64,
    /// The field the distribution was computed for (empty for no selection)
    pub field_key: String,
    /// The computed snapshot; empty when there was nothing to summarize
    pub distribution: FieldDistribution,
}

/// Monotonic admission gate for sequence-tagged updates.
///
/// `admit` accepts an update only if it is fresher than everything accepted
/// before it; once an update is admitted, all older ones are stale.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestGate {
    last_accepted: Option<u64>,
}

impl LatestGate {
    /// Admit `seq` if it is newer than the last accepted sequence number
    pub fn admit(&mut self, seq: u64) -> bool {
        if self.last_accepted.is_some_and(|last| seq <= last) {
            return false;
        }
        self.last_accepted = Some(seq);
        true
    }
}

/// Owns the worker thread and both channel endpoints for one chart instance.
///
/// Dropping the host tears the worker down: the request channel closes, the
/// worker exits its loop, and the thread is joined. No update is delivered
/// after teardown.
#[derive(Debug)]
pub struct ComputeHost {
    requests: Option<Sender<ComputeRequest>>,
    updates: Receiver<ComputeUpdate>,
    worker: Option<JoinHandle<()>>,
    next_seq: u64,
    gate: LatestGate,
}

impl ComputeHost {
    /// Start the background worker.
    pub fn spawn() -> ComputeResult<Self> {
        let (request_tx, request_rx) = mpsc::channel();
        let (update_tx, update_rx) = mpsc::channel();

        let worker = thread::Builder::new()
            .name("vioplot-compute".to_string())
            .spawn(move || worker_loop(&request_rx, &update_tx))
            .map_err(|e| ComputeError::WorkerSpawn {
                message: e.to_string(),
            })?;

        Ok(Self {
            requests: Some(request_tx),
            updates: update_rx,
            worker: Some(worker),
            next_seq: 0,
            gate: LatestGate::default(),
        })
    }

    /// Submit a computation for one field of the dataset. Never blocks.
    ///
    /// An empty `field_key` means "no selection" and produces the no-data
    /// result. Returns the request's sequence number; the matching
    /// [`ComputeUpdate`] carries the same number, unless a newer request
    /// supersedes this one before the worker picks it up.
    pub fn request(
        &mut self,
        dataset: Arc<Dataset>,
        field_key: impl Into<String>,
    ) -> ComputeResult<u64> {
        let sender = self
            .requests
            .as_ref()
            .ok_or(ComputeError::WorkerUnavailable)?;

        let seq = self.next_seq;
        self.next_seq += 1;
        let field_key = field_key.into();
        tracing::debug!(seq, field = %field_key, "submitting compute request");

        sender
            .send(ComputeRequest {
                dataset,
                field_key,
                seq,
            })
            .map_err(|_| ComputeError::WorkerUnavailable)?;
        Ok(seq)
    }

    /// Non-blocking poll: drain every pending update and return the newest
    /// admissible one, or `None` if nothing fresh has arrived yet.
    pub fn try_latest(&mut self) -> Option<ComputeUpdate> {
        let mut newest = None;
        while let Ok(update) = self.updates.try_recv() {
            if self.gate.admit(update.seq) {
                newest = Some(update);
            } else {
                tracing::debug!(seq = update.seq, "discarding stale compute result");
            }
        }
        newest
    }

    /// Block until a fresh update arrives, then drain anything fresher that
    /// is already queued and return the newest.
    pub fn recv_latest(&mut self) -> ComputeResult<ComputeUpdate> {
        loop {
            let update = self
                .updates
                .recv()
                .map_err(|_| ComputeError::WorkerUnavailable)?;
            if !self.gate.admit(update.seq) {
                tracing::debug!(seq = update.seq, "discarding stale compute result");
                continue;
            }
            return Ok(self.try_latest().unwrap_or(update));
        }
    }
}

impl Drop for ComputeHost {
    fn drop(&mut self) {
        // Closing the request channel ends the worker's recv loop
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn worker_loop(requests: &Receiver<ComputeRequest>, updates: &Sender<ComputeUpdate>) {
    while let Ok(mut request) = requests.recv() {
        // Coalesce a burst of re-selections down to the newest request;
        // superseded requests produce no delivery.
        while let Ok(newer) = requests.try_recv() {
            request = newer;
        }

        let samples = request.dataset.numeric_samples(&request.field_key);
        let update = ComputeUpdate {
            seq: request.seq,
            field_key: request.field_key,
            distribution: compute(&samples),
        };
        if updates.send(update).is_err() {
            // Consumer dropped the receiving side; nothing left to deliver
            break;
        }
    }
    tracing::debug!("compute worker shutting down");
}
