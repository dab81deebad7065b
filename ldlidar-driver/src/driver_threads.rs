use crate::pipeline::{Pipeline, ScanSink};
use crate::serial::ByteSource;
use crossbeam_channel::{Receiver, Sender};
use std::thread::JoinHandle;
use tracing::{error, info, warn};

/// Handle to the thread that reads the port and publishes scans.
/// The thread is stopped and joined when this handle is dropped.
pub struct DriverThread {
    pub(crate) terminator_tx: Sender<bool>,
    pub(crate) thread: Option<JoinHandle<()>>,
}

/// Body of the driver thread. The byte source (and with it the serial port)
/// is dropped when this returns, whatever the reason.
pub(crate) fn run_pipeline<S: ByteSource, K: ScanSink>(
    mut pipeline: Pipeline<S, K>,
    terminator_rx: Receiver<bool>,
) {
    match pipeline.run_while(|| !do_terminate(&terminator_rx)) {
        Ok(stats) => info!(
            n_frames = stats.n_frames,
            n_discarded = stats.n_discarded,
            n_checksum_errors = stats.n_checksum_errors,
            n_decode_errors = stats.n_decode_errors,
            n_empty_frames = stats.n_empty_frames,
            n_published = stats.n_published,
            n_dropped = stats.n_dropped,
            "driver stopped"
        ),
        Err(e) => error!(stats = ?pipeline.stats(), "driver stopped on error: {e}"),
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join the driver thread.
/// This function is automatically called when `driver_thread` is dropped.
pub fn join(driver_thread: &mut DriverThread) {
    // The thread may already be gone after end-of-stream or an I/O error.
    if driver_thread.terminator_tx.send(true).is_err() {
        warn!("driver thread already stopped");
    }
    if let Some(thread) = driver_thread.thread.take() {
        if thread.join().is_err() {
            error!("driver thread panicked");
        }
    }
}

impl Drop for DriverThread {
    fn drop(&mut self) {
        join(self);
    }
}
