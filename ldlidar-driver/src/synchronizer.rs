use crate::error::LdLidarError;
use crate::serial::{ByteSource, ReadOutcome};
use ldlidar_data::FrameConfig;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SyncState {
    Seeking,
    Accumulating,
}

/// What the synchronizer produced for one call of `next_frame`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEvent {
    /// A candidate frame, sync byte first, not yet checksum-verified.
    Frame(Vec<u8>),
    /// The byte source timed out. The partial frame is kept.
    Idle,
    EndOfStream,
}

/// Splits a byte stream into candidate frames. A frame starts at the sync
/// byte and ends right before the next one, so a sync byte inside a payload
/// truncates that frame.
pub struct FrameSynchronizer {
    config: FrameConfig,
    state: SyncState,
    buffer: Vec<u8>,
    n_discarded: usize,
}

impl FrameSynchronizer {
    pub fn new(config: FrameConfig) -> FrameSynchronizer {
        FrameSynchronizer {
            config,
            state: SyncState::Seeking,
            buffer: Vec::new(),
            n_discarded: 0,
        }
    }

    /// Number of partial frames dropped because they were shorter than the
    /// minimum frame length.
    pub fn n_discarded(&self) -> usize {
        self.n_discarded
    }

    /// Pulls bytes until a candidate frame is complete, the source times out
    /// or the stream ends.
    pub fn next_frame<S: ByteSource + ?Sized>(
        &mut self,
        source: &mut S,
    ) -> Result<SyncEvent, LdLidarError> {
        loop {
            match source.read_byte()? {
                ReadOutcome::Byte(byte) => {
                    if let Some(frame) = self.push(byte) {
                        return Ok(SyncEvent::Frame(frame));
                    }
                }
                ReadOutcome::Timeout => return Ok(SyncEvent::Idle),
                ReadOutcome::EndOfStream => {
                    self.reset();
                    return Ok(SyncEvent::EndOfStream);
                }
            }
        }
    }

    /// Feeds one byte and returns the completed candidate, if any.
    pub fn push(&mut self, byte: u8) -> Option<Vec<u8>> {
        let is_sync = byte == self.config.sync_byte;
        match self.state {
            SyncState::Seeking => {
                if is_sync {
                    self.state = SyncState::Accumulating;
                    self.buffer.push(byte);
                }
                None
            }
            SyncState::Accumulating if is_sync => {
                let candidate = std::mem::replace(&mut self.buffer, vec![byte]);
                if candidate.len() >= self.config.min_frame_length {
                    return Some(candidate);
                }
                self.n_discarded += 1;
                debug!(length = candidate.len(), "discarding incomplete frame");
                None
            }
            SyncState::Accumulating => {
                self.buffer.push(byte);
                None
            }
        }
    }

    fn reset(&mut self) {
        if !self.buffer.is_empty() {
            self.n_discarded += 1;
            debug!(
                length = self.buffer.len(),
                "stream ended, discarding partial frame"
            );
        }
        self.buffer.clear();
        self.state = SyncState::Seeking;
    }
}
