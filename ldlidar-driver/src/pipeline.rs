use crate::crc::validate_frame;
use crate::error::LdLidarError;
use crate::numeric::to_string;
use crate::packet::decode_frame;
use crate::scan::assemble_scan;
use crate::serial::ByteSource;
use crate::synchronizer::{FrameSynchronizer, SyncEvent};
use ldlidar_data::{FrameConfig, LaserScan};
use std::sync::mpsc;
use tracing::{debug, trace};

/// Consumer of assembled scans.
pub trait ScanSink {
    /// Delivers one scan. `ChannelClosed` tells the pipeline to stop,
    /// `ChannelFull` that this scan was dropped. Implementations must not
    /// block on a slow receiver.
    fn publish(&mut self, scan: LaserScan) -> Result<(), LdLidarError>;
}

impl ScanSink for mpsc::SyncSender<LaserScan> {
    fn publish(&mut self, scan: LaserScan) -> Result<(), LdLidarError> {
        self.try_send(scan).map_err(|e| match e {
            mpsc::TrySendError::Full(_) => LdLidarError::ChannelFull,
            mpsc::TrySendError::Disconnected(_) => LdLidarError::ChannelClosed,
        })
    }
}

impl ScanSink for mpsc::Sender<LaserScan> {
    fn publish(&mut self, scan: LaserScan) -> Result<(), LdLidarError> {
        self.send(scan).map_err(|_| LdLidarError::ChannelClosed)
    }
}

impl ScanSink for crossbeam_channel::Sender<LaserScan> {
    fn publish(&mut self, scan: LaserScan) -> Result<(), LdLidarError> {
        self.try_send(scan).map_err(|e| match e {
            crossbeam_channel::TrySendError::Full(_) => LdLidarError::ChannelFull,
            crossbeam_channel::TrySendError::Disconnected(_) => LdLidarError::ChannelClosed,
        })
    }
}

impl ScanSink for Vec<LaserScan> {
    fn publish(&mut self, scan: LaserScan) -> Result<(), LdLidarError> {
        self.push(scan);
        Ok(())
    }
}

/// Per-run counters of what happened to the byte stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Candidate frames cut out of the stream.
    pub n_frames: usize,
    /// Partial frames dropped by the synchronizer.
    pub n_discarded: usize,
    pub n_checksum_errors: usize,
    /// Frames that passed the checksum but not the layout check.
    pub n_decode_errors: usize,
    pub n_empty_frames: usize,
    pub n_published: usize,
    /// Scans dropped because the receiver was full.
    pub n_dropped: usize,
}

/// Byte source -> synchronizer -> CRC check -> decode -> assemble -> sink,
/// one frame at a time.
pub struct Pipeline<S, K> {
    source: S,
    sink: K,
    config: FrameConfig,
    synchronizer: FrameSynchronizer,
    stats: PipelineStats,
}

impl<S: ByteSource, K: ScanSink> Pipeline<S, K> {
    pub fn new(source: S, sink: K, config: FrameConfig) -> Pipeline<S, K> {
        Pipeline {
            source,
            sink,
            config,
            synchronizer: FrameSynchronizer::new(config),
            stats: PipelineStats::default(),
        }
    }

    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            n_discarded: self.synchronizer.n_discarded(),
            ..self.stats
        }
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Runs until the byte source reports end-of-stream or the sink closes.
    pub fn run_to_end(&mut self) -> Result<PipelineStats, LdLidarError> {
        self.run_while(|| true)
    }

    /// Runs until `keep_running` returns false, the byte source reports
    /// end-of-stream or the sink closes. `keep_running` is polled between
    /// frames and whenever the byte source times out. Scans the sink has no
    /// room for are dropped and counted, so a stalled receiver never stops the
    /// loop from reaching the next poll.
    pub fn run_while<F: FnMut() -> bool>(
        &mut self,
        mut keep_running: F,
    ) -> Result<PipelineStats, LdLidarError> {
        while keep_running() {
            let packet = match self.synchronizer.next_frame(&mut self.source)? {
                SyncEvent::Frame(packet) => packet,
                SyncEvent::Idle => continue,
                SyncEvent::EndOfStream => break,
            };
            self.stats.n_frames += 1;

            let scan = match self.process_frame(&packet) {
                Some(scan) => scan,
                None => continue,
            };
            trace!(
                n_samples = scan.ranges.len(),
                angle_min = scan.angle_min,
                "publishing scan"
            );
            match self.sink.publish(scan) {
                Ok(()) => self.stats.n_published += 1,
                Err(LdLidarError::ChannelFull) => {
                    self.stats.n_dropped += 1;
                    debug!(n_dropped = self.stats.n_dropped, "scan receiver full, dropping scan");
                }
                Err(LdLidarError::ChannelClosed) => {
                    debug!("scan sink closed, stopping");
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(self.stats())
    }

    /// Validates, decodes and assembles one candidate. Rejections are
    /// counted and logged, never propagated.
    fn process_frame(&mut self, packet: &[u8]) -> Option<LaserScan> {
        if let Err(e) = validate_frame(packet, self.config.min_frame_length) {
            self.stats.n_checksum_errors += 1;
            debug!(frame = %to_string(packet), "rejecting frame: {e}");
            return None;
        }
        let frame = match decode_frame(packet, &self.config) {
            Ok(frame) => frame,
            Err(e) => {
                self.stats.n_decode_errors += 1;
                debug!(frame = %to_string(packet), "undecodable frame: {e}");
                return None;
            }
        };
        match assemble_scan(&frame) {
            Ok(scan) => Some(scan),
            Err(e) => {
                self.stats.n_empty_frames += 1;
                debug!(length = packet.len(), "skipping frame: {e}");
                None
            }
        }
    }
}
