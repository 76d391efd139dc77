//! CT clamp component
//!
//! Owns one [`CtClampSensor`] together with the loop services it borrows
//! (timeout table, high-frequency request, publish sink) and drives it from
//! a single cooperative loop:
//!
//! ```text
//! setup()      log config, arm first Update at t=0
//! run_once()   fire due timeouts (CloseWindow before Update), then tick
//! next_poll_delay_us()  550 µs while sampling, else time to next deadline
//! ```
//!
//! The periodic trigger is itself an `Update` timeout re-armed on every
//! fire, so the whole component needs nothing from the executor but a
//! sleep.

#[cfg(feature = "embassy")]
pub mod task;

use ct_clamp_core::ct_clamp::{
    CtClampSensor, SensorError, TickOutcome, WindowReport, WindowStart,
};
use ct_clamp_core::scheduler::{
    HighFrequencyLoop, TimeoutId, TimeoutQueue, TimeoutScheduler, HIGH_FREQUENCY_POLL_US,
};
use ct_clamp_core::traits::{AnalogSource, PublishSink, TimeSource};

/// Timeout slots needed by one clamp (Update + CloseWindow)
pub const CT_CLAMP_TIMEOUT_SLOTS: usize = 2;

/// Loop-driven CT clamp with its own timeout table
pub struct CtClampComponent<S, P, const N: usize = CT_CLAMP_TIMEOUT_SLOTS> {
    sensor: CtClampSensor<S>,
    timeouts: TimeoutQueue<N>,
    high_freq: HighFrequencyLoop,
    sink: P,
    last_report: Option<WindowReport>,
}

impl<S, P, const N: usize> CtClampComponent<S, P, N>
where
    S: AnalogSource,
    P: PublishSink,
{
    pub fn new(sensor: CtClampSensor<S>, sink: P) -> Self {
        Self {
            sensor,
            timeouts: TimeoutQueue::new(),
            high_freq: HighFrequencyLoop::new(),
            sink,
            last_report: None,
        }
    }

    /// Log configuration and arm the first trigger for "now"
    pub fn setup<T: TimeSource>(&mut self, time: &T) -> Result<(), SensorError> {
        self.dump_config();
        self.timeouts
            .set_timeout(self.sensor.id(), TimeoutId::Update, 0, time.now_us())?;
        Ok(())
    }

    pub fn dump_config(&self) {
        let config = self.sensor.config();
        crate::log_info!("CT Clamp Sensor {}", self.sensor.id().index());
        crate::log_info!("  Sample Duration: {}s", config.sample_duration_s());
        crate::log_info!("  Update Interval: {}ms", config.update_interval_ms);
    }

    /// One loop iteration: dispatch due timeouts, then tick the sensor
    ///
    /// A failed trigger is logged and returned; the periodic `Update` has
    /// already been re-armed, so the next call keeps the cadence.
    pub fn run_once<T: TimeSource>(&mut self, time: &T) -> Result<(), SensorError> {
        let now_us = time.now_us();
        let mut result = Ok(());

        while let Some((owner, id)) = self.timeouts.pop_expired(now_us) {
            if owner != self.sensor.id() {
                continue;
            }
            crate::log_trace!("CT clamp {}: '{}' timeout fired", owner.index(), id.name());
            match id {
                TimeoutId::Update => {
                    if let Err(e) = self.trigger(now_us) {
                        result = Err(e);
                    }
                }
                TimeoutId::CloseWindow => {
                    if let Some(report) =
                        self.sensor
                            .on_timeout(id, &mut self.high_freq, &mut self.sink)
                    {
                        log_report(owner.index(), &report);
                        self.last_report = Some(report);
                    }
                }
            }
        }

        if self.sensor.tick(time) == TickOutcome::Invalid {
            crate::log_trace!("CT clamp {}: no valid reading", self.sensor.id().index());
        }

        result
    }

    /// Time the loop may sleep before the next `run_once`
    pub fn next_poll_delay_us<T: TimeSource>(&self, time: &T) -> u64 {
        if self.high_freq.is_requested() {
            return HIGH_FREQUENCY_POLL_US;
        }
        match self.timeouts.next_deadline_us() {
            Some(deadline_us) => deadline_us.saturating_sub(time.now_us()),
            None => u64::from(self.sensor.config().update_interval_ms) * 1_000,
        }
    }

    fn trigger(&mut self, now_us: u64) -> Result<(), SensorError> {
        let id = self.sensor.id();
        let interval_ms = self.sensor.config().update_interval_ms;
        self.timeouts
            .set_timeout(id, TimeoutId::Update, interval_ms, now_us)?;

        match self
            .sensor
            .update(now_us, &mut self.timeouts, &mut self.high_freq)
        {
            Ok(WindowStart::Opened) => Ok(()),
            Ok(WindowStart::Restarted) => {
                crate::log_warn!(
                    "CT clamp {}: window restarted before it closed",
                    id.index()
                );
                Ok(())
            }
            Ok(WindowStart::Skipped) => {
                crate::log_warn!("CT clamp {}: trigger skipped, window open", id.index());
                Ok(())
            }
            Err(e) => {
                crate::log_error!(
                    "CT clamp {}: '{}' failed: {}",
                    id.index(),
                    TimeoutId::CloseWindow.name(),
                    e.as_str()
                );
                Err(e)
            }
        }
    }

    /// Report of the most recently closed window
    pub fn last_report(&self) -> Option<&WindowReport> {
        self.last_report.as_ref()
    }

    pub fn sensor(&self) -> &CtClampSensor<S> {
        &self.sensor
    }

    pub fn sink(&self) -> &P {
        &self.sink
    }

    pub fn is_high_frequency(&self) -> bool {
        self.high_freq.is_requested()
    }
}

fn log_report(index: u8, report: &WindowReport) {
    if report.is_empty() {
        crate::log_warn!(
            "CT clamp {}: no valid samples in window, publishing NaN",
            index
        );
        return;
    }
    crate::log_debug!(
        "CT clamp {} - Raw AC Value: {}A ({}A) after {} different samples ({} SPS)",
        index,
        report.ac_rms,
        report.raw_rms,
        report.samples,
        report.samples_per_second
    );
}
