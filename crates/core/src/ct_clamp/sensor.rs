//! CT clamp sensor: window controller plus sample accumulator.
//!
//! Cycle:
//!
//! ```text
//! update()        Idle -> Sampling   arm CloseWindow, request high-frequency loop
//! tick()          Sampling           maybe take one reading (>= 550 µs apart)
//! close_window()  Sampling -> Idle   release loop request, publish AC RMS or NaN
//! ```
//!
//! All three run on the same cooperative loop, so no locking is involved.
//! The deadline is a `(ComponentId, TimeoutId::CloseWindow)` key held by the
//! scheduler; the host loop hands it back through [`CtClampSensor::on_timeout`].

use super::config::{CtClampConfig, OverlapPolicy};
use super::error::SensorError;
use super::window::SamplingWindow;
use crate::parameters::{CtClampParams, ParameterStore};
use crate::scheduler::{ComponentId, HighFrequencyRequest, TimeoutId, TimeoutScheduler};
use crate::traits::{AnalogSource, PublishSink, TimeSource};

/// Coarse sampler state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerState {
    Idle,
    Sampling,
}

/// What a single `tick` did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No window open
    Idle,
    /// Too soon after the last accepted sample, source not read
    NotReady,
    /// Source had no valid reading
    Invalid,
    /// Reading folded into the window
    Accepted(f32),
}

/// What `update` did with the periodic trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStart {
    /// Fresh window from idle
    Opened,
    /// Open window discarded and restarted
    Restarted,
    /// Trigger dropped, open window left running
    Skipped,
}

/// Summary of a closed window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowReport {
    /// Published value: AC RMS, NaN for an empty window
    pub ac_rms: f32,
    /// RMS including DC, NaN for an empty window
    pub raw_rms: f32,
    /// Mean of the readings, NaN for an empty window
    pub dc_offset: f32,
    pub samples: u32,
    pub samples_per_second: u32,
}

impl WindowReport {
    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }
}

/// Current-transformer clamp sensor
pub struct CtClampSensor<S> {
    id: ComponentId,
    config: CtClampConfig,
    source: S,
    window: SamplingWindow,
}

impl<S: AnalogSource> CtClampSensor<S> {
    /// Create an idle sensor; fails if `config` does not validate
    pub fn new(id: ComponentId, config: CtClampConfig, source: S) -> Result<Self, SensorError> {
        config.validate()?;
        Ok(Self {
            id,
            config,
            source,
            window: SamplingWindow::new(config.sample_duration_ms),
        })
    }

    /// Create an idle sensor configured from `CT_*` parameters.
    ///
    /// Missing entries are registered with their defaults first; values
    /// already in the store are kept.
    pub fn from_params(
        id: ComponentId,
        store: &mut ParameterStore,
        source: S,
    ) -> Result<Self, SensorError> {
        CtClampParams::register_defaults(store)?;
        let config = CtClampParams::from_store(store).to_config()?;
        Self::new(id, config, source)
    }

    /// Periodic trigger: open a sampling window.
    ///
    /// Arms the close deadline and requests high-frequency servicing. If the
    /// deadline cannot be armed the sensor state is left untouched.
    pub fn update<Q, H>(
        &mut self,
        now_us: u64,
        scheduler: &mut Q,
        high_freq: &mut H,
    ) -> Result<WindowStart, SensorError>
    where
        Q: TimeoutScheduler,
        H: HighFrequencyRequest,
    {
        let restarting = self.window.is_sampling();
        if restarting && self.config.overlap == OverlapPolicy::Skip {
            return Ok(WindowStart::Skipped);
        }

        scheduler.set_timeout(
            self.id,
            TimeoutId::CloseWindow,
            self.config.sample_duration_ms,
            now_us,
        )?;
        high_freq.start(self.id);
        self.window.open();

        Ok(if restarting {
            WindowStart::Restarted
        } else {
            WindowStart::Opened
        })
    }

    /// Loop hook: take at most one reading if a window is open and the ADC
    /// has settled.
    pub fn tick<T: TimeSource>(&mut self, time: &T) -> TickOutcome {
        if !self.window.is_sampling() {
            return TickOutcome::Idle;
        }

        let now_us = time.now_us();
        if !self.window.is_ready(now_us) {
            return TickOutcome::NotReady;
        }

        let value = self.source.sample();
        if value.is_nan() {
            // last sample time stays put so the next tick retries
            return TickOutcome::Invalid;
        }

        self.window.accept(now_us, value);
        TickOutcome::Accepted(value)
    }

    /// Deadline hook: end the window and publish exactly once.
    ///
    /// Returns `None` without publishing when no window is open.
    pub fn close_window<H, P>(&mut self, high_freq: &mut H, sink: &mut P) -> Option<WindowReport>
    where
        H: HighFrequencyRequest,
        P: PublishSink,
    {
        if !self.window.is_sampling() {
            return None;
        }

        self.window.close();
        high_freq.stop(self.id);

        let report = match self.window.decompose() {
            Some(rms) => WindowReport {
                ac_rms: rms.ac_rms,
                raw_rms: rms.raw_rms,
                dc_offset: rms.mean,
                samples: self.window.sample_count(),
                samples_per_second: self.window.samples_per_second(),
            },
            None => WindowReport {
                ac_rms: f32::NAN,
                raw_rms: f32::NAN,
                dc_offset: f32::NAN,
                samples: 0,
                samples_per_second: 0,
            },
        };

        sink.publish(report.ac_rms);
        Some(report)
    }

    /// Dispatch a fired timeout owned by this sensor.
    ///
    /// Returns the window report when `id` closed a window. A close that
    /// arrives while idle is stale and ignored.
    pub fn on_timeout<H, P>(
        &mut self,
        id: TimeoutId,
        high_freq: &mut H,
        sink: &mut P,
    ) -> Option<WindowReport>
    where
        H: HighFrequencyRequest,
        P: PublishSink,
    {
        match id {
            TimeoutId::CloseWindow => self.close_window(high_freq, sink),
            TimeoutId::Update => None,
        }
    }

    pub fn state(&self) -> SamplerState {
        if self.window.is_sampling() {
            SamplerState::Sampling
        } else {
            SamplerState::Idle
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn config(&self) -> &CtClampConfig {
        &self.config
    }

    /// Accumulator state of the current (or last) window
    pub fn window(&self) -> &SamplingWindow {
        &self.window
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ct_clamp::ConfigError;
    use crate::parameters::{ParamFlags, ParamValue, ParameterError, MAX_PARAMS, PARAM_NAME_LEN};
    use crate::scheduler::{HighFrequencyLoop, SchedulerError, TimeoutQueue};
    use core::fmt::Write;
    use crate::traits::{MockAnalogSource, MockTime, SensorState};

    struct Rig {
        time: MockTime,
        queue: TimeoutQueue<4>,
        hf: HighFrequencyLoop,
        sink: SensorState,
    }

    impl Rig {
        fn new() -> Self {
            Self {
                time: MockTime::with_initial(1_000_000),
                queue: TimeoutQueue::new(),
                hf: HighFrequencyLoop::new(),
                sink: SensorState::new(),
            }
        }
    }

    fn clamp(source: MockAnalogSource) -> CtClampSensor<MockAnalogSource> {
        CtClampSensor::new(ComponentId::new(0).unwrap(), CtClampConfig::default(), source)
            .unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = CtClampConfig {
            sample_duration_ms: 0,
            ..Default::default()
        };
        let result = CtClampSensor::new(
            ComponentId::new(0).unwrap(),
            config,
            MockAnalogSource::constant(0.0),
        );
        assert!(matches!(result, Err(SensorError::Config(_))));
    }

    #[test]
    fn from_params_registers_defaults_and_keeps_overrides() {
        let mut store = ParameterStore::new();
        store
            .register("CT_UPDATE_MS", ParamValue::Int(1_000), ParamFlags::empty())
            .unwrap();

        let sensor = CtClampSensor::from_params(
            ComponentId::new(2).unwrap(),
            &mut store,
            MockAnalogSource::constant(0.0),
        )
        .unwrap();

        assert_eq!(sensor.config().sample_duration_ms, 200);
        assert_eq!(sensor.config().update_interval_ms, 1_000);
        assert_eq!(store.count(), 3);
        assert_eq!(sensor.state(), SamplerState::Idle);
    }

    #[test]
    fn from_params_rejects_invalid_values() {
        let mut store = ParameterStore::new();
        CtClampParams::register_defaults(&mut store).unwrap();
        store.set("CT_UPDATE_MS", ParamValue::Int(100)).unwrap();

        let result = CtClampSensor::from_params(
            ComponentId::new(0).unwrap(),
            &mut store,
            MockAnalogSource::constant(0.0),
        );
        assert!(matches!(
            result,
            Err(SensorError::Config(ConfigError::UpdateIntervalTooShort { .. }))
        ));
    }

    #[test]
    fn from_params_reports_full_store() {
        let mut store = ParameterStore::new();
        for i in 0..MAX_PARAMS {
            let mut name: heapless::String<PARAM_NAME_LEN> = heapless::String::new();
            write!(name, "P{}", i).unwrap();
            store
                .register(&name, ParamValue::Int(0), ParamFlags::empty())
                .unwrap();
        }

        let result = CtClampSensor::from_params(
            ComponentId::new(0).unwrap(),
            &mut store,
            MockAnalogSource::constant(0.0),
        );
        assert!(matches!(
            result,
            Err(SensorError::Parameter(ParameterError::StoreFull))
        ));
    }

    #[test]
    fn update_opens_window_and_arms_deadline() {
        let mut rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::constant(1.0));
        assert_eq!(sensor.state(), SamplerState::Idle);

        let start = sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();

        assert_eq!(start, WindowStart::Opened);
        assert_eq!(sensor.state(), SamplerState::Sampling);
        assert!(rig.hf.is_active(sensor.id()));
        assert!(rig.queue.is_pending(sensor.id(), TimeoutId::CloseWindow));
        assert_eq!(rig.queue.next_deadline_us(), Some(1_200_000));
    }

    #[test]
    fn idle_tick_is_noop() {
        let rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::constant(1.0));
        let before = *sensor.window();

        assert_eq!(sensor.tick(&rig.time), TickOutcome::Idle);
        assert_eq!(*sensor.window(), before);
        assert_eq!(sensor.source().calls(), 0);
    }

    #[test]
    fn ticks_inside_min_interval_do_not_sample() {
        let mut rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::constant(1.0));
        sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();

        assert_eq!(sensor.tick(&rig.time), TickOutcome::Accepted(1.0));
        let after_first = *sensor.window();

        for _ in 0..10 {
            rig.time.advance(50);
            assert_eq!(sensor.tick(&rig.time), TickOutcome::NotReady);
        }
        rig.time.advance(49);
        assert_eq!(sensor.tick(&rig.time), TickOutcome::NotReady);
        assert_eq!(*sensor.window(), after_first);
        assert_eq!(sensor.source().calls(), 1);

        rig.time.advance(1);
        assert_eq!(sensor.tick(&rig.time), TickOutcome::Accepted(1.0));
        assert_eq!(sensor.window().sample_count(), 2);
    }

    #[test]
    fn invalid_reading_is_retried_immediately() {
        let mut rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::from_slice(&[f32::NAN, 0.75]));
        sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();

        assert_eq!(sensor.tick(&rig.time), TickOutcome::Invalid);
        assert_eq!(sensor.window().last_sample_us(), None);
        assert_eq!(sensor.window().sample_count(), 0);

        rig.time.advance(1);
        assert_eq!(sensor.tick(&rig.time), TickOutcome::Accepted(0.75));
        assert_eq!(sensor.window().last_sample_us(), Some(1_000_001));
    }

    #[test]
    fn empty_window_publishes_nan_and_releases_loop() {
        let mut rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::constant(f32::NAN));
        sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();
        for _ in 0..20 {
            rig.time.advance(1_000);
            sensor.tick(&rig.time);
        }

        let report = sensor.close_window(&mut rig.hf, &mut rig.sink).unwrap();

        assert!(report.is_empty());
        assert!(report.ac_rms.is_nan());
        assert!(rig.sink.value().is_nan());
        assert_eq!(rig.sink.publish_count(), 1);
        assert!(!rig.hf.is_requested());
        assert_eq!(sensor.state(), SamplerState::Idle);
    }

    #[test]
    fn close_publishes_ac_rms_once() {
        let mut rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::from_slice(&[3.0, 1.0]));
        sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();
        for _ in 0..10 {
            sensor.tick(&rig.time);
            rig.time.advance(600);
        }

        let report = sensor.close_window(&mut rig.hf, &mut rig.sink).unwrap();

        assert_eq!(report.samples, 10);
        assert_eq!(report.samples_per_second, 50);
        assert_eq!(report.dc_offset, 2.0);
        assert_eq!(report.ac_rms, 1.0);
        assert!((report.raw_rms - libm::sqrtf(5.0)).abs() < 1e-6);
        assert_eq!(rig.sink.value(), 1.0);
        assert_eq!(rig.sink.publish_count(), 1);
    }

    #[test]
    fn second_close_does_not_republish() {
        let mut rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::from_slice(&[3.0, 1.0]));
        sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();
        assert_eq!(sensor.tick(&rig.time), TickOutcome::Accepted(3.0));
        rig.time.advance(600);
        assert_eq!(sensor.tick(&rig.time), TickOutcome::Accepted(1.0));

        assert!(sensor.close_window(&mut rig.hf, &mut rig.sink).is_some());
        assert_eq!(sensor.close_window(&mut rig.hf, &mut rig.sink), None);

        assert_eq!(rig.sink.publish_count(), 1);
        assert_eq!(rig.sink.value(), 1.0);
        assert_eq!(sensor.state(), SamplerState::Idle);
    }

    #[test]
    fn restart_policy_discards_open_window() {
        let mut rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::constant(4.0));
        sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();
        sensor.tick(&rig.time);
        rig.time.advance_ms(100);

        let start = sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();

        assert_eq!(start, WindowStart::Restarted);
        assert_eq!(sensor.window().sample_count(), 0);
        assert_eq!(rig.queue.len(), 1);
        assert_eq!(rig.queue.next_deadline_us(), Some(1_300_000));
        assert_eq!(rig.hf.active_count(), 1);
    }

    #[test]
    fn skip_policy_keeps_open_window() {
        let mut rig = Rig::new();
        let config = CtClampConfig {
            overlap: OverlapPolicy::Skip,
            ..Default::default()
        };
        let mut sensor = CtClampSensor::new(
            ComponentId::new(0).unwrap(),
            config,
            MockAnalogSource::constant(4.0),
        )
        .unwrap();
        sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();
        sensor.tick(&rig.time);
        rig.time.advance_ms(100);

        let start = sensor
            .update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();

        assert_eq!(start, WindowStart::Skipped);
        assert_eq!(sensor.window().sample_count(), 1);
        assert_eq!(rig.queue.next_deadline_us(), Some(1_200_000));
    }

    #[test]
    fn full_scheduler_leaves_sensor_idle() {
        let mut rig = Rig::new();
        let mut queue = TimeoutQueue::<1>::new();
        let other = ComponentId::new(9).unwrap();
        queue
            .set_timeout(other, TimeoutId::Update, 1_000, 0)
            .unwrap();
        let mut sensor = clamp(MockAnalogSource::constant(1.0));

        let result = sensor.update(rig.time.now_us(), &mut queue, &mut rig.hf);

        assert_eq!(
            result,
            Err(SensorError::Scheduler(SchedulerError::QueueFull))
        );
        assert_eq!(sensor.state(), SamplerState::Idle);
        assert!(!rig.hf.is_requested());
    }

    #[test]
    fn stale_or_foreign_timeouts_are_ignored() {
        let mut rig = Rig::new();
        let mut sensor = clamp(MockAnalogSource::constant(1.0));

        assert_eq!(
            sensor.on_timeout(TimeoutId::CloseWindow, &mut rig.hf, &mut rig.sink),
            None
        );
        assert_eq!(
            sensor.on_timeout(TimeoutId::Update, &mut rig.hf, &mut rig.sink),
            None
        );
        assert_eq!(rig.sink.publish_count(), 0);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut rig = Rig::new();
        let mut a = CtClampSensor::new(
            ComponentId::new(0).unwrap(),
            CtClampConfig::default(),
            MockAnalogSource::constant(1.0),
        )
        .unwrap();
        let mut b = CtClampSensor::new(
            ComponentId::new(1).unwrap(),
            CtClampConfig::default(),
            MockAnalogSource::constant(2.0),
        )
        .unwrap();

        a.update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();
        b.update(rig.time.now_us(), &mut rig.queue, &mut rig.hf)
            .unwrap();
        a.tick(&rig.time);

        let mut sink_a = SensorState::new();
        assert!(a.close_window(&mut rig.hf, &mut sink_a).is_some());

        assert_eq!(b.state(), SamplerState::Sampling);
        assert_eq!(b.window().sample_count(), 0);
        assert!(rig.hf.is_active(b.id()));
        assert!(!rig.hf.is_active(a.id()));
        assert_eq!(sink_a.value(), 0.0);
    }
}
