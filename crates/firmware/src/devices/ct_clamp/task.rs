//! Embassy driver loop for a CT clamp component.
//!
//! # Example
//!
//! ```ignore
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use embassy_sync::signal::Signal;
//!
//! static CURRENT_A: Signal<CriticalSectionRawMutex, f32> = Signal::new();
//!
//! #[embassy_executor::task]
//! async fn ct_clamp_task(source: AdcVoltageSource) {
//!     let sensor = CtClampSensor::new(ComponentId::new(0).unwrap(), config, source).unwrap();
//!     let mut component = CtClampComponent::<_, _>::new(sensor, SignalSink::new(&CURRENT_A));
//!     let _ = run_ct_clamp(&mut component, EmbassyTime).await;
//! }
//! ```

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;

use super::CtClampComponent;
use ct_clamp_core::ct_clamp::SensorError;
use ct_clamp_core::traits::{AnalogSource, PublishSink, TimeSource};

/// Publish sink that hands each reading to an Embassy [`Signal`]
///
/// Consumers waiting on the signal always see the latest window; older
/// unread values are overwritten.
pub struct SignalSink<'a, M: RawMutex> {
    signal: &'a Signal<M, f32>,
}

impl<'a, M: RawMutex> SignalSink<'a, M> {
    pub const fn new(signal: &'a Signal<M, f32>) -> Self {
        Self { signal }
    }
}

impl<M: RawMutex> PublishSink for SignalSink<'_, M> {
    fn publish(&mut self, value: f32) {
        self.signal.signal(value);
    }
}

/// Drive `component` forever.
///
/// Returns only if setup fails. Errors from individual triggers are logged
/// by the component and the loop keeps going.
pub async fn run_ct_clamp<S, P, T, const N: usize>(
    component: &mut CtClampComponent<S, P, N>,
    time: T,
) -> Result<Infallible, SensorError>
where
    S: AnalogSource,
    P: PublishSink,
    T: TimeSource,
{
    component.setup(&time)?;

    loop {
        let _ = component.run_once(&time);
        let delay_us = component.next_poll_delay_us(&time);
        Timer::after_micros(delay_us).await;
    }
}
