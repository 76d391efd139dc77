//! Publish sink for finished readings.

/// Receiver of one value per closed sampling window.
///
/// `f32::NAN` is a legitimate value meaning "no reading this window".
pub trait PublishSink {
    fn publish(&mut self, value: f32);
}

impl<P: PublishSink + ?Sized> PublishSink for &mut P {
    fn publish(&mut self, value: f32) {
        (**self).publish(value)
    }
}

/// Last-value holder, the simplest useful sink.
#[derive(Debug, Clone, Copy)]
pub struct SensorState {
    value: f32,
    publish_count: u32,
}

impl Default for SensorState {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorState {
    pub const fn new() -> Self {
        Self {
            value: f32::NAN,
            publish_count: 0,
        }
    }

    /// Most recently published value (NaN before the first publish)
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Whether the last published value is a real reading
    pub fn has_state(&self) -> bool {
        !self.value.is_nan()
    }

    pub fn publish_count(&self) -> u32 {
        self.publish_count
    }
}

impl PublishSink for SensorState {
    fn publish(&mut self, value: f32) {
        self.value = value;
        self.publish_count = self.publish_count.saturating_add(1);
    }
}
