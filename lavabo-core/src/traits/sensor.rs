//! Distance sensor trait

/// Errors that can occur with distance sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No echo within the configured timeout window
    Timeout,
    /// Sensor did not answer on the bus at startup
    NotPresent,
    /// Bus transfer failed
    Bus,
}

/// Trait for time-of-flight / proximity range sensors
///
/// Implementations perform one blocking single-shot measurement per call.
pub trait RangeSensor {
    /// Read the distance to the nearest object in millimetres
    fn read_range_mm(&mut self) -> Result<u16, SensorError>;
}

impl<T: RangeSensor + ?Sized> RangeSensor for &mut T {
    fn read_range_mm(&mut self) -> Result<u16, SensorError> {
        (**self).read_range_mm()
    }
}
