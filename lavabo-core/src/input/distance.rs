//! Averaged distance sampling

use embedded_hal::delay::DelayNs;

use crate::traits::RangeSensor;

/// Raw reads averaged into one sample
pub const SAMPLES_PER_READING: usize = 3;

/// One averaged distance sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DistanceReading {
    /// Averaged distance, or the fallback distance after a timeout (mm)
    pub distance_mm: u16,
    /// At least one raw read failed
    pub timed_out: bool,
}

impl DistanceReading {
    /// Whether this sample asserts the trigger
    ///
    /// A timed-out sample never triggers, whatever its distance.
    pub fn triggers(&self, threshold_mm: u16) -> bool {
        !self.timed_out && self.distance_mm <= threshold_mm
    }
}

/// Integer mean of raw readings
pub fn average_of(samples: &[u16; SAMPLES_PER_READING]) -> u16 {
    let sum: u32 = samples.iter().map(|&s| s as u32).sum();
    (sum / SAMPLES_PER_READING as u32) as u16
}

/// Take three blocking reads and average them
///
/// `settle_ms` is slept between consecutive reads to let the sensor
/// recover. All three reads are attempted even after a failure; any
/// failure (timeout or bus error) reports `fallback_mm` with the
/// timeout flag set.
pub fn poll_distance<S, D>(
    sensor: &mut S,
    delay: &mut D,
    settle_ms: u32,
    fallback_mm: u16,
) -> DistanceReading
where
    S: RangeSensor,
    D: DelayNs,
{
    let mut samples = [0u16; SAMPLES_PER_READING];
    let mut timed_out = false;

    for (i, slot) in samples.iter_mut().enumerate() {
        if i > 0 {
            delay.delay_ms(settle_ms);
        }
        match sensor.read_range_mm() {
            Ok(mm) => *slot = mm,
            Err(_) => timed_out = true,
        }
    }

    if timed_out {
        DistanceReading {
            distance_mm: fallback_mm,
            timed_out: true,
        }
    } else {
        DistanceReading {
            distance_mm: average_of(&samples),
            timed_out: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDelay, ScriptedSensor};
    use crate::traits::SensorError;

    #[test]
    fn test_average_truncates() {
        assert_eq!(average_of(&[150, 150, 150]), 150);
        assert_eq!(average_of(&[160, 161, 161]), 160);
        assert_eq!(average_of(&[0, 0, 2]), 0);
        assert_eq!(average_of(&[u16::MAX, u16::MAX, u16::MAX]), u16::MAX);
    }

    #[test]
    fn test_poll_distance_averages() {
        let mut sensor = ScriptedSensor::new(&[Ok(100), Ok(200), Ok(150)]);
        let mut delay = MockDelay::new();

        let reading = poll_distance(&mut sensor, &mut delay, 50, 8190);
        assert_eq!(
            reading,
            DistanceReading {
                distance_mm: 150,
                timed_out: false
            }
        );
        assert_eq!(sensor.reads, 3);
        // Settle only between reads
        assert_eq!(delay.elapsed_ms, 100);
    }

    #[test]
    fn test_timeout_uses_fallback() {
        let mut sensor = ScriptedSensor::new(&[Ok(10), Err(SensorError::Timeout), Ok(10)]);
        let mut delay = MockDelay::new();

        let reading = poll_distance(&mut sensor, &mut delay, 50, 8190);
        assert!(reading.timed_out);
        assert_eq!(reading.distance_mm, 8190);
        assert!(!reading.triggers(160));
        assert_eq!(sensor.reads, 3);
    }

    #[test]
    fn test_trigger_threshold_inclusive() {
        let at = DistanceReading {
            distance_mm: 160,
            timed_out: false,
        };
        let above = DistanceReading {
            distance_mm: 161,
            timed_out: false,
        };
        assert!(at.triggers(160));
        assert!(!above.triggers(160));
    }
}
