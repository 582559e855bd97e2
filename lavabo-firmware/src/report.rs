//! Activity logging

use defmt::*;
use lavabo_core::input::{Evaluation, Sample};
use lavabo_core::sequence::State;
use lavabo_core::Activity;

/// Log one tick activity over RTT
pub fn log_activity(activity: Activity) {
    match activity {
        Activity::Evaluated(Evaluation {
            sample: Sample::Distance(reading),
            triggered,
        }) => {
            if reading.timed_out {
                warn!("Sensor timeout");
            }
            debug!("Distance {} mm, trigger={}", reading.distance_mm, triggered);
        }
        Activity::Evaluated(Evaluation {
            sample: Sample::Button(Some(button)),
            ..
        }) => info!("{} button pressed", button),
        Activity::Evaluated(_) => {}
        Activity::Phase(State::CountingDown(remaining)) => debug!("Count {}", remaining),
        Activity::Phase(State::Rinsing) => info!("Rinse Hands"),
        Activity::Phase(State::Done) => info!("Well Done"),
        Activity::Phase(State::Idle) => {}
        Activity::SequenceComplete => info!("Sequence complete"),
        Activity::Ready => info!("Ready"),
    }
}
