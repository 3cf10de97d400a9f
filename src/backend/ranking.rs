use std::cmp::Ordering;

use serde::Serialize;

use super::mathphysics::{Point2D, Position};
use super::station::{LinkPower, Station};


// A station scored against a single device location. Built fresh on every 
// evaluation, so no power value outlives the device it was computed for.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EvaluatedStation {
    station: Station,
    power: LinkPower,
}

impl EvaluatedStation {
    #[must_use]
    pub fn new(station: Station, power: LinkPower) -> Self {
        Self { station, power }
    }

    #[must_use]
    pub fn evaluate<P: Position>(station: &Station, location: &P) -> Self {
        Self::new(*station, station.power_at(location))
    }

    #[must_use]
    pub fn station(&self) -> &Station {
        &self.station
    }

    #[must_use]
    pub fn power(&self) -> LinkPower {
        self.power
    }
}

impl Position for EvaluatedStation {
    fn position(&self) -> &Point2D {
        self.station.position()
    }
}


/// Stable ascending sort by power: the strongest station ends up last and 
/// stations with equal power keep their relative order.
pub fn sort_by_power(stations: &mut [EvaluatedStation]) {
    stations.sort_by(|first, second| 
        first.power
            .partial_cmp(&second.power)
            .unwrap_or(Ordering::Equal)
    );
}

/// Picks the strongest station with positive power. NaN powers are dropped 
/// together with the out-of-reach ones. Among equally strong stations the 
/// last one in catalog order wins.
#[must_use]
pub fn select_best(
    stations: impl IntoIterator<Item = EvaluatedStation>
) -> Option<EvaluatedStation> {
    let mut candidates: Vec<EvaluatedStation> = stations
        .into_iter()
        .filter(|evaluated| evaluated.power.is_positive())
        .collect();

    sort_by_power(&mut candidates);

    candidates.pop()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mathphysics::Meter;
    use crate::backend::station::PowerValue;


    fn evaluated(x: Meter, y: Meter, reach: Meter, power: PowerValue) 
        -> EvaluatedStation 
    {
        let station = Station::build(Point2D::new(x, y), reach)
            .unwrap_or_else(|error| panic!("{}", error));

        EvaluatedStation::new(station, LinkPower::new(power))
    }

    fn powers(stations: &[EvaluatedStation]) -> Vec<PowerValue> {
        stations
            .iter()
            .map(|evaluated| evaluated.power().value())
            .collect()
    }


    #[test]
    fn sort_puts_strongest_station_last() {
        let mut stations = vec![
            evaluated(0.0, 0.0, 10.0, 100.0),
            evaluated(2.0, 2.0, 8.0, 26.0),
            evaluated(10.0, 0.0, 12.0, 4.0),
        ];

        sort_by_power(&mut stations);

        assert_eq!(powers(&stations), vec![4.0, 26.0, 100.0]);
        assert_eq!(
            stations,
            vec![
                evaluated(10.0, 0.0, 12.0, 4.0),
                evaluated(2.0, 2.0, 8.0, 26.0),
                evaluated(0.0, 0.0, 10.0, 100.0),
            ]
        );
    }

    #[test]
    fn sort_keeps_order_of_equal_powers() {
        let first  = evaluated(1.0, 0.0, 5.0, 9.0);
        let second = evaluated(2.0, 0.0, 5.0, 9.0);
        let weak   = evaluated(3.0, 0.0, 5.0, 1.0);
        let mut stations = vec![first, second, weak];

        sort_by_power(&mut stations);

        assert_eq!(stations, vec![weak, first, second]);
    }

    #[test]
    fn select_strongest_station() {
        let stations = vec![
            evaluated(0.0, 0.0, 10.0, 100.0),
            evaluated(2.0, 2.0, 8.0, 26.745_166_004_060_962),
            evaluated(20.0, 20.0, 5.0, 0.0),
            evaluated(10.0, 0.0, 12.0, 4.0),
        ];

        let best = select_best(stations.clone());

        assert_eq!(best, Some(stations[0]));
    }

    #[test]
    fn select_last_of_equally_strong_stations() {
        let first  = evaluated(1.0, 0.0, 5.0, 9.0);
        let second = evaluated(2.0, 0.0, 5.0, 9.0);

        assert_eq!(select_best([first, second]), Some(second));
    }

    #[test]
    fn no_candidate_without_positive_power() {
        let stations = vec![
            evaluated(0.0, 0.0, 10.0, 0.0),
            evaluated(2.0, 2.0, 8.0, -1.0),
        ];

        assert_eq!(select_best(stations), None);
        assert_eq!(select_best(Vec::<EvaluatedStation>::new()), None);
    }

    #[test]
    fn nan_power_is_never_selected() {
        let unknown = evaluated(0.0, 0.0, 10.0, PowerValue::NAN);
        let weak    = evaluated(1.0, 1.0, 3.0, 0.25);

        assert_eq!(select_best([unknown]), None);
        assert_eq!(select_best([unknown, weak]), Some(weak));
    }
}
