use super::domain::TruckLoad;

/// Capacity of one standard removal truck.
pub const TRUCK_CAPACITY_CUBIC_YARDS: f64 = 15.0;

/// Size a job by its total volume. Boundaries are inclusive on the smaller load.
pub fn classify_truck_load(volume_cubic_yards: f64) -> TruckLoad {
    let fill = volume_cubic_yards / TRUCK_CAPACITY_CUBIC_YARDS;

    if fill <= 0.25 {
        TruckLoad::Quarter
    } else if fill <= 0.5 {
        TruckLoad::Half
    } else if fill <= 0.75 {
        TruckLoad::ThreeQuarter
    } else if fill <= 1.0 {
        TruckLoad::Full
    } else {
        let trucks = (volume_cubic_yards / TRUCK_CAPACITY_CUBIC_YARDS).ceil();
        TruckLoad::Trucks(trucks.min(f64::from(u32::MAX)) as u32)
    }
}
