use koltuk::{
    reservation::SeatNumber,
    seat::{Layout, SeatMap, SeatState},
    trip::TripId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatDto {
    pub number: SeatNumber,
    pub row: u32,
    pub column: u32,
    pub state: SeatState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMapDto {
    pub trip_id: TripId,
    pub layout: Layout,
    pub seats: Vec<SeatDto>,
    /// Canonical seat list, e.g. `"3,7"`.
    pub selected: String,
    pub selected_label: String,
    pub total_price: f64,
}

impl SeatMapDto {
    pub fn from(trip_id: TripId, map: &SeatMap) -> Self {
        let layout = map.layout();
        let seats = map
            .states()
            .filter_map(|(number, state)| {
                let (row, column) = layout.position(number)?;
                Some(SeatDto {
                    number,
                    row,
                    column,
                    state,
                })
            })
            .collect();
        Self {
            trip_id,
            layout,
            seats,
            selected: map.selection().to_string(),
            selected_label: map.selected_label(),
            total_price: map.total_price(),
        }
    }
}
