//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone)]
pub enum Effect {
    /// Fetch current conditions and forecast for a named city
    FetchByCity { seq: u64, city: String },
    /// Fetch current conditions and forecast for coordinates
    FetchByCoords { seq: u64, lat: f64, lon: f64 },
}
