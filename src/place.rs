/// A point usable as a routing endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Display name, when the place came out of geocoding
    pub name: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

impl Place {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            name: None,
            lat,
            lon,
        }
    }

    pub fn named(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: Some(name.into()),
            lat,
            lon,
        }
    }

    /// Name for display, falling back to the coordinates
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}, {}", self.lat, self.lon),
        }
    }
}
