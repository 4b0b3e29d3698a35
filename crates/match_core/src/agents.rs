use crate::location::Location;

/// Anything registered under a display name and a unique id.
pub trait Identity {
    fn name(&self) -> &str;
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rider {
    pub name: String,
    pub id: String,
    pub location: Location,
}

impl Rider {
    pub fn new(name: impl Into<String>, id: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            location,
        }
    }
}

impl Identity for Rider {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub name: String,
    pub id: String,
    pub location: Location,
    /// Nominally 0.0–5.0; not enforced.
    pub rating: f64,
    pub(crate) available: bool,
}

impl Driver {
    /// New drivers start out available.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        location: Location,
        rating: f64,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            location,
            rating,
            available: true,
        }
    }

    /// Availability is owned by [`crate::pool::DriverPool`]; it flips only on claim/release.
    pub fn is_available(&self) -> bool {
        self.available
    }
}

impl Identity for Driver {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}
