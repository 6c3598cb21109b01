//! Event categories accepted by the `events` endpoint.

use std::fmt;

/// Category written into the `category` field of an event payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    User,
    SessionEnd,
    Business,
    Resource,
    Progression,
    Design,
    Error,
}

impl EventCategory {
    /// All categories, in the order the collector documents them.
    pub const ALL: [EventCategory; 7] = [
        EventCategory::User,
        EventCategory::SessionEnd,
        EventCategory::Business,
        EventCategory::Resource,
        EventCategory::Progression,
        EventCategory::Design,
        EventCategory::Error,
    ];

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            EventCategory::User => "user",
            EventCategory::SessionEnd => "session_end",
            EventCategory::Business => "business",
            EventCategory::Resource => "resource",
            EventCategory::Progression => "progression",
            EventCategory::Design => "design",
            EventCategory::Error => "error",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for EventCategory {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
