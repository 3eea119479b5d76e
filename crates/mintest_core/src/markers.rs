//! Test marker vocabulary registry.
//!
//! A marker is the out-of-band declaration that a method is a test even when its name does not follow
//! [`TEST_METHOD_PREFIX`](crate::conventions::TEST_METHOD_PREFIX). Markers are attached at registration time,
//! so this registry only provides stable ids and spellings for diagnostics and logging.

/// Stable identifier for supported markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerId {
    Test,
}

/// Metadata entry for a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerInfo {
    pub id: MarkerId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

/// Registry of supported markers.
pub const MARKERS: &[MarkerInfo] = &[MarkerInfo {
    id: MarkerId::Test,
    canonical: "test",
    aliases: &["Test"],
    description: "Declare a method as a test regardless of its name.",
}];

/// Resolve a marker spelling to its stable id.
pub fn from_str(name: &str) -> Option<MarkerId> {
    if let Some(info) = MARKERS.iter().find(|m| m.canonical == name) {
        return Some(info.id);
    }
    MARKERS.iter().find(|m| m.aliases.contains(&name)).map(|m| m.id)
}

/// Return the canonical spelling for a marker.
pub fn as_str(id: MarkerId) -> &'static str {
    match id {
        MarkerId::Test => "test",
    }
}
