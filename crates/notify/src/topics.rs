//! Topic naming for artifact announcements.

/// Prefix every stored-artifact event is published under. Subscribers can
/// filter on this alone or on a per-group subtopic.
pub const ARTIFACT_STORED: &str = "harvest.artifact.stored";

/// Per-group subtopic, e.g. `harvest.artifact.stored.miso_fuel_mix`.
pub fn for_group(source_group: &str) -> String {
    format!("{ARTIFACT_STORED}.{source_group}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_topic_extends_prefix() {
        let topic = for_group("miso_fuel_mix");
        assert!(topic.starts_with(ARTIFACT_STORED));
        assert_eq!(topic, "harvest.artifact.stored.miso_fuel_mix");
    }
}
