//! Decoding of `stats` output: blank-line separated `[name, payload]` fragments.
//!
//! [`parse_sections`] turns raw text into a name -> JSON payload map and drops
//! anything it cannot decode. [`AgentSections::from_map`] then decodes the known
//! sections into typed records; this is the only place where missing or
//! mistyped agent fields are turned into defaults.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::models::{AgentState, RawAdapter, RawConnection, SessionSection, StreamingStats};

pub const STATE: &str = "state";
pub const CONNECTION_STATS: &str = "connection_stats";
pub const SESSION_STATS: &str = "session_stats";
pub const STREAMING_STATS: &str = "streaming_stats";
pub const ADAPTERS: &str = "adapters";

pub type SectionMap = HashMap<String, Value>;

/// Split `raw` into fragments and decode each one. Never fails: malformed
/// fragments are skipped, so fully unparseable input yields an empty map.
pub fn parse_sections(raw: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut buffer = String::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            flush_fragment(&mut buffer, &mut sections);
        } else {
            buffer.push_str(line);
            buffer.push('\n');
        }
    }
    flush_fragment(&mut buffer, &mut sections);

    sections
}

fn flush_fragment(buffer: &mut String, sections: &mut SectionMap) {
    if buffer.trim().is_empty() {
        buffer.clear();
        return;
    }
    if let Some((name, payload)) = decode_fragment(buffer) {
        sections.insert(name, payload);
    }
    buffer.clear();
}

/// Decode one fragment; `None` when it is not JSON or not an array of length >= 2.
pub fn decode_fragment(fragment: &str) -> Option<(String, Value)> {
    let value: Value = match serde_json::from_str(fragment) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, operation = "parse_sections", "dropping malformed stats fragment");
            return None;
        }
    };
    let Value::Array(mut items) = value else {
        debug!(operation = "parse_sections", "ignoring non-array stats fragment");
        return None;
    };
    if items.len() < 2 {
        debug!(
            operation = "parse_sections",
            len = items.len(),
            "ignoring short stats fragment"
        );
        return None;
    }
    let payload = items.swap_remove(1);
    let name = match items.swap_remove(0) {
        Value::String(s) => s,
        other => other.to_string(),
    };
    Some((name, payload))
}

/// The five sections the dashboard consumes, decoded with defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentSections {
    pub state: AgentState,
    pub connections: Vec<RawConnection>,
    pub session: SessionSection,
    pub streaming: StreamingStats,
    pub adapters: Vec<RawAdapter>,
}

impl AgentSections {
    pub fn from_map(map: &SectionMap) -> Self {
        let connections = map
            .get(CONNECTION_STATS)
            .and_then(|s| s.get("connections"))
            .map(|c| decode_entries(CONNECTION_STATS, c))
            .unwrap_or_default();

        Self {
            state: decode_section(map, STATE),
            connections,
            session: decode_section(map, SESSION_STATS),
            streaming: decode_section(map, STREAMING_STATS),
            adapters: map
                .get(ADAPTERS)
                .map(|a| decode_entries(ADAPTERS, a))
                .unwrap_or_default(),
        }
    }

    /// Convenience for `from_map(&parse_sections(raw))`.
    pub fn parse(raw: &str) -> Self {
        Self::from_map(&parse_sections(raw))
    }
}

fn decode_section<T: DeserializeOwned + Default>(map: &SectionMap, name: &str) -> T {
    let Some(payload) = map.get(name) else {
        return T::default();
    };
    match T::deserialize(payload) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, section = name, "section has unexpected shape, using defaults");
            T::default()
        }
    }
}

/// Decode an array entry by entry, dropping the entries that do not fit.
fn decode_entries<T: DeserializeOwned>(section: &str, value: &Value) -> Vec<T> {
    let Some(items) = value.as_array() else {
        warn!(section, "expected an array, ignoring section");
        return Vec::new();
    };
    items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match T::deserialize(item) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(error = %e, section, index = i, "dropping malformed entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_name_is_coerced_to_string() {
        let (name, payload) = decode_fragment("[42, {\"a\": 1}]").unwrap();
        assert_eq!(name, "42");
        assert_eq!(payload["a"], 1);
    }

    #[test]
    fn short_or_non_array_fragments_are_rejected() {
        assert!(decode_fragment("[\"only_name\"]").is_none());
        assert!(decode_fragment("{\"state\": 1}").is_none());
        assert!(decode_fragment("{not json").is_none());
    }

    #[test]
    fn extra_elements_are_ignored() {
        let (name, payload) = decode_fragment("[\"state\", {\"state\": \"CONNECTED\"}, 7]").unwrap();
        assert_eq!(name, "state");
        assert_eq!(payload["state"], "CONNECTED");
    }
}
