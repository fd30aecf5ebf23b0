//! Tolerant identifier resolution
//!
//! Resolves an arbitrary user-supplied string to shipments in three strict
//! tiers - the first tier that produces any match short-circuits the rest:
//!
//! 1. **Exact/substring**: the query appears inside the shipment identifier
//!    (case-insensitively) or inside a canonicalized container code. Cheap
//!    and highest-confidence.
//! 2. **key10**: the query's 10-character canonical key equals a container
//!    code's key - recovers from a mistyped or omitted check digit.
//! 3. **Suggestions**: the query (>= 4 canonical characters) is a substring
//!    of an identifier or a prefix of a container code. A failure outcome
//!    that carries candidates; the floor keeps one- and two-character
//!    queries from matching everything.
//!
//! Shipments are scanned in input order; callers must hand over a stable,
//! fully materialized snapshot per call.

pub mod canon;

use crate::types::{EnrichedShipment, Resolution, SuggestionStub};

use self::canon::{canon, key10, KEY_LEN};

/// Minimum canonical query length for the suggestion tier
const SUGGESTION_MIN_QUERY: usize = 4;

/// Cap on key10 alternates and suggestion stubs returned
const MAX_CANDIDATES: usize = 10;

/// Resolve `query` against an enriched snapshot.
pub fn resolve(query: &str, fleet: &[EnrichedShipment]) -> Resolution {
    let raw = query.trim();
    let canonical = canon(raw);

    if let Some(hit) = exact_tier(raw, &canonical, fleet) {
        return Resolution::Exact(hit.clone());
    }

    if let Some((shipment, alternates)) = key10_tier(&canonical, fleet) {
        return Resolution::Key10 {
            shipment: shipment.clone(),
            alternates,
        };
    }

    if canonical.len() >= SUGGESTION_MIN_QUERY {
        let stubs = suggestion_tier(&canonical, fleet);
        if !stubs.is_empty() {
            return Resolution::Suggestions(stubs);
        }
    }

    Resolution::NotFound
}

/// Tier 1: first shipment whose identifier contains the query
/// case-insensitively, or whose canonicalized container codes contain the
/// canonicalized query.
fn exact_tier<'a>(
    raw: &str,
    canonical: &str,
    fleet: &'a [EnrichedShipment],
) -> Option<&'a EnrichedShipment> {
    if raw.is_empty() {
        return None;
    }
    let q_lower = raw.to_lowercase();

    fleet.iter().find(|s| {
        s.record.id.to_lowercase().contains(&q_lower)
            || (!canonical.is_empty()
                && s.record
                    .containers
                    .iter()
                    .any(|c| canon(c).contains(canonical)))
    })
}

/// Tier 2: only fires for a full-length key. Collects every shipment owning
/// a container whose key10 equals the query's, and returns the first as the
/// primary match plus all codes sharing the key (deduplicated, capped) as
/// alternates.
fn key10_tier<'a>(
    canonical: &str,
    fleet: &'a [EnrichedShipment],
) -> Option<(&'a EnrichedShipment, Vec<String>)> {
    let qkey = key10(canonical);
    if qkey.len() != KEY_LEN {
        return None;
    }

    let mut primary: Option<&EnrichedShipment> = None;
    let mut alternates: Vec<String> = Vec::new();

    for shipment in fleet {
        let mut owns_key = false;
        for code in &shipment.record.containers {
            if key10(code) == qkey {
                owns_key = true;
                if alternates.len() < MAX_CANDIDATES && !alternates.contains(code) {
                    alternates.push(code.clone());
                }
            }
        }
        if owns_key && primary.is_none() {
            primary = Some(shipment);
        }
    }

    primary.map(|s| (s, alternates))
}

/// Tier 3: substring of a canonical identifier, or prefix of a canonical
/// container code. Deduplicated by shipment id (first occurrence wins),
/// capped.
fn suggestion_tier(canonical: &str, fleet: &[EnrichedShipment]) -> Vec<SuggestionStub> {
    let mut stubs: Vec<SuggestionStub> = Vec::new();

    for shipment in fleet {
        if stubs.len() >= MAX_CANDIDATES {
            break;
        }
        let candidate = canon(&shipment.record.id).contains(canonical)
            || shipment
                .record
                .containers
                .iter()
                .any(|c| canon(c).starts_with(canonical));
        if !candidate {
            continue;
        }
        if stubs.iter().any(|s| s.id == shipment.record.id) {
            continue;
        }
        stubs.push(SuggestionStub {
            id: shipment.record.id.clone(),
            vessel: shipment.record.vessel.clone(),
            container: shipment
                .record
                .containers
                .first()
                .cloned()
                .unwrap_or_default(),
        });
    }

    stubs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        EtaModelConfig, EtaCoefficients, RegionRiskTable, ShipmentRecord, Waypoint,
    };
    use chrono::Utc;

    fn model() -> EtaModelConfig {
        EtaModelConfig {
            intercept: 2.0,
            coef: EtaCoefficients {
                distance_nm: 0.01,
                inv_speed: 5.0,
                wind: 0.1,
                congestion: 1.0,
            },
            sigma_hours: 2.5,
        }
    }

    fn record(id: &str, vessel: &str, containers: &[&str]) -> ShipmentRecord {
        ShipmentRecord {
            id: id.to_string(),
            vessel: vessel.to_string(),
            lat: 10.0,
            lon: 60.0,
            waypoint: Waypoint { lat: 12.0, lon: 65.0 },
            speed_kts: 18.0,
            eta_planned_hrs: 48.0,
            containers: containers.iter().map(|c| c.to_string()).collect(),
            region: None,
        }
    }

    fn fleet(records: Vec<ShipmentRecord>) -> Vec<EnrichedShipment> {
        let regions = RegionRiskTable::default();
        crate::enrichment::enrich_fleet(&records, 5.0, &model(), &regions, Utc::now())
    }

    fn demo_fleet() -> Vec<EnrichedShipment> {
        fleet(vec![
            record("MSCU1301003", "MSC Aurora", &["MSCU1301003", "MSCU1301014"]),
            record("TGHU7777001", "Ever Harvest", &["TGHU7654321", "TGHU7654332"]),
            record("OOLU2048880", "Pacific Lyra", &["OOLU2048883"]),
        ])
    }

    #[test]
    fn test_exact_tier_substring_of_id() {
        let f = demo_fleet();
        match resolve("1301003", &f) {
            Resolution::Exact(s) => assert_eq!(s.id(), "MSCU1301003"),
            other => panic!("expected exact match, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_tier_case_insensitive() {
        let f = demo_fleet();
        assert!(matches!(resolve("mscu1301003", &f), Resolution::Exact(_)));
    }

    #[test]
    fn test_exact_tier_container_with_punctuation() {
        let f = demo_fleet();
        // Canonicalization strips the separators before the substring test
        match resolve("tghu 7654-321", &f) {
            Resolution::Exact(s) => assert_eq!(s.id(), "TGHU7777001"),
            other => panic!("expected exact match, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_tier_returns_first_in_input_order() {
        let f = fleet(vec![
            record("AAAU0000001", "First", &["XYZU1112223"]),
            record("BAAU0000002", "Second", &["XYZU1112223"]),
        ]);
        match resolve("XYZU1112223", &f) {
            Resolution::Exact(s) => assert_eq!(s.id(), "AAAU0000001"),
            other => panic!("expected exact match, got {:?}", other),
        }
    }

    #[test]
    fn test_key10_recovers_wrong_check_digit() {
        let f = demo_fleet();
        // Real code MSCU1301014, typed with a bad trailing digit
        match resolve("MSCU1301019", &f) {
            Resolution::Key10 { shipment, alternates } => {
                assert_eq!(shipment.id(), "MSCU1301003");
                assert!(alternates.contains(&"MSCU1301014".to_string()));
            }
            other => panic!("expected key10 match, got {:?}", other),
        }
    }

    #[test]
    fn test_key10_alternates_span_shipments_and_dedup() {
        let f = fleet(vec![
            record("S1", "One", &["ABCU1234560", "ABCU1234561"]),
            record("S2", "Two", &["ABCU1234561", "ABCU1234569"]),
        ]);
        match resolve("ABCU1234567", &f) {
            Resolution::Key10 { shipment, alternates } => {
                assert_eq!(shipment.id(), "S1");
                assert_eq!(
                    alternates,
                    vec!["ABCU1234560", "ABCU1234561", "ABCU1234569"],
                    "alternates deduplicated in first-occurrence order"
                );
            }
            other => panic!("expected key10 match, got {:?}", other),
        }
    }

    #[test]
    fn test_short_keys_never_fuzzy_match() {
        let f = demo_fleet();
        // 6 canonical chars, no substring hit anywhere: tier 2 is gated on a
        // full-length key, so this falls through to not-found
        assert!(matches!(resolve("MSCU99", &f), Resolution::NotFound));
    }

    #[test]
    fn test_key10_alternates_capped_at_ten() {
        // 12 codes share the first 10 characters; only 10 may come back
        let codes: Vec<String> = "0123456789AB"
            .chars()
            .map(|c| format!("MAXU123456{}", c))
            .collect();
        let code_refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        let f = fleet(vec![record("SCAP", "Cap", &code_refs)]);
        match resolve("MAXU123456Z", &f) {
            Resolution::Key10 { alternates, .. } => assert_eq!(alternates.len(), 10),
            other => panic!("expected key10 match, got {:?}", other),
        }
    }

    #[test]
    fn test_suggestions_require_four_chars() {
        let f = demo_fleet();
        assert!(matches!(resolve("ZZZ", &f), Resolution::NotFound));
        // Same prefix at 4 characters does fire
        let r = resolve("OOLU", &f);
        match r {
            Resolution::Exact(s) => assert_eq!(s.id(), "OOLU2048880"),
            other => panic!("OOLU is a substring of the id, got {:?}", other),
        }
    }

    #[test]
    fn test_suggestions_from_canonical_id_substring() {
        // Punctuated ids: the raw case-insensitive check at tier 1 misses,
        // the canonical check at tier 3 hits
        let f = fleet(vec![
            record("SHIP-ALPHA-01", "Alpha", &["QRSU5550001"]),
            record("SHIP-BRAVO-02", "Bravo", &["QRSU5550002"]),
        ]);
        match resolve("shipalpha", &f) {
            Resolution::Suggestions(stubs) => {
                assert_eq!(stubs.len(), 1);
                assert_eq!(stubs[0].id, "SHIP-ALPHA-01");
                assert_eq!(stubs[0].container, "QRSU5550001");
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
        // Shared canonical prefix surfaces both, input order first; the
        // punctuation keeps the raw tier-1 check from firing
        match resolve("s.h.i.p", &f) {
            Resolution::Suggestions(stubs) => {
                assert_eq!(stubs.len(), 2);
                assert_eq!(stubs[0].vessel, "Alpha");
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
        // Matches nothing at all
        assert!(matches!(resolve("XXXU99", &f), Resolution::NotFound));
    }

    #[test]
    fn test_suggestions_capped_and_deduped() {
        // Punctuated ids so only the canonical tier-3 check can hit
        let containers: Vec<String> = (0..14).map(|i| format!("BULK000{:04}", i)).collect();
        let records: Vec<ShipmentRecord> = (0..14)
            .map(|i| record(&format!("FL-EET{:03}", i), "Bulk", &[containers[i].as_str()]))
            .collect();
        let f = fleet(records);
        match resolve("fleet", &f) {
            Resolution::Suggestions(stubs) => {
                assert_eq!(stubs.len(), 10, "suggestion list capped at 10");
                let mut ids: Vec<&str> = stubs.iter().map(|s| s.id.as_str()).collect();
                ids.dedup();
                assert_eq!(ids.len(), 10, "no duplicate shipments");
                assert_eq!(ids[0], "FL-EET000", "input order preserved");
            }
            other => panic!("expected suggestions, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_query_not_found() {
        let f = demo_fleet();
        assert!(matches!(resolve("", &f), Resolution::NotFound));
        assert!(matches!(resolve("  - ", &f), Resolution::NotFound));
    }

    #[test]
    fn test_empty_fleet_not_found() {
        assert!(matches!(resolve("MSCU1301003", &[]), Resolution::NotFound));
    }
}
