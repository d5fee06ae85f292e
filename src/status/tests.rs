use crate::status::error::ErrorKind;
use crate::status::registry::{is_valid_name, lookup, REGISTRY};
use crate::status::StatusName;
use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn lookup_returns_registered_codes() {
    assert_eq!(lookup("CONTINUE"), Some(100));
    assert_eq!(lookup("OK"), Some(200));
    assert_eq!(lookup("IM_USED"), Some(226));
    assert_eq!(lookup("UNUSED"), Some(306));
    assert_eq!(lookup("NOT_FOUND"), Some(404));
    assert_eq!(lookup("IM_A_TEAPOT"), Some(418));
    assert_eq!(lookup("UNAVAILABLE_FOR_LEGAL_REASONS"), Some(451));
    assert_eq!(lookup("INTERNAL_SERVER_ERROR"), Some(500));
    assert_eq!(lookup("NETWORK_AUTHENTICATION_REQUIRED"), Some(511));
}

#[test]
fn lookup_unknown_name_is_none() {
    assert_eq!(lookup("NOT_A_REAL_STATUS"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("ok"), None);
    assert_eq!(lookup("404"), None);
}

#[test]
fn valid_names_are_recognized() {
    assert!(is_valid_name("SWITCHING_PROTOCOLS"));
    assert!(is_valid_name("GATEWAY_TIMEOUT"));
    assert!(!is_valid_name("NOT_A_REAL_STATUS"));
    assert!(!is_valid_name("not_found"));
}

#[test]
fn registry_is_complete() {
    assert_eq!(REGISTRY.len(), 63);
    assert_eq!(StatusName::ALL.len(), REGISTRY.len());
    assert_eq!(StatusName::COUNT, REGISTRY.len());
}

#[test]
fn registry_names_and_codes_are_unique() {
    let names: HashSet<&str> = REGISTRY.iter().map(|(name, _)| *name).collect();
    assert_eq!(names.len(), REGISTRY.len());
    let codes: HashSet<u16> = REGISTRY.iter().map(|(_, code)| *code).collect();
    assert_eq!(codes.len(), REGISTRY.len());
}

#[test]
fn codes_stay_within_documented_ranges() {
    for (name, code) in REGISTRY {
        assert!((100..=599).contains(code), "{name} maps to {code}");
    }
}

#[test]
fn every_entry_round_trips() {
    for (name, code) in REGISTRY {
        assert_eq!(lookup(name), Some(*code));
        let status = StatusName::parse(name).unwrap();
        assert_eq!(status.name(), *name);
        assert_eq!(status.code(), *code);
        assert_eq!(StatusName::from_code(*code), Some(status));
    }
}

#[test]
fn all_matches_registry_order() {
    for (status, (name, code)) in StatusName::ALL.iter().zip(REGISTRY) {
        assert_eq!(status.name(), *name);
        assert_eq!(status.code(), *code);
    }
}

#[test]
fn callers_cannot_corrupt_the_table() {
    let mut copy = REGISTRY.to_vec();
    copy.clear();
    copy.push(("NOT_FOUND", 200));
    assert_eq!(REGISTRY.len(), 63);
    assert_eq!(lookup("NOT_FOUND"), Some(404));
}

#[test]
fn strict_parse_reports_unknown_names() {
    assert_eq!(
        StatusName::from_str("SEE_OTHER").unwrap(),
        StatusName::SeeOther
    );
    let error = StatusName::from_str("TEAPOT").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnknownName);
}

#[test]
fn strict_code_conversion() {
    assert_eq!(StatusName::try_from(418).unwrap(), StatusName::ImATeapot);
    assert_eq!(u16::from(StatusName::PermanentRedirect), 308);
    let error = StatusName::try_from(420).unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnknownCode);
}

#[test]
fn displays_canonical_name() {
    assert_eq!(StatusName::NotFound.to_string(), "NOT_FOUND");
    assert_eq!(StatusName::Ok.to_string(), "OK");
}

#[cfg(feature = "schema")]
#[test]
fn schema_uses_canonical_names() {
    for status in StatusName::ALL {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{}\"", status.name()));
        let back: StatusName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }
}

#[cfg(feature = "schema")]
#[test]
fn schema_rejects_unknown_names() {
    assert!(serde_json::from_str::<StatusName>("\"NOT_A_REAL_STATUS\"").is_err());
    assert!(serde_json::from_str::<StatusName>("\"404\"").is_err());
}
