use super::*;

fn gig(date: &str, ticket_url: Option<&str>) -> Gig {
    Gig {
        date: date.to_owned(),
        title: "Warehouse Night".to_owned(),
        venue: "Magazzini Generali".to_owned(),
        city: "Milano".to_owned(),
        ticket_url: ticket_url.map(str::to_owned),
    }
}

fn offset(hours: i8) -> UtcOffset {
    UtcOffset::from_hms(hours, 0, 0).expect("offset")
}

#[test]
fn display_date_without_viewer_clock_uses_utc() {
    assert_eq!(gig("2025-07-04T22:30:00Z", None).display_date(), "04/07/2025");
    assert_eq!(gig("2025-12-31T23:00:00+01:00", None).display_date(), "31/12/2025");
    assert_eq!(gig("2026-01-01T00:30:00+01:00", None).display_date(), "31/12/2025");
}

#[test]
fn display_date_in_shifts_late_utc_gig_to_next_local_day() {
    let late = gig("2025-07-04T22:30:00Z", None);
    assert_eq!(late.display_date_in(offset(2)), "05/07/2025");
    assert_eq!(late.display_date_in(offset(1)), "04/07/2025");
    assert_eq!(late.display_date_in(UtcOffset::UTC), "04/07/2025");
}

#[test]
fn display_date_in_converts_between_zones() {
    let new_year = gig("2026-01-01T00:30:00+01:00", None);
    assert_eq!(new_year.display_date_in(offset(1)), "01/01/2026");
    assert_eq!(new_year.display_date_in(offset(-5)), "31/12/2025");
}

#[test]
fn display_date_in_keeps_unzoned_dates() {
    assert_eq!(gig("2026-03-09T21:00:00", None).display_date_in(offset(-8)), "09/03/2026");
    assert_eq!(gig("2026-03-09", None).display_date_in(offset(9)), "09/03/2026");
    assert_eq!(gig("next friday", None).display_date_in(offset(2)), "next friday");
}

#[test]
fn instant_only_for_zoned_timestamps() {
    assert!(gig("2025-07-04T22:30:00Z", None).instant().is_some());
    assert!(gig("2026-03-09T21:00:00", None).instant().is_none());
    assert!(gig("2026-03-09", None).instant().is_none());
}

#[test]
fn display_date_formats_naive_timestamp_and_plain_date() {
    assert_eq!(gig("2026-03-09T21:00:00", None).display_date(), "09/03/2026");
    assert_eq!(gig("2026-03-09", None).display_date(), "09/03/2026");
}

#[test]
fn display_date_falls_back_to_raw_value() {
    assert_eq!(gig("next friday", None).display_date(), "next friday");
    assert_eq!(gig("2026-13-40", None).display_date(), "2026-13-40");
    assert_eq!(gig("", None).display_date(), "");
}

#[test]
fn ticket_link_ignores_missing_and_blank_urls() {
    assert_eq!(gig("2026-03-09", None).ticket_link(), None);
    assert_eq!(gig("2026-03-09", Some("")).ticket_link(), None);
    assert_eq!(gig("2026-03-09", Some("  ")).ticket_link(), None);
    assert_eq!(
        gig("2026-03-09", Some("https://tickets.example/1")).ticket_link(),
        Some("https://tickets.example/1")
    );
}

#[test]
fn location_line_joins_venue_and_city() {
    assert_eq!(gig("2026-03-09", None).location_line(), "Magazzini Generali • Milano");
}

#[test]
fn deserializes_without_ticket_url() {
    let json = r#"{"date":"2026-03-09","title":"T","venue":"V","city":"C"}"#;
    let parsed: Gig = serde_json::from_str(json).expect("gig");
    assert_eq!(parsed.ticket_url, None);
}

#[test]
fn deserializes_null_ticket_url() {
    let json = r#"{"date":"2026-03-09","title":"T","venue":"V","city":"C","ticket_url":null}"#;
    let parsed: Gig = serde_json::from_str(json).expect("gig");
    assert_eq!(parsed.ticket_url, None);
}

#[test]
fn rejects_gig_missing_required_field() {
    let json = r#"{"date":"2026-03-09","title":"T","venue":"V"}"#;
    assert!(serde_json::from_str::<Gig>(json).is_err());
}
