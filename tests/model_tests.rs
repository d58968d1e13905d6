use chrono::NaiveDate;
use url::Url;

use matchplan_lambda_rust::{Encounter, FixtureEntry};

fn kickoff() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2017, 3, 19).unwrap().and_hms_opt(11, 0, 0).unwrap()
}

#[test]
fn encounter_renders_home_vs_visiting() {
    let pending = Encounter::create("SV Musterstadt");
    assert_eq!(pending.home_team(), "SV Musterstadt");
    let encounter = pending.set_visiting_team("FC Beispiel");
    assert_eq!(encounter.home_team(), "SV Musterstadt");
    assert_eq!(encounter.visiting_team(), "FC Beispiel");
    assert_eq!(encounter.to_string(), "SV Musterstadt vs FC Beispiel");
}

#[test]
fn fixture_accessors_return_constructed_values() {
    let url = Url::parse("https://www.fussball.de/spiel/0001").unwrap();
    let entry = FixtureEntry::new(kickoff(), Encounter::new("A", "B"))
        .with_location("Sportplatz Nord")
        .with_description("Nachholspiel")
        .with_detail_url(url.clone());

    assert_eq!(entry.date(), kickoff());
    assert_eq!(entry.encounter(), &Encounter::new("A", "B"));
    assert_eq!(entry.location(), Some("Sportplatz Nord"));
    assert_eq!(entry.description(), Some("Nachholspiel"));
    assert_eq!(entry.detail_url(), Some(&url));
}

#[test]
fn fixture_optionals_default_to_absent() {
    let entry = FixtureEntry::new(kickoff(), Encounter::new("A", "B"));
    assert_eq!(entry.location(), None);
    assert_eq!(entry.description(), None);
    assert_eq!(entry.detail_url(), None);
}

#[test]
fn fixture_renders_without_url_on_one_line() {
    let entry = FixtureEntry::new(kickoff(), Encounter::new("A", "B"));
    assert_eq!(entry.to_string(), "19.03.2017, 11:00: A vs B");
}

#[test]
fn fixture_renders_url_on_second_line() {
    let url = Url::parse("https://www.fussball.de/spiel/0001").unwrap();
    let entry = FixtureEntry::new(kickoff(), Encounter::new("A", "B")).with_detail_url(url);
    assert_eq!(entry.to_string(), "19.03.2017, 11:00: A vs B\nhttps://www.fussball.de/spiel/0001");
}

#[test]
fn fixture_serializes_fields() {
    let entry = FixtureEntry::new(kickoff(), Encounter::new("A", "B"));
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["date"], "2017-03-19T11:00:00");
    assert_eq!(value["encounter"]["home_team"], "A");
    assert_eq!(value["encounter"]["visiting_team"], "B");
    assert!(value["detail_url"].is_null());

    let back: FixtureEntry = serde_json::from_value(value).unwrap();
    assert_eq!(back, entry);
}
