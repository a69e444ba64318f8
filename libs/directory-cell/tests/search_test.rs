use assert_matches::assert_matches;

use directory_cell::{search, DirectoryError, Specialist, SpecialistDirectory, SpecialtyFilter};

fn roster() -> Vec<Specialist> {
    SpecialistDirectory::demo().all().to_vec()
}

#[test]
fn test_cardio_query_matches_available_cardiology_only() {
    let results = search(&roster(), "cardio", &SpecialtyFilter::All);

    assert_eq!(results.len(), 1);
    assert!(results.iter().all(|s| s.specialty == "Cardiología" && s.available));
    assert_eq!(results[0].id, "s1");
}

#[test]
fn test_query_is_case_insensitive_on_name() {
    let results = search(&roster(), "CARMEN", &SpecialtyFilter::All);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Dra. Carmen Ruiz");
}

#[test]
fn test_query_matches_name_or_specialty() {
    // "ana" hits Dra. Ana Martínez by name; no specialty contains it
    let by_name = search(&roster(), "ana", &SpecialtyFilter::All);
    assert_eq!(by_name.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(), vec!["s2"]);

    // "logía" hits every specialty ending in -logía
    let by_specialty = search(&roster(), "logía", &SpecialtyFilter::All);
    let ids: Vec<&str> = by_specialty.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3", "s5", "s6"]);
}

#[test]
fn test_unavailable_specialist_never_returned() {
    let by_name = search(&roster(), "Laura", &SpecialtyFilter::All);
    assert!(by_name.is_empty());

    let by_filter = search(&roster(), "", &SpecialtyFilter::Only("Pediatría".to_string()));
    assert!(by_filter.is_empty());
}

#[test]
fn test_specialty_filter_combines_with_query() {
    let filter = SpecialtyFilter::Only("Neurología".to_string());

    assert_eq!(search(&roster(), "", &filter).len(), 1);
    assert_eq!(search(&roster(), "roberto", &filter).len(), 1);
    assert!(search(&roster(), "juan", &filter).is_empty());
}

#[test]
fn test_no_match_is_empty_not_error() {
    assert!(search(&roster(), "zzz", &SpecialtyFilter::All).is_empty());
    assert!(search(&[], "", &SpecialtyFilter::All).is_empty());
}

#[test]
fn test_results_keep_roster_order() {
    let results = search(&roster(), "dr", &SpecialtyFilter::All);
    let ids: Vec<&str> = results.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2", "s3", "s5", "s6"]);
}

#[test]
fn test_find_by_id() {
    let directory = SpecialistDirectory::demo();

    assert_eq!(directory.find("s4").unwrap().specialty, "Pediatría");
    assert_matches!(
        directory.find("s99"),
        Err(DirectoryError::SpecialistNotFound(id)) if id == "s99"
    );
}
