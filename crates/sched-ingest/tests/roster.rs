//! Tests for roster CSV conversion.

use sched_ingest::convert_roster;

const ROSTER: &str = "\
Purpose,Subject,Level,Topic,Tutor,Centre,Classroom,Capacity,Date (text),Start Time,Form Option to Display
Holiday Revision,Chemistry,JC2,Organic Chemistry,Mr Tan,Bukit Timah,Room 3,12,24 May (Sat),10:00:00 AM,24 May Chemistry 10:00 AM
Holiday Revision,Math,JC1,Vectors,Ms Lim,Tampines,,15,25 May (Sun),11:30:00 PM,25 May Math 11:30 PM
Holiday Revision,History,JC1,,Mr Ong,Jurong,Room 1,10,26 May (Mon),2:00:00 PM,
Holiday Revision,Physics,JC1,Waves,Ms Lim,Jurong,Room 2,15,27 May (Tue),not a time,27 May Physics
";

#[test]
fn maps_roster_columns_onto_sessions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster.csv");
    std::fs::write(&path, ROSTER).expect("write roster");

    let sessions = convert_roster(&path).expect("convert");

    // The unparseable Physics row is dropped, the rest survive.
    assert_eq!(sessions.len(), 3);

    let chemistry = &sessions[0];
    assert_eq!(chemistry.subject, "Chemistry");
    assert_eq!(chemistry.date, "24 May", "weekday bracket must be stripped");
    assert_eq!(chemistry.start_time, "10:00 AM", "seconds must be dropped");
    assert_eq!(chemistry.end_time, "1:00 PM", "end = start + 3h");
    assert_eq!(chemistry.stream, "JC");
    assert_eq!(chemistry.classroom.as_deref(), Some("Room 3"));
    assert_eq!(chemistry.prefill_field.as_deref(), Some("1143667470"));
    assert_eq!(
        chemistry.prefill.as_deref(),
        Some("24 May Chemistry 10:00 AM")
    );

    let math = &sessions[1];
    assert_eq!(math.end_time, "2:30 AM", "derived end wraps midnight");
    assert_eq!(math.classroom, None);

    // A subject outside the registration table carries no entry id.
    let history = &sessions[2];
    assert_eq!(history.prefill_field, None);
    assert_eq!(history.topic, None);
    assert_eq!(history.prefill, None);
}

#[test]
fn missing_required_column_fails_the_conversion() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster.csv");
    std::fs::write(&path, "Subject,Date (text)\nMath,24 May\n").expect("write roster");

    let error = convert_roster(&path).unwrap_err();
    assert!(error.to_string().contains("Start Time"));
}
