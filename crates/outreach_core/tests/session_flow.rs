//! End-to-end session flow: import, filter, status tracking, messaging.

use outreach_core::import::rows_from_json;
use outreach_core::schema::{FilterCriteria, FocusArea, StatusFilter, StatusPatch};
use outreach_core::session::OutreachSession;

const ROWS: &str = r##"[
  {
    "First Name": "Amelia",
    "Last Name": "Price",
    "Title": "Head of Sales",
    "Company Name ": "Northern Automation",
    "Email": "amelia@northern.example",
    "# Employees": 40,
    "Company Country": "United Kingdom",
    "Company City": "Manchester"
  },
  {
    "First Name": "Tomas",
    "Last Name": "Keane",
    "Title": "Customer Support Lead",
    "Company Name": "Keane Digital",
    "Email": "tomas@keane.example",
    "# Employees": "12",
    "Country": "Ireland"
  },
  {
    "First Name": "Priya",
    "Last Name": "Nair",
    "Title": "Operations Director",
    "Company Name": "Nair Systems",
    "# Employees": "unknown",
    "Country": "United Kingdom"
  }
]"##;

#[test]
fn import_filter_message_and_track() {
    let mut session = OutreachSession::seeded();

    // Mark a seeded lead so we can observe the reset on re-import.
    session.set_status(
        1,
        &StatusPatch {
            messaged: Some(true),
            notes: Some("old campaign".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(session.stats().messaged, 1);

    let rows = rows_from_json(ROWS).unwrap();
    let loaded = session.load_rows(&rows);
    assert_eq!(loaded, 3);

    // Import replaced the set and reset every status entry.
    let stats = session.stats();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.messaged, 0);
    assert_eq!(stats.responded, 0);
    assert_eq!(stats.response_rate, 0.0);
    let status = session.directory().status(1).unwrap();
    assert!(!status.messaged);
    assert!(status.notes.is_empty());

    // Normalization: alias priority, numeric coercion, focus classification.
    let leads = session.directory().leads();
    assert_eq!(leads[0].company, "Northern Automation");
    assert_eq!(leads[0].focus, FocusArea::SalesPipeline);
    assert_eq!(leads[1].employees, 12);
    assert_eq!(leads[1].country, "Ireland");
    assert_eq!(leads[1].focus, FocusArea::CustomerService);
    assert_eq!(leads[2].employees, 0);
    assert_eq!(leads[2].focus, FocusArea::ClientOnboarding);
    assert_eq!(leads[2].email, "");

    // Filter: UK leads not yet messaged.
    session.set_criteria(FilterCriteria {
        country: Some("United Kingdom".to_string()),
        status: StatusFilter::NotMessaged,
        ..Default::default()
    });
    let ids: Vec<u32> = session.filtered_leads().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3]);

    // Message the first hit and confirm the view shrinks.
    let message = session.message_for(1).unwrap();
    assert!(message.contains("Amelia"));
    assert!(message.contains("Northern Automation"));
    assert!(message.contains("Sales Pipeline"));
    session.set_status(
        1,
        &StatusPatch {
            messaged: Some(true),
            ..Default::default()
        },
    );
    let ids: Vec<u32> = session.filtered_leads().iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(session.stats().messaged, 1);

    // Country selector options come from the new directory.
    assert_eq!(
        session.directory().countries(),
        vec!["United Kingdom".to_string(), "Ireland".to_string()]
    );
}

#[test]
fn failed_row_parse_leaves_the_session_untouched() {
    let mut session = OutreachSession::seeded();
    let before = session.stats();

    // The read/parse step fails; the session is never touched.
    assert!(rows_from_json("{ not rows }").is_err());
    assert_eq!(session.stats(), before);
    assert_eq!(session.filtered_leads().len(), 5);
    // Still usable afterwards.
    session.set_search("kevin");
    assert_eq!(session.filtered_leads().len(), 1);
}
