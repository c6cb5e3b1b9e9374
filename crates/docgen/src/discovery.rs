//! The discovery-call script rendered as a printable sheet.

use outreach_core::discovery::{DISCOVERY_SCRIPT, KEY_PRINCIPLES};

pub fn render() -> String {
    let mut doc = String::new();
    doc.push_str("DISCOVERY CALL SCRIPT\n");

    for section in DISCOVERY_SCRIPT {
        doc.push_str(&format!("\n== {} ==\n", section.title));
        for question in section.questions {
            doc.push_str(&format!("\n{}. {}\n", question.number, question.prompt));
            doc.push_str(&format!("   Listen for: {}\n", question.listen_for));
        }
    }

    doc.push_str("\n== Key Principles ==\n\n");
    for principle in KEY_PRINCIPLES {
        doc.push_str(&format!("- {principle}\n"));
    }

    doc
}
