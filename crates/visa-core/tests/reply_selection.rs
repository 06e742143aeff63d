use visa_core::reply::{classify, purpose_documents, Topic, GENERAL_DOCUMENTS};
use visa_core::{select_reply, Country, Purpose, TravelProfile};

fn section<'a>(reply: &'a str, heading: &str) -> Vec<&'a str> {
    reply
        .lines()
        .skip_while(|line| *line != heading)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_student_documents_scenario() {
    let profile = TravelProfile::new(Country::India, Country::India, Country::Germany, Purpose::Student);
    let reply = select_reply("What documents do I need?", &profile);

    assert!(reply.contains("For India citizens traveling from India to Germany for student:"));
    assert_eq!(
        section(&reply, "**Student-Specific:**"),
        vec![
            "• University acceptance letter",
            "• Proof of tuition payment",
            "• Academic transcripts",
            "• Language proficiency certificate",
        ]
    );
}

#[test]
fn test_documents_reply_lists_general_and_purpose_documents() {
    for purpose in Purpose::all() {
        let profile = TravelProfile::new(Country::Kenya, Country::Qatar, Country::Canada, purpose);
        let reply = select_reply("documents", &profile);

        let general: Vec<String> = GENERAL_DOCUMENTS.iter().map(|d| format!("• {d}")).collect();
        assert_eq!(section(&reply, "**General Documents:**"), general);

        let heading = format!("**{purpose}-Specific:**");
        let specific: Vec<String> = purpose_documents(purpose)
            .iter()
            .map(|d| format!("• {d}"))
            .collect();
        assert_eq!(section(&reply, &heading), specific);

        for other in Purpose::all().filter(|p| *p != purpose) {
            for doc in purpose_documents(other) {
                if !purpose_documents(purpose).contains(doc) {
                    assert!(!reply.contains(doc), "{purpose} reply leaked {other} document {doc}");
                }
            }
        }
    }
}

#[test]
fn test_documents_reply_depends_only_on_header_fields() {
    let a = TravelProfile::new(Country::Spain, Country::Italy, Country::Greece, Purpose::Work);
    let b = TravelProfile::new(Country::Peru, Country::Chile, Country::Mexico, Purpose::Work);

    let reply_a = select_reply("requirements", &a);
    let reply_b = select_reply("requirements", &b);

    let body = |reply: &str| reply.lines().skip(3).collect::<Vec<_>>().join("\n");
    assert_eq!(body(&reply_a), body(&reply_b));
    assert_ne!(reply_a, reply_b);
}

#[test]
fn test_documents_rule_wins_over_visa_rule() {
    for text in [
        "documents for visa do i need",
        "Visa required? list please",
        "what do i need for my visa",
    ] {
        assert_eq!(classify(text), Topic::Documents, "{text}");
    }
}

#[test]
fn test_fallback_menu() {
    let profile = TravelProfile::new(Country::Norway, Country::Sweden, Country::Vietnam, Purpose::Tourism);
    let reply = select_reply("asdf", &profile);

    assert!(reply.contains("📋 **Documents** - Required paperwork"));
    assert!(reply.contains("📝 **Process** - Step-by-step guide"));
    assert!(reply.ends_with("What would you like to know about your trip from Sweden to Vietnam?"));
}

#[test]
fn test_empty_input_does_not_panic() {
    let profile = TravelProfile::new(Country::Iran, Country::Iraq, Country::Jordan, Purpose::Medical);
    assert_eq!(select_reply("", &profile), select_reply("asdf", &profile));
}
