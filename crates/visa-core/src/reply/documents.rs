//! Document checklists used by the documents reply.

use crate::profile::Purpose;

/// Documents every traveler is asked for, regardless of purpose.
pub const GENERAL_DOCUMENTS: [&str; 7] = [
    "Valid passport (minimum 6 months validity)",
    "Completed visa application form",
    "Recent passport-sized photographs (35x45mm)",
    "Proof of accommodation/hotel booking",
    "Return/onward flight tickets",
    "Proof of sufficient financial means",
    "Travel insurance certificate",
];

/// Extra documents required for a given purpose.
pub fn purpose_documents(purpose: Purpose) -> &'static [&'static str] {
    match purpose {
        Purpose::Tourism => &[
            "Hotel reservations for entire stay",
            "Detailed travel itinerary",
            "Tour bookings (if applicable)",
        ],
        Purpose::Business => &[
            "Official invitation letter from host company",
            "Business registration documents",
            "Letter from employer",
            "Conference/meeting details",
        ],
        Purpose::Student => &[
            "University acceptance letter",
            "Proof of tuition payment",
            "Academic transcripts",
            "Language proficiency certificate",
        ],
        Purpose::Transit => &[
            "Confirmed onward tickets",
            "Transit visa (if layover >24 hours)",
            "Boarding passes",
        ],
        Purpose::Work => &[
            "Employment contract",
            "Work permit approval",
            "Company sponsorship letter",
            "Professional qualifications",
        ],
        Purpose::Medical => &[
            "Medical appointment letter",
            "Doctor referral",
            "Medical records",
            "Hospital payment confirmation",
        ],
    }
}

/// Renders a checklist as bullet lines.
pub(crate) fn bullets(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("• {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_purpose_has_three_or_four_documents() {
        for purpose in Purpose::all() {
            let docs = purpose_documents(purpose);
            assert!(
                (3..=4).contains(&docs.len()),
                "{purpose} has {} documents",
                docs.len()
            );
        }
    }

    #[test]
    fn test_bullets() {
        assert_eq!(bullets(&["a", "b"]), "• a\n• b");
    }
}
