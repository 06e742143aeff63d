//! Reply templates.
//!
//! Each function renders one canned reply. Text uses `**bold**` markup and
//! `\n` line breaks; see [`crate::markup`] for rendering.

use super::documents::{bullets, purpose_documents, GENERAL_DOCUMENTS};
use crate::profile::TravelProfile;

pub fn documents(profile: &TravelProfile) -> String {
    format!(
        "📋 **Document Requirements**\n\n\
         For {nationality} citizens traveling from {origin} to {destination} for {purpose_lower}:\n\n\
         **General Documents:**\n{general}\n\n\
         **{purpose}-Specific:**\n{specific}\n\n\
         Would you like details about visa fees or processing time?",
        nationality = profile.nationality,
        origin = profile.origin,
        destination = profile.destination,
        purpose_lower = profile.purpose.label_lower(),
        purpose = profile.purpose,
        general = bullets(&GENERAL_DOCUMENTS),
        specific = bullets(purpose_documents(profile.purpose)),
    )
}

pub fn visa_requirements(profile: &TravelProfile) -> String {
    format!(
        "🛂 **Visa Requirements**\n\n\
         For {nationality} passport holders traveling to {destination}:\n\n\
         **Visa Status:** Visa required for {purpose_lower} purposes\n\n\
         **Visa Types Available:**\n\
         • Single Entry (up to 30 days)\n\
         • Multiple Entry (90 days within 180 days)\n\
         • Long-term visa (for extended stays)\n\n\
         **Application Methods:**\n\
         • Online e-Visa portal\n\
         • Embassy/Consulate appointment\n\
         • Visa on arrival (select nationalities)\n\n\
         Shall I provide the step-by-step application process?",
        nationality = profile.nationality,
        destination = profile.destination,
        purpose_lower = profile.purpose.label_lower(),
    )
}

pub const FEES: &str = "💰 **Visa Fees**\n\n\
**Standard Processing:**\n\
• Single Entry: $50-80 USD\n\
• Multiple Entry: $100-150 USD\n\
• Long-term: $150-300 USD\n\n\
**Additional Fees:**\n\
• Service fee: $15-30 USD\n\
• Rush processing: +$50 USD\n\
• Document attestation: $20-40 USD\n\n\
**Payment Methods:**\n\
• Credit/Debit card\n\
• Bank transfer\n\
• Online payment portals\n\n\
Note: Fees vary by nationality and visa type. Would you like processing timeline details?";

pub const TIMELINE: &str = "⏱️ **Processing Timeline**\n\n\
**Standard Processing:** 5-15 business days\n\
**Express Processing:** 2-3 business days (+fee)\n\
**Rush Processing:** 24-48 hours (+premium fee)\n\n\
**Recommended Timeline:**\n\
• Apply at least 4-6 weeks before travel\n\
• Book appointment 2 weeks in advance\n\
• Prepare documents 1 week prior\n\n\
**Embassy Working Hours:**\n\
• Monday-Friday: 9:00 AM - 4:00 PM\n\
• Document submission: 9:00 AM - 12:00 PM\n\n\
Anything else you'd like to know?";

pub const PROCEDURE: &str = "📝 **Application Process**\n\n\
**Step 1:** Gather Required Documents\n\
• Passport, photos, proof of travel\n\n\
**Step 2:** Complete Application Form\n\
• Fill online or download PDF form\n\n\
**Step 3:** Book Appointment\n\
• Schedule at embassy/VFS center\n\n\
**Step 4:** Submit Application\n\
• Attend appointment with documents\n\
• Pay visa fee\n\
• Provide biometrics (if required)\n\n\
**Step 5:** Track & Collect\n\
• Use tracking number to monitor status\n\
• Collect passport with visa stamp\n\n\
Need help with any specific step?";

pub const THANKS: &str =
    "You're welcome! 🌟 Safe travels! If you have more questions before your trip, feel free to ask.";

pub fn greeting(profile: &TravelProfile) -> String {
    format!(
        "Hello! 👋 I'm your Visa Advisor.\n\n\
         I can help {nationality} citizens with visa requirements for {destination} ({purpose}).\n\n\
         What would you like to know?",
        nationality = profile.nationality,
        destination = profile.destination,
        purpose = profile.purpose,
    )
}

pub fn menu(profile: &TravelProfile) -> String {
    format!(
        "I can help you with:\n\n\
         📋 **Documents** - Required paperwork\n\
         🛂 **Visa Requirements** - Do you need a visa?\n\
         💰 **Fees** - Costs and payments\n\
         ⏱️ **Timeline** - Processing duration\n\
         📝 **Process** - Step-by-step guide\n\n\
         What would you like to know about your trip from {origin} to {destination}?",
        origin = profile.origin,
        destination = profile.destination,
    )
}

/// Opening message of every session. Built directly from the profile, never
/// through the reply selector.
pub fn welcome(profile: &TravelProfile) -> String {
    format!(
        "👋 Welcome to Visa Advisor!\n\n\
         I'll help you with visa and document requirements for your trip.\n\n\
         **Your Details:**\n\
         • Nationality: {nationality}\n\
         • From: {origin}\n\
         • To: {destination}\n\
         • Purpose: {purpose}\n\n\
         How can I assist you today? You can ask about:\n\
         • Required documents\n\
         • Visa requirements\n\
         • Fees and costs\n\
         • Processing time",
        nationality = profile.nationality,
        origin = profile.origin,
        destination = profile.destination,
        purpose = profile.purpose,
    )
}
