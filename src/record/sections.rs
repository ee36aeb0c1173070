//! Per-section sub-records
//!
//! Plain composed value types, one per interview section. All fields are
//! optional and start unset; `is_unset` reports whether a section was ever
//! touched, which is how the consent-gate invariant is checked.

use crate::answers::Answer;
use serde::{Deserialize, Serialize};

/// Consent section: purpose comprehension, permission, gated demographics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Consent {
    pub understands_purpose: Option<Answer>,
    /// Asked only when the purpose was not affirmed as understood
    pub wants_explanation: Option<Answer>,
    /// The consent gate: anything but Yes halts the whole session
    pub gives_permission: Option<Answer>,
    pub agrees_age_question: Option<Answer>,
    pub age: Option<u8>,
    pub agrees_sex_question: Option<Answer>,
    pub biological_sex: Option<String>,
}

/// Medical history, with menstrual/pregnancy questions age-gated (>= 12 or unset)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub current_medications: Option<String>,
    pub allergies: Option<String>,
    pub existing_conditions: Option<String>,
    pub last_menstrual_period: Option<String>,
    pub pregnancy_history: Option<String>,
    pub currently_pregnant: Option<Answer>,
}

impl MedicalHistory {
    pub fn is_unset(&self) -> bool {
        self.current_medications.is_none()
            && self.allergies.is_none()
            && self.existing_conditions.is_none()
            && self.last_menstrual_period.is_none()
            && self.pregnancy_history.is_none()
            && self.currently_pregnant.is_none()
    }
}

/// Account of the incident, with detail follow-ups gated on affirmations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncidentHistory {
    pub description: Option<String>,
    pub weapons_used: Option<Answer>,
    pub weapon_details: Option<String>,
    pub physically_restrained: Option<Answer>,
    pub restraint_details: Option<String>,
    pub forced_substances: Option<Answer>,
    pub substance_details: Option<String>,
    pub witnesses: Option<Answer>,
    pub witness_details: Option<String>,
    pub witness_count: Option<u32>,
}

impl IncidentHistory {
    pub fn is_unset(&self) -> bool {
        self.description.is_none()
            && self.weapons_used.is_none()
            && self.weapon_details.is_none()
            && self.physically_restrained.is_none()
            && self.restraint_details.is_none()
            && self.forced_substances.is_none()
            && self.substance_details.is_none()
            && self.witnesses.is_none()
            && self.witness_details.is_none()
            && self.witness_count.is_none()
    }
}

/// Physical contact details; contact_types is inferred from the free-text
/// description by keyword containment, not chosen from a fixed enum
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDetails {
    pub body_contact_description: Option<String>,
    pub contact_types: Option<Vec<String>>,
    pub ejaculation_occurred: Option<Answer>,
    pub ejaculation_location: Option<String>,
    pub objects_used: Option<Answer>,
    pub object_details: Option<String>,
    pub resisted: Option<Answer>,
    pub resistance_details: Option<String>,
}

impl ContactDetails {
    pub fn is_unset(&self) -> bool {
        self.body_contact_description.is_none()
            && self.contact_types.is_none()
            && self.ejaculation_occurred.is_none()
            && self.ejaculation_location.is_none()
            && self.objects_used.is_none()
            && self.object_details.is_none()
            && self.resisted.is_none()
            && self.resistance_details.is_none()
    }
}

/// Pain and visible-injury assessment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InjuryAssessment {
    pub in_pain: Option<Answer>,
    pub pain_locations: Option<String>,
    /// 0-10 scale, best-effort parse
    pub pain_rating: Option<u8>,
    pub visible_injuries: Option<Answer>,
    pub injury_details: Option<String>,
}

impl InjuryAssessment {
    pub fn is_unset(&self) -> bool {
        self.in_pain.is_none()
            && self.pain_locations.is_none()
            && self.pain_rating.is_none()
            && self.visible_injuries.is_none()
            && self.injury_details.is_none()
    }
}

/// Evidence preservation questions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForensicEvidence {
    pub changed_clothes: Option<Answer>,
    pub clothing_location: Option<String>,
    pub washed_since: Option<Answer>,
    pub washing_details: Option<String>,
    pub evidence_kit_consent: Option<Answer>,
}

impl ForensicEvidence {
    pub fn is_unset(&self) -> bool {
        self.changed_clothes.is_none()
            && self.clothing_location.is_none()
            && self.washed_since.is_none()
            && self.washing_details.is_none()
            && self.evidence_kit_consent.is_none()
    }
}

/// Treatment options discussion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreatmentDiscussion {
    pub wants_sti_information: Option<Answer>,
    pub wants_pregnancy_prevention_info: Option<Answer>,
    pub treatment_concerns: Option<String>,
}

impl TreatmentDiscussion {
    pub fn is_unset(&self) -> bool {
        self.wants_sti_information.is_none()
            && self.wants_pregnancy_prevention_info.is_none()
            && self.treatment_concerns.is_none()
    }
}

/// Immediate psychological state and referral wishes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PsychologicalAssessment {
    pub has_safety_concerns: Option<Answer>,
    pub safety_concern_details: Option<String>,
    pub wants_counselor_referral: Option<Answer>,
    pub counselor_preferences: Option<String>,
    pub has_self_harm_thoughts: Option<Answer>,
    pub self_harm_details: Option<String>,
}

impl PsychologicalAssessment {
    pub fn is_unset(&self) -> bool {
        self.has_safety_concerns.is_none()
            && self.safety_concern_details.is_none()
            && self.wants_counselor_referral.is_none()
            && self.counselor_preferences.is_none()
            && self.has_self_harm_thoughts.is_none()
            && self.self_harm_details.is_none()
    }
}

/// Legal reporting and advocacy follow-up
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegalFollowUp {
    pub wants_police_report: Option<Answer>,
    pub police_report_details: Option<String>,
    pub wants_advocate_contact: Option<Answer>,
    pub advocate_details: Option<String>,
}

impl LegalFollowUp {
    pub fn is_unset(&self) -> bool {
        self.wants_police_report.is_none()
            && self.police_report_details.is_none()
            && self.wants_advocate_contact.is_none()
            && self.advocate_details.is_none()
    }
}

/// Closing questions and safety check
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClosureSupport {
    pub has_remaining_questions: Option<Answer>,
    pub remaining_questions: Option<String>,
    pub has_safe_place: Option<Answer>,
    pub safe_place_details: Option<String>,
    pub agrees_followup_contact: Option<Answer>,
}

impl ClosureSupport {
    pub fn is_unset(&self) -> bool {
        self.has_remaining_questions.is_none()
            && self.remaining_questions.is_none()
            && self.has_safe_place.is_none()
            && self.safe_place_details.is_none()
            && self.agrees_followup_contact.is_none()
    }
}
