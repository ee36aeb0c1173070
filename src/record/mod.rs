//! Interview record aggregate
//!
//! One `InterviewRecord` per session, exclusively owned by its
//! `FlowController`. Every field in every sub-record is optional and starts
//! unset; each is written at most once as the flow advances, so the record is
//! structurally valid and inspectable at any moment, complete or partial.

pub mod sections;

pub use sections::{
    ClosureSupport, Consent, ContactDetails, ForensicEvidence, IncidentHistory, InjuryAssessment,
    LegalFollowUp, MedicalHistory, PsychologicalAssessment, TreatmentDiscussion,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate root accumulating all captured answers for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewRecord {
    /// Anonymous session identifier
    pub session_id: Uuid,
    /// Moment the session started
    pub created_at: DateTime<Utc>,
    /// Interviewer identifier (e.g. "Nurse A")
    pub interviewer: Option<String>,
    /// Anonymous subject identifier (e.g. "P001")
    pub subject_id: Option<String>,

    pub consent: Consent,
    pub medical_history: MedicalHistory,
    pub incident_history: IncidentHistory,
    pub contact_details: ContactDetails,
    pub injury_assessment: InjuryAssessment,
    pub forensic_evidence: ForensicEvidence,
    pub treatment_discussion: TreatmentDiscussion,
    pub psychological_assessment: PsychologicalAssessment,
    pub legal_follow_up: LegalFollowUp,
    pub closure_support: ClosureSupport,
}

impl InterviewRecord {
    /// Create a fresh record; the timestamp is captured the instant the
    /// session starts.
    pub fn new() -> Self {
        InterviewRecord {
            session_id: Uuid::new_v4(),
            created_at: Utc::now(),
            interviewer: None,
            subject_id: None,
            consent: Consent::default(),
            medical_history: MedicalHistory::default(),
            incident_history: IncidentHistory::default(),
            contact_details: ContactDetails::default(),
            injury_assessment: InjuryAssessment::default(),
            forensic_evidence: ForensicEvidence::default(),
            treatment_discussion: TreatmentDiscussion::default(),
            psychological_assessment: PsychologicalAssessment::default(),
            legal_follow_up: LegalFollowUp::default(),
            closure_support: ClosureSupport::default(),
        }
    }

    /// Whether every sub-record after Consent is still entirely unset.
    ///
    /// Holds permanently for sessions terminated at the consent gate.
    pub fn post_consent_untouched(&self) -> bool {
        self.medical_history.is_unset()
            && self.incident_history.is_unset()
            && self.contact_details.is_unset()
            && self.injury_assessment.is_unset()
            && self.forensic_evidence.is_unset()
            && self.treatment_discussion.is_unset()
            && self.psychological_assessment.is_unset()
            && self.legal_follow_up.is_unset()
            && self.closure_support.is_unset()
    }
}

impl Default for InterviewRecord {
    fn default() -> Self {
        Self::new()
    }
}
