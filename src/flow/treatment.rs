//! Treatment discussion section
//!
//! Two information offers (STI prophylaxis and pregnancy prevention), each
//! followed by an Info turn only when wanted, then an open question for
//! remaining treatment concerns.

use crate::answers::{free_text, parse_yes_no, Answer};
use crate::questions::Question;
use crate::record::InterviewRecord;

use super::{Completion, SectionStep, StepOutcome};

const STI_INFO: &str = "Preventive treatment against sexually transmitted infections is \
     available and most effective when started early. The medical team can \
     walk you through the options.";

const PREGNANCY_INFO: &str = "Emergency contraception is available and is most effective within \
     the first days after the incident. The medical team can explain the \
     options and their timing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TreatmentState {
    Start,
    StiOffer,
    StiInfo,
    PregnancyOffer,
    PregnancyInfo,
    Concerns,
    Done,
}

/// Resumable treatment-discussion step
#[derive(Debug)]
pub struct TreatmentStep {
    state: TreatmentState,
}

impl TreatmentStep {
    pub fn new() -> Self {
        TreatmentStep {
            state: TreatmentState::Start,
        }
    }

    fn ask_pregnancy_offer(&mut self) -> StepOutcome {
        self.state = TreatmentState::PregnancyOffer;
        StepOutcome::Ask(Question::yes_no(
            "Would you like information about pregnancy prevention options?",
        ))
    }

    fn ask_concerns(&mut self) -> StepOutcome {
        self.state = TreatmentState::Concerns;
        StepOutcome::Ask(Question::text(
            "Do you have any other questions or concerns about treatment?",
        ))
    }
}

impl Default for TreatmentStep {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStep for TreatmentStep {
    fn name(&self) -> &'static str {
        "treatment_discussion"
    }

    fn next(&mut self, record: &mut InterviewRecord, input: Option<&str>) -> StepOutcome {
        use TreatmentState::*;

        match self.state {
            Start => {
                self.state = StiOffer;
                StepOutcome::Ask(Question::yes_no(
                    "Would you like information about preventing sexually transmitted infections?",
                ))
            }
            StiOffer => {
                let answer = parse_yes_no(input);
                record.treatment_discussion.wants_sti_information = Some(answer);
                if answer == Answer::Yes {
                    self.state = StiInfo;
                    StepOutcome::Ask(Question::info(STI_INFO))
                } else {
                    self.ask_pregnancy_offer()
                }
            }
            StiInfo => self.ask_pregnancy_offer(),
            PregnancyOffer => {
                let answer = parse_yes_no(input);
                record.treatment_discussion.wants_pregnancy_prevention_info = Some(answer);
                if answer == Answer::Yes {
                    self.state = PregnancyInfo;
                    StepOutcome::Ask(Question::info(PREGNANCY_INFO))
                } else {
                    self.ask_concerns()
                }
            }
            PregnancyInfo => self.ask_concerns(),
            Concerns => {
                record.treatment_discussion.treatment_concerns = free_text(input);
                self.state = Done;
                StepOutcome::Complete(Completion::Continue)
            }
            Done => StepOutcome::Complete(Completion::Continue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::testutil::run_step;
    use crate::questions::QuestionKind;

    #[test]
    fn test_info_turns_surfaced_when_wanted() {
        let mut record = InterviewRecord::new();
        let mut step = TreatmentStep::new();

        let (asked, completion) = run_step(
            &mut step,
            &mut record,
            &[
                Some("yes"),
                None, // acknowledge STI info
                Some("yes"),
                None, // acknowledge pregnancy info
                Some("how long does treatment take?"),
            ],
        );

        assert_eq!(completion, Completion::Continue);
        assert_eq!(asked.len(), 5);
        assert_eq!(asked[1].kind, QuestionKind::Info);
        assert_eq!(asked[3].kind, QuestionKind::Info);
        assert_eq!(
            record.treatment_discussion.treatment_concerns.as_deref(),
            Some("how long does treatment take?")
        );
    }

    #[test]
    fn test_declined_offers_skip_info_turns() {
        let mut record = InterviewRecord::new();
        let mut step = TreatmentStep::new();

        let (asked, _) = run_step(
            &mut step,
            &mut record,
            &[Some("no"), Some("skip"), Some("")],
        );

        assert_eq!(asked.len(), 3);
        assert!(asked.iter().all(|q| q.kind != QuestionKind::Info));
        assert_eq!(
            record.treatment_discussion.wants_sti_information,
            Some(Answer::No)
        );
        assert_eq!(
            record.treatment_discussion.wants_pregnancy_prevention_info,
            Some(Answer::Decline)
        );
        assert!(record.treatment_discussion.treatment_concerns.is_none());
    }
}
