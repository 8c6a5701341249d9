use std::rc::Rc;
use yew::Reducible;

pub const RETRY_NOTICE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    FullName,
    Phone,
    Email,
    Company,
    MissedCalls,
}

impl LeadField {
    pub const REQUIRED: [LeadField; 4] = [
        LeadField::FullName,
        LeadField::Phone,
        LeadField::Email,
        LeadField::Company,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadField::FullName => "Full Name",
            LeadField::Phone => "Phone Number",
            LeadField::Email => "Email Address",
            LeadField::Company => "Company Name",
            LeadField::MissedCalls => "Missed calls per week",
        }
    }
}

/// Answer to "Do you know how many calls you miss in a week?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissedCallsRange {
    #[default]
    Unset,
    UpToFive,
    FiveToFifteen,
    FifteenToThirty,
    OverThirty,
    NotSure,
}

impl MissedCallsRange {
    pub const ALL: [MissedCallsRange; 6] = [
        MissedCallsRange::Unset,
        MissedCallsRange::UpToFive,
        MissedCallsRange::FiveToFifteen,
        MissedCallsRange::FifteenToThirty,
        MissedCallsRange::OverThirty,
        MissedCallsRange::NotSure,
    ];

    /// Value submitted to the form backend.
    pub fn value(self) -> &'static str {
        match self {
            MissedCallsRange::Unset => "",
            MissedCallsRange::UpToFive => "0-5",
            MissedCallsRange::FiveToFifteen => "5-15",
            MissedCallsRange::FifteenToThirty => "15-30",
            MissedCallsRange::OverThirty => "30+",
            MissedCallsRange::NotSure => "not-sure",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MissedCallsRange::Unset => "Select an option",
            MissedCallsRange::UpToFive => "0-5 calls",
            MissedCallsRange::FiveToFifteen => "5-15 calls",
            MissedCallsRange::FifteenToThirty => "15-30 calls",
            MissedCallsRange::OverThirty => "30+ calls",
            MissedCallsRange::NotSure => "Not sure",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|range| range.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadFields {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    pub missed_calls: MissedCallsRange,
}

impl LeadFields {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FullName => &self.full_name,
            LeadField::Phone => &self.phone,
            LeadField::Email => &self.email,
            LeadField::Company => &self.company,
            LeadField::MissedCalls => self.missed_calls.value(),
        }
    }

    fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::FullName => self.full_name = value,
            LeadField::Phone => self.phone = value,
            LeadField::Email => self.email = value,
            LeadField::Company => self.company = value,
            LeadField::MissedCalls => self.missed_calls = MissedCallsRange::from_value(&value),
        }
    }

    pub fn missing_required(&self) -> Vec<LeadField> {
        LeadField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeadAction {
    Edit(LeadField, String),
    Submit,
    Succeeded,
    Failed,
    Reset,
}

/// Trial request form. Every transition goes through [`LeadForm::apply`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadForm {
    pub fields: LeadFields,
    pub phase: FormPhase,
    pub notice: Option<String>,
}

impl LeadForm {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// True when a `Submit` would actually start a request.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && self.fields.missing_required().is_empty()
    }

    pub fn apply(&self, action: LeadAction) -> Self {
        let mut next = self.clone();
        match (self.phase, action) {
            (_, LeadAction::Reset) => return Self::default(),
            (FormPhase::Editing, LeadAction::Edit(field, value)) => {
                next.fields.set(field, value);
                next.notice = None;
            }
            (FormPhase::Editing, LeadAction::Submit) => {
                let missing = self.fields.missing_required();
                if missing.is_empty() {
                    next.phase = FormPhase::Submitting;
                    next.notice = None;
                } else {
                    let names: Vec<&str> = missing.iter().map(|f| f.label()).collect();
                    next.notice = Some(format!("Please fill in: {}", names.join(", ")));
                }
            }
            (FormPhase::Submitting, LeadAction::Succeeded) => {
                next.phase = FormPhase::Submitted;
            }
            (FormPhase::Submitting, LeadAction::Failed) => {
                next.phase = FormPhase::Editing;
                next.notice = Some(RETRY_NOTICE.to_string());
            }
            // Late or duplicate events (double submit, edits while sending).
            _ => {}
        }
        next
    }
}

impl Reducible for LeadForm {
    type Action = LeadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        [
            (LeadField::FullName, "John Smith"),
            (LeadField::Phone, "(555) 123-4567"),
            (LeadField::Email, "john@yourcompany.com"),
            (LeadField::Company, "Smith Heating"),
            (LeadField::MissedCalls, "15-30"),
        ]
        .into_iter()
        .fold(LeadForm::default(), |form, (field, value)| {
            form.apply(LeadAction::Edit(field, value.to_string()))
        })
    }

    #[test]
    fn edits_update_fields() {
        let form = filled();
        assert_eq!(form.fields.full_name, "John Smith");
        assert_eq!(form.fields.missed_calls, MissedCallsRange::FifteenToThirty);
        assert!(form.can_submit());
    }

    #[test]
    fn submit_with_missing_fields_stays_editing() {
        let form = LeadForm::default()
            .apply(LeadAction::Edit(LeadField::FullName, "Jo".into()))
            .apply(LeadAction::Edit(LeadField::Email, "   ".into()))
            .apply(LeadAction::Submit);
        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(
            form.notice.as_deref(),
            Some("Please fill in: Phone Number, Email Address, Company Name")
        );
    }

    #[test]
    fn success_path() {
        let form = filled().apply(LeadAction::Submit);
        assert!(form.is_submitting());
        let form = form.apply(LeadAction::Succeeded);
        assert_eq!(form.phase, FormPhase::Submitted);
    }

    #[test]
    fn failure_keeps_fields_and_shows_retry_notice() {
        let before = filled();
        let form = before.apply(LeadAction::Submit).apply(LeadAction::Failed);
        assert_eq!(form.phase, FormPhase::Editing);
        assert_eq!(form.fields, before.fields);
        assert_eq!(form.notice.as_deref(), Some(RETRY_NOTICE));
        assert!(form.can_submit());
    }

    #[test]
    fn ignores_edits_and_resubmits_while_sending() {
        let sending = filled().apply(LeadAction::Submit);
        let after = sending
            .apply(LeadAction::Edit(LeadField::Company, "Other".into()))
            .apply(LeadAction::Submit);
        assert_eq!(after, sending);
    }

    #[test]
    fn reset_clears_everything() {
        let form = filled().apply(LeadAction::Submit).apply(LeadAction::Succeeded);
        assert_eq!(form.apply(LeadAction::Reset), LeadForm::default());
    }

    #[test]
    fn unknown_missed_calls_value_is_unset() {
        assert_eq!(MissedCallsRange::from_value("lots"), MissedCallsRange::Unset);
        assert_eq!(MissedCallsRange::from_value("30+"), MissedCallsRange::OverThirty);
    }
}
