use std::future::Future;

use gloo_net::Error as GlooError;
use serde::Serialize;

use crate::config;
use crate::lead::form::{LeadAction, LeadFields};
use crate::utils::api::JsonPost;

/// Body accepted by the form backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub company: String,
    #[serde(rename = "missedCalls")]
    pub missed_calls: String,
    #[serde(rename = "_subject")]
    pub subject: String,
}

impl LeadPayload {
    pub fn from_fields(fields: &LeadFields) -> Self {
        Self {
            name: fields.full_name.trim().to_string(),
            phone: fields.phone.trim().to_string(),
            email: fields.email.trim().to_string(),
            company: fields.company.trim().to_string(),
            missed_calls: fields.missed_calls.value().to_string(),
            subject: config::LEAD_SUBJECT.to_string(),
        }
    }
}

/// Sends the lead once through `send` and maps the outcome to the form
/// action that settles the submission. `send` resolves to whether the
/// endpoint answered with an OK status.
pub async fn submit_lead<S, Fut>(fields: &LeadFields, send: S) -> LeadAction
where
    S: FnOnce(LeadPayload) -> Fut,
    Fut: Future<Output = Result<bool, GlooError>>,
{
    match send(LeadPayload::from_fields(fields)).await {
        Ok(true) => {
            log::info!("Trial request submitted");
            LeadAction::Succeeded
        }
        Ok(false) => {
            log::warn!("Form endpoint rejected the trial request");
            LeadAction::Failed
        }
        Err(e) => {
            log::error!("Failed to submit trial request: {:?}", e);
            LeadAction::Failed
        }
    }
}

pub async fn send_to_form_endpoint(payload: LeadPayload) -> Result<bool, GlooError> {
    let response = JsonPost::new(config::lead_form_endpoint())
        .json(&payload)?
        .send()
        .await?;
    Ok(response.ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::form::{FormPhase, LeadField, LeadForm, RETRY_NOTICE};
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn filled_form() -> LeadForm {
        LeadForm::default()
            .apply(LeadAction::Edit(LeadField::FullName, " John Smith ".into()))
            .apply(LeadAction::Edit(LeadField::Phone, "(555) 123-4567".into()))
            .apply(LeadAction::Edit(LeadField::Email, "john@yourcompany.com".into()))
            .apply(LeadAction::Edit(LeadField::Company, "Smith Heating".into()))
            .apply(LeadAction::Edit(LeadField::MissedCalls, "not-sure".into()))
    }

    #[test]
    fn payload_uses_backend_field_names() {
        let payload = LeadPayload::from_fields(&filled_form().fields);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "John Smith");
        assert_eq!(json["phone"], "(555) 123-4567");
        assert_eq!(json["email"], "john@yourcompany.com");
        assert_eq!(json["company"], "Smith Heating");
        assert_eq!(json["missedCalls"], "not-sure");
        assert_eq!(json["_subject"], "New Free Trial Request - MVMNT");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn ok_response_moves_form_to_success() {
        let form = filled_form().apply(LeadAction::Submit);
        let sent = RefCell::new(Vec::new());
        let action = block_on(submit_lead(&form.fields, |payload| {
            sent.borrow_mut().push(payload);
            async { Ok(true) }
        }));
        assert_eq!(action, LeadAction::Succeeded);
        assert_eq!(form.apply(action).phase, FormPhase::Submitted);
        assert_eq!(sent.borrow().len(), 1);
    }

    #[test]
    fn rejected_response_keeps_form_populated() {
        let form = filled_form().apply(LeadAction::Submit);
        let action = block_on(submit_lead(&form.fields, |_| async { Ok(false) }));
        let after = form.apply(action);
        assert_eq!(after.phase, FormPhase::Editing);
        assert_eq!(after.fields, filled_form().fields);
        assert_eq!(after.notice.as_deref(), Some(RETRY_NOTICE));
    }

    #[test]
    fn network_error_is_a_failure() {
        let form = filled_form().apply(LeadAction::Submit);
        let action = block_on(submit_lead(&form.fields, |_| async {
            Err(GlooError::GlooError("offline".to_string()))
        }));
        assert_eq!(action, LeadAction::Failed);
    }
}
