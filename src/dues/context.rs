use crate::dues::error::ContextError;
use crate::dues::error::ContextError::InvalidLastPaidDate;
use crate::dues::error::Result;
use crate::dues::evaluate::evaluate;
use crate::dues::history::latest_approved;
use chrono::NaiveDate;
use derive_getters::Getters;
use dto::dates::parse_date;
use dto::dues_status::DuesStatus;
use dto::member_record::MemberRecord;
use dto::payment_proof::PaymentProof;
use log::warn;

/// Everything needed to evaluate a member's dues, with dates already parsed.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct MemberDuesContext {
    registration_date: Option<NaiveDate>,
    last_paid_date: Option<NaiveDate>,
    payment_history: Vec<PaymentProof>,
}

impl MemberDuesContext {
    pub fn new(
        registration_date: Option<NaiveDate>,
        last_paid_date: Option<NaiveDate>,
        payment_history: Vec<PaymentProof>,
    ) -> Self {
        Self {
            registration_date,
            last_paid_date,
            payment_history,
        }
    }

    /// Build a context from raw dates.
    ///
    /// An unreadable registration date is the same as no registration date.
    /// When no last payment date is given, it's derived from the history.
    /// An unreadable last payment date is an error though:
    /// falling back onto the registration date could raise a wrong overdue notice.
    pub fn from_raw(
        registration_date: Option<&str>,
        last_paid_date: Option<&str>,
        payment_history: Vec<PaymentProof>,
    ) -> Result<Self, ContextError> {
        let registration_date = registration_date.and_then(|value| {
            let date = parse_date(value);
            if date.is_none() {
                warn!("Registration date can't be read. Ignoring. [value: {value}]");
            }
            date
        });

        let last_paid_date = match last_paid_date {
            Some(value) => {
                Some(parse_date(value).ok_or_else(|| InvalidLastPaidDate(value.to_owned()))?)
            }
            None => latest_approved(&payment_history),
        };

        Ok(Self::new(registration_date, last_paid_date, payment_history))
    }

    pub fn from_member(
        member: &MemberRecord,
        payment_history: Vec<PaymentProof>,
    ) -> Result<Self, ContextError> {
        Self::from_raw(
            member.registration_date().as_deref(),
            member.last_paid_date().as_deref(),
            payment_history,
        )
    }

    pub fn evaluate(&self, today: &NaiveDate) -> DuesStatus {
        evaluate(
            self.registration_date.as_ref(),
            self.last_paid_date.as_ref(),
            &self.payment_history,
            today,
        )
    }
}

/// Evaluate dues from raw data.
/// When the due date can't be known, no notice is raised.
pub fn evaluate_raw(
    registration_date: Option<&str>,
    last_paid_date: Option<&str>,
    payment_history: Vec<PaymentProof>,
    today: &NaiveDate,
) -> DuesStatus {
    evaluate_context(
        MemberDuesContext::from_raw(registration_date, last_paid_date, payment_history),
        today,
    )
}

pub fn evaluate_member(
    member: &MemberRecord,
    payment_history: Vec<PaymentProof>,
    today: &NaiveDate,
) -> DuesStatus {
    evaluate_context(MemberDuesContext::from_member(member, payment_history), today)
}

fn evaluate_context(
    context: Result<MemberDuesContext, ContextError>,
    today: &NaiveDate,
) -> DuesStatus {
    match context {
        Ok(context) => context.evaluate(today),
        Err(error) => {
            warn!("Can't evaluate dues, no notice will be shown. [error: {error}]");
            DuesStatus::Paid
        }
    }
}
