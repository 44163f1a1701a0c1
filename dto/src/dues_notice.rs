use crate::dues_status::DuesStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Danger,
}

/// Banner to display to a member about their dues.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct DuesNotice {
    level: NoticeLevel,
    message: String,
}

impl DuesNotice {
    pub fn new(level: NoticeLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Pick the banner matching a status.
    /// Statuses that should not be shown have no notice.
    pub fn from_status(status: &DuesStatus) -> Option<Self> {
        if !status.show() {
            return None;
        }

        let notice = match status {
            DuesStatus::Paid => return None,
            DuesStatus::Pending { .. } => DuesNotice::new(
                NoticeLevel::Info,
                "Your payment proof for this month is being reviewed.".to_owned(),
            ),
            DuesStatus::Due { days: 0 } => DuesNotice::new(
                NoticeLevel::Warning,
                "Your monthly dues are due today.".to_owned(),
            ),
            DuesStatus::Due { days } if *days > 0 => DuesNotice::new(
                NoticeLevel::Warning,
                format!("Your monthly dues are due in {}.", pluralize_days(*days)),
            ),
            DuesStatus::Due { days } => DuesNotice::new(
                NoticeLevel::Danger,
                format!(
                    "Your monthly dues are overdue by {}.",
                    pluralize_days(days.abs())
                ),
            ),
        };

        Some(notice)
    }
}

fn pluralize_days(days: i64) -> String {
    if days == 1 {
        "1 day".to_owned()
    } else {
        format!("{days} days")
    }
}
