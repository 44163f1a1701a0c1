use crate::dues_notice::DuesNotice;
use crate::dues_status::DuesStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// What the front end receives: the raw status, plus the banner to display if any.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct DuesReport {
    status: DuesStatus,
    notice: Option<DuesNotice>,
}

impl From<DuesStatus> for DuesReport {
    fn from(status: DuesStatus) -> Self {
        let notice = DuesNotice::from_status(&status);
        Self { status, notice }
    }
}
