pub mod dates;
pub mod dues_evaluation_request;
pub mod dues_notice;
pub mod dues_report;
pub mod dues_status;
pub mod identifier;
pub mod member_record;
pub mod payment_proof;
