use crate::backend::configuration::BackendConfiguration;
use crate::backend::error::Result;
use crate::backend::get_json;
use dto::member_record::MemberRecord;
use reqwest::Client;

pub async fn retrieve_member(
    client: &Client,
    configuration: &BackendConfiguration,
    member_id: &str,
) -> Result<MemberRecord> {
    get_json(client, configuration.member_url(member_id)?).await
}
