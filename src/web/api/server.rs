use crate::backend::configuration::BackendConfiguration;
use crate::web::api::dues_controller;
use crate::web::server::Server;
use log::info;
use rocket::{Build, Rocket};

pub struct ApiServer {}

impl ApiServer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        let configuration = BackendConfiguration::from_args();
        info!("Using backend [url: {}]", configuration.base_url());

        rocket_build.manage(configuration).mount(
            "/api/",
            routes![dues_controller::member_dues, dues_controller::evaluate_dues],
        )
    }
}
