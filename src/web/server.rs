use crate::tools::env_args::retrieve_arg_value;
use crate::web::api::server::ApiServer;
use rocket::{Build, Rocket};

const PORT_ENV_ARG: &str = "--port";
const DEFAULT_PORT: u16 = 8000;

pub trait Server {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build>;
}

pub fn build_server() -> Rocket<Build> {
    let port = get_port();
    let rocket_build =
        rocket::build().configure(rocket::Config::figment().merge(("port", port)));

    let servers: Vec<Box<dyn Server>> = vec![Box::new(ApiServer::new())];
    servers
        .iter()
        .fold(rocket_build, |rocket_build, server| server.configure(rocket_build))
}

fn get_port() -> u16 {
    retrieve_arg_value(PORT_ENV_ARG)
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::env_args::with_env_args;
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;

    #[test]
    fn should_get_custom_port() {
        let expected_port = 10;
        let port = with_env_args(vec![format!("{PORT_ENV_ARG}={expected_port}")], get_port);

        assert_eq!(expected_port, port);
    }

    #[test]
    fn should_get_default_port_when_wrong_type() {
        let port = with_env_args(vec![format!("{PORT_ENV_ARG}=doe")], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[test]
    fn should_get_default_port_when_no_value() {
        let port = with_env_args(vec![format!("{PORT_ENV_ARG}=")], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[test]
    fn should_get_default_port_when_no_arg() {
        let port = with_env_args(vec![], get_port);

        assert_eq!(DEFAULT_PORT, port);
    }

    #[async_test]
    async fn should_mount_api_routes() {
        let client = Client::tracked(build_server()).await.unwrap();

        let response = client.get("/api/unknown").dispatch().await;
        assert_eq!(Status::NotFound, response.status());

        let response = client
            .post("/api/dues/evaluate")
            .header(rocket::http::ContentType::JSON)
            .body(r#"{"today": "2024-02-10"}"#)
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
    }
}
