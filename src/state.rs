use crate::client::VerifyClient;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub api: VerifyClient,
}
