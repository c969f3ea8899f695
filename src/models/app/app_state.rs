use std::sync::Arc;

use crate::config::Config;
use crate::db::AppointmentStore;
use crate::utils::whatsapp::Messenger;

/// Process-wide handles, built once at startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn AppointmentStore>,
    pub messenger: Arc<dyn Messenger>,
}
