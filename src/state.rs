use crate::services::crm::CrmClient;

pub(crate) struct AppState {
    pub(crate) crm: CrmClient
}
