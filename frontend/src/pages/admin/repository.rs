use crate::api::{ApiClient, ApiError, UserInfo};
use std::rc::Rc;

#[derive(Clone)]
pub struct IdentityRepository {
    client: Rc<ApiClient>,
}

impl IdentityRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_user_info(&self) -> Result<Option<UserInfo>, ApiError> {
        self.client.get_user_info().await
    }
}
