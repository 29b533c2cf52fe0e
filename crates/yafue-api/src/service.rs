use yafue_shared::{CreateMeetingData, Meeting};

use crate::client::ApiClient;
use crate::error::Result;

/// The slice of the backend the meeting store depends on.
///
/// [`ApiClient`] is the production implementation; tests substitute fakes.
#[allow(async_fn_in_trait)]
pub trait MeetingService {
    async fn create_meeting(&self, data: &CreateMeetingData) -> Result<Meeting>;

    async fn get_meetings_by_user_id(&self, user_id: &str) -> Result<Vec<Meeting>>;
}

impl MeetingService for ApiClient {
    async fn create_meeting(&self, data: &CreateMeetingData) -> Result<Meeting> {
        ApiClient::create_meeting(self, data).await
    }

    async fn get_meetings_by_user_id(&self, user_id: &str) -> Result<Vec<Meeting>> {
        ApiClient::get_meetings_by_user_id(self, user_id).await
    }
}
