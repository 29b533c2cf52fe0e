//! `/meetings` endpoints.

use tracing::info;

use yafue_shared::{CreateMeetingData, Meeting, UpdateMeetingData};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn create_meeting(&self, data: &CreateMeetingData) -> Result<Meeting> {
        let meeting: Meeting = self.post(&["meetings"], data).await?;
        info!(
            meeting_id = %meeting.id,
            participants = meeting.users.len(),
            "Meeting created"
        );
        Ok(meeting)
    }

    pub async fn update_meeting(&self, id: &str, data: &UpdateMeetingData) -> Result<Meeting> {
        self.put(&["meetings", id], data).await
    }

    pub async fn delete_meeting(&self, id: &str) -> Result<Meeting> {
        self.delete(&["meetings", id]).await
    }

    pub async fn get_meeting_by_id(&self, id: &str) -> Result<Meeting> {
        self.get(&["meetings", id]).await
    }

    pub async fn get_meetings_by_user_id(&self, user_id: &str) -> Result<Vec<Meeting>> {
        self.get(&["meetings", "user", user_id]).await
    }

    pub async fn get_meetings_by_group_id(&self, group_id: &str) -> Result<Vec<Meeting>> {
        self.get(&["meetings", "group", group_id]).await
    }
}
