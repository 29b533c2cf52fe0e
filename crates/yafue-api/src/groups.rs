//! `/groups` endpoints. Membership changes are resolved server-side; the
//! client only triggers them and gets the updated group back.

use tracing::info;

use yafue_shared::{CreateGroupData, Group, GroupMembershipRequest, UpdateGroupData};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn create_group(&self, data: &CreateGroupData) -> Result<Group> {
        let group: Group = self.post(&["groups"], data).await?;
        info!(group_id = %group.id, "Group created");
        Ok(group)
    }

    pub async fn get_groups_by_user_id(&self, user_id: &str) -> Result<Vec<Group>> {
        self.get(&["groups", "user", user_id]).await
    }

    pub async fn get_group_by_id(&self, id: &str) -> Result<Group> {
        self.get(&["groups", id]).await
    }

    pub async fn invite_user_to_group(&self, group_id: &str, user_id: &str) -> Result<Group> {
        let body = GroupMembershipRequest {
            group_id: group_id.to_string(),
            user_id: user_id.to_string(),
        };
        self.patch(&["groups", "invite"], &body).await
    }

    pub async fn remove_user_from_group(&self, group_id: &str, user_id: &str) -> Result<Group> {
        let body = GroupMembershipRequest {
            group_id: group_id.to_string(),
            user_id: user_id.to_string(),
        };
        self.patch(&["groups", "remove"], &body).await
    }

    pub async fn delete_group(&self, id: &str) -> Result<Group> {
        self.delete(&["groups", id]).await
    }

    pub async fn update_group(&self, id: &str, data: &UpdateGroupData) -> Result<Group> {
        self.put(&["groups", id], data).await
    }
}
