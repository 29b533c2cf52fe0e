//! Meetings ("juntadas") of the logged-in user and the creation draft.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use yafue_api::MeetingService;
use yafue_shared::constants::DEFAULT_CURRENCY_ID;
use yafue_shared::{CreateMeetingData, Meeting, PayType, UserWithAmount};

use crate::error::{ClientError, Result};
use crate::events::{EventBus, StoreEvent};
use crate::stores::lock;

/// Point-in-time copy of the meeting store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingState {
    pub meetings: Vec<Meeting>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_meeting: Option<Meeting>,
    pub create_meeting_draft: Option<CreateMeetingData>,
}

/// Partial update for the creation draft. `None` fields keep their value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeetingDraftPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub place: Option<String>,
    pub pay_type: Option<PayType>,
    pub amount: Option<f64>,
    pub currency_id: Option<String>,
    pub users: Option<Vec<UserWithAmount>>,
    pub expense_description: Option<String>,
}

impl MeetingDraftPatch {
    fn apply(self, draft: &mut CreateMeetingData) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(date) = self.date {
            draft.date = date;
        }
        if let Some(place) = self.place {
            draft.place = place;
        }
        if let Some(pay_type) = self.pay_type {
            draft.pay_type = pay_type;
        }
        if let Some(amount) = self.amount {
            draft.amount = amount;
        }
        if let Some(currency_id) = self.currency_id {
            draft.currency_id = currency_id;
        }
        if let Some(users) = self.users {
            draft.users = users;
        }
        if let Some(expense_description) = self.expense_description {
            draft.expense_description = expense_description;
        }
    }
}

fn initial_draft(now: DateTime<Utc>) -> CreateMeetingData {
    CreateMeetingData {
        name: String::new(),
        description: String::new(),
        date: now,
        place: String::new(),
        pay_type: PayType::Equal,
        amount: 0.0,
        currency_id: DEFAULT_CURRENCY_ID.to_string(),
        users: Vec::new(),
        expense_description: String::new(),
    }
}

/// `loading` stays set while at least one async action is in flight.
#[derive(Default)]
pub struct MeetingStore {
    state: Mutex<MeetingState>,
    /// Async actions started and not yet finished. Only changed under `state`.
    in_flight: AtomicUsize,
    events: EventBus,
}

/// Marks one async action as in flight. Dropping it, on completion or when
/// the action's future is cancelled, clears `loading` once none remain.
struct InFlight<'a> {
    store: &'a MeetingStore,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        {
            let mut state = lock(&self.store.state);
            let left = self.store.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            state.loading = left > 0;
        }
        self.store.emit_meetings();
    }
}

impl MeetingStore {
    pub fn new(events: EventBus) -> Self {
        Self {
            state: Mutex::new(MeetingState::default()),
            in_flight: AtomicUsize::new(0),
            events,
        }
    }

    pub fn snapshot(&self) -> MeetingState {
        lock(&self.state).clone()
    }

    pub fn loading(&self) -> bool {
        lock(&self.state).loading
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error.clone()
    }

    pub fn selected_meeting(&self) -> Option<Meeting> {
        lock(&self.state).selected_meeting.clone()
    }

    pub fn create_meeting_draft(&self) -> Option<CreateMeetingData> {
        lock(&self.state).create_meeting_draft.clone()
    }

    // -- Synchronous actions --

    pub fn set_meetings(&self, meetings: Vec<Meeting>) {
        lock(&self.state).meetings = meetings;
        self.emit_meetings();
    }

    pub fn add_meeting(&self, meeting: Meeting) {
        lock(&self.state).meetings.push(meeting);
        self.emit_meetings();
    }

    pub fn set_selected_meeting(&self, meeting: Option<Meeting>) {
        lock(&self.state).selected_meeting = meeting;
    }

    pub fn set_create_meeting_draft(&self, draft: Option<CreateMeetingData>) {
        lock(&self.state).create_meeting_draft = draft;
        self.emit_draft();
    }

    /// Merge `patch` into the draft, starting a fresh one if there is none.
    pub fn update_create_meeting_draft(&self, patch: MeetingDraftPatch) {
        {
            let mut state = lock(&self.state);
            let draft = state
                .create_meeting_draft
                .get_or_insert_with(|| initial_draft(Utc::now()));
            patch.apply(draft);
        }
        self.emit_draft();
    }

    pub fn clear_meeting_draft(&self) {
        self.set_create_meeting_draft(None);
    }

    /// Forget everything, e.g. on logout. Actions still in flight keep
    /// `loading` set until they finish.
    pub fn reset(&self) {
        {
            let mut state = lock(&self.state);
            *state = MeetingState::default();
            state.loading = self.in_flight.load(Ordering::SeqCst) > 0;
        }
        self.emit_meetings();
        self.emit_draft();
    }

    // -- Async actions --

    /// Create a meeting on the backend and append it to the list.
    ///
    /// The returned meeting is appended only if no meeting with the same id
    /// is already present. Failures are also kept in `error` for the views.
    pub async fn create_new_meeting<M: MeetingService>(
        &self,
        service: &M,
        data: CreateMeetingData,
    ) -> Result<Meeting> {
        let in_flight = self.begin();
        debug!(name = %data.name, "Creating meeting");

        let result = service.create_meeting(&data).await;

        let outcome = {
            let mut state = lock(&self.state);
            match result {
                Ok(meeting) if state.meetings.iter().any(|m| m.id == meeting.id) => {
                    let err = ClientError::DuplicateMeeting(meeting.id);
                    state.error = Some(err.to_string());
                    Err(err)
                }
                Ok(meeting) => {
                    state.meetings.push(meeting.clone());
                    state.create_meeting_draft = None;
                    Ok(meeting)
                }
                Err(e) => {
                    let err = ClientError::from(e);
                    state.error = Some(err.to_string());
                    Err(err)
                }
            }
        };

        drop(in_flight);

        match &outcome {
            Ok(meeting) => {
                info!(meeting_id = %meeting.id, "Meeting created");
                self.emit_draft();
            }
            Err(e) => warn!(error = %e, "Failed to create meeting"),
        }
        outcome
    }

    /// Replace the list with the meetings the backend has for `user_id`.
    pub async fn fetch_user_meetings<M: MeetingService>(
        &self,
        service: &M,
        user_id: &str,
    ) -> Result<()> {
        let in_flight = self.begin();
        debug!(user_id, "Fetching meetings");

        let result = service.get_meetings_by_user_id(user_id).await;

        let outcome = {
            let mut state = lock(&self.state);
            match result {
                Ok(meetings) => {
                    debug!(user_id, count = meetings.len(), "Meetings fetched");
                    state.meetings = meetings;
                    Ok(())
                }
                Err(e) => {
                    let err = ClientError::from(e);
                    state.error = Some(err.to_string());
                    Err(err)
                }
            }
        };

        drop(in_flight);

        if let Err(e) = &outcome {
            warn!(user_id, error = %e, "Failed to fetch meetings");
        }
        outcome
    }

    // -- Selectors --

    pub fn all_meetings(&self) -> Vec<Meeting> {
        lock(&self.state).meetings.clone()
    }

    pub fn upcoming_meetings(&self) -> Vec<Meeting> {
        self.upcoming_meetings_at(Utc::now())
    }

    pub fn past_meetings(&self) -> Vec<Meeting> {
        self.past_meetings_at(Utc::now())
    }

    /// Meetings after `now`, soonest first.
    pub fn upcoming_meetings_at(&self, now: DateTime<Utc>) -> Vec<Meeting> {
        let mut upcoming: Vec<Meeting> = lock(&self.state)
            .meetings
            .iter()
            .filter(|m| m.is_upcoming(now))
            .cloned()
            .collect();
        upcoming.sort_by_key(|m| m.date);
        upcoming
    }

    /// Meetings at or before `now`, most recent first.
    pub fn past_meetings_at(&self, now: DateTime<Utc>) -> Vec<Meeting> {
        let mut past: Vec<Meeting> = lock(&self.state)
            .meetings
            .iter()
            .filter(|m| !m.is_upcoming(now))
            .cloned()
            .collect();
        past.sort_by_key(|m| std::cmp::Reverse(m.date));
        past
    }

    fn begin(&self) -> InFlight<'_> {
        {
            let mut state = lock(&self.state);
            self.in_flight.fetch_add(1, Ordering::SeqCst);
            state.loading = true;
            state.error = None;
        }
        self.emit_meetings();
        InFlight { store: self }
    }

    fn emit_meetings(&self) {
        let (count, loading) = {
            let state = lock(&self.state);
            (state.meetings.len(), state.loading)
        };
        self.events
            .emit(StoreEvent::MeetingsChanged { count, loading });
    }

    fn emit_draft(&self) {
        let has_draft = lock(&self.state).create_meeting_draft.is_some();
        self.events.emit(StoreEvent::MeetingDraftChanged { has_draft });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{meeting, meeting_data, meeting_from};
    use chrono::{Duration, TimeZone};
    use std::sync::Arc;
    use tokio::sync::Notify;
    use yafue_api::ApiError;

    /// Backend double that numbers created meetings `m1`, `m2`, ...
    #[derive(Default)]
    struct FakeMeetings {
        created: AtomicUsize,
        fixed_id: Option<String>,
        fail: bool,
        listed: Vec<Meeting>,
    }

    fn server_error(path: &str) -> ApiError {
        ApiError::Status {
            status: 500,
            path: path.to_string(),
            body: String::new(),
        }
    }

    impl MeetingService for FakeMeetings {
        async fn create_meeting(&self, data: &CreateMeetingData) -> yafue_api::Result<Meeting> {
            if self.fail {
                return Err(server_error("/meetings"));
            }
            let n = self.created.fetch_add(1, Ordering::SeqCst) + 1;
            let id = self.fixed_id.clone().unwrap_or_else(|| format!("m{n}"));
            Ok(meeting_from(&id, data))
        }

        async fn get_meetings_by_user_id(&self, _user_id: &str) -> yafue_api::Result<Vec<Meeting>> {
            if self.fail {
                return Err(server_error("/meetings/user/u1"));
            }
            Ok(self.listed.clone())
        }
    }

    /// Records what the store looked like while the request was in flight.
    struct Observer {
        store: Arc<MeetingStore>,
        seen_loading: AtomicUsize,
    }

    impl MeetingService for Observer {
        async fn create_meeting(&self, data: &CreateMeetingData) -> yafue_api::Result<Meeting> {
            if self.store.loading() && self.store.error().is_none() {
                self.seen_loading.fetch_add(1, Ordering::SeqCst);
            }
            tokio::task::yield_now().await;
            Ok(meeting_from("m1", data))
        }

        async fn get_meetings_by_user_id(&self, _user_id: &str) -> yafue_api::Result<Vec<Meeting>> {
            Ok(Vec::new())
        }
    }

    /// Lists meetings for `u1` right away; other users wait for `release`.
    #[derive(Default)]
    struct Gated {
        release: Notify,
    }

    impl MeetingService for Gated {
        async fn create_meeting(&self, data: &CreateMeetingData) -> yafue_api::Result<Meeting> {
            Ok(meeting_from("m1", data))
        }

        async fn get_meetings_by_user_id(&self, user_id: &str) -> yafue_api::Result<Vec<Meeting>> {
            if user_id != "u1" {
                self.release.notified().await;
            }
            Ok(Vec::new())
        }
    }

    fn t(days: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap() + Duration::days(days)
    }

    #[tokio::test]
    async fn test_create_appends_and_clears_draft() {
        let store = MeetingStore::default();
        let service = FakeMeetings::default();
        store.update_create_meeting_draft(MeetingDraftPatch {
            name: Some("Asado".into()),
            ..Default::default()
        });

        let tomorrow = Utc::now() + Duration::days(1);
        let created = store
            .create_new_meeting(&service, meeting_data("Asado", tomorrow))
            .await
            .unwrap();

        assert_eq!(created.name, "Asado");
        assert_eq!(store.all_meetings(), vec![created.clone()]);
        assert_eq!(store.upcoming_meetings(), vec![created]);
        assert!(store.past_meetings().is_empty());
        assert!(store.create_meeting_draft().is_none());
        assert!(!store.loading());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn test_created_ids_are_unique() {
        let store = MeetingStore::default();
        let service = FakeMeetings::default();

        for name in ["Asado", "Pizza", "Birra"] {
            store
                .create_new_meeting(&service, meeting_data(name, t(1)))
                .await
                .unwrap();
        }

        let mut ids: Vec<String> = store.all_meetings().into_iter().map(|m| m.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_id_is_not_appended() {
        let store = MeetingStore::default();
        let service = FakeMeetings {
            fixed_id: Some("m1".into()),
            ..Default::default()
        };

        store
            .create_new_meeting(&service, meeting_data("Asado", t(1)))
            .await
            .unwrap();
        let err = store
            .create_new_meeting(&service, meeting_data("Otra", t(2)))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::DuplicateMeeting(ref id) if id == "m1"));
        assert_eq!(store.all_meetings().len(), 1);
        assert!(store.error().is_some());
    }

    #[tokio::test]
    async fn test_failed_create_keeps_list() {
        let store = MeetingStore::default();
        store.set_meetings(vec![meeting("m1", t(-1))]);
        let before = store.all_meetings();

        let service = FakeMeetings {
            fail: true,
            ..Default::default()
        };
        let result = store
            .create_new_meeting(&service, meeting_data("Asado", t(1)))
            .await;

        assert!(result.is_err());
        assert_eq!(store.all_meetings(), before);
        assert!(!store.loading());
        assert!(store.error().is_some());
    }

    #[tokio::test]
    async fn test_loading_visible_while_in_flight() {
        let store = Arc::new(MeetingStore::default());
        store.set_meetings(vec![]);
        let observer = Observer {
            store: store.clone(),
            seen_loading: AtomicUsize::new(0),
        };

        store
            .create_new_meeting(&observer, meeting_data("Asado", t(1)))
            .await
            .unwrap();

        assert_eq!(observer.seen_loading.load(Ordering::SeqCst), 1);
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn test_loading_held_until_last_action_finishes() {
        let store = MeetingStore::default();
        let gated = Gated::default();

        let (slow, loading_after_fast) = tokio::join!(
            store.fetch_user_meetings(&gated, "u2"),
            async {
                store.fetch_user_meetings(&gated, "u1").await.unwrap();
                let loading = store.loading();
                gated.release.notify_one();
                loading
            }
        );

        slow.unwrap();
        assert!(loading_after_fast);
        assert!(!store.loading());
    }

    #[tokio::test]
    async fn test_cancelled_fetch_clears_loading() {
        let store = MeetingStore::default();
        let gated = Gated::default();

        let fetch = store.fetch_user_meetings(&gated, "u2");
        let timed_out = tokio::time::timeout(std::time::Duration::from_millis(20), fetch).await;

        assert!(timed_out.is_err());
        assert!(!store.loading());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn test_fetch_replaces_list() {
        let store = MeetingStore::default();
        store.set_meetings(vec![meeting("old", t(-5))]);
        let service = FakeMeetings {
            listed: vec![meeting("m1", t(1)), meeting("m2", t(-1))],
            ..Default::default()
        };

        store.fetch_user_meetings(&service, "u1").await.unwrap();

        let ids: Vec<String> = store.all_meetings().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_records_error() {
        let store = MeetingStore::default();
        store.set_meetings(vec![meeting("m1", t(1))]);
        let service = FakeMeetings {
            fail: true,
            ..Default::default()
        };

        assert!(store.fetch_user_meetings(&service, "u1").await.is_err());
        assert_eq!(store.all_meetings().len(), 1);
        assert!(store.error().unwrap().contains("500"));
    }

    #[test]
    fn test_partition_and_ordering() {
        let store = MeetingStore::default();
        let now = t(0);
        store.set_meetings(vec![
            meeting("late", t(30)),
            meeting("old", t(-30)),
            meeting("now", now),
            meeting("soon", t(1)),
            meeting("recent", t(-1)),
        ]);

        let upcoming: Vec<String> = store.upcoming_meetings_at(now).into_iter().map(|m| m.id).collect();
        let past: Vec<String> = store.past_meetings_at(now).into_iter().map(|m| m.id).collect();

        assert_eq!(upcoming, vec!["soon", "late"]);
        // a meeting exactly at `now` is past
        assert_eq!(past, vec!["now", "recent", "old"]);
        assert_eq!(upcoming.len() + past.len(), store.all_meetings().len());
    }

    #[test]
    fn test_draft_patch_merges() {
        let store = MeetingStore::default();
        store.update_create_meeting_draft(MeetingDraftPatch {
            name: Some("Asado".into()),
            ..Default::default()
        });
        store.update_create_meeting_draft(MeetingDraftPatch {
            place: Some("Quilmes".into()),
            pay_type: Some(PayType::Assign),
            ..Default::default()
        });

        let draft = store.create_meeting_draft().unwrap();
        assert_eq!(draft.name, "Asado");
        assert_eq!(draft.place, "Quilmes");
        assert_eq!(draft.pay_type, PayType::Assign);
        assert_eq!(draft.currency_id, "1");
        assert_eq!(draft.amount, 0.0);

        store.clear_meeting_draft();
        assert!(store.create_meeting_draft().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let store = MeetingStore::default();
        store.set_meetings(vec![meeting("m1", t(1))]);
        store.set_selected_meeting(Some(meeting("m1", t(1))));
        store.update_create_meeting_draft(MeetingDraftPatch::default());

        store.reset();
        assert_eq!(store.snapshot(), MeetingState::default());
    }
}
