use crate::query::{ListOnCallShiftOptions, ListScheduleOptions};
use crate::types::{
    CreateOnCallShiftOptions, CreateScheduleOptions, OnCallShift, PaginatedResponse, Schedule,
    UpdateOnCallShiftOptions, UpdateScheduleOptions,
};
use crate::{Client, Result};

use super::{collection_path, member_path};

const SCHEDULES: &str = "schedules";
const ON_CALL_SHIFTS: &str = "on_call_shifts";

pub struct ScheduleService<'a> {
    client: &'a Client,
}

impl<'a> ScheduleService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, options: &ListScheduleOptions) -> Result<PaginatedResponse<Schedule>> {
        self.client.get(&collection_path(SCHEDULES), options).await
    }

    pub async fn get(&self, id: &str) -> Result<Schedule> {
        self.client.get_one(&member_path(SCHEDULES, id)).await
    }

    pub async fn create(&self, options: &CreateScheduleOptions) -> Result<Schedule> {
        self.client.post(&collection_path(SCHEDULES), options).await
    }

    pub async fn update(&self, id: &str, options: &UpdateScheduleOptions) -> Result<Schedule> {
        self.client.put(&member_path(SCHEDULES, id), options).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&member_path(SCHEDULES, id)).await
    }
}

pub struct OnCallShiftService<'a> {
    client: &'a Client,
}

impl<'a> OnCallShiftService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: &ListOnCallShiftOptions,
    ) -> Result<PaginatedResponse<OnCallShift>> {
        self.client.get(&collection_path(ON_CALL_SHIFTS), options).await
    }

    pub async fn get(&self, id: &str) -> Result<OnCallShift> {
        self.client.get_one(&member_path(ON_CALL_SHIFTS, id)).await
    }

    pub async fn create(&self, options: &CreateOnCallShiftOptions) -> Result<OnCallShift> {
        self.client.post(&collection_path(ON_CALL_SHIFTS), options).await
    }

    pub async fn update(
        &self,
        id: &str,
        options: &UpdateOnCallShiftOptions,
    ) -> Result<OnCallShift> {
        self.client.put(&member_path(ON_CALL_SHIFTS, id), options).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&member_path(ON_CALL_SHIFTS, id)).await
    }
}
