// File: src/store.rs
use crate::context::AppContext;
use crate::error::ViewError;
use crate::list;
use crate::model::{SpecialDay, SpecialDayView};
use crate::storage::LocalStorage;
use anyhow::Result;
use chrono::NaiveDate;

/// The user's ordered list of special days, backed by the persisted
/// store.
///
/// All edits go through the pure list primitives and replace the
/// vector wholesale, so an edit can never half-apply.
#[derive(Debug, Clone, Default)]
pub struct SpecialDayStore {
    days: Vec<SpecialDay>,
}

impl SpecialDayStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted list through the given context.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        Ok(Self {
            days: LocalStorage::load(ctx)?,
        })
    }

    /// Persist the current list through the given context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        LocalStorage::save(ctx, &self.days)
    }

    pub fn days(&self) -> &[SpecialDay] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Add a day, replacing any existing entry with the same name.
    /// The added day always lands at the end of the list.
    pub fn add(&mut self, day: SpecialDay) {
        self.days = list::upsert_by_key(&self.days, |d| d.name.clone(), day);
    }

    /// Remove the day at `index`; out of bounds is a no-op.
    pub fn remove(&mut self, index: usize) {
        self.days = list::remove_at(&self.days, index);
    }

    /// Move the day at `index` one position up; the top row stays put.
    pub fn move_up(&mut self, index: usize) {
        self.days = list::swap(&self.days, index as isize - 1, index as isize);
    }

    /// Move the day at `index` one position down; the bottom row stays
    /// put.
    pub fn move_down(&mut self, index: usize) {
        self.days = list::swap(&self.days, index as isize, index as isize + 1);
    }

    /// Build display rows for every day as of `today`, in list order.
    pub fn views(&self, today: NaiveDate) -> Result<Vec<SpecialDayView>, ViewError> {
        self.days
            .iter()
            .map(|day| SpecialDayView::build(day, today))
            .collect()
    }
}
