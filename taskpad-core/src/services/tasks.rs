//! Task store - the per-session task list and its mutations
//!
//! All state here is in-memory only and scoped to one signed-in session;
//! nothing is persisted, and logout discards the whole store.

use log::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{Subtask, Task};

/// Ordered collection of tasks addressed by positional index.
///
/// Indices are not stable identifiers: deleting a task shifts every later
/// index down by one. Index-addressed operations fail fast with
/// `Error::NotFound` on an out-of-range index rather than clamping.
///
/// `revision` increments on every successful mutation, giving callers a
/// cheap change-detection handle without comparing task contents.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    revision: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task.
    ///
    /// Whitespace-only titles are a silent no-op returning `false`.
    /// Accepted titles are stored as typed, untrimmed.
    pub fn add_task(&mut self, title: &str) -> bool {
        if title.trim().is_empty() {
            return false;
        }
        self.tasks.push(Task::new(title));
        self.bump();
        debug!("event=task_added tasks={}", self.tasks.len());
        true
    }

    /// Flip the `done` flag on the task at `index`.
    pub fn toggle_task(&mut self, index: usize) -> Result<()> {
        let task = self.task_mut(index)?;
        task.done = !task.done;
        self.bump();
        Ok(())
    }

    /// Remove and return the task at `index`; later indices shift down.
    pub fn delete_task(&mut self, index: usize) -> Result<Task> {
        self.check_task_index(index)?;
        let task = self.tasks.remove(index);
        self.bump();
        debug!("event=task_deleted tasks={}", self.tasks.len());
        Ok(task)
    }

    /// Replace the title of the task at `index` in place. No trimming,
    /// no validation: an empty title is accepted here, unlike at creation.
    pub fn edit_task_title(&mut self, index: usize, new_title: &str) -> Result<()> {
        let task = self.task_mut(index)?;
        task.title = new_title.to_string();
        self.bump();
        Ok(())
    }

    /// Append a subtask to the task at `task_index`.
    ///
    /// A bad task index is an error; a whitespace-only title is a silent
    /// no-op returning `Ok(false)`.
    pub fn add_subtask(&mut self, task_index: usize, title: &str) -> Result<bool> {
        self.check_task_index(task_index)?;
        if title.trim().is_empty() {
            return Ok(false);
        }
        self.tasks[task_index].subtasks.push(Subtask::new(title));
        self.bump();
        Ok(true)
    }

    /// Flip the `done` flag on the addressed subtask.
    pub fn toggle_subtask(&mut self, task_index: usize, sub_index: usize) -> Result<()> {
        let sub = self.subtask_mut(task_index, sub_index)?;
        sub.done = !sub.done;
        self.bump();
        Ok(())
    }

    /// Remove and return the addressed subtask; later subtask indices in
    /// that task shift down. Other tasks are untouched.
    pub fn delete_subtask(&mut self, task_index: usize, sub_index: usize) -> Result<Subtask> {
        self.subtask_mut(task_index, sub_index)?;
        let sub = self.tasks[task_index].subtasks.remove(sub_index);
        self.bump();
        Ok(sub)
    }

    /// Replace the addressed subtask's title in place.
    pub fn edit_subtask_title(
        &mut self,
        task_index: usize,
        sub_index: usize,
        new_title: &str,
    ) -> Result<()> {
        let sub = self.subtask_mut(task_index, sub_index)?;
        sub.title = new_title.to_string();
        self.bump();
        Ok(())
    }

    /// Tasks in order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Change-detection counter: bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }

    fn check_task_index(&self, index: usize) -> Result<()> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(Error::not_found(format!("no task at index {index}")))
        }
    }

    fn task_mut(&mut self, index: usize) -> Result<&mut Task> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or_else(|| Error::not_found(format!("no task at index {index} (len {len})")))
    }

    fn subtask_mut(&mut self, task_index: usize, sub_index: usize) -> Result<&mut Subtask> {
        let task = self.task_mut(task_index)?;
        let len = task.subtasks.len();
        task.subtasks.get_mut(sub_index).ok_or_else(|| {
            Error::not_found(format!("no subtask at index {sub_index} (len {len})"))
        })
    }
}
