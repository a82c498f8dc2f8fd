// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory task collection with a derived, filtered and sorted view.

use std::cmp::Ordering;

use uuid::Uuid;

use tusk_model::Task;

/// How the view list orders tasks within each completion group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// No ordering; keeps the current relative (insertion) order.
    #[default]
    None,
    /// Newest first, by creation timestamp.
    ByDate,
    /// Most important first.
    ByImportance,
}

/// The local task collection.
///
/// Tasks keep their insertion order (which after a fetch is the server's
/// list order) and ids are unique: inserting a duplicate id is ignored.
/// The derived view is rebuilt on every mutation and on every toggle of
/// the sort mode or completed-visibility; completed tasks always sort
/// after incomplete ones, and are excluded entirely while hidden.
#[derive(Debug, Clone)]
pub struct LocalIndex {
    tasks: Vec<Task>,
    view: Vec<Task>,
    sort: SortOption,
    show_completed: bool,
}

impl LocalIndex {
    /// Creates an empty index showing completed tasks, unsorted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            view: Vec::new(),
            sort: SortOption::None,
            show_completed: true,
        }
    }

    /// Adds a task; a duplicate id is ignored.
    pub fn insert(&mut self, task: Task) {
        if self.contains(&task.id) {
            tracing::debug!(id = %task.id, "duplicate id, insert ignored");
            return;
        }
        self.tasks.push(task);
        self.rebuild();
    }

    /// Replaces the task with the same id, or appends it.
    pub fn upsert(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task,
            None => self.tasks.push(task),
        }
        self.rebuild();
    }

    /// Removes a task by id, returning it if it was present.
    pub fn remove(&mut self, id: &Uuid) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| &t.id == id)?;
        let task = self.tasks.remove(pos);
        self.rebuild();
        Some(task)
    }

    /// Replaces the whole collection, e.g. with a fetched server list.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.rebuild();
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Whether a task with this id is present.
    #[must_use]
    pub fn contains(&self, id: &Uuid) -> bool {
        self.get(id).is_some()
    }

    /// The full collection in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The filtered, sorted view list.
    #[must_use]
    pub fn view(&self) -> &[Task] {
        &self.view
    }

    /// Number of tasks, completed ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks, regardless of visibility.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// The current sort mode.
    #[must_use]
    pub fn sort(&self) -> SortOption {
        self.sort
    }

    /// Switches the sort mode and rebuilds the view.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.rebuild();
    }

    /// Whether completed tasks are visible.
    #[must_use]
    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    /// Toggles completed-task visibility and rebuilds the view.
    pub fn set_show_completed(&mut self, show: bool) {
        self.show_completed = show;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let mut view: Vec<Task> = if self.show_completed {
            self.tasks.clone()
        } else {
            self.tasks.iter().filter(|t| !t.done).cloned().collect()
        };

        // Stable sort: `None` and ties keep their relative order.
        let sort = self.sort;
        view.sort_by(|a, b| {
            a.done.cmp(&b.done).then_with(|| match sort {
                SortOption::ByDate => b.created_at.cmp(&a.created_at),
                SortOption::ByImportance => b.importance.cmp(&a.importance),
                SortOption::None => Ordering::Equal,
            })
        });

        self.view = view;
    }
}

impl Default for LocalIndex {
    fn default() -> Self {
        Self::new()
    }
}
