//! Lists and role-based list discovery.
//!
//! Boards name their columns freely ("To Do", "Doing", "✅ Done"), so the
//! engine never addresses lists by literal name. Each list is classified
//! into a [`ListRole`] by matching its name against a configurable synonym
//! table, and all later operations address lists through the resulting
//! [`ListDirectory`].

use super::{ListId, ParseListRoleError, UnconfiguredListError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow role a board list plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListRole {
    /// Queued work that has not started.
    Todo,
    /// Work currently underway.
    InProgress,
    /// Work awaiting review.
    Review,
    /// Finished work.
    Done,
}

impl ListRole {
    /// All roles in workflow order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for ListRole {
    type Error = ParseListRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseListRoleError(value.to_owned())),
        }
    }
}

impl fmt::Display for ListRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Local mirror of a board list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Remote list identifier.
    pub id: ListId,
    /// List name as displayed on the board.
    pub name: String,
}

impl List {
    /// Creates a list mirror from remote data.
    #[must_use]
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Synonym table used to classify list names into roles.
///
/// Matching is case-insensitive and tolerates decoration around the
/// synonym: a synonym matches when its words appear consecutively among
/// the words of the list name, so "✅ Done" and "Work In Progress" both
/// classify. Substring matching inside a word is deliberately not
/// performed ("abandoned" must not classify as done).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoleNames {
    todo: Vec<String>,
    in_progress: Vec<String>,
    review: Vec<String>,
    done: Vec<String>,
}

impl ListRoleNames {
    /// Replaces the synonyms recognized for one role.
    #[must_use]
    pub fn with_names(
        mut self,
        role: ListRole,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let owned: Vec<String> = names.into_iter().map(Into::into).collect();
        match role {
            ListRole::Todo => self.todo = owned,
            ListRole::InProgress => self.in_progress = owned,
            ListRole::Review => self.review = owned,
            ListRole::Done => self.done = owned,
        }
        self
    }

    /// Returns the synonyms recognized for a role.
    #[must_use]
    pub fn names(&self, role: ListRole) -> &[String] {
        match role {
            ListRole::Todo => &self.todo,
            ListRole::InProgress => &self.in_progress,
            ListRole::Review => &self.review,
            ListRole::Done => &self.done,
        }
    }

    /// Classifies a list name, returning the first role with a matching
    /// synonym in [`ListRole::ALL`] order.
    #[must_use]
    pub fn role_of(&self, list_name: &str) -> Option<ListRole> {
        ListRole::ALL.into_iter().find(|role| {
            self.names(*role)
                .iter()
                .any(|synonym| name_matches(list_name, synonym))
        })
    }
}

impl Default for ListRoleNames {
    fn default() -> Self {
        Self {
            todo: vec!["todo".into(), "to do".into(), "backlog".into()],
            in_progress: vec!["in progress".into(), "doing".into()],
            review: vec!["review".into(), "in review".into()],
            done: vec!["done".into(), "complete".into(), "finished".into()],
        }
    }
}

/// Returns `true` when the synonym's words appear consecutively among the
/// list name's words, ignoring case.
fn name_matches(list_name: &str, synonym: &str) -> bool {
    let name = list_name.to_lowercase();
    let needle = synonym.to_lowercase();
    let name_words: Vec<&str> = name.split_whitespace().collect();
    let synonym_words: Vec<&str> = needle.split_whitespace().collect();
    if synonym_words.is_empty() || synonym_words.len() > name_words.len() {
        return false;
    }
    name_words
        .windows(synonym_words.len())
        .any(|window| window == synonym_words)
}

/// Role-indexed view of a board's lists.
///
/// Built once per operation from a fresh list fetch; holds at most one
/// list per role (the first list classified into the role wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDirectory {
    todo: Option<List>,
    in_progress: Option<List>,
    review: Option<List>,
    done: Option<List>,
}

impl ListDirectory {
    /// Classifies board lists into roles using the given synonym table.
    #[must_use]
    pub fn classify(lists: &[List], names: &ListRoleNames) -> Self {
        let mut directory = Self::default();
        for list in lists {
            let Some(role) = names.role_of(&list.name) else {
                continue;
            };
            let slot = directory.slot_mut(role);
            if slot.is_none() {
                *slot = Some(list.clone());
            }
        }
        directory
    }

    /// Returns the list serving a role, if one was discovered.
    #[must_use]
    pub const fn get(&self, role: ListRole) -> Option<&List> {
        match role {
            ListRole::Todo => self.todo.as_ref(),
            ListRole::InProgress => self.in_progress.as_ref(),
            ListRole::Review => self.review.as_ref(),
            ListRole::Done => self.done.as_ref(),
        }
    }

    /// Returns the list serving a role, or an error naming the missing
    /// role.
    ///
    /// # Errors
    ///
    /// Returns [`UnconfiguredListError`] when no board list was classified
    /// into the role.
    pub fn require(&self, role: ListRole) -> Result<&List, UnconfiguredListError> {
        self.get(role).ok_or(UnconfiguredListError(role))
    }

    /// Returns the role served by the list with the given identifier.
    #[must_use]
    pub fn role_of_list(&self, list_id: &ListId) -> Option<ListRole> {
        ListRole::ALL
            .into_iter()
            .find(|role| self.get(*role).is_some_and(|list| &list.id == list_id))
    }

    fn slot_mut(&mut self, role: ListRole) -> &mut Option<List> {
        match role {
            ListRole::Todo => &mut self.todo,
            ListRole::InProgress => &mut self.in_progress,
            ListRole::Review => &mut self.review,
            ListRole::Done => &mut self.done,
        }
    }
}
