//! Navigation sidebar: template search and the editable search history.

use serde::{Deserialize, Serialize};

use crate::{BOARDS, DEFAULT_SEARCH_HISTORY, LOCKED_BOARDS, TEMPLATES};

pub const TEMPLATES_HEADING: &str = "Templates";
pub const HISTORY_HEADING: &str = "Recent Searches";

/// A history entry together with its position in the full history, so a
/// removal from a filtered list hits the right entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub index: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSection<T> {
    pub heading: String,
    pub items: Vec<T>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchResults {
    /// No query: everything, without headings.
    Browse {
        templates: Vec<String>,
        history: Vec<HistoryEntry>,
    },
    /// A query with at least one match. Sections without matches are `None`.
    Matches {
        templates: Option<ResultSection<String>>,
        history: Option<ResultSection<HistoryEntry>>,
    },
    NoResults {
        message: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    pub query: String,
    pub history: Vec<String>,
    pub search_focused: bool,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            query: String::new(),
            history: DEFAULT_SEARCH_HISTORY.iter().map(ToString::to_string).collect(),
            search_focused: false,
        }
    }
}

fn matches_query(candidate: &str, needle: &str) -> bool {
    candidate.to_lowercase().contains(needle)
}

impl Sidebar {
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.search_focused = focused;
    }

    /// Commit a search. Returns `true` when the history grew.
    ///
    /// Blank text is ignored entirely. Duplicates are detected with an exact,
    /// case-sensitive comparison even though filtering ignores case.
    pub fn submit_search(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        let added = !self.history.iter().any(|item| item == trimmed);
        if added {
            self.history.insert(0, trimmed.to_string());
        }
        self.query.clear();
        self.search_focused = false;
        added
    }

    /// Copy a history entry into the search box without submitting it.
    pub fn select_history_item(&mut self, item: impl Into<String>) {
        self.query = item.into();
    }

    /// Remove the history entry at `index`, returning it if it existed.
    pub fn remove_history_item(&mut self, index: usize) -> Option<String> {
        (index < self.history.len()).then(|| self.history.remove(index))
    }

    #[must_use]
    pub fn filtered_templates(&self) -> Vec<String> {
        let needle = self.query.to_lowercase();
        TEMPLATES
            .iter()
            .filter(|label| matches_query(label, &needle))
            .map(ToString::to_string)
            .collect()
    }

    #[must_use]
    pub fn filtered_history(&self) -> Vec<HistoryEntry> {
        let needle = self.query.to_lowercase();
        self.history
            .iter()
            .enumerate()
            .filter(|(_, item)| matches_query(item, &needle))
            .map(|(index, text)| HistoryEntry {
                index,
                text: text.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn results(&self) -> SearchResults {
        // Only a literally empty query counts as "no query"; whitespace filters.
        if self.query.is_empty() {
            return SearchResults::Browse {
                templates: TEMPLATES.iter().map(ToString::to_string).collect(),
                history: self.filtered_history(),
            };
        }

        let templates = self.filtered_templates();
        let history = self.filtered_history();

        if templates.is_empty() && history.is_empty() {
            return SearchResults::NoResults {
                message: format!("No results found for \"{}\"", self.query),
            };
        }

        SearchResults::Matches {
            templates: (!templates.is_empty()).then(|| ResultSection {
                heading: TEMPLATES_HEADING.into(),
                items: templates,
            }),
            history: (!history.is_empty()).then(|| ResultSection {
                heading: HISTORY_HEADING.into(),
                items: history,
            }),
        }
    }

    #[must_use]
    pub fn boards() -> Vec<String> {
        BOARDS.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn locked_boards() -> Vec<String> {
        LOCKED_BOARDS.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(entries: &[HistoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn empty_query_browses_everything() {
        let sidebar = Sidebar::default();
        match sidebar.results() {
            SearchResults::Browse { templates, history } => {
                assert_eq!(templates.len(), TEMPLATES.len());
                assert_eq!(history.len(), DEFAULT_SEARCH_HISTORY.len());
                assert_eq!(history[0].index, 0);
            }
            other => panic!("expected browse, got {other:?}"),
        }
    }

    #[test]
    fn filtering_ignores_case() {
        let mut sidebar = Sidebar::default();
        sidebar.set_query("ENGINEER");

        let SearchResults::Matches { templates, history } = sidebar.results() else {
            panic!("expected matches");
        };
        let templates = templates.expect("template section");
        assert_eq!(templates.heading, "Templates");
        assert_eq!(
            templates.items,
            vec![
                "Software Engineer".to_string(),
                "Computer hardware engineer".to_string(),
                "Network Engineer".to_string(),
            ]
        );
        assert!(history.is_none());
    }

    #[test]
    fn history_matches_keep_their_full_index() {
        let mut sidebar = Sidebar::default();
        sidebar.set_query("computer");

        let SearchResults::Matches { templates, history } = sidebar.results() else {
            panic!("expected matches");
        };
        assert!(templates.is_some());
        let history = history.expect("history section");
        assert_eq!(history.heading, "Recent Searches");
        assert_eq!(
            texts(&history.items),
            vec!["Computer security", "Computer Systems Analyst"]
        );
        assert_eq!(history.items[0].index, 4);
        assert_eq!(history.items[1].index, 5);
    }

    #[test]
    fn no_results_quotes_the_query() {
        let mut sidebar = Sidebar::default();
        sidebar.set_query("zzz");
        assert_eq!(
            sidebar.results(),
            SearchResults::NoResults {
                message: "No results found for \"zzz\"".into()
            }
        );
    }

    #[test]
    fn whitespace_query_is_a_real_filter() {
        let mut sidebar = Sidebar::default();
        sidebar.set_query("   ");
        assert!(matches!(sidebar.results(), SearchResults::NoResults { .. }));
    }

    #[test]
    fn submit_prepends_trimmed_text_and_clears_query() {
        let mut sidebar = Sidebar::default();
        sidebar.set_focused(true);
        sidebar.set_query("  Rust developer ");

        assert!(sidebar.submit_search("  Rust developer "));
        assert_eq!(sidebar.history[0], "Rust developer");
        assert_eq!(sidebar.history.len(), DEFAULT_SEARCH_HISTORY.len() + 1);
        assert!(sidebar.query.is_empty());
        assert!(!sidebar.search_focused);
    }

    #[test]
    fn duplicate_detection_is_case_sensitive() {
        let mut sidebar = Sidebar::default();
        assert!(!sidebar.submit_search("Computer security"));
        assert_eq!(sidebar.history.len(), DEFAULT_SEARCH_HISTORY.len());

        assert!(sidebar.submit_search("computer security"));
        assert_eq!(sidebar.history[0], "computer security");
    }

    #[test]
    fn blank_submit_changes_nothing() {
        let mut sidebar = Sidebar::default();
        sidebar.set_query("   ");
        sidebar.set_focused(true);

        assert!(!sidebar.submit_search("   "));
        assert_eq!(sidebar.query, "   ");
        assert!(sidebar.search_focused);
        assert_eq!(sidebar.history.len(), DEFAULT_SEARCH_HISTORY.len());
    }

    #[test]
    fn select_copies_without_submitting() {
        let mut sidebar = Sidebar::default();
        sidebar.select_history_item("Past search 2");
        assert_eq!(sidebar.query, "Past search 2");
        assert_eq!(sidebar.history.len(), DEFAULT_SEARCH_HISTORY.len());
    }

    #[test]
    fn remove_by_index() {
        let mut sidebar = Sidebar::default();
        assert_eq!(sidebar.remove_history_item(1), Some("Past search 2".into()));
        assert_eq!(sidebar.history[1], "More find information...");
        assert_eq!(sidebar.remove_history_item(99), None);
        assert_eq!(sidebar.history.len(), DEFAULT_SEARCH_HISTORY.len() - 1);
    }

    #[test]
    fn boards_are_fixed() {
        assert_eq!(Sidebar::boards(), vec!["Board 1", "Board 2", "Board 3"]);
        assert_eq!(Sidebar::locked_boards().len(), 3);
    }
}
