//! Filter criteria and query-parameter encoding.
//!
//! A filter is a sparse set of optional fields used to narrow a single
//! list request; it has no identity or lifecycle beyond that call.
//! Encoding keeps only the fields that are present and non-empty, so a
//! fully empty filter yields no parameters at all.

/// Query key for the owning actor filter.
const HOSTID_KEY: &str = "hostid";
const TITLE_KEY: &str = "title";
const DESCRIPTION_KEY: &str = "description";
const TASK_KEY: &str = "task";

const HUNT_ID_KEY: &str = "huntId";
const TASK_DESCRIPTION_KEY: &str = "taskDescription";

/// Filter criteria for hunt list retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntFilter {
    pub hostid: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub task: Option<String>,
}

impl HuntFilter {
    /// Encode into query pairs. Key mapping is fixed and
    /// case-sensitive; absent and empty-string fields are omitted
    /// entirely.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_present(&mut pairs, HOSTID_KEY, &self.hostid);
        push_present(&mut pairs, TITLE_KEY, &self.title);
        push_present(&mut pairs, DESCRIPTION_KEY, &self.description);
        push_present(&mut pairs, TASK_KEY, &self.task);
        pairs
    }
}

/// Filter criteria for task list retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub hunt_id: Option<String>,
    pub task_description: Option<String>,
}

impl TaskFilter {
    /// Encode into query pairs, omitting absent and empty fields.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_present(&mut pairs, HUNT_ID_KEY, &self.hunt_id);
        push_present(&mut pairs, TASK_DESCRIPTION_KEY, &self.task_description);
        pairs
    }
}

fn push_present(
    pairs: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: &Option<String>,
) {
    if let Some(value) = value {
        if !value.is_empty() {
            pairs.push((key, value.clone()));
        }
    }
}
