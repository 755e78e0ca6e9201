//! Developer workload aggregation.

use super::DeveloperWorkload;
use crate::developer::domain::Developer;
use crate::task::domain::{Complexity, Task};

/// Computes the workload report over the given developers and tasks.
///
/// One row per active developer (inactive developers are skipped even if
/// tasks reference them), ordered by developer name. A developer with no
/// open complexity-carrying tasks reports an average of 0.
#[must_use]
pub fn developer_workload(developers: &[Developer], tasks: &[Task]) -> Vec<DeveloperWorkload> {
    let mut rows: Vec<DeveloperWorkload> = developers
        .iter()
        .filter(|developer| developer.is_active())
        .map(|developer| workload_for(developer, tasks))
        .collect();
    rows.sort_by(|a, b| a.developer_name.cmp(&b.developer_name));
    rows
}

fn workload_for(developer: &Developer, tasks: &[Task]) -> DeveloperWorkload {
    let open: Vec<&Task> = tasks
        .iter()
        .filter(|task| task.assignee_id() == developer.id() && task.is_open())
        .collect();
    let complexities: Vec<u8> = open
        .iter()
        .filter_map(|task| task.estimated_complexity().map(Complexity::value))
        .collect();

    DeveloperWorkload {
        developer_name: developer.full_name(),
        open_tasks_count: open.len(),
        average_estimated_complexity: mean_complexity(&complexities),
    }
}

/// Mean of the given complexity scores, 0 for an empty slice.
#[expect(
    clippy::float_arithmetic,
    reason = "the report exposes the average as a fractional score"
)]
fn mean_complexity(values: &[u8]) -> f64 {
    let Ok(count) = u32::try_from(values.len()) else {
        return 0.0;
    };
    if count == 0 {
        return 0.0;
    }
    let sum: f64 = values.iter().copied().map(f64::from).sum();
    sum / f64::from(count)
}
