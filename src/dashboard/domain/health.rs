//! Project health aggregation.

use super::ProjectHealth;
use crate::project::domain::{Project, ProjectId};
use crate::task::domain::Task;
use std::collections::HashMap;

/// Computes the health report over the given projects and tasks.
///
/// One row per project, active or not, ordered by project name. Every
/// task is either open or completed, so `total_tasks` always equals
/// `open_tasks + completed_tasks`.
#[must_use]
pub fn project_health(projects: &[Project], tasks: &[Task]) -> Vec<ProjectHealth> {
    let mut counts: HashMap<ProjectId, (usize, usize)> = HashMap::new();
    for task in tasks {
        let entry = counts.entry(task.project_id()).or_default();
        if task.is_open() {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    let mut rows: Vec<ProjectHealth> = projects
        .iter()
        .map(|project| {
            let (open_tasks, completed_tasks) =
                counts.get(&project.id()).copied().unwrap_or_default();
            ProjectHealth {
                project_id: project.id(),
                project_name: project.name().to_owned(),
                client_name: project.client_name().to_owned(),
                total_tasks: open_tasks + completed_tasks,
                open_tasks,
                completed_tasks,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.project_name.cmp(&b.project_name));
    rows
}
