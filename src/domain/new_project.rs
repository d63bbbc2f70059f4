use super::ProjectAuthority;
use super::ProjectBio;
use super::ProjectMetrics;
use super::ProjectName;
use super::UseCase;

/// A fully parsed submission. This is the only thing the insert query
/// accepts, so nothing unvalidated can reach the `projects` table.
#[derive(Debug)]
pub struct NewProject {
    pub name: ProjectName,
    pub bio: ProjectBio,
    pub use_case: UseCase,
    pub authority: ProjectAuthority,
    pub metrics: ProjectMetrics,
}
