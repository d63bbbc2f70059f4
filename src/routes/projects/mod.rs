mod get;
mod post;
pub use get::*;
pub use post::*;
use serde::Deserialize;

use crate::domain::NewProject;
use crate::domain::ProjectAuthority;
use crate::domain::ProjectBio;
use crate::domain::ProjectMetrics;
use crate::domain::ProjectName;
use crate::domain::UseCase;

/// One submission as it arrives on the wire. The same shape serves the
/// urlencoded form body and the JSON API, so both surfaces share one schema
/// by construction.
#[derive(Deserialize)]
pub struct ProjectInput {
    name: String,
    bio: String,
    use_case: String,
    authority: String,
    metrics: String,
}

impl TryFrom<ProjectInput> for NewProject {
    type Error = String;

    /// The error is the first failing field's message, ready to show to the
    /// submitter as-is
    fn try_from(input: ProjectInput) -> Result<Self, Self::Error> {
        let name = ProjectName::parse(input.name)?;
        let bio = ProjectBio::parse(input.bio)?;
        let use_case = UseCase::parse(&input.use_case)?;
        let authority = ProjectAuthority::parse(input.authority)?;
        let metrics = ProjectMetrics::parse(input.metrics)?;
        Ok(Self {
            name,
            bio,
            use_case,
            authority,
            metrics,
        })
    }
}
