//! The shared validation schema. Every field of a submission has a newtype
//! with a `parse` constructor; the length constants live next to the parsers
//! and are the same ones the form page renders as `minlength`/`maxlength`
//! attributes, so the browser and the server enforce one schema.

mod new_project;
mod project_authority;
mod project_bio;
mod project_metrics;
mod project_name;
mod use_case;

// allow external `use` statements to skip the submodule names
pub use new_project::NewProject;
pub use project_authority::ProjectAuthority;
pub use project_authority::AUTHORITY_MAX_CHARS;
pub use project_authority::AUTHORITY_MIN_CHARS;
pub use project_bio::ProjectBio;
pub use project_bio::BIO_MIN_CHARS;
pub use project_metrics::ProjectMetrics;
pub use project_metrics::METRICS_MAX_CHARS;
pub use project_metrics::METRICS_MIN_CHARS;
pub use project_name::ProjectName;
pub use project_name::NAME_MAX_CHARS;
pub use project_name::NAME_MIN_CHARS;
pub use use_case::UseCase;
