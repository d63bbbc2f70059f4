mod api;
mod health_check;
mod home;
mod login;
mod logout;
mod projects;

pub use api::*;
pub use health_check::*;
pub use home::*;
pub use login::*;
pub use logout::*;
pub use projects::*;

/// Write `e` followed by its whole `source` chain, one cause per line. Shared
/// by the `Debug` impls of the route error enums, because the default derive
/// prints only the outermost error
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }
    Ok(())
}
