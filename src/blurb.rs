use crate::persistence::Project;

/// Compose the blurb: the short pitch paragraph built from the stored
/// fields. The one-line elevator pitch ("name: what it does") comes first,
/// because if the recipient doesn't understand what the project does, the
/// rest of the blurb is useless; authority and metrics follow. The use case
/// only ever steered the form guidance, so it does not appear here.
pub fn compose_blurb(project: &Project) -> String {
    [
        format!("{}: {}", project.name, project.bio),
        project.authority.clone(),
        project.metrics.clone(),
    ]
    .map(|part| ensure_sentence(&part))
    .join(" ")
}

/// Close `part` with a full stop unless it already ends in terminal
/// punctuation (possibly inside a quotation).
fn ensure_sentence(part: &str) -> String {
    let part = part.trim_end();
    let terminated = part
        .trim_end_matches(['"', '\'', ')'])
        .ends_with(['.', '!', '?']);
    match terminated {
        true => part.to_string(),
        false => format!("{part}."),
    }
}
