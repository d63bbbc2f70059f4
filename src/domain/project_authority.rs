use unicode_segmentation::UnicodeSegmentation;

pub const AUTHORITY_MIN_CHARS: usize = 10;
pub const AUTHORITY_MAX_CHARS: usize = 50;

/// The authority statement: the one line that makes the pitch credible
/// ("the team includes people from ...", "three funds already use it").
/// What counts as good authority depends on the use case; the form's
/// placeholder guidance handles that, not this type.
#[derive(Debug)]
pub struct ProjectAuthority(String);

impl ProjectAuthority {
    pub fn parse(authority: String) -> Result<Self, String> {
        if authority.trim().is_empty() {
            return Err("The authority statement cannot be blank.".to_string());
        }
        match authority.graphemes(true).count() {
            n if n < AUTHORITY_MIN_CHARS => Err(format!(
                "The authority statement must be at least {AUTHORITY_MIN_CHARS} characters."
            )),
            n if n > AUTHORITY_MAX_CHARS => Err(format!(
                "The authority statement must be at most {AUTHORITY_MAX_CHARS} characters."
            )),
            _ => Ok(Self(authority)),
        }
    }
}

impl AsRef<str> for ProjectAuthority {
    fn as_ref(&self) -> &str { &self.0 }
}
