use unicode_segmentation::UnicodeSegmentation;

/// Bounds for the project/product name, counted in grapheme clusters. The
/// form page renders these as `minlength`/`maxlength`, so keep them here and
/// nowhere else.
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// The name of the project or product being pitched.
///
/// Must be instantiated with `ProjectName::parse`; the field is left private
/// so an unvalidated name cannot be smuggled in or mutated afterwards.
#[derive(Debug)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("The project name cannot be blank.".to_string());
        }
        match name.graphemes(true).count() {
            n if n < NAME_MIN_CHARS => Err(format!(
                "The project name must be at least {NAME_MIN_CHARS} characters."
            )),
            n if n > NAME_MAX_CHARS => Err(format!(
                "The project name must be at most {NAME_MAX_CHARS} characters."
            )),
            _ => Ok(Self(name)),
        }
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str { &self.0 }
}
