use unicode_segmentation::UnicodeSegmentation;

/// The bio ("what does your product offer?") has a floor but no ceiling: a
/// pitch that cannot fill 50 characters is not a pitch.
pub const BIO_MIN_CHARS: usize = 50;

/// The sentence about what the product does, the load-bearing part of the
/// blurb. Instantiate with `ProjectBio::parse`.
#[derive(Debug)]
pub struct ProjectBio(String);

impl ProjectBio {
    pub fn parse(bio: String) -> Result<Self, String> {
        if bio.trim().is_empty() {
            return Err("The bio cannot be blank.".to_string());
        }
        match bio.graphemes(true).count() {
            n if n < BIO_MIN_CHARS => Err(format!(
                "The bio must be at least {BIO_MIN_CHARS} characters; say more about what you do."
            )),
            _ => Ok(Self(bio)),
        }
    }
}

impl AsRef<str> for ProjectBio {
    fn as_ref(&self) -> &str { &self.0 }
}
