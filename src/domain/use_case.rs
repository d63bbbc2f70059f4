use std::fmt::Display;

/// The reason for reaching out. Stored and transmitted as the canonical
/// uppercase token (`RECRUITING` / `FUNDRAISING`); displayed capitalised.
///
/// The variant decides which guidance the form shows for the authority
/// field, nothing else; the composed blurb does not mention it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    Recruiting,
    Fundraising,
}

impl UseCase {
    /// Every variant, in the order the form's dropdown lists them
    pub const ALL: [UseCase; 2] = [UseCase::Recruiting, UseCase::Fundraising];

    /// Tokens are case-sensitive: the select and the API both send the
    /// canonical spelling, so anything else is a malformed request.
    pub fn parse(token: &str) -> Result<Self, String> {
        match token {
            "RECRUITING" => Ok(Self::Recruiting),
            "FUNDRAISING" => Ok(Self::Fundraising),
            other => Err(format!("{other:?} is not a known use case.")),
        }
    }

    /// The canonical wire/storage token
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recruiting => "RECRUITING",
            Self::Fundraising => "FUNDRAISING",
        }
    }

    /// Human form for the dropdown ("Recruiting", not "RECRUITING")
    pub fn label(&self) -> String {
        let token = self.as_str();
        format!("{}{}", &token[..1], token[1..].to_lowercase())
    }

    /// Guidance shown as the authority field's placeholder once a use case
    /// is chosen. The wording comes straight from the form copy.
    pub fn authority_placeholder(&self) -> &'static str {
        match self {
            Self::Recruiting => {
                r#"👉 If you're *recruiting*, add authority, e.g. "the team includes people from Facebook," etc."#
            }
            Self::Fundraising => {
                r#"👉 If you're emailing *investors*, write a line relevant to them, e.g. "three Sequoia-backed companies use your product.""#
            }
        }
    }
}

impl Display for UseCase {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
