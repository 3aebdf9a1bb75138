#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Accepts `local@domain.tld`: no whitespace, a single `@` with a
    /// non-empty local part, and a dot inside the domain with characters on
    /// both sides. Deliverability is not checked.
    pub fn parse(s: String) -> Result<Self, String> {
        if !has_address_shape(&s) {
            return Err(format!("{s} is not a valid contact email."));
        };
        Ok(Self(s))
    }
}

fn has_address_shape(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        ContactEmail::parse(value)
    }
}
