use darling::FromMeta;

/// How registry keys are derived from variant identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameRule {
    Lowercase,
    Uppercase,
    SnakeCase,
    ScreamingSnakeCase,
}

impl RenameRule {
    pub fn apply(self, ident: &str) -> String {
        match self {
            Self::Lowercase => ident.to_lowercase(),
            Self::Uppercase => ident.to_uppercase(),
            Self::SnakeCase => ident_to_snake_case(ident),
            Self::ScreamingSnakeCase => ident_to_snake_case(ident).to_uppercase(),
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "lowercase" => Ok(Self::Lowercase),
            "UPPERCASE" => Ok(Self::Uppercase),
            "snake_case" => Ok(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnakeCase),
            _ => Err(darling::Error::unknown_value(value)),
        }
    }
}

/// Splits before an uppercase letter that starts a word: `HTTPServer` -> `http_server`.
fn ident_to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::default();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if prev != '_' && (!prev.is_uppercase() || next_is_lower) {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    return result;
}
