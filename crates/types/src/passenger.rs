use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    first_name: String,
    last_name: String,
    email: String,
    travel_class: String,
}

impl Passenger {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        travel_class: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            travel_class: travel_class.into(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn travel_class(&self) -> &str {
        &self.travel_class
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// `mailto:` URI used for calendar invitations.
    pub fn email_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_email_uri() {
        let p = Passenger::new("First", "Last", "first.last@company.com", "Economy");
        assert_eq!(p.full_name(), "First Last");
        assert_eq!(p.email_uri(), "mailto:first.last@company.com");
        assert_eq!(p.travel_class(), "Economy");
    }
}
