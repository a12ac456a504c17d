use serde::{Deserialize, Serialize};

/// Contact details collected on the Contact Info step.
///
/// Fields accept any text; only presence is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub agreed_to_terms: bool,
}

/// One editable field of [`ContactInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FullName,
    Phone,
    Email,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::FullName, Self::Phone, Self::Email];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Phone => "Phone Number",
            Self::Email => "Email Address",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::Phone => "Enter your phone number",
            Self::Email => "Enter your email address",
        }
    }
}

impl ContactInfo {
    pub fn field(
        &self,
        field: ContactField,
    ) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }

    /// Returns a copy with one text field replaced.
    pub fn with_field(
        &self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            ContactField::FullName => next.full_name = value,
            ContactField::Phone => next.phone = value,
            ContactField::Email => next.email = value,
        }
        next
    }

    /// Returns a copy with the terms flag replaced.
    pub fn with_terms(
        &self,
        agreed: bool,
    ) -> Self {
        Self {
            agreed_to_terms: agreed,
            ..self.clone()
        }
    }

    /// All three text fields are filled in and the terms are accepted.
    pub fn is_complete(&self) -> bool {
        !self.full_name.is_empty()
            && !self.phone.is_empty()
            && !self.email.is_empty()
            && self.agreed_to_terms
    }
}
