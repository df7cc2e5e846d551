use serde::{Deserialize, Serialize};

/// A text input of the company info form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactField {
    pub label: &'static str,
    pub name: &'static str,
}

pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField {
        label: "Company name",
        name: "trade_name",
    },
    ContactField {
        label: "Contact name",
        name: "contact_name",
    },
    ContactField {
        label: "Email",
        name: "email",
    },
    ContactField {
        label: "Phone",
        name: "phone",
    },
    ContactField {
        label: "Website",
        name: "website",
    },
    ContactField {
        label: "City",
        name: "city",
    },
    ContactField {
        label: "Country",
        name: "country",
    },
    ContactField {
        label: "What do you grow?",
        name: "products",
    },
];

/// Values typed so far, plus which fields passed the non-empty check the
/// last time they lost focus.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactDraft {
    values: Vec<String>,
    valid: Vec<bool>,
}

/// Field name → value pairs handed out when the form is finished.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ContactDetails {
    pub fields: Vec<(String, String)>,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self {
            values: vec![String::new(); CONTACT_FIELDS.len()],
            valid: vec![false; CONTACT_FIELDS.len()],
        }
    }

    pub fn set_value(&mut self, index: usize, value: String) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    /// Focus left the field: mark it valid iff it currently holds any text.
    pub fn blur(&mut self, index: usize, value: String) {
        let valid = !value.is_empty();
        self.set_value(index, value);
        if let Some(slot) = self.valid.get_mut(index) {
            *slot = valid;
        }
    }

    pub fn is_valid(&self, index: usize) -> bool {
        self.valid.get(index).copied().unwrap_or(false)
    }

    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            fields: CONTACT_FIELDS
                .iter()
                .zip(&self.values)
                .map(|(field, value)| (field.name.to_string(), value.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_unique() {
        for (i, field) in CONTACT_FIELDS.iter().enumerate() {
            assert!(CONTACT_FIELDS[i + 1..].iter().all(|f| f.name != field.name));
        }
    }

    #[test]
    fn nothing_is_valid_before_blur() {
        let draft = ContactDraft::new();
        assert!((0..CONTACT_FIELDS.len()).all(|i| !draft.is_valid(i)));
    }

    #[test]
    fn blur_marks_valid_iff_non_empty() {
        let mut draft = ContactDraft::new();

        draft.blur(2, "grower@example.com".into());
        assert!(draft.is_valid(2));

        draft.blur(2, String::new());
        assert!(!draft.is_valid(2));

        // no format check
        draft.blur(2, " ".into());
        assert!(draft.is_valid(2));
    }

    #[test]
    fn typing_alone_does_not_change_marker() {
        let mut draft = ContactDraft::new();
        draft.blur(0, "Acme".into());
        draft.set_value(0, String::new());
        assert!(draft.is_valid(0));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut draft = ContactDraft::new();
        draft.blur(CONTACT_FIELDS.len(), "x".into());
        assert!(!draft.is_valid(CONTACT_FIELDS.len()));
        assert_eq!(draft, ContactDraft::new());
    }

    #[test]
    fn details_follow_field_order() {
        let mut draft = ContactDraft::new();
        draft.set_value(0, "Acme Farms".into());
        draft.blur(2, "hi@acme.test".into());

        let details = draft.details();
        assert_eq!(details.fields.len(), CONTACT_FIELDS.len());
        assert_eq!(details.fields[0], ("trade_name".into(), "Acme Farms".into()));
        assert_eq!(details.fields[1], ("contact_name".into(), String::new()));
        assert_eq!(details.fields[2], ("email".into(), "hi@acme.test".into()));
    }
}
