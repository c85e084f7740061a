use contracts::system::host::HostUser;
use contracts::usecases::u001_submit_application::{ApplicationPayload, ServiceEntry};

/// Top-level fields of the application form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Read-only, filled from the host container
    pub user_id: Option<i64>,
    pub user_name: String,
    pub company_name: String,
    pub phone_number: String,
    pub email: String,
}

impl ContactForm {
    /// Empty form with the identity fields taken from the host user
    pub fn prefilled(user: Option<&HostUser>) -> Self {
        match user {
            Some(user) => Self {
                user_id: Some(user.id),
                user_name: user.first_name.clone(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

/// Editable contact fields, in form order
///
/// None of them carries a browser-side constraint: the server validates
/// contacts and answers with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    CompanyName,
    PhoneNumber,
    Email,
}

impl ContactField {
    pub const EDITABLE: [ContactField; 3] = [
        ContactField::CompanyName,
        ContactField::PhoneNumber,
        ContactField::Email,
    ];

    /// Form field name, also used as the element id
    pub fn name(self) -> &'static str {
        match self {
            ContactField::CompanyName => "company_name",
            ContactField::PhoneNumber => "phone_number",
            ContactField::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::CompanyName => "Наименование компании",
            ContactField::PhoneNumber => "Номер телефона",
            ContactField::Email => "Электронная почта",
        }
    }

    /// `tel` only changes the mobile keyboard, it has no validity check
    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::PhoneNumber => "tel",
            ContactField::CompanyName | ContactField::Email => "text",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ContactField::PhoneNumber => Some("+7XXXXXXXXXX"),
            _ => None,
        }
    }
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::CompanyName => &self.company_name,
            ContactField::PhoneNumber => &self.phone_number,
            ContactField::Email => &self.email,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::CompanyName => self.company_name = value,
            ContactField::PhoneNumber => self.phone_number = value,
            ContactField::Email => self.email = value,
        }
    }
}

/// Assemble the payload from the current form state
pub fn build_payload(form: &ContactForm, services: Vec<ServiceEntry>) -> ApplicationPayload {
    ApplicationPayload {
        user_id: form.user_id,
        user_name: form.user_name.clone(),
        company_name: form.company_name.clone(),
        phone_number: form.phone_number.clone(),
        email: form.email.clone(),
        services,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_service_block::ServiceList;
    use std::num::NonZeroU32;
    use contracts::domain::a001_training_catalog::{
        TrainingProgram, TrainingProgramId, TrainingTypeId,
    };

    #[test]
    fn test_prefill_from_host_user() {
        let user = HostUser {
            id: 42,
            first_name: "Анна".into(),
        };
        let form = ContactForm::prefilled(Some(&user));
        assert_eq!(form.user_id, Some(42));
        assert_eq!(form.user_name, "Анна");
        assert!(form.company_name.is_empty());
    }

    #[test]
    fn test_prefill_without_user_leaves_blank() {
        assert_eq!(ContactForm::prefilled(None), ContactForm::default());
    }

    #[test]
    fn test_contact_fields_have_no_browser_validation() {
        for field in ContactField::EDITABLE {
            assert!(
                matches!(field.input_type(), "text" | "tel"),
                "{:?} uses a validating input type",
                field
            );
        }
    }

    #[test]
    fn test_malformed_email_reaches_payload_unchanged() {
        let mut form = ContactForm::default();
        form.set_field(ContactField::CompanyName, "Co".into());
        form.set_field(ContactField::Email, "bad".into());
        assert_eq!(form.field(ContactField::Email), "bad");

        let payload = build_payload(&form, Vec::new());
        assert_eq!(payload.email, "bad");
        assert_eq!(payload.company_name, "Co");
        assert!(payload.phone_number.is_empty());
    }

    fn fill_block(list: &mut ServiceList, category: i64, program: i64, rank: &str, headcount: &str) {
        let id = list.add_block();
        let block = list.block_mut(id).unwrap();
        let req = block.select_category(Some(TrainingTypeId(category))).unwrap();
        block.apply_programs(
            req,
            vec![
                TrainingProgram {
                    id: TrainingProgramId(100 + program),
                    name: "first".into(),
                },
                TrainingProgram {
                    id: TrainingProgramId(program),
                    name: "chosen".into(),
                },
            ],
        );
        block.select_program(Some(TrainingProgramId(program)));
        block.rank = rank.into();
        block.headcount = headcount.into();
    }

    #[test]
    fn test_payload_with_two_services_in_order() {
        let form = ContactForm {
            user_id: Some(7),
            user_name: "Acme".into(),
            company_name: "Co".into(),
            phone_number: "123".into(),
            email: "a@b.com".into(),
        };
        let mut list = ServiceList::new();
        fill_block(&mut list, 1, 5, "", "3");
        fill_block(&mut list, 2, 9, "lvl2", "1");

        let payload = build_payload(&form, list.extract_all());

        assert_eq!(payload.user_name, "Acme");
        assert_eq!(payload.company_name, "Co");
        assert_eq!(payload.phone_number, "123");
        assert_eq!(payload.email, "a@b.com");
        assert_eq!(
            payload.services,
            vec![
                ServiceEntry {
                    training_type_id: Some(TrainingTypeId(1)),
                    training_program_id: Some(TrainingProgramId(5)),
                    training_rank: "".into(),
                    people_count: NonZeroU32::new(3),
                },
                ServiceEntry {
                    training_type_id: Some(TrainingTypeId(2)),
                    training_program_id: Some(TrainingProgramId(9)),
                    training_rank: "lvl2".into(),
                    people_count: NonZeroU32::new(1),
                },
            ]
        );
    }
}
