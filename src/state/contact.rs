use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Message];

    pub fn error_message(self) -> &'static str {
        match self {
            Field::Name => "O nome é obrigatório",
            Field::Phone => "Informe um número válido",
            Field::Email => "E-mail inválido",
            Field::Message => "A mensagem deve ter pelo menos 10 caracteres",
        }
    }
}

/// Raw, unvalidated input as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// A message that passed every field rule. Serialises to the body the mail
/// endpoint expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

const PHONE_MIN_CHARS: usize = 8;
const MESSAGE_MIN_CHARS: usize = 10;

fn field_is_valid(field: Field, value: &str) -> bool {
    match field {
        Field::Name => !value.is_empty(),
        Field::Phone => value.chars().count() >= PHONE_MIN_CHARS,
        Field::Email => is_valid_email(value),
        Field::Message => value.chars().count() >= MESSAGE_MIN_CHARS,
    }
}

/// All-or-nothing: either every field is valid, or one error per invalid field.
pub fn validate(fields: &ContactFields) -> Result<ContactFormData, FieldErrors> {
    let errors: BTreeMap<Field, &'static str> = Field::ALL
        .into_iter()
        .filter(|&field| !field_is_valid(field, fields.get(field)))
        .map(|field| (field, field.error_message()))
        .collect();

    if !errors.is_empty() {
        return Err(FieldErrors(errors));
    }

    Ok(ContactFormData {
        name: fields.name.clone(),
        phone: fields.phone.clone(),
        email: fields.email.clone(),
        message: fields.message.clone(),
    })
}

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    let local_ok = !local.is_empty()
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._'+-".contains(c));

    let labels: Vec<&str> = domain.split('.').collect();
    let domain_ok = labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
        && labels
            .last()
            .map_or(false, |tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()));

    local_ok && domain_ok
}

/// Form lifecycle around one contact message.
///
/// Validation first runs on submit; after that every edit re-validates so
/// inline errors clear as soon as they are fixed. While a submission is in
/// flight further submits are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    attempted: bool,
    submitting: bool,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        if self.attempted {
            self.errors = validate(&self.fields).err().unwrap_or_default();
        }
    }

    /// Returns the payload to send, or `None` when blocked by validation or
    /// by a submission already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFormData> {
        if self.submitting {
            return None;
        }
        self.attempted = true;
        match validate(&self.fields) {
            Ok(data) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                Some(data)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Clears the form after a delivered message; keeps the input for a retry otherwise.
    pub fn finish_submit(&mut self, delivered: bool) {
        self.submitting = false;
        if delivered {
            *self = ContactForm::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(name: &str, phone: &str, email: &str, message: &str) -> ContactFields {
        ContactFields {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn valid() -> ContactFields {
        fields("Ana", "85994365305", "a@b.com", "this is a long enough message")
    }

    #[test]
    fn every_malformed_field_gets_one_error() {
        let errors = validate(&fields("", "123", "bad", "short")).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
        assert_eq!(errors.get(Field::Email), Some("E-mail inválido"));
    }

    #[test]
    fn well_formed_message_passes() {
        let data = validate(&valid()).unwrap();
        assert_eq!(
            data,
            ContactFormData {
                name: "Ana".into(),
                phone: "85994365305".into(),
                email: "a@b.com".into(),
                message: "this is a long enough message".into(),
            }
        );
    }

    #[test]
    fn only_the_broken_field_is_reported() {
        let mut input = valid();
        input.phone = "1234567".into();
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Phone]);
    }

    #[test]
    fn lengths_are_counted_in_characters() {
        let mut input = valid();
        input.message = "ação é já!".into();
        assert_eq!(input.message.chars().count(), 10);
        assert!(validate(&input).is_ok());

        input.phone = "12345678".into();
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn email_rules() {
        for good in ["a@b.com", "joao.breno85@hotmail.com", "x+tag@sub.example.org", "o'neil@mail.co"] {
            assert!(is_valid_email(good), "{good}");
        }
        for bad in [
            "bad", "@b.com", "a@", "a@b", "a@@b.com", "a@b@c.com", ".a@b.com", "a.@b.com",
            "a..b@c.com", "a@-b.com", "a@b-.com", "a@b..com", "a@b.c", "a@b.c0m", "a b@c.com", "",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }

    #[test]
    fn payload_matches_endpoint_body() {
        let body = serde_json::to_value(validate(&valid()).unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ana",
                "phone": "85994365305",
                "email": "a@b.com",
                "message": "this is a long enough message",
            })
        );
    }

    #[test]
    fn errors_appear_only_after_first_submit() {
        let mut form = ContactForm::default();
        form.set_field(Field::Email, "bad".into());
        assert!(form.errors().is_empty());

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.errors().len(), 4);
        assert!(!form.is_submitting());
    }

    #[test]
    fn edits_revalidate_after_an_attempt() {
        let mut form = ContactForm::default();
        form.begin_submit();
        form.set_field(Field::Name, "Ana".into());
        assert_eq!(form.errors().get(Field::Name), None);
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn in_flight_submission_blocks_resubmit() {
        let mut form = ContactForm::default();
        let input = valid();
        for field in Field::ALL {
            form.set_field(field, input.get(field).to_string());
        }
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), None);
    }

    #[test]
    fn failure_preserves_input_and_success_clears_it() {
        let mut form = ContactForm::default();
        let input = valid();
        for field in Field::ALL {
            form.set_field(field, input.get(field).to_string());
        }

        form.begin_submit();
        form.finish_submit(false);
        assert!(!form.is_submitting());
        assert_eq!(form.fields(), &input);

        form.begin_submit();
        form.finish_submit(true);
        assert_eq!(form, ContactForm::default());
    }
}
