//! Contact form state.
//!
//! The form accepts text in its three fields. It has no submission
//! behaviour: nothing here sends, validates, or clears anything.

/// Input affordances of the contact form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Label rendered above the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }

    /// Whether Enter inserts a line break.
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, FormField::Message)
    }

    /// Rows the input box occupies inside its border.
    #[must_use]
    pub const fn rows(self) -> u16 {
        if self.is_multiline() {
            5
        } else {
            1
        }
    }
}

/// Text typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Current text of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Append a character to a field. Line breaks only land in multi-line fields.
    pub fn insert(&mut self, field: FormField, c: char) {
        if c == '\n' && !field.is_multiline() {
            return;
        }
        self.value_mut(field).push(c);
    }

    /// Remove the last character of a field.
    pub fn backspace(&mut self, field: FormField) {
        self.value_mut(field).pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_into_fields() {
        let mut form = ContactForm::default();
        for c in "Ada".chars() {
            form.insert(FormField::Name, c);
        }
        form.insert(FormField::Email, 'a');
        form.insert(FormField::Email, '@');
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.value(FormField::Email), "a@");
        assert_eq!(form.value(FormField::Message), "");
    }

    #[test]
    fn test_newline_only_in_message() {
        let mut form = ContactForm::default();
        form.insert(FormField::Name, '\n');
        form.insert(FormField::Message, 'x');
        form.insert(FormField::Message, '\n');
        assert_eq!(form.name, "");
        assert_eq!(form.message, "x\n");
    }

    #[test]
    fn test_backspace_on_empty_field() {
        let mut form = ContactForm::default();
        form.backspace(FormField::Email);
        assert_eq!(form, ContactForm::default());
        form.insert(FormField::Email, 'é');
        form.backspace(FormField::Email);
        assert_eq!(form.email, "");
    }
}
