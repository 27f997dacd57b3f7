use crate::models::{LoginData, SignupData};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignupField {
    Username,
    Email,
    FirstName,
    LastName,
    Password,
    ConfirmPassword,
}

/// Raw contents of the signup form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(Vec<(SignupField, &'static str)>);

impl FieldErrors {
    pub fn get(&self, field: SignupField) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn push(&mut self, field: SignupField, msg: &'static str) {
        self.0.push((field, msg));
    }
}

impl SignupForm {
    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Username => self.username = value,
            SignupField::Email => self.email = value,
            SignupField::FirstName => self.firstname = value,
            SignupField::LastName => self.lastname = value,
            SignupField::Password => self.password = value,
            SignupField::ConfirmPassword => self.confirm_password = value,
        }
    }

    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::Username => &self.username,
            SignupField::Email => &self.email,
            SignupField::FirstName => &self.firstname,
            SignupField::LastName => &self.lastname,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Checks every field and returns the request payload, or all the problems found.
    pub fn validate(&self) -> Result<SignupData, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.username.chars().count() < 3 {
            errors.push(SignupField::Username, "Username must be at least 3 characters");
        }
        if !is_email(&self.email) {
            errors.push(SignupField::Email, "Invalid email");
        }
        if self.firstname.is_empty() {
            errors.push(SignupField::FirstName, "First name is required");
        }
        if self.lastname.is_empty() {
            errors.push(SignupField::LastName, "Last name is required");
        }
        if self.password.chars().count() < 6 {
            errors.push(SignupField::Password, "Password must be at least 6 characters");
        }
        if self.password != self.confirm_password {
            errors.push(SignupField::ConfirmPassword, "Passwords do not match");
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(SignupData {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
        })
    }
}

pub fn is_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

pub fn check_login(username: &str, password: &str) -> Result<LoginData, &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Username and password are required");
    }
    Ok(LoginData {
        username: username.trim().to_string(),
        password: password.to_string(),
    })
}

/// Client-side gate in front of the upload: a file must be chosen and look like a CSV.
pub fn check_upload(file_name: Option<&str>) -> Result<(), &'static str> {
    match file_name {
        None => Err("Please select a CSV file before uploading."),
        Some(name) if !name.to_ascii_lowercase().ends_with(".csv") => {
            Err("File must be a CSV format.")
        }
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SignupForm {
        SignupForm {
            username: "grace".into(),
            email: "grace@navy.mil".into(),
            firstname: "Grace".into(),
            lastname: "Hopper".into(),
            password: "cobol59".into(),
            confirm_password: "cobol59".into(),
        }
    }

    #[test]
    fn complete_form_produces_payload() {
        let data = filled().validate().unwrap();
        assert_eq!(data.username, "grace");
        assert_eq!(data.lastname, "Hopper");
        assert_eq!(data.password, "cobol59");
    }

    #[test]
    fn empty_form_reports_every_field_but_confirm() {
        let errors = SignupForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(SignupField::Email), Some("Invalid email"));
        assert_eq!(errors.get(SignupField::ConfirmPassword), None);
    }

    #[test]
    fn mismatch_lands_on_confirm_field() {
        let mut form = filled();
        form.set(SignupField::ConfirmPassword, "cobol60".into());
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(SignupField::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn lengths_count_characters() {
        let mut form = filled();
        form.set(SignupField::Username, "李小".into());
        form.set(SignupField::Password, "pässw".into());
        form.set(SignupField::ConfirmPassword, "pässw".into());
        let errors = form.validate().unwrap_err();
        assert!(errors.get(SignupField::Username).is_some());
        assert!(errors.get(SignupField::Password).is_some());

        form.set(SignupField::Username, "李小龍".into());
        form.set(SignupField::Password, "pässwö".into());
        form.set(SignupField::ConfirmPassword, "pässwö".into());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(!is_email("plain"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a@b..co"));
        assert!(!is_email("a@@b.co"));
        assert!(!is_email("a b@c.co"));
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(check_login("", "pw").is_err());
        assert!(check_login("user", "").is_err());
        let data = check_login("  user ", "pw").unwrap();
        assert_eq!(data.username, "user");
    }

    #[test]
    fn upload_needs_a_csv() {
        assert_eq!(
            check_upload(None),
            Err("Please select a CSV file before uploading.")
        );
        assert_eq!(check_upload(Some("fraudTest.xlsx")), Err("File must be a CSV format."));
        assert_eq!(check_upload(Some("fraudTest.CSV")), Ok(()));
        assert_eq!(check_upload(Some("fraudTest.csv")), Ok(()));
    }
}
