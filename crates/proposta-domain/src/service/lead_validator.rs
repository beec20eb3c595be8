//! Lead contact validation

use proposta_types::{FieldError, LeadContact, LeadValidationError};
use regex::Regex;
use std::sync::OnceLock;

const MIN_COMPANY_NAME_CHARS: usize = 2;
const MIN_PHONE_CHARS: usize = 10;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Validate the contact fields of a lead
///
/// Every failing field is reported, not just the first one.
pub fn validate_lead(lead: &LeadContact) -> Result<(), LeadValidationError> {
    let mut fields = Vec::new();

    if lead.company_name.trim().chars().count() < MIN_COMPANY_NAME_CHARS {
        fields.push(FieldError {
            field: "company_name",
            message: "Nome da empresa é obrigatório".to_string(),
        });
    }

    if !email_pattern().is_match(lead.email.trim()) {
        fields.push(FieldError {
            field: "email",
            message: "E-mail inválido".to_string(),
        });
    }

    if lead.phone.trim().chars().count() < MIN_PHONE_CHARS {
        fields.push(FieldError {
            field: "phone",
            message: "Telefone inválido".to_string(),
        });
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(LeadValidationError { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_lead() -> LeadContact {
        LeadContact {
            company_name: "Clínica São Lucas".to_string(),
            email: "contato@clinica.com.br".to_string(),
            phone: "(11) 99999-9999".to_string(),
        }
    }

    #[test]
    fn test_valid_lead() {
        assert!(validate_lead(&valid_lead()).is_ok());
    }

    #[test]
    fn test_short_company_name() {
        let lead = LeadContact {
            company_name: " A ".to_string(),
            ..valid_lead()
        };
        let err = validate_lead(&lead).unwrap_err();
        assert_eq!(
            err.message_for("company_name"),
            Some("Nome da empresa é obrigatório")
        );
        assert_eq!(err.fields.len(), 1);
    }

    #[test]
    fn test_bad_emails() {
        for email in ["", "contato", "contato@clinica", "a b@clinica.com", "@clinica.com"] {
            let lead = LeadContact {
                email: email.to_string(),
                ..valid_lead()
            };
            let err = validate_lead(&lead).unwrap_err();
            assert_eq!(err.message_for("email"), Some("E-mail inválido"), "email = {:?}", email);
        }
    }

    #[test]
    fn test_short_phone() {
        let lead = LeadContact {
            phone: "9999-9999".to_string(),
            ..valid_lead()
        };
        let err = validate_lead(&lead).unwrap_err();
        assert_eq!(err.message_for("phone"), Some("Telefone inválido"));
    }

    #[test]
    fn test_reports_all_fields() {
        let err = validate_lead(&LeadContact::default()).unwrap_err();
        let fields: Vec<_> = err.fields.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["company_name", "email", "phone"]);
    }
}
