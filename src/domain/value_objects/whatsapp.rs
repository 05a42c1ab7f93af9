use anyhow::{Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::domain::entities::plans::PlanEntity;

pub const DEFAULT_BRAND_NAME: &str = "ZerionTV";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, matching `encodeURIComponent`.
const MESSAGE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const MIN_NUMBER_DIGITS: usize = 10;
const MAX_NUMBER_DIGITS: usize = 15;

/// Strips the usual phone-number punctuation and checks what is left is a plausible
/// international number, as wa.me expects digits only.
pub fn normalize_whatsapp_number(raw: &str) -> Result<String> {
    let mut digits = String::with_capacity(raw.len());
    for c in raw.trim().chars() {
        match c {
            '0'..='9' => digits.push(c),
            '+' | ' ' | '-' | '(' | ')' | '.' => {}
            _ => bail!("Invalid WhatsApp number: unexpected character '{}'", c),
        }
    }

    if digits.len() < MIN_NUMBER_DIGITS || digits.len() > MAX_NUMBER_DIGITS {
        bail!(
            "Invalid WhatsApp number: expected {}-{} digits, got {}",
            MIN_NUMBER_DIGITS,
            MAX_NUMBER_DIGITS,
            digits.len()
        );
    }

    Ok(digits)
}

pub fn payment_proof_message(plan: &PlanEntity, brand_name: &str) -> String {
    format!(
        "Olá! Acabei de fazer o PIX para renovação do plano {} (R${}) da {}. Segue o comprovante de pagamento:",
        plan.name, plan.price, brand_name
    )
}

pub fn renewal_message(brand_name: &str) -> String {
    format!("Olá! Gostaria de renovar meu IPTV {}", brand_name)
}

pub fn build_link(whatsapp_number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE_URL,
        whatsapp_number,
        utf8_percent_encode(message, MESSAGE_ENCODE_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::plan_types::PlanType;

    fn monthly() -> PlanEntity {
        PlanEntity {
            plan_type: PlanType::Monthly,
            price: 8,
            name: "Mensal".to_string(),
            features: Vec::new(),
            popular: false,
            savings: None,
        }
    }

    #[test]
    fn number_punctuation_is_stripped() {
        assert_eq!(
            normalize_whatsapp_number("+55 (11) 92075-2428").unwrap(),
            "5511920752428"
        );
    }

    #[test]
    fn number_with_letters_or_wrong_length_is_rejected() {
        assert!(normalize_whatsapp_number("55119207524x8").is_err());
        assert!(normalize_whatsapp_number("12345").is_err());
        assert!(normalize_whatsapp_number("1234567890123456").is_err());
    }

    #[test]
    fn payment_proof_message_names_plan_and_price() {
        assert_eq!(
            payment_proof_message(&monthly(), "ZerionTV"),
            "Olá! Acabei de fazer o PIX para renovação do plano Mensal (R$8) da ZerionTV. Segue o comprovante de pagamento:"
        );
    }

    #[test]
    fn link_percent_encodes_message() {
        let link = build_link("5511920752428", &renewal_message("ZerionTV"));
        assert_eq!(
            link,
            "https://wa.me/5511920752428?text=Ol%C3%A1!%20Gostaria%20de%20renovar%20meu%20IPTV%20ZerionTV"
        );
    }

    #[test]
    fn link_keeps_uri_component_safe_punctuation() {
        let link = build_link("5511920752428", "Olá! plano Mensal (R$8)");
        assert_eq!(
            link,
            "https://wa.me/5511920752428?text=Ol%C3%A1!%20plano%20Mensal%20(R%248)"
        );

        let link = build_link("5511920752428", "a*b~c'd-e_f.g & h/i?j=k#l");
        assert!(link.ends_with("?text=a*b~c'd-e_f.g%20%26%20h%2Fi%3Fj%3Dk%23l"));
    }
}
