// src/common/validation.rs

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::common::error::AppError;

/// Tipos de imagem aceitos no pôster (data URI em base64).
pub const ACCEPTED_POSTER_TYPES: [&str; 5] = ["jpeg", "jpg", "png", "gif", "webp"];

pub fn is_base64_image(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };
    ACCEPTED_POSTER_TYPES.iter().any(|mime| {
        rest.strip_prefix(mime)
            .is_some_and(|tail| tail.starts_with(";base64,"))
    })
}

// ---
// Validações customizadas (usadas via #[validate(custom(...))])
// ---
pub fn validate_poster(value: &str) -> Result<(), ValidationError> {
    if is_base64_image(value) {
        return Ok(());
    }
    let mut err = ValidationError::new("poster_format");
    err.message = Some("Formato de imagem inválido. Envie uma imagem base64 válida.".into());
    Err(err)
}

/// Maior preço que cabe em NUMERIC(10, 2).
// 9_999_999_999 centésimos = lo + mid * 2^32
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

pub fn validate_price(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("O valor não pode ser negativo.".into());
        return Err(err);
    }
    if *val > MAX_PRICE {
        let mut err = ValidationError::new("range");
        err.add_param("max".into(), &99_999_999.99);
        err.message = Some("O preço máximo é 99999999.99.".into());
        return Err(err);
    }
    // NUMERIC(10, 2) arredondaria a terceira casa em silêncio
    if val.normalize().scale() > 2 {
        let mut err = ValidationError::new("scale");
        err.message = Some("O preço aceita no máximo 2 casas decimais.".into());
        return Err(err);
    }
    Ok(())
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("O campo não pode ficar em branco.".into());
        return Err(err);
    }
    Ok(())
}

/// Remove pontuação do CPF e exige 11 dígitos.
pub fn normalize_cpf(value: &str) -> Result<String, AppError> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 11 {
        return Err(AppError::InvalidInput("CPF inválido".to_string()));
    }
    Ok(digits)
}

/// CPF opcional: vazio ou só espaços conta como ausente.
pub fn optional_cpf(value: Option<&str>) -> Result<Option<String>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(cpf) => normalize_cpf(cpf).map(Some),
    }
}
