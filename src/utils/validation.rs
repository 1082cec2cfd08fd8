//! Utilidades de validación
//!
//! Este módulo contiene las reglas de validación de nombres de marca
//! y helpers para construir patrones de búsqueda seguros.

use crate::utils::errors::AppError;

/// Longitud máxima permitida para el nombre de una marca
pub const MAX_BRAND_NAME_LEN: usize = 100;

/// Normaliza y valida un nombre de marca propuesto.
///
/// El nombre se recorta de espacios en ambos extremos; después del recorte
/// debe ser no vacío y de como máximo [`MAX_BRAND_NAME_LEN`] caracteres.
pub fn normalize_brand_name(raw: &str) -> Result<String, AppError> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(AppError::Validation(
            "El nombre de la marca es requerido".to_string(),
        ));
    }

    if name.chars().count() > MAX_BRAND_NAME_LEN {
        return Err(AppError::Validation(format!(
            "El nombre de la marca no puede superar {} caracteres",
            MAX_BRAND_NAME_LEN
        )));
    }

    Ok(name.to_string())
}

/// Escapa los metacaracteres de un patrón LIKE/ILIKE (`%`, `_` y `\`)
/// para que un valor suministrado por el usuario se compare de forma literal.
pub fn escape_like_pattern(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_surrounding_whitespace() {
        let name = normalize_brand_name("  Honda  ").unwrap();
        assert_eq!(name, "Honda");
    }

    #[test]
    fn test_normalize_rejects_whitespace_only() {
        let result = normalize_brand_name("   ");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        let result = normalize_brand_name("");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_normalize_length_boundary() {
        let max = "a".repeat(100);
        assert_eq!(normalize_brand_name(&max).unwrap(), max);

        let too_long = "a".repeat(101);
        assert!(matches!(
            normalize_brand_name(&too_long),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_escape_like_pattern_literal() {
        assert_eq!(escape_like_pattern("Honda"), "Honda");
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}
