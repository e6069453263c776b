//! CPF / CNPJ checksum validation and formatting.
//!
//! Both documents carry two trailing mod-11 check digits. Punctuation is
//! ignored on input: everything that is not an ASCII digit is stripped
//! before validation.

const CPF_LEN: usize = 11;
const CNPJ_LEN: usize = 14;

const CNPJ_WEIGHTS_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// ASCII digits of `input`, in order.
pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn digit_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// `0` when the remainder is below 2, else `11 - remainder`.
fn check_digit<'a, I>(digits: &[u32], weights: I) -> u32
where
    I: IntoIterator<Item = &'a u32>,
{
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

pub fn validate_cpf(input: &str) -> bool {
    let digits = digit_values(&only_digits(input));
    if digits.len() != CPF_LEN || all_same(&digits) {
        return false;
    }
    let weights_1: Vec<u32> = (2..=10).rev().collect();
    let weights_2: Vec<u32> = (2..=11).rev().collect();
    let first = check_digit(&digits[..9], &weights_1);
    let second = check_digit(&digits[..10], &weights_2);
    first == digits[9] && second == digits[10]
}

pub fn validate_cnpj(input: &str) -> bool {
    let digits = digit_values(&only_digits(input));
    if digits.len() != CNPJ_LEN || all_same(&digits) {
        return false;
    }
    let first = check_digit(&digits[..12], &CNPJ_WEIGHTS_1);
    let second = check_digit(&digits[..13], &CNPJ_WEIGHTS_2);
    first == digits[12] && second == digits[13]
}

/// Validate by stripped length: 11 digits as CPF, 14 as CNPJ.
pub fn validate_document(input: &str) -> bool {
    match only_digits(input).len() {
        CPF_LEN => validate_cpf(input),
        CNPJ_LEN => validate_cnpj(input),
        _ => false,
    }
}

/// `###.###.###-##`, or the stripped digits when the length is wrong.
pub fn format_cpf(input: &str) -> String {
    let d = only_digits(input);
    if d.len() != CPF_LEN {
        return d;
    }
    format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
}

/// `##.###.###/####-##`, or the stripped digits when the length is wrong.
pub fn format_cnpj(input: &str) -> String {
    let d = only_digits(input);
    if d.len() != CNPJ_LEN {
        return d;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[0..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    )
}

/// Format by stripped length, like `validate_document`.
pub fn format_document(input: &str) -> String {
    match only_digits(input).len() {
        CNPJ_LEN => format_cnpj(input),
        _ => format_cpf(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpf_valid() {
        assert!(validate_cpf("123.456.789-09"));
        assert!(validate_cpf("12345678909"));
        assert!(validate_cpf("529.982.247-25"));
    }

    #[test]
    fn test_cpf_invalid() {
        assert!(!validate_cpf("123.456.789-00"));
        assert!(!validate_cpf("529.982.247-52"));
        assert!(!validate_cpf("11111111111"));
        assert!(!validate_cpf("000.000.000-00"));
        assert!(!validate_cpf("123"));
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("123456789091"));
    }

    #[test]
    fn test_cnpj_valid() {
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(validate_cnpj("11222333000181"));
    }

    #[test]
    fn test_cnpj_invalid() {
        assert!(!validate_cnpj("11.222.333/0001-82"));
        assert!(!validate_cnpj("11111111111111"));
        assert!(!validate_cnpj("1122233300018"));
    }

    #[test]
    fn test_validate_document_dispatch() {
        assert!(validate_document("123.456.789-09"));
        assert!(validate_document("11.222.333/0001-81"));
        assert!(!validate_document("1234"));
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("12345678909"), "123.456.789-09");
        assert_eq!(format_cpf("123.456.789-09"), "123.456.789-09");
        assert_eq!(format_cpf("12-3"), "123");
    }

    #[test]
    fn test_format_cnpj() {
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format_cnpj("abc"), "");
    }

    #[test]
    fn test_format_document() {
        assert_eq!(format_document("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format_document("12345678909"), "123.456.789-09");
    }
}
