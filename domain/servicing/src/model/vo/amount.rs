/// Reads a free-text amount such as `"4500"`, `"4.500 RSD"`, `"4.500,50"`,
/// `"1,200.25"` or `"12,5 €"`.
///
/// The last separator is the decimal one, except a lone dot followed by
/// exactly three digits, which groups thousands. Repeated separators always
/// group thousands.
pub fn parse_amount(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    let normalized = match (digits.rfind(','), digits.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => digits.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => digits.replace(',', ""),
        (Some(_), None) if digits.matches(',').count() > 1 => digits.replace(',', ""),
        (Some(_), None) => digits.replace(',', "."),
        (None, Some(dot)) if digits.matches('.').count() > 1 || digits.len() - dot == 4 => {
            digits.replace('.', "")
        }
        _ => digits,
    };
    normalized.parse().ok()
}
