use maud::Render;

/// Brazilian real amount, formatted as `R$ 1,234.56`.
pub struct Currency(pub f64);

impl Render for Currency {
    fn render_to(&self, buffer: &mut String) {
        buffer.push_str("R$ ");
        push_grouped(buffer, self.0);
    }
}

/// Pushes the value rounded to cents, with thousands separated by commas.
fn push_grouped(buffer: &mut String, value: f64) {
    let formatted = format!("{:.2}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    if value.is_sign_negative() && formatted.bytes().any(|byte| (b'1'..=b'9').contains(&byte)) {
        buffer.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i != 0 && (integer.len() - i) % 3 == 0 {
            buffer.push(',');
        }
        buffer.push(digit);
    }
    if !fraction.is_empty() {
        buffer.push('.');
        buffer.push_str(fraction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(value: f64) -> String {
        Currency(value).render().into_string()
    }

    #[test]
    fn currency_ok() {
        assert_eq!(render(0.0), "R$ 0.00");
        assert_eq!(render(999.0), "R$ 999.00");
        assert_eq!(render(1200.0), "R$ 1,200.00");
        assert_eq!(render(1234.567), "R$ 1,234.57");
        assert_eq!(render(1_234_567.891), "R$ 1,234,567.89");
        assert_eq!(render(123_456.0), "R$ 123,456.00");
    }

    #[test]
    fn negative_ok() {
        assert_eq!(render(-1500.5), "R$ -1,500.50");
        assert_eq!(render(-0.001), "R$ 0.00");
    }
}
