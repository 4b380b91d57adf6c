use std::str::FromStr;

use crate::prelude::*;

pub fn delimiter(value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [byte] if byte.is_ascii() && !byte.is_ascii_alphanumeric() => Ok(*byte),
            _ => Err(anyhow!("`{}` is not a valid delimiter", value)),
        },
    }
}

pub fn sample_rate(value: &str) -> Result<f32> {
    match f32::from_str(value)? {
        value if (0.0..=1.0).contains(&value) => Ok(value),
        value => Err(anyhow!("{} is not within [0, 1]", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_ok() -> Result {
        assert_eq!(delimiter(";")?, b';');
        assert_eq!(delimiter(",")?, b',');
        assert_eq!(delimiter("tab")?, b'\t');
        Ok(())
    }

    #[test]
    fn delimiter_error() {
        assert!(delimiter("").is_err());
        assert!(delimiter(";;").is_err());
        assert!(delimiter("a").is_err());
        assert!(delimiter("ж").is_err());
    }

    #[test]
    fn sample_rate_ok() -> Result {
        assert!((sample_rate("0.25")? - 0.25).abs() < f32::EPSILON);
        assert!(sample_rate("1.5").is_err());
        assert!(sample_rate("-0.1").is_err());
        Ok(())
    }
}
