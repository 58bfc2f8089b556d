//! Cleaning of the amount text field.

/// Strip thousands separators.
pub fn remove_commas(input: &str) -> String {
    input.replace(',', "")
}

/// Drop redundant leading zeros from the integer part, keeping one digit
/// before the decimal point. A bare `"."` becomes `"0."`.
pub fn trim_leading_zero(input: &str) -> &str {
    if input == "." {
        return "0.";
    }
    let mut out = input;
    loop {
        let integer = out.split('.').next().unwrap_or_default();
        if integer.len() > 1 && integer.starts_with('0') {
            out = &out[1..];
        } else {
            return out;
        }
    }
}

/// Apply [`remove_commas`] and [`trim_leading_zero`] to raw user input.
pub fn clean_input(input: &str) -> String {
    let stripped = remove_commas(input.trim());
    trim_leading_zero(&stripped).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas() {
        assert_eq!(remove_commas("1,000,000.5"), "1000000.5");
        assert_eq!(remove_commas("42"), "42");
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(trim_leading_zero("."), "0.");
        assert_eq!(trim_leading_zero("0"), "0");
        assert_eq!(trim_leading_zero("0.5"), "0.5");
        assert_eq!(trim_leading_zero("05"), "5");
        assert_eq!(trim_leading_zero("007.25"), "7.25");
        assert_eq!(trim_leading_zero("00.1"), "0.1");
        assert_eq!(trim_leading_zero("100"), "100");
        assert_eq!(trim_leading_zero(""), "");
    }

    #[test]
    fn cleans_both() {
        assert_eq!(clean_input(" 01,250.75 "), "1250.75");
        assert_eq!(clean_input("."), "0.");
    }
}
