//! Text normalization for search comparisons

/// Produce a case-folded, diacritic-stripped form of `text`
///
/// Lowercases the input and substitutes the Turkish-specific characters
/// (ğ→g, ü→u, ş→s, ı→i, ö→o, ç→c) so queries like "kupe" match products
/// named "Küpe". All other characters pass through unchanged.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        for folded in ch.to_lowercase() {
            match folded {
                'ğ' => out.push('g'),
                'ü' => out.push('u'),
                'ş' => out.push('s'),
                'ı' => out.push('i'),
                'ö' => out.push('o'),
                'ç' => out.push('c'),
                // lowercasing a dotted capital İ leaves 'i' + a combining dot
                '\u{0307}' => {}
                other => out.push(other),
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_turkish_characters() {
        assert_eq!(normalize("Küpe"), "kupe");
        assert_eq!(normalize("Altın"), "altin");
        assert_eq!(normalize("GÜMÜŞ"), "gumus");
        assert_eq!(normalize("Yüzük"), "yuzuk");
        assert_eq!(normalize("Broş Çiçek"), "bros cicek");
    }

    #[test]
    fn test_dotted_capital_i() {
        assert_eq!(normalize("İnce"), "ince");
        assert_eq!(normalize("İPEK"), "ipek");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize("gold-14k"), "gold-14k");
        assert_eq!(normalize("Silver 925"), "silver 925");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }
}
