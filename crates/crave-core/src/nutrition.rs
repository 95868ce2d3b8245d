//! Nutrition estimates for the detail view.
//!
//! The recipe API carries no nutrition data, so values are derived from the
//! recipe identifier alone. Same id, same numbers.

/// Seed used when the id has no leading integer (or it parses to zero)
const FALLBACK_SEED: i64 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nutrition {
    pub calories: i64,
    /// grams
    pub protein: i64,
    /// grams
    pub carbs: i64,
    /// grams
    pub fats: i64,
}

impl Nutrition {
    pub fn estimate(id: &str) -> Self {
        let seed = match leading_integer(id) {
            Some(0) | None => FALLBACK_SEED,
            Some(n) => n,
        };

        Self {
            calories: seed % 500 + 200,
            protein: seed % 40 + 10,
            carbs: seed % 60 + 20,
            fats: seed % 30 + 5,
        }
    }

    /// (label, display value) pairs in card order
    pub fn cells(&self) -> [(&'static str, String); 4] {
        [
            ("Calories", self.calories.to_string()),
            ("Protein", format!("{}g", self.protein)),
            ("Carbs", format!("{}g", self.carbs)),
            ("Fats", format!("{}g", self.fats)),
        ]
    }
}

/// Parse an optional sign followed by digits after leading whitespace,
/// ignoring whatever trails them ("52772abc" -> 52772).
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Ids past i64 saturate to i64::MAX. A float parse of the same digits
    // would keep growing, so estimates for such ids differ from one.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_known_id() {
        let n = Nutrition::estimate("52772");
        assert_eq!(
            n,
            Nutrition {
                calories: 472,
                protein: 22,
                carbs: 52,
                fats: 7
            }
        );
    }

    #[test]
    fn test_estimate_is_deterministic() {
        assert_eq!(Nutrition::estimate("53012"), Nutrition::estimate("53012"));
    }

    #[test]
    fn test_non_numeric_and_zero_use_fallback() {
        let fallback = Nutrition::estimate("50000");
        assert_eq!(Nutrition::estimate("abc"), fallback);
        assert_eq!(Nutrition::estimate(""), fallback);
        assert_eq!(Nutrition::estimate("0"), fallback);
        assert_eq!(fallback.calories, 200);
        assert_eq!(fallback.fats, 25);
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(Nutrition::estimate("  52772xyz"), Nutrition::estimate("52772"));
    }

    #[test]
    fn test_oversized_id_saturates() {
        assert_eq!(leading_integer("123456789012345678901234"), Some(i64::MAX));
        assert_eq!(leading_integer("-123456789012345678901234"), Some(-i64::MAX));
    }

    #[test]
    fn test_cells_format_grams() {
        let cells = Nutrition::estimate("52772").cells();
        assert_eq!(cells[0], ("Calories", "472".to_string()));
        assert_eq!(cells[1], ("Protein", "22g".to_string()));
        assert_eq!(cells[3], ("Fats", "7g".to_string()));
    }
}
