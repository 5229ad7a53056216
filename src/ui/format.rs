//! Display formatting for profiles: rate limits, price, type badge.
//!
//! 빈 문자열은 값이 없는 것으로 취급

use crate::types::{Profile, ProfileType};

/// 속도 제한이 없을 때 표시
pub const UNLIMITED: &str = "Unlim";

/// 값이 없는 셀
pub const EMPTY_CELL: &str = "-";

pub const CURRENCY_PREFIX: &str = "Rp ";

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// 고객 폼 드롭다운 라벨: `name (up/down)`
pub fn profile_option_label(profile: &Profile) -> String {
    format!(
        "{} ({}/{})",
        profile.name,
        present(profile.rate_limit_up.as_deref()).unwrap_or(UNLIMITED),
        present(profile.rate_limit_down.as_deref()).unwrap_or(UNLIMITED),
    )
}

/// 테이블 셀: 둘 다 없으면 `-`, 아니면 `up / down`
pub fn rate_limit_pair(up: Option<&str>, down: Option<&str>) -> String {
    match (present(up), present(down)) {
        (None, None) => EMPTY_CELL.to_string(),
        (up, down) => format!(
            "{} / {}",
            up.unwrap_or(UNLIMITED),
            down.unwrap_or(UNLIMITED)
        ),
    }
}

pub fn remote_address(profile: &Profile) -> String {
    present(
        profile
            .pppoe
            .as_ref()
            .and_then(|p| p.remote_address.as_deref()),
    )
    .unwrap_or(EMPTY_CELL)
    .to_string()
}

pub fn type_badge(profile_type: &ProfileType) -> String {
    match profile_type.as_str() {
        "" => EMPTY_CELL.to_string(),
        raw => raw.to_uppercase(),
    }
}

/// `Rp 150,000` 형식. 없거나 0 이면 `Rp 0`, 소수점은 반올림
pub fn price(value: Option<f64>, separator: char) -> String {
    let amount = match value {
        Some(v) if v.is_finite() && v != 0.0 => v.round() as i128,
        _ => 0,
    };
    format!("{}{}", CURRENCY_PREFIX, group_digits(amount, separator))
}

/// 천 단위 구분자 삽입
pub fn group_digits(value: i128, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(up: Option<&str>, down: Option<&str>) -> Profile {
        Profile {
            id: "p1".to_string(),
            name: "Basic".to_string(),
            profile_type: ProfileType::Pppoe,
            rate_limit_up: up.map(str::to_string),
            rate_limit_down: down.map(str::to_string),
            price: None,
            mikrotik_id: None,
            pppoe: None,
        }
    }

    #[test]
    fn test_option_label() {
        assert_eq!(profile_option_label(&profile(Some("1M"), None)), "Basic (1M/Unlim)");
        assert_eq!(profile_option_label(&profile(None, None)), "Basic (Unlim/Unlim)");
        assert_eq!(
            profile_option_label(&profile(Some("5M"), Some("10M"))),
            "Basic (5M/10M)"
        );
    }

    #[test]
    fn test_rate_limit_pair() {
        assert_eq!(rate_limit_pair(None, None), "-");
        assert_eq!(rate_limit_pair(Some(""), Some("")), "-");
        assert_eq!(rate_limit_pair(None, Some("2M")), "Unlim / 2M");
        assert_eq!(rate_limit_pair(Some("1M"), Some("2M")), "1M / 2M");
    }

    #[test]
    fn test_price() {
        assert_eq!(price(None, ','), "Rp 0");
        assert_eq!(price(Some(0.0), ','), "Rp 0");
        assert_eq!(price(Some(999.0), ','), "Rp 999");
        assert_eq!(price(Some(150000.0), ','), "Rp 150,000");
        assert_eq!(price(Some(1250000.6), '.'), "Rp 1.250.001");
        assert_eq!(price(Some(f64::NAN), ','), "Rp 0");
    }

    #[test]
    fn test_group_digits_negative() {
        assert_eq!(group_digits(-1234567, ','), "-1,234,567");
        assert_eq!(group_digits(100, ','), "100");
    }

    #[test]
    fn test_remote_address_and_badge() {
        let p = profile(None, None);
        assert_eq!(remote_address(&p), "-");
        assert_eq!(type_badge(&ProfileType::StaticIp), "STATIC_IP");
        assert_eq!(type_badge(&ProfileType::Unknown), "-");
    }
}
