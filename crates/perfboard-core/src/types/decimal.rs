//! 표시용 소수점 유틸리티.
//!
//! 계산은 `f64`로 수행하고, 화면에 표시되는 수치만 `Decimal`로 변환하여
//! 고정 소수점으로 반올림합니다.

use rust_decimal::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 퍼센트 타입 (5.0 = 5%).
pub type Percent = f64;

/// 표시용 반올림 자릿수.
pub const DISPLAY_DECIMALS: u32 = 2;

/// 값이 없거나 유한하지 않을 때 표시하는 문자열.
pub const NOT_AVAILABLE: &str = "N/A";

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 지정된 소수점 자릿수로 반올림합니다 (0.5는 0에서 먼 쪽으로).
    fn round_display(&self, dp: u32) -> Decimal;

    /// 정확히 `dp` 자리의 고정 소수점 문자열로 변환합니다 (예: "5.00").
    fn to_fixed(&self, dp: u32) -> String;
}

impl DecimalExt for Decimal {
    fn round_display(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    fn to_fixed(&self, dp: u32) -> String {
        let mut rounded = self.round_display(dp);
        rounded.rescale(dp);
        rounded.to_string()
    }
}

/// `f64`를 표시용 `Decimal`로 변환합니다.
///
/// NaN, 무한대, `Decimal` 범위를 벗어난 값은 `None`입니다.
pub fn decimal_from_f64(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64(value)
}

/// 값을 `dp` 자리로 반올림한 `f64`를 반환합니다.
pub fn round_f64(value: f64, dp: u32) -> Option<f64> {
    decimal_from_f64(value)?.round_display(dp).to_f64()
}

/// 값을 고정 소수점 문자열로 변환합니다. 표현할 수 없으면 `None`.
pub fn fixed(value: f64, dp: u32) -> Option<String> {
    decimal_from_f64(value).map(|d| d.to_fixed(dp))
}

/// 퍼센트 단위 값을 `%` 접미사가 붙은 문자열로 변환합니다 (예: "1.20%").
pub fn percent_string(value: Percent) -> String {
    fixed(value, DISPLAY_DECIMALS)
        .map(|s| format!("{s}%"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// 통화 표시 형식.
///
/// 기본값은 en-US 로케일의 USD 표기 (`$1,234.56`, 음수는 `-$1,234.56`)입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// 통화 기호
    pub symbol: String,
    /// 천 단위 구분자
    pub grouping_separator: String,
    /// 소수점 기호
    pub decimal_separator: String,
    /// 소수점 자릿수
    pub decimals: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            grouping_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimals: DISPLAY_DECIMALS,
        }
    }
}

impl CurrencyFormat {
    /// 금액을 통화 문자열로 변환합니다.
    ///
    /// 유한하지 않은 값은 `"N/A"`로 표시됩니다.
    pub fn format(&self, amount: f64) -> String {
        match decimal_from_f64(amount) {
            Some(d) => self.format_decimal(d),
            None => NOT_AVAILABLE.to_string(),
        }
    }

    /// `Decimal` 금액을 통화 문자열로 변환합니다.
    pub fn format_decimal(&self, amount: Decimal) -> String {
        let rounded = amount.round_display(self.decimals);
        let fixed = rounded.abs().to_fixed(self.decimals);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let grouped = group_digits(int_part, &self.grouping_separator);
        // -0.001 → "$0.00" (부호 없는 0)
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        match frac_part {
            Some(frac) => format!(
                "{sign}{}{grouped}{}{frac}",
                self.symbol, self.decimal_separator
            ),
            None => format!("{sign}{}{grouped}", self.symbol),
        }
    }
}

/// 정수 부분 문자열에 천 단위 구분자를 넣습니다.
fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
