//! 시계열 정렬 속성 테스트
//!
//! 입력 순서와 무관한 결과, 반복 실행 시 동일한 결과를 확인합니다.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use perfboard_analytics::align;
use perfboard_core::{format_date_key, BenchmarkRecord, PortfolioRecord};
use proptest::prelude::*;

fn day(offset: u16) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(i64::from(offset))
}

fn portfolio_from(days: &BTreeSet<u16>) -> Vec<PortfolioRecord> {
    days.iter()
        .map(|&d| {
            let investment = f64::from(d % 7) * 100.0;
            PortfolioRecord::new(format_date_key(day(d)), investment, 0.0, f64::from(d) * 0.5)
        })
        .collect()
}

fn benchmark_from(days: &BTreeSet<u16>) -> Vec<BenchmarkRecord> {
    days.iter()
        .map(|&d| {
            // 같은 날짜를 다른 표기로 기록
            let key = day(d).format("%b %-d, %Y").to_string();
            BenchmarkRecord::new(key, f64::from(d) / 10.0 - 3.0)
        })
        .collect()
}

proptest! {
    /// 결과 길이는 합집합 날짜 수와 같고, 각 포인트는 기여한 쪽의 값만 가짐
    #[test]
    fn output_covers_union_of_dates(
        p_days in prop::collection::btree_set(0u16..400, 0..40),
        b_days in prop::collection::btree_set(0u16..400, 0..40),
    ) {
        let points = align(&portfolio_from(&p_days), &benchmark_from(&b_days)).unwrap();
        let union: BTreeSet<u16> = p_days.union(&b_days).copied().collect();

        prop_assert_eq!(points.len(), union.len());
        for (point, d) in points.iter().zip(union.iter()) {
            prop_assert_eq!(point.date, day(*d));
            prop_assert_eq!(point.portfolio_value.is_some(), p_days.contains(d));
            prop_assert_eq!(point.benchmark_value.is_some(), b_days.contains(d));
        }
    }

    /// 입력 순서를 섞어도 결과는 같고 날짜는 엄격히 오름차순
    #[test]
    fn output_is_invariant_under_reordering(
        p_days in prop::collection::btree_set(0u16..400, 0..30),
        b_days in prop::collection::btree_set(0u16..400, 0..30),
        rotate_p in 0usize..30,
        rotate_b in 0usize..30,
    ) {
        let portfolio = portfolio_from(&p_days);
        let benchmark = benchmark_from(&b_days);
        let expected = align(&portfolio, &benchmark).unwrap();

        let mut shuffled_p = portfolio.clone();
        shuffled_p.reverse();
        if !shuffled_p.is_empty() {
            let k = rotate_p % shuffled_p.len();
            shuffled_p.rotate_left(k);
        }
        let mut shuffled_b = benchmark.clone();
        if !shuffled_b.is_empty() {
            let k = rotate_b % shuffled_b.len();
            shuffled_b.rotate_left(k);
        }

        let actual = align(&shuffled_p, &shuffled_b).unwrap();
        prop_assert_eq!(&actual, &expected);
        prop_assert!(actual.windows(2).all(|w| w[0].date < w[1].date));
    }

    /// 같은 입력으로 두 번 실행하면 동일한 직렬화 결과
    #[test]
    fn repeated_runs_are_identical(
        p_days in prop::collection::btree_set(0u16..400, 0..30),
        b_days in prop::collection::btree_set(0u16..400, 0..30),
    ) {
        let portfolio = portfolio_from(&p_days);
        let benchmark = benchmark_from(&b_days);

        let first = serde_json::to_string(&align(&portfolio, &benchmark).unwrap()).unwrap();
        let second = serde_json::to_string(&align(&portfolio, &benchmark).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_inputs_are_not_mutated() {
    let portfolio = vec![
        PortfolioRecord::new("2024-01-03", 100.0, 0.0, 1.0),
        PortfolioRecord::new("2024-01-01", 100.0, 0.0, 2.0),
    ];
    let before = portfolio.clone();

    let _ = align(&portfolio, &[]).unwrap();
    assert_eq!(portfolio, before);
}
