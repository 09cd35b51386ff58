// File: tests/calc_properties.rs
// Display and list-editing contracts exercised through the public API.
use chrono::NaiveDate;
use himekuri::error::FormatError;
use himekuri::list;
use himekuri::{format, interval};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_era_formatting_scenarios() {
    assert_eq!(
        format::japanese_era(date(2022, 11, 10)).unwrap(),
        "令和4年11月10日"
    );
    assert_eq!(
        format::japanese_era(date(2019, 11, 1)).unwrap(),
        "令和元年11月1日"
    );
    assert_eq!(
        format::japanese_era(date(1980, 5, 26)).unwrap(),
        "昭和55年5月26日"
    );
}

#[test]
fn test_era_year_one_never_renders_as_numeral_one() {
    // A date inside the first calendar year of each modern era.
    let gannen_dates = [
        date(1912, 8, 1),   // 大正元年
        date(1926, 12, 26), // 昭和元年
        date(1989, 2, 1),   // 平成元年
        date(2019, 6, 1),   // 令和元年
    ];
    for d in gannen_dates {
        let rendered = format::japanese_era(d).unwrap();
        assert!(rendered.contains("元年"), "{} rendered as {}", d, rendered);
        assert!(!rendered.contains("1年"), "{} rendered as {}", d, rendered);
    }
}

#[test]
fn test_pre_meiji_is_a_format_error() {
    assert!(matches!(
        format::japanese_era(date(1867, 12, 31)),
        Err(FormatError::BeforeEraTable { .. })
    ));
}

#[test]
fn test_interval_scenarios() {
    assert_eq!(
        interval::between_string(date(1980, 5, 26), date(2022, 6, 28)).unwrap(),
        "42 年 1 カ月 2 日"
    );
    assert_eq!(
        interval::between_string(date(1980, 5, 1), date(1980, 5, 20)).unwrap(),
        "0 年 0 カ月 19 日"
    );
}

#[test]
fn test_interval_is_reflexively_zero() {
    for d in [date(1980, 5, 26), date(2000, 2, 29), date(2022, 12, 31)] {
        let zero = interval::between(d, d).unwrap();
        assert_eq!((zero.years, zero.months, zero.days), (0, 0, 0));
    }
}

#[test]
fn test_interval_components_non_negative_for_ordered_dates() {
    let starts = [date(1980, 5, 26), date(2019, 5, 1), date(2020, 2, 29)];
    let ends = [date(2020, 3, 1), date(2022, 6, 28), date(2024, 2, 29)];
    for start in starts {
        for end in ends {
            let i = interval::between(start, end).unwrap();
            assert!(i.years >= 0 && i.months >= 0 && i.days >= 0);
        }
    }
}

#[test]
fn test_swap_scenarios() {
    assert_eq!(list::swap(&[1, 2, 3, 4], 1, 2), vec![1, 3, 2, 4]);
    assert_eq!(list::swap(&[1, 2, 3, 4], -1, 2), vec![1, 2, 3, 4]);
    assert_eq!(list::swap(&[1, 2, 3, 4], 1, 4), vec![1, 2, 3, 4]);
}

#[test]
fn test_upsert_keeps_keys_unique() {
    let items: Vec<(String, u32)> = vec![("a".into(), 1), ("b".into(), 2)];
    let out = list::upsert_by_key(&items, |e| e.0.clone(), ("a".into(), 3));
    let a_count = out.iter().filter(|e| e.0 == "a").count();
    assert_eq!(a_count, 1);
    assert_eq!(out.last().unwrap().1, 3);
}
