use chrono::NaiveDate;
use spendview::domain::{BudgetRequest, Frequency};
use spendview::errors::ValidationError;
use spendview::expansion::{expand_budget, month_span};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn request(start: NaiveDate, end: NaiveDate) -> BudgetRequest {
    BudgetRequest {
        name: "Groceries".into(),
        amount: 900.0,
        start_date: Some(start),
        end_date: Some(end),
        currency: "USD".into(),
        frequency: Some(Frequency::Monthly),
        is_active: true,
    }
}

#[test]
fn expansion_covers_three_months_with_leap_february() {
    let records = expand_budget(&request(date(2024, 1, 15), date(2024, 3, 10))).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Groceries - January 2024");
    assert_eq!(records[1].name, "Groceries - February 2024");
    assert_eq!(records[2].name, "Groceries - March 2024");

    assert_eq!(records[0].start_date, date(2024, 1, 1));
    assert_eq!(records[0].end_date, date(2024, 1, 31));
    assert_eq!(records[1].start_date, date(2024, 2, 1));
    assert_eq!(records[1].end_date, date(2024, 2, 29));
    assert_eq!(records[2].start_date, date(2024, 3, 1));
    assert_eq!(records[2].end_date, date(2024, 3, 31));

    for record in &records {
        assert_eq!(record.total_limit, 900.0);
        assert_eq!(record.currency, "USD");
        assert_eq!(record.frequency, Frequency::Monthly);
        assert!(record.is_active);
    }
}

#[test]
fn expansion_spans_year_rollover() {
    let records = expand_budget(&request(date(2023, 11, 20), date(2024, 2, 5))).unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].name, "Groceries - November 2023");
    assert_eq!(records[3].name, "Groceries - February 2024");
    assert_eq!(records[3].end_date, date(2024, 2, 29));
}

#[test]
fn record_count_matches_inclusive_month_span() {
    let cases = [
        (date(2024, 1, 1), date(2024, 1, 31)),
        (date(2024, 1, 31), date(2024, 2, 1)),
        (date(2022, 6, 15), date(2024, 6, 14)),
    ];
    for (start, end) in cases {
        let records = expand_budget(&request(start, end)).unwrap();
        assert_eq!(records.len(), month_span(start, end) as usize);
        for window in records.windows(2) {
            assert!(window[0].end_date < window[1].start_date);
        }
    }
}

#[test]
fn equal_dates_are_rejected() {
    let result = expand_budget(&request(date(2024, 3, 1), date(2024, 3, 1)));
    assert_eq!(result, Err(ValidationError::EndBeforeStart));
}

#[test]
fn reversed_dates_are_rejected() {
    let result = expand_budget(&request(date(2024, 3, 10), date(2024, 1, 15)));
    assert_eq!(result, Err(ValidationError::EndBeforeStart));
}

#[test]
fn missing_fields_block_expansion() {
    let mut req = request(date(2024, 1, 1), date(2024, 2, 1));
    req.name = "   ".into();
    assert_eq!(expand_budget(&req), Err(ValidationError::EmptyName));

    let mut req = request(date(2024, 1, 1), date(2024, 2, 1));
    req.amount = 0.0;
    assert_eq!(expand_budget(&req), Err(ValidationError::NonPositiveAmount));

    let mut req = request(date(2024, 1, 1), date(2024, 2, 1));
    req.start_date = None;
    assert_eq!(
        expand_budget(&req),
        Err(ValidationError::MissingField("start date"))
    );
}
