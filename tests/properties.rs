//! Property tests for the payroll calculations and pipeline.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    DeductionKind, EMPLOYMENT_INSURANCE, PARENTAL_PLAN, PENSION_PLAN, calculate_deductions,
    federal_tax, provincial_tax, round2,
};
use payroll_engine::config::PayrollConfig;
use payroll_engine::models::{RejectedLine, ReportRow};
use payroll_engine::pipeline::{PayrollPipeline, ReaderSource};
use payroll_engine::validation::validate_record;

/// Whole cents between `lo` and `hi` dollars.
fn cents(lo: i64, hi: i64) -> impl Strategy<Value = Decimal> {
    (lo * 100..=hi * 100).prop_map(|c| Decimal::new(c, 2))
}

fn run(input: &str) -> (Vec<ReportRow>, Vec<RejectedLine>, usize) {
    let mut source = ReaderSource::new(input.as_bytes());
    let mut rows: Vec<ReportRow> = Vec::new();
    let mut rejected: Vec<RejectedLine> = Vec::new();
    let summary = PayrollPipeline::new(&PayrollConfig::default())
        .run(&mut source, &mut rows, &mut rejected)
        .unwrap();
    (rows, rejected, summary.blank_lines_skipped)
}

/// Terminates every line, so a trailing blank line is still read.
fn to_input(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..10_000, cents(0, 80), cents(0, 200))
            .prop_map(|(id, hours, rate)| format!("{} First Last {} {}", id, hours, rate)),
        "[ \t]{0,4}".prop_map(|s| s),
        "[a-z0-9 .-]{1,20}".prop_map(|s| s),
    ]
}

proptest! {
    #[test]
    fn gross_income_is_rounded_annual_pay(hours in cents(0, 100), rate in cents(16, 500)) {
        let line = format!("1 A B {} {}", hours, rate);
        let record = validate_record(&line, Decimal::new(1575, 2)).unwrap();
        prop_assert_eq!(record.gross_income(), round2(Decimal::from(52) * rate * hours));
    }

    #[test]
    fn capped_rates_are_monotone_then_constant(a in cents(0, 200_000), b in cents(0, 200_000)) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for schedule in [EMPLOYMENT_INSURANCE, PARENTAL_PLAN, PENSION_PLAN] {
            prop_assert!(schedule.apply(lo) <= schedule.apply(hi));
            if lo >= schedule.ceiling {
                prop_assert_eq!(schedule.apply(lo), schedule.maximum);
            }
        }
    }

    #[test]
    fn federal_tax_is_monotone_within_covered_ranges(a in cents(0, 114_750), b in cents(0, 114_750)) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(federal_tax(lo) <= federal_tax(hi));
    }

    #[test]
    fn federal_tax_is_monotone_above_the_gaps(a in cents(177_884, 400_000), b in cents(177_884, 400_000)) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(federal_tax(lo) <= federal_tax(hi));
    }

    #[test]
    fn provincial_tax_is_monotone_above_the_low_income_range(
        a in cents(18_572, 400_000),
        b in cents(18_572, 400_000),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(provincial_tax(lo) <= provincial_tax(hi));
    }

    #[test]
    fn totals_are_rounded_sums(gross in cents(0, 400_000)) {
        let result = calculate_deductions(gross);
        let sum: Decimal = DeductionKind::ALL.iter().map(|k| k.calculate(gross)).sum();

        prop_assert_eq!(result.total_deductions, round2(sum));
        prop_assert_eq!(result.net_income, round2(gross - result.total_deductions));
    }

    #[test]
    fn reruns_are_identical(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let input = to_input(&lines);
        prop_assert_eq!(run(&input), run(&input));
    }

    #[test]
    fn blank_lines_are_never_counted(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let input = to_input(&lines);
        let (rows, rejected, blank) = run(&input);
        let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();

        prop_assert_eq!(rows.len() + rejected.len(), non_blank);
        prop_assert_eq!(blank, lines.len() - non_blank);
        prop_assert!(rejected.iter().all(|r| !r.text.trim().is_empty()));
    }
}
