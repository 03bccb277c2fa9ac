use crate::metrics::{CycleStatistics, Report, ResponseCodeHistogram, format_latency};

const PERCENT_DIVISOR: u64 = 100;

/// Success rate in hundredths of a percent.
pub(crate) fn success_rate_x100(success: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = u128::from(success)
        .saturating_mul(10_000)
        .checked_div(u128::from(total))
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

pub(crate) fn summary_lines(report: &Report, per_cycle: bool) -> Vec<String> {
    let rate = success_rate_x100(report.success_count, report.total_requests);
    let mut lines = vec![
        format!("Cycles: {}", report.cycle_details.len()),
        format!("Total Requests: {}", report.total_requests),
        format!(
            "Successful: {} ({}.{:02}%)",
            report.success_count,
            rate.checked_div(PERCENT_DIVISOR).unwrap_or(0),
            rate.checked_rem(PERCENT_DIVISOR).unwrap_or(0)
        ),
        format!("Errors: {}", report.error_count),
        format!(
            "Avg Latency (ok): {}",
            format_latency(report.average_latency)
        ),
        format!(
            "Response Codes: {}",
            format_histogram(&report.response_code_histogram)
        ),
    ];

    if per_cycle {
        lines.push("Per Cycle:".to_owned());
        lines.extend(report.cycle_details.iter().map(cycle_line));
    }
    lines
}

pub(crate) fn print_summary(report: &Report, per_cycle: bool) {
    for line in summary_lines(report, per_cycle) {
        println!("{}", line);
    }
}

fn cycle_line(cycle: &CycleStatistics) -> String {
    format!(
        "  #{}: total={} ok={} errors={} avg={} codes={}",
        cycle.cycle_number,
        cycle.total_requests,
        cycle.success_count,
        cycle.error_count,
        format_latency(cycle.average_latency),
        format_histogram(&cycle.response_code_histogram)
    )
}

fn format_histogram(histogram: &ResponseCodeHistogram) -> String {
    if histogram.is_empty() {
        return "none".to_owned();
    }
    histogram
        .iter()
        .map(|(code, count)| format!("{}={}", code, count))
        .collect::<Vec<_>>()
        .join(", ")
}
