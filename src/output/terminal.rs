//! Terminal rendering of the summary block and warnings.

use std::fmt::Write as _;

use colored::Colorize;

use crate::analysis::{CorrelationAnalysis, Warning};
use crate::constants::SUMMARY_DIGITS;

/// Render the fixed summary block printed to stdout.
///
/// Layout and labels are stable: a blank line, eight labelled rows
/// (Average, N, Neff, Variance, Error, T corr, Neff, Error), a blank
/// line. Numbers carry [`SUMMARY_DIGITS`] significant digits with
/// trailing zeros trimmed. The second Neff/Error pair is corrected for
/// serial correlation; the first is not.
pub fn format_summary(analysis: &CorrelationAnalysis) -> String {
    let sig = |x: f64| format_sig(x, SUMMARY_DIGITS);
    let mut out = String::new();

    writeln!(out).unwrap();
    writeln!(out, "  Average  :  {}", sig(analysis.mean)).unwrap();
    writeln!(out, "  N        :  {}", sig(analysis.count as f64)).unwrap();
    writeln!(out, "  Neff     :  {}", sig(analysis.effective_count)).unwrap();
    writeln!(out, "  Variance :  {}", sig(analysis.variance)).unwrap();
    writeln!(out, "  Error    :  {}", sig(analysis.std_dev)).unwrap();
    writeln!(out, "  T corr   :  {}", sig(analysis.integrated_time)).unwrap();
    writeln!(out, "  Neff     :  {}", sig(analysis.corrected_effective_count)).unwrap();
    writeln!(out, "  Error    :  {}", sig(analysis.corrected_error)).unwrap();
    writeln!(out).unwrap();

    out
}

/// Render accumulated warnings for stderr, one bullet per warning.
pub fn format_warnings(warnings: &[Warning]) -> String {
    let mut out = String::new();
    writeln!(out, "  {} Analysis Notes:", "\u{26A0}".yellow()).unwrap();
    for warning in warnings {
        writeln!(out, "    \u{2022} {}", warning).unwrap();
    }
    out
}

/// Format a number with the given significant digits, trimming trailing
/// zeros, switching to scientific notation outside `[1e-4, 10^digits)`.
fn format_sig(x: f64, digits: usize) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let exponent = x.abs().log10().floor() as i32;

    if exponent < -4 || exponent >= digits as i32 {
        let formatted = format!("{:.*e}", digits - 1, x);
        match formatted.split_once('e') {
            Some((mantissa, exp)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{}e{}", mantissa, exp)
            }
            None => formatted,
        }
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let formatted = format!("{:.*}", decimals, x);
        if formatted.contains('.') {
            formatted
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            formatted
        }
    }
}
