use std::time::Duration;

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Target whose events the formatter writes verbatim.
pub const PRINT_TARGET: &str = "nimbus::print";

pub fn print(msg: &str) {
    info!(target: "nimbus::print", raw_msg = msg);
}

pub fn banner(no_banner: bool, q_level: u8) {
    if no_banner || q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ NIMBUS v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn status<T: AsRef<str>>(msg: T, q_level: u8) {
    if q_level > 1 {
        return;
    }
    let prefix: ColoredString = "[*]".color(colors::ACCENT).bold();
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

pub fn success<T: AsRef<str>>(msg: T, q_level: u8) {
    if q_level > 1 {
        return;
    }
    let prefix: ColoredString = "[+]".green().bold();
    print(&format!("{} {}", prefix, msg.as_ref()));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

pub fn summary(found: usize, total: usize, elapsed: Duration, q_level: u8) {
    if q_level > 1 {
        return;
    }

    let found: ColoredString = format!("{found} cloud-hosted").bold().green();
    let total: ColoredString = format!("{total} names").bold();
    let elapsed: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();
    let output: String = format!("Check complete: {found} out of {total} in {elapsed}");

    match q_level {
        0 => {
            fat_separator();
            centerln(&output);
        }
        _ => success(output, q_level),
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}", space, msg));
}

pub fn no_results(q_level: u8) {
    if q_level > 1 {
        return;
    }
    print(&format!(
        "{}",
        "No subdomains pointing to cloud services were found.".red().bold()
    ));
}
