use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::model::Record;
use crate::organizer::{Category, OrganizeReport};
use colored::Colorize;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 100;

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn write_error<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write_messages(out, &[CmdMessage::error(text)])
}

/// Messages first, then listed records, then the organizer report if any.
pub fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    write_messages(out, &result.messages)?;
    write_pages(out, &result.pages)?;
    if let Some(report) = &result.report {
        write_report(out, report)?;
    }
    Ok(())
}

/// Numbered records. Multiple pages are separated by a rule with a page
/// counter.
pub fn write_pages<W: Write>(out: &mut W, pages: &[Vec<Record>]) -> io::Result<()> {
    let total: usize = pages.iter().map(Vec::len).sum();
    let index_width = total.to_string().len();
    let mut index = 0;

    for (page_no, page) in pages.iter().enumerate() {
        let lines: Vec<String> = page.iter().map(Record::to_string).collect();
        if pages.len() > 1 {
            let label = format!(" page {}/{} ", page_no + 1, pages.len());
            let rule_width = lines
                .iter()
                .map(|l| l.width() + index_width + 2)
                .max()
                .unwrap_or(0)
                .clamp(label.width(), LINE_WIDTH);
            let fill = "─".repeat(rule_width.saturating_sub(label.width()));
            writeln!(out, "{}{}", label.dimmed(), fill.dimmed())?;
        }
        for line in &lines {
            index += 1;
            writeln!(
                out,
                "{}{}",
                format!("{:>width$}. ", index, width = index_width).yellow(),
                line
            )?;
        }
    }
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, report: &OrganizeReport) -> io::Result<()> {
    let label_width = Category::all()
        .iter()
        .map(|c| c.folder().width())
        .max()
        .unwrap_or(0);

    for &category in Category::all() {
        let files = report.files_in(category);
        if files.is_empty() {
            continue;
        }
        writeln!(
            out,
            "{:<width$}  {}",
            category.folder().bold(),
            files.join(", "),
            width = label_width
        )?;
    }
    if !report.unknown_files.is_empty() {
        writeln!(
            out,
            "{:<width$}  {}",
            "unknown".bold(),
            report.unknown_files.join(", "),
            width = label_width
        )?;
    }
    writeln!(out, "Known extensions: {}", join_set(&report.known_extensions))?;
    writeln!(out, "Unknown extensions: {}", join_set(&report.unknown_extensions))?;
    if report.removed_dirs > 0 {
        writeln!(
            out,
            "{}",
            format!("Removed {} empty folders", report.removed_dirs).dimmed()
        )?;
    }
    Ok(())
}

fn join_set(set: &std::collections::BTreeSet<String>) -> String {
    if set.is_empty() {
        "-".to_string()
    } else {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
