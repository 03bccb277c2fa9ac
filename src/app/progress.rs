use std::io::{IsTerminal, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tracing::debug;

const BAR_WIDTH: usize = 30;

/// Single-line cycle counter drawn on stderr.
///
/// Inert when stderr is not a terminal or when disabled by the user; a
/// failed terminal write disables it for the rest of the run.
pub(crate) struct CycleProgress {
    enabled: bool,
    no_color: bool,
    total_cycles: u64,
    style: ProgressStyle,
    drawn: bool,
}

impl CycleProgress {
    pub(crate) fn new(total_cycles: u64, no_progress: bool, no_color: bool) -> Self {
        Self {
            enabled: !no_progress && std::io::stderr().is_terminal(),
            no_color,
            total_cycles,
            style: ProgressStyle::new(BAR_WIDTH),
            drawn: false,
        }
    }

    pub(crate) fn on_cycle_start(&mut self, cycle_number: u64) {
        self.render(cycle_number);
    }

    pub(crate) fn finish(&mut self) {
        if !self.enabled || !self.drawn {
            return;
        }
        self.render(self.total_cycles);
        if let Err(err) = finish_progress_line() {
            debug!("Failed to finish progress line: {}", err);
        }
        self.drawn = false;
    }

    fn render(&mut self, current: u64) {
        if !self.enabled {
            return;
        }
        let line = build_progress_line(&self.style, current, self.total_cycles, self.no_color);
        match render_progress_line(&line, self.no_color) {
            Ok(()) => self.drawn = true,
            Err(err) => {
                debug!("Disabling progress line: {}", err);
                self.enabled = false;
            }
        }
    }
}

fn render_progress_line(line: &[ProgressSegment], no_color: bool) -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for segment in line {
        match segment.color {
            Some(color) if !no_color => {
                queue!(
                    out,
                    SetForegroundColor(color),
                    Print(&segment.text),
                    ResetColor
                )?;
            }
            Some(_) | None => queue!(out, Print(&segment.text))?,
        }
    }
    out.flush()?;
    Ok(())
}

fn finish_progress_line() -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn build_progress_line(
    style: &ProgressStyle,
    current: u64,
    goal: u64,
    no_color: bool,
) -> Vec<ProgressSegment> {
    let size = style.size.max(1);
    let goal = goal.max(1);
    let current = current.min(goal);

    let size_u128 = u128::from(u64::try_from(size).unwrap_or(u64::MAX));
    let scaled = u128::from(current)
        .saturating_mul(size_u128)
        .checked_div(u128::from(goal))
        .unwrap_or(0);
    let complete_size = usize::try_from(scaled).unwrap_or(size).min(size);
    let incomplete_size = size.saturating_sub(complete_size);

    let progress_bar = format!(
        "{}{}{}{}",
        style.begin,
        style.fill.repeat(complete_size),
        style.empty.repeat(incomplete_size),
        style.end
    );
    let count_text = format!(" {}/{} cycles", current, goal);

    if no_color {
        vec![
            ProgressSegment::plain(progress_bar),
            ProgressSegment::plain(count_text),
        ]
    } else {
        vec![
            ProgressSegment::plain(progress_bar),
            ProgressSegment::colored(count_text, Color::Cyan),
        ]
    }
}

struct ProgressStyle {
    size: usize,
    begin: String,
    end: String,
    fill: String,
    empty: String,
}

impl ProgressStyle {
    fn new(size: usize) -> Self {
        Self {
            size,
            begin: "[".to_owned(),
            end: "]".to_owned(),
            fill: "#".to_owned(),
            empty: "-".to_owned(),
        }
    }
}

struct ProgressSegment {
    text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}
