use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use scriptline_engine::{DocumentSettings, LineKind, Screenplay};

/// Left margin for each kind, roughly following a printed page.
fn indent(kind: LineKind) -> usize {
    match kind {
        LineKind::Character | LineKind::DualDialogueCharacter => 20,
        LineKind::Parenthetical | LineKind::DualDialogueParenthetical => 15,
        LineKind::Dialogue | LineKind::DualDialogue | LineKind::Lyrics => 10,
        LineKind::Transition => 40,
        LineKind::Centered => 25,
        _ => 0,
    }
}

fn kind_style(kind: LineKind) -> Style {
    let style = Style::default();
    match kind {
        LineKind::Heading => style.fg(Color::Yellow).add_modifier(Modifier::BOLD),
        LineKind::Section => style.fg(Color::Magenta).add_modifier(Modifier::BOLD),
        LineKind::Synopsis => style.fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        LineKind::Transition => style.fg(Color::Cyan),
        LineKind::Lyrics => style.add_modifier(Modifier::ITALIC),
        LineKind::PageBreak => style.fg(Color::DarkGray),
        k if k.is_character() => style.fg(Color::Green).add_modifier(Modifier::BOLD),
        k if k.is_parenthetical() => style.fg(Color::Gray),
        k if k.is_title_page() => style.fg(Color::Blue),
        _ => style,
    }
}

/// The screenplay as styled, indented terminal lines.
pub fn script_lines(script: &Screenplay, settings: &DocumentSettings) -> Vec<Line<'static>> {
    script
        .lines()
        .iter()
        .map(|line| {
            let mut spans = vec![Span::raw(" ".repeat(indent(line.kind)))];
            if settings.print_scene_numbers()
                && let Some(number) = &line.scene_number
            {
                spans.push(Span::styled(
                    format!("{number:>4} "),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            spans.push(Span::styled(
                line.text.trim().to_string(),
                kind_style(line.kind),
            ));
            Line::from(spans)
        })
        .collect()
}

/// Outline rows: headings with their number, sections indented by depth,
/// synopses as dimmed notes.
pub fn outline_rows(script: &Screenplay) -> Vec<String> {
    script
        .outline()
        .map(|line| match line.kind {
            LineKind::Heading => match &line.scene_number {
                Some(number) => format!("{number}. {}", line.trimmed()),
                None => line.trimmed().to_string(),
            },
            LineKind::Section => {
                let depth = line.trimmed().chars().take_while(|c| *c == '#').count();
                let title = line.trimmed().trim_start_matches('#').trim();
                format!("{}{title}", "  ".repeat(depth.saturating_sub(1)))
            }
            _ => format!("  = {}", line.trimmed().trim_start_matches('=').trim()),
        })
        .collect()
}
