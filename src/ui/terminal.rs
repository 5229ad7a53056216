//! Terminal front end: plain-text rendering of the view state and
//! stdin/stdout dialogs for the CLI binary.

use std::io::{self, BufRead, Write};

use super::{Dialogs, Dropdown, TableBody};

/// stdout 알림 + stdin `y/N` 확인
pub struct TerminalDialogs {
    /// `--yes`: 확인 없이 진행
    assume_yes: bool,
}

impl TerminalDialogs {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Dialogs for TerminalDialogs {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            println!("{} [y/N] y", message);
            return true;
        }

        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                tracing::warn!("Failed to read confirmation: {}", err);
                false
            }
        }
    }

    fn navigate(&self, path: &str) {
        println!("-> {}", path);
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// 드롭다운 옵션 목록 (선택된 항목은 `*`)
pub fn render_dropdown(dropdown: &Dropdown) -> String {
    dropdown
        .options()
        .iter()
        .map(|option| {
            let marker = if option.value == dropdown.value() { '*' } else { ' ' };
            if option.value.is_empty() {
                format!("{} {}", marker, option.label)
            } else {
                format!("{} [{}] {}", marker, option.value, option.label)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const HEADERS: [&str; 6] = ["Name", "Type", "Rate Limit", "Remote Address", "Price", "Actions"];

/// 프로필 테이블
pub fn render_table(body: &TableBody) -> String {
    let rows: Vec<[String; 6]> = match body {
        TableBody::Loading => return TableBody::LOADING_TEXT.to_string(),
        TableBody::Empty => return TableBody::EMPTY_TEXT.to_string(),
        TableBody::Error(message) => return message.clone(),
        TableBody::Rows(rows) => rows
            .iter()
            .map(|row| {
                [
                    format!("{} ({})", row.name, row.router_id),
                    row.type_badge.clone(),
                    row.rate_limit.clone(),
                    row.remote_address.clone(),
                    row.price.clone(),
                    row.actions
                        .iter()
                        .map(|a| format!("{} {}", a.title(), a.profile_id()))
                        .collect::<Vec<_>>()
                        .join(" | "),
                ]
            })
            .collect(),
    };

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header = HEADERS.map(str::to_string);
    let mut lines = vec![format_line(&header[..])];
    lines.push(widths.map(|w| "-".repeat(w)).join("  "));
    lines.extend(rows.iter().map(|row| format_line(&row[..])));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{ProfileRow, RowAction, SelectOption};

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }

    #[test]
    fn test_render_dropdown_marks_selection() {
        let mut dropdown = Dropdown::with_placeholder("Select Router");
        dropdown.append([SelectOption::new("r1", "Core (10.0.0.1)")]);
        dropdown.select("r1");

        assert_eq!(
            render_dropdown(&dropdown),
            "  Select Router\n* [r1] Core (10.0.0.1)"
        );
    }

    #[test]
    fn test_render_table_states() {
        assert_eq!(render_table(&TableBody::Loading), "Loading...");
        assert_eq!(render_table(&TableBody::Empty), "No profiles found.");
        assert_eq!(
            render_table(&TableBody::Error("Failed to load profiles".to_string())),
            "Failed to load profiles"
        );
    }

    #[test]
    fn test_render_table_rows() {
        let body = TableBody::Rows(vec![ProfileRow {
            name: "Basic".to_string(),
            router_id: "r1".to_string(),
            type_badge: "PPPOE".to_string(),
            rate_limit: "1M / Unlim".to_string(),
            remote_address: "-".to_string(),
            price: "Rp 150,000".to_string(),
            actions: [RowAction::Sync("p1".to_string()), RowAction::Delete("p1".to_string())],
        }]);

        let out = render_table(&body);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[2].contains("Basic (r1)"));
        assert!(lines[2].contains("Rp 150,000"));
        assert!(lines[2].ends_with("Sync to MikroTik p1 | Delete p1"));
    }
}
