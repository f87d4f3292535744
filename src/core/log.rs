use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const OP_COLUMN_MAX: usize = 60;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "widget" => Colour::Cyan,
        "export" | "social" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `op (target)`, truncated to the column width on a char boundary.
fn op_target_label(e: &LogEntry) -> (String, String) {
    let rest = if e.target.is_empty() {
        String::new()
    } else {
        format!(" ({})", e.target)
    };

    let visible_len = e.operation.chars().count() + rest.chars().count();
    if visible_len <= OP_COLUMN_MAX {
        return (e.operation.clone(), rest);
    }

    let keep = OP_COLUMN_MAX.saturating_sub(3 + e.operation.chars().count());
    let mut cut: String = rest.chars().take(keep).collect();
    cut.push_str("...");
    (e.operation.clone(), cut)
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<(String, String)> = entries.iter().map(op_target_label).collect();
        let dates: Vec<String> = entries.iter().map(|e| display_date(&e.date)).collect();

        let op_w = labels
            .iter()
            .map(|(op, rest)| op.chars().count() + rest.chars().count())
            .max()
            .unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = dates.iter().map(String::len).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for ((e, (op, rest)), date) in entries.iter().zip(&labels).zip(&dates) {
            let colored = color_for_operation(&e.operation).paint(op.as_str());
            let padding = " ".repeat(op_w.saturating_sub(op.chars().count() + rest.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                e.id, date, colored, rest, padding, e.message,
            );
        }

        Ok(())
    }
}
