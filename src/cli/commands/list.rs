use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::db::queries::{load_all, load_between};
use crate::errors::AppResult;
use crate::models::Disruption;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_kind, colorize_optional};
use crate::utils::date;
use crate::utils::format_money;
use crate::utils::table::{Column, Table};

const REASON_WRAP: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        active,
        all,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;

        let (rows, label) = if *active {
            let state = AppState::load(&mut pool)?;
            let today = date::today();
            let rows: Vec<Disruption> = state.active(today).into_iter().cloned().collect();
            (rows, format!("active from {today}"))
        } else if *all {
            (load_all(&pool.conn)?, "all".to_string())
        } else {
            let (from, to) = match period {
                Some(p) => date::period_bounds(p)?,
                None => date::current_month_bounds()?,
            };
            (load_between(&pool.conn, from, to)?, format!("{from} → {to}"))
        };

        if rows.is_empty() {
            info(format!("No disruptions ({label})."));
            return Ok(());
        }

        println!("📅 Disruptions ({label}):\n");
        print!("{}", render_table(&rows));
    }

    Ok(())
}

fn render_table(rows: &[Disruption]) -> String {
    let mut table = Table::new(vec![
        Column::auto("ID"),
        Column::auto("Date"),
        Column::auto("Time"),
        Column::auto("Reason"),
        Column::auto("Refund"),
        Column::auto("Created by"),
    ]);

    for d in rows {
        let wrapped = textwrap::wrap(&d.reason, REASON_WRAP);
        let time = format!("{}{}{}", color_for_kind(d.is_full_day), d.time_label(), RESET);
        let refund = if d.refund_provided {
            format_money(d.refund_amount)
        } else {
            "--".to_string()
        };
        let by = d.created_by_email.clone().unwrap_or_else(|| "--".to_string());

        for (i, line) in wrapped.iter().enumerate() {
            if i == 0 {
                table.add_row(vec![
                    d.id.to_string(),
                    d.date_str(),
                    time.clone(),
                    line.to_string(),
                    colorize_optional(&refund),
                    colorize_optional(&by),
                ]);
            } else {
                table.add_row(vec![
                    String::new(),
                    String::new(),
                    String::new(),
                    line.to_string(),
                    String::new(),
                    String::new(),
                ]);
            }
        }
    }

    table.render()
}
