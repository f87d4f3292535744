use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{Report, report};
use crate::db::queries::{load_all, load_between};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date;
use crate::utils::format_money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analytics { period, json } = cmd {
        let pool = open_pool(cfg)?;

        let rows = match period {
            Some(p) => {
                let (from, to) = date::period_bounds(p)?;
                load_between(&pool.conn, from, to)?
            }
            None => load_all(&pool.conn)?,
        };

        let rep = report(&rows);

        if *json {
            println!("{}", serde_json::to_string_pretty(&rep)?);
            return Ok(());
        }

        if rows.is_empty() {
            info("No disruptions recorded yet.");
            return Ok(());
        }

        print_report(&rep);
    }

    Ok(())
}

fn print_report(rep: &Report) {
    let s = &rep.summary;

    header("Summary");
    println!("{CYAN}Total disruptions:{RESET} {}", s.total);
    println!(
        "{CYAN}Full day:{RESET}          {}% ({} full day, {} partial)",
        s.full_day_pct, s.full_day, s.partial_day
    );
    println!(
        "{CYAN}Refunds:{RESET}           {}% ({} out of {} disruptions)",
        s.refund_pct, s.refund_count, s.total
    );
    println!("{CYAN}Total refunds:{RESET}     €{}", format_money(s.total_refunds));
    println!("{CYAN}Average refund:{RESET}    €{}", format_money(s.average_refund));
    println!();

    header("Monthly");
    let mut t = Table::new(vec![Column::auto("Month"), Column::auto("Count")]);
    for b in &rep.monthly {
        t.add_row(vec![b.label.clone(), b.count.to_string()]);
    }
    println!("{}", t.render());

    header("Yearly");
    let mut t = Table::new(vec![
        Column::auto("Year"),
        Column::auto("Count"),
        Column::auto("Refunds"),
    ]);
    for y in &rep.yearly {
        t.add_row(vec![
            y.year.to_string(),
            y.count.to_string(),
            format!("€{}", format_money(y.refunds)),
        ]);
    }
    println!("{}", t.render());

    header("Reasons");
    let mut t = Table::new(vec![Column::auto("Reason"), Column::auto("Count")]);
    for b in &rep.reasons {
        t.add_row(vec![b.label.clone(), b.count.to_string()]);
    }
    println!("{}", t.render());
}
