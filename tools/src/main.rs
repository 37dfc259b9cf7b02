//! premium-runner: headless roster calculator.
//!
//! Usage:
//!   premium-runner --roster roster.json --pool 500000 --period 2026-10
//!   premium-runner --data-dir ./data --statements
//!   premium-runner --ipc-mode

use anyhow::Result;
use premium_core::{
    command::RosterCommand,
    config::PremiumConfig,
    desk::PremiumDesk,
    format::{format_currency, format_number},
    input::EmployeeField,
    roster::EmployeeInput,
    types::EmployeeId,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Command {
        command: RosterCommand,
    },
    /// Raw field edit from a form; the value is coerced at this boundary.
    Edit {
        id: EmployeeId,
        field: EmployeeField,
        value: String,
    },
    Statement {
        id: EmployeeId,
    },
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let print_statements = args.iter().any(|a| a == "--statements");
    let data_dir = find_arg(&args, "--data-dir");
    let roster_path = find_arg(&args, "--roster");
    let period = find_arg(&args, "--period")
        .map(str::to_string)
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m").to_string());

    let config = match data_dir {
        Some(dir) => PremiumConfig::load(dir)?,
        None => PremiumConfig::standard(),
    };
    let pool = parse_arg(&args, "--pool", config.defaults.initial_pool_collection);

    let employees: Vec<EmployeeInput> = match roster_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
            serde_json::from_str(&content)?
        }
        None => Vec::new(),
    };

    let mut desk = PremiumDesk::with_roster(config, period, employees, pool)?;

    if ipc_mode {
        run_ipc_loop(&mut desk)?;
    } else {
        print_summary(&desk);
        if print_statements {
            for employee in desk.employees() {
                let statement = desk.statement(&employee.id)?;
                println!();
                println!("# {}", statement.file_name());
                print!("{}", statement.render());
            }
        }
    }

    Ok(())
}

fn run_ipc_loop(desk: &mut PremiumDesk) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Rejected IPC line: {e}");
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {
                writeln!(stdout, "{}", serde_json::to_string(&desk.snapshot())?)?;
            }
            IpcCommand::Command { command } => apply_and_report(desk, &mut stdout, command)?,
            IpcCommand::Edit { id, field, value } => {
                let command = RosterCommand::UpdateEmployee {
                    id,
                    update: field.parse_update(&value),
                };
                apply_and_report(desk, &mut stdout, command)?;
            }
            IpcCommand::Statement { id } => match desk.statement(&id) {
                Ok(statement) => writeln!(stdout, "{}", serde_json::to_string(&statement)?)?,
                Err(e) => write_error(&mut stdout, &e.to_string())?,
            },
        }
        stdout.flush()?;
    }
    Ok(())
}

fn apply_and_report(
    desk: &mut PremiumDesk,
    stdout: &mut io::Stdout,
    command: RosterCommand,
) -> Result<()> {
    match desk.apply(command) {
        Ok(()) => writeln!(stdout, "{}", serde_json::to_string(&desk.snapshot())?)?,
        Err(e) => write_error(stdout, &e.to_string())?,
    }
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn print_summary(desk: &PremiumDesk) {
    let snapshot = desk.snapshot();

    println!("=== PREMIUM SUMMARY ({}) ===", snapshot.period);
    println!("  employees:       {}", snapshot.employees.len());
    println!("  pool collection: {}", format_currency(snapshot.pool_collection));
    println!("  pool amount:     {}", format_currency(snapshot.totals.pool_amount));
    println!("  score total:     {}", format_number(snapshot.totals.total_all_scores));
    println!("  total payout:    {}", format_currency(snapshot.totals.payout));

    println!();
    println!("=== EMPLOYEES ===");
    for e in &snapshot.employees {
        println!(
            "  {} | Real: %{} | Primary: {} | Pool: {} | Subtotal: {} | Tenure: {} | Total: {}",
            e.input.name,
            format_number(e.primary.realization_percent),
            format_currency(e.primary.premium),
            format_currency(e.pool_share),
            format_currency(e.subtotal),
            format_currency(e.tenure_bonus),
            format_currency(e.final_total),
        );
    }
}

fn find_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
